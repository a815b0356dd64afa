//! Combat resolution.
//!
//! Resolves a strike between an attacking and a defending rank into an
//! outcome. Pure function of the two ranks; lifecycle transitions are
//! applied by the session.

use serde::{Deserialize, Serialize};

use crate::board::Rank;

/// The result of a strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    AttackerWins,
    DefenderWins,
    BothDie,
    /// The defender was the Flag; the attacking side wins the game.
    FlagCaptured,
}

/// Resolves a strike.
///
/// Rule order matters: equal ranks die together before any special case,
/// numeric ranks compare by strength (lower value wins), a Bomb stops
/// everything but a Miner, striking the Flag ends the game, a defending
/// Spy always loses, and an attacking Spy defeats only the Marshal.
///
/// The attacker is never a Bomb or Flag; those ranks cannot move.
pub fn resolve(attacker: Rank, defender: Rank) -> Outcome {
    if attacker == defender {
        return Outcome::BothDie;
    }

    if let (Some(att), Some(def)) = (attacker.value(), defender.value()) {
        return if att < def {
            Outcome::AttackerWins
        } else {
            Outcome::DefenderWins
        };
    }

    match defender {
        Rank::Bomb => {
            if attacker == Rank::Miner {
                Outcome::AttackerWins
            } else {
                Outcome::DefenderWins
            }
        }
        Rank::Flag => Outcome::FlagCaptured,
        Rank::Spy => Outcome::AttackerWins,
        // Defender is numeric, so the attacker must be the Spy, which
        // only defeats the Marshal.
        _ => {
            if defender == Rank::Marshal {
                Outcome::AttackerWins
            } else {
                Outcome::DefenderWins
            }
        }
    }
}
