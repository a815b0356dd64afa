//! Rules-compliance tests driving the engine library end to end.
//!
//! Covers the documented combat table, the Scout's slide, the
//! forbidden-square rule, the roster invariant, and a full game played
//! through `GameSession` to flag capture.

use fieldmarshal::board::{Coord, PieceId, Rank, Roster, Side, ALL_RANKS};
use fieldmarshal::movegen::legal_destinations;
use fieldmarshal::resolve::{resolve, Outcome};
use fieldmarshal::session::{GamePhase, GameSession};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn coord(x: u8, y: u8) -> Coord {
    Coord::new(x, y).unwrap()
}

/// Builds a session with both sides placed deterministically: arena
/// order onto the column-major starting squares, then setup finished.
///
/// Red's front row is row 7, Blue's is row 4. Notable squares: Red's Spy
/// (arena index 32) lands on (9,7) and Blue's Flag (index 39) on (10,4).
fn ready_session() -> GameSession {
    let mut session = GameSession::new_game();
    for side in [Side::Red, Side::Blue] {
        let squares = session.board().starting_squares(side.home_half());
        for (i, square) in squares.iter().enumerate() {
            session
                .place_piece(side, PieceId(i as u8), *square)
                .unwrap();
        }
    }
    session.finish_setup().unwrap();
    session
}

/// Applies a move for the piece currently on `from`, panicking on any
/// rejection.
fn step(session: &mut GameSession, side: Side, from: (u8, u8), to: (u8, u8)) {
    let id = session
        .roster(side)
        .piece_at(coord(from.0, from.1))
        .unwrap_or_else(|| panic!("no {} piece at {:?}", side, from))
        .id;
    session.apply_move(side, id, coord(to.0, to.1)).unwrap();
}

// ---------------------------------------------------------------------------
// Combat table
// ---------------------------------------------------------------------------

#[test]
fn marshal_versus_general_both_directions() {
    assert_eq!(resolve(Rank::Marshal, Rank::General), Outcome::AttackerWins);
    assert_eq!(resolve(Rank::General, Rank::Marshal), Outcome::DefenderWins);
}

#[test]
fn combat_table_special_cases() {
    assert_eq!(resolve(Rank::Miner, Rank::Bomb), Outcome::AttackerWins);
    assert_eq!(resolve(Rank::Scout, Rank::Bomb), Outcome::DefenderWins);
    assert_eq!(resolve(Rank::Spy, Rank::Marshal), Outcome::AttackerWins);
    assert_eq!(resolve(Rank::Spy, Rank::General), Outcome::DefenderWins);
    assert_eq!(resolve(Rank::Marshal, Rank::Spy), Outcome::AttackerWins);
    assert_eq!(resolve(Rank::Captain, Rank::Flag), Outcome::FlagCaptured);
}

#[test]
fn every_equal_strike_kills_both() {
    for rank in ALL_RANKS {
        if rank.is_movable() {
            assert_eq!(resolve(rank, rank), Outcome::BothDie);
        }
    }
}

// ---------------------------------------------------------------------------
// Scout slide on an open row
// ---------------------------------------------------------------------------

#[test]
fn scout_slide_ends_on_first_enemy() {
    use fieldmarshal::board::Board;

    let board = Board::new();
    let mut red = Roster::new(Side::Red);
    let mut blue = Roster::new(Side::Blue);
    // Arena index 24 is the first Scout, 19 the first Miner.
    red.place(PieceId(24), coord(5, 1)).unwrap();
    blue.place(PieceId(19), coord(9, 1)).unwrap();

    let scout = *red.piece(PieceId(24)).unwrap();
    let dests = legal_destinations(&scout, &red, &blue, &board, None).unwrap();

    // Eastward: every open square up to and including the Miner's.
    for x in 6..=9 {
        assert!(dests.contains(&coord(x, 1)), "missing ({}, 1)", x);
    }
    // Nothing beyond the strike square.
    assert!(!dests.contains(&coord(10, 1)));
}

// ---------------------------------------------------------------------------
// Roster invariant
// ---------------------------------------------------------------------------

#[test]
fn completed_setup_matches_fixed_multiset() {
    let session = ready_session();
    for side in [Side::Red, Side::Blue] {
        let roster = session.roster(side);
        assert_eq!(roster.active_pieces().count(), 40);
        for rank in ALL_RANKS {
            assert_eq!(roster.rank_count(rank), rank.count(), "{}", rank.name());
        }
    }
}

// ---------------------------------------------------------------------------
// Forbidden square, through the session
// ---------------------------------------------------------------------------

#[test]
fn two_square_rule_applies_through_full_session() {
    let mut session = ready_session();

    step(&mut session, Side::Red, (1, 7), (1, 6));
    step(&mut session, Side::Blue, (1, 4), (1, 5));
    step(&mut session, Side::Red, (1, 6), (1, 7));
    step(&mut session, Side::Blue, (1, 5), (1, 4));

    let red_piece = session.roster(Side::Red).piece_at(coord(1, 7)).unwrap().id;
    let dests = session.legal_destinations(Side::Red, red_piece).unwrap();
    assert!(!dests.contains(&coord(1, 6)), "third reversal must be barred");
}

// ---------------------------------------------------------------------------
// Full game to flag capture
// ---------------------------------------------------------------------------

#[test]
fn spy_march_captures_the_flag() {
    let mut session = ready_session();

    // Red's Spy starts on (9,7); Blue's Flag sits on (10,4) behind its
    // bombs, but (10,5) is open. Blue walks a Colonel up and down the
    // first file in the meantime.
    step(&mut session, Side::Red, (9, 7), (9, 6));
    step(&mut session, Side::Blue, (1, 4), (1, 5));
    step(&mut session, Side::Red, (9, 6), (9, 5));
    step(&mut session, Side::Blue, (1, 5), (1, 6));
    step(&mut session, Side::Red, (9, 5), (10, 5));
    step(&mut session, Side::Blue, (1, 6), (1, 5));

    let spy = session.roster(Side::Red).piece_at(coord(10, 5)).unwrap().id;
    let applied = session.apply_move(Side::Red, spy, coord(10, 4)).unwrap();

    let strike = applied.strike.expect("flag strike expected");
    assert_eq!(strike.attacker, Rank::Spy);
    assert_eq!(strike.defender, Rank::Flag);
    assert_eq!(strike.outcome, Outcome::FlagCaptured);
    assert_eq!(session.current_phase(), GamePhase::Finished);
    assert_eq!(session.winner(), Some(Side::Red));

    // Game over: no further moves are accepted.
    let blue_piece = session.roster(Side::Blue).piece_at(coord(1, 5)).unwrap().id;
    assert!(session
        .apply_move(Side::Blue, blue_piece, coord(1, 6))
        .is_err());
}

// ---------------------------------------------------------------------------
// Engine output is transportable
// ---------------------------------------------------------------------------

#[test]
fn applied_move_serializes_for_the_ui_layer() {
    let mut session = ready_session();
    let id = session.roster(Side::Red).piece_at(coord(1, 7)).unwrap().id;
    let applied = session.apply_move(Side::Red, id, coord(1, 6)).unwrap();

    let value = serde_json::to_value(applied).unwrap();
    assert_eq!(value["record"]["from"]["y"], 7);
    assert_eq!(value["record"]["to"]["y"], 6);
    assert!(value["strike"].is_null());
    assert_eq!(value["phase"], "InPlay");
    assert!(value["winner"].is_null());
}
