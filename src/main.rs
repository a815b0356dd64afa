//! Fieldmarshal -- a Stratego rules engine with a text interface.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! It is a thin driver over the engine library; all rules live there.

use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use fieldmarshal::board::{Coord, Side, ALL_SIDES, BOARD_SIZE};
use fieldmarshal::protocol::{format_coord, format_move, parse_command, Command};
use fieldmarshal::resolve::Outcome;
use fieldmarshal::session::{GamePhase, GameSession, MoveApplied};

/// Runs the main command loop, reading from stdin and writing to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut session = GameSession::new_game();
    let mut rng = SmallRng::from_entropy();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::NewGame => {
                session = GameSession::new_game();
                writeln!(out, "newgame ok").unwrap();
            }
            Command::AutoSetup => {
                let result = ALL_SIDES
                    .iter()
                    .try_for_each(|&side| session.random_setup(side, &mut rng));
                match result {
                    Ok(()) => writeln!(out, "setup complete").unwrap(),
                    Err(e) => eprintln!("{}", e),
                }
            }
            Command::Swap { a, b } => handle_swap(&mut session, a, b, &mut out),
            Command::Ready => match session.finish_setup() {
                Ok(()) => {
                    writeln!(out, "play begins, {} to move", session.active_side()).unwrap();
                }
                Err(e) => eprintln!("{}", e),
            },
            Command::Legal { at } => handle_legal(&session, at, &mut out),
            Command::Move { from, to } => handle_move(&mut session, from, to, &mut out),
            Command::Show => {
                write!(out, "{}", render_board(&session)).unwrap();
            }
            Command::Phase => handle_phase(&session, &mut out),
            Command::Quit => break,
        }
        out.flush().unwrap();
    }
}

/// Returns the side owning the active piece at a square, if any.
fn side_at(session: &GameSession, coord: Coord) -> Option<Side> {
    ALL_SIDES
        .into_iter()
        .find(|&side| session.roster(side).is_occupied(coord))
}

/// Handles `swap <square> <square>`.
fn handle_swap<W: Write>(session: &mut GameSession, a: Coord, b: Coord, out: &mut W) {
    let (side_a, side_b) = (side_at(session, a), side_at(session, b));
    let side = match (side_a, side_b) {
        (Some(sa), Some(sb)) if sa == sb => sa,
        _ => {
            eprintln!("swap needs two pieces of the same side");
            return;
        }
    };
    // Occupancy was just checked, so both lookups succeed.
    let id_a = match session.roster(side).piece_at(a) {
        Some(p) => p.id,
        None => return,
    };
    let id_b = match session.roster(side).piece_at(b) {
        Some(p) => p.id,
        None => return,
    };
    match session.swap_pieces(side, id_a, id_b) {
        Ok(()) => {
            writeln!(out, "swapped {} {}", format_coord(a), format_coord(b)).unwrap();
        }
        Err(e) => eprintln!("{}", e),
    }
}

/// Handles `legal <square>`: prints the destinations for the piece there.
fn handle_legal<W: Write>(session: &GameSession, at: Coord, out: &mut W) {
    let side = match side_at(session, at) {
        Some(s) => s,
        None => {
            eprintln!("no piece at {}", format_coord(at));
            return;
        }
    };
    let id = match session.roster(side).piece_at(at) {
        Some(p) => p.id,
        None => return,
    };
    match session.legal_destinations(side, id) {
        Ok(dests) if dests.is_empty() => {
            writeln!(out, "legal {}: none", format_coord(at)).unwrap();
        }
        Ok(mut dests) => {
            dests.sort_by_key(|c| (c.x, c.y));
            let formatted: Vec<String> = dests.into_iter().map(format_coord).collect();
            writeln!(out, "legal {}: {}", format_coord(at), formatted.join(" ")).unwrap();
        }
        Err(e) => eprintln!("{}", e),
    }
}

/// Handles `move <from> <to>`.
fn handle_move<W: Write>(session: &mut GameSession, from: Coord, to: Coord, out: &mut W) {
    let side = session.active_side();
    let id = match session.roster(side).piece_at(from) {
        Some(p) => p.id,
        None => {
            eprintln!("no {} piece at {}", side, format_coord(from));
            return;
        }
    };
    match session.apply_move(side, id, to) {
        Ok(applied) => report_move(&applied, out),
        Err(e) => eprintln!("{}", e),
    }
}

/// Prints the result lines for an applied move.
fn report_move<W: Write>(applied: &MoveApplied, out: &mut W) {
    match applied.strike {
        None => {
            writeln!(out, "moved {}", format_move(applied.record)).unwrap();
        }
        Some(strike) => {
            writeln!(
                out,
                "strike {}: {} vs {}, {}",
                format_move(applied.record),
                strike.attacker.name(),
                strike.defender.name(),
                outcome_text(strike.outcome),
            )
            .unwrap();
        }
    }
    if let Some(winner) = applied.winner {
        writeln!(out, "game over: {} wins", winner).unwrap();
    }
}

/// Handles `phase`.
fn handle_phase<W: Write>(session: &GameSession, out: &mut W) {
    match session.current_phase() {
        GamePhase::Setup => writeln!(out, "phase: setup").unwrap(),
        GamePhase::InPlay => {
            writeln!(out, "phase: in play, {} to move", session.active_side()).unwrap();
        }
        GamePhase::Finished => {
            // A finished session always has a winner.
            let winner = session
                .winner()
                .map(|w| w.to_string())
                .unwrap_or_else(|| "nobody".to_string());
            writeln!(out, "phase: finished, winner {}", winner).unwrap();
        }
    }
}

/// Returns display text for a strike outcome.
fn outcome_text(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::AttackerWins => "attacker wins",
        Outcome::DefenderWins => "defender wins",
        Outcome::BothDie => "both die",
        Outcome::FlagCaptured => "flag captured",
    }
}

/// Renders the board as a grid: two characters per square, the side's
/// initial and the rank's abbreviation. Lakes show as `~~`, empty
/// squares as `..`.
fn render_board(session: &GameSession) -> String {
    let mut text = String::new();
    text.push_str("    a  b  c  d  e  f  g  h  i  j\n");
    for y in 1..=BOARD_SIZE {
        text.push_str(&format!("{:>2} ", y));
        for x in 1..=BOARD_SIZE {
            // Both components are in range by construction.
            let coord = match Coord::new(x, y) {
                Ok(c) => c,
                Err(_) => unreachable!("grid iteration stays in bounds"),
            };
            let piece = ALL_SIDES
                .into_iter()
                .find_map(|side| session.roster(side).piece_at(coord));
            let cell = match piece {
                Some(piece) => {
                    let side_char = match piece.side {
                        Side::Red => 'R',
                        Side::Blue => 'B',
                    };
                    format!("{}{}", side_char, piece.rank.abbrev())
                }
                None if session.board().is_lake(coord) => "~~".to_string(),
                None => "..".to_string(),
            };
            text.push_str(&cell);
            text.push(' ');
        }
        text.push('\n');
    }
    text
}
