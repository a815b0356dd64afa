//! Text command parser.
//!
//! Parses incoming commands from raw text into structured `Command`
//! variants that the binary's main loop can dispatch on.

use crate::board::Coord;

use super::notation::parse_coord;

/// A parsed command for the text interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a fresh game in the setup phase.
    NewGame,

    /// Place both sides' pieces on random starting squares.
    AutoSetup,

    /// Swap two own pieces during setup: `swap <square> <square>`.
    Swap { a: Coord, b: Coord },

    /// End setup and begin play.
    Ready,

    /// List legal destinations for the piece on a square: `legal <square>`.
    Legal { at: Coord },

    /// Move the active side's piece: `move <from> <to>`.
    Move { from: Coord, to: Coord },

    /// Print the board.
    Show,

    /// Print the phase, active side, and winner.
    Phase,

    /// Terminate the process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to
/// stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (&first, args) = tokens.split_first()?;

    match first {
        "newgame" => Some(Command::NewGame),
        "autosetup" => Some(Command::AutoSetup),
        "ready" => Some(Command::Ready),
        "show" => Some(Command::Show),
        "phase" => Some(Command::Phase),
        "quit" => Some(Command::Quit),

        "swap" => parse_two_squares(args).map(|(a, b)| Command::Swap { a, b }),
        "legal" => parse_one_square(args).map(|at| Command::Legal { at }),
        "move" => parse_two_squares(args).map(|(from, to)| Command::Move { from, to }),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses a single square argument.
fn parse_one_square(args: &[&str]) -> Option<Coord> {
    match args {
        [square] => match parse_coord(square) {
            Ok(coord) => Some(coord),
            Err(e) => {
                eprintln!("{}", e);
                None
            }
        },
        _ => {
            eprintln!("expected one square argument");
            None
        }
    }
}

/// Parses two square arguments.
fn parse_two_squares(args: &[&str]) -> Option<(Coord, Coord)> {
    match args {
        [a, b] => match (parse_coord(a), parse_coord(b)) {
            (Ok(a), Ok(b)) => Some((a, b)),
            (Err(e), _) | (_, Err(e)) => {
                eprintln!("{}", e);
                None
            }
        },
        _ => {
            eprintln!("expected two square arguments");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(x: u8, y: u8) -> Coord {
        Coord::new(x, y).unwrap()
    }

    #[test]
    fn bare_commands_parse() {
        assert_eq!(parse_command("newgame"), Some(Command::NewGame));
        assert_eq!(parse_command("autosetup"), Some(Command::AutoSetup));
        assert_eq!(parse_command("ready"), Some(Command::Ready));
        assert_eq!(parse_command("show"), Some(Command::Show));
        assert_eq!(parse_command("phase"), Some(Command::Phase));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }

    #[test]
    fn move_command_parses_squares() {
        assert_eq!(
            parse_command("move e7 e6"),
            Some(Command::Move {
                from: coord(5, 7),
                to: coord(5, 6),
            })
        );
    }

    #[test]
    fn legal_command_parses_square() {
        assert_eq!(
            parse_command("legal a10"),
            Some(Command::Legal { at: coord(1, 10) })
        );
    }

    #[test]
    fn swap_command_parses_squares() {
        assert_eq!(
            parse_command("swap a1 b2"),
            Some(Command::Swap {
                a: coord(1, 1),
                b: coord(2, 2),
            })
        );
    }

    #[test]
    fn empty_and_unknown_lines_ignored() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("frobnicate"), None);
    }

    #[test]
    fn malformed_arguments_rejected() {
        assert_eq!(parse_command("move e7"), None);
        assert_eq!(parse_command("move e7 k9"), None);
        assert_eq!(parse_command("legal"), None);
        assert_eq!(parse_command("swap a1"), None);
    }
}
