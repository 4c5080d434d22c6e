//! Text commands.
//!
//! ## Forms
//!
//! ```text
//! <peg> to <row> <col>            move peg by id to coordinates
//! <row> <col> to <row> <col>      move peg at coordinates to coordinates
//! <peg> <dir>                     jump peg by id two slots in a direction
//! <row> <col> <dir>               jump peg at coordinates in a direction
//! undo | redo | help | quit
//! ```
//!
//! `<dir>` is one of `up down left right` or `u d l r`. Tokens are separated by
//! whitespace and matched case-insensitively.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Origin};
use crate::core::{Coord, Direction, ParseCommandError, PegId};

/// Where a move request sends its peg.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    /// Explicit destination coordinates.
    At(Coord),
    /// Two slots from the origin in this direction.
    Toward(Direction),
}

/// A parsed move, not yet checked against any board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub origin: Origin,
    pub target: Target,
}

impl MoveRequest {
    /// Resolve the destination on `board`.
    ///
    /// A directional target of a peg that is not on the board has no
    /// destination, and neither does one that leaves the `i32` range.
    #[must_use]
    pub fn destination(&self, board: &Board) -> Option<Coord> {
        match self.target {
            Target::At(coord) => Some(coord),
            Target::Toward(direction) => {
                let from = match self.origin {
                    Origin::Peg(peg) => board.locate(peg)?,
                    Origin::At(coord) => coord,
                };
                from.offset(direction, 2)
            }
        }
    }
}

/// A command for a game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Move(MoveRequest),
    Undo,
    Redo,
    Help,
    Quit,
}

fn peg(token: &str) -> Result<PegId, ParseCommandError> {
    token
        .parse::<u32>()
        .map(PegId::new)
        .map_err(|_| ParseCommandError::InvalidNumber(token.to_string()))
}

fn coord(row: &str, col: &str) -> Result<Coord, ParseCommandError> {
    let parse = |token: &str| {
        token
            .parse::<i32>()
            .map_err(|_| ParseCommandError::InvalidNumber(token.to_string()))
    };
    Ok(Coord::new(parse(row)?, parse(col)?))
}

fn direction(token: &str) -> Result<Direction, ParseCommandError> {
    Direction::from_word(token).ok_or_else(|| ParseCommandError::UnknownDirection(token.to_string()))
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();
        let malformed = || ParseCommandError::Malformed(s.trim().to_string());

        if tokens.is_empty() {
            return Err(ParseCommandError::Empty);
        }
        if tokens.contains(&"help") {
            return Ok(Command::Help);
        }
        if tokens.contains(&"quit") {
            return Ok(Command::Quit);
        }

        let request = match tokens.as_slice() {
            ["undo"] => return Ok(Command::Undo),
            ["redo"] => return Ok(Command::Redo),
            ["undo" | "redo", ..] => return Err(malformed()),
            [id, "to", row, col] => MoveRequest {
                origin: Origin::Peg(peg(id)?),
                target: Target::At(coord(row, col)?),
            },
            [from_row, from_col, "to", row, col] => MoveRequest {
                origin: Origin::At(coord(from_row, from_col)?),
                target: Target::At(coord(row, col)?),
            },
            [id, dir] => MoveRequest {
                origin: Origin::Peg(peg(id)?),
                target: Target::Toward(direction(dir)?),
            },
            [row, col, dir] => MoveRequest {
                origin: Origin::At(coord(row, col)?),
                target: Target::Toward(direction(dir)?),
            },
            _ => return Err(malformed()),
        };

        Ok(Command::Move(request))
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Undo => f.write_str("undo"),
            Command::Redo => f.write_str("redo"),
            Command::Help => f.write_str("help"),
            Command::Quit => f.write_str("quit"),
            Command::Move(request) => {
                match request.origin {
                    Origin::Peg(peg) => write!(f, "{}", peg.raw())?,
                    Origin::At(c) => write!(f, "{} {}", c.row, c.col)?,
                }
                match request.target {
                    Target::At(c) => write!(f, " to {} {}", c.row, c.col),
                    Target::Toward(direction) => write!(f, " {}", direction),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Command, ParseCommandError> {
        s.parse()
    }

    #[test]
    fn test_control_commands() {
        assert_eq!(parse("undo"), Ok(Command::Undo));
        assert_eq!(parse("  REDO "), Ok(Command::Redo));
        assert_eq!(parse("help"), Ok(Command::Help));
        assert_eq!(parse("please help me"), Ok(Command::Help));
        assert_eq!(parse("quit"), Ok(Command::Quit));
    }

    #[test]
    fn test_peg_to_coords() {
        let cmd = parse("8 to 2 3").unwrap();
        assert_eq!(
            cmd,
            Command::Move(MoveRequest {
                origin: Origin::Peg(PegId(8)),
                target: Target::At(Coord::new(2, 3)),
            })
        );
    }

    #[test]
    fn test_coords_to_coords() {
        let cmd = parse("1 3 to 3 3").unwrap();
        assert_eq!(
            cmd,
            Command::Move(MoveRequest {
                origin: Origin::At(Coord::new(1, 3)),
                target: Target::At(Coord::new(3, 3)),
            })
        );
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(
            parse("16 up").unwrap(),
            Command::Move(MoveRequest {
                origin: Origin::Peg(PegId(16)),
                target: Target::Toward(Direction::Up),
            })
        );
        assert_eq!(
            parse("0 2 d").unwrap(),
            Command::Move(MoveRequest {
                origin: Origin::At(Coord::new(0, 2)),
                target: Target::Toward(Direction::Down),
            })
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse(""), Err(ParseCommandError::Empty));
        assert_eq!(parse("   "), Err(ParseCommandError::Empty));
        assert_eq!(parse("x up"), Err(ParseCommandError::InvalidNumber("x".into())));
        assert_eq!(parse("-3 up"), Err(ParseCommandError::InvalidNumber("-3".into())));
        assert_eq!(parse("3 north"), Err(ParseCommandError::UnknownDirection("north".into())));
        assert_eq!(parse("1 2 3 4"), Err(ParseCommandError::Malformed("1 2 3 4".into())));
        assert_eq!(parse("1 2 3 4 5 6"), Err(ParseCommandError::Malformed("1 2 3 4 5 6".into())));
    }

    #[test]
    fn test_control_word_with_extra_tokens() {
        assert_eq!(parse("undo 2"), Err(ParseCommandError::Malformed("undo 2".into())));
        assert_eq!(parse("Redo up"), Err(ParseCommandError::Malformed("Redo up".into())));
        assert_eq!(parse("undo 1 to 2 3"), Err(ParseCommandError::Malformed("undo 1 to 2 3".into())));
    }

    #[test]
    fn test_destination() {
        let board = Board::english();

        let by_id: Command = "5 down".parse().unwrap();
        let Command::Move(request) = by_id else { panic!("Expected Move") };
        assert_eq!(request.destination(&board), Some(Coord::new(3, 3)));

        let off: MoveRequest = MoveRequest {
            origin: Origin::At(Coord::new(0, 2)),
            target: Target::Toward(Direction::Up),
        };
        assert_eq!(off.destination(&board), Some(Coord::new(-2, 2)));

        let Command::Move(edge) = parse("2147483647 0 down").unwrap() else { panic!("Expected Move") };
        assert_eq!(edge.destination(&board), None);

        let missing = MoveRequest {
            origin: Origin::Peg(PegId(99)),
            target: Target::Toward(Direction::Up),
        };
        assert_eq!(missing.destination(&board), None);
    }

    #[test]
    fn test_display() {
        for text in ["8 to 2 3", "1 3 to 3 3", "16 up", "0 2 down", "undo", "quit"] {
            assert_eq!(parse(text).unwrap().to_string(), text);
        }
    }
}
