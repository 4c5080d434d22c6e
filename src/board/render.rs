//! Text rendering of a board.
//!
//! ```text
//! i\j|| 0| 1| 2| 3| 4| 5| 6|
//! ===++==+==+==+==+==+==+==+
//!   0||XX|XX| 1| 2| 3|XX|XX|
//! ---++--+--+--+--+--+--+--+
//! ```

use std::fmt;

use super::grid::Board;
use crate::core::Slot;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header = String::from("i\\j||");
        let mut filler = String::from("---++");
        let mut thick = String::from("===++");
        for col in 0..self.width() {
            header.push_str(&format!("{:>2}|", col));
            filler.push_str("--+");
            thick.push_str("==+");
        }
        writeln!(f, "{}", header)?;
        writeln!(f, "{}", thick)?;

        for row in 0..self.height() {
            write!(f, "{:>3}||", row)?;
            for slot in self.row(row) {
                match slot {
                    Slot::Occupied(peg) => write!(f, "{:>2}|", peg.raw())?,
                    Slot::OffBoard => f.write_str("XX|")?,
                    Slot::Empty => f.write_str("  |")?,
                }
            }
            writeln!(f)?;
            writeln!(f, "{}", filler)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Origin};
    use crate::core::Coord;

    #[test]
    fn test_render_start() {
        let text = Board::english().to_string();
        let lines: Vec<_> = text.lines().collect();

        // header, thick filler, then row + filler per row
        assert_eq!(lines.len(), 2 + 7 * 2);
        assert_eq!(lines[0], "i\\j|| 0| 1| 2| 3| 4| 5| 6|");
        assert_eq!(lines[1], "===++==+==+==+==+==+==+==+");
        assert_eq!(lines[2], "  0||XX|XX| 1| 2| 3|XX|XX|");
        assert_eq!(lines[3], "---++--+--+--+--+--+--+--+");
        assert_eq!(lines[8], "  3||14|15|16|  |17|18|19|");
    }

    #[test]
    fn test_render_after_move() {
        let mut board = Board::english();
        board.execute_move(Coord::new(3, 3), Origin::At(Coord::new(1, 3)));

        let text = board.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[4], "  1||XX|XX| 4|  | 6|XX|XX|");
        assert_eq!(lines[6], "  2|| 7| 8| 9|  |11|12|13|");
        assert_eq!(lines[8], "  3||14|15|16| 5|17|18|19|");
    }
}
