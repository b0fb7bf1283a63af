//! State key encoding
//!
//! Maps a board snapshot to its [`StateKey`] and back. The encoding is a pure
//! function of the cell contents, so keys are stable across board instances and
//! across however the position was reached.

use super::board::{Cell, Dimensions, Snapshot};
use crate::{Error, Result, types::StateKey};

const ROW_SEPARATOR: char = '/';

/// Encoder/decoder between snapshots and state keys
pub struct StateCodec;

impl StateCodec {
    /// Encode a snapshot as its canonical key
    pub fn encode(snapshot: &Snapshot) -> StateKey {
        let dims = snapshot.dimensions();
        let mut encoding = String::with_capacity(dims.cell_count() + dims.rows);
        for (i, row) in snapshot.cells().chunks(dims.cols).enumerate() {
            if i > 0 {
                encoding.push(ROW_SEPARATOR);
            }
            encoding.extend(row.iter().map(|c| c.to_char()));
        }
        StateKey::from_encoding(encoding)
    }

    /// Decode a key back into the snapshot it was produced from
    pub fn decode(key: &StateKey) -> Result<Snapshot> {
        Self::decode_str(key.as_str())
    }

    pub(crate) fn decode_str(s: &str) -> Result<Snapshot> {
        let invalid = |reason: String| Error::InvalidStateKey {
            key: s.to_string(),
            reason,
        };

        let rows: Vec<&str> = s.split(ROW_SEPARATOR).collect();
        let cols = rows[0].chars().count();
        if cols == 0 {
            return Err(invalid("rows must not be empty".to_string()));
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            let before = cells.len();
            for c in row.chars() {
                let cell =
                    Cell::from_char(c).ok_or_else(|| invalid(format!("unknown cell '{c}'")))?;
                cells.push(cell);
            }
            let width = cells.len() - before;
            if width != cols {
                return Err(invalid(format!(
                    "row {r} has {width} cells, expected {cols}"
                )));
            }
        }

        let dims = Dimensions::new(rows.len(), cols)?;
        Ok(Snapshot::from_parts(dims, cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Board, Move, Token};

    #[test]
    fn test_encode_empty_board() {
        let board = Board::new(Dimensions::STANDARD);
        assert_eq!(StateCodec::encode(&board.snapshot()).as_str(), ".../.../...");
    }

    #[test]
    fn test_same_contents_same_key() {
        // Same position reached by different move orders on different boards
        let mut first = Board::new(Dimensions::STANDARD);
        first.apply(Move::new(0, 0), Token::A).unwrap();
        first.apply(Move::new(1, 1), Token::B).unwrap();
        first.apply(Move::new(2, 2), Token::A).unwrap();

        let mut second = Board::new(Dimensions::STANDARD);
        second.apply(Move::new(2, 2), Token::A).unwrap();
        second.apply(Move::new(1, 1), Token::B).unwrap();
        second.apply(Move::new(0, 0), Token::A).unwrap();

        let key = StateCodec::encode(&first.snapshot());
        assert_eq!(key, StateCodec::encode(&second.snapshot()));
        assert_eq!(key, StateCodec::encode(&first.snapshot()));
        assert_eq!(key.as_str(), "x../.o./..x");
    }

    #[test]
    fn test_decode_inverts_encode() {
        let mut board = Board::new(Dimensions::new(2, 4).unwrap());
        board.apply(Move::new(0, 3), Token::B).unwrap();
        board.apply(Move::new(1, 0), Token::A).unwrap();

        let snapshot = board.snapshot();
        let key = StateCodec::encode(&snapshot);
        assert_eq!(key.as_str(), "...o/x...");
        assert_eq!(StateCodec::decode(&key).unwrap(), snapshot);
    }

    #[test]
    fn test_shape_is_part_of_the_key() {
        let wide = StateCodec::encode(&Snapshot::empty(Dimensions::new(1, 4).unwrap()));
        let tall = StateCodec::encode(&Snapshot::empty(Dimensions::new(2, 2).unwrap()));
        assert_ne!(wide, tall);
    }
}
