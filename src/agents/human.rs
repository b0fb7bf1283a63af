//! Console-driven human player

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use log::debug;

use crate::{
    Error, Result,
    ports::Player,
    tictactoe::{Move, Snapshot, Token},
};

/// A human entering moves as `row,col` lines.
///
/// Malformed, out-of-range and occupied-cell input is reported on the output
/// and the player is asked again; none of it reaches the engine. The only
/// failures are I/O errors and the input stream ending.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl HumanPlayer<StdinLock<'static>, Stdout> {
    /// A player reading from stdin and prompting on stdout
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Give back the output sink (used to inspect prompts)
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|source| Error::Io {
                operation: "read move from input".to_string(),
                source,
            })?;
        if read == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line)
    }

    fn validate(line: &str, free_cells: &[Move], board: &Snapshot) -> Result<Move> {
        let mv: Move = line.parse()?;
        let dims = board.dimensions();
        if !dims.contains(mv) {
            return Err(Error::MoveOutOfBounds {
                row: mv.row,
                col: mv.col,
                rows: dims.rows,
                cols: dims.cols,
            });
        }
        if !free_cells.contains(&mv) {
            return Err(Error::InvalidMove {
                row: mv.row,
                col: mv.col,
            });
        }
        Ok(mv)
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn decide_action(&mut self, free_cells: &[Move], board: &Snapshot, token: Token) -> Result<Move> {
        if free_cells.is_empty() {
            return Err(Error::NoValidMoves);
        }

        loop {
            write!(
                self.output,
                "{} [{token}] enter your move as row,col: ",
                self.name
            )?;
            self.output.flush()?;

            let line = self.read_line()?;
            match Self::validate(&line, free_cells, board) {
                Ok(mv) => return Ok(mv),
                Err(err) => {
                    debug!("rejected input from {}: {err}", self.name);
                    writeln!(self.output, "{err}. Please try again.")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::tictactoe::{Board, Dimensions};

    fn decide(input: &str, board: &Board) -> (Result<Move>, String) {
        let mut player = HumanPlayer::new("tester", Cursor::new(input.as_bytes()), Vec::new());
        let free: Vec<Move> = board.free_cells().collect();
        let result = player.decide_action(&free, &board.snapshot(), Token::B);
        let output = String::from_utf8(player.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn test_accepts_valid_move() {
        let board = Board::new(Dimensions::STANDARD);
        let (result, output) = decide("1,2\n", &board);
        assert_eq!(result.unwrap(), Move::new(1, 2));
        assert_eq!(output.matches("enter your move").count(), 1);
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut board = Board::new(Dimensions::STANDARD);
        board.apply(Move::new(0, 0), Token::A).unwrap();

        let (result, output) = decide("hello\n5,5\n0,0\n 2 , 1 \n", &board);
        assert_eq!(result.unwrap(), Move::new(2, 1));
        assert_eq!(output.matches("enter your move").count(), 4);
        assert!(output.contains("malformed input"));
        assert!(output.contains("out of bounds"));
        assert!(output.contains("not a free cell"));
    }

    #[test]
    fn test_closed_input_is_reported() {
        let board = Board::new(Dimensions::STANDARD);
        let (result, _) = decide("oops\n", &board);
        assert!(matches!(result, Err(Error::InputClosed)));
    }
}
