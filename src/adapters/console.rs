//! Console display collaborator

use std::io::{self, Stdout, Write};

use crate::{
    Result,
    ports::Renderer,
    tictactoe::{Cell, GameResult, Move, Snapshot, Token},
};

/// Draws the board as a bordered grid after every move.
///
/// ```text
/// -------------
/// | x |   | o |
/// -------------
/// |   | x |   |
/// -------------
/// ```
pub struct GridRenderer<W> {
    output: W,
}

impl GridRenderer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> GridRenderer<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

/// Format a snapshot as a bordered grid
pub fn format_grid(board: &Snapshot) -> String {
    let dims = board.dimensions();
    let border = "-".repeat(4 * dims.cols + 1);
    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    for row in board.cells().chunks(dims.cols) {
        for &cell in row {
            let symbol = match cell {
                Cell::Empty => ' ',
                other => other.to_char(),
            };
            out.push_str("| ");
            out.push(symbol);
            out.push(' ');
        }
        out.push_str("|\n");
        out.push_str(&border);
        out.push('\n');
    }
    out
}

impl<W: Write> Renderer for GridRenderer<W> {
    fn render(&mut self, board: &Snapshot, last_move: Option<(Move, Token)>) -> Result<()> {
        if let Some((mv, token)) = last_move {
            writeln!(self.output, "Player {token} played {mv}")?;
        }
        write!(self.output, "{}", format_grid(board))?;
        self.output.flush()?;
        Ok(())
    }

    fn announce(&mut self, result: GameResult) -> Result<()> {
        match result {
            GameResult::Win(token) => writeln!(self.output, "Player {token} wins!")?,
            GameResult::Draw => writeln!(self.output, "It's a draw.")?,
            GameResult::InProgress => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Board, Dimensions};

    #[test]
    fn test_format_grid() {
        let mut board = Board::new(Dimensions::STANDARD);
        board.apply(Move::new(0, 0), Token::A).unwrap();
        board.apply(Move::new(0, 2), Token::B).unwrap();

        let expected = "\
-------------
| x |   | o |
-------------
|   |   |   |
-------------
|   |   |   |
-------------
";
        assert_eq!(format_grid(&board.snapshot()), expected);
    }

    #[test]
    fn test_render_and_announce() {
        let mut renderer = GridRenderer::new(Vec::new());
        let board = Snapshot::empty(Dimensions::new(1, 2).unwrap());
        renderer
            .render(&board, Some((Move::new(0, 1), Token::B)))
            .unwrap();
        renderer.announce(GameResult::Draw).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text, "Player B (o) played 0,1\n---------\n|   |   |\n---------\nIt's a draw.\n");
    }
}
