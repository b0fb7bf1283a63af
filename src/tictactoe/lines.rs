//! Winning line analysis
//!
//! A line wins when its cell values sum to exactly `+WIN_SUM` (player A) or
//! `-WIN_SUM` (player B). Rows are checked first, then columns, then the two
//! diagonals. On boards wider or taller than three this means any line holding
//! three of one token and nothing of the other counts as a win.

use super::{
    board::{Cell, Dimensions, Token},
    game::GameResult,
};

/// Line sum that signals a win
pub const WIN_SUM: i32 = 3;

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Sum of each row, top to bottom
    pub fn row_sums(dims: Dimensions, cells: &[Cell]) -> Vec<i32> {
        cells
            .chunks(dims.cols)
            .map(|row| row.iter().map(|c| c.value()).sum())
            .collect()
    }

    /// Sum of each column, left to right
    pub fn column_sums(dims: Dimensions, cells: &[Cell]) -> Vec<i32> {
        (0..dims.cols)
            .map(|col| {
                (0..dims.rows)
                    .map(|row| cells[row * dims.cols + col].value())
                    .sum()
            })
            .collect()
    }

    /// Sums of the main diagonal and the anti-diagonal.
    ///
    /// Both run from the top row for `min(rows, cols)` cells.
    pub fn diagonal_sums(dims: Dimensions, cells: &[Cell]) -> [i32; 2] {
        let len = dims.rows.min(dims.cols);
        let main = (0..len).map(|i| cells[i * dims.cols + i].value()).sum();
        let anti = (0..len)
            .map(|i| cells[i * dims.cols + (dims.cols - 1 - i)].value())
            .sum();
        [main, anti]
    }

    fn winner_of(sum: i32) -> Option<Token> {
        match sum {
            WIN_SUM => Some(Token::A),
            s if s == -WIN_SUM => Some(Token::B),
            _ => None,
        }
    }

    /// First winner found in row, column, diagonal order
    pub fn winner(dims: Dimensions, cells: &[Cell]) -> Option<Token> {
        Self::row_sums(dims, cells)
            .into_iter()
            .find_map(Self::winner_of)
            .or_else(|| {
                Self::column_sums(dims, cells)
                    .into_iter()
                    .find_map(Self::winner_of)
            })
            .or_else(|| {
                Self::diagonal_sums(dims, cells)
                    .into_iter()
                    .find_map(Self::winner_of)
            })
    }

    /// Classify a position as a win, a draw, or still in progress
    pub fn evaluate(dims: Dimensions, cells: &[Cell]) -> GameResult {
        if let Some(winner) = Self::winner(dims, cells) {
            GameResult::Win(winner)
        } else if !cells.contains(&Cell::Empty) {
            GameResult::Draw
        } else {
            GameResult::InProgress
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(rows: &[&str]) -> (Dimensions, Vec<Cell>) {
        let dims = Dimensions::new(rows.len(), rows[0].len()).unwrap();
        let cells = rows
            .iter()
            .flat_map(|r| r.chars().map(|c| Cell::from_char(c).unwrap()))
            .collect();
        (dims, cells)
    }

    #[test]
    fn test_row_win() {
        let (dims, cells) = cells(&["xxx", "oo.", "..."]);
        assert_eq!(LineAnalyzer::evaluate(dims, &cells), GameResult::Win(Token::A));
    }

    #[test]
    fn test_column_win() {
        let (dims, cells) = cells(&["xo.", "xo.", ".ox"]);
        assert_eq!(LineAnalyzer::evaluate(dims, &cells), GameResult::Win(Token::B));
    }

    #[test]
    fn test_diagonal_wins() {
        let (dims, main) = cells(&["xo.", "ox.", "..x"]);
        assert_eq!(LineAnalyzer::winner(dims, &main), Some(Token::A));

        let (dims, anti) = cells(&["x.o", "xo.", "o.x"]);
        assert_eq!(LineAnalyzer::winner(dims, &anti), Some(Token::B));
    }

    #[test]
    fn test_draw_requires_full_board() {
        let (dims, full) = cells(&["xox", "xoo", "oxx"]);
        assert_eq!(LineAnalyzer::evaluate(dims, &full), GameResult::Draw);

        let (dims, open) = cells(&["xox", "xoo", "ox."]);
        assert_eq!(LineAnalyzer::evaluate(dims, &open), GameResult::InProgress);
    }

    #[test]
    fn test_row_checked_before_column() {
        // Not reachable in alternating play, but the priority order is observable
        let (dims, cells) = cells(&["ooo", "x..", "x..", "x..", "x.."]);
        assert_eq!(LineAnalyzer::column_sums(dims, &cells)[0], WIN_SUM);
        assert_eq!(LineAnalyzer::winner(dims, &cells), Some(Token::B));
    }

    #[test]
    fn test_three_sum_on_wide_board() {
        // Three tokens in a four-cell row sum to +3 and count as a win
        let (dims, cells) = cells(&["xx.x", "oo..", "...."]);
        assert_eq!(LineAnalyzer::evaluate(dims, &cells), GameResult::Win(Token::A));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        // x x x o sums to +2
        let (dims, cells) = cells(&["xxxo", "o...", "...."]);
        assert_eq!(LineAnalyzer::winner(dims, &cells), None);
    }

    #[test]
    fn test_small_board_never_wins() {
        let (dims, cells) = cells(&["xo", "ox"]);
        assert_eq!(LineAnalyzer::evaluate(dims, &cells), GameResult::Draw);
    }

    #[test]
    fn test_anti_diagonal_on_rectangular_board() {
        // 3x4: anti-diagonal is (0,3), (1,2), (2,1)
        let (dims, cells) = cells(&["...o", "..o.", ".o.."]);
        assert_eq!(LineAnalyzer::diagonal_sums(dims, &cells), [0, -3]);
        assert_eq!(LineAnalyzer::winner(dims, &cells), Some(Token::B));
    }
}
