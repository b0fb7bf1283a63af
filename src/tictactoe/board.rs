//! Board representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{game::GameResult, lines::LineAnalyzer};
use crate::{Error, Result};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    A,
    B,
}

impl Cell {
    /// Numeric value used by the line sums (+1, -1 or 0)
    pub fn value(self) -> i32 {
        match self {
            Cell::Empty => 0,
            Cell::A => 1,
            Cell::B => -1,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::A => 'x',
            Cell::B => 'o',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'x' => Some(Cell::A),
            'o' => Some(Cell::B),
            _ => None,
        }
    }

}

/// The token a player places on the board
///
/// `A` is worth +1 and always opens the game, `B` is worth -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Token {
    A,
    B,
}

impl Token {
    /// Get the opponent token
    pub fn opponent(self) -> Token {
        match self {
            Token::A => Token::B,
            Token::B => Token::A,
        }
    }

    /// Convert token to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Token::A => Cell::A,
            Token::B => Cell::B,
        }
    }

    pub fn value(self) -> i32 {
        self.to_cell().value()
    }

    /// Seat index (0 for A, 1 for B)
    pub fn index(self) -> usize {
        match self {
            Token::A => 0,
            Token::B => 1,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::A => write!(f, "A (x)"),
            Token::B => write!(f, "B (o)"),
        }
    }
}

/// Largest accepted board, in cells
pub const MAX_CELLS: usize = 4096;

/// Board dimensions, rows by columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    /// The classic 3x3 board
    pub const STANDARD: Dimensions = Dimensions { rows: 3, cols: 3 };

    /// Create validated dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either side is zero or the board
    /// would hold more than [`MAX_CELLS`] cells.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let cells = rows.checked_mul(cols);
        if rows == 0 || cols == 0 || cells.is_none_or(|n| n > MAX_CELLS) {
            return Err(Error::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Check whether a move lies on the board
    pub fn contains(&self, mv: Move) -> bool {
        mv.row < self.rows && mv.col < self.cols
    }

    fn index_of(&self, mv: Move) -> usize {
        mv.row * self.cols + mv.col
    }

    fn move_at(&self, index: usize) -> Move {
        Move::new(index / self.cols, index % self.cols)
    }

    fn check_bounds(&self, mv: Move) -> Result<usize> {
        if self.contains(mv) {
            Ok(self.index_of(mv))
        } else {
            Err(Error::MoveOutOfBounds {
                row: mv.row,
                col: mv.col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A move: 0-indexed (row, column) of the cell to occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Move {
    type Err = Error;

    /// Parse `"row,col"`, tolerating whitespace around either number.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = |reason: &str| Error::MalformedInput {
            input: s.trim().to_string(),
            reason: reason.to_string(),
        };

        let mut parts = s.split(',');
        let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed("expected two comma-separated numbers"));
        };

        let row = row
            .trim()
            .parse::<usize>()
            .map_err(|_| malformed("row is not a non-negative integer"))?;
        let col = col
            .trim()
            .parse::<usize>()
            .map_err(|_| malformed("column is not a non-negative integer"))?;

        Ok(Move::new(row, col))
    }
}

fn free_cells_of<'a>(dims: Dimensions, cells: &'a [Cell]) -> impl Iterator<Item = Move> + 'a {
    cells
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Cell::Empty)
        .map(move |(i, _)| dims.move_at(i))
}

fn placement_index(dims: Dimensions, cells: &[Cell], mv: Move) -> Result<usize> {
    let index = dims.check_bounds(mv)?;
    if cells[index] != Cell::Empty {
        return Err(Error::InvalidMove {
            row: mv.row,
            col: mv.col,
        });
    }
    Ok(index)
}

fn write_grid(f: &mut fmt::Formatter<'_>, dims: Dimensions, cells: &[Cell]) -> fmt::Result {
    for (i, row) in cells.chunks(dims.cols).enumerate() {
        if i > 0 {
            writeln!(f)?;
        }
        for cell in row {
            write!(f, "{}", cell.to_char())?;
        }
    }
    Ok(())
}

/// Owned, read-only copy of a board.
///
/// Players and the state codec only ever see snapshots, so nothing they retain
/// can alias the live board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snapshot {
    dims: Dimensions,
    cells: Box<[Cell]>,
}

impl Snapshot {
    /// An empty snapshot of the given size
    pub fn empty(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![Cell::Empty; dims.cell_count()].into_boxed_slice(),
        }
    }

    /// Build a snapshot from row-major cells (length already checked by the caller)
    pub(crate) fn from_parts(dims: Dimensions, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), dims.cell_count());
        Self {
            dims,
            cells: cells.into_boxed_slice(),
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at a move's position, `None` when out of range
    pub fn get(&self, mv: Move) -> Option<Cell> {
        self.dims
            .contains(mv)
            .then(|| self.cells[self.dims.index_of(mv)])
    }

    /// Free cells in row-major order
    pub fn free_cells(&self) -> impl Iterator<Item = Move> + '_ {
        free_cells_of(self.dims, &self.cells)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Terminal status of this position
    pub fn result(&self) -> GameResult {
        LineAnalyzer::evaluate(self.dims, &self.cells)
    }

    /// The position reached by placing `token` at `mv`
    #[must_use = "with_move returns a new snapshot; the original is unchanged"]
    pub fn with_move(&self, mv: Move, token: Token) -> Result<Snapshot> {
        let index = placement_index(self.dims, &self.cells, mv)?;
        let mut next = self.clone();
        next.cells[index] = token.to_cell();
        Ok(next)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self.dims, &self.cells)
    }
}

/// The live game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![Cell::Empty; dims.cell_count()],
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn get(&self, mv: Move) -> Option<Cell> {
        self.dims
            .contains(mv)
            .then(|| self.cells[self.dims.index_of(mv)])
    }

    /// Place `token` at `mv`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MoveOutOfBounds`] for a cell outside the board and
    /// [`Error::InvalidMove`] for an occupied cell. The board is unchanged on error.
    pub fn apply(&mut self, mv: Move, token: Token) -> Result<()> {
        let index = placement_index(self.dims, &self.cells, mv)?;
        self.cells[index] = token.to_cell();
        Ok(())
    }

    /// Free cells in row-major order, recomputed on every call
    pub fn free_cells(&self) -> impl Iterator<Item = Move> + '_ {
        free_cells_of(self.dims, &self.cells)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Copy the current position into an owned snapshot
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_parts(self.dims, self.cells.clone())
    }

    pub fn result(&self) -> GameResult {
        LineAnalyzer::evaluate(self.dims, &self.cells)
    }

    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self.dims, &self.cells)
    }
}
