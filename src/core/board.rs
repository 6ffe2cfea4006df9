//! 5x5 game board with cached per-line match counts
//!
//! The board is mutated in place during search. `GameBoard::place` hands out a
//! `Placement` guard that owns the board for the duration of one trial; dropping
//! the guard clears the cell and restores any match counts changed through it, so
//! sibling branches always see the board as it was before the trial.

use super::word::WORD_LENGTH;
use super::{Letter, Pattern};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Width and height of the grid
pub const GRID_SIZE: usize = WORD_LENGTH;

/// Number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

type Cells = [[Option<Letter>; GRID_SIZE]; GRID_SIZE];

/// Mutable grid plus the most recently computed match count of every row and column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    cells: Cells,
    row_matches: [usize; GRID_SIZE],
    col_matches: [usize; GRID_SIZE],
}

impl GameBoard {
    /// Create an empty board
    ///
    /// `initial_matches` is the match count of an empty line, i.e. the dictionary
    /// size.
    #[must_use]
    pub const fn new(initial_matches: usize) -> Self {
        Self {
            cells: [[None; GRID_SIZE]; GRID_SIZE],
            row_matches: [initial_matches; GRID_SIZE],
            col_matches: [initial_matches; GRID_SIZE],
        }
    }

    /// Letter in a cell, if any
    #[inline]
    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> Option<Letter> {
        self.cells[row][col]
    }

    /// Overwrite a cell
    #[inline]
    pub const fn set(&mut self, row: usize, col: usize, letter: Option<Letter>) {
        self.cells[row][col] = letter;
    }

    /// True if the cell holds no letter
    #[inline]
    #[must_use]
    pub const fn is_empty_cell(&self, row: usize, col: usize) -> bool {
        self.cells[row][col].is_none()
    }

    /// Number of filled cells
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Contents of a row as a pattern
    #[inline]
    #[must_use]
    pub const fn row(&self, row: usize) -> Pattern {
        Pattern::new(self.cells[row])
    }

    /// Contents of a column as a pattern
    #[must_use]
    pub fn col(&self, col: usize) -> Pattern {
        Pattern::new(std::array::from_fn(|row| self.cells[row][col]))
    }

    /// True if no cell of the row is empty
    #[must_use]
    pub fn is_row_full(&self, row: usize) -> bool {
        self.cells[row].iter().all(Option::is_some)
    }

    /// True if no cell of the column is empty
    #[must_use]
    pub fn is_col_full(&self, col: usize) -> bool {
        self.cells.iter().all(|cells| cells[col].is_some())
    }

    /// Cached match count of a row
    #[inline]
    #[must_use]
    pub const fn row_matches(&self, row: usize) -> usize {
        self.row_matches[row]
    }

    /// Cached match count of a column
    #[inline]
    #[must_use]
    pub const fn col_matches(&self, col: usize) -> usize {
        self.col_matches[col]
    }

    /// Overwrite the cached match count of a row
    #[inline]
    pub const fn set_row_matches(&mut self, row: usize, matches: usize) {
        self.row_matches[row] = matches;
    }

    /// Overwrite the cached match count of a column
    #[inline]
    pub const fn set_col_matches(&mut self, col: usize, matches: usize) {
        self.col_matches[col] = matches;
    }

    /// True if any row or column still has a non-zero match count
    #[must_use]
    pub fn is_still_winnable(&self) -> bool {
        self.row_matches
            .iter()
            .chain(&self.col_matches)
            .any(|&matches| matches > 0)
    }

    /// Put `letter` into an empty cell for the lifetime of the returned guard
    ///
    /// # Panics
    /// Panics in debug mode if the cell is already filled.
    ///
    /// # Examples
    /// ```
    /// use wordgrid_difficulty::core::{GameBoard, Letter};
    ///
    /// let mut board = GameBoard::new(10);
    /// let letter = Letter::from_byte(b'q').unwrap();
    /// {
    ///     let mut trial = board.place(1, 3, letter);
    ///     trial.set_row_matches(1, 0);
    ///     assert_eq!(trial.get(1, 3), Some(letter));
    /// }
    /// assert_eq!(board.get(1, 3), None);
    /// assert_eq!(board.row_matches(1), 10);
    /// ```
    pub fn place(&mut self, row: usize, col: usize, letter: Letter) -> Placement<'_> {
        debug_assert!(self.is_empty_cell(row, col), "cell ({row}, {col}) is taken");
        let saved_row_matches = self.row_matches[row];
        let saved_col_matches = self.col_matches[col];
        self.cells[row][col] = Some(letter);
        Placement {
            board: self,
            row,
            col,
            saved_row_matches,
            saved_col_matches,
        }
    }

    /// Copy of the current cell contents
    #[must_use]
    pub const fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot(self.cells)
    }
}

/// Exclusive hold on a board while one letter is placed
///
/// Derefs to the board so the trial can be inspected and recursed into. On drop
/// the cell is emptied and the placed cell's row and column match counts are put
/// back to their values from before the placement.
#[derive(Debug)]
pub struct Placement<'b> {
    board: &'b mut GameBoard,
    row: usize,
    col: usize,
    saved_row_matches: usize,
    saved_col_matches: usize,
}

impl Placement<'_> {
    /// Row of the placed cell
    #[inline]
    #[must_use]
    pub const fn row_index(&self) -> usize {
        self.row
    }

    /// Column of the placed cell
    #[inline]
    #[must_use]
    pub const fn col_index(&self) -> usize {
        self.col
    }
}

impl Deref for Placement<'_> {
    type Target = GameBoard;

    fn deref(&self) -> &GameBoard {
        &*self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut GameBoard {
        &mut *self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.cells[self.row][self.col] = None;
        self.board.row_matches[self.row] = self.saved_row_matches;
        self.board.col_matches[self.col] = self.saved_col_matches;
    }
}

/// Immutable copy of a board's cells, captured when a win is found
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardSnapshot(Cells);

impl BoardSnapshot {
    /// Letter in a cell, if any
    #[inline]
    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> Option<Letter> {
        self.0[row][col]
    }

    /// Contents of a row as a pattern
    #[must_use]
    pub const fn row(&self, row: usize) -> Pattern {
        Pattern::new(self.0[row])
    }

    /// Contents of a column as a pattern
    #[must_use]
    pub fn col(&self, col: usize) -> Pattern {
        Pattern::new(std::array::from_fn(|row| self.0[row][col]))
    }

    /// Every row and column pattern, rows first
    pub fn lines(&self) -> impl Iterator<Item = Pattern> + '_ {
        (0..GRID_SIZE)
            .map(|i| self.row(i))
            .chain((0..GRID_SIZE).map(|i| self.col(i)))
    }
}

impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                match cell {
                    Some(letter) => write!(f, "{}", letter.to_char().to_ascii_uppercase())?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}
