pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Length of a winning run.
const RUN: usize = 4;

/// Ownership of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    A,
    B,
}

impl Mark {
    /// The other player's mark. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::A => Mark::B,
            Mark::B => Mark::A,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Character used by the text renderer
    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::A => 'X',
            Mark::B => 'O',
        }
    }
}

/// A successful placement, kept so it can be rolled back precisely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub column: usize,
    pub row: usize,
}

/// Post-move status of a board from the mover's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Win(Mark),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("nothing to undo at row {row}, column {column}")]
    NothingToUndo { row: usize, column: usize },
}

/// The 6x7 grid. Row 0 is the top, row 5 is the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Mark; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Mark::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Mark {
        self.cells[row][col]
    }

    /// Read-only snapshot of every cell, row-major from the top.
    pub fn cells(&self) -> &[[Mark; COLS]; ROWS] {
        &self.cells
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Mark::Empty
    }

    /// Drop a disc in a column, returns the row where it landed
    pub fn place_disc(&mut self, col: usize, mark: Mark) -> Result<usize, BoardError> {
        if col >= COLS {
            return Err(BoardError::InvalidColumn(col));
        }

        // Lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Mark::Empty {
                self.cells[row][col] = mark;
                return Ok(row);
            }
        }

        Err(BoardError::ColumnFull(col))
    }

    /// Clear an occupied cell. Callers must only undo the topmost disc of a
    /// column or the gravity invariant breaks; that is not checked here.
    pub fn undo_place(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        if col >= COLS {
            return Err(BoardError::InvalidColumn(col));
        }
        match self.cells.get(row).map(|r| r[col]) {
            Some(Mark::Empty) | None => Err(BoardError::NothingToUndo { row, column: col }),
            Some(_) => {
                self.cells[row][col] = Mark::Empty;
                Ok(())
            }
        }
    }

    /// Check if the board is completely full. Only the top row is inspected.
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Columns that can still take a disc, ascending.
    pub fn available_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Number of occupied cells.
    pub fn disc_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Mark::Empty)
            .count()
    }

    /// True if any 4-cell window in any orientation is entirely `mark`.
    pub fn check_win(&self, mark: Mark) -> bool {
        if mark == Mark::Empty {
            return false;
        }

        // Horizontal
        for row in 0..ROWS {
            for col in 0..=COLS - RUN {
                if self.window_is(mark, row, col, 0, 1) {
                    return true;
                }
            }
        }

        // Vertical
        for row in 0..=ROWS - RUN {
            for col in 0..COLS {
                if self.window_is(mark, row, col, 1, 0) {
                    return true;
                }
            }
        }

        // Diagonal (top-left to bottom-right)
        for row in 0..=ROWS - RUN {
            for col in 0..=COLS - RUN {
                if self.window_is(mark, row, col, 1, 1) {
                    return true;
                }
            }
        }

        // Diagonal (bottom-left to top-right)
        for row in RUN - 1..ROWS {
            for col in 0..=COLS - RUN {
                if self.window_is(mark, row, col, -1, 1) {
                    return true;
                }
            }
        }

        false
    }

    /// Status after `mover` has placed a disc.
    pub fn status(&self, mover: Mark) -> GameStatus {
        if self.check_win(mover) {
            GameStatus::Win(mover)
        } else if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    fn window_is(&self, mark: Mark, row: usize, col: usize, d_row: isize, d_col: usize) -> bool {
        (0..RUN).all(|i| {
            let r = (row as isize + d_row * i as isize) as usize;
            self.cells[r][col + d_col * i] == mark
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(rows: [&str; ROWS]) -> Board {
        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                board.cells[row][col] = match ch {
                    'X' => Mark::A,
                    'O' => Mark::B,
                    _ => Mark::Empty,
                };
            }
        }
        board
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Mark::Empty);
            }
        }
        assert_eq!(board.disc_count(), 0);
        assert_eq!(board.available_columns(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_place_disc() {
        let mut board = Board::new();

        let row = board.place_disc(3, Mark::A).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Mark::A);

        let row = board.place_disc(3, Mark::B).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Mark::B);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.place_disc(0, Mark::A).unwrap();
        }

        assert!(board.is_column_full(0));
        let before = board;
        assert_eq!(board.place_disc(0, Mark::B), Err(BoardError::ColumnFull(0)));
        assert_eq!(board, before);
        assert_eq!(board.available_columns(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.place_disc(7, Mark::A), Err(BoardError::InvalidColumn(7)));
        assert_eq!(board.undo_place(0, 9), Err(BoardError::InvalidColumn(9)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_undo_restores_board() {
        let mut board = Board::new();
        board.place_disc(2, Mark::B).unwrap();
        let before = board;

        let row = board.place_disc(2, Mark::A).unwrap();
        board.undo_place(row, 2).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_undo_empty_cell_fails() {
        let mut board = Board::new();
        assert_eq!(
            board.undo_place(5, 4),
            Err(BoardError::NothingToUndo { row: 5, column: 4 })
        );
        assert_eq!(
            board.undo_place(ROWS, 4),
            Err(BoardError::NothingToUndo { row: ROWS, column: 4 })
        );
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.place_disc(col, Mark::A).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.available_columns().is_empty());
    }

    #[test]
    fn test_one_empty_top_cell_is_not_full() {
        let mut board = Board::new();
        for col in 0..COLS {
            for i in 0..ROWS {
                if col == COLS - 1 && i == ROWS - 1 {
                    break;
                }
                let mark = if (col + i) % 2 == 0 { Mark::A } else { Mark::B };
                board.place_disc(col, mark).unwrap();
            }
        }
        assert_eq!(board.disc_count(), ROWS * COLS - 1);
        assert!(!board.is_full());
        assert_eq!(board.available_columns(), vec![COLS - 1]);
    }

    #[test]
    fn test_horizontal_win() {
        let board = board_from([
            ".......",
            ".......",
            ".......",
            ".......",
            "...OO..",
            "OXXXX..",
        ]);
        assert!(board.check_win(Mark::A));
        assert!(!board.check_win(Mark::B));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.place_disc(3, Mark::B).unwrap();
        }
        assert!(board.check_win(Mark::B));
        assert!(!board.check_win(Mark::A));
    }

    #[test]
    fn test_diagonal_up_win() {
        let board = board_from([
            ".......",
            ".......",
            "...X...",
            "..XO...",
            ".XOO...",
            "XOOX...",
        ]);
        assert!(board.check_win(Mark::A));
        assert!(!board.check_win(Mark::B));
    }

    #[test]
    fn test_diagonal_down_win() {
        let board = board_from([
            ".......",
            ".......",
            "...O...",
            "...XO..",
            "...XXO.",
            "..XOXXO",
        ]);
        assert!(board.check_win(Mark::B));
        assert!(!board.check_win(Mark::A));
    }

    #[test]
    fn test_win_on_board_edges() {
        let board = board_from([
            "...XXXX",
            "O......",
            "O......",
            "O......",
            "O......",
            ".......",
        ]);
        assert!(board.check_win(Mark::A));
        assert!(board.check_win(Mark::B));
    }

    #[test]
    fn test_no_win_with_three() {
        let board = board_from([
            ".......",
            ".......",
            ".......",
            "..X..O.",
            ".XO.O.X",
            "XXXOOOX",
        ]);
        assert!(!board.check_win(Mark::A));
        assert!(!board.check_win(Mark::B));
    }

    #[test]
    fn test_empty_mark_never_wins() {
        assert!(!Board::new().check_win(Mark::Empty));
    }

    #[test]
    fn test_status() {
        let mut board = Board::new();
        for _ in 0..3 {
            board.place_disc(0, Mark::A).unwrap();
        }
        assert_eq!(board.status(Mark::A), GameStatus::InProgress);
        board.place_disc(0, Mark::A).unwrap();
        assert_eq!(board.status(Mark::A), GameStatus::Win(Mark::A));
        assert!(board.status(Mark::A).is_terminal());
        assert_eq!(board.status(Mark::B), GameStatus::InProgress);
    }

    #[test]
    fn test_full_board_without_win_is_draw() {
        // Columns go in pairs AABB..., every level flips, so no run reaches four.
        let mut board = Board::new();
        for col in 0..COLS {
            for i in 0..ROWS {
                let mark = if (col % 4 < 2) ^ (i % 2 == 1) { Mark::A } else { Mark::B };
                board.place_disc(col, mark).unwrap();
            }
        }
        assert!(!board.check_win(Mark::A));
        assert!(!board.check_win(Mark::B));
        assert_eq!(board.status(Mark::A), GameStatus::Draw);
    }

    #[test]
    fn test_mark_helpers() {
        assert_eq!(Mark::A.opponent(), Mark::B);
        assert_eq!(Mark::B.opponent(), Mark::A);
        assert_eq!(Mark::Empty.opponent(), Mark::Empty);
        assert_eq!(Mark::A.symbol(), 'X');
        assert_eq!(Mark::B.symbol(), 'O');
    }
}
