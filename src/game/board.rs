pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of aligned pieces that wins the game.
const CONNECT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// Fixed 6x7 grid. The only mutator is a column drop, so a cell above an
/// empty cell in the same column is always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// True iff `col` is on the board and its top cell is empty.
    pub fn is_column_playable(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col] == Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        // Scan bottom to top for the first empty cell
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = cell;
                return Ok(row);
            }
        }

        Err(MoveError::ColumnFull)
    }

    /// Boolean form of [`Board::drop_piece`]. A rejected drop leaves the
    /// board untouched.
    pub fn drop(&mut self, col: usize, cell: Cell) -> bool {
        self.drop_piece(col, cell).is_ok()
    }

    /// Copy of the board with `cell` dropped into `col`, or `None` if the
    /// column cannot take it.
    pub fn with_drop(&self, col: usize, cell: Cell) -> Option<Board> {
        let mut next = *self;
        next.drop(col, cell).then_some(next)
    }

    /// Playable columns in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_column_playable(col)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_column_playable(col))
    }

    /// Number of `cell` pieces in column `col`.
    pub fn count_in_column(&self, col: usize, cell: Cell) -> usize {
        (0..ROWS).filter(|&row| self.cells[row][col] == cell).count()
    }

    /// Total number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Scan every start cell in all four directions for four consecutive
    /// `cell` pieces. Works on any arrangement, reachable or not. Never true
    /// for `Cell::Empty`.
    pub fn has_four_in_a_row(&self, cell: Cell) -> bool {
        if cell == Cell::Empty {
            return false;
        }

        let line = |row: usize, col: usize, dr: isize, dc: isize| {
            (0..CONNECT as isize).all(|i| {
                let r = (row as isize + dr * i) as usize;
                let c = (col as isize + dc * i) as usize;
                self.cells[r][c] == cell
            })
        };

        // Horizontal
        for row in 0..ROWS {
            for col in 0..=COLS - CONNECT {
                if line(row, col, 0, 1) {
                    return true;
                }
            }
        }

        // Vertical
        for row in 0..=ROWS - CONNECT {
            for col in 0..COLS {
                if line(row, col, 1, 0) {
                    return true;
                }
            }
        }

        // Diagonal (top-left to bottom-right, \)
        for row in 0..=ROWS - CONNECT {
            for col in 0..=COLS - CONNECT {
                if line(row, col, 1, 1) {
                    return true;
                }
            }
        }

        // Diagonal (bottom-left to top-right, /)
        for row in CONNECT - 1..ROWS {
            for col in 0..=COLS - CONNECT {
                if line(row, col, -1, 1) {
                    return true;
                }
            }
        }

        false
    }

    /// Either side has four in a row, or no column can take a piece.
    pub fn is_terminal(&self) -> bool {
        self.has_four_in_a_row(Cell::Red)
            || self.has_four_in_a_row(Cell::Yellow)
            || self.legal_moves().is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
