use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Run length required to win.
pub const CONNECT: usize = 4;

/// A cell holds a player's piece or nothing.
pub type Cell = Option<Player>;

/// Scan order for the win check: horizontal, vertical, diagonal `\`,
/// diagonal `/`. The first qualifying direction is reported.
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("column index out of range")]
    InvalidColumn,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[None; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col].is_some()
    }

    /// Lowest empty row in a column, scanning from the bottom upward.
    /// Returns `None` when the column is full.
    pub fn lowest_open_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).rev().find(|&row| self.cells[row][col].is_none())
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        let row = self.lowest_open_row(col).ok_or(MoveError::ColumnFull)?;
        self.cells[row][col] = Some(player);
        Ok(row)
    }

    /// Remove the piece at a position (used when a move is undone).
    pub(super) fn clear(&mut self, row: usize, col: usize) {
        self.cells[row][col] = None;
    }

    /// Check if the board is completely full (row 0 has no open cell)
    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|cell| cell.is_some())
    }

    /// Check the four axes through the just-placed piece at (row, col) and
    /// return the first 4 cells of a qualifying run, if any.
    pub fn winning_line(&self, row: usize, col: usize) -> Option<[(usize, usize); CONNECT]> {
        let player = self.get(row, col)?;

        for (dr, dc) in DIRECTIONS {
            let line = self.run_through(row, col, dr, dc, player);
            if line.len() >= CONNECT {
                let mut cells = [(0, 0); CONNECT];
                cells.copy_from_slice(&line[..CONNECT]);
                return Some(cells);
            }
        }

        None
    }

    /// Maximal contiguous run of `player` pieces through (row, col) along one
    /// axis: walk forward appending matches, then backward prepending them,
    /// so the run stays in axis order with the backward cells first.
    fn run_through(
        &self,
        row: usize,
        col: usize,
        dr: i32,
        dc: i32,
        player: Player,
    ) -> Vec<(usize, usize)> {
        let mut line = vec![(row, col)];

        let mut r = row as i32 + dr;
        let mut c = col as i32 + dc;
        while let Some(cell) = self.occupant(r, c) {
            if cell != player {
                break;
            }
            line.push((r as usize, c as usize));
            r += dr;
            c += dc;
        }

        let mut r = row as i32 - dr;
        let mut c = col as i32 - dc;
        while let Some(cell) = self.occupant(r, c) {
            if cell != player {
                break;
            }
            line.insert(0, (r as usize, c as usize));
            r -= dr;
            c -= dc;
        }

        line
    }

    /// Occupant of a signed coordinate; `None` if out of bounds or empty.
    fn occupant(&self, row: i32, col: i32) -> Option<Player> {
        if row < 0 || row >= ROWS as i32 || col < 0 || col >= COLS as i32 {
            return None;
        }
        self.cells[row as usize][col as usize]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
