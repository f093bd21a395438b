//! Board representation and the safety check.

use std::fmt;

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// No queen on this cell.
    Empty,
    /// A queen occupies this cell.
    Queen,
}

impl Cell {
    /// Character form used by [`Board`]'s `Display` impl: `Q` or `-`.
    pub fn as_char(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Queen => 'Q',
        }
    }
}

/// An owned `size × size` board.
///
/// Stored as one contiguous buffer indexed `row * size + col`, so the
/// whole board is a single allocation whose lifetime is tied to the
/// search that owns it.
///
/// # Examples
///
/// ```
/// use u_exact::queens::Board;
///
/// let mut board = Board::new(4);
/// board.place(1, 0);
/// assert!(!board.is_safe(1, 2)); // same row
/// assert!(!board.is_safe(3, 2)); // lower-left diagonal
/// assert!(board.is_safe(0, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the given size.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.size && col < self.size, "cell out of bounds");
        self.cells[row * self.size + col]
    }

    /// Places a queen at `(row, col)`.
    pub fn place(&mut self, row: usize, col: usize) {
        assert!(row < self.size && col < self.size, "cell out of bounds");
        self.cells[row * self.size + col] = Cell::Queen;
    }

    /// Removes any queen at `(row, col)`.
    pub fn clear_cell(&mut self, row: usize, col: usize) {
        assert!(row < self.size && col < self.size, "cell out of bounds");
        self.cells[row * self.size + col] = Cell::Empty;
    }

    /// Whether the board holds no queens at all.
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(|&c| c == Cell::Empty)
    }

    /// Whether a queen at `(row, col)` would attack no queen already
    /// placed in columns `0..col`.
    ///
    /// Three lines are scanned: the row itself, the lower-left
    /// diagonal, and the upper-left diagonal. Columns at or beyond
    /// `col` are never inspected — placement proceeds column by
    /// column, so they are guaranteed unpopulated.
    pub fn is_safe(&self, row: usize, col: usize) -> bool {
        // Same row, earlier columns.
        for c in 0..col {
            if self.get(row, c) == Cell::Queen {
                return false;
            }
        }

        // Lower-left diagonal: rows increase while columns decrease.
        let (mut r, mut c) = (row + 1, col);
        while r < self.size && c > 0 {
            c -= 1;
            if self.get(r, c) == Cell::Queen {
                return false;
            }
            r += 1;
        }

        // Upper-left diagonal: rows and columns both decrease.
        let (mut r, mut c) = (row, col);
        while r > 0 && c > 0 {
            r -= 1;
            c -= 1;
            if self.get(r, c) == Cell::Queen {
                return false;
            }
        }

        true
    }

    /// For a complete placement, the queen's row in each column,
    /// left to right. Columns without a queen are omitted.
    pub fn queen_rows(&self) -> Vec<usize> {
        (0..self.size)
            .filter_map(|col| (0..self.size).find(|&row| self.get(row, col) == Cell::Queen))
            .collect()
    }
}

impl fmt::Display for Board {
    /// Renders the grid one row per line, each cell followed by a
    /// single space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                write!(f, "{} ", self.get(row, col).as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
