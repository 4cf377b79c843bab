use std::fmt;

use crate::error::GameError;

pub const STANDARD_WIDTH: usize = 7;
pub const STANDARD_HEIGHT: usize = 6;
pub const STANDARD_WIN_LENGTH: usize = 4;

/// Line directions as (row delta, column delta), in the order they are tried:
/// horizontal, vertical, diagonal down-right, diagonal up-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell<M> {
    Empty,
    Occupied(M),
}

impl<M: Copy> Cell<M> {
    pub fn mark(self) -> Option<M> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// One grid position. Boards are never modified after construction: every
/// move produces a new board, so older snapshots stay valid.
///
/// Row 0 is the top, row `height - 1` is the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<M> {
    width: usize,
    height: usize,
    win_length: usize,
    cells: Vec<Cell<M>>,
}

impl<M: Copy + Eq> Board<M> {
    /// Create an empty board
    pub fn new(width: usize, height: usize, win_length: usize) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimension { width, height });
        }
        Ok(Board {
            width,
            height,
            win_length,
            cells: vec![Cell::Empty; width * height],
        })
    }

    /// Create the classic 7x6 board with a win length of 4
    pub fn standard() -> Self {
        Board {
            width: STANDARD_WIDTH,
            height: STANDARD_HEIGHT,
            win_length: STANDARD_WIN_LENGTH,
            cells: vec![Cell::Empty; STANDARD_WIDTH * STANDARD_HEIGHT],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Get the cell at a specific position, `None` when off the board
    pub fn get(&self, row: usize, col: usize) -> Option<Cell<M>> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell<M>]> {
        self.cells.chunks(self.width)
    }

    fn check_column(&self, column: usize) -> Result<(), GameError> {
        if column >= self.width {
            return Err(GameError::InvalidColumn {
                column,
                width: self.width,
            });
        }
        Ok(())
    }

    /// Row where a piece dropped into `column` would land, or `None` if the
    /// column is full.
    pub fn landing_row(&self, column: usize) -> Result<Option<usize>, GameError> {
        self.check_column(column)?;
        Ok((0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + column].is_empty()))
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        !matches!(self.landing_row(column), Ok(Some(_)))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Columns that can still take a piece, left to right
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Return a copy of this board with `mark` at `(row, column)`.
    pub fn place(&self, row: usize, column: usize, mark: M) -> Result<Board<M>, GameError> {
        self.check_column(column)?;
        if row >= self.height {
            return Err(GameError::InvalidRow {
                row,
                height: self.height,
            });
        }

        let index = row * self.width + column;
        if !self.cells[index].is_empty() {
            return Err(GameError::CellOccupied { row, column });
        }

        let mut next = self.clone();
        next.cells[index] = Cell::Occupied(mark);
        Ok(next)
    }

    /// Drop a piece in a column, returns the row where it landed and the new board
    pub fn drop_piece(&self, column: usize, mark: M) -> Result<(usize, Board<M>), GameError> {
        let row = self
            .landing_row(column)?
            .ok_or(GameError::ColumnFull { column })?;
        Ok((row, self.place(row, column, mark)?))
    }

    /// The mark owning a line of `win_length` cells, if any
    pub fn winner(&self) -> Option<M> {
        self.winner_with_length(self.win_length)
    }

    /// Scan rows top to bottom, columns left to right, and for each origin try
    /// every direction; the first complete line decides the result.
    pub fn winner_with_length(&self, desired_length: usize) -> Option<M> {
        // No line longer than the longest side fits on the board.
        if desired_length == 0 || desired_length > self.width.max(self.height) {
            return None;
        }

        for row in 0..self.height {
            for col in 0..self.width {
                let Some(mark) = self.cells[row * self.width + col].mark() else {
                    continue;
                };
                let wins = DIRECTIONS
                    .iter()
                    .any(|&dir| self.line_is_owned(row, col, dir, desired_length, mark));
                if wins {
                    return Some(mark);
                }
            }
        }
        None
    }

    /// True when the `length` cells starting at `(row, col)` in direction
    /// `(dr, dc)` all lie on the board and hold `mark`.
    fn line_is_owned(
        &self,
        row: usize,
        col: usize,
        (dr, dc): (isize, isize),
        length: usize,
        mark: M,
    ) -> bool {
        let span = length as isize - 1;
        let end_row = row as isize + dr * span;
        let end_col = col as isize + dc * span;
        if end_row < 0
            || end_col < 0
            || end_row >= self.height as isize
            || end_col >= self.width as isize
        {
            return false;
        }

        (0..length as isize).all(|i| {
            let r = (row as isize + dr * i) as usize;
            let c = (col as isize + dc * i) as usize;
            self.cells[r * self.width + c] == Cell::Occupied(mark)
        })
    }

    /// Render the board as text, one line per row, `.` for empty cells.
    pub fn render_with(&self, symbol: impl Fn(M) -> char) -> String {
        self.render_cells(|mark| symbol(mark).to_string())
    }

    fn render_cells(&self, symbol: impl Fn(M) -> String) -> String {
        let mut out = String::with_capacity((self.width * 2 + 1) * self.height);
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.mark().map_or_else(|| ".".to_string(), &symbol))
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }
}

impl<M: Copy + Eq + fmt::Display> fmt::Display for Board<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_cells(|mark| mark.to_string()))
    }
}

impl<M: Copy + Eq> Default for Board<M> {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    fn board_with(marks: &[(usize, usize, Player)]) -> Board<Player> {
        let mut board = Board::standard();
        for &(row, col, mark) in marks {
            board = board.place(row, col, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_new_board_is_empty() {
        let board: Board<Player> = Board::standard();
        for row in 0..STANDARD_HEIGHT {
            for col in 0..STANDARD_WIDTH {
                assert_eq!(board.get(row, col), Some(Cell::Empty));
            }
        }
        assert_eq!(board.get(STANDARD_HEIGHT, 0), None);
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Board::<Player>::new(0, 6, 4),
            Err(GameError::InvalidDimension { width: 0, height: 6 })
        );
        assert!(Board::<Player>::new(7, 0, 4).is_err());
        assert!(Board::<Player>::new(1, 1, 4).is_ok());
    }

    #[test]
    fn test_landing_row_follows_gravity() {
        let board = board_with(&[(5, 3, Player::Red)]);
        assert_eq!(board.landing_row(0), Ok(Some(5)));
        assert_eq!(board.landing_row(3), Ok(Some(4)));
    }

    #[test]
    fn test_landing_row_is_highest_empty_index() {
        // Gaps above an occupied cell are not possible through drop_piece, but
        // place allows them; the landing row is still the lowest empty cell.
        let board = board_with(&[(2, 1, Player::Red)]);
        assert_eq!(board.landing_row(1), Ok(Some(5)));
    }

    #[test]
    fn test_landing_row_full_and_invalid_column() {
        let mut board: Board<Player> = Board::standard();
        for _ in 0..STANDARD_HEIGHT {
            board = board.drop_piece(0, Player::Red).unwrap().1;
        }
        assert_eq!(board.landing_row(0), Ok(None));
        assert!(board.is_column_full(0));
        assert_eq!(
            board.landing_row(7),
            Err(GameError::InvalidColumn { column: 7, width: 7 })
        );
        assert!(board.is_column_full(7));
    }

    #[test]
    fn test_drop_piece() {
        let board: Board<Player> = Board::standard();

        let (row, board) = board.drop_piece(3, Player::Red).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Some(Cell::Occupied(Player::Red)));

        let (row, board) = board.drop_piece(3, Player::Yellow).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Some(Cell::Occupied(Player::Yellow)));
    }

    #[test]
    fn test_drop_piece_column_full() {
        let mut board: Board<Player> = Board::standard();
        for _ in 0..STANDARD_HEIGHT {
            board = board.drop_piece(0, Player::Red).unwrap().1;
        }
        assert_eq!(
            board.drop_piece(0, Player::Yellow),
            Err(GameError::ColumnFull { column: 0 })
        );
    }

    #[test]
    fn test_place_leaves_source_untouched() {
        let before = board_with(&[(5, 0, Player::Red)]);
        let after = before.place(5, 1, Player::Yellow).unwrap();

        assert_eq!(before.get(5, 1), Some(Cell::Empty));
        assert_eq!(after.get(5, 1), Some(Cell::Occupied(Player::Yellow)));
        for row in 0..STANDARD_HEIGHT {
            for col in 0..STANDARD_WIDTH {
                if (row, col) != (5, 1) {
                    assert_eq!(before.get(row, col), after.get(row, col));
                }
            }
        }
    }

    #[test]
    fn test_place_rejects_occupied_and_out_of_range() {
        let board = board_with(&[(5, 0, Player::Red)]);
        assert_eq!(
            board.place(5, 0, Player::Yellow),
            Err(GameError::CellOccupied { row: 5, column: 0 })
        );
        assert_eq!(
            board.place(6, 0, Player::Yellow),
            Err(GameError::InvalidRow { row: 6, height: 6 })
        );
        assert!(matches!(
            board.place(0, 9, Player::Yellow),
            Err(GameError::InvalidColumn { .. })
        ));
    }

    #[test]
    fn test_full_board() {
        let mut board: Board<Player> = Board::standard();
        for col in 0..STANDARD_WIDTH {
            for _ in 0..STANDARD_HEIGHT {
                board = board.drop_piece(col, Player::Red).unwrap().1;
            }
        }
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        for width in 2..6 {
            for height in 2..6 {
                for len in 2..5 {
                    let board: Board<Player> = Board::new(width, height, len).unwrap();
                    assert_eq!(board.winner(), None);
                }
            }
        }
    }

    #[test]
    fn test_horizontal_win() {
        let board = board_with(&[
            (5, 0, Player::Red),
            (5, 1, Player::Red),
            (5, 2, Player::Red),
            (5, 3, Player::Red),
        ]);
        assert_eq!(board.winner(), Some(Player::Red));
    }

    #[test]
    fn test_vertical_win() {
        let mut board: Board<Player> = Board::standard();
        for _ in 0..4 {
            board = board.drop_piece(3, Player::Yellow).unwrap().1;
        }
        assert_eq!(board.winner(), Some(Player::Yellow));
    }

    #[test]
    fn test_primary_diagonal_win() {
        let board = board_with(&[
            (2, 2, Player::Black),
            (3, 3, Player::Black),
            (4, 4, Player::Black),
            (5, 5, Player::Black),
        ]);
        assert_eq!(board.winner(), Some(Player::Black));
    }

    #[test]
    fn test_secondary_diagonal_win() {
        // Starts on row 3 = win_length - 1, the highest origin row that fits.
        let board = board_with(&[
            (3, 0, Player::Red),
            (2, 1, Player::Red),
            (1, 2, Player::Red),
            (0, 3, Player::Red),
        ]);
        assert_eq!(board.winner(), Some(Player::Red));
    }

    #[test]
    fn test_no_win_with_three() {
        let board = board_with(&[
            (5, 0, Player::Red),
            (5, 1, Player::Red),
            (5, 2, Player::Red),
        ]);
        assert_eq!(board.winner(), None);
        assert_eq!(board.winner_with_length(3), Some(Player::Red));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (5, 0, Player::Red),
            (5, 1, Player::Red),
            (5, 2, Player::Yellow),
            (5, 3, Player::Red),
        ]);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_unsatisfiable_length_never_wins() {
        let mut board: Board<Player> = Board::new(3, 3, 5).unwrap();
        for col in 0..3 {
            for _ in 0..3 {
                board = board.drop_piece(col, Player::Red).unwrap().1;
            }
        }
        assert_eq!(board.winner(), None);
        assert_eq!(board.winner_with_length(0), None);
    }

    #[test]
    fn test_huge_length_never_wins() {
        let (_, board) = Board::standard().drop_piece(3, Player::Red).unwrap();
        assert_eq!(board.winner_with_length(usize::MAX), None);
        assert_eq!(board.winner_with_length(isize::MAX as usize), None);
        assert_eq!(board.winner_with_length(8), None);

        let board: Board<Player> = Board::new(7, 6, usize::MAX).unwrap();
        let (_, board) = board.drop_piece(3, Player::Red).unwrap();
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_longest_side_length_can_win() {
        let mut board: Board<Player> = Board::new(7, 6, 7).unwrap();
        for col in 0..7 {
            board = board.drop_piece(col, Player::Yellow).unwrap().1;
        }
        assert_eq!(board.winner(), Some(Player::Yellow));
    }

    #[test]
    fn test_scan_order_tie_break() {
        // Both marks own a line; the one whose origin is reached first wins.
        let board = board_with(&[
            (1, 0, Player::Yellow),
            (1, 1, Player::Yellow),
            (1, 2, Player::Yellow),
            (1, 3, Player::Yellow),
            (5, 0, Player::Red),
            (5, 1, Player::Red),
            (5, 2, Player::Red),
            (5, 3, Player::Red),
        ]);
        assert_eq!(board.winner(), Some(Player::Yellow));
    }

    #[test]
    fn test_display() {
        let board: Board<Player> = Board::new(3, 2, 2).unwrap();
        let (_, board) = board.drop_piece(1, Player::Red).unwrap();
        assert_eq!(board.to_string(), ". . .\n. R .\n");
        assert_eq!(
            board.render_with(|p| p.name().chars().next().unwrap_or('?')),
            ". . .\n. R .\n"
        );
    }
}
