use std::fmt::Debug;

use tracing::{debug, trace};

use super::Board;
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome<M> {
    Winner(M),
    Draw,
}

/// Why a `play` call left the timeline unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    ColumnFull,
    GameDecided,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome<M> {
    Placed { row: usize, column: usize, mark: M },
    Blocked(BlockReason),
}

impl<M> PlayOutcome<M> {
    pub fn is_placed(&self) -> bool {
        matches!(self, PlayOutcome::Placed { .. })
    }
}

/// A single piece placement recorded in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move<M> {
    pub row: usize,
    pub column: usize,
    pub mark: M,
}

/// Board snapshots of one game plus a cursor into them.
///
/// `history[0]` is always the empty board. Whose turn it is depends only on
/// the cursor: snapshot `i` is followed by a move from `players[i % n]`.
/// Playing from an earlier snapshot discards every later one.
#[derive(Debug, Clone)]
pub struct GameTimeline<M> {
    history: Vec<Board<M>>,
    current_move: usize,
    players: Vec<M>,
    lock_after_win: bool,
}

impl<M: Copy + Eq + Debug> GameTimeline<M> {
    /// Start a game on an empty `width` x `height` board. `players` gives the
    /// turn order and must hold at least two distinct marks.
    pub fn new(
        width: usize,
        height: usize,
        win_length: usize,
        players: Vec<M>,
    ) -> Result<Self, GameError> {
        if players.len() < 2 {
            return Err(GameError::NotEnoughPlayers {
                count: players.len(),
            });
        }
        for (first, a) in players.iter().enumerate() {
            if let Some(offset) = players[first + 1..].iter().position(|b| b == a) {
                return Err(GameError::DuplicatePlayer {
                    first,
                    second: first + 1 + offset,
                });
            }
        }

        let board = Board::new(width, height, win_length)?;
        Ok(GameTimeline {
            history: vec![board],
            current_move: 0,
            players,
            lock_after_win: true,
        })
    }

    /// Whether `play` is refused once the current board has a winner.
    /// Enabled by default.
    pub fn with_lock_after_win(mut self, lock: bool) -> Self {
        self.lock_after_win = lock;
        self
    }

    pub fn lock_after_win(&self) -> bool {
        self.lock_after_win
    }

    pub fn current_board(&self) -> &Board<M> {
        &self.history[self.current_move]
    }

    pub fn current_player(&self) -> M {
        self.players[self.current_move % self.players.len()]
    }

    pub fn winner(&self) -> Option<M> {
        self.current_board().winner()
    }

    /// Winner, draw on a full board, or `None` while the game is in progress
    pub fn outcome(&self) -> Option<GameOutcome<M>> {
        let board = self.current_board();
        match board.winner() {
            Some(mark) => Some(GameOutcome::Winner(mark)),
            None if board.is_full() => Some(GameOutcome::Draw),
            None => None,
        }
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &[Board<M>] {
        &self.history
    }

    pub fn players(&self) -> &[M] {
        &self.players
    }

    pub fn can_undo(&self) -> bool {
        self.current_move > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current_move + 1 < self.history.len()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// A full column or an already decided game leaves everything unchanged
    /// and reports [`PlayOutcome::Blocked`]. On success any snapshots after
    /// the cursor are discarded before the new one is appended.
    pub fn play(&mut self, column: usize) -> Result<PlayOutcome<M>, GameError> {
        let board = self.current_board();
        let landing = board.landing_row(column)?;

        if self.lock_after_win && board.winner().is_some() {
            trace!(column, "play ignored, game already decided");
            return Ok(PlayOutcome::Blocked(BlockReason::GameDecided));
        }
        let Some(row) = landing else {
            trace!(column, "play ignored, column full");
            return Ok(PlayOutcome::Blocked(BlockReason::ColumnFull));
        };

        let mark = self.current_player();
        let next = board.place(row, column, mark)?;

        let discarded = self.history.len() - (self.current_move + 1);
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        debug!(
            ?mark,
            row,
            column,
            current_move = self.current_move,
            discarded,
            "piece placed"
        );
        Ok(PlayOutcome::Placed { row, column, mark })
    }

    /// Move the cursor to `index` without touching the history.
    pub fn jump_to(&mut self, index: usize) -> Result<(), GameError> {
        if index >= self.history.len() {
            return Err(GameError::OutOfRange {
                index,
                len: self.history.len(),
            });
        }
        debug!(from = self.current_move, to = index, "jump");
        self.current_move = index;
        Ok(())
    }

    /// Step back one snapshot. Returns false at the start of the history.
    pub fn undo(&mut self) -> bool {
        match self.current_move.checked_sub(1) {
            Some(index) => self.jump_to(index).is_ok(),
            None => false,
        }
    }

    /// Step forward one snapshot. Returns false at the end of the history.
    pub fn redo(&mut self) -> bool {
        self.jump_to(self.current_move + 1).is_ok()
    }

    /// Back to the empty board; dimensions and players are kept.
    pub fn restart(&mut self) {
        self.history.truncate(1);
        self.current_move = 0;
        debug!("restart");
    }

    /// Moves that produced the full history, in order. Each entry is
    /// recovered from the single cell that differs between neighbouring
    /// snapshots.
    pub fn moves(&self) -> Vec<Move<M>> {
        self.history
            .windows(2)
            .filter_map(|pair| {
                let (before, after) = (&pair[0], &pair[1]);
                (0..after.height())
                    .flat_map(|row| (0..after.width()).map(move |column| (row, column)))
                    .find_map(|(row, column)| {
                        match (before.get(row, column)?.mark(), after.get(row, column)?.mark()) {
                            (None, Some(mark)) => Some(Move { row, column, mark }),
                            _ => None,
                        }
                    })
            })
            .collect()
    }
}
