//! Core Connect Four game logic: immutable boards with gravity and line
//! detection, player marks, and a timeline of board snapshots with
//! undo/redo.

mod board;
mod player;
mod timeline;

pub use board::{Board, Cell, STANDARD_HEIGHT, STANDARD_WIDTH, STANDARD_WIN_LENGTH};
pub use player::Player;
pub use timeline::{BlockReason, GameOutcome, GameTimeline, Move, PlayOutcome};
