//! # Connect Four
//!
//! A Connect Four game engine for any board size, win length and number of
//! players, with a move history supporting undo, redo, jumping to any
//! earlier position and restarting. Ships with a terminal UI built with
//! Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player marks, game timeline
//! - [`ui`]: Terminal UI: board view, move list, controls
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
