//! Terminal UI: board view with column selector, move list and time-travel
//! controls.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
