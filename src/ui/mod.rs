//! Terminal UI: a 7x7 board with a movable cursor for playing against the
//! computer.

mod app;
mod game_view;

pub use app::App;
