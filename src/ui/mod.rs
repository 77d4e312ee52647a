//! Terminal UI for playing a match with the keyboard.

mod app;
mod game_view;

pub use app::App;
