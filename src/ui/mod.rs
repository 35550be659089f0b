//! Terminal UI: a ratatui view that drives a [`GameController`] from
//! keyboard input.
//!
//! [`GameController`]: crate::game::GameController

mod app;
mod game_view;

pub use app::App;
