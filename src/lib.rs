//! # Connect Four
//!
//! A two-player Connect Four game. The game logic is independent of any UI;
//! a terminal front-end built with Ratatui drives it from the keyboard.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win detection, controller
//! - [`ui`] — Terminal UI: board view, status line, key handling
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — Tracing subscriber setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
