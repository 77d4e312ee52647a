//! # Connect Four
//!
//! A two-player Connect Four game. The core engine owns the board, applies
//! gravity, detects four-in-a-row and alternates turns; front ends talk to it
//! through the [`game::ColumnSource`] and [`game::Renderer`] traits.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win detection, turn controller
//! - [`console`] — Prompt-and-print front end with ANSI colours
//! - [`ui`] — Ratatui terminal UI
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod ui;
