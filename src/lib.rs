//! # Four in a Row
//!
//! A two-player Connect Four variant on a configurable rectangular grid,
//! played in the terminal with a Ratatui UI.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`ui`] — Terminal UI: board rendering and the input loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
