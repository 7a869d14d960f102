//! # Connect Four
//!
//! A two-player Connect Four game for the terminal. The board engine is a
//! plain value type with explicit state transitions; the terminal UI (Ratatui)
//! and the headless move runner are thin layers on top of it.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`ui`] — Terminal UI: input translation, game view, end-of-game notice
//! - [`headless`] — Play a scripted list of columns without a terminal UI
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — Log subscriber setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod headless;
pub mod logging;
pub mod ui;
