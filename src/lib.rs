//! # Connect Four
//!
//! Two-player Connect Four for the terminal. The core is a session-owning
//! game engine — board, turn order, move legality, win/draw detection,
//! single-level undo, and running scores across games — consumed by a
//! Ratatui front end with no game logic of its own.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, session engine
//! - [`ui`] — Terminal UI: game view, board widget, input handling
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
