//! # Connect Four
//!
//! Two-player Connect Four on a 6x7 board, for two people or one person
//! against a computer opponent that looks exactly one move ahead.
//!
//! ## Modules
//!
//! - [`game`]: Board placement, rollback, win and draw detection
//! - [`ai`]: Win/block/random move selection for the computer side
//! - [`session`]: Participants, rounds and the interactive console loop
//! - [`history`]: Results log loaded at startup and appended per round
//! - [`ui`]: Text rendering of boards and result tallies
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod history;
pub mod session;
pub mod ui;
