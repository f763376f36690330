//! Orchestration around the board: who sits where, turn alternation within
//! a round, and the interactive console loop that repeats rounds.

mod console;
mod participant;
mod round;

pub use console::Session;
pub use participant::{validate_name, NameError, Participant};
pub use round::{MoveError, Round};
