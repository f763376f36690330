//! Plain text rendering of board snapshots, round results and the history
//! tally for the console session.

mod board_view;

pub use board_view::{describe_status, render_board, render_summary};
