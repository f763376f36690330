use crate::game::{Board, Mark};

/// Interface for computer-controlled participants.
pub trait Agent {
    /// Pick a column for `me` to play on `board`. The board may be mutated
    /// while deciding but must be handed back unchanged.
    ///
    /// Returns `None` only when no column is available.
    fn select_column(&mut self, board: &mut Board, me: Mark, opponent: Mark) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
