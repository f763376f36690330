//! Persistent log of finished rounds: loaded once when a session starts,
//! appended to as each round ends.

mod record;
mod store;

pub use record::{HistorySummary, RoundOutcome, RoundRecord};
pub use store::HistoryStore;
