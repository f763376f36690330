use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Terminal result of a round, as handed to the history store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum RoundOutcome {
    Win { name: String },
    Draw,
}

/// One line of the results file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub timestamp: u64,
    pub outcome: RoundOutcome,
}

/// Aggregate over all recorded rounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistorySummary {
    pub rounds: usize,
    pub draws: usize,
    pub wins: BTreeMap<String, usize>,
}

impl HistorySummary {
    pub fn from_records(records: &[RoundRecord]) -> Self {
        let mut summary = HistorySummary::default();
        for record in records {
            summary.rounds += 1;
            match &record.outcome {
                RoundOutcome::Win { name } => *summary.wins.entry(name.clone()).or_default() += 1,
                RoundOutcome::Draw => summary.draws += 1,
            }
        }
        summary
    }

    /// Wins recorded for `name`.
    pub fn wins_for(&self, name: &str) -> usize {
        self.wins.get(name).copied().unwrap_or(0)
    }
}
