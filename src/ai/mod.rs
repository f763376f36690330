mod agent;
mod heuristic;

pub use agent::Agent;
pub use heuristic::{choose_column, HeuristicAgent};
