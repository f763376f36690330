use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{Board, Mark};

use super::agent::Agent;

/// One move of foresight: take an immediate win, otherwise block the
/// opponent's immediate win, otherwise play a uniformly random column.
///
/// Candidates are simulated on `board` itself and rolled back, so the board
/// is identical on return. Ties go to the lowest column index. Returns
/// `None` when the board has no available column.
pub fn choose_column<R: Rng>(
    board: &mut Board,
    me: Mark,
    opponent: Mark,
    rng: &mut R,
) -> Option<usize> {
    let columns = board.available_columns();
    if columns.is_empty() {
        return None;
    }

    if let Some(col) = first_winning_column(board, &columns, me) {
        log::debug!("heuristic {:?}: winning move in column {}", me, col);
        return Some(col);
    }

    if let Some(col) = first_winning_column(board, &columns, opponent) {
        log::debug!("heuristic {:?}: blocking {:?} in column {}", me, opponent, col);
        return Some(col);
    }

    let col = columns[rng.random_range(0..columns.len())];
    log::debug!("heuristic {:?}: random column {} of {:?}", me, col, columns);
    Some(col)
}

fn first_winning_column(board: &mut Board, columns: &[usize], mark: Mark) -> Option<usize> {
    columns
        .iter()
        .copied()
        .find(|&col| wins_by_playing(board, col, mark))
}

/// Simulate `mark` in `col`, check for a win, then roll the disc back.
fn wins_by_playing(board: &mut Board, col: usize, mark: Mark) -> bool {
    let Ok(row) = board.place_disc(col, mark) else {
        return false;
    };
    let wins = board.check_win(mark);
    let undone = board.undo_place(row, col);
    debug_assert!(undone.is_ok(), "rollback of simulated disc failed");
    wins
}

/// Computer opponent wrapping [`choose_column`] with its own random source.
pub struct HeuristicAgent {
    rng: StdRng,
}

impl HeuristicAgent {
    pub fn new() -> Self {
        HeuristicAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic agent for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        HeuristicAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for HeuristicAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for HeuristicAgent {
    fn select_column(&mut self, board: &mut Board, me: Mark, opponent: Mark) -> Option<usize> {
        choose_column(board, me, opponent, &mut self.rng)
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}
