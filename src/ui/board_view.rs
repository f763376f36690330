use std::fmt::Write;

use crate::game::{Board, GameStatus, COLS};
use crate::history::HistorySummary;
use crate::session::Participant;

/// Render the board as text: 1-based column numbers, framed grid, one
/// symbol per cell.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    // Column numbers (3 chars to match "  |")
    out.push_str("   ");
    for col in 0..COLS {
        out.push_str(&format!(" {} ", col + 1));
    }
    out.push('\n');

    let border = format!("  +{}+\n", "-".repeat(COLS * 3 + 1));
    out.push_str(&border);
    for row in board.cells() {
        out.push_str("  |");
        for cell in row {
            out.push_str(&format!(" {} ", cell.symbol()));
        }
        out.push_str(" |\n");
    }
    out.push_str(&border);
    out
}

/// One-line description of a finished or ongoing round.
pub fn describe_status(status: GameStatus, winner: Option<&Participant>, computer_name: &str) -> String {
    match (status, winner) {
        (GameStatus::Win(_), Some(p)) => format!("{} wins!", p.display_name(computer_name)),
        (GameStatus::Win(mark), None) => format!("{} wins!", mark.symbol()),
        (GameStatus::Draw, _) => "It's a draw!".to_string(),
        (GameStatus::InProgress, _) => "Round in progress".to_string(),
    }
}

/// Multi-line tally of past results.
pub fn render_summary(summary: &HistorySummary) -> String {
    let mut out = String::new();
    if summary.rounds == 0 {
        out.push_str("No rounds recorded yet.\n");
        return out;
    }

    let _ = writeln!(out, "Rounds played: {}", summary.rounds);
    let mut wins: Vec<(&String, &usize)> = summary.wins.iter().collect();
    wins.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (name, count) in wins {
        let _ = writeln!(out, "  {}: {} win{}", name, count, if *count == 1 { "" } else { "s" });
    }
    let _ = writeln!(out, "  Draws: {}", summary.draws);
    out
}
