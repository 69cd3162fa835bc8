//! Non-interactive replay: play a list of cells and print the result.

use anyhow::{Context, Result};
use serde::Serialize;
use tictactoe_timeline::{GameState, Snapshot};
use tracing::{info, instrument, warn};

/// A replayed cell that the game refused.
#[derive(Debug, Clone, Serialize)]
struct IgnoredMove {
    cell: usize,
    reason: String,
}

/// JSON form of a replay: the final snapshot plus every refused cell.
#[derive(Debug, Clone, Serialize)]
struct ReplayReport {
    #[serde(flatten)]
    snapshot: Snapshot,
    ignored: Vec<IgnoredMove>,
}

/// Plays `cells` in order, optionally jumps, and renders the outcome.
///
/// Ignored moves are reported as warnings and skipped.
#[instrument]
pub fn run_replay(cells: &[usize], jump: Option<usize>, json: bool) -> Result<String> {
    let mut game = GameState::new();
    let mut ignored = Vec::new();

    for &cell in cells {
        if let Err(e) = game.play(cell) {
            warn!(cell, error = %e, "Move ignored");
            ignored.push(IgnoredMove {
                cell,
                reason: e.to_string(),
            });
        }
    }

    if let Some(target) = jump {
        game.jump_to(target).context("Invalid --jump")?;
    }

    info!(
        current_move = game.current_move(),
        history_len = game.history_len(),
        "Replay finished"
    );

    if json {
        let report = ReplayReport {
            snapshot: game.snapshot(),
            ignored,
        };
        return serde_json::to_string_pretty(&report).context("Failed to encode board");
    }

    let mut out = String::new();
    for skipped in &ignored {
        out.push_str(&format!("warning: cell {} ignored: {}\n", skipped.cell, skipped.reason));
    }
    out.push_str(&game.board().to_string());
    out.push_str("\n\n");
    out.push_str(&game.status_text());
    out.push_str("\n\n");
    for entry in game.history_entries() {
        let marker = if entry.move_number == game.current_move() { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry));
    }
    Ok(out)
}
