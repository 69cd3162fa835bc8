//! Tests for move history, winner detection, and branching.

use tictactoe_timeline::{GameState, Mark, PlayError, Position, Status, TimelineInvariants, InvariantSet};

fn play_all(state: &mut GameState, cells: &[usize]) {
    for &cell in cells {
        state.play(cell).expect("Valid move");
    }
}

#[test]
fn test_moves_alternate_starting_with_x() {
    let mut state = GameState::new();
    for (i, cell) in [4, 0, 8, 2, 6].into_iter().enumerate() {
        let before = state.current_move();
        let mv = state.play(cell).expect("Valid move").mv;
        assert_eq!(state.current_move(), before + 1);
        assert_eq!(mv.order, i);
        assert_eq!(mv.player, if i % 2 == 0 { Mark::X } else { Mark::O });
    }
}

#[test]
fn test_play_on_occupied_cell_is_noop() {
    let mut state = GameState::new();
    play_all(&mut state, &[4]);
    let before = state.clone();

    assert_eq!(state.play(4), Err(PlayError::CellOccupied(Position::Center)));
    assert_eq!(state, before);
}

#[test]
fn test_play_after_win_is_noop() {
    let mut state = GameState::new();
    play_all(&mut state, &[0, 3, 1, 4, 2]);
    let before = state.clone();

    assert_eq!(state.play(8), Err(PlayError::GameOver(Mark::X)));
    assert_eq!(state, before);
}

#[test]
fn test_row_win() {
    let mut state = GameState::new();
    play_all(&mut state, &[0, 3, 1, 4, 2]);
    assert_eq!(state.status(), Status::Winner(Mark::X));
    assert_eq!(state.status_text(), "Winner: X");
}

#[test]
fn test_column_win() {
    let mut state = GameState::new();
    play_all(&mut state, &[0, 1, 3, 4, 6]);
    assert_eq!(state.current_value(0), Some(Mark::X));
    assert_eq!(state.current_value(3), Some(Mark::X));
    assert_eq!(state.current_value(6), Some(Mark::X));
    assert_eq!(state.status_text(), "Winner: X");
}

#[test]
fn test_winner_disappears_after_jumping_back() {
    let mut state = GameState::new();
    play_all(&mut state, &[0, 1, 3, 4, 6]);
    state.jump_to(4).expect("In range");
    assert_eq!(state.winner(), None);
    assert_eq!(state.status_text(), "Next player: X");
}

#[test]
fn test_branch_prunes_abandoned_future() {
    let mut state = GameState::new();
    play_all(&mut state, &[0, 1, 3, 4]);
    assert_eq!(state.current_move(), 4);

    state.jump_to(2).expect("In range");
    assert_eq!(state.history_len(), 4);

    let placement = state.play(5).expect("Valid move");
    assert_eq!(placement.position, Position::MiddleRight);
    let mv = placement.mv;
    assert_eq!(mv.order, 2);
    assert_eq!(mv.player, Mark::X);
    assert_eq!(state.history_len(), 3);
    assert_eq!(state.current_move(), 3);

    // Moves originally at orders 2 and 3 are gone.
    assert_eq!(state.current_value(3), None);
    assert_eq!(state.current_value(4), None);
    assert!(state.log().iter().all(|p| p.position != Position::MiddleLeft));
    assert!(TimelineInvariants::check_all(&state).is_ok());
}

#[test]
fn test_rejected_play_after_jump_keeps_future() {
    let mut state = GameState::new();
    play_all(&mut state, &[0, 1, 3, 4]);
    state.jump_to(2).expect("In range");

    assert!(state.play(0).is_err());
    assert_eq!(state.history_len(), 4);
    state.jump_to(4).expect("Future still reachable");
    assert_eq!(state.current_value(4), Some(Mark::O));
}

#[test]
fn test_cells_past_cursor_read_empty() {
    let mut state = GameState::new();
    play_all(&mut state, &[0, 1, 2, 3, 4]);
    for target in 0..=5 {
        state.jump_to(target).expect("In range");
        for placement in state.log() {
            let value = state.current_value(placement.position.index());
            if placement.mv.order >= target {
                assert_eq!(value, None);
            } else {
                assert_eq!(value, Some(placement.mv.player));
            }
        }
    }
}

#[test]
fn test_history_list_length() {
    let mut state = GameState::new();
    assert_eq!(state.history_entries().count(), 1);

    play_all(&mut state, &[0, 1, 2]);
    assert_eq!(state.history_entries().count(), state.history_len() + 1);

    state.jump_to(1).expect("In range");
    assert_eq!(state.history_entries().count(), 4);

    play_all(&mut state, &[8]);
    assert_eq!(state.history_entries().count(), 3);

    let labels: Vec<String> = state.history_entries().map(|e| e.to_string()).collect();
    assert_eq!(labels, ["Go to game start", "Go to move #1", "Go to move #2"]);
}

#[test]
fn test_snapshot_serializes() {
    let mut state = GameState::new();
    play_all(&mut state, &[4]);
    let json = serde_json::to_value(state.snapshot()).expect("Serializable");
    assert_eq!(json["status"], "Next player: O");
    assert_eq!(json["cells"][4], "X");
    assert_eq!(json["cells"][0], serde_json::Value::Null);
    assert_eq!(json["history_len"], 1);
}
