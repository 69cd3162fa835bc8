//! Stateless UI rendering for tic-tac-toe.

use super::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tictactoe_timeline::{Board, Mark, Position};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board and history
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe - Time Travel")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_history(frame, body[1], app);

    let status = match app.last_action() {
        Some(action) => format!("{}  ({})", app.state().status_text(), action),
        None => app.state().status_text(),
    };
    let status_color = match app.state().status().winner() {
        Some(_) => Color::Green,
        None => Color::Yellow,
    };
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    let help = Paragraph::new(
        "arrows move | enter play | 1-9 play | tab history | [ ] step | home start | q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board = app.state().board();
    let line = app.state().winning_line();
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, chunk, app, &board, line, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    board: &Board,
    line: Option<[Position; 3]>,
    row: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, chunk) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_row_col(row, col) {
            let winning = line.is_some_and(|cells| cells.contains(&pos));
            draw_cell(frame, chunk, app, board, pos, winning);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, board: &Board, pos: Position, winning: bool) {
    let mark = board.get(pos);
    let symbol = if mark.is_some() || app.show_cell_numbers() {
        format!(" {} ", board.symbol(pos))
    } else {
        "   ".to_string()
    };
    let base_style = match mark {
        None => Style::default().fg(Color::DarkGray),
        Some(_) if winning => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Some(Mark::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Some(Mark::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let style = if app.focus() == Focus::Board && pos == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center the symbol inside the 3-line cell.
    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(symbol, style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.state().current_move();
    let items: Vec<ListItem> = app
        .state()
        .history_entries()
        .map(|entry| {
            let marker = if entry.move_number == current { "▶ " } else { "  " };
            ListItem::new(format!("{}{}", marker, entry))
        })
        .collect();

    let border_style = if app.focus() == Focus::History {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("History"),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if app.focus() == Focus::History {
        state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).expect("Terminal");
        terminal.draw(|f| draw(f, app)).expect("Draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_empty_game() {
        let app = App::new(true);
        let screen = render(&app);
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("Go to game start"));
        assert!(!screen.contains("Go to move #1"));
    }

    #[test]
    fn test_renders_moves_and_history() {
        let mut app = App::new(true);
        for c in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(c));
        }
        let screen = render(&app);
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("Go to move #5"));
        assert!(screen.contains(" X "));
    }

    fn fg_of(app: &App, symbol: &str) -> Vec<Color> {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).expect("Terminal");
        terminal.draw(|f| draw(f, app)).expect("Draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .filter(|cell| cell.symbol() == symbol)
            .map(|cell| cell.fg)
            .collect()
    }

    #[test]
    fn test_winning_line_is_highlighted() {
        let mut app = App::new(false);
        // X takes the top row, O sits on 4 and 5.
        for c in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(c));
        }
        let xs = fg_of(&app, "X");
        assert!(xs.iter().filter(|fg| **fg == Color::Green).count() >= 3);
        let os = fg_of(&app, "O");
        assert!(os.contains(&Color::Red));
        assert!(!os.contains(&Color::Green));
    }

    #[test]
    fn test_no_highlight_after_jumping_back() {
        let mut app = App::new(false);
        for c in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Char('['));
        assert!(!fg_of(&app, "X").contains(&Color::Green));
    }

    #[test]
    fn test_hides_cell_numbers_when_disabled() {
        let screen = render(&App::new(false));
        assert!(!screen.contains(" 5 "));
        let screen = render(&App::new(true));
        assert!(screen.contains(" 5 "));
    }
}
