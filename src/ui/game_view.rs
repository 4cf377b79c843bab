use super::board_widget::{board_lines, player_color};
use crate::game::{GameOutcome, GameTimeline, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    timeline: &GameTimeline<Player>,
    selected_column: usize,
    message: &Option<String>,
) {
    let board_height = timeline.current_board().height() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header
            Constraint::Min(board_height + 4), // Board + move list
            Constraint::Length(3),             // Message
            Constraint::Length(3),             // Controls
        ])
        .split(frame.area());

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(24)])
        .split(chunks[1]);

    render_header(frame, timeline, chunks[0]);
    render_board(frame, timeline, selected_column, middle[0]);
    render_history(frame, timeline, middle[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, timeline: &GameTimeline<Player>, area: Rect) {
    let (status, color) = match timeline.outcome() {
        Some(GameOutcome::Winner(player)) => {
            (format!("Winner: {}", player.name()), player_color(player))
        }
        Some(GameOutcome::Draw) => ("Draw".to_string(), Color::White),
        None => {
            let player = timeline.current_player();
            (format!("Next player: {}", player.name()), player_color(player))
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    timeline: &GameTimeline<Player>,
    selected_column: usize,
    area: Rect,
) {
    let board = timeline.current_board();
    let width = board.width();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(width * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));
    lines.extend(board_lines(board, "  ║", " ║"));
    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

/// Move list with the snapshot under the cursor highlighted.
fn render_history(frame: &mut Frame, timeline: &GameTimeline<Player>, area: Rect) {
    let current = timeline.current_move();
    let mut lines = vec![history_line(0, "Game start".to_string(), None, current)];
    for (i, mv) in timeline.moves().iter().enumerate() {
        let index = i + 1;
        let text = format!("{} → column {}", mv.mark.name(), mv.column + 1);
        lines.push(history_line(index, text, Some(player_color(mv.mark)), current));
    }

    // Keep the cursor visible when the list is longer than the panel.
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = (current + 1).saturating_sub(visible) as u16;

    let widget = Paragraph::new(lines).scroll((scroll, 0)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Moves {}/{}", current, timeline.history_len() - 1)),
    );
    frame.render_widget(widget, area);
}

fn history_line(
    index: usize,
    text: String,
    color: Option<Color>,
    current: usize,
) -> Line<'static> {
    let mut style = Style::default();
    if let Some(color) = color {
        style = style.fg(color);
    }
    if index == current {
        style = style.add_modifier(Modifier::REVERSED);
    } else if index > current {
        style = style.add_modifier(Modifier::DIM);
    }
    Line::from(Span::styled(format!("{index:>3}. {text}"), style))
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from(
        "←/→: Move  |  Enter: Drop  |  U/Y: Undo/Redo  |  Home/End: Jump  |  R: Restart  |  Q: Quit",
    );

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
