use crate::game::{Board, Cell, Player};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

pub fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
        Player::Black => Color::Blue,
    }
}

/// Styled three-character span for one cell
pub fn cell_span(cell: Cell<Player>) -> Span<'static> {
    match cell {
        Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(player) => {
            Span::styled(" \u{25cf} ", Style::default().fg(player_color(player)))
        }
    }
}

/// Board rows as lines, each prefixed and suffixed with the given borders.
pub fn board_lines(
    board: &Board<Player>,
    left: &'static str,
    right: &'static str,
) -> Vec<Line<'static>> {
    board
        .rows()
        .map(|row| {
            let mut spans = vec![Span::raw(left)];
            spans.extend(row.iter().map(|&cell| cell_span(cell)));
            spans.push(Span::raw(right));
            Line::from(spans)
        })
        .collect()
}
