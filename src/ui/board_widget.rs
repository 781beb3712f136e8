use crate::game::{Board, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the board with column numbers, a selection indicator under the
/// chosen column, and an optional set of highlighted cells (the winning
/// line). Pass an empty `highlight` slice for no highlighting.
pub fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: usize,
    highlight: &[(usize, usize)],
    area: Rect,
) {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    // Top border
    lines.push(Line::from("  ╔══════════════════════╗"));

    // Board rows
    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let (symbol, color) = match board.get(row, col) {
                None => (" . ", Color::DarkGray),
                Some(Player::Red) => (" ● ", Color::Red),
                Some(Player::Yellow) => (" ● ", Color::Yellow),
            };

            let mut style = Style::default().fg(color);
            if highlight.contains(&(row, col)) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    // Bottom border
    lines.push(Line::from("  ╚══════════════════════╝"));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")]; // Align with board (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}
