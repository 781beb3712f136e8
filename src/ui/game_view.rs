use crate::game::{GameEngine, GameStatus, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    engine: &GameEngine,
    selected_column: usize,
    message: &Option<String>,
    confirming_restart: bool,
    highlight_winning_cells: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, engine, chunks[0]);
    render_board(frame, engine, selected_column, highlight_winning_cells, chunks[1]);
    render_message(frame, engine, message, confirming_restart, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, engine: &GameEngine, area: ratatui::layout::Rect) {
    let scores = engine.scores();
    let scoreboard = format!(
        "Red {} — Yellow {}  |  Games: {}",
        scores.red,
        scores.yellow,
        engine.games_played()
    );

    let (status, color) = match engine.status() {
        GameStatus::Playing => {
            let player = engine.current_player();
            let color = player_color(player);
            (format!("{} to move  |  {}", player.name(), scoreboard), color)
        }
        GameStatus::Won => {
            // Winner is always present when the game is won.
            let winner = engine.winner().unwrap_or(Player::Red);
            (
                format!("{} wins!  |  {}", winner.name(), scoreboard),
                player_color(winner),
            )
        }
        GameStatus::Draw => (format!("Draw  |  {}", scoreboard), Color::Gray),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    engine: &GameEngine,
    selected_column: usize,
    highlight_winning_cells: bool,
    area: ratatui::layout::Rect,
) {
    let cells = engine.winning_cells();
    let winning: &[(usize, usize)] = match cells {
        Some(ref cells) if highlight_winning_cells => cells,
        _ => &[],
    };

    super::board_widget::render_board(frame, engine.board(), selected_column, winning, area);
}

fn render_message(
    frame: &mut Frame,
    engine: &GameEngine,
    message: &Option<String>,
    confirming_restart: bool,
    area: ratatui::layout::Rect,
) {
    let (text, style) = if confirming_restart {
        (
            format!(
                "Restart this game ({} moves played)?  y: confirm  |  any other key: cancel",
                engine.move_history().len()
            ),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            message.clone().unwrap_or_default(),
            Style::default().fg(Color::Yellow),
        )
    };

    let msg_widget = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line1 = Line::from("←/→ or 1-7: Select  |  Enter/Space: Drop  |  U: Undo");
    let line2 = Line::from(vec![
        Span::raw("N: New Game  |  R: Restart  |  C: Reset Scores  |  "),
        Span::styled("Q: Quit", Style::default().add_modifier(Modifier::BOLD)),
    ]);

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}
