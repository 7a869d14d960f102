use crate::config::PieceColor;
use crate::game::{Board, GameState, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Left margin before the first column ("  ║").
const BOARD_MARGIN: u16 = 3;
const CELL_WIDTH: u16 = 3;
const BOARD_WIDTH: u16 = BOARD_MARGIN + CELL_WIDTH * COLS as u16 + 2;
/// Column numbers, top border, cells, bottom border, selector.
const BOARD_HEIGHT: u16 = ROWS as u16 + 4;

/// Everything the view needs to draw one frame.
pub struct GameView<'a> {
    pub state: &'a GameState,
    pub selected_column: usize,
    pub message: Option<&'a str>,
    pub player_one_color: PieceColor,
    pub player_two_color: PieceColor,
}

impl GameView<'_> {
    fn color_of(&self, player: Player) -> Color {
        match player {
            Player::One => to_color(self.player_one_color),
            Player::Two => to_color(self.player_two_color),
        }
    }
}

pub fn to_color(color: PieceColor) -> Color {
    match color {
        PieceColor::Red => Color::Red,
        PieceColor::Yellow => Color::Yellow,
        PieceColor::Blue => Color::Blue,
        PieceColor::Green => Color::Green,
        PieceColor::Magenta => Color::Magenta,
        PieceColor::Cyan => Color::Cyan,
    }
}

/// Draw the game screen. Returns the area the board occupies, for mouse
/// hit-testing.
pub fn render(frame: &mut Frame, view: &GameView) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(3),         // Message
            Constraint::Length(3),         // Controls
        ])
        .split(frame.area());

    render_header(frame, view, chunks[0]);
    let board_area = board_rect(chunks[1]);
    render_board(frame, view, board_area);
    render_message(frame, view.message, chunks[2]);
    render_controls(frame, chunks[3]);

    board_area
}

/// Fixed-size board area centred in `area`.
pub fn board_rect(area: Rect) -> Rect {
    let width = BOARD_WIDTH.min(area.width);
    let height = BOARD_HEIGHT.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Column under a terminal position inside the board area: the number row,
/// the top border, or any cell row.
pub fn column_at(board_area: Rect, x: u16, y: u16) -> Option<usize> {
    let clickable_rows = ROWS as u16 + 2;
    if y < board_area.y || y >= board_area.y + clickable_rows {
        return None;
    }
    let offset = x.checked_sub(board_area.x + BOARD_MARGIN)?;
    let col = (offset / CELL_WIDTH) as usize;
    (col < COLS).then_some(col)
}

fn render_header(frame: &mut Frame, view: &GameView, area: Rect) {
    let state = view.state;

    let (status, color) = match state.status().winner() {
        Some(winner) => ("Game Over".to_string(), view.color_of(winner)),
        None if state.is_terminal() => ("Game Over".to_string(), Color::White),
        None => {
            let player = state.current_player();
            (
                format!("Current Player: {}", player.name()),
                view.color_of(player),
            )
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

fn render_board(frame: &mut Frame, view: &GameView, area: Rect) {
    let board: &Board = view.state.board();
    let winning_run = view
        .state
        .status()
        .winner()
        .and_then(|player| board.winning_run(player));

    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        let label = format!(" {} ", col + 1);
        if col == view.selected_column {
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
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  ╔{}╗", "═".repeat(CELL_WIDTH as usize * COLS + 1))));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let span = match board.get(row, col).player() {
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Some(player) => {
                    let mut style = Style::default().fg(view.color_of(player));
                    if winning_run.is_some_and(|run| run.contains(&(row, col))) {
                        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                    }
                    Span::styled(" ● ", style)
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{}╝", "═".repeat(CELL_WIDTH as usize * COLS + 1))));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == view.selected_column && !view.state.is_terminal() {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(indicator_line));

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  Enter/1-7/click: Drop  |  R: Restart  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Controls"),
    );

    frame.render_widget(controls, area);
}
