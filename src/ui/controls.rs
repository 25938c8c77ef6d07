use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::games::breakout::Breakout;
use crate::games::bricks::{BRICK_COLUMNS, BRICK_ROWS};
use crate::games::Game;

/// Label shown on the pause/resume button.
pub fn pause_label(paused: bool) -> &'static str {
    if paused {
        "Resume"
    } else {
        "Pause"
    }
}

pub fn render_controls(frame: &mut Frame, game: &Breakout, area: Rect) {
    let button_style = if game.is_paused() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Rgb(255, 220, 80))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Rgb(255, 220, 80))
            .add_modifier(Modifier::BOLD)
    };

    let line = Line::from(vec![
        Span::styled(format!("[ {} ]", pause_label(game.is_paused())), button_style),
        Span::styled(" │ ", Style::default().fg(Color::Rgb(60, 60, 80))),
        Span::styled(
            format!("Score: {}", game.get_score()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::Rgb(60, 60, 80))),
        Span::styled(
            format!("Lives: {}", game.lives()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::Rgb(60, 60, 80))),
        Span::styled(
            format!("Bricks: {}/{}", game.bricks.alive_count(), BRICK_ROWS * BRICK_COLUMNS),
            Style::default().fg(Color::Green),
        ),
    ]);

    let panel = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
            .border_type(BorderType::Rounded),
    );

    frame.render_widget(panel, area);
}
