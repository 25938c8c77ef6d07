pub mod controls;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, Screen};
use crate::games::breakout::Outcome;
use crate::games::Game;

const OVERLAY_BG: Color = Color::Rgb(15, 15, 25);

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Play field
            Constraint::Length(3), // Control panel
        ])
        .split(frame.area());

    app.breakout.render(frame, chunks[0]);
    controls::render_controls(frame, &app.breakout, chunks[1]);

    // Overlays render on top of everything
    let area = frame.area();
    match app.screen {
        Screen::NameEntry => render_name_entry(frame, area, &app.name_buffer),
        Screen::Finished(outcome) => {
            if let Some(message) = app.final_message() {
                render_final_dialog(frame, area, outcome, &message);
            }
        }
        Screen::Playing => {}
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(4));
    let h = height.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

fn render_name_entry(frame: &mut Frame, area: Rect, name_buffer: &str) {
    let overlay_area = centered(area, 44, 9);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Rgb(255, 220, 80)))
        .title(" 🧱 Breakout Ball Game ")
        .title_style(Style::default().fg(Color::Rgb(255, 220, 80)).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(OVERLAY_BG));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Enter your name:", Style::default().fg(Color::Rgb(180, 180, 200))),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("    [ ", Style::default().fg(Color::Rgb(100, 100, 130))),
            Span::styled(name_buffer, Style::default().fg(Color::Rgb(255, 255, 255)).add_modifier(Modifier::BOLD)),
            Span::styled("_", Style::default().fg(Color::Rgb(255, 220, 80)).add_modifier(Modifier::SLOW_BLINK)),
            Span::styled(" ]", Style::default().fg(Color::Rgb(100, 100, 130))),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Enter", Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD)),
            Span::styled(" start  ", Style::default().fg(Color::Rgb(100, 100, 130))),
            Span::styled("Esc", Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD)),
            Span::styled(" skip", Style::default().fg(Color::Rgb(100, 100, 130))),
        ]),
    ];

    let p = Paragraph::new(lines).style(Style::default().bg(OVERLAY_BG));
    frame.render_widget(p, inner);
}

fn render_final_dialog(frame: &mut Frame, area: Rect, outcome: Outcome, message: &str) {
    let overlay_area = centered(area, 48, 9);
    frame.render_widget(Clear, overlay_area);

    let (title, color) = match outcome {
        Outcome::Lost { .. } => (" 💀 Game Over ", Color::Rgb(255, 90, 90)),
        Outcome::Won { .. } => (" 🎉 You Won ", Color::Rgb(80, 220, 80)),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(color))
        .title(title)
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(OVERLAY_BG));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let mut lines = vec![Line::from("")];
    for text in message.lines() {
        lines.push(Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(Color::Rgb(255, 255, 255)).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD)),
        Span::styled(" OK", Style::default().fg(Color::Rgb(100, 100, 130))),
    ]));

    let p = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(OVERLAY_BG));
    frame.render_widget(p, inner);
}
