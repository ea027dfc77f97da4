pub mod field;
pub mod overlay;

use ratatui::prelude::*;
use ratatui::widgets::*;

use invaders::game::config::{ENEMY_COLS, ENEMY_ROWS};
use invaders::game::{Phase, SimulationState};

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App) {
    let state = &app.state;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
        .title(" 👾 Invaders ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(200, 120, 255))
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Min(8),    // Arena
            Constraint::Length(1), // Controls
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(status_line(state)), chunks[0]);

    let fw = chunks[1].width as usize;
    let fh = chunks[1].height as usize;
    if fw > 0 && fh > 0 {
        let lines = field::render_field(state, fw, fh);
        frame.render_widget(Paragraph::new(lines), chunks[1]);
    }

    frame.render_widget(Paragraph::new(controls_line(state.phase)), chunks[2]);

    if state.phase != Phase::Playing {
        overlay::render_phase(frame, chunks[1], state);
    }
}

fn status_line(state: &SimulationState) -> Line<'static> {
    let lives = "\u{2665} ".repeat(state.session.lives as usize);
    let total = ENEMY_ROWS * ENEMY_COLS;
    Line::from(vec![
        Span::styled(
            format!(" Score: {} ", state.session.score),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Lives: {}", lives),
            Style::default().fg(Color::Rgb(255, 105, 180)).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Invaders: {}/{} ", state.formation.alive_count(), total),
            Style::default().fg(Color::Rgb(147, 252, 255)),
        ),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} ", state.variant.name()),
            Style::default().fg(Color::Rgb(198, 193, 255)),
        ),
    ])
}

fn controls_line(phase: Phase) -> Line<'static> {
    let sep = || Span::styled("| ", Style::default().fg(Color::Rgb(60, 60, 60)));
    match phase {
        Phase::Playing => Line::from(vec![
            Span::styled(" \u{2190}\u{2192}/A D Move ", Style::default().fg(Color::DarkGray)),
            sep(),
            Span::styled("Space Shoot ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            sep(),
            Span::styled("Q Quit", Style::default().fg(Color::DarkGray)),
        ]),
        _ => Line::from(vec![
            Span::styled(" Enter Start ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            sep(),
            Span::styled("1 Classic  2 Swift ", Style::default().fg(Color::DarkGray)),
            sep(),
            Span::styled("Q Quit", Style::default().fg(Color::DarkGray)),
        ]),
    }
}
