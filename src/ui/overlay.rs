use ratatui::prelude::*;
use ratatui::widgets::*;

use invaders::game::{Phase, SimulationState, Variant};

const PANEL_BG: Color = Color::Rgb(15, 15, 25);

/// Centered panel for the title, win and lose screens.
pub fn render_phase(frame: &mut Frame, area: Rect, state: &SimulationState) {
    let (title, accent) = match state.phase {
        Phase::Title => (" SPACE INVADERS ", Color::Rgb(147, 252, 255)),
        Phase::Win => (" ★ EARTH IS SAFE ★ ", Color::Rgb(255, 220, 80)),
        Phase::Lose => (" GAME OVER ", Color::Rgb(255, 80, 80)),
        Phase::Playing => return,
    };

    let overlay_w = 40u16.min(area.width.saturating_sub(4));
    let overlay_h = 11u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(overlay_w)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_h)) / 2;
    let overlay_area = Rect::new(x, y, overlay_w, overlay_h);

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(accent))
        .title(title)
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(PANEL_BG));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let dim = Style::default().fg(Color::Rgb(180, 180, 200));
    let key = Style::default()
        .fg(Color::Rgb(80, 200, 255))
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from("")];
    match state.phase {
        Phase::Title => {
            lines.push(Line::from(Span::styled("Stop the descending grid", dim)));
            lines.push(Line::from(Span::styled("before it reaches you.", dim)));
        }
        _ => {
            lines.push(Line::from(Span::styled(
                format!("Final score: {}", state.session.score),
                Style::default()
                    .fg(Color::Rgb(255, 215, 0))
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        variant_span(state.variant, Variant::Classic, "[1] Classic"),
        Span::raw("   "),
        variant_span(state.variant, Variant::Swift, "[2] Swift"),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Enter", key),
        Span::styled(" play  ", dim),
        Span::styled("Q", key),
        Span::styled(" quit", dim),
    ]));

    let p = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(PANEL_BG));
    frame.render_widget(p, inner);
}

fn variant_span(selected: Variant, variant: Variant, label: &'static str) -> Span<'static> {
    if selected == variant {
        Span::styled(
            label,
            Style::default()
                .fg(Color::Rgb(255, 220, 80))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
    } else {
        Span::styled(label, Style::default().fg(Color::Rgb(100, 100, 130)))
    }
}
