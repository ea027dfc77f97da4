//! Braille-resolution drawing of the arena. Every terminal cell holds a 2x4
//! dot block, and arena coordinates are scaled onto that dot grid.

use std::collections::HashMap;

use ratatui::prelude::*;

use invaders::game::config::{ARENA_HEIGHT, ARENA_WIDTH};
use invaders::game::entities::BurstColor;
use invaders::game::{Rect, SimulationState};

const BG: Color = Color::Rgb(5, 3, 18);

type DotMap = HashMap<(usize, usize), u8>;

struct Canvas {
    grid: Vec<Vec<(char, Style)>>,
    w: usize,
    h: usize,
    bw: i32,
    bh: i32,
    sx: f32,
    sy: f32,
}

impl Canvas {
    fn new(w: usize, h: usize) -> Self {
        let bw = (w * 2) as i32;
        let bh = (h * 4) as i32;
        Self {
            grid: vec![vec![(' ', Style::default().bg(BG)); w]; h],
            w,
            h,
            bw,
            bh,
            sx: bw as f32 / ARENA_WIDTH,
            sy: bh as f32 / ARENA_HEIGHT,
        }
    }

    fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
        match (sub_x, sub_y) {
            (0, 0) => 0x01,
            (0, 1) => 0x02,
            (0, 2) => 0x04,
            (0, 3) => 0x40,
            (1, 0) => 0x08,
            (1, 1) => 0x10,
            (1, 2) => 0x20,
            (1, 3) => 0x80,
            _ => 0,
        }
    }

    fn set_dot(&self, map: &mut DotMap, bx: i32, by: i32) {
        if bx < 0 || by < 0 || bx >= self.bw || by >= self.bh {
            return;
        }
        let (bx, by) = (bx as usize, by as usize);
        *map.entry((bx / 2, by / 4)).or_insert(0) |= Self::braille_bit(bx % 2, by % 4);
    }

    /// Fill the dots covered by an arena rectangle; always at least one dot.
    fn fill_rect(&self, map: &mut DotMap, rect: &Rect) {
        let x0 = (rect.x * self.sx) as i32;
        let y0 = (rect.y * self.sy) as i32;
        let x1 = ((rect.right() * self.sx) as i32).max(x0 + 1);
        let y1 = ((rect.bottom() * self.sy) as i32).max(y0 + 1);
        for by in y0..y1 {
            for bx in x0..x1 {
                self.set_dot(map, bx, by);
            }
        }
    }

    fn write_layer(&mut self, map: &DotMap, color: Color, bold: bool) {
        for (&(cx, cy), &bits) in map {
            if cx < self.w && cy < self.h && bits != 0 {
                let ch = char::from_u32(0x2800 + bits as u32).unwrap_or(' ');
                let mut style = Style::default().fg(color).bg(BG);
                if bold {
                    style = style.add_modifier(Modifier::BOLD);
                }
                self.grid[cy][cx] = (ch, style);
            }
        }
    }

    fn into_lines(self) -> Vec<Line<'static>> {
        self.grid
            .into_iter()
            .map(|row| {
                let spans: Vec<Span<'static>> = row
                    .into_iter()
                    .map(|(ch, style)| Span::styled(String::from(ch), style))
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

fn burst_color(tag: BurstColor) -> Color {
    match tag {
        BurstColor::EnemyDown => Color::Rgb(147, 252, 255),
        BurstColor::PlayerHit => Color::Rgb(255, 105, 180),
    }
}

pub fn render_field(state: &SimulationState, width: usize, height: usize) -> Vec<Line<'static>> {
    let mut canvas = Canvas::new(width, height);

    // Sparkles are plain characters underneath everything else.
    for s in &state.sparkles.items {
        let cx = (s.x * canvas.sx / 2.0) as usize;
        let cy = (s.y * canvas.sy / 4.0) as usize;
        if cx < canvas.w && cy < canvas.h {
            let b = (60.0 + 160.0 * s.opacity) as u8;
            let ch = if s.radius > 1.4 { '+' } else { '.' };
            canvas.grid[cy][cx] = (ch, Style::default().fg(Color::Rgb(b, b, b.saturating_add(30))).bg(BG));
        }
    }

    let mut enemies = DotMap::new();
    for unit in state.formation.living() {
        canvas.fill_rect(&mut enemies, &unit.rect());
    }
    canvas.write_layer(&enemies, Color::Rgb(147, 252, 255), false);

    let mut shots = DotMap::new();
    for shot in &state.player_shots {
        canvas.fill_rect(&mut shots, &shot.rect());
    }
    canvas.write_layer(&shots, Color::Rgb(198, 193, 255), true);

    let mut bolts = DotMap::new();
    for shot in &state.enemy_shots {
        canvas.fill_rect(&mut bolts, &shot.rect());
    }
    canvas.write_layer(&bolts, Color::Rgb(255, 120, 90), true);

    let mut ship = DotMap::new();
    canvas.fill_rect(&mut ship, &state.player.rect());
    canvas.write_layer(&ship, Color::Rgb(255, 105, 180), true);

    for tag in [BurstColor::EnemyDown, BurstColor::PlayerHit] {
        let mut dots = DotMap::new();
        for p in state.particles.items.iter().filter(|p| p.color == tag) {
            canvas.set_dot(&mut dots, (p.x * canvas.sx) as i32, (p.y * canvas.sy) as i32);
        }
        canvas.write_layer(&dots, burst_color(tag), false);
    }

    canvas.into_lines()
}
