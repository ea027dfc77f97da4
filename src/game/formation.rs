//! The enemy grid. Units are never removed; a dead unit keeps its slot and
//! grid indices stay stable for the lifetime of a round.

use crate::game::config::{
    ARENA_WIDTH, ENEMY_COLS, ENEMY_HEIGHT, ENEMY_PADDING, ENEMY_ROWS, ENEMY_SPACING,
    ENEMY_START_Y, ENEMY_WIDTH,
};
use crate::game::entities::Enemy;

#[derive(Clone, Debug, PartialEq)]
pub struct Formation {
    pub units: Vec<Enemy>,
    /// +1.0 sweeps right, -1.0 sweeps left.
    pub direction: f32,
}

impl Formation {
    pub fn new() -> Self {
        let mut units = Vec::with_capacity(ENEMY_ROWS * ENEMY_COLS);
        for row in 0..ENEMY_ROWS {
            for col in 0..ENEMY_COLS {
                units.push(Enemy {
                    x: ENEMY_PADDING + col as f32 * (ENEMY_WIDTH + ENEMY_SPACING),
                    y: ENEMY_START_Y + row as f32 * (ENEMY_HEIGHT + ENEMY_SPACING),
                    width: ENEMY_WIDTH,
                    height: ENEMY_HEIGHT,
                    alive: true,
                });
            }
        }
        Self { units, direction: 1.0 }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn living(&self) -> impl Iterator<Item = &Enemy> {
        self.units.iter().filter(|e| e.alive)
    }

    pub fn living_indices(&self) -> Vec<usize> {
        self.units
            .iter()
            .enumerate()
            .filter(|(_, e)| e.alive)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn alive_count(&self) -> usize {
        self.living().count()
    }

    pub fn any_alive(&self) -> bool {
        self.units.iter().any(|e| e.alive)
    }

    /// Lowest bottom edge among living units.
    pub fn front_line(&self) -> Option<f32> {
        self.living().map(|e| e.y + e.height).reduce(f32::max)
    }

    /// One sweep step. Returns true when the formation bounced this tick.
    ///
    /// If any living unit would breach a margin after moving, the whole
    /// formation reverses and drops one row instead of moving sideways.
    pub fn advance(&mut self, speed: f32) -> bool {
        let step = speed * self.direction;
        let bounce = self.living().any(|e| {
            let next_x = e.x + step;
            next_x < ENEMY_PADDING || next_x + e.width > ARENA_WIDTH - ENEMY_PADDING
        });

        if bounce {
            self.direction = -self.direction;
            for unit in self.units.iter_mut().filter(|e| e.alive) {
                unit.y += ENEMY_HEIGHT;
            }
        } else {
            for unit in self.units.iter_mut().filter(|e| e.alive) {
                unit.x += step;
            }
        }
        bounce
    }
}

impl Default for Formation {
    fn default() -> Self {
        Self::new()
    }
}
