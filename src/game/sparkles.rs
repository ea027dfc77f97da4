use rand::Rng;

use crate::game::config::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::game::entities::Sparkle;

/// Background drift. Runs in every phase and touches nothing else.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sparkles {
    pub items: Vec<Sparkle>,
}

impl Sparkles {
    pub fn scatter(rng: &mut impl Rng, count: usize) -> Self {
        let items = (0..count)
            .map(|_| Sparkle {
                x: rng.gen_range(0.0..ARENA_WIDTH),
                y: rng.gen_range(0.0..ARENA_HEIGHT),
                radius: rng.gen_range(0.5..2.0),
                speed: rng.gen_range(0.2..1.0),
                opacity: rng.gen_range(0.2..1.0),
            })
            .collect();
        Self { items }
    }

    pub fn update(&mut self, rng: &mut impl Rng) {
        for s in &mut self.items {
            s.y -= s.speed;
            if s.y + s.radius < 0.0 {
                s.y = ARENA_HEIGHT + s.radius;
                s.x = rng.gen_range(0.0..ARENA_WIDTH);
            }
        }
    }
}
