use rand::Rng;

use crate::game::config::{PARTICLE_LIFETIME, PARTICLE_MAX_SPEED};
use crate::game::entities::{BurstColor, Particle};

/// Short-lived cosmetic debris. Never consulted by collision or scoring.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Particles {
    pub items: Vec<Particle>,
}

impl Particles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn_burst(&mut self, rng: &mut impl Rng, x: f32, y: f32, color: BurstColor, count: usize) {
        self.items.extend((0..count).map(|_| Particle {
            x,
            y,
            vx: rng.gen_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
            vy: rng.gen_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
            life: PARTICLE_LIFETIME,
            color,
        }));
    }

    pub fn update(&mut self) {
        for p in &mut self.items {
            p.x += p.vx;
            p.y += p.vy;
            p.life = p.life.saturating_sub(1);
        }
        self.items.retain(|p| p.life > 0);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn burst_spawns_at_point_with_bounded_velocity() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut particles = Particles::new();
        particles.spawn_burst(&mut rng, 40.0, 70.0, BurstColor::EnemyDown, 10);
        assert_eq!(particles.len(), 10);
        for p in &particles.items {
            assert_eq!((p.x, p.y), (40.0, 70.0));
            assert!(p.vx.abs() <= PARTICLE_MAX_SPEED);
            assert!(p.vy.abs() <= PARTICLE_MAX_SPEED);
            assert_eq!(p.life, PARTICLE_LIFETIME);
            assert_eq!(p.color, BurstColor::EnemyDown);
        }
    }

    #[test]
    fn burst_is_gone_after_lifetime_ticks() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut particles = Particles::new();
        particles.spawn_burst(&mut rng, 0.0, 0.0, BurstColor::PlayerHit, 10);

        let mut last = particles.len();
        for _ in 0..PARTICLE_LIFETIME - 1 {
            particles.update();
            assert!(particles.len() <= last);
            last = particles.len();
        }
        assert_eq!(particles.len(), 10);
        particles.update();
        assert!(particles.is_empty());
    }

    #[test]
    fn particles_drift_by_velocity() {
        let mut particles = Particles::new();
        particles.items.push(Particle {
            x: 10.0,
            y: 10.0,
            vx: 1.5,
            vy: -0.5,
            life: 5,
            color: BurstColor::EnemyDown,
        });
        particles.update();
        let p = &particles.items[0];
        assert_eq!((p.x, p.y, p.life), (11.5, 9.5, 4));
    }
}
