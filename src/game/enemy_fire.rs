use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::game::config::ENEMY_FIRE_INTERVAL_MS;
use crate::game::entities::Projectile;
use crate::game::formation::Formation;

/// Rate-limited return fire from a random living unit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnemyFire {
    last_fire: Option<u64>,
}

impl EnemyFire {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the last shot so the interval counts as already elapsed.
    pub fn reset(&mut self) {
        self.last_fire = None;
    }

    pub fn ready(&self, now: u64) -> bool {
        self.last_fire
            .map_or(true, |last| now.saturating_sub(last) >= ENEMY_FIRE_INTERVAL_MS)
    }

    pub fn try_fire(
        &mut self,
        now: u64,
        formation: &Formation,
        speed: f32,
        rng: &mut impl Rng,
    ) -> Option<Projectile> {
        if !self.ready(now) {
            return None;
        }
        let living = formation.living_indices();
        let &index = living.choose(rng)?;
        self.last_fire = Some(now);
        debug!(index, "enemy fired");
        Some(Projectile::downward(&formation.units[index].rect(), speed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn fires_immediately_after_reset_then_waits() {
        let mut rng = StdRng::seed_from_u64(11);
        let formation = Formation::new();
        let mut fire = EnemyFire::new();

        let shot = fire.try_fire(5_000, &formation, 4.0, &mut rng).expect("first shot");
        assert!(shot.dy > 0.0);
        assert!(fire.try_fire(5_999, &formation, 4.0, &mut rng).is_none());
        assert!(fire.try_fire(6_000, &formation, 4.0, &mut rng).is_some());
    }

    #[test]
    fn shot_leaves_a_living_unit_from_its_lower_edge() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut formation = Formation::new();
        for unit in formation.units.iter_mut().skip(1) {
            unit.alive = false;
        }
        let mut fire = EnemyFire::new();
        let shot = fire.try_fire(0, &formation, 4.0, &mut rng).expect("shot");
        let source = formation.units[0].rect();
        assert_eq!(shot.y, source.bottom());
        assert_eq!(shot.x + shot.width / 2.0, source.center().0);
    }

    #[test]
    fn silent_without_living_units() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut formation = Formation::new();
        for unit in &mut formation.units {
            unit.alive = false;
        }
        let mut fire = EnemyFire::new();
        assert!(fire.try_fire(0, &formation, 4.0, &mut rng).is_none());
        // No shot means the timer was not consumed.
        assert!(fire.ready(0));
    }

    #[test]
    fn selection_covers_the_living_set() {
        let mut rng = StdRng::seed_from_u64(99);
        let formation = Formation::new();
        let mut seen = std::collections::HashSet::new();
        for i in 0..400u64 {
            let mut fire = EnemyFire::new();
            let shot = fire.try_fire(i, &formation, 4.0, &mut rng).expect("shot");
            seen.insert(shot.x.to_bits());
        }
        // Eight columns means eight distinct muzzle x positions.
        assert_eq!(seen.len(), 8);
    }
}
