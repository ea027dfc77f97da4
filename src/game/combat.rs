//! Collision resolution. Hits are marked in place; dead projectiles are
//! compacted in a separate pass so nothing is removed mid-iteration.

use rand::Rng;
use tracing::debug;

use crate::game::config::{BURST_SIZE, POINTS_PER_KILL};
use crate::game::entities::{BurstColor, Player, Projectile};
use crate::game::formation::Formation;
use crate::game::geometry::overlaps;
use crate::game::particles::Particles;
use crate::game::state::Session;

/// Player shots against living enemies. Each shot takes down at most one
/// unit: the first living one in grid order that it overlaps.
pub fn resolve_player_fire(
    shots: &mut [Projectile],
    formation: &mut Formation,
    session: &mut Session,
    particles: &mut Particles,
    rng: &mut impl Rng,
) -> u32 {
    let mut kills = 0;
    for shot in shots.iter_mut().filter(|s| !s.hit) {
        let shot_rect = shot.rect();
        let Some((index, unit)) = formation
            .units
            .iter_mut()
            .enumerate()
            .find(|(_, e)| e.alive && overlaps(&shot_rect, &e.rect()))
        else {
            continue;
        };

        unit.alive = false;
        shot.hit = true;
        let (cx, cy) = unit.rect().center();
        particles.spawn_burst(rng, cx, cy, BurstColor::EnemyDown, BURST_SIZE);
        session.score += POINTS_PER_KILL;
        kills += 1;
        debug!(index, score = session.score, "enemy destroyed");
    }
    kills
}

/// Enemy shots against the player. Every overlapping shot costs one life.
pub fn resolve_enemy_fire(
    shots: &mut [Projectile],
    player: &Player,
    session: &mut Session,
    particles: &mut Particles,
    rng: &mut impl Rng,
) -> u32 {
    let player_rect = player.rect();
    let mut hits = 0;
    for shot in shots.iter_mut().filter(|s| !s.hit) {
        if !overlaps(&shot.rect(), &player_rect) {
            continue;
        }
        shot.hit = true;
        session.lives = session.lives.saturating_sub(1);
        let (cx, cy) = player_rect.center();
        particles.spawn_burst(rng, cx, cy, BurstColor::PlayerHit, BURST_SIZE);
        hits += 1;
        debug!(lives = session.lives, "player hit");
    }
    hits
}

/// Drop every projectile that was hit or has left the arena.
pub fn compact(shots: &mut Vec<Projectile>) {
    shots.retain(Projectile::is_live);
}
