use crate::game::config::{
    ARENA_HEIGHT, ARENA_WIDTH, PLAYER_HEIGHT, PLAYER_SPEED, PLAYER_WIDTH, PLAYER_Y,
    PROJECTILE_HEIGHT, PROJECTILE_WIDTH,
};
use crate::game::geometry::Rect;

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Horizontal velocity, `±speed` while a direction is held.
    pub dx: f32,
    pub speed: f32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            x: ARENA_WIDTH / 2.0 - PLAYER_WIDTH / 2.0,
            y: PLAYER_Y,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            dx: 0.0,
            speed: PLAYER_SPEED,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn hold_left(&mut self) {
        self.dx = -self.speed;
    }

    pub fn hold_right(&mut self) {
        self.dx = self.speed;
    }

    /// A stale release never cancels the direction pressed after it.
    pub fn release_left(&mut self) {
        if self.dx < 0.0 {
            self.dx = 0.0;
        }
    }

    pub fn release_right(&mut self) {
        if self.dx > 0.0 {
            self.dx = 0.0;
        }
    }

    pub fn advance(&mut self) {
        self.x = (self.x + self.dx).clamp(0.0, ARENA_WIDTH - self.width);
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Negative travels up (player fire), positive travels down (enemy fire).
    pub dy: f32,
    pub hit: bool,
}

impl Projectile {
    /// Upward shot centered on the top edge of `from`.
    pub fn upward(from: &Rect, speed: f32) -> Self {
        Self {
            x: from.x + from.width / 2.0 - PROJECTILE_WIDTH / 2.0,
            y: from.y,
            width: PROJECTILE_WIDTH,
            height: PROJECTILE_HEIGHT,
            dy: -speed,
            hit: false,
        }
    }

    /// Downward shot centered on the bottom edge of `from`.
    pub fn downward(from: &Rect, speed: f32) -> Self {
        Self {
            x: from.x + from.width / 2.0 - PROJECTILE_WIDTH / 2.0,
            y: from.bottom(),
            width: PROJECTILE_WIDTH,
            height: PROJECTILE_HEIGHT,
            dy: speed,
            hit: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn advance(&mut self) {
        self.y += self.dy;
    }

    pub fn in_arena(&self) -> bool {
        self.y + self.height > 0.0 && self.y < ARENA_HEIGHT
    }

    /// Survives compaction: not hit and still vertically inside the arena.
    pub fn is_live(&self) -> bool {
        !self.hit && self.in_arena()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub alive: bool,
}

impl Enemy {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Display tag for particle bursts. The renderer decides the actual colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BurstColor {
    EnemyDown,
    PlayerHit,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub life: u32,
    pub color: BurstColor,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sparkle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub speed: f32,
    pub opacity: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_starts_centered() {
        let p = Player::new();
        assert_eq!(p.x + p.width / 2.0, ARENA_WIDTH / 2.0);
        assert_eq!(p.dx, 0.0);
    }

    #[test]
    fn player_clamps_at_both_walls() {
        let mut p = Player::new();
        p.x = 2.0;
        p.hold_left();
        p.advance();
        assert_eq!(p.x, 0.0);

        p.x = ARENA_WIDTH - p.width - 1.0;
        p.hold_right();
        p.advance();
        assert_eq!(p.x, ARENA_WIDTH - p.width);
    }

    #[test]
    fn stale_release_keeps_newer_direction() {
        let mut p = Player::new();
        p.hold_left();
        p.hold_right();
        p.release_left();
        assert_eq!(p.dx, p.speed);
        p.release_right();
        assert_eq!(p.dx, 0.0);
    }

    #[test]
    fn upward_shot_leaves_player_top_center() {
        let p = Player::new();
        let shot = Projectile::upward(&p.rect(), 7.0);
        assert_eq!(shot.x + shot.width / 2.0, p.x + p.width / 2.0);
        assert_eq!(shot.y, p.y);
        assert!(shot.dy < 0.0);
    }

    #[test]
    fn projectile_leaves_arena_at_top() {
        let mut shot = Projectile::upward(&Rect::new(100.0, 5.0, 10.0, 10.0), 7.0);
        assert!(shot.in_arena());
        shot.advance();
        shot.advance();
        assert!(!shot.in_arena());
    }
}
