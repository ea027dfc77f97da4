//! Fixed game constants. Nothing here is read at runtime; the only choice a
//! player makes is the [`Variant`], which swaps in a faster [`Tuning`].

pub const ARENA_WIDTH: f32 = 800.0;
pub const ARENA_HEIGHT: f32 = 600.0;

pub const PLAYER_WIDTH: f32 = 50.0;
pub const PLAYER_HEIGHT: f32 = 20.0;
pub const PLAYER_SPEED: f32 = 5.0;
pub const PLAYER_Y: f32 = ARENA_HEIGHT - 40.0;

pub const PROJECTILE_WIDTH: f32 = 4.0;
pub const PROJECTILE_HEIGHT: f32 = 10.0;
pub const PLAYER_PROJECTILE_SPEED: f32 = 7.0;
/// Milliseconds between two honored fire requests.
pub const FIRE_COOLDOWN_MS: u64 = 300;

pub const ENEMY_ROWS: usize = 4;
pub const ENEMY_COLS: usize = 8;
pub const ENEMY_WIDTH: f32 = 40.0;
pub const ENEMY_HEIGHT: f32 = 20.0;
pub const ENEMY_PADDING: f32 = 20.0;
pub const ENEMY_SPACING: f32 = 10.0;
pub const ENEMY_START_Y: f32 = 60.0;
pub const ENEMY_FIRE_INTERVAL_MS: u64 = 1000;

pub const STARTING_LIVES: u32 = 3;
pub const POINTS_PER_KILL: u32 = 100;

pub const BURST_SIZE: usize = 10;
pub const PARTICLE_LIFETIME: u32 = 30;
/// Particle velocity components are drawn from `[-MAX, MAX)`.
pub const PARTICLE_MAX_SPEED: f32 = 2.0;

pub const SPARKLE_COUNT: usize = 60;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Classic,
    Swift,
}

impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Classic => "Classic",
            Variant::Swift => "Swift",
        }
    }

    pub fn tuning(&self) -> Tuning {
        match self {
            Variant::Classic => Tuning {
                formation_speed: 1.0,
                enemy_projectile_speed: 4.0,
            },
            Variant::Swift => Tuning {
                formation_speed: 1.6,
                enemy_projectile_speed: 5.5,
            },
        }
    }
}

/// The speed-dependent knobs that differ between variants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    pub formation_speed: f32,
    pub enemy_projectile_speed: f32,
}
