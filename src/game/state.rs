//! The simulation aggregate and the per-frame `tick`.
//!
//! Everything the renderer reads lives in [`SimulationState`]; everything the
//! input side may do arrives as a [`Command`]. Time is an explicit millisecond
//! timestamp and randomness an explicit `Rng`, so a seeded run is fully
//! reproducible.

use rand::Rng;
use tracing::{debug, info};

use crate::game::combat;
use crate::game::config::{
    Tuning, Variant, FIRE_COOLDOWN_MS, PLAYER_PROJECTILE_SPEED, SPARKLE_COUNT, STARTING_LIVES,
};
use crate::game::enemy_fire::EnemyFire;
use crate::game::entities::{Player, Projectile};
use crate::game::formation::Formation;
use crate::game::particles::Particles;
use crate::game::sparkles::Sparkles;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Title,
    Playing,
    Win,
    Lose,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Title => "title",
            Phase::Playing => "playing",
            Phase::Win => "win",
            Phase::Lose => "lose",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    MoveLeft(bool),
    MoveRight(bool),
    FireRequested,
    StartRequested,
    SelectVariant(Variant),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub score: u32,
    pub lives: u32,
}

impl Session {
    pub fn new() -> Self {
        Self { score: 0, lives: STARTING_LIVES }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
pub struct SimulationState {
    pub phase: Phase,
    pub variant: Variant,
    tuning: Tuning,
    pub session: Session,
    pub player: Player,
    pub player_shots: Vec<Projectile>,
    pub enemy_shots: Vec<Projectile>,
    pub formation: Formation,
    pub particles: Particles,
    pub sparkles: Sparkles,
    last_player_fire: Option<u64>,
    enemy_fire: EnemyFire,
}

impl SimulationState {
    pub fn new(rng: &mut impl Rng) -> Self {
        let variant = Variant::default();
        Self {
            phase: Phase::Title,
            variant,
            tuning: variant.tuning(),
            session: Session::new(),
            player: Player::new(),
            player_shots: Vec::new(),
            enemy_shots: Vec::new(),
            formation: Formation::new(),
            particles: Particles::new(),
            sparkles: Sparkles::scatter(rng, SPARKLE_COUNT),
            last_player_fire: None,
            enemy_fire: EnemyFire::new(),
        }
    }

    pub fn apply(&mut self, command: Command, now: u64) {
        match (self.phase, command) {
            (Phase::Playing, Command::MoveLeft(true)) => self.player.hold_left(),
            (Phase::Playing, Command::MoveLeft(false)) => self.player.release_left(),
            (Phase::Playing, Command::MoveRight(true)) => self.player.hold_right(),
            (Phase::Playing, Command::MoveRight(false)) => self.player.release_right(),
            (Phase::Playing, Command::FireRequested) => self.fire(now),
            (Phase::Title | Phase::Win | Phase::Lose, Command::StartRequested) => self.start(),
            (Phase::Title | Phase::Win | Phase::Lose, Command::SelectVariant(variant)) => {
                if variant != self.variant {
                    info!(variant = variant.name(), "variant selected");
                    self.variant = variant;
                }
            }
            _ => {}
        }
    }

    /// Honored only once the cooldown since the last honored shot has passed.
    fn fire(&mut self, now: u64) {
        let ready = self
            .last_player_fire
            .map_or(true, |last| now.saturating_sub(last) >= FIRE_COOLDOWN_MS);
        if !ready {
            return;
        }
        self.player_shots
            .push(Projectile::upward(&self.player.rect(), PLAYER_PROJECTILE_SPEED));
        self.last_player_fire = Some(now);
    }

    fn start(&mut self) {
        self.tuning = self.variant.tuning();
        self.session = Session::new();
        self.player = Player::new();
        self.player_shots.clear();
        self.enemy_shots.clear();
        self.formation.reset();
        self.particles.clear();
        self.last_player_fire = None;
        self.enemy_fire.reset();
        self.enter(Phase::Playing);
    }

    fn enter(&mut self, phase: Phase) {
        info!(
            from = self.phase.name(),
            to = phase.name(),
            score = self.session.score,
            lives = self.session.lives,
            "phase change"
        );
        self.phase = phase;
    }

    /// Advance one frame. Only `Playing` runs the game; every phase drifts
    /// the sparkles.
    pub fn advance(&mut self, now: u64, rng: &mut impl Rng) {
        self.sparkles.update(rng);
        if self.phase != Phase::Playing {
            return;
        }

        self.player.advance();
        for shot in self.player_shots.iter_mut().chain(self.enemy_shots.iter_mut()) {
            shot.advance();
        }
        self.formation.advance(self.tuning.formation_speed);
        if let Some(shot) =
            self.enemy_fire
                .try_fire(now, &self.formation, self.tuning.enemy_projectile_speed, rng)
        {
            self.enemy_shots.push(shot);
        }
        self.particles.update();

        let kills = combat::resolve_player_fire(
            &mut self.player_shots,
            &mut self.formation,
            &mut self.session,
            &mut self.particles,
            rng,
        );
        let hits = combat::resolve_enemy_fire(
            &mut self.enemy_shots,
            &self.player,
            &mut self.session,
            &mut self.particles,
            rng,
        );
        if kills > 0 || hits > 0 {
            debug!(
                kills,
                hits,
                alive = self.formation.alive_count(),
                score = self.session.score,
                lives = self.session.lives,
                "combat"
            );
        }
        if self
            .formation
            .front_line()
            .is_some_and(|bottom| bottom >= self.player.y)
        {
            self.session.lives = 0;
        }
        combat::compact(&mut self.player_shots);
        combat::compact(&mut self.enemy_shots);

        if self.session.lives == 0 {
            self.enter(Phase::Lose);
        } else if !self.formation.any_alive() {
            self.enter(Phase::Win);
        }
    }
}

/// Apply this frame's commands in arrival order, then advance the simulation.
pub fn tick(state: &mut SimulationState, commands: &[Command], now: u64, rng: &mut impl Rng) {
    for &command in commands {
        state.apply(command, now);
    }
    state.advance(now, rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::{ARENA_WIDTH, POINTS_PER_KILL};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn playing(rng: &mut StdRng) -> SimulationState {
        let mut state = SimulationState::new(rng);
        state.apply(Command::StartRequested, 0);
        state
    }

    #[test]
    fn starts_on_title_and_ignores_play_commands() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = SimulationState::new(&mut rng);
        tick(&mut state, &[Command::MoveLeft(true), Command::FireRequested], 0, &mut rng);
        assert_eq!(state.phase, Phase::Title);
        assert!(state.player_shots.is_empty());
        assert_eq!(state.player.dx, 0.0);
    }

    #[test]
    fn title_runs_sparkles_only() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = SimulationState::new(&mut rng);
        let formation = state.formation.clone();
        let sparkles = state.sparkles.clone();
        tick(&mut state, &[], 10_000, &mut rng);
        assert_eq!(state.formation, formation);
        assert!(state.enemy_shots.is_empty());
        assert_ne!(state.sparkles, sparkles);
    }

    #[test]
    fn start_enters_playing_with_fresh_session() {
        let mut rng = StdRng::seed_from_u64(5);
        let state = playing(&mut rng);
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.session, Session::new());
        assert_eq!(state.player.x, ARENA_WIDTH / 2.0 - state.player.width / 2.0);
        assert_eq!(state.formation.alive_count(), 32);
    }

    #[test]
    fn start_is_ignored_while_playing() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = playing(&mut rng);
        state.session.score = 700;
        state.apply(Command::StartRequested, 50);
        assert_eq!(state.session.score, 700);
    }

    #[test]
    fn rapid_fire_is_rate_limited() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = playing(&mut rng);
        state.apply(Command::FireRequested, 1_000);
        state.apply(Command::FireRequested, 1_100);
        assert_eq!(state.player_shots.len(), 1);
        state.apply(Command::FireRequested, 1_300);
        assert_eq!(state.player_shots.len(), 2);
    }

    #[test]
    fn first_shot_after_start_is_immediate() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = playing(&mut rng);
        state.apply(Command::FireRequested, 0);
        assert_eq!(state.player_shots.len(), 1);
    }

    #[test]
    fn variant_applies_on_next_start() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = SimulationState::new(&mut rng);
        state.apply(Command::SelectVariant(Variant::Swift), 0);
        assert_eq!(state.tuning, Variant::Classic.tuning());
        state.apply(Command::StartRequested, 0);
        assert_eq!(state.tuning, Variant::Swift.tuning());

        // Locked in while playing.
        state.apply(Command::SelectVariant(Variant::Classic), 0);
        assert_eq!(state.variant, Variant::Swift);
    }

    #[test]
    fn clearing_the_formation_wins_once() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = playing(&mut rng);
        for unit in state.formation.units.iter_mut().skip(1) {
            unit.alive = false;
        }
        let target = state.formation.units[0].rect();
        let mut shot = Projectile::upward(&target, PLAYER_PROJECTILE_SPEED);
        shot.y = target.bottom();
        state.player_shots.push(shot);

        tick(&mut state, &[], 10, &mut rng);
        assert_eq!(state.phase, Phase::Win);
        assert_eq!(state.session.score, POINTS_PER_KILL);

        for t in 0..5 {
            tick(&mut state, &[Command::FireRequested], 20 + t, &mut rng);
            assert_eq!(state.phase, Phase::Win);
        }
        assert_eq!(state.session.score, POINTS_PER_KILL);
    }

    #[test]
    fn last_kill_and_last_life_in_one_tick_is_a_loss() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = playing(&mut rng);
        for unit in state.formation.units.iter_mut().skip(1) {
            unit.alive = false;
        }
        let target = state.formation.units[0].rect();
        let mut kill_shot = Projectile::upward(&target, PLAYER_PROJECTILE_SPEED);
        kill_shot.y = target.bottom();
        state.player_shots.push(kill_shot);

        state.session.lives = 1;
        let mut lethal = Projectile::downward(&state.player.rect(), 0.0);
        lethal.y = state.player.y;
        state.enemy_shots.push(lethal);

        tick(&mut state, &[], 10, &mut rng);
        assert!(!state.formation.any_alive());
        assert_eq!(state.session.lives, 0);
        assert_eq!(state.phase, Phase::Lose);
    }

    #[test]
    fn last_life_lost_means_lose_and_restart_resets() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = playing(&mut rng);
        state.session.lives = 1;
        state.session.score = 400;
        let mut shot = Projectile::downward(&state.player.rect(), 0.0);
        shot.y = state.player.y;
        state.enemy_shots.push(shot);

        tick(&mut state, &[], 10, &mut rng);
        assert_eq!(state.phase, Phase::Lose);
        assert_eq!(state.session.lives, 0);

        tick(&mut state, &[Command::StartRequested], 20, &mut rng);
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.session, Session::new());
        assert!(state.player_shots.is_empty());
    }

    #[test]
    fn formation_reaching_player_row_is_a_loss() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = playing(&mut rng);
        let drop = state.player.y - state.formation.front_line().unwrap_or(0.0);
        for unit in &mut state.formation.units {
            unit.y += drop;
        }
        tick(&mut state, &[], 10, &mut rng);
        assert_eq!(state.phase, Phase::Lose);
    }
}
