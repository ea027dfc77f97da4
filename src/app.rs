use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use invaders::game::{tick, Command, Phase, SimulationState, Variant};

/// How long a direction counts as held after its last press or repeat, on
/// terminals that never report key releases. Must outlast the OS initial
/// key-repeat delay, which is commonly 500 ms or more.
const HOLD_WINDOW_MS: u64 = 600;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Direction {
    Left,
    Right,
}

impl Direction {
    fn command(self, pressed: bool) -> Command {
        match self {
            Direction::Left => Command::MoveLeft(pressed),
            Direction::Right => Command::MoveRight(pressed),
        }
    }
}

/// Input adapter and frame driver. Key events become queued [`Command`]s that
/// are handed to the simulation together with one clock reading per tick.
pub struct App {
    pub should_quit: bool,
    pub state: SimulationState,
    rng: StdRng,
    clock: Instant,
    pending: Vec<Command>,
    held: Option<(Direction, u64)>,
    key_releases: bool,
}

impl App {
    pub fn new(key_releases: bool) -> Self {
        let mut rng = StdRng::from_entropy();
        let state = SimulationState::new(&mut rng);
        Self {
            should_quit: false,
            state,
            rng,
            clock: Instant::now(),
            pending: Vec::new(),
            held: None,
            key_releases,
        }
    }

    fn now(&self) -> u64 {
        self.clock.elapsed().as_millis() as u64
    }

    pub fn on_tick(&mut self) {
        let now = self.now();
        self.release_stale(now);
        let commands = std::mem::take(&mut self.pending);
        tick(&mut self.state, &commands, now, &mut self.rng);
    }

    fn release_stale(&mut self, now: u64) {
        if self.key_releases {
            return;
        }
        if let Some((direction, seen)) = self.held {
            if now.saturating_sub(seen) > HOLD_WINDOW_MS {
                self.pending.push(direction.command(false));
                self.held = None;
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        let pressed = key.kind != KeyEventKind::Release;

        if pressed {
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    self.should_quit = true;
                    return;
                }
                _ => {}
            }
        }

        if self.state.phase == Phase::Playing {
            self.on_play_key(key.code, pressed);
        } else if key.kind == KeyEventKind::Press {
            self.on_menu_key(key.code);
        }
    }

    fn on_play_key(&mut self, code: KeyCode, pressed: bool) {
        let direction = match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Direction::Left,
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Direction::Right,
            KeyCode::Char(' ') | KeyCode::Up => {
                if pressed {
                    self.pending.push(Command::FireRequested);
                }
                return;
            }
            _ => return,
        };

        if pressed {
            let now = self.now();
            // A repeat of the held key only refreshes its timestamp.
            if self.held.map(|(d, _)| d) != Some(direction) {
                self.pending.push(direction.command(true));
            }
            self.held = Some((direction, now));
        } else {
            self.pending.push(direction.command(false));
            if self.held.map(|(d, _)| d) == Some(direction) {
                self.held = None;
            }
        }
    }

    fn on_menu_key(&mut self, code: KeyCode) {
        let command = match code {
            KeyCode::Enter | KeyCode::Char(' ') => Command::StartRequested,
            KeyCode::Char('1') => Command::SelectVariant(Variant::Classic),
            KeyCode::Char('2') => Command::SelectVariant(Variant::Swift),
            _ => return,
        };
        debug!(?command, phase = self.state.phase.name(), "menu command");
        // Movement held across a restart must be pressed again.
        self.held = None;
        self.pending.push(command);
    }
}
