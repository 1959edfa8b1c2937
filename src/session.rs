//! Fixed-step tick driver
//!
//! The host calls [`Session::advance`] once per display frame with the real
//! frame delta. The session runs however many fixed ticks that covers, feeds
//! each one an input snapshot, and swaps in a fresh [`GameState`] on restart.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::platform::{InputState, Key};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, Outcome, RenderSnapshot, tick};

/// One player's run of the game, restartable
pub struct Session {
    state: GameState,
    input: InputState,
    settings: Settings,
    accumulator: f32,
    /// Seeds each new game
    rng: Pcg32,
    /// Events from every tick since the last drain
    events: Vec<GameEvent>,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        let settings = settings.sanitized();
        let session_seed = settings.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = Pcg32::seed_from_u64(session_seed);
        let state = GameState::new(rng.random());
        log::info!("Session started (seed {})", session_seed);

        Self {
            state,
            input: InputState::new(),
            settings,
            accumulator: 0.0,
            rng,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Terminal title/message, once the game has ended
    #[inline]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.state.outcome.as_ref()
    }

    pub fn key_down(&mut self, key: Key) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.key_up(key);
    }

    /// Run exactly one fixed tick
    pub fn step(&mut self) {
        let input = self.input.snapshot();
        tick(&mut self.state, &input);
        self.input.clear_one_shots();
        self.events.extend_from_slice(&self.state.events);
    }

    /// Advance by a real frame delta, returning the number of ticks run
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let dt = frame_dt.clamp(0.0, self.settings.max_frame_dt);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < self.settings.max_substeps {
            self.step();
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        if substeps == self.settings.max_substeps && self.accumulator >= SIM_DT {
            log::debug!("Dropping {:.4}s of backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        substeps
    }

    /// Throw the current game away and start over from the fixed layout
    pub fn restart(&mut self) {
        let next = GameState::new(self.rng.random());
        self.state = next;
        self.input.reset();
        self.accumulator = 0.0;
        self.events.clear();
        log::info!("Game restarted (seed {})", self.state.seed);
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.state)
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
