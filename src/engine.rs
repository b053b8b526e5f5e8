//! Owned simulation: run state, tunables and the random source in one place.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::compute;
use crate::config::EngineConfig;
use crate::entities::{GameEvent, GameState, InputSnapshot};
use crate::presentation::Frame;
use crate::progression;

pub struct Engine<R: Rng> {
    config: EngineConfig,
    state: GameState,
    rng: R,
}

impl Engine<StdRng> {
    /// Engine with a reproducible random source.
    pub fn seeded(config: EngineConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Engine<R> {
    /// Panics if `config` fails [`EngineConfig::validate`].
    pub fn new(config: EngineConfig, rng: R) -> Self {
        if let Err(e) = config.validate() {
            panic!("{e}");
        }
        let state = progression::init_state(&config);
        Self { config, state, rng }
    }

    /// Run one fixed step with this tick's input. Returns the tick's events.
    pub fn update(&mut self, input: &InputSnapshot) -> &[GameEvent] {
        compute::tick(&mut self.state, input, &self.config, &mut self.rng);
        &self.state.events
    }

    /// Discard all state and start a new run. The random source carries on.
    pub fn restart(&mut self) {
        progression::restart(&mut self.state, &self.config);
    }

    pub fn frame(&self) -> Frame {
        Frame::from_state(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for drivers and tests that stage specific situations.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }
}
