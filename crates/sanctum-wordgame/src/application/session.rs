//! A running word game: the machine plus the countdown that feeds it.
//!
//! The session owns at most one countdown. Starting a run cancels the prior
//! countdown before spawning a new one, reaching a terminal phase cancels it,
//! and tearing the session down (or dropping it) cancels it too.

use std::sync::{Arc, Mutex, MutexGuard};

use sanctum_core::clock::Clock;
use sanctum_core::error::DomainError;
use sanctum_core::machine::StateMachine;
use sanctum_core::rng::DeterministicRng;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::countdown::{Countdown, CountdownTick, TICK_PERIOD};
use crate::domain::events::WordGameEvent;
use crate::domain::machine::{WordGame, WordGameConfig};
use crate::domain::puzzle::Placement;

/// RNG shared by every word game a host runs.
pub type SharedRng = Arc<Mutex<dyn DeterministicRng + Send>>;

/// One mounted word game.
pub struct WordGameSession {
    game: WordGame,
    rng: SharedRng,
    clock: Arc<dyn Clock>,
    ticks: UnboundedSender<CountdownTick>,
    countdown: Option<Countdown>,
    generation: u64,
}

impl std::fmt::Debug for WordGameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordGameSession")
            .field("game", &self.game)
            .field("countdown", &self.countdown)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl WordGameSession {
    /// Creates an idle session. Ticks for it are sent to `ticks`.
    #[must_use]
    pub fn new(
        config: WordGameConfig,
        rng: SharedRng,
        clock: Arc<dyn Clock>,
        ticks: UnboundedSender<CountdownTick>,
    ) -> Self {
        Self {
            game: WordGame::new(Uuid::new_v4(), config),
            rng,
            clock,
            ticks,
            countdown: None,
            generation: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.game.session_id()
    }

    #[must_use]
    pub fn game(&self) -> &WordGame {
        &self.game
    }

    /// True while a countdown task is scheduled for this session.
    #[must_use]
    pub fn is_counting_down(&self) -> bool {
        self.countdown.is_some()
    }

    /// Generation of the current run; zero before the first start.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts or restarts the game and its countdown.
    ///
    /// Returns `Ok(false)` when the game is not in a startable phase.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the shared RNG lock is
    /// poisoned.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[instrument(skip(self), fields(session_id = %self.id()))]
    pub fn start(&mut self) -> Result<bool, DomainError> {
        let started = {
            let mut rng = lock_rng(&self.rng)?;
            self.game.start(&mut *rng, &self.clock)
        };
        if !started {
            return Ok(false);
        }

        self.countdown = None;
        self.generation += 1;
        self.countdown = Some(Countdown::start(
            self.id(),
            self.generation,
            TICK_PERIOD,
            self.ticks.clone(),
        ));
        info!(
            generation = self.generation,
            time_left = self.game.time_left(),
            "word game started"
        );
        self.settle();
        Ok(true)
    }

    /// Clicks a tile.
    pub fn place_tile(&mut self, tile: usize) -> Placement {
        let placement = self.game.place_tile(tile, &self.clock);
        if let Placement::Rejected { letter, expected } = placement {
            debug!(session_id = %self.id(), %letter, %expected, "tile rejected");
        }
        self.settle();
        placement
    }

    /// Continues to the next word after one is completed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the shared RNG lock is
    /// poisoned.
    pub fn advance(&mut self) -> Result<bool, DomainError> {
        let mut rng = lock_rng(&self.rng)?;
        let advanced = self.game.advance(&mut *rng, &self.clock);
        drop(rng);
        self.settle();
        Ok(advanced)
    }

    /// Applies a countdown tick addressed to this session.
    ///
    /// Ticks for another session, from an earlier run, or arriving after the
    /// countdown was cancelled are ignored. Returns whether the tick applied.
    pub fn handle_tick(&mut self, tick: CountdownTick) -> bool {
        let current = self
            .countdown
            .as_ref()
            .is_some_and(|c| c.generation() == tick.generation);
        if tick.session_id != self.id() || !current {
            return false;
        }
        let applied = self.game.tick(&self.clock);
        self.settle();
        applied
    }

    /// Cancels the countdown. The game state is left as is.
    pub fn teardown(&mut self) {
        if self.countdown.take().is_some() {
            debug!(session_id = %self.id(), "word game countdown cancelled");
        }
    }

    /// Takes the events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<WordGameEvent> {
        let events = self.game.uncommitted_events().to_vec();
        self.game.clear_uncommitted_events();
        events
    }

    fn settle(&mut self) {
        let phase = self.game.phase();
        if phase.is_terminal() && self.countdown.take().is_some() {
            info!(
                session_id = %self.id(),
                ?phase,
                word_index = self.game.word_index(),
                time_left = self.game.time_left(),
                "word game finished"
            );
        }
    }
}

fn lock_rng(
    rng: &SharedRng,
) -> Result<MutexGuard<'_, dyn DeterministicRng + Send + 'static>, DomainError> {
    rng.lock()
        .map_err(|e| DomainError::Infrastructure(format!("rng lock poisoned: {e}")))
}
