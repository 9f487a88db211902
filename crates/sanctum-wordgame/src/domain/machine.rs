//! The word game state machine.
//!
//! Commands validate the current phase, record an event and apply it at once,
//! so the machine is always up to date and its uncommitted events describe
//! exactly how it got there.

use sanctum_content::WordGameBlock;
use sanctum_core::clock::Clock;
use sanctum_core::event::EventMetadata;
use sanctum_core::machine::StateMachine;
use sanctum_core::rng::DeterministicRng;
use serde::Serialize;
use uuid::Uuid;

use super::events::{
    ClockTicked, GameStarted, GameWon, TilePlaced, TileRejected, TimeExpired, WordCompleted,
    WordGameEvent, WordGameEventKind, WordPresented,
};
use super::puzzle::{self, Placement, Puzzle};
use super::shuffle::scramble;

/// Lifecycle phase of a word game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    /// Not started; the start screen is shown.
    Idle,
    /// A word is on screen and the clock is running.
    Playing,
    /// The current word is solved; waiting for the player to continue.
    WordComplete,
    /// The clock ran out.
    GameOver,
    /// Every word was solved in time.
    Victory,
}

impl GamePhase {
    /// True for phases that end a round.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Victory)
    }

    /// True for phases in which the clock counts down.
    #[must_use]
    pub fn is_timed(self) -> bool {
        matches!(self, GamePhase::Playing | GamePhase::WordComplete)
    }
}

/// Words and time limit for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordGameConfig {
    pub words: Vec<String>,
    pub time_limit_secs: u32,
}

impl From<&WordGameBlock> for WordGameConfig {
    fn from(block: &WordGameBlock) -> Self {
        Self {
            words: block.words(),
            time_limit_secs: block.time_limit_secs(),
        }
    }
}

/// A single word game session.
#[derive(Debug)]
pub struct WordGame {
    id: Uuid,
    version: i64,
    config: WordGameConfig,
    phase: GamePhase,
    word_index: usize,
    time_left: u32,
    puzzle: Option<Puzzle>,
    uncommitted_events: Vec<WordGameEvent>,
}

impl WordGame {
    /// Creates an idle game.
    #[must_use]
    pub fn new(id: Uuid, config: WordGameConfig) -> Self {
        let time_left = config.time_limit_secs;
        Self {
            id,
            version: 0,
            config,
            phase: GamePhase::Idle,
            word_index: 0,
            time_left,
            puzzle: None,
            uncommitted_events: Vec::new(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Index of the word on screen.
    #[must_use]
    pub fn word_index(&self) -> usize {
        self.word_index
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.config.words.len()
    }

    /// Seconds remaining on the clock.
    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// The board for the word on screen, once a game has started.
    #[must_use]
    pub fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    /// Starts a game from the idle, game-over or victory screen.
    ///
    /// Resets the clock to the full time limit and presents the first word.
    /// Returns `false` (and records nothing) in any other phase or when
    /// there are no words to play.
    pub fn start(&mut self, rng: &mut dyn DeterministicRng, clock: &dyn Clock) -> bool {
        let can_start = matches!(
            self.phase,
            GamePhase::Idle | GamePhase::GameOver | GamePhase::Victory
        );
        if !can_start || self.config.words.is_empty() {
            return false;
        }

        self.record(
            WordGameEventKind::GameStarted(GameStarted {
                time_limit_secs: self.config.time_limit_secs,
                word_count: self.config.words.len(),
            }),
            clock,
        );
        self.present_word(0, rng, clock);
        true
    }

    /// Handles a click on the tile at `tile`.
    pub fn place_tile(&mut self, tile: usize, clock: &dyn Clock) -> Placement {
        if self.phase != GamePhase::Playing {
            return Placement::Ignored;
        }
        let Some(puzzle) = &self.puzzle else {
            return Placement::Ignored;
        };

        let placement = puzzle.check(tile);
        match placement {
            Placement::Accepted { slot, letter } => {
                self.record(
                    WordGameEventKind::TilePlaced(TilePlaced { tile, slot, letter }),
                    clock,
                );
                self.complete_if_solved(clock);
            }
            Placement::Rejected { letter, expected } => {
                self.record(
                    WordGameEventKind::TileRejected(TileRejected {
                        tile,
                        letter,
                        expected,
                    }),
                    clock,
                );
            }
            Placement::Ignored => {}
        }
        placement
    }

    /// Moves from a completed word to the next one, with fresh tiles.
    ///
    /// Returns `false` outside the word-complete phase.
    pub fn advance(&mut self, rng: &mut dyn DeterministicRng, clock: &dyn Clock) -> bool {
        if self.phase != GamePhase::WordComplete {
            return false;
        }
        self.present_word(self.word_index + 1, rng, clock);
        true
    }

    /// Counts one second off the clock.
    ///
    /// Only applies while playing or between words. The tick that would leave
    /// zero seconds ends the game instead. Returns whether anything changed.
    pub fn tick(&mut self, clock: &dyn Clock) -> bool {
        if !self.phase.is_timed() {
            return false;
        }
        if self.time_left <= 1 {
            self.record(
                WordGameEventKind::TimeExpired(TimeExpired {
                    word_index: self.word_index,
                }),
                clock,
            );
        } else {
            self.record(
                WordGameEventKind::ClockTicked(ClockTicked {
                    time_left: self.time_left - 1,
                }),
                clock,
            );
        }
        true
    }

    fn present_word(&mut self, word_index: usize, rng: &mut dyn DeterministicRng, clock: &dyn Clock) {
        let Some(word) = self.config.words.get(word_index) else {
            return;
        };
        let tiles = scramble(&puzzle::letters_of(word), rng);
        self.record(
            WordGameEventKind::WordPresented(WordPresented { word_index, tiles }),
            clock,
        );
        // A word without letters is solved as soon as it appears.
        self.complete_if_solved(clock);
    }

    fn complete_if_solved(&mut self, clock: &dyn Clock) {
        if !self.puzzle.as_ref().is_some_and(Puzzle::is_solved) {
            return;
        }
        if self.word_index + 1 >= self.config.words.len() {
            self.record(
                WordGameEventKind::GameWon(GameWon {
                    time_left: self.time_left,
                }),
                clock,
            );
        } else {
            self.record(
                WordGameEventKind::WordCompleted(WordCompleted {
                    word_index: self.word_index,
                }),
                clock,
            );
        }
    }

    fn record(&mut self, kind: WordGameEventKind, clock: &dyn Clock) {
        let event = WordGameEvent {
            metadata: EventMetadata::new(kind.event_type(), self.id, self.version + 1, clock),
            kind,
        };
        self.apply(&event);
        self.uncommitted_events.push(event);
    }
}

impl StateMachine for WordGame {
    type Event = WordGameEvent;

    fn session_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match &event.kind {
            WordGameEventKind::GameStarted(payload) => {
                self.phase = GamePhase::Playing;
                self.word_index = 0;
                self.time_left = payload.time_limit_secs;
                self.puzzle = None;
            }
            WordGameEventKind::WordPresented(payload) => {
                self.phase = GamePhase::Playing;
                self.word_index = payload.word_index;
                self.puzzle = self
                    .config
                    .words
                    .get(payload.word_index)
                    .map(|word| Puzzle::new(word, &payload.tiles));
            }
            WordGameEventKind::TilePlaced(payload) => {
                if let Some(puzzle) = self.puzzle.as_mut() {
                    puzzle.fill(payload.tile, payload.slot);
                }
            }
            WordGameEventKind::TileRejected(_) => {}
            WordGameEventKind::WordCompleted(_) => {
                self.phase = GamePhase::WordComplete;
            }
            WordGameEventKind::ClockTicked(payload) => {
                self.time_left = payload.time_left;
            }
            WordGameEventKind::TimeExpired(_) => {
                self.time_left = 0;
                self.phase = GamePhase::GameOver;
            }
            WordGameEventKind::GameWon(_) => {
                self.phase = GamePhase::Victory;
            }
        }
        self.version += 1;
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    fn clear_uncommitted_events(&mut self) {
        self.uncommitted_events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::events::{
        CLOCK_TICKED_EVENT_TYPE, GAME_STARTED_EVENT_TYPE, GAME_WON_EVENT_TYPE,
        TILE_PLACED_EVENT_TYPE, TILE_REJECTED_EVENT_TYPE, TIME_EXPIRED_EVENT_TYPE,
        WORD_COMPLETED_EVENT_TYPE, WORD_PRESENTED_EVENT_TYPE,
    };
    use sanctum_content::domain::blocks::DEFAULT_WORDS;
    use sanctum_core::event::DomainEvent;
    use sanctum_test_support::{MockRng, fixed_clock};

    fn default_game() -> WordGame {
        WordGame::new(
            Uuid::new_v4(),
            WordGameConfig::from(&WordGameBlock::default()),
        )
    }

    fn game_with(words: &[&str], time_limit_secs: u32) -> WordGame {
        WordGame::new(
            Uuid::new_v4(),
            WordGameConfig {
                words: words.iter().map(|w| (*w).to_owned()).collect(),
                time_limit_secs,
            },
        )
    }

    fn event_types(game: &WordGame) -> Vec<&'static str> {
        game.uncommitted_events()
            .iter()
            .map(DomainEvent::event_type)
            .collect()
    }

    /// Clicks the correct tile for every remaining slot of the current word.
    fn solve_current_word(game: &mut WordGame) {
        let clock = fixed_clock();
        while let Some(required) = game.puzzle().and_then(Puzzle::required_letter) {
            let tile = game
                .puzzle()
                .unwrap()
                .tiles()
                .iter()
                .position(|t| !t.used && t.letter == required)
                .unwrap();
            assert!(matches!(
                game.place_tile(tile, &clock),
                Placement::Accepted { .. }
            ));
        }
    }

    #[test]
    fn test_new_game_is_idle_with_full_clock() {
        let game = default_game();

        assert_eq!(game.phase(), GamePhase::Idle);
        assert_eq!(game.time_left(), 90);
        assert_eq!(game.word_count(), DEFAULT_WORDS.len());
        assert!(game.puzzle().is_none());
    }

    #[test]
    fn test_start_presents_first_word_with_all_letters_as_tiles() {
        // Arrange
        let mut game = default_game();

        // Act
        let started = game.start(&mut MockRng, &fixed_clock());

        // Assert
        assert!(started);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(
            event_types(&game),
            vec![GAME_STARTED_EVENT_TYPE, WORD_PRESENTED_EVENT_TYPE]
        );
        let puzzle = game.puzzle().unwrap();
        assert_eq!(puzzle.target(), "PATIO");
        let letters: String = puzzle.tiles().iter().map(|t| t.letter).collect();
        assert_eq!(letters, "ATIOP");
        assert_eq!(game.uncommitted_events()[1].metadata().sequence_number, 2);
    }

    #[test]
    fn test_start_while_playing_is_ignored() {
        let mut game = default_game();
        game.start(&mut MockRng, &fixed_clock());
        game.clear_uncommitted_events();

        assert!(!game.start(&mut MockRng, &fixed_clock()));
        assert!(game.uncommitted_events().is_empty());
    }

    #[test]
    fn test_start_without_words_is_ignored() {
        let mut game = game_with(&[], 90);

        assert!(!game.start(&mut MockRng, &fixed_clock()));
        assert_eq!(game.phase(), GamePhase::Idle);
    }

    #[test]
    fn test_place_tile_fills_slots_left_to_right() {
        // Arrange: tiles are "ATIOP"
        let mut game = default_game();
        let clock = fixed_clock();
        game.start(&mut MockRng, &clock);

        // Act
        let first = game.place_tile(4, &clock);
        let second = game.place_tile(0, &clock);

        // Assert
        assert_eq!(first, Placement::Accepted { slot: 0, letter: 'P' });
        assert_eq!(second, Placement::Accepted { slot: 1, letter: 'A' });
        assert_eq!(game.puzzle().unwrap().next_empty(), Some(2));
    }

    #[test]
    fn test_wrong_tile_is_rejected_and_board_unchanged() {
        // Arrange
        let mut game = default_game();
        let clock = fixed_clock();
        game.start(&mut MockRng, &clock);
        let before = game.puzzle().cloned();
        game.clear_uncommitted_events();

        // Act: "T" while "P" is required
        let placement = game.place_tile(1, &clock);

        // Assert
        assert_eq!(
            placement,
            Placement::Rejected {
                letter: 'T',
                expected: 'P'
            }
        );
        assert_eq!(game.puzzle().cloned(), before);
        assert_eq!(event_types(&game), vec![TILE_REJECTED_EVENT_TYPE]);
    }

    #[test]
    fn test_used_tile_click_is_ignored() {
        let mut game = default_game();
        let clock = fixed_clock();
        game.start(&mut MockRng, &clock);
        game.place_tile(4, &clock);
        game.clear_uncommitted_events();

        assert_eq!(game.place_tile(4, &clock), Placement::Ignored);
        assert!(game.uncommitted_events().is_empty());
    }

    #[test]
    fn test_solving_a_word_moves_to_word_complete() {
        // Arrange
        let mut game = default_game();
        game.start(&mut MockRng, &fixed_clock());

        // Act
        solve_current_word(&mut game);

        // Assert
        assert_eq!(game.phase(), GamePhase::WordComplete);
        assert_eq!(
            event_types(&game).last().copied(),
            Some(WORD_COMPLETED_EVENT_TYPE)
        );
        assert_eq!(
            game.place_tile(0, &fixed_clock()),
            Placement::Ignored,
            "tiles are inert between words"
        );
    }

    #[test]
    fn test_advance_presents_next_word_and_keeps_clock() {
        // Arrange
        let mut game = default_game();
        let clock = fixed_clock();
        game.start(&mut MockRng, &clock);
        game.tick(&clock);
        solve_current_word(&mut game);

        // Act
        let advanced = game.advance(&mut MockRng, &clock);

        // Assert
        assert!(advanced);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.word_index(), 1);
        assert_eq!(game.puzzle().unwrap().target(), "ALTAR");
        assert_eq!(game.time_left(), 89);
    }

    #[test]
    fn test_advance_outside_word_complete_is_ignored() {
        let mut game = default_game();
        game.start(&mut MockRng, &fixed_clock());

        assert!(!game.advance(&mut MockRng, &fixed_clock()));
        assert_eq!(game.word_index(), 0);
    }

    #[test]
    fn test_completing_last_word_is_victory() {
        // Arrange
        let mut game = default_game();
        let clock = fixed_clock();
        game.start(&mut MockRng, &clock);

        // Act
        for _ in 0..DEFAULT_WORDS.len() - 1 {
            solve_current_word(&mut game);
            assert!(game.advance(&mut MockRng, &clock));
        }
        solve_current_word(&mut game);

        // Assert
        assert_eq!(game.phase(), GamePhase::Victory);
        assert_eq!(game.word_index(), 4);
        assert_eq!(game.puzzle().unwrap().target(), "LUGAR SANTÍSIMO");
        assert_eq!(
            event_types(&game).last().copied(),
            Some(GAME_WON_EVENT_TYPE)
        );
        assert!(!game.tick(&clock));
    }

    #[test]
    fn test_tick_counts_down_and_expires_at_zero() {
        // Arrange
        let mut game = game_with(&["ALTAR"], 3);
        let clock = fixed_clock();
        game.start(&mut MockRng, &clock);
        game.clear_uncommitted_events();

        // Act
        let ticks: Vec<bool> = (0..4).map(|_| game.tick(&clock)).collect();

        // Assert
        assert_eq!(ticks, vec![true, true, true, false]);
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.time_left(), 0);
        assert_eq!(
            event_types(&game),
            vec![
                CLOCK_TICKED_EVENT_TYPE,
                CLOCK_TICKED_EVENT_TYPE,
                TIME_EXPIRED_EVENT_TYPE
            ]
        );
    }

    #[test]
    fn test_tick_runs_between_words() {
        let mut game = game_with(&["A", "B"], 10);
        let clock = fixed_clock();
        game.start(&mut MockRng, &clock);
        solve_current_word(&mut game);

        assert!(game.tick(&clock));
        assert_eq!(game.phase(), GamePhase::WordComplete);
        assert_eq!(game.time_left(), 9);
    }

    #[test]
    fn test_tick_before_start_is_ignored() {
        let mut game = default_game();

        assert!(!game.tick(&fixed_clock()));
        assert_eq!(game.time_left(), 90);
    }

    #[test]
    fn test_restart_after_game_over_resets_clock_and_first_word() {
        // Arrange
        let mut game = game_with(&["ALTAR", "PATIO"], 2);
        let clock = fixed_clock();
        game.start(&mut MockRng, &clock);
        game.tick(&clock);
        game.tick(&clock);
        assert_eq!(game.phase(), GamePhase::GameOver);

        // Act
        let restarted = game.start(&mut MockRng, &clock);

        // Assert
        assert!(restarted);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.time_left(), 2);
        assert_eq!(game.word_index(), 0);
        assert_eq!(game.puzzle().unwrap().next_empty(), Some(0));
    }

    #[test]
    fn test_replaying_events_reproduces_state() {
        // Arrange
        let id = Uuid::new_v4();
        let config = WordGameConfig::from(&WordGameBlock::default());
        let mut game = WordGame::new(id, config.clone());
        let clock = fixed_clock();
        game.start(&mut MockRng, &clock);
        game.tick(&clock);
        game.place_tile(4, &clock);
        game.place_tile(2, &clock);

        // Act
        let mut replayed = WordGame::new(id, config);
        for event in game.uncommitted_events() {
            replayed.apply(event);
        }

        // Assert
        assert_eq!(replayed.phase(), game.phase());
        assert_eq!(replayed.time_left(), 89);
        assert_eq!(replayed.puzzle(), game.puzzle());
        assert_eq!(replayed.version(), game.version());
    }

    #[test]
    fn test_word_without_letters_completes_immediately() {
        let mut game = game_with(&["  ", "ALTAR"], 30);

        game.start(&mut MockRng, &fixed_clock());

        assert_eq!(game.phase(), GamePhase::WordComplete);
    }

    #[test]
    fn test_placed_events_are_recorded_in_order() {
        let mut game = game_with(&["AB"], 30);
        let clock = fixed_clock();
        game.start(&mut MockRng, &clock);
        game.clear_uncommitted_events();

        solve_current_word(&mut game);

        assert_eq!(
            event_types(&game),
            vec![
                TILE_PLACED_EVENT_TYPE,
                TILE_PLACED_EVENT_TYPE,
                GAME_WON_EVENT_TYPE
            ]
        );
    }
}
