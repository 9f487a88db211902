//! Lesson host: owns the widget state of every block of one lesson.
//!
//! Widget state lives exactly as long as its mounted block. A widget is keyed
//! by its block's content and the lesson id: reloading the same lesson keeps
//! the state of unchanged blocks, while navigating to another lesson remounts
//! every widget. Dropping the host tears every widget down, which cancels
//! running word game countdowns.

use std::sync::{Arc, Mutex};

use sanctum_content::{ContentBlock, Lesson};
use sanctum_core::clock::{Clock, SystemClock};
use sanctum_core::error::DomainError;
use sanctum_core::event::DomainEvent;
use sanctum_core::rng::SystemRng;
use sanctum_widgets::Tracked;
use sanctum_wordgame::{CountdownTick, SharedRng, WordGameSession};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::debug;

use crate::action::{Action, WidgetEvent};
use crate::dispatch::render_block;
use crate::state::{MountContext, WidgetState};
use crate::view::View;

/// Mounted widgets for one lesson.
pub struct LessonHost {
    lesson: Arc<Lesson>,
    widgets: Vec<Tracked<WidgetState>>,
    ctx: MountContext,
    ticks: UnboundedReceiver<CountdownTick>,
}

impl std::fmt::Debug for LessonHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LessonHost")
            .field("lesson", &self.lesson.id)
            .field("widgets", &self.widgets.len())
            .finish_non_exhaustive()
    }
}

impl LessonHost {
    /// Mounts every block of `lesson`.
    #[must_use]
    pub fn new(lesson: Arc<Lesson>, rng: SharedRng, clock: Arc<dyn Clock>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let ctx = MountContext {
            rng,
            clock,
            ticks: tx,
        };
        let widgets = lesson
            .blocks
            .iter()
            .map(|block| {
                Tracked::new(
                    lesson.block_identity(block),
                    WidgetState::mount(block, &ctx),
                )
            })
            .collect();
        debug!(lesson_id = %lesson.id, blocks = lesson.blocks.len(), "lesson mounted");
        Self {
            lesson,
            widgets,
            ctx,
            ticks: rx,
        }
    }

    /// Mounts `lesson` with an entropy-seeded RNG and the system clock.
    #[must_use]
    pub fn with_system_defaults(lesson: Arc<Lesson>) -> Self {
        let rng: SharedRng = Arc::new(Mutex::new(SystemRng::from_entropy()));
        Self::new(lesson, rng, Arc::new(SystemClock))
    }

    #[must_use]
    pub fn lesson(&self) -> &Arc<Lesson> {
        &self.lesson
    }

    /// State mounted for the block at `index`.
    #[must_use]
    pub fn widget(&self, index: usize) -> Option<&WidgetState> {
        self.widgets.get(index).map(Tracked::state)
    }

    /// Renders every block in lesson order.
    #[must_use]
    pub fn render(&self) -> Vec<View> {
        self.lesson
            .blocks
            .iter()
            .zip(&self.widgets)
            .enumerate()
            .map(|(index, (block, widget))| render_block(index, block, widget.state()))
            .collect()
    }

    /// Applies a user action to the addressed widget.
    ///
    /// Actions the widget cannot take in its current state (verifying an
    /// unanswered quiz, clicking a used tile) are accepted and change nothing.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::BlockNotFound` if no block is mounted at
    /// `action.block`, `DomainError::ActionMismatch` if the event belongs to a
    /// different widget kind, and `DomainError::Infrastructure` if the shared
    /// RNG lock is poisoned.
    ///
    /// # Panics
    ///
    /// Starting a word game panics if called outside a Tokio runtime.
    pub fn dispatch(&mut self, action: &Action) -> Result<(), DomainError> {
        let index = action.block;
        let block = self
            .lesson
            .blocks
            .get(index)
            .ok_or(DomainError::BlockNotFound(index))?;
        let widget = self
            .widgets
            .get_mut(index)
            .ok_or(DomainError::BlockNotFound(index))?;

        let mismatch = || DomainError::ActionMismatch {
            block: index,
            widget: block.kind().map_or("unknown", |k| k.tag()),
            action: action.event.name(),
        };
        if block.kind() != Some(action.event.target()) {
            return Err(mismatch());
        }

        debug!(block = index, action = action.event.name(), "dispatching action");
        match (block, widget.state_mut(), &action.event) {
            (
                ContentBlock::Accordion { items },
                WidgetState::Accordion(open),
                WidgetEvent::ToggleAccordion { item },
            ) => {
                if *item < items.len() {
                    open.toggle(*item);
                }
            }
            (
                ContentBlock::Timeline { timeline_items },
                WidgetState::Timeline(open),
                WidgetEvent::ToggleTimeline { item },
            ) => {
                if *item < timeline_items.len() {
                    open.toggle(*item);
                }
            }
            (
                ContentBlock::Debate { postures },
                WidgetState::Debate(active),
                WidgetEvent::SelectPosture { id },
            ) => {
                if postures.iter().any(|p| &p.id == id) {
                    active.toggle(id.clone());
                }
            }
            (
                ContentBlock::Quiz { options, .. },
                WidgetState::Quiz(quiz),
                WidgetEvent::SelectQuizOption { option },
            ) => {
                quiz.select(*option, options.len());
            }
            (ContentBlock::Quiz { .. }, WidgetState::Quiz(quiz), WidgetEvent::VerifyQuiz) => {
                if quiz.verify() {
                    debug!(block = index, selected = ?quiz.selected(), "quiz answered");
                }
            }
            (
                ContentBlock::Slideshow { items },
                WidgetState::Slideshow(slideshow),
                WidgetEvent::NextSlide,
            ) => slideshow.advance(items.len()),
            (
                ContentBlock::Slideshow { items },
                WidgetState::Slideshow(slideshow),
                WidgetEvent::PreviousSlide,
            ) => slideshow.retreat(items.len()),
            (
                ContentBlock::Flipcards { .. },
                WidgetState::Flipcards(deck),
                WidgetEvent::FlipCard { card },
            ) => {
                deck.flip(*card);
            }
            (ContentBlock::WordGame(_), WidgetState::WordGame(session), event) => {
                let result = apply_word_game(session, event);
                log_word_game_events(session);
                result?;
            }
            _ => return Err(mismatch()),
        }
        Ok(())
    }

    /// Routes a countdown tick to the word game that scheduled it.
    ///
    /// Returns whether the tick changed the game; stale ticks from an earlier
    /// run of a mounted game return `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SessionNotFound` if no mounted word game has the
    /// tick's session id, as happens for ticks already queued when a game was
    /// unmounted.
    pub fn handle_tick(&mut self, tick: CountdownTick) -> Result<bool, DomainError> {
        let session = self
            .widgets
            .iter_mut()
            .find_map(|widget| match widget.state_mut() {
                WidgetState::WordGame(session) if session.id() == tick.session_id => {
                    Some(session)
                }
                _ => None,
            })
            .ok_or(DomainError::SessionNotFound(tick.session_id))?;
        let applied = session.handle_tick(tick);
        log_word_game_events(session);
        Ok(applied)
    }

    /// Waits for the next countdown tick from any mounted word game.
    pub async fn next_tick(&mut self) -> Option<CountdownTick> {
        self.ticks.recv().await
    }

    /// Switches to `lesson`. When it is a new version of the mounted lesson,
    /// blocks unchanged at the same position keep their state; any other
    /// lesson is mounted fresh. Returns how many widgets were mounted fresh.
    pub fn reconcile(&mut self, lesson: Arc<Lesson>) -> usize {
        let mut mounted = 0;
        for (index, block) in lesson.blocks.iter().enumerate() {
            let key = lesson.block_identity(block);
            if let Some(widget) = self.widgets.get_mut(index) {
                if widget.key() != key {
                    widget.state_mut().teardown();
                }
                if widget.sync(key, || WidgetState::mount(block, &self.ctx)) {
                    debug!(block = index, identity = %key.short(), "widget remounted");
                    mounted += 1;
                }
            } else {
                self.widgets
                    .push(Tracked::new(key, WidgetState::mount(block, &self.ctx)));
                mounted += 1;
            }
        }
        for widget in self.widgets.iter_mut().skip(lesson.blocks.len()) {
            widget.state_mut().teardown();
        }
        self.widgets.truncate(lesson.blocks.len());

        debug!(
            from = %self.lesson.id,
            to = %lesson.id,
            mounted,
            kept = lesson.blocks.len() - mounted,
            "lesson reconciled"
        );
        self.lesson = lesson;
        mounted
    }

    /// Cancels every running countdown. Widget state is kept.
    pub fn teardown(&mut self) {
        for widget in &mut self.widgets {
            widget.state_mut().teardown();
        }
    }
}

impl Drop for LessonHost {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn apply_word_game(session: &mut WordGameSession, event: &WidgetEvent) -> Result<(), DomainError> {
    match event {
        WidgetEvent::StartWordGame => {
            session.start()?;
        }
        WidgetEvent::PlaceTile { tile } => {
            session.place_tile(*tile);
        }
        WidgetEvent::NextWord => {
            session.advance()?;
        }
        _ => {}
    }
    Ok(())
}

fn log_word_game_events(session: &mut WordGameSession) {
    for event in session.drain_events() {
        let meta = event.metadata();
        debug!(
            session_id = %meta.session_id,
            sequence_number = meta.sequence_number,
            event_type = event.event_type(),
            "word game event"
        );
    }
}
