//! Per-block widget state as mounted by the host.

use std::sync::Arc;

use sanctum_content::ContentBlock;
use sanctum_core::clock::Clock;
use sanctum_widgets::{FlipDeck, QuizState, SingleSelection, SlideshowState};
use sanctum_wordgame::{CountdownTick, SharedRng, WordGameConfig, WordGameSession};
use tokio::sync::mpsc::UnboundedSender;

/// What a mounted widget remembers between renders.
#[derive(Debug)]
pub enum WidgetState {
    /// Blocks that render purely from content.
    Stateless,
    Accordion(SingleSelection<usize>),
    Timeline(SingleSelection<usize>),
    Debate(SingleSelection<String>),
    Quiz(QuizState),
    Slideshow(SlideshowState),
    Flipcards(FlipDeck),
    WordGame(Box<WordGameSession>),
}

/// Shared resources needed to mount widgets.
#[derive(Clone)]
pub struct MountContext {
    pub rng: SharedRng,
    pub clock: Arc<dyn Clock>,
    pub ticks: UnboundedSender<CountdownTick>,
}

impl WidgetState {
    /// Fresh state for `block`.
    #[must_use]
    pub fn mount(block: &ContentBlock, ctx: &MountContext) -> Self {
        match block {
            ContentBlock::Accordion { .. } => WidgetState::Accordion(SingleSelection::new()),
            ContentBlock::Timeline { .. } => WidgetState::Timeline(SingleSelection::new()),
            ContentBlock::Debate { .. } => WidgetState::Debate(SingleSelection::new()),
            ContentBlock::Quiz { .. } => WidgetState::Quiz(QuizState::new()),
            ContentBlock::Slideshow { .. } => WidgetState::Slideshow(SlideshowState::new()),
            ContentBlock::Flipcards { flip_cards } => {
                WidgetState::Flipcards(FlipDeck::new(flip_cards.len()))
            }
            ContentBlock::WordGame(game) => WidgetState::WordGame(Box::new(WordGameSession::new(
                WordGameConfig::from(game),
                Arc::clone(&ctx.rng),
                Arc::clone(&ctx.clock),
                ctx.ticks.clone(),
            ))),
            ContentBlock::Heading { .. }
            | ContentBlock::Paragraph { .. }
            | ContentBlock::Note { .. }
            | ContentBlock::Image { .. }
            | ContentBlock::Video { .. }
            | ContentBlock::List { .. }
            | ContentBlock::Table { .. }
            | ContentBlock::Unknown => WidgetState::Stateless,
        }
    }

    /// Cancels anything this widget scheduled.
    pub fn teardown(&mut self) {
        if let WidgetState::WordGame(session) = self {
            session.teardown();
        }
    }
}
