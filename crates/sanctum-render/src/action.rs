//! User events fed back by a rendering surface.

use sanctum_content::BlockKind;
use serde::{Deserialize, Serialize};

/// A user event addressed to the widget of one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// Position of the block within the lesson.
    pub block: usize,
    pub event: WidgetEvent,
}

impl Action {
    #[must_use]
    pub fn new(block: usize, event: WidgetEvent) -> Self {
        Self { block, event }
    }
}

/// What the user did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum WidgetEvent {
    ToggleAccordion { item: usize },
    ToggleTimeline { item: usize },
    SelectPosture { id: String },
    SelectQuizOption { option: usize },
    VerifyQuiz,
    NextSlide,
    PreviousSlide,
    FlipCard { card: usize },
    /// Starts the word game, or restarts it from a finished round.
    StartWordGame,
    PlaceTile { tile: usize },
    NextWord,
}

impl WidgetEvent {
    /// Name used in logs and errors.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            WidgetEvent::ToggleAccordion { .. } => "toggleAccordion",
            WidgetEvent::ToggleTimeline { .. } => "toggleTimeline",
            WidgetEvent::SelectPosture { .. } => "selectPosture",
            WidgetEvent::SelectQuizOption { .. } => "selectQuizOption",
            WidgetEvent::VerifyQuiz => "verifyQuiz",
            WidgetEvent::NextSlide => "nextSlide",
            WidgetEvent::PreviousSlide => "previousSlide",
            WidgetEvent::FlipCard { .. } => "flipCard",
            WidgetEvent::StartWordGame => "startWordGame",
            WidgetEvent::PlaceTile { .. } => "placeTile",
            WidgetEvent::NextWord => "nextWord",
        }
    }

    /// The block kind whose widget handles this event.
    #[must_use]
    pub fn target(&self) -> BlockKind {
        match self {
            WidgetEvent::ToggleAccordion { .. } => BlockKind::Accordion,
            WidgetEvent::ToggleTimeline { .. } => BlockKind::Timeline,
            WidgetEvent::SelectPosture { .. } => BlockKind::Debate,
            WidgetEvent::SelectQuizOption { .. } | WidgetEvent::VerifyQuiz => BlockKind::Quiz,
            WidgetEvent::NextSlide | WidgetEvent::PreviousSlide => BlockKind::Slideshow,
            WidgetEvent::FlipCard { .. } => BlockKind::Flipcards,
            WidgetEvent::StartWordGame | WidgetEvent::PlaceTile { .. } | WidgetEvent::NextWord => {
                BlockKind::WordGame
            }
        }
    }
}
