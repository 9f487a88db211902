//! The rendered widget tree.
//!
//! A `View` is plain data: what to draw and which [`Action`] each control
//! sends back. Surfaces consume it as JSON, tagged by `widget`.

use sanctum_content::BlockKind;
use sanctum_widgets::{Feedback, OptionStyle};
use sanctum_wordgame::{GamePhase, Slot};
use serde::Serialize;

use crate::action::Action;
use crate::markdown::Span;

/// One rendered block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "widget", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum View {
    /// Renders nothing.
    Empty,
    Heading {
        level: u8,
        text: String,
    },
    Paragraph {
        spans: Vec<Span>,
    },
    Note {
        spans: Vec<Span>,
    },
    Image {
        src: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    Video {
        src: String,
    },
    List {
        items: Vec<Vec<Span>>,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Accordion {
        items: Vec<AccordionItemView>,
    },
    Timeline {
        items: Vec<TimelineItemView>,
    },
    Debate {
        postures: Vec<PostureView>,
        /// Full argument of the active posture.
        #[serde(skip_serializing_if = "Option::is_none")]
        argument: Option<String>,
    },
    Quiz(QuizView),
    Slideshow(SlideshowView),
    Flipcards {
        cards: Vec<FlipCardView>,
    },
    WordGame(WordGameView),
}

impl View {
    /// The block kind this view was rendered from; `None` for [`View::Empty`].
    #[must_use]
    pub fn kind(&self) -> Option<BlockKind> {
        let kind = match self {
            View::Empty => return None,
            View::Heading { .. } => BlockKind::Heading,
            View::Paragraph { .. } => BlockKind::Paragraph,
            View::Note { .. } => BlockKind::Note,
            View::Image { .. } => BlockKind::Image,
            View::Video { .. } => BlockKind::Video,
            View::List { .. } => BlockKind::List,
            View::Table { .. } => BlockKind::Table,
            View::Accordion { .. } => BlockKind::Accordion,
            View::Timeline { .. } => BlockKind::Timeline,
            View::Debate { .. } => BlockKind::Debate,
            View::Quiz(_) => BlockKind::Quiz,
            View::Slideshow(_) => BlockKind::Slideshow,
            View::Flipcards { .. } => BlockKind::Flipcards,
            View::WordGame(_) => BlockKind::WordGame,
        };
        Some(kind)
    }
}

/// One accordion section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccordionItemView {
    pub title: String,
    pub open: bool,
    /// Present only while the section is open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<Span>>,
    pub toggle: Action,
}

/// One timeline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItemView {
    pub year: String,
    pub title: String,
    pub description: String,
    pub expandable: bool,
    pub expanded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<TimelineDetailView>,
    pub toggle: Action,
}

/// The fragment revealed under an expanded timeline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineDetailView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biblical_citation: Option<String>,
    pub detailed_content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
}

/// One selectable debate posture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostureView {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub active: bool,
    pub select: Action,
}

/// A quiz question and its reveal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizView {
    pub question: String,
    pub options: Vec<QuizOptionView>,
    /// `None` renders the verify control disabled.
    pub verify: Option<Action>,
    pub answered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
    /// Shown with the feedback, when the block has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOptionView {
    pub text: String,
    pub style: OptionStyle,
    /// `None` once the answer is revealed.
    pub select: Option<Action>,
}

/// The slide on screen and the carousel controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideshowView {
    pub current: usize,
    pub slide_count: usize,
    pub image: String,
    pub caption: String,
    pub previous: Action,
    pub next: Action,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlipCardView {
    pub front_title: String,
    pub front_subtitle: String,
    pub icon: String,
    pub back_title: String,
    pub back_content: String,
    pub biblical_citation: String,
    pub interpretation: String,
    pub flipped: bool,
    pub flip: Action,
}

/// The word game screen for its current phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordGameView {
    pub title: String,
    pub phase: GamePhase,
    pub time_left: u32,
    /// One-based number of the word on screen.
    pub word_number: usize,
    pub word_count: usize,
    pub slots: Vec<Slot>,
    pub tiles: Vec<TileView>,
    /// Start or restart control; present on the start, game-over and
    /// victory screens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Action>,
    /// Continue control between words.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_word: Option<Action>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileView {
    pub letter: char,
    pub used: bool,
    /// `None` for used tiles and outside play.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<Action>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::WidgetEvent;

    #[test]
    fn test_empty_view_serializes_to_bare_tag() {
        assert_eq!(
            serde_json::to_value(View::Empty).unwrap(),
            serde_json::json!({ "widget": "empty" })
        );
    }

    #[test]
    fn test_struct_views_are_tagged_with_widget() {
        // Arrange
        let view = View::Slideshow(SlideshowView {
            current: 0,
            slide_count: 3,
            image: "img/altar.jpg".to_owned(),
            caption: "El altar".to_owned(),
            previous: Action::new(2, WidgetEvent::PreviousSlide),
            next: Action::new(2, WidgetEvent::NextSlide),
        });

        // Act
        let json = serde_json::to_value(&view).unwrap();

        // Assert
        assert_eq!(json["widget"], "slideshow");
        assert_eq!(json["slideCount"], 3);
        assert_eq!(json["next"]["event"]["kind"], "nextSlide");
        assert_eq!(view.kind(), Some(BlockKind::Slideshow));
    }
}
