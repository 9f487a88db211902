//! Content blocks: the tagged variants a lesson is made of.

use serde::{Deserialize, Serialize};


/// Words of the default Tabernacle puzzle, in play order.
pub const DEFAULT_WORDS: [&str; 5] = ["PATIO", "ALTAR", "LAVACRO", "LUGAR SANTO", "LUGAR SANTÍSIMO"];

/// Default countdown for a word game, in seconds.
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 90;

/// Default title shown above a word game.
pub const DEFAULT_WORD_GAME_TITLE: &str = "El Tabernáculo Desordenado";

fn default_heading_level() -> u8 {
    2
}

/// One self-contained unit of lesson content.
///
/// Tagged by `type` in the authoring format. Tags this version does not
/// know deserialize to [`ContentBlock::Unknown`] and render nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ContentBlock {
    /// A section heading.
    Heading {
        /// Heading depth, 2 through 4.
        #[serde(default = "default_heading_level")]
        level: u8,
        /// Heading text.
        text: String,
    },
    /// A paragraph of body text.
    Paragraph {
        /// Paragraph text, inline Markdown allowed.
        text: String,
    },
    /// A vertical timeline of expandable events.
    Timeline {
        /// Timeline entries in display order.
        #[serde(default)]
        timeline_items: Vec<TimelineItem>,
    },
    /// A grid of two-sided cards.
    Flipcards {
        /// Cards in display order.
        #[serde(default)]
        flip_cards: Vec<FlipCardItem>,
    },
    /// The letter-scramble mini game.
    WordGame(WordGameBlock),
    /// A selector between theological postures.
    Debate {
        /// Postures in display order.
        #[serde(default)]
        postures: Vec<Posture>,
    },
    /// A highlighted side note.
    Note {
        /// Note text, inline Markdown allowed.
        text: String,
    },
    /// A standalone image.
    Image {
        /// Image location.
        src: String,
        /// Alternative text, also shown as a caption.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
    },
    /// An embedded video.
    Video {
        /// Embed location.
        src: String,
    },
    /// Collapsible sections, at most one open.
    Accordion {
        /// Sections in display order.
        #[serde(default)]
        items: Vec<AccordionItem>,
    },
    /// A single multiple-choice question.
    Quiz {
        /// Question text.
        question: String,
        /// Answer options in display order.
        #[serde(default)]
        options: Vec<QuizOption>,
        /// Shown after the answer is verified.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        explanation: Option<String>,
    },
    /// A cyclic image carousel.
    Slideshow {
        /// Slides in display order.
        #[serde(default)]
        items: Vec<Slide>,
    },
    /// A bulleted list.
    List {
        /// List entries, inline Markdown allowed.
        #[serde(default)]
        items: Vec<String>,
    },
    /// A table with a header row.
    Table {
        /// Column headers.
        #[serde(default)]
        headers: Vec<String>,
        /// Body rows.
        #[serde(default)]
        rows: Vec<Vec<String>>,
    },
    /// Any block kind this version does not handle.
    #[serde(other)]
    Unknown,
}

/// Field-less mirror of the handled [`ContentBlock`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockKind {
    Heading,
    Paragraph,
    Timeline,
    Flipcards,
    WordGame,
    Debate,
    Note,
    Image,
    Video,
    Accordion,
    Quiz,
    Slideshow,
    List,
    Table,
}

impl BlockKind {
    /// Every handled kind, in the order the authoring format lists them.
    pub const ALL: [BlockKind; 14] = [
        BlockKind::Heading,
        BlockKind::Paragraph,
        BlockKind::Timeline,
        BlockKind::Flipcards,
        BlockKind::WordGame,
        BlockKind::Debate,
        BlockKind::Note,
        BlockKind::Image,
        BlockKind::Video,
        BlockKind::Accordion,
        BlockKind::Quiz,
        BlockKind::Slideshow,
        BlockKind::List,
        BlockKind::Table,
    ];

    /// The `type` tag used in the authoring format.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            BlockKind::Heading => "heading",
            BlockKind::Paragraph => "paragraph",
            BlockKind::Timeline => "timeline",
            BlockKind::Flipcards => "flipcards",
            BlockKind::WordGame => "wordGame",
            BlockKind::Debate => "debate",
            BlockKind::Note => "note",
            BlockKind::Image => "image",
            BlockKind::Video => "video",
            BlockKind::Accordion => "accordion",
            BlockKind::Quiz => "quiz",
            BlockKind::Slideshow => "slideshow",
            BlockKind::List => "list",
            BlockKind::Table => "table",
        }
    }

    /// Whether widgets of this kind hold local state.
    #[must_use]
    pub fn is_stateful(self) -> bool {
        matches!(
            self,
            BlockKind::Timeline
                | BlockKind::Flipcards
                | BlockKind::WordGame
                | BlockKind::Debate
                | BlockKind::Accordion
                | BlockKind::Quiz
                | BlockKind::Slideshow
        )
    }
}

impl ContentBlock {
    /// Returns the kind of this block, or `None` for unknown kinds.
    #[must_use]
    pub fn kind(&self) -> Option<BlockKind> {
        let kind = match self {
            ContentBlock::Heading { .. } => BlockKind::Heading,
            ContentBlock::Paragraph { .. } => BlockKind::Paragraph,
            ContentBlock::Timeline { .. } => BlockKind::Timeline,
            ContentBlock::Flipcards { .. } => BlockKind::Flipcards,
            ContentBlock::WordGame(_) => BlockKind::WordGame,
            ContentBlock::Debate { .. } => BlockKind::Debate,
            ContentBlock::Note { .. } => BlockKind::Note,
            ContentBlock::Image { .. } => BlockKind::Image,
            ContentBlock::Video { .. } => BlockKind::Video,
            ContentBlock::Accordion { .. } => BlockKind::Accordion,
            ContentBlock::Quiz { .. } => BlockKind::Quiz,
            ContentBlock::Slideshow { .. } => BlockKind::Slideshow,
            ContentBlock::List { .. } => BlockKind::List,
            ContentBlock::Table { .. } => BlockKind::Table,
            ContentBlock::Unknown => return None,
        };
        Some(kind)
    }
}

/// One entry of a timeline block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    /// Era or label shown in the badge.
    pub year: String,
    /// Entry title.
    pub title: String,
    /// Short description, always visible.
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biblical_citation: Option<String>,
    /// Long-form text; its presence makes the entry expandable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
}

impl TimelineItem {
    /// Whether selecting this entry reveals a detail fragment.
    #[must_use]
    pub fn is_expandable(&self) -> bool {
        self.detailed_content.is_some()
    }
}

/// One card of a flip-card grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlipCardItem {
    pub front_title: String,
    pub front_subtitle: String,
    pub icon: String,
    pub back_title: String,
    pub back_content: String,
    pub biblical_citation: String,
    pub interpretation: String,
}

/// One option of a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOption {
    /// Option text.
    pub text: String,
    /// Whether choosing this option answers the question correctly.
    pub is_correct: bool,
}

/// One posture of a debate block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Posture {
    /// Stable identifier, unique within the block.
    pub id: String,
    pub title: String,
    pub summary: String,
    /// Shown beneath the postures while this one is active.
    pub full_argument: String,
}

/// One section of an accordion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionItem {
    pub title: String,
    pub content: String,
}

/// One slide of a slideshow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub image: String,
    pub caption: String,
}

/// Settings of a word game block. Every field falls back to the Tabernacle
/// puzzle defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordGameBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit_secs: Option<u32>,
}

impl WordGameBlock {
    /// Title shown above the game.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_WORD_GAME_TITLE)
    }

    /// Words to solve, in play order.
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        match &self.words {
            Some(words) => words.clone(),
            None => DEFAULT_WORDS.iter().map(|w| (*w).to_owned()).collect(),
        }
    }

    /// Countdown length in seconds.
    #[must_use]
    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs.unwrap_or(DEFAULT_TIME_LIMIT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_without_level_defaults_to_two() {
        let block: ContentBlock =
            serde_json::from_str(r#"{"type":"heading","text":"Contexto"}"#).unwrap();

        assert_eq!(
            block,
            ContentBlock::Heading {
                level: 2,
                text: "Contexto".to_owned()
            }
        );
    }

    #[test]
    fn test_unknown_tag_deserializes_to_unknown() {
        let block: ContentBlock =
            serde_json::from_str(r#"{"type":"hologram","depth":3}"#).unwrap();

        assert_eq!(block, ContentBlock::Unknown);
        assert_eq!(block.kind(), None);
    }

    #[test]
    fn test_camel_case_fields_are_read() {
        let block: ContentBlock = serde_json::from_str(
            r#"{"type":"timeline","timelineItems":[{"year":"Prueba","title":"Cárcel","description":"Fiel","detailedContent":"..."}]}"#,
        )
        .unwrap();

        let ContentBlock::Timeline { timeline_items } = block else {
            panic!("expected timeline");
        };
        assert_eq!(timeline_items.len(), 1);
        assert!(timeline_items[0].is_expandable());
        assert!(timeline_items[0].commentary.is_none());
    }

    #[test]
    fn test_word_game_without_fields_uses_defaults() {
        let block: ContentBlock = serde_json::from_str(r#"{"type":"wordGame"}"#).unwrap();

        let ContentBlock::WordGame(game) = block else {
            panic!("expected word game");
        };
        assert_eq!(game.words().len(), 5);
        assert_eq!(game.words()[4], "LUGAR SANTÍSIMO");
        assert_eq!(game.time_limit_secs(), 90);
        assert_eq!(game.title(), DEFAULT_WORD_GAME_TITLE);
    }

    #[test]
    fn test_every_kind_tag_deserializes_to_that_kind() {
        let samples = [
            r#"{"type":"heading","text":"t"}"#,
            r#"{"type":"paragraph","text":"t"}"#,
            r#"{"type":"timeline"}"#,
            r#"{"type":"flipcards"}"#,
            r#"{"type":"wordGame"}"#,
            r#"{"type":"debate"}"#,
            r#"{"type":"note","text":"t"}"#,
            r#"{"type":"image","src":"a.png"}"#,
            r#"{"type":"video","src":"v"}"#,
            r#"{"type":"accordion"}"#,
            r#"{"type":"quiz","question":"q"}"#,
            r#"{"type":"slideshow"}"#,
            r#"{"type":"list"}"#,
            r#"{"type":"table"}"#,
        ];

        for (kind, sample) in BlockKind::ALL.iter().zip(samples) {
            let block: ContentBlock = serde_json::from_str(sample).unwrap();
            assert_eq!(block.kind(), Some(*kind), "sample {sample}");
            assert!(sample.contains(kind.tag()));
        }
    }
}
