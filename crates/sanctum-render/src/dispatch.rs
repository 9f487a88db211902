//! Block dispatcher: one content block plus its widget state in, one view out.
//!
//! Rendering is pure and infallible. Content is never validated here; odd
//! content (an empty slideshow, a quiz without a correct option) still
//! renders something sensible. Unknown kinds render [`View::Empty`].

use sanctum_content::{
    AccordionItem, ContentBlock, FlipCardItem, Posture, QuizOption, Slide, TimelineItem,
    WordGameBlock,
};
use sanctum_widgets::{FlipDeck, QuizState, SingleSelection, SlideshowState};
use sanctum_wordgame::{GamePhase, WordGameSession};

use crate::action::{Action, WidgetEvent};
use crate::markdown::inline;
use crate::state::WidgetState;
use crate::view::{
    AccordionItemView, FlipCardView, PostureView, QuizOptionView, QuizView, SlideshowView,
    TileView, TimelineDetailView, TimelineItemView, View, WordGameView,
};

/// Renders the block at position `index` with its mounted state.
///
/// A state of the wrong shape (or [`WidgetState::Stateless`]) renders the
/// block as freshly mounted.
#[must_use]
pub fn render_block(index: usize, block: &ContentBlock, state: &WidgetState) -> View {
    match block {
        ContentBlock::Heading { level, text } => View::Heading {
            level: *level,
            text: text.clone(),
        },
        ContentBlock::Paragraph { text } => View::Paragraph {
            spans: inline(text),
        },
        ContentBlock::Note { text } => View::Note {
            spans: inline(text),
        },
        ContentBlock::Image { src, alt } => View::Image {
            src: src.clone(),
            caption: alt.clone().filter(|a| !a.is_empty()),
        },
        ContentBlock::Video { src } => View::Video { src: src.clone() },
        ContentBlock::List { items } => View::List {
            items: items.iter().map(|item| inline(item)).collect(),
        },
        ContentBlock::Table { headers, rows } => View::Table {
            headers: headers.clone(),
            rows: rows.clone(),
        },
        ContentBlock::Accordion { items } => {
            let fresh = SingleSelection::new();
            let open = match state {
                WidgetState::Accordion(selection) => selection,
                _ => &fresh,
            };
            render_accordion(index, items, open)
        }
        ContentBlock::Timeline { timeline_items } => {
            let fresh = SingleSelection::new();
            let open = match state {
                WidgetState::Timeline(selection) => selection,
                _ => &fresh,
            };
            render_timeline(index, timeline_items, open)
        }
        ContentBlock::Debate { postures } => {
            let fresh = SingleSelection::new();
            let active = match state {
                WidgetState::Debate(selection) => selection,
                _ => &fresh,
            };
            render_debate(index, postures, active)
        }
        ContentBlock::Quiz {
            question,
            options,
            explanation,
        } => {
            let fresh = QuizState::new();
            let quiz = match state {
                WidgetState::Quiz(quiz) => quiz,
                _ => &fresh,
            };
            View::Quiz(render_quiz(
                index,
                question,
                options,
                explanation.as_deref(),
                quiz,
            ))
        }
        ContentBlock::Slideshow { items } => {
            let slideshow = match state {
                WidgetState::Slideshow(slideshow) => *slideshow,
                _ => SlideshowState::new(),
            };
            render_slideshow(index, items, slideshow)
        }
        ContentBlock::Flipcards { flip_cards } => {
            let fresh = FlipDeck::new(flip_cards.len());
            let deck = match state {
                WidgetState::Flipcards(deck) => deck,
                _ => &fresh,
            };
            render_flipcards(index, flip_cards, deck)
        }
        ContentBlock::WordGame(game) => View::WordGame(match state {
            WidgetState::WordGame(session) => render_word_game(index, game, session),
            _ => idle_word_game(index, game),
        }),
        ContentBlock::Unknown => View::Empty,
    }
}

fn render_accordion(
    index: usize,
    items: &[AccordionItem],
    open: &SingleSelection<usize>,
) -> View {
    let items = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_open = open.is_open(&i);
            AccordionItemView {
                title: item.title.clone(),
                open: is_open,
                content: is_open.then(|| inline(&item.content)),
                toggle: Action::new(index, WidgetEvent::ToggleAccordion { item: i }),
            }
        })
        .collect();
    View::Accordion { items }
}

fn render_timeline(
    index: usize,
    items: &[TimelineItem],
    open: &SingleSelection<usize>,
) -> View {
    let items = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let expanded = open.is_open(&i);
            let detail = if expanded {
                item.detailed_content
                    .as_ref()
                    .map(|detailed_content| TimelineDetailView {
                        biblical_citation: item.biblical_citation.clone(),
                        detailed_content: detailed_content.clone(),
                        commentary: item.commentary.clone(),
                    })
            } else {
                None
            };
            TimelineItemView {
                year: item.year.clone(),
                title: item.title.clone(),
                description: item.description.clone(),
                expandable: item.is_expandable(),
                expanded,
                detail,
                toggle: Action::new(index, WidgetEvent::ToggleTimeline { item: i }),
            }
        })
        .collect();
    View::Timeline { items }
}

fn render_debate(index: usize, postures: &[Posture], active: &SingleSelection<String>) -> View {
    let argument = active
        .open()
        .and_then(|id| postures.iter().find(|p| &p.id == id))
        .map(|p| p.full_argument.clone());
    let postures = postures
        .iter()
        .map(|posture| PostureView {
            id: posture.id.clone(),
            title: posture.title.clone(),
            summary: posture.summary.clone(),
            active: active.is_open(&posture.id),
            select: Action::new(
                index,
                WidgetEvent::SelectPosture {
                    id: posture.id.clone(),
                },
            ),
        })
        .collect();
    View::Debate { postures, argument }
}

fn render_quiz(
    index: usize,
    question: &str,
    options: &[QuizOption],
    explanation: Option<&str>,
    quiz: &QuizState,
) -> QuizView {
    let answered = quiz.is_answered();
    let option_views = options
        .iter()
        .enumerate()
        .map(|(i, option)| QuizOptionView {
            text: option.text.clone(),
            style: quiz.option_style(i, options),
            select: (!answered)
                .then(|| Action::new(index, WidgetEvent::SelectQuizOption { option: i })),
        })
        .collect();
    QuizView {
        question: question.to_owned(),
        options: option_views,
        verify: quiz
            .can_verify()
            .then(|| Action::new(index, WidgetEvent::VerifyQuiz)),
        answered,
        feedback: quiz.feedback(options),
        explanation: if answered {
            explanation.map(str::to_owned)
        } else {
            None
        },
    }
}

fn render_slideshow(index: usize, items: &[Slide], slideshow: SlideshowState) -> View {
    let Some(slide) = items.get(slideshow.current()).or_else(|| items.first()) else {
        return View::Empty;
    };
    View::Slideshow(SlideshowView {
        current: slideshow.current().min(items.len() - 1),
        slide_count: items.len(),
        image: slide.image.clone(),
        caption: slide.caption.clone(),
        previous: Action::new(index, WidgetEvent::PreviousSlide),
        next: Action::new(index, WidgetEvent::NextSlide),
    })
}

fn render_flipcards(index: usize, cards: &[FlipCardItem], deck: &FlipDeck) -> View {
    let cards = cards
        .iter()
        .enumerate()
        .map(|(i, card)| FlipCardView {
            front_title: card.front_title.clone(),
            front_subtitle: card.front_subtitle.clone(),
            icon: card.icon.clone(),
            back_title: card.back_title.clone(),
            back_content: card.back_content.clone(),
            biblical_citation: card.biblical_citation.clone(),
            interpretation: card.interpretation.clone(),
            flipped: deck.is_flipped(i),
            flip: Action::new(index, WidgetEvent::FlipCard { card: i }),
        })
        .collect();
    View::Flipcards { cards }
}

fn render_word_game(index: usize, block: &WordGameBlock, session: &WordGameSession) -> WordGameView {
    let game = session.game();
    let phase = game.phase();
    let (slots, tiles) = match game.puzzle() {
        Some(puzzle) => (
            puzzle.slots().to_vec(),
            puzzle
                .tiles()
                .iter()
                .enumerate()
                .map(|(i, tile)| TileView {
                    letter: tile.letter,
                    used: tile.used,
                    place: (phase == GamePhase::Playing && !tile.used)
                        .then(|| Action::new(index, WidgetEvent::PlaceTile { tile: i })),
                })
                .collect(),
        ),
        None => (Vec::new(), Vec::new()),
    };
    WordGameView {
        title: block.title().to_owned(),
        phase,
        time_left: game.time_left(),
        word_number: game.word_index() + 1,
        word_count: game.word_count(),
        slots,
        tiles,
        start: (phase == GamePhase::Idle || phase.is_terminal())
            .then(|| Action::new(index, WidgetEvent::StartWordGame)),
        next_word: (phase == GamePhase::WordComplete)
            .then(|| Action::new(index, WidgetEvent::NextWord)),
    }
}

fn idle_word_game(index: usize, block: &WordGameBlock) -> WordGameView {
    WordGameView {
        title: block.title().to_owned(),
        phase: GamePhase::Idle,
        time_left: block.time_limit_secs(),
        word_number: 1,
        word_count: block.words().len(),
        slots: Vec::new(),
        tiles: Vec::new(),
        start: Some(Action::new(index, WidgetEvent::StartWordGame)),
        next_word: None,
    }
}
