//! Quiz answer state: selection, then an irreversible reveal.

use sanctum_content::QuizOption;
use serde::Serialize;

/// How an option is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionStyle {
    /// Not chosen, nothing revealed about it.
    Neutral,
    /// Chosen, answer not yet verified.
    Selected,
    /// Revealed as a correct option.
    Correct,
    /// The user's pick, revealed as wrong.
    Incorrect,
}

/// The single feedback message shown after verifying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Feedback {
    Correct,
    Incorrect,
}

/// Selection and reveal state of one quiz.
///
/// Unanswered until [`QuizState::verify`] succeeds; afterwards the selection
/// is frozen until the widget is reset for a different question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizState {
    selected: Option<usize>,
    answered: bool,
}

impl QuizState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.answered
    }

    /// Whether the verify action is enabled.
    #[must_use]
    pub fn can_verify(&self) -> bool {
        !self.answered && self.selected.is_some()
    }

    /// Chooses option `index` among `option_count`. Ignored once answered or
    /// when out of range; returns whether the selection was taken.
    pub fn select(&mut self, index: usize, option_count: usize) -> bool {
        if self.answered || index >= option_count {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Reveals the answer. A no-op without a selection or when already
    /// answered; returns whether the reveal happened.
    pub fn verify(&mut self) -> bool {
        if !self.can_verify() {
            return false;
        }
        self.answered = true;
        true
    }

    /// Feedback for the chosen option, once answered.
    #[must_use]
    pub fn feedback(&self, options: &[QuizOption]) -> Option<Feedback> {
        if !self.answered {
            return None;
        }
        let chosen = options.get(self.selected?)?;
        Some(if chosen.is_correct {
            Feedback::Correct
        } else {
            Feedback::Incorrect
        })
    }

    /// Style of option `index`.
    ///
    /// After the reveal every option flagged correct is `Correct`, so content
    /// with several correct options highlights all of them.
    #[must_use]
    pub fn option_style(&self, index: usize, options: &[QuizOption]) -> OptionStyle {
        let is_selected = self.selected == Some(index);
        if !self.answered {
            return if is_selected {
                OptionStyle::Selected
            } else {
                OptionStyle::Neutral
            };
        }
        match options.get(index) {
            Some(option) if option.is_correct => OptionStyle::Correct,
            Some(_) if is_selected => OptionStyle::Incorrect,
            _ => OptionStyle::Neutral,
        }
    }
}
