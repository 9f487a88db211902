//! Flip-card state: one independent flag per card.

/// Flipped flags for a grid of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlipDeck {
    flipped: Vec<bool>,
}

impl FlipDeck {
    /// Creates a deck of `len` cards, all showing their front.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            flipped: vec![false; len],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.flipped.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flipped.is_empty()
    }

    /// Whether card `index` shows its back. Out-of-range cards show their front.
    #[must_use]
    pub fn is_flipped(&self, index: usize) -> bool {
        self.flipped.get(index).copied().unwrap_or(false)
    }

    /// Flips card `index`, returning its new side, or `None` if out of range.
    pub fn flip(&mut self, index: usize) -> Option<bool> {
        let card = self.flipped.get_mut(index)?;
        *card = !*card;
        Some(*card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_toggles_one_card_only() {
        let mut deck = FlipDeck::new(3);

        assert_eq!(deck.flip(1), Some(true));

        assert!(!deck.is_flipped(0));
        assert!(deck.is_flipped(1));
        assert!(!deck.is_flipped(2));
    }

    #[test]
    fn test_second_flip_shows_front_again() {
        let mut deck = FlipDeck::new(2);

        deck.flip(0);
        assert_eq!(deck.flip(0), Some(false));
    }

    #[test]
    fn test_flip_out_of_range_is_rejected() {
        let mut deck = FlipDeck::new(2);

        assert_eq!(deck.flip(5), None);
        assert!(!deck.is_flipped(5));
        assert_eq!(deck.len(), 2);
    }
}
