//! A single scrambled word: fixed slots to fill and the tiles to fill them.

use serde::Serialize;

/// One position of the target word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "slot", content = "letter", rename_all = "camelCase")]
pub enum Slot {
    /// A space in a multi-word phrase; pre-filled and never targeted.
    Space,
    /// A letter position that has not been filled yet.
    Empty,
    /// A letter position filled with the given letter.
    Filled(char),
}

/// A clickable letter tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub letter: char,
    pub used: bool,
}

/// What happened when a tile was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The tile filled the next empty slot.
    Accepted { slot: usize, letter: char },
    /// The tile's letter is not the one the next empty slot needs.
    Rejected { letter: char, expected: char },
    /// The click had no effect (wrong phase, used tile, bad index).
    Ignored,
}

/// Upper-cases a word and splits it into characters, spaces included.
#[must_use]
pub fn normalize(word: &str) -> Vec<char> {
    word.chars().flat_map(char::to_uppercase).collect()
}

/// The letters of a word that become tiles, in order: everything but spaces.
#[must_use]
pub fn letters_of(word: &str) -> Vec<char> {
    normalize(word)
        .into_iter()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Board state for the word currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    target: Vec<char>,
    slots: Vec<Slot>,
    tiles: Vec<Tile>,
}

impl Puzzle {
    /// Lays out `word` as slots and `tile_letters` (already shuffled) as tiles.
    #[must_use]
    pub fn new(word: &str, tile_letters: &[char]) -> Self {
        let target = normalize(word);
        let slots = target
            .iter()
            .map(|c| if c.is_whitespace() { Slot::Space } else { Slot::Empty })
            .collect();
        let tiles = tile_letters
            .iter()
            .map(|&letter| Tile {
                letter,
                used: false,
            })
            .collect();
        Self {
            target,
            slots,
            tiles,
        }
    }

    /// The upper-cased target word.
    #[must_use]
    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Position of the leftmost empty slot.
    #[must_use]
    pub fn next_empty(&self) -> Option<usize> {
        self.slots.iter().position(|s| *s == Slot::Empty)
    }

    /// The letter the leftmost empty slot requires.
    #[must_use]
    pub fn required_letter(&self) -> Option<char> {
        self.next_empty().map(|slot| self.target[slot])
    }

    /// Checks a click on `tile` without changing the board.
    #[must_use]
    pub fn check(&self, tile: usize) -> Placement {
        let Some(candidate) = self.tiles.get(tile) else {
            return Placement::Ignored;
        };
        if candidate.used {
            return Placement::Ignored;
        }
        let Some(slot) = self.next_empty() else {
            return Placement::Ignored;
        };
        let expected = self.target[slot];
        if candidate.letter == expected {
            Placement::Accepted {
                slot,
                letter: candidate.letter,
            }
        } else {
            Placement::Rejected {
                letter: candidate.letter,
                expected,
            }
        }
    }

    /// Moves `tile` into `slot`. Out-of-range positions are ignored.
    pub fn fill(&mut self, tile: usize, slot: usize) {
        let Some(t) = self.tiles.get_mut(tile) else {
            return;
        };
        let Some(s) = self.slots.get_mut(slot) else {
            return;
        };
        t.used = true;
        *s = Slot::Filled(t.letter);
    }

    /// True once no letter slot is empty.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.next_empty().is_none()
    }
}
