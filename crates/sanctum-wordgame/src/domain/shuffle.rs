//! Letter scrambling.

use sanctum_core::rng::DeterministicRng;

/// In-place Fisher-Yates shuffle driven by the injected RNG.
pub fn fisher_yates<T>(items: &mut [T], rng: &mut dyn DeterministicRng) {
    for i in (1..items.len()).rev() {
        let upper = u32::try_from(i).unwrap_or(u32::MAX);
        let j = rng.next_u32_range(0, upper) as usize;
        items.swap(i, j.min(i));
    }
}

/// Shuffles a word's letters into tile order.
///
/// If the first shuffle reproduces the original order of a word longer than
/// one letter, it is shuffled exactly once more. The second result is kept
/// even if it is still unchanged, so short words may be presented unscrambled.
#[must_use]
pub fn scramble(letters: &[char], rng: &mut dyn DeterministicRng) -> Vec<char> {
    let mut tiles = letters.to_vec();
    fisher_yates(&mut tiles, rng);
    if tiles.len() > 1 && tiles == letters {
        fisher_yates(&mut tiles, rng);
    }
    tiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use sanctum_test_support::{MockRng, SequenceRng};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_scramble_is_a_permutation() {
        let letters = chars("LAVACRO");
        let mut rng = sanctum_core::rng::SystemRng::seeded(11);

        let mut tiles = scramble(&letters, &mut rng);

        tiles.sort_unstable();
        let mut expected = letters.clone();
        expected.sort_unstable();
        assert_eq!(tiles, expected);
    }

    #[test]
    fn test_scramble_with_scripted_rng_is_deterministic() {
        // Arrange: i=4 -> 2, i=3 -> 0, i=2 -> 2, i=1 -> 0
        let mut rng = SequenceRng::new(vec![2, 0, 2, 0]);

        // Act
        let tiles = scramble(&chars("PATIO"), &mut rng);

        // Assert
        // PATIO -> swap(4,2) PAOIT -> swap(3,0) IAOPT -> swap(1,0) AIOPT
        assert_eq!(tiles, chars("AIOPT"));
        assert_eq!(rng.consumed(), 4);
    }

    #[test]
    fn test_scramble_reshuffles_once_when_order_unchanged() {
        // Arrange: the first pass swaps every position with itself.
        let mut rng = SequenceRng::new(vec![4, 3, 2, 1, 0, 0, 0, 0]);

        // Act
        let tiles = scramble(&chars("PATIO"), &mut rng);

        // Assert
        assert_eq!(tiles, chars("ATIOP"));
        assert_eq!(rng.consumed(), 8);
    }

    #[test]
    fn test_scramble_keeps_second_result_even_if_unchanged() {
        let mut rng = SequenceRng::new(vec![1, 1]);

        let tiles = scramble(&chars("AB"), &mut rng);

        assert_eq!(tiles, chars("AB"));
        assert_eq!(rng.consumed(), 2);
    }

    #[test]
    fn test_scramble_single_letter_draws_nothing() {
        let mut rng = SequenceRng::new(Vec::new());

        assert_eq!(scramble(&chars("A"), &mut rng), chars("A"));
    }

    #[test]
    fn test_mock_rng_rotates_left() {
        assert_eq!(scramble(&chars("ALTAR"), &mut MockRng), chars("LTARA"));
    }
}
