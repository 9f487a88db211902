//! Cyclic slideshow position.

/// Current slide of a cyclic sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlideshowState {
    current: usize,
}

impl SlideshowState {
    /// Creates a slideshow positioned on the first slide.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Moves forward, wrapping from the last slide to the first.
    pub fn advance(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.current = (self.current + 1) % len;
    }

    /// Moves back, wrapping from the first slide to the last.
    pub fn retreat(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.current = (self.current + len - 1) % len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retreat_from_first_wraps_to_last() {
        let mut slideshow = SlideshowState::new();

        slideshow.retreat(3);

        assert_eq!(slideshow.current(), 2);
    }

    #[test]
    fn test_advance_from_last_wraps_to_first() {
        let mut slideshow = SlideshowState::new();
        slideshow.retreat(3);

        slideshow.advance(3);

        assert_eq!(slideshow.current(), 0);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut slideshow = SlideshowState::new();

        for _ in 0..5 {
            slideshow.advance(5);
        }

        assert_eq!(slideshow.current(), 0);
    }

    #[test]
    fn test_single_slide_stays_put() {
        let mut slideshow = SlideshowState::new();

        slideshow.advance(1);
        slideshow.retreat(1);

        assert_eq!(slideshow.current(), 0);
    }

    #[test]
    fn test_empty_slideshow_ignores_moves() {
        let mut slideshow = SlideshowState::new();

        slideshow.advance(0);
        slideshow.retreat(0);

        assert_eq!(slideshow.current(), 0);
    }
}
