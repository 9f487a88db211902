//! Widget state bound to the identity of its backing content.

use sanctum_content::ContentDigest;

/// Widget state plus the digest of the content it was created for.
///
/// [`Tracked::sync`] discards the state when the content identity changes,
/// which is how widgets reset on navigation.
#[derive(Debug)]
pub struct Tracked<S> {
    key: ContentDigest,
    state: S,
}

impl<S> Tracked<S> {
    #[must_use]
    pub fn new(key: ContentDigest, state: S) -> Self {
        Self { key, state }
    }

    #[must_use]
    pub fn key(&self) -> ContentDigest {
        self.key
    }

    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// Rebinds to `key`. If it differs from the current key the old state is
    /// dropped and replaced by `init()`; returns whether a reset happened.
    pub fn sync(&mut self, key: ContentDigest, init: impl FnOnce() -> S) -> bool {
        if self.key == key {
            return false;
        }
        self.key = key;
        self.state = init();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::SingleSelection;

    #[test]
    fn test_sync_with_same_key_keeps_state() {
        let key = ContentDigest::of("accordion");
        let mut tracked = Tracked::new(key, SingleSelection::new());
        tracked.state_mut().toggle(1usize);

        let reset = tracked.sync(key, SingleSelection::new);

        assert!(!reset);
        assert!(tracked.state().is_open(&1));
    }

    #[test]
    fn test_sync_with_new_key_resets_state() {
        let mut tracked = Tracked::new(ContentDigest::of("lesson2"), SingleSelection::new());
        tracked.state_mut().toggle(1usize);

        let reset = tracked.sync(ContentDigest::of("lesson7"), SingleSelection::new);

        assert!(reset);
        assert_eq!(tracked.state().open(), None);
        assert_eq!(tracked.key(), ContentDigest::of("lesson7"));
    }
}
