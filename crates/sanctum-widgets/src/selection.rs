//! Single-selection toggle shared by accordions, timelines and debates.

/// At most one open item, identified by `K`.
///
/// Selecting the open item closes it; selecting another item replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleSelection<K> {
    open: Option<K>,
}

impl<K> Default for SingleSelection<K> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<K: PartialEq> SingleSelection<K> {
    /// Creates a selection with nothing open.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The open item, if any.
    #[must_use]
    pub fn open(&self) -> Option<&K> {
        self.open.as_ref()
    }

    /// Whether `key` is the open item.
    #[must_use]
    pub fn is_open(&self, key: &K) -> bool {
        self.open.as_ref() == Some(key)
    }

    /// Toggles `key`, returning whether it is open afterwards.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.is_open(&key) {
            self.open = None;
            false
        } else {
            self.open = Some(key);
            true
        }
    }

    /// Closes whatever is open.
    pub fn close(&mut self) {
        self.open = None;
    }
}
