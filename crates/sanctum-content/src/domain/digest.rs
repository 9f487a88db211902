//! Content identity digests.

use std::fmt;

use serde::Serialize;
use sha2::{Digest, Sha256};

/// SHA-256 identity of a content value, computed over its JSON form.
///
/// Widgets compare digests to decide whether their backing data changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentDigest([u8; 32]);

impl ContentDigest {
    /// Computes the digest of a serializable content value.
    ///
    /// # Panics
    ///
    /// Panics if `value` cannot be serialized to JSON, which cannot happen for
    /// the content model (string-keyed, derived `Serialize`).
    #[must_use]
    pub fn of<T: Serialize + ?Sized>(value: &T) -> Self {
        // Serialization of derived Serialize content types is infallible.
        let bytes = serde_json::to_vec(value).expect("content serialization is infallible");
        Self(Sha256::digest(&bytes).into())
    }

    /// First eight hex characters, for log lines.
    #[must_use]
    pub fn short(&self) -> String {
        self.to_string()[..8].to_owned()
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
