//! Content fingerprints for benchmark input files.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 128-bit XXH3 fingerprint of a file's bytes.
///
/// Reported alongside load statistics so two runs can be checked for having
/// read identical inputs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash([u8; 16]);

impl ContentHash {
    /// Hashes a byte slice with XXH3-128.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self(xxhash_rust::xxh3::xxh3_128(data).to_le_bytes())
    }

    /// Returns the first eight hex digits, enough to tell inputs apart in a status line.
    pub fn short(&self) -> String {
        self.0[..4].iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", self.short())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_bytes_same_hash() {
        assert_eq!(
            ContentHash::from_bytes(b"F1 2\nF2 3\n"),
            ContentHash::from_bytes(b"F1 2\nF2 3\n")
        );
    }

    #[test]
    fn whitespace_changes_hash() {
        assert_ne!(
            ContentHash::from_bytes(b"F1 2\n"),
            ContentHash::from_bytes(b"F1  2\n")
        );
    }

    #[test]
    fn display_is_hex() {
        let s = ContentHash::from_bytes(b"g1 1 g2").to_string();
        assert_eq!(s.len(), 32);
        assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn short_is_prefix_of_display() {
        let h = ContentHash::from_bytes(b"F1: 0,4");
        assert_eq!(h.short().len(), 8);
        assert!(h.to_string().starts_with(&h.short()));
    }
}
