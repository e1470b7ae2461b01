//! Diagnostic codes such as `W101`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A warning number rendered with a `W` prefix, e.g. `W103`.
///
/// Conditions that stop loading are errors in their own right and never
/// get a code; only tolerated irregularities do.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagnosticCode {
    /// Three-digit number.
    pub number: u16,
}

impl DiagnosticCode {
    /// Creates a code.
    pub const fn new(number: u16) -> Self {
        Self { number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{:03}", self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_pads_number() {
        assert_eq!(DiagnosticCode::new(101).to_string(), "W101");
        assert_eq!(DiagnosticCode::new(7).to_string(), "W007");
    }

    #[test]
    fn serde_roundtrip() {
        let code = DiagnosticCode::new(103);
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "103");
        let back: DiagnosticCode = serde_json::from_str(&json).unwrap();
        assert_eq!(code, back);
    }
}
