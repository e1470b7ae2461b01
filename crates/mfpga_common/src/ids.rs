//! Id newtypes for the entities of a partition case.
//!
//! Every id wraps the positive integer that appears in the input text
//! (`F3` is `FpgaId(3)`, `g17` is `NodeId(17)`). Cross-entity links are
//! stored as these ids and resolved through the design, never as references.

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Wraps the number written after the textual prefix.
            pub fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Returns the number written after the textual prefix.
            pub fn raw(self) -> u32 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }
    };
}

define_id!(
    /// Identifier of a physical FPGA (`F<n>`), 1-based.
    FpgaId,
    "F"
);

define_id!(
    /// Identifier of a logical node (`g<n>`).
    NodeId,
    "g"
);

define_id!(
    /// Sequential identifier of a net, assigned in file order from 1.
    NetId,
    "net"
);

impl FpgaId {
    /// Returns the zero-based slot of this FPGA in the dense table.
    ///
    /// Only meaningful for ids `>= 1`; the info loader never stores id 0.
    pub fn index(self) -> usize {
        (self.0 as usize).wrapping_sub(1)
    }
}
