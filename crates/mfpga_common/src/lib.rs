//! Shared foundational types for the mfpga loaders and reports.
//!
//! Provides the textual-id newtypes used to cross-reference FPGAs, nodes and
//! nets without owning pointers, and the content hash used to fingerprint
//! input files.

#![warn(missing_docs)]

pub mod hash;
pub mod ids;

pub use hash::ContentHash;
pub use ids::{FpgaId, NetId, NodeId};
