//! Read-only analyses over a finished [`Design`](crate::Design).
//!
//! - [`Design::logical_demand`](crate::Design::logical_demand) counts net
//!   crossings between every FPGA pair.
//! - [`Design::connection_groups`](crate::Design::connection_groups) buckets
//!   nets by the FPGAs they reach, and [`consolidate_groups`] merges buckets
//!   that differ only in per-FPGA sink counts.

mod demand;
mod grouping;

pub use grouping::{consolidate_groups, ConnectionGroup, ConnectionPattern, ConsolidatedGroup};
