//! Staged loading of multi-FPGA partition cases into a cross-referenced model.
//!
//! A case is four text files read in a fixed order, each resolving ids
//! against what the previous stages built:
//!
//! 1. **info** (`F<id> <max_io>`) creates the dense FPGA table
//! 2. **mapping** (`F<id>: g<n>...`) creates nodes and links them to FPGAs
//! 3. **net** (`g<src> <weight> g<sink>...`) creates nets over known nodes
//! 4. **topo** (`F<id>: v1,...,vN`) fills the N×N channel-capacity matrix
//!
//! The order is enforced by [`DesignBuilder`]'s phase type parameter; only
//! the last stage yields a [`Design`]. Analyses over the finished design live
//! in [`analysis`].
//!
//! # Usage
//!
//! ```ignore
//! use mfpga_design::{load_design, InputPaths};
//!
//! let mut sources = SourceDb::new();
//! let sink = DiagnosticSink::new();
//! let design = load_design(&mut sources, &sink, &paths)?;
//! let demand = design.logical_demand();
//! for group in design.connection_groups() {
//!     println!("{} -> {:?}", group.pattern, group.nets);
//! }
//! ```

#![warn(missing_docs)]

pub mod analysis;
pub mod builder;
pub mod cursor;
pub mod error;
pub mod loader;
pub mod model;

pub use analysis::{consolidate_groups, ConnectionGroup, ConnectionPattern, ConsolidatedGroup};
pub use builder::{
    load_design, read_input, DesignBuilder, InfoLoaded, InputPaths, MappingLoaded, NetsLoaded,
    Uninitialized,
};
pub use cursor::Cursor;
pub use error::{EndpointRole, InputKind, LoadError};
pub use model::{Design, Fpga, Net, Node, SquareMatrix};
