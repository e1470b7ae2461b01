//! The phased builder that runs the loaders in dependency order.
//!
//! Each loader resolves ids against tables an earlier loader built, so the
//! builder's type parameter records which stage has run and only offers the
//! next one:
//!
//! ```text
//! Uninitialized --load_info--> InfoLoaded --load_mapping--> MappingLoaded
//!     --load_nets--> NetsLoaded --load_topo--> Design
//! ```
//!
//! Calling stages out of order does not compile. A stage can still fail with
//! [`LoadError::Sequence`] when its prerequisite ran but produced nothing.

use crate::cursor::Cursor;
use crate::error::{InputKind, LoadError};
use crate::loader;
use crate::model::Design;
use mfpga_diagnostics::DiagnosticSink;
use mfpga_source::{FileId, SourceDb, SourceFile};
use std::marker::PhantomData;
use std::path::Path;

mod sealed {
    pub trait Sealed {}
}

/// A loading stage of [`DesignBuilder`].
pub trait Phase: sealed::Sealed {}

/// Nothing loaded yet.
#[derive(Debug)]
pub struct Uninitialized;
/// FPGA table built.
#[derive(Debug)]
pub struct InfoLoaded;
/// Nodes created and placed.
#[derive(Debug)]
pub struct MappingLoaded;
/// Netlist built.
#[derive(Debug)]
pub struct NetsLoaded;

macro_rules! phases {
    ($($p:ty),*) => {
        $(
            impl sealed::Sealed for $p {}
            impl Phase for $p {}
        )*
    };
}

phases!(Uninitialized, InfoLoaded, MappingLoaded, NetsLoaded);

/// Accumulates a [`Design`] one input file at a time.
pub struct DesignBuilder<'a, P: Phase> {
    design: Design,
    sink: &'a DiagnosticSink,
    _phase: PhantomData<P>,
}

impl<'a, P: Phase> DesignBuilder<'a, P> {
    /// The partially built design, for inspection between stages.
    pub fn design(&self) -> &Design {
        &self.design
    }

    fn advance<Q: Phase>(self) -> DesignBuilder<'a, Q> {
        DesignBuilder {
            design: self.design,
            sink: self.sink,
            _phase: PhantomData,
        }
    }
}

impl<'a> DesignBuilder<'a, Uninitialized> {
    /// Starts an empty design. Warnings from every stage go to `sink`.
    pub fn new(sink: &'a DiagnosticSink) -> Self {
        Self {
            design: Design::default(),
            sink,
            _phase: PhantomData,
        }
    }

    /// Reads `F<id> <max_io>` pairs into the FPGA table.
    pub fn load_info(mut self, file: &SourceFile) -> Result<DesignBuilder<'a, InfoLoaded>, LoadError> {
        loader::info::load(&mut self.design, &mut Cursor::new(file))?;
        Ok(self.advance())
    }
}

impl<'a> DesignBuilder<'a, InfoLoaded> {
    /// Reads `F<id>: g<n>...` lines, creating and placing nodes.
    pub fn load_mapping(
        mut self,
        file: &SourceFile,
    ) -> Result<DesignBuilder<'a, MappingLoaded>, LoadError> {
        loader::mapping::load(&mut self.design, &mut Cursor::new(file), self.sink)?;
        Ok(self.advance())
    }
}

impl<'a> DesignBuilder<'a, MappingLoaded> {
    /// Reads `g<src> <weight> g<sink>...` lines into the netlist.
    pub fn load_nets(mut self, file: &SourceFile) -> Result<DesignBuilder<'a, NetsLoaded>, LoadError> {
        loader::net::load(&mut self.design, &mut Cursor::new(file))?;
        Ok(self.advance())
    }
}

impl<'a> DesignBuilder<'a, NetsLoaded> {
    /// Reads the topology matrix and finishes the design.
    pub fn load_topo(mut self, file: &SourceFile) -> Result<Design, LoadError> {
        loader::topo::load(&mut self.design, &mut Cursor::new(file), self.sink)?;
        Ok(self.design)
    }
}

/// Locations of the four input files of a case.
#[derive(Clone, Copy, Debug)]
pub struct InputPaths<'p> {
    /// FPGA I/O budgets.
    pub info: &'p Path,
    /// Node-to-FPGA mapping.
    pub mapping: &'p Path,
    /// Netlist.
    pub net: &'p Path,
    /// Channel-capacity topology.
    pub topo: &'p Path,
}

/// Reads one input file into `db` with a single bulk read.
pub fn read_input(db: &mut SourceDb, kind: InputKind, path: &Path) -> Result<FileId, LoadError> {
    db.load_file(path).map_err(|source| LoadError::Resource {
        kind,
        path: path.to_path_buf(),
        source,
    })
}

/// Runs all four stages, reading each file just before its stage.
pub fn load_design(
    db: &mut SourceDb,
    sink: &DiagnosticSink,
    paths: &InputPaths<'_>,
) -> Result<Design, LoadError> {
    let id = read_input(db, InputKind::Info, paths.info)?;
    let builder = DesignBuilder::new(sink).load_info(db.get_file(id))?;

    let id = read_input(db, InputKind::Mapping, paths.mapping)?;
    let builder = builder.load_mapping(db.get_file(id))?;

    let id = read_input(db, InputKind::Net, paths.net)?;
    let builder = builder.load_nets(db.get_file(id))?;

    let id = read_input(db, InputKind::Topo, paths.topo)?;
    builder.load_topo(db.get_file(id))
}
