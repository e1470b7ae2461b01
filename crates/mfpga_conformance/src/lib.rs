//! Conformance test helpers for the mfpga loaders.
//!
//! Provides small benchmark cases as text, runs them through the staged
//! loader, and lays them out on disk for tests that exercise the file and
//! configuration paths.

#![warn(missing_docs)]

use std::io;
use std::path::{Path, PathBuf};

use mfpga_config::CasePaths;
use mfpga_design::{load_design, Design, DesignBuilder, InputPaths, LoadError};
use mfpga_diagnostics::{Diagnostic, DiagnosticSink};
use mfpga_source::SourceDb;

/// The text of the four input files of a case.
#[derive(Clone, Copy, Debug)]
pub struct CaseText<'a> {
    /// `F<id> <max_io>` pairs.
    pub info: &'a str,
    /// `F<id>: g<n>...` lines.
    pub mapping: &'a str,
    /// `g<src> <weight> g<sink>...` lines.
    pub net: &'a str,
    /// `F<id>: v1,...,vN` rows.
    pub topo: &'a str,
}

/// Two FPGAs, three nodes, one net crossing from F1 to F2.
pub const SCENARIO_A: CaseText<'static> = CaseText {
    info: "F1 2\nF2 3\n",
    mapping: "F1: g1 g2\nF2: g3\n",
    net: "g1 1 g2 g3\n",
    topo: "F1: 0,4\nF2: 4,0\n",
};

/// Node g5 is mapped under F1 and then again under F2.
pub const SCENARIO_B: CaseText<'static> = CaseText {
    info: "F1 4\nF2 4\n",
    mapping: "F1: g1 g5\nF2: g2 g5\n",
    net: "g5 1 g1 g2\n",
    topo: "F1: 0,1\nF2: 1,0\n",
};

/// Four FPGAs in a ring with a mix of local, single-hop and fan-out nets.
pub const RING: CaseText<'static> = CaseText {
    info: "F1 100\nF2 100\nF3 100\nF4 100\n",
    mapping: "F1: g1 g2 g3\nF2: g4 g5\nF3: g6 g7\nF4: g8\n",
    net: "g1 1 g2 g4\n\
          g2 1 g3\n\
          g4 1 g6 g7 g1\n\
          g6 1 g8\n\
          g8 1 g1 g4 g6\n\
          g3 1 g5\n\
          g5 1 g6\n\
          g7 1\n",
    topo: "F1: 0,3,0,3\nF2: 3,0,3,0\nF3: 0,3,0,3\nF4: 3,0,3,0\n",
};

/// Result of loading a case from text.
pub struct PipelineResult {
    /// The finished design.
    pub design: Design,
    /// Warnings emitted while loading.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of warnings.
    pub warning_count: usize,
}

/// Runs all four stages over in-memory text.
pub fn load_text(case: &CaseText<'_>) -> Result<PipelineResult, LoadError> {
    let mut db = SourceDb::new();
    let info = db.add_source("design.info", case.info);
    let mapping = db.add_source("design.fpga.out", case.mapping);
    let net = db.add_source("design.net", case.net);
    let topo = db.add_source("design.topo", case.topo);

    let sink = DiagnosticSink::new();
    let design = DesignBuilder::new(&sink)
        .load_info(db.get_file(info))?
        .load_mapping(db.get_file(mapping))?
        .load_nets(db.get_file(net))?
        .load_topo(db.get_file(topo))?;

    Ok(PipelineResult {
        design,
        warning_count: sink.warning_count(),
        diagnostics: sink.take_all(),
    })
}

/// Like [`load_text`] but panics on a load error.
pub fn load_ok(case: &CaseText<'_>) -> PipelineResult {
    match load_text(case) {
        Ok(result) => result,
        Err(e) => panic!("case failed to load: {e}"),
    }
}

/// Writes the case under `dir` with the standard benchmark file names.
pub fn write_case_dir(dir: &Path, case: &CaseText<'_>) -> io::Result<CasePaths> {
    std::fs::create_dir_all(dir)?;
    let paths = CasePaths::in_dir(dir);
    std::fs::write(&paths.info, case.info)?;
    std::fs::write(&paths.mapping, case.mapping)?;
    std::fs::write(&paths.net, case.net)?;
    std::fs::write(&paths.topo, case.topo)?;
    Ok(paths)
}

/// Loads a case from disk the way the CLI does, through [`load_design`].
pub fn load_dir(paths: &CasePaths) -> Result<PipelineResult, LoadError> {
    let mut db = SourceDb::new();
    let sink = DiagnosticSink::new();
    let design = load_design(
        &mut db,
        &sink,
        &InputPaths {
            info: &paths.info,
            mapping: &paths.mapping,
            net: &paths.net,
            topo: &paths.topo,
        },
    )?;
    Ok(PipelineResult {
        design,
        warning_count: sink.warning_count(),
        diagnostics: sink.take_all(),
    })
}

/// Writes an `mfpga.toml` in `root` pointing at `case_dir`, which must be
/// inside `root`.
pub fn write_config(root: &Path, name: &str, case_dir: &Path) -> io::Result<PathBuf> {
    let rel = case_dir.strip_prefix(root).unwrap_or(case_dir);
    let path = root.join(mfpga_config::CONFIG_FILE_NAME);
    std::fs::write(
        &path,
        format!(
            "[case]\nname = \"{name}\"\ndir = \"{}\"\n\n[output]\ndir = \"scripts\"\n",
            rel.display()
        ),
    )?;
    Ok(path)
}
