//! Shared pipeline helpers for CLI commands.
//!
//! Resolves which case to load (from `--case` or `mfpga.toml`), runs the
//! four loading stages with status output, and renders collected warnings.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use mfpga_config::{CasePaths, OutputConfig};
use mfpga_design::{read_input, Design, DesignBuilder, InputKind};
use mfpga_diagnostics::{Diagnostic, DiagnosticRenderer, DiagnosticSink, TerminalRenderer};
use mfpga_source::{FileId, SourceDb};

use crate::{CaseArgs, GlobalArgs};

/// A case to load and where its reports go.
#[derive(Debug)]
pub struct CaseSelection {
    /// Display name.
    pub name: String,
    /// The four input files.
    pub inputs: CasePaths,
    /// Report destinations, relative to `base`.
    pub output: OutputConfig,
    /// Directory report paths are resolved against.
    pub base: PathBuf,
}

impl CaseSelection {
    /// Path of the visualization JSON.
    pub fn visualization_path(&self) -> PathBuf {
        self.output.visualization_path(&self.base)
    }

    /// Path of the net group report.
    pub fn net_groups_path(&self) -> PathBuf {
        self.output.net_groups_path(&self.base)
    }

    /// Path of the consolidated group report.
    pub fn consolidated_groups_path(&self) -> PathBuf {
        self.output.consolidated_groups_path(&self.base)
    }
}

/// Picks the case from `--case`, else from `--config`, else from the nearest
/// `mfpga.toml` above the current directory.
///
/// With `--case`, the standard file names are used and reports go under the
/// current directory.
pub fn resolve_case(
    args: &CaseArgs,
    global: &GlobalArgs,
) -> Result<CaseSelection, Box<dyn Error>> {
    if let Some(ref dir) = args.case {
        let dir = PathBuf::from(dir);
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| dir.display().to_string());
        return Ok(CaseSelection {
            name,
            inputs: CasePaths::in_dir(&dir),
            output: OutputConfig::default(),
            base: PathBuf::from("."),
        });
    }

    let (base, config) = match global.config {
        Some(ref path) => {
            let path = PathBuf::from(path);
            if path.is_file() {
                let content = std::fs::read_to_string(&path)?;
                let base = path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from("."));
                (base, mfpga_config::load_config_from_str(&content)?)
            } else {
                let config = mfpga_config::load_config(&path)?;
                (path, config)
            }
        }
        None => {
            let base = mfpga_config::find_config(&std::env::current_dir()?)?;
            let config = mfpga_config::load_config(&base)?;
            (base, config)
        }
    };

    Ok(CaseSelection {
        name: config.case.name.clone(),
        inputs: config.case.paths(&base),
        output: config.output,
        base,
    })
}

/// A loaded case together with what was read to build it.
pub struct LoadedCase {
    /// The finished design.
    pub design: Design,
    /// Buffered input files, kept for rendering diagnostic locations.
    pub sources: SourceDb,
    /// Warnings about tolerated input irregularities.
    pub diagnostics: Vec<Diagnostic>,
    /// Wall time spent reading and parsing the four files.
    pub elapsed: Duration,
}

fn read_stage(
    sources: &mut SourceDb,
    kind: InputKind,
    path: &Path,
    global: &GlobalArgs,
) -> Result<FileId, Box<dyn Error>> {
    if !global.quiet {
        eprintln!("   Loading {}", path.display());
    }
    let id = read_input(sources, kind, path)?;
    if global.verbose {
        let file = sources.get_file(id);
        eprintln!(
            "      {kind}: {} bytes, {} lines, hash {}",
            file.content.len(),
            file.line_count(),
            file.content_hash.short()
        );
    }
    Ok(id)
}

/// Runs info, mapping, net and topology loading in order.
///
/// With `--verbose`, warnings are rendered to stderr once loading succeeds.
pub fn load_case(case: &CaseSelection, global: &GlobalArgs) -> Result<LoadedCase, Box<dyn Error>> {
    let mut sources = SourceDb::new();
    let sink = DiagnosticSink::new();
    let start = Instant::now();

    let id = read_stage(&mut sources, InputKind::Info, &case.inputs.info, global)?;
    let builder = DesignBuilder::new(&sink).load_info(sources.get_file(id))?;

    let id = read_stage(&mut sources, InputKind::Mapping, &case.inputs.mapping, global)?;
    let builder = builder.load_mapping(sources.get_file(id))?;

    let id = read_stage(&mut sources, InputKind::Net, &case.inputs.net, global)?;
    let builder = builder.load_nets(sources.get_file(id))?;

    let id = read_stage(&mut sources, InputKind::Topo, &case.inputs.topo, global)?;
    let design = builder.load_topo(sources.get_file(id))?;

    let elapsed = start.elapsed();
    let diagnostics = sink.take_all();

    if global.verbose {
        let renderer = TerminalRenderer::new(global.color);
        for diag in &diagnostics {
            eprintln!("{}", renderer.render(diag, &sources));
        }
        eprintln!(
            "      {} FPGAs, {} nodes, {} nets, {} warning(s)",
            design.fpga_count(),
            design.nodes().len(),
            design.nets().len(),
            diagnostics.len()
        );
    }

    Ok(LoadedCase {
        design,
        sources,
        diagnostics,
        elapsed,
    })
}

/// Prints a `Wrote <path>` status line.
pub fn report_written(path: &Path, global: &GlobalArgs) {
    if !global.quiet {
        eprintln!("      Wrote {}", path.display());
    }
}
