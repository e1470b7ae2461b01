//! `mfpga viz`: write the FPGA graph for the plotting scripts.

use std::path::PathBuf;

use mfpga_report::{write_file, Visualization};

use crate::pipeline::{load_case, report_written, resolve_case};
use crate::{GlobalArgs, VizArgs};

/// Runs the `mfpga viz` command.
pub fn run(args: &VizArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let case = resolve_case(&args.case, global)?;
    let loaded = load_case(&case, global)?;

    let viz = Visualization::from_design(&loaded.design)?;
    let path = args
        .output
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| case.visualization_path());
    write_file(&path, |out| viz.write_json(out))?;
    report_written(&path, global);
    Ok(0)
}
