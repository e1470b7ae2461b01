//! `mfpga stats`: print a summary of a loaded case to stdout.

use mfpga_report::write_stats;

use crate::pipeline::{load_case, resolve_case};
use crate::{CaseArgs, GlobalArgs};

/// Runs the `mfpga stats` command.
pub fn run(args: &CaseArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let case = resolve_case(args, global)?;
    let loaded = load_case(&case, global)?;
    write_stats(&loaded.design, &mut std::io::stdout().lock())?;
    Ok(0)
}
