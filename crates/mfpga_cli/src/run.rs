//! `mfpga run`: load a case and write its standard reports.
//!
//! 1. Resolve the case (`--case` or `mfpga.toml`)
//! 2. Load the four input files, timing the load
//! 3. Write the visualization JSON
//! 4. Write the net group report (and the consolidated one with `--consolidate`)

use mfpga_design::consolidate_groups;
use mfpga_report::{write_consolidated_report, write_file, write_group_report, Visualization};

use crate::pipeline::{load_case, report_written, resolve_case};
use crate::{GlobalArgs, RunArgs};

/// Runs the `mfpga run` command.
pub fn run(args: &RunArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let case = resolve_case(&args.case, global)?;
    if !global.quiet {
        eprintln!("   Checking {}", case.name);
    }

    let loaded = load_case(&case, global)?;
    if !global.quiet {
        eprintln!(
            "   Finished loading {} in {} ms",
            case.name,
            loaded.elapsed.as_millis()
        );
    }
    let design = &loaded.design;

    let viz = Visualization::from_design(design)?;
    let path = case.visualization_path();
    write_file(&path, |out| viz.write_json(out))?;
    report_written(&path, global);

    let groups = design.connection_groups();
    let path = case.net_groups_path();
    write_file(&path, |out| Ok(write_group_report(&groups, out)?))?;
    report_written(&path, global);

    if args.consolidate {
        let merged = consolidate_groups(&groups);
        let path = case.consolidated_groups_path();
        write_file(&path, |out| Ok(write_consolidated_report(&merged, out)?))?;
        report_written(&path, global);
    }

    Ok(0)
}
