//! `mfpga groups`: write nets grouped by the FPGAs they connect.

use std::io::Write;
use std::path::PathBuf;

use mfpga_design::{consolidate_groups, ConnectionGroup};
use mfpga_report::{
    write_consolidated_report, write_file, write_group_report, write_groups_json, GroupTotals,
    ReportError,
};

use crate::pipeline::{load_case, report_written, resolve_case};
use crate::{GlobalArgs, GroupsArgs, ReportFormat};

/// Runs the `mfpga groups` command.
///
/// Writes to `--output`, `-` for stdout, or the path from `mfpga.toml`.
pub fn run(args: &GroupsArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let case = resolve_case(&args.case, global)?;
    let loaded = load_case(&case, global)?;
    let groups = loaded.design.connection_groups();

    let emit = |out: &mut dyn Write| render(args, &groups, out);
    match args.output.as_deref() {
        Some("-") => emit(&mut std::io::stdout().lock())?,
        output => {
            let path = output.map(PathBuf::from).unwrap_or_else(|| {
                if args.consolidate {
                    case.consolidated_groups_path()
                } else {
                    case.net_groups_path()
                }
            });
            write_file(&path, emit)?;
            report_written(&path, global);
        }
    }
    Ok(0)
}

fn render(
    args: &GroupsArgs,
    groups: &[ConnectionGroup],
    out: &mut dyn Write,
) -> Result<(), ReportError> {
    match (args.format, args.consolidate) {
        (ReportFormat::Text, false) => write_group_report(groups, out)?,
        (ReportFormat::Text, true) => write_consolidated_report(&consolidate_groups(groups), out)?,
        (ReportFormat::Json, false) => write_groups_json(groups, GroupTotals::of(groups), out)?,
        (ReportFormat::Json, true) => {
            let merged = consolidate_groups(groups);
            let totals = GroupTotals {
                groups: merged.len(),
                nets: merged.iter().map(|g| g.nets.len()).sum(),
            };
            write_groups_json(&merged, totals, out)?
        }
    }
    Ok(())
}
