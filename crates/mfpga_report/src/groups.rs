//! Text and JSON reports of nets grouped by connection pattern.
//!
//! The text layouts are line-oriented so downstream scripts can match each
//! `Group [k]:` line with a single regular expression.

use crate::error::ReportError;
use mfpga_common::{FpgaId, NetId};
use mfpga_design::{ConnectionGroup, ConsolidatedGroup};
use serde::Serialize;
use std::io::{self, Write};

/// Counts printed in a report's `# Statistics:` footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupTotals {
    /// Number of groups.
    pub groups: usize,
    /// Nets across all groups.
    pub nets: usize,
}

impl GroupTotals {
    /// Totals over connection groups.
    pub fn of(groups: &[ConnectionGroup]) -> Self {
        Self {
            groups: groups.len(),
            nets: groups.iter().map(|g| g.nets.len()).sum(),
        }
    }
}

fn write_nets(out: &mut dyn Write, nets: &[NetId]) -> io::Result<()> {
    out.write_all(b"[")?;
    for (i, net) in nets.iter().enumerate() {
        if i > 0 {
            out.write_all(b", ")?;
        }
        write!(out, "{net}")?;
    }
    out.write_all(b"]")
}

/// Writes one `Group [k]: F<src> -> F<a> (n),... -> [net...]` line per group.
pub fn write_group_report(groups: &[ConnectionGroup], out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "# Net Groups by FPGA Connection Pattern")?;
    writeln!(
        out,
        "# Format: Group [group_number]: Source_FPGA -> Sink_FPGA1(count),Sink_FPGA2(count) -> [net_id1, net_id2, ...]"
    )?;
    writeln!(out)?;

    for (k, group) in groups.iter().enumerate() {
        let sinks = if group.pattern.sinks.is_empty() {
            "unknown".to_string()
        } else {
            group
                .pattern
                .sinks
                .iter()
                .map(|(fpga, count)| format!("{fpga} ({count})"))
                .collect::<Vec<_>>()
                .join(",")
        };
        write!(out, "Group [{}]: {} -> {sinks} -> ", k + 1, group.pattern.source)?;
        write_nets(out, &group.nets)?;
        writeln!(out)?;
    }

    let totals = GroupTotals::of(groups);
    writeln!(out)?;
    writeln!(out, "# Statistics:")?;
    writeln!(out, "# Total net groups: {}", totals.groups)?;
    writeln!(out, "# Total nets: {}", totals.nets)
}

/// Writes merged groups with their sink sets, followed by merge statistics.
pub fn write_consolidated_report(
    groups: &[ConsolidatedGroup],
    out: &mut dyn Write,
) -> io::Result<()> {
    writeln!(out, "# Consolidated Net Groups by FPGA Connection Pattern")?;
    writeln!(
        out,
        "# Format: Consolidated_Group: Source_FPGA -> Sink_FPGA1,Sink_FPGA2 -> [net_id1, net_id2, ...]"
    )?;
    writeln!(out)?;

    for (k, group) in groups.iter().enumerate() {
        let sinks = if group.sinks.is_empty() {
            "unknown".to_string()
        } else {
            group
                .sinks
                .iter()
                .map(FpgaId::to_string)
                .collect::<Vec<_>>()
                .join(",")
        };
        write!(out, "Consolidated_Group [{}]: {} -> {sinks} -> ", k + 1, group.source)?;
        write_nets(out, &group.nets)?;
        writeln!(out)?;
    }

    writeln!(out)?;
    writeln!(out, "# Statistics:")?;
    writeln!(
        out,
        "# Original groups: {}",
        groups.iter().map(|g| g.merged).sum::<usize>()
    )?;
    writeln!(out, "# Consolidated groups: {}", groups.len())?;
    writeln!(
        out,
        "# Total nets: {}",
        groups.iter().map(|g| g.nets.len()).sum::<usize>()
    )
}

#[derive(Serialize)]
struct GroupsDocument<'a, G> {
    totals: GroupTotals,
    groups: &'a [G],
}

/// Writes groups and their totals as pretty-printed JSON.
pub fn write_groups_json<G: Serialize>(
    groups: &[G],
    totals: GroupTotals,
    out: &mut dyn Write,
) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut *out, &GroupsDocument { totals, groups })?;
    writeln!(out)?;
    Ok(())
}
