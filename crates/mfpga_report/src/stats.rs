//! A short human-readable summary used to eyeball a freshly loaded case.

use mfpga_design::Design;
use std::io::{self, Write};

/// How many placed nodes are listed by name.
const NODE_SAMPLE: usize = 5;

/// Prints FPGA budgets, a node sample, the first net and the topology.
pub fn write_stats(design: &Design, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "--- Design Statistics ---")?;

    writeln!(out, "Total FPGAs: {}", design.fpga_count())?;
    for fpga in design.defined_fpgas() {
        writeln!(
            out,
            "  FPGA {}: Max IO = {}, Mapped Nodes = {}",
            fpga.id,
            fpga.max_io,
            fpga.nodes.len()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Total Logical Nodes: {}", design.nodes().len())?;
    let placed = design
        .nodes()
        .values()
        .filter_map(|n| n.fpga.map(|f| (n.id, f)));
    for (node, fpga) in placed.take(NODE_SAMPLE) {
        writeln!(out, "  Node {node} is on FPGA {fpga}")?;
    }

    writeln!(out)?;
    writeln!(out, "Total Nets: {}", design.nets().len())?;
    if let Some(net) = design.nets().first() {
        writeln!(
            out,
            "  Example Net {}: Source {} -> {} sinks.",
            net.id.raw(),
            net.source,
            net.sinks.len()
        )?;
    }

    let topology = design.topology();
    writeln!(out)?;
    writeln!(out, "Topology Matrix ({0}x{0}):", topology.size())?;
    for (i, row) in topology.rows().enumerate() {
        let cells: Vec<String> = row.iter().map(u32::to_string).collect();
        writeln!(out, "  F{}: {}", i + 1, cells.join(", "))?;
    }

    writeln!(out, "-------------------------")
}
