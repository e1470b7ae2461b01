//! The FPGA graph exported for the plotting scripts.

use crate::error::ReportError;
use mfpga_design::Design;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// One FPGA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VizNode {
    /// FPGA id.
    pub id: u32,
}

/// Channel capacity between two FPGAs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalLink {
    /// Lower FPGA id.
    pub source: u32,
    /// Higher FPGA id.
    pub target: u32,
    /// Topology cell value.
    pub channels: u32,
}

/// Net crossings between two FPGAs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalLink {
    /// Lower FPGA id.
    pub source: u32,
    /// Higher FPGA id.
    pub target: u32,
    /// Crossings, undoing the double count of the demand matrix.
    pub demand: u32,
}

/// Physical and logical FPGA-to-FPGA edges.
///
/// Each unordered pair appears at most once (`source < target`), and only
/// when its value is positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visualization {
    /// Every FPGA slot, `1..=N`.
    pub nodes: Vec<VizNode>,
    /// Edges with channel capacity.
    pub physical_links: Vec<PhysicalLink>,
    /// Edges with logical demand.
    pub logical_links: Vec<LogicalLink>,
}

impl Visualization {
    /// Builds the graph. Fails if the design has no nets or no topology.
    pub fn from_design(design: &Design) -> Result<Self, ReportError> {
        if design.nets().is_empty() {
            return Err(ReportError::Incomplete { missing: "nets" });
        }
        let topology = design.topology();
        if topology.size() == 0 {
            return Err(ReportError::Incomplete {
                missing: "topology",
            });
        }

        let n = design.fpga_count();
        let demand = design.logical_demand();
        let id = |i: usize| i as u32 + 1;
        let pairs = || (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)));

        Ok(Self {
            nodes: (0..n).map(|i| VizNode { id: id(i) }).collect(),
            physical_links: pairs()
                .filter(|&(i, j)| topology.get(i, j) > 0)
                .map(|(i, j)| PhysicalLink {
                    source: id(i),
                    target: id(j),
                    channels: topology.get(i, j),
                })
                .collect(),
            logical_links: pairs()
                .filter(|&(i, j)| demand.get(i, j) > 0)
                .map(|(i, j)| LogicalLink {
                    source: id(i),
                    target: id(j),
                    demand: demand.get(i, j) / 2,
                })
                .collect(),
        })
    }

    /// Writes pretty-printed JSON followed by a newline.
    pub fn write_json(&self, out: &mut dyn Write) -> Result<(), ReportError> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}
