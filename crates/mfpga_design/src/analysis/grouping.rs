//! Grouping nets by the set of FPGAs they connect.

use crate::model::Design;
use mfpga_common::{FpgaId, NetId};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// The FPGAs a net reaches: its source FPGA and how many sinks land on
/// each other FPGA.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ConnectionPattern {
    /// FPGA of the source node.
    pub source: FpgaId,
    /// Sink count per FPGA, excluding the source FPGA.
    pub sinks: BTreeMap<FpgaId, u32>,
}

/// Renders the canonical key, e.g. `1:2(1),3(2)`.
impl fmt::Display for ConnectionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.source.raw())?;
        for (i, (fpga, count)) in self.sinks.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}({count})", fpga.raw())?;
        }
        Ok(())
    }
}

/// Nets that share one [`ConnectionPattern`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionGroup {
    /// The canonical key of [`pattern`](Self::pattern).
    pub key: String,
    /// What every net in the group reaches.
    pub pattern: ConnectionPattern,
    /// Member nets in file order.
    pub nets: Vec<NetId>,
}

impl Design {
    /// The pattern of one net, or `None` if its source is not placed.
    pub fn connection_pattern(&self, net: NetId) -> Option<ConnectionPattern> {
        let net = self.net(net)?;
        let source = self.node_fpga(net.source)?;
        let mut sinks = BTreeMap::new();
        for fpga in net.sinks.iter().filter_map(|&s| self.node_fpga(s)) {
            if fpga != source {
                *sinks.entry(fpga).or_insert(0) += 1;
            }
        }
        Some(ConnectionPattern { source, sinks })
    }

    /// Groups nets by [`ConnectionPattern`].
    ///
    /// Groups come out ordered by their key as a string, so `10:` sorts
    /// before `2:`. Nets whose source is unplaced belong to no group.
    pub fn connection_groups(&self) -> Vec<ConnectionGroup> {
        let mut groups: BTreeMap<String, ConnectionGroup> = BTreeMap::new();
        for net in &self.nets {
            let Some(pattern) = self.connection_pattern(net.id) else {
                continue;
            };
            let key = pattern.to_string();
            groups
                .entry(key.clone())
                .or_insert_with(|| ConnectionGroup {
                    key,
                    pattern,
                    nets: Vec::new(),
                })
                .nets
                .push(net.id);
        }
        groups.into_values().collect()
    }
}

/// Groups merged by source FPGA and the *set* of sink FPGAs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsolidatedGroup {
    /// FPGA of the source nodes.
    pub source: FpgaId,
    /// Sink FPGAs in ascending order; empty when no sink leaves the source.
    pub sinks: Vec<FpgaId>,
    /// Nets of all merged groups, in group order.
    pub nets: Vec<NetId>,
    /// How many connection groups were merged into this one.
    pub merged: usize,
}

/// Merges groups that differ only in per-FPGA sink counts.
///
/// The result keeps the order in which each (source, sink set) first
/// appears in `groups`.
pub fn consolidate_groups(groups: &[ConnectionGroup]) -> Vec<ConsolidatedGroup> {
    let mut out: Vec<ConsolidatedGroup> = Vec::new();
    let mut index: BTreeMap<(FpgaId, Vec<FpgaId>), usize> = BTreeMap::new();
    for group in groups {
        let sinks: Vec<FpgaId> = group.pattern.sinks.keys().copied().collect();
        let slot = *index
            .entry((group.pattern.source, sinks.clone()))
            .or_insert_with(|| {
                out.push(ConsolidatedGroup {
                    source: group.pattern.source,
                    sinks,
                    nets: Vec::new(),
                    merged: 0,
                });
                out.len() - 1
            });
        out[slot].nets.extend_from_slice(&group.nets);
        out[slot].merged += 1;
    }
    out
}
