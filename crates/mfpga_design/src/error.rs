//! Errors that abort loading a case.

use mfpga_common::{NetId, NodeId};
use mfpga_source::ResolvedSpan;
use std::fmt;
use std::path::PathBuf;

/// The four input files of a case, in load order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum InputKind {
    /// FPGA I/O budgets.
    Info,
    /// Node-to-FPGA mapping.
    Mapping,
    /// Netlist.
    Net,
    /// Channel-capacity topology.
    Topo,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputKind::Info => "info",
            InputKind::Mapping => "mapping",
            InputKind::Net => "net",
            InputKind::Topo => "topology",
        })
    }
}

/// Which end of a net failed to resolve.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EndpointRole {
    /// The driving node.
    Source,
    /// A driven node.
    Sink,
}

impl fmt::Display for EndpointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EndpointRole::Source => "source",
            EndpointRole::Sink => "sink",
        })
    }
}

/// A failure that leaves no usable design.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// An input file is missing, unreadable, truncated or not text.
    #[error("failed to read {kind} file {}: {source}", .path.display())]
    Resource {
        /// Which input was being read.
        kind: InputKind,
        /// Path of the file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A stage ran before the structure it resolves against existed.
    #[error("cannot load the {stage} file: the {prerequisite} file produced no {missing}")]
    Sequence {
        /// The stage that was attempted.
        stage: InputKind,
        /// The stage that must populate the structure first.
        prerequisite: InputKind,
        /// What was found empty.
        missing: &'static str,
    },

    /// A net endpoint names a node the mapping file never placed.
    #[error("{location}: {role} {node} of {net} is not a known node")]
    UnknownNode {
        /// The net being built.
        net: NetId,
        /// The unresolved node.
        node: NodeId,
        /// Whether it was the source or a sink.
        role: EndpointRole,
        /// Where the id appears.
        location: ResolvedSpan,
    },

    /// The scanner could not consume anything at a token position.
    #[error("{location}: unexpected {found:?} in {kind} file, expected {expected}")]
    Syntax {
        /// The file being scanned.
        kind: InputKind,
        /// The offending character.
        found: char,
        /// What the grammar wanted at this point.
        expected: &'static str,
        /// Where the character appears.
        location: ResolvedSpan,
    },

    /// A table sized from the input is too large to allocate.
    #[error("cannot allocate {table} for {count} FPGAs while loading the {kind} file")]
    Capacity {
        /// The file whose contents set the size.
        kind: InputKind,
        /// The table being allocated.
        table: &'static str,
        /// Number of FPGAs the table was sized for.
        count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(line: u32, col: u32) -> ResolvedSpan {
        ResolvedSpan {
            file_path: PathBuf::from("design.net"),
            line,
            col,
        }
    }

    #[test]
    fn resource_display() {
        let err = LoadError::Resource {
            kind: InputKind::Info,
            path: PathBuf::from("case/design.info"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read info file case/design.info: not found"
        );
    }

    #[test]
    fn sequence_display() {
        let err = LoadError::Sequence {
            stage: InputKind::Topo,
            prerequisite: InputKind::Info,
            missing: "FPGAs",
        };
        assert_eq!(
            err.to_string(),
            "cannot load the topology file: the info file produced no FPGAs"
        );
    }

    #[test]
    fn unknown_node_display() {
        let err = LoadError::UnknownNode {
            net: NetId::new(3),
            node: NodeId::new(99),
            role: EndpointRole::Sink,
            location: loc(3, 9),
        };
        assert_eq!(
            err.to_string(),
            "design.net:3:9: sink g99 of net3 is not a known node"
        );
    }

    #[test]
    fn syntax_display() {
        let err = LoadError::Syntax {
            kind: InputKind::Net,
            found: 'x',
            expected: "a `g<id>` node",
            location: loc(1, 1),
        };
        assert_eq!(
            err.to_string(),
            "design.net:1:1: unexpected 'x' in net file, expected a `g<id>` node"
        );
    }

    #[test]
    fn capacity_display() {
        let err = LoadError::Capacity {
            kind: InputKind::Info,
            table: "the FPGA table",
            count: 4_000_000_000,
        };
        assert_eq!(
            err.to_string(),
            "cannot allocate the FPGA table for 4000000000 FPGAs while loading the info file"
        );
    }
}
