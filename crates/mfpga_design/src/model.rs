//! The cross-referenced in-memory model of one partition case.
//!
//! The [`Design`] owns every entity. FPGAs live in a dense table where slot
//! `i` holds `F<i+1>` (or `None` if the info file never defined that id),
//! nodes live in a map keyed by [`NodeId`], and all links between them are
//! plain ids resolved through the design.

use mfpga_common::{FpgaId, NetId, NodeId};
use serde::Serialize;
use std::collections::BTreeMap;

/// A physical device with an I/O budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fpga {
    /// Id from the info file.
    pub id: FpgaId,
    /// Maximum number of I/O channels.
    pub max_io: u32,
    /// Nodes placed on this FPGA, in mapping-file order.
    ///
    /// Not deduplicated: a node named twice under the same FPGA appears
    /// twice, and a node later moved to another FPGA is still listed here.
    pub nodes: Vec<NodeId>,
}

impl Fpga {
    /// Creates an FPGA with no nodes.
    pub fn new(id: FpgaId, max_io: u32) -> Self {
        Self {
            id,
            max_io,
            nodes: Vec::new(),
        }
    }
}

/// A logical gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Id from the mapping file.
    pub id: NodeId,
    /// The FPGA of the last mapping line that named this node.
    pub fpga: Option<FpgaId>,
}

/// A hyperedge from one source node to any number of sinks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Net {
    /// Position in the net file, starting at 1.
    pub id: NetId,
    /// Driving node.
    pub source: NodeId,
    /// Driven nodes, in file order.
    pub sinks: Vec<NodeId>,
    /// Weight column of the net file.
    pub weight: u32,
}

/// A dense `size × size` matrix of counts, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SquareMatrix {
    size: usize,
    cells: Vec<u32>,
}

impl SquareMatrix {
    /// Creates a matrix filled with zeros.
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Creates a zero matrix, or `None` if `size × size` cells cannot be
    /// allocated.
    pub fn try_zeros(size: usize) -> Option<Self> {
        let len = size.checked_mul(size)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).ok()?;
        cells.resize(len, 0);
        Some(Self { size, cells })
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= size`.
    pub fn get(&self, i: usize, j: usize) -> u32 {
        assert!(j < self.size, "column {j} out of range for {0}x{0}", self.size);
        self.cells[i * self.size + j]
    }

    /// Overwrites the cell at row `i`, column `j`.
    pub fn set(&mut self, i: usize, j: usize, value: u32) {
        assert!(j < self.size, "column {j} out of range for {0}x{0}", self.size);
        self.cells[i * self.size + j] = value;
    }

    pub(crate) fn increment(&mut self, i: usize, j: usize) {
        let cell = &mut self.cells[i * self.size + j];
        *cell = cell.saturating_add(1);
    }

    /// Returns row `i` as a slice.
    pub fn row(&self, i: usize) -> &[u32] {
        &self.cells[i * self.size..(i + 1) * self.size]
    }

    pub(crate) fn row_mut(&mut self, i: usize) -> &mut [u32] {
        &mut self.cells[i * self.size..(i + 1) * self.size]
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        // chunks_exact panics on 0, and a 0×0 matrix has no rows anyway.
        self.cells.chunks_exact(self.size.max(1))
    }

    /// Returns `true` if the matrix is symmetric.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (i + 1..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }
}

/// A fully loaded partition case.
///
/// Built only through [`DesignBuilder`](crate::DesignBuilder); once
/// returned it is read-only.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Design {
    pub(crate) fpgas: Vec<Option<Fpga>>,
    pub(crate) nodes: BTreeMap<NodeId, Node>,
    pub(crate) nets: Vec<Net>,
    pub(crate) topology: SquareMatrix,
}

impl Design {
    /// The dense FPGA table: slot `i` is `F<i+1>`, `None` where undefined.
    pub fn fpgas(&self) -> &[Option<Fpga>] {
        &self.fpgas
    }

    /// Iterates over the FPGAs the info file actually defined.
    pub fn defined_fpgas(&self) -> impl Iterator<Item = &Fpga> {
        self.fpgas.iter().flatten()
    }

    /// Number of FPGA slots, i.e. the largest id in the info file.
    pub fn fpga_count(&self) -> usize {
        self.fpgas.len()
    }

    /// Looks up an FPGA by id.
    pub fn fpga(&self, id: FpgaId) -> Option<&Fpga> {
        self.fpgas.get(id.index()).and_then(Option::as_ref)
    }

    /// All nodes, ordered by id.
    pub fn nodes(&self) -> &BTreeMap<NodeId, Node> {
        &self.nodes
    }

    /// Looks up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// The FPGA a node is placed on, if the node exists and was mapped.
    pub fn node_fpga(&self, id: NodeId) -> Option<FpgaId> {
        self.nodes.get(&id).and_then(|n| n.fpga)
    }

    /// All nets in file order.
    pub fn nets(&self) -> &[Net] {
        &self.nets
    }

    /// Looks up a net by its sequential id.
    pub fn net(&self, id: NetId) -> Option<&Net> {
        (id.raw() as usize)
            .checked_sub(1)
            .and_then(|i| self.nets.get(i))
    }

    /// Channel capacities between FPGA pairs, indexed by slot.
    pub fn topology(&self) -> &SquareMatrix {
        &self.topology
    }

    pub(crate) fn fpga_mut(&mut self, id: FpgaId) -> Option<&mut Fpga> {
        self.fpgas.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Places `node` on `fpga`, creating the node on first sight.
    ///
    /// The caller guarantees `fpga` is defined.
    pub(crate) fn assign(&mut self, node: NodeId, fpga: FpgaId) {
        self.nodes
            .entry(node)
            .and_modify(|n| n.fpga = Some(fpga))
            .or_insert(Node {
                id: node,
                fpga: Some(fpga),
            });
        if let Some(f) = self.fpga_mut(fpga) {
            f.nodes.push(node);
        }
    }
}
