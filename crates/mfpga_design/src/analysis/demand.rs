//! Inter-FPGA demand: how many net sinks cross each pair of FPGAs.

use crate::model::{Design, SquareMatrix};

impl Design {
    /// Counts, for every FPGA pair, how many net sinks cross between them.
    ///
    /// Each crossing from a source on FPGA `a` to a sink on FPGA `b` adds
    /// one to both `[a][b]` and `[b][a]`, so the result is symmetric and
    /// every crossing is counted twice overall. Nets whose source is
    /// unplaced and sinks that are unplaced do not count.
    pub fn logical_demand(&self) -> SquareMatrix {
        let mut demand = SquareMatrix::zeros(self.fpga_count());
        for net in &self.nets {
            let Some(src) = self.node_fpga(net.source) else {
                continue;
            };
            for &sink in &net.sinks {
                match self.node_fpga(sink) {
                    Some(dst) if dst != src => {
                        demand.increment(src.index(), dst.index());
                        demand.increment(dst.index(), src.index());
                    }
                    _ => {}
                }
            }
        }
        demand
    }
}
