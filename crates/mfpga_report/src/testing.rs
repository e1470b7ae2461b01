//! Small loaded designs shared by the report tests.

use mfpga_design::{Design, DesignBuilder};
use mfpga_diagnostics::DiagnosticSink;
use mfpga_source::SourceDb;

pub(crate) fn design(info: &str, mapping: &str, net: &str, topo: &str) -> Design {
    let mut db = SourceDb::new();
    let ids = [
        db.add_source("design.info", info),
        db.add_source("design.fpga.out", mapping),
        db.add_source("design.net", net),
        db.add_source("design.topo", topo),
    ];
    let sink = DiagnosticSink::new();
    DesignBuilder::new(&sink)
        .load_info(db.get_file(ids[0]))
        .and_then(|b| b.load_mapping(db.get_file(ids[1])))
        .and_then(|b| b.load_nets(db.get_file(ids[2])))
        .and_then(|b| b.load_topo(db.get_file(ids[3])))
        .unwrap()
}

/// Three FPGAs in a line, nets crossing F1-F2 and F2-F3.
pub(crate) fn chain() -> Design {
    design(
        "F1 10\nF2 20\nF3 30\n",
        "F1: g1 g2\nF2: g3 g4\nF3: g5\n",
        "g1 1 g2 g3\ng3 1 g5\ng4 1 g1 g5\ng2 1 g3\n",
        "F1: 0,2,0\nF2: 2,0,5\nF3: 0,5,0\n",
    )
}
