//! Structural properties that must hold for any case that loads.

use std::collections::BTreeSet;

use mfpga_common::{FpgaId, NodeId};
use mfpga_conformance::{load_ok, CaseText, RING, SCENARIO_A, SCENARIO_B};

const IRREGULAR: CaseText<'static> = CaseText {
    info: "F3 9\nF1 2\nF1 7\nF0 5\n",
    mapping: "F1: g1 g2 g2\nF3: g3 g1\nF2: g4\nF8: g5\nF3: g6",
    net: "g1 2 g2 g3\r\ng3 1\r\ng6 1 g1 g2 g3 g6\r\ng2 1 g3 g3",
    topo: "F3: 1,2,3\nF1: 0,5,1\nF3: 3,2,0\nF4: 1,1,1\n",
};

const CASES: [CaseText<'static>; 4] = [SCENARIO_A, SCENARIO_B, RING, IRREGULAR];

#[test]
fn fpga_table_is_sized_to_max_id_with_last_pair_winning() {
    let d = load_ok(&IRREGULAR).design;
    assert_eq!(d.fpga_count(), 3);
    assert_eq!(d.fpga(FpgaId::new(1)).map(|f| f.max_io), Some(7));
    assert!(d.fpga(FpgaId::new(2)).is_none());
    assert_eq!(d.fpga(FpgaId::new(3)).map(|f| f.max_io), Some(9));
    for (i, slot) in d.fpgas().iter().enumerate() {
        if let Some(fpga) = slot {
            assert_eq!(fpga.id.index(), i);
        }
    }
}

#[test]
fn node_lands_on_fpga_of_last_occurrence() {
    let d = load_ok(&IRREGULAR).design;
    assert_eq!(d.node_fpga(NodeId::new(1)), Some(FpgaId::new(3)));
    assert_eq!(d.node_fpga(NodeId::new(2)), Some(FpgaId::new(1)));
    assert_eq!(d.node_fpga(NodeId::new(6)), Some(FpgaId::new(3)));
    // Lines for F2 (undefined) and F8 (out of range) create nothing.
    assert!(d.node(NodeId::new(4)).is_none());
    assert!(d.node(NodeId::new(5)).is_none());
    assert_eq!(d.fpga(FpgaId::new(1)).map(|f| f.nodes.len()), Some(3));
}

#[test]
fn net_ids_are_dense_in_file_order() {
    for case in &CASES {
        let d = load_ok(case).design;
        let lines = case.net.lines().filter(|l| !l.trim().is_empty()).count();
        assert_eq!(d.nets().len(), lines);
        for (i, net) in d.nets().iter().enumerate() {
            assert_eq!(net.id.raw() as usize, i + 1);
        }
    }
}

#[test]
fn every_endpoint_is_a_known_node() {
    for case in &CASES {
        let d = load_ok(case).design;
        for net in d.nets() {
            assert!(d.node(net.source).is_some());
            assert!(net.sinks.iter().all(|&s| d.node(s).is_some()));
        }
    }
}

#[test]
fn topology_is_square_and_sized_to_fpga_table() {
    for case in &CASES {
        let d = load_ok(case).design;
        assert_eq!(d.topology().size(), d.fpga_count());
        assert_eq!(d.topology().rows().count(), d.fpga_count());
    }
}

#[test]
fn duplicate_topology_row_last_wins() {
    let d = load_ok(&IRREGULAR).design;
    assert_eq!(d.topology().row(2), &[3, 2, 0]);
    assert_eq!(d.topology().row(0), &[0, 5, 1]);
    assert_eq!(d.topology().row(1), &[0, 0, 0]);
}

#[test]
fn demand_is_symmetric_with_empty_diagonal() {
    for case in &CASES {
        let demand = load_ok(case).design.logical_demand();
        assert!(demand.is_symmetric());
        for i in 0..demand.size() {
            assert_eq!(demand.get(i, i), 0);
        }
    }
}

#[test]
fn demand_total_is_twice_the_crossings() {
    for case in &CASES {
        let d = load_ok(case).design;
        let crossings: u32 = d
            .nets()
            .iter()
            .filter_map(|n| d.node_fpga(n.source).map(|src| (src, n)))
            .map(|(src, n)| {
                n.sinks
                    .iter()
                    .filter_map(|&s| d.node_fpga(s))
                    .filter(|&f| f != src)
                    .count() as u32
            })
            .sum();
        let total: u32 = d.logical_demand().rows().flatten().sum();
        assert_eq!(total, 2 * crossings);
    }
}

#[test]
fn groups_partition_the_placed_nets() {
    for case in &CASES {
        let d = load_ok(case).design;
        let groups = d.connection_groups();
        let mut seen = BTreeSet::new();
        for group in &groups {
            assert!(!group.nets.is_empty());
            for &net in &group.nets {
                assert!(seen.insert(net), "{net} is in two groups");
                assert_eq!(d.connection_pattern(net).as_ref(), Some(&group.pattern));
            }
            let mut sorted = group.nets.clone();
            sorted.sort();
            assert_eq!(sorted, group.nets, "nets keep file order");
        }
        assert_eq!(seen.len(), d.nets().len());
    }
}

#[test]
fn group_keys_are_unique_and_string_ordered() {
    for case in &CASES {
        let groups = load_ok(case).design.connection_groups();
        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(keys, sorted);
        for group in &groups {
            assert_eq!(group.key, group.pattern.to_string());
        }
    }
}

#[test]
fn irregular_groups() {
    let d = load_ok(&IRREGULAR).design;
    let keys: Vec<String> = d.connection_groups().into_iter().map(|g| g.key).collect();
    assert_eq!(keys, vec!["1:3(2)", "3:", "3:1(1)"]);
}
