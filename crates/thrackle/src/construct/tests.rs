//! Constructor counts on small families, unwinding, and random trees.

use proptest::prelude::*;

use super::*;
use crate::canon::Registry;
use crate::check::check_thrackle;
use crate::error::ThrackleError;
use crate::graph::rand::{random_tree, ReplayToken};
use crate::graph::{schedule_edges, special};

fn checked() -> SearchCfg {
    SearchCfg {
        limit: None,
        check_invariants: true,
    }
}

/// Run the constructor, validate every drawing and return how many there were.
fn count_valid(graph: &Graph) -> u64 {
    let schedule = schedule_edges(graph).unwrap();
    let mut constructor = Constructor::new(&schedule, checked());
    let mut sink = |rs: &RotationSystem| -> crate::error::Result<()> {
        let report = check_thrackle(rs).unwrap();
        assert_eq!(report.crossings, schedule.crossing_count);
        assert_eq!(report.edges.len(), graph.edge_count());
        Ok(())
    };
    let stats = constructor.run(&mut sink).unwrap();
    assert_eq!(constructor.rotation_system().half_edge_count(), 0);
    assert_eq!(constructor.rotation_system().crossing_count(), 0);
    stats.embeddings
}

#[test]
fn single_edge_has_one_embedding() {
    assert_eq!(count_valid(&special::path(2)), 1);
}

#[test]
fn triangle_has_one_embedding() {
    assert_eq!(count_valid(&special::cycle(3)), 1);
}

#[test]
fn path_of_four_has_two_mirror_embeddings() {
    assert_eq!(count_valid(&special::path(4)), 2);
}

#[test]
fn star_embeddings_are_the_cyclic_orders() {
    // (leaves - 1)! rotations at the centre.
    assert_eq!(count_valid(&special::star(4)), 6);
}

#[test]
fn four_cycle_is_not_thrackleable() {
    assert_eq!(count_valid(&special::cycle(4)), 0);
}

#[test]
fn k4_is_not_thrackleable() {
    assert_eq!(count_valid(&special::complete(4)), 0);
}

/// Distinct drawings up to relabeling, root and reflection.
fn count_unique(graph: &Graph) -> usize {
    let mut registry = Registry::new();
    for rs in collect_thrackles(graph, checked()).unwrap() {
        registry.classify(&rs).unwrap();
    }
    registry.unique()
}

#[test]
fn five_cycle_has_two_embeddings_of_one_drawing() {
    assert_eq!(count_valid(&special::cycle(5)), 2);
    assert_eq!(count_unique(&special::cycle(5)), 1);
}

#[test]
fn six_cycle_has_sixteen_embeddings_of_three_drawings() {
    assert_eq!(count_valid(&special::cycle(6)), 16);
    assert_eq!(count_unique(&special::cycle(6)), 3);
}

#[test]
fn counts_match_the_convenience_helpers() {
    let g = special::path(5);
    let all = collect_thrackles(&g, SearchCfg::default()).unwrap();
    assert_eq!(all.len() as u64, count_thrackles(&g).unwrap());
    assert!(!all.is_empty());
}

#[test]
fn limit_stops_the_search() {
    let g = special::star(4);
    let cfg = SearchCfg {
        limit: Some(2),
        check_invariants: true,
    };
    let mut seen = 0u64;
    let mut sink = |_: &RotationSystem| -> crate::error::Result<()> {
        seen += 1;
        Ok(())
    };
    let stats = enumerate_thrackles(&g, cfg, &mut sink).unwrap();
    assert_eq!(stats.embeddings, 2);
    assert_eq!(seen, 2);
}

#[test]
fn zero_limit_emits_nothing() {
    let cfg = SearchCfg {
        limit: Some(0),
        check_invariants: true,
    };
    for g in [special::path(2), special::path(3), special::cycle(3)] {
        let mut seen = 0u64;
        let mut sink = |_: &RotationSystem| -> crate::error::Result<()> {
            seen += 1;
            Ok(())
        };
        let stats = enumerate_thrackles(&g, cfg, &mut sink).unwrap();
        assert_eq!(stats.embeddings, 0);
        assert_eq!(seen, 0);
    }
}

#[test]
fn sink_errors_unwind_the_rotation_system() {
    let schedule = schedule_edges(&special::path(4)).unwrap();
    let mut constructor = Constructor::new(&schedule, checked());
    let mut failing = |_: &RotationSystem| -> crate::error::Result<()> {
        Err(ThrackleError::malformed("sink closed"))
    };
    let err = constructor.run(&mut failing).unwrap_err();
    assert!(err.to_string().contains("sink closed"));
    assert_eq!(constructor.rotation_system().half_edge_count(), 0);
    assert_eq!(constructor.rotation_system().crossing_count(), 0);
}

#[test]
fn dead_ends_are_counted_not_raised() {
    let mut ignore = |_: &RotationSystem| -> crate::error::Result<()> { Ok(()) };
    let stats = enumerate_thrackles(&special::cycle(4), checked(), &mut ignore).unwrap();
    assert_eq!(stats.embeddings, 0);
    assert!(stats.dead_ends > 0);
    assert_eq!(stats.crossings, 2);
}

#[test]
fn disconnected_input_fails_before_search() {
    let g = Graph::from_edges(4, &[(0, 1), (2, 3)]).unwrap();
    assert!(matches!(count_thrackles(&g), Err(ThrackleError::Disconnected)));
}

#[test]
fn edge_set_operations() {
    let s = EdgeSet::below(5).minus(EdgeSet::single(1).with(3));
    assert_eq!(s.len(), 3);
    assert!(s.contains(0) && s.contains(2) && s.contains(4));
    assert!(!s.contains(1) && !s.contains(63));
    assert!(s.without(0).without(2).without(4).is_empty());
    assert_eq!(EdgeSet::below(64).len(), 64);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn random_trees_are_thrackleable(n in 2usize..7, seed in any::<u64>()) {
        let tree = random_tree(n, ReplayToken { seed, index: 0 });
        prop_assert!(count_valid(&tree) >= 1);
    }
}
