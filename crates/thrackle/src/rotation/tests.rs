//! Arena symmetry, degree invariant and face closure on small hand-built systems.

use super::*;

/// Path 0-1-2 (edges 0 and 1) with room for edge 2 = 2-3 and one crossing.
fn path_012() -> (RotationSystem, HalfEdgeId, HalfEdgeId) {
    let mut rs = RotationSystem::with_capacity(Capacity::for_thrackle(4, 3, 1));
    let h01 = rs.seed_edge(0, 1, 0);
    let h10 = rs[h01].inverse;
    let h12 = rs.connect_to_vertex(h10, 2, Attach::Isolated, 1);
    (rs, h01, h12)
}

fn face_count(rs: &RotationSystem) -> usize {
    let mut seen = vec![false; rs.half_edge_count()];
    let mut faces = 0;
    for i in 0..rs.half_edge_count() {
        if seen[i] {
            continue;
        }
        faces += 1;
        for h in rs.trace_face(HalfEdgeId(i)) {
            seen[h.0] = true;
        }
    }
    faces
}

#[test]
fn seed_and_connect_build_a_path() {
    let (rs, h01, h12) = path_012();
    rs.check_invariants().unwrap();
    assert_eq!(rs.degree(0), 1);
    assert_eq!(rs.degree(1), 2);
    assert_eq!(rs.degree(2), 1);
    assert_eq!(rs[h01].end, 1);
    assert_eq!(rs[h12].start, 1);
    // A tree has a single face whose boundary uses every half-edge.
    assert_eq!(rs.trace_face(h01).count(), 4);
    assert_eq!(face_count(&rs), 1);
}

#[test]
fn connect_then_disconnect_restores_state() {
    let (mut rs, _, h12) = path_012();
    let before = rs.clone();
    let h21 = rs[h12].inverse;
    let tip = rs.connect_to_vertex(h21, 3, Attach::Isolated, 2);
    assert_eq!(rs.degree(3), 1);
    rs.check_invariants().unwrap();
    rs.disconnect_vertex(tip);
    assert_eq!(rs, before);
}

#[test]
fn crossing_has_degree_four_and_undoes_exactly() {
    let (mut rs, h01, h12) = path_012();
    let before = rs.clone();
    let h21 = rs[h12].inverse;
    let tip = rs.connect_to_vertex(h21, 3, Attach::Isolated, 2);
    let after_connect = rs.clone();

    let crossing = rs.insert_crossing(tip, h01);
    rs.check_invariants().unwrap();
    assert_eq!(crossing.vertex, 4);
    assert_eq!(rs.crossing_count(), 1);
    assert_eq!(rs.degree(crossing.vertex), 4);
    assert_eq!(rs.kind(crossing.vertex), VertexKind::Crossing);
    assert_eq!(rs[crossing.continuation].end, 3);
    assert_eq!(rs[tip].end, crossing.vertex);
    assert_eq!(rs[h01].end, crossing.vertex);
    // Opposite spokes belong to the same original edge.
    let spokes: Vec<_> = rs.rotation(crossing.vertex).collect();
    assert_eq!(rs[spokes[0]].edge, rs[spokes[2]].edge);
    assert_eq!(rs[spokes[1]].edge, rs[spokes[3]].edge);
    assert_ne!(rs[spokes[0]].edge, rs[spokes[1]].edge);
    // V - E + F = 2 with five vertices and five physical edges.
    assert_eq!(face_count(&rs), 2);

    rs.remove_crossing(crossing.vertex);
    assert_eq!(rs, after_connect);
    rs.disconnect_vertex(tip);
    assert_eq!(rs, before);
}

#[test]
fn nested_crossings_unwind_in_lifo_order() {
    // Star at 0 (edges 0-1, 0-2) and a path 3-4 woven across both.
    let mut rs = RotationSystem::with_capacity(Capacity::for_thrackle(5, 3, 2));
    let h01 = rs.seed_edge(0, 1, 0);
    let h02 = rs.connect_to_vertex(h01, 2, Attach::Isolated, 1);
    let before = rs.clone();
    let h34 = rs.seed_edge(3, 4, 2);
    let first = rs.insert_crossing(h34, h01);
    let second = rs.insert_crossing(first.continuation, h02);
    rs.check_invariants().unwrap();
    assert_eq!(rs.vertex_count(), 7);
    assert_eq!(rs[second.continuation].end, 4);
    rs.remove_crossing(second.vertex);
    rs.remove_crossing(first.vertex);
    rs.disconnect_vertex(h34);
    assert_eq!(rs, before);
}

#[test]
fn landing_moves_the_loose_end_and_lifts_back() {
    // Triangle 0-1-2: edges 0-1 and 0-2 embedded, edge 2-1 lands at 1.
    let mut rs = RotationSystem::with_capacity(Capacity::for_thrackle(3, 3, 0));
    let h01 = rs.seed_edge(0, 1, 0);
    let h02 = rs.connect_to_vertex(h01, 2, Attach::Isolated, 1);
    let h20 = rs[h02].inverse;
    let scratch = rs.scratch_vertex();
    let tip = rs.connect_to_vertex(h20, scratch, Attach::Isolated, 2);
    let before = rs.clone();

    let anchor = rs
        .trace_face(rs[tip].inverse)
        .find(|&x| rs[x].end == 1)
        .map(|x| rs[x].inverse)
        .unwrap();
    rs.land_loose_end(tip, 1, anchor);
    assert_eq!(rs.degree(scratch), 0);
    assert_eq!(rs.degree(1), 2);
    assert_eq!(rs[tip].end, 1);
    rs.check_invariants().unwrap();
    assert_eq!(face_count(&rs), 2);

    rs.lift_loose_end(tip, scratch);
    assert_eq!(rs, before);
}

#[test]
fn direct_connection_into_existing_rotation() {
    let mut rs = RotationSystem::with_capacity(Capacity::for_thrackle(3, 3, 0));
    let h01 = rs.seed_edge(0, 1, 0);
    let h02 = rs.connect_to_vertex(h01, 2, Attach::Isolated, 1);
    let before = rs.clone();
    let h10 = rs[h01].inverse;
    let h20 = rs[h02].inverse;
    let e = rs.connect_to_vertex(h20, 1, Attach::After(h10), 2);
    rs.check_invariants().unwrap();
    assert_eq!(rs.degree(1), 2);
    assert_eq!(face_count(&rs), 2);
    rs.disconnect_vertex(e);
    assert_eq!(rs, before);
}

#[test]
fn mirror_rotation_reverses_order() {
    let rs = RotationSystem::from_rotations(4, &[vec![1, 2, 3], vec![0], vec![0], vec![0]]).unwrap();
    let h = rs.first_half_edge(0).unwrap();
    let fwd: Vec<_> = rs.rotation_from(h, Direction::Forward).map(|x| rs[x].end).collect();
    let mir: Vec<_> = rs.rotation_from(h, Direction::Mirror).map(|x| rs[x].end).collect();
    assert_eq!(fwd, vec![1, 2, 3]);
    assert_eq!(mir, vec![1, 3, 2]);
}

#[test]
fn rotation_lists_round_trip() {
    let lists = vec![vec![1, 2], vec![0, 2], vec![1, 0]];
    let rs = RotationSystem::from_rotations(3, &lists).unwrap();
    rs.check_invariants().unwrap();
    assert_eq!(rs.to_rotations(), lists);
    assert_eq!(face_count(&rs), 2);
}

#[test]
fn asymmetric_rotation_lists_are_rejected() {
    let err = RotationSystem::from_rotations(3, &[vec![1, 2], vec![0], vec![1]]).unwrap_err();
    assert!(err.to_string().contains("no inverse"));
    assert!(RotationSystem::from_rotations(2, &[vec![0], vec![]]).is_err());
    assert!(RotationSystem::from_rotations(2, &[vec![5], vec![0]]).is_err());
}

#[test]
#[should_panic(expected = "out of order")]
fn disconnect_below_the_top_panics() {
    let (mut rs, h01, _) = path_012();
    rs.disconnect_vertex(h01);
}
