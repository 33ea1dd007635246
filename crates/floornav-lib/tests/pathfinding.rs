use floornav_lib::{
    build_edge_graph, find_route_a_star, find_route_dijkstra, Edge, FloorPlan, Node, NodeKind,
};

fn node(id: &str, x: f64, y: f64) -> Node {
    Node {
        id: id.to_string(),
        x,
        y,
        kind: NodeKind::Waypoint,
        label: None,
        connections: Vec::new(),
    }
}

fn edge(id: &str, from: &str, to: &str, weight: f64) -> Edge {
    Edge {
        id: id.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        weight,
        bidirectional: None,
    }
}

/// Five nodes, five bidirectional edges of weight 200, two equal-cost optima
/// between n1 and n6.
fn office_plan() -> FloorPlan {
    FloorPlan {
        nodes: vec![
            node("n1", 100.0, 100.0),
            node("n2", 300.0, 100.0),
            node("n3", 500.0, 100.0),
            node("n5", 300.0, 300.0),
            node("n6", 500.0, 300.0),
        ],
        edges: vec![
            edge("e1", "n1", "n2", 200.0),
            edge("e2", "n2", "n3", 200.0),
            edge("e3", "n2", "n5", 200.0),
            edge("e4", "n3", "n6", 200.0),
            edge("e5", "n5", "n6", 200.0),
        ],
        ..FloorPlan::default()
    }
}

#[test]
fn dijkstra_finds_one_of_the_equal_cost_optima() {
    let plan = office_plan();
    let graph = build_edge_graph(&plan);

    let result = find_route_dijkstra(&graph, "n1", "n6").expect("route exists");
    assert_eq!(result.distance, 600.0);

    let via_n3 = vec!["n1", "n2", "n3", "n6"];
    let via_n5 = vec!["n1", "n2", "n5", "n6"];
    assert!(
        result.steps == via_n3 || result.steps == via_n5,
        "unexpected path: {:?}",
        result.steps
    );
}

#[test]
fn a_star_matches_dijkstra_on_the_office_plan() {
    let plan = office_plan();
    let graph = build_edge_graph(&plan);

    let dijkstra = find_route_dijkstra(&graph, "n1", "n6").expect("route exists");
    let a_star = find_route_a_star(&graph, &plan, "n1", "n6").expect("route exists");
    assert_eq!(a_star.distance, dijkstra.distance);
}

#[test]
fn start_equals_goal_yields_single_node_path() {
    let plan = office_plan();
    let graph = build_edge_graph(&plan);

    for result in [
        find_route_dijkstra(&graph, "n1", "n1"),
        find_route_a_star(&graph, &plan, "n1", "n1"),
    ] {
        let result = result.expect("degenerate route exists");
        assert_eq!(result.steps, vec!["n1"]);
        assert_eq!(result.distance, 0.0);
    }
}

#[test]
fn disjoint_components_yield_not_found() {
    let plan = FloorPlan {
        nodes: vec![
            node("a", 0.0, 0.0),
            node("b", 10.0, 0.0),
            node("c", 100.0, 100.0),
            node("d", 110.0, 100.0),
        ],
        edges: vec![edge("e1", "a", "b", 10.0), edge("e2", "c", "d", 10.0)],
        ..FloorPlan::default()
    };
    let graph = build_edge_graph(&plan);

    assert!(find_route_dijkstra(&graph, "a", "c").is_none());
    assert!(find_route_a_star(&graph, &plan, "a", "c").is_none());
}

#[test]
fn unknown_endpoints_converge_to_not_found() {
    let plan = office_plan();
    let graph = build_edge_graph(&plan);

    // Dijkstra drains an empty frontier; A* fails fast on the missing
    // position. Both surface the same sentinel.
    assert!(find_route_dijkstra(&graph, "missing", "n6").is_none());
    assert!(find_route_dijkstra(&graph, "n1", "missing").is_none());
    assert!(find_route_a_star(&graph, &plan, "missing", "n6").is_none());
    assert!(find_route_a_star(&graph, &plan, "n1", "missing").is_none());

    // The degenerate start == goal shortcut must not fabricate a path for
    // an id the graph has never seen.
    assert!(find_route_dijkstra(&graph, "missing", "missing").is_none());
    assert!(find_route_a_star(&graph, &plan, "missing", "missing").is_none());
}

#[test]
fn solvers_agree_when_weights_equal_euclidean_distance() {
    // Irregular layout; every weight is the exact distance between its
    // endpoints, keeping the A* heuristic admissible.
    let nodes = vec![
        node("a", 0.0, 0.0),
        node("b", 40.0, 30.0),
        node("c", 100.0, 0.0),
        node("d", 70.0, 80.0),
        node("e", 140.0, 60.0),
    ];
    let pairs = [
        ("a", "b"),
        ("b", "c"),
        ("b", "d"),
        ("c", "e"),
        ("d", "e"),
        ("a", "c"),
    ];
    let edges = pairs
        .iter()
        .enumerate()
        .map(|(i, &(from, to))| {
            let f = nodes.iter().find(|n| n.id == from).unwrap();
            let t = nodes.iter().find(|n| n.id == to).unwrap();
            edge(
                &format!("e{i}"),
                from,
                to,
                f.position().distance_to(&t.position()),
            )
        })
        .collect();

    let plan = FloorPlan {
        nodes,
        edges,
        ..FloorPlan::default()
    };
    let graph = build_edge_graph(&plan);

    let dijkstra = find_route_dijkstra(&graph, "a", "e").expect("route exists");
    let a_star = find_route_a_star(&graph, &plan, "a", "e").expect("route exists");
    assert!(
        (dijkstra.distance - a_star.distance).abs() < 1e-9,
        "dijkstra {} vs a* {}",
        dijkstra.distance,
        a_star.distance
    );
}

#[test]
fn dijkstra_honours_stored_weights_over_geometry() {
    // The straight corridor is geometrically shorter but carries a high
    // operator-assigned cost (stairs); the detour must win.
    let plan = FloorPlan {
        nodes: vec![
            node("start", 0.0, 0.0),
            node("stairs", 50.0, 0.0),
            node("detour", 50.0, 200.0),
            node("goal", 100.0, 0.0),
        ],
        edges: vec![
            edge("e1", "start", "stairs", 500.0),
            edge("e2", "stairs", "goal", 500.0),
            edge("e3", "start", "detour", 210.0),
            edge("e4", "detour", "goal", 210.0),
        ],
        ..FloorPlan::default()
    };
    let graph = build_edge_graph(&plan);

    let result = find_route_dijkstra(&graph, "start", "goal").expect("route exists");
    assert_eq!(result.steps, vec!["start", "detour", "goal"]);
    assert_eq!(result.distance, 420.0);
}

#[test]
fn prefix_distance_never_exceeds_full_distance() {
    let plan = office_plan();
    let graph = build_edge_graph(&plan);

    let full = find_route_dijkstra(&graph, "n1", "n6").expect("route exists");
    for intermediate in &full.steps {
        let prefix = find_route_dijkstra(&graph, "n1", intermediate).expect("prefix route exists");
        assert!(prefix.distance <= full.distance);
    }
}
