use std::collections::HashMap;

use tracing::warn;

use crate::plan::FloorPlan;

/// Routing graph variants supported by the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphMode {
    /// Built from the explicit weighted edge collection.
    Edges,
    /// Built from inline node connections, weighted by Euclidean distance.
    Connections,
    /// Both sources merged, keeping the cheaper entry for duplicate links.
    Combined,
}

/// Directed entry within the routing graph adjacency.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdge {
    pub target: String,
    pub weight: f64,
    /// Identifier of the floor-plan edge this entry was derived from, when
    /// one exists (connection-derived entries carry `None`).
    pub edge_id: Option<String>,
}

/// Graph structure used by the pathfinding algorithms.
///
/// Built fresh from the floor-plan snapshot on every routing request; the
/// editor mutates nodes and edges between requests, so nothing is cached.
#[derive(Debug, Clone)]
pub struct Graph {
    mode: GraphMode,
    adjacency: HashMap<String, Vec<GraphEdge>>,
}

impl Graph {
    /// Mode that produced this graph.
    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    /// Return the outgoing edges for a given node identifier.
    pub fn neighbours(&self, node: &str) -> &[GraphEdge] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of nodes with an adjacency entry.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the node identifier has an adjacency entry.
    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            mode: GraphMode::Edges,
            adjacency: HashMap::new(),
        }
    }
}

/// Build the default routing graph, merging explicit edges with inline node
/// connections.
pub fn build_graph(plan: &FloorPlan) -> Graph {
    let edges = build_edge_adjacency(plan);
    let connections = build_connection_adjacency(plan);
    let adjacency = merge_adjacency(plan, edges, connections);

    Graph {
        mode: GraphMode::Combined,
        adjacency,
    }
}

/// Build a routing graph that only considers the explicit edge collection.
pub fn build_edge_graph(plan: &FloorPlan) -> Graph {
    Graph {
        mode: GraphMode::Edges,
        adjacency: build_edge_adjacency(plan),
    }
}

/// Build a routing graph from inline node connections only.
pub fn build_connection_graph(plan: &FloorPlan) -> Graph {
    Graph {
        mode: GraphMode::Connections,
        adjacency: build_connection_adjacency(plan),
    }
}

fn build_edge_adjacency(plan: &FloorPlan) -> HashMap<String, Vec<GraphEdge>> {
    let mut adjacency: HashMap<String, Vec<GraphEdge>> = HashMap::new();
    for node in &plan.nodes {
        adjacency.entry(node.id.clone()).or_default();
    }

    for edge in &plan.edges {
        if plan.node(&edge.from).is_none() || plan.node(&edge.to).is_none() {
            // Tolerated but never routable: skipping keeps phantom node ids
            // out of the adjacency entirely.
            warn!(edge = %edge.id, "edge references a node missing from the plan; skipping");
            continue;
        }

        adjacency
            .entry(edge.from.clone())
            .or_default()
            .push(GraphEdge {
                target: edge.to.clone(),
                weight: edge.weight,
                edge_id: Some(edge.id.clone()),
            });

        if edge.is_bidirectional() {
            adjacency
                .entry(edge.to.clone())
                .or_default()
                .push(GraphEdge {
                    target: edge.from.clone(),
                    weight: edge.weight,
                    edge_id: Some(edge.id.clone()),
                });
        }
    }

    adjacency
}

fn build_connection_adjacency(plan: &FloorPlan) -> HashMap<String, Vec<GraphEdge>> {
    let mut adjacency: HashMap<String, Vec<GraphEdge>> = HashMap::new();
    for node in &plan.nodes {
        adjacency.entry(node.id.clone()).or_default();
    }

    for node in &plan.nodes {
        for target_id in &node.connections {
            let Some(target) = plan.node(target_id) else {
                warn!(
                    node = %node.id,
                    target = %target_id,
                    "connection references a node missing from the plan"
                );
                continue;
            };

            let weight = node.position().distance_to(&target.position());
            push_connection(&mut adjacency, &node.id, &target.id, weight);
            push_connection(&mut adjacency, &target.id, &node.id, weight);
        }
    }

    adjacency
}

fn push_connection(
    adjacency: &mut HashMap<String, Vec<GraphEdge>>,
    from: &str,
    to: &str,
    weight: f64,
) {
    let entry = adjacency.entry(from.to_string()).or_default();
    if entry.iter().any(|edge| edge.target == to) {
        return;
    }
    entry.push(GraphEdge {
        target: to.to_string(),
        weight,
        edge_id: None,
    });
}

fn merge_adjacency(
    plan: &FloorPlan,
    mut edges: HashMap<String, Vec<GraphEdge>>,
    connections: HashMap<String, Vec<GraphEdge>>,
) -> HashMap<String, Vec<GraphEdge>> {
    for (node_id, connection_edges) in connections {
        let entry = edges.entry(node_id).or_default();
        for edge in connection_edges {
            if let Some(existing) = entry
                .iter_mut()
                .find(|existing| existing.target == edge.target)
            {
                if edge.weight < existing.weight {
                    *existing = edge;
                }
                continue;
            }
            entry.push(edge);
        }
    }

    for node in &plan.nodes {
        edges.entry(node.id.clone()).or_default();
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{Edge, Node, NodeKind};

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

    #[test]
    fn every_node_gets_an_adjacency_entry() {
        let plan = FloorPlan {
            nodes: vec![node("a", 0.0, 0.0), node("b", 5.0, 0.0)],
            ..FloorPlan::default()
        };
        let graph = build_graph(&plan);
        assert_eq!(graph.node_count(), 2);
        assert!(graph.neighbours("a").is_empty());
    }

    #[test]
    fn one_way_edge_adds_single_entry() {
        let plan = FloorPlan {
            nodes: vec![node("a", 0.0, 0.0), node("b", 5.0, 0.0)],
            edges: vec![Edge {
                id: "e1".to_string(),
                from: "a".to_string(),
                to: "b".to_string(),
                weight: 5.0,
                bidirectional: Some(false),
            }],
            ..FloorPlan::default()
        };

        let graph = build_edge_graph(&plan);
        assert_eq!(graph.neighbours("a").len(), 1);
        assert!(graph.neighbours("b").is_empty());
    }
}
