//! Nearest-node resolution for points of interest.
//!
//! POIs are named places, not graph nodes; before routing they are mapped to
//! the closest navigation node by Euclidean distance. Ties keep the first
//! node encountered in collection order, so the result is stable for a given
//! plan but order-dependent when the editor reorders nodes.

use crate::plan::{FloorPlan, Node, Point, Poi};

/// Return the node minimising Euclidean distance to `point`, or `None` when
/// the collection is empty (no route possible).
pub fn nearest_node<'a>(nodes: &'a [Node], point: Point) -> Option<&'a Node> {
    let mut best: Option<(&Node, f64)> = None;
    for candidate in nodes {
        let distance = candidate.position().distance_to(&point);
        match best {
            // Only a strictly closer candidate replaces the current best.
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((candidate, distance)),
        }
    }
    best.map(|(node, _)| node)
}

/// Resolve a POI to its nearest navigation node within the plan.
pub fn resolve_poi<'a>(plan: &'a FloorPlan, poi: &Poi) -> Option<&'a Node> {
    nearest_node(&plan.nodes, poi.position())
}
