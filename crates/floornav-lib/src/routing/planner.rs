//! Route planning strategies implementing the Strategy pattern.
//!
//! Each algorithm lives behind the `RoutePlanner` trait so every call site
//! shares the same solver implementation.

use crate::graph::Graph;
use crate::path::{find_route_a_star, find_route_dijkstra, SearchResult};
use crate::plan::FloorPlan;

use super::RouteAlgorithm;

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the pathfinding algorithm on the given graph.
    ///
    /// Returns `Some(result)` if a route is found, `None` otherwise.
    fn find_path(
        &self,
        graph: &Graph,
        plan: &FloorPlan,
        start: &str,
        goal: &str,
    ) -> Option<SearchResult>;

    /// Whether this planner evaluates a geometric heuristic and therefore
    /// requires node positions for both endpoints.
    fn uses_heuristic(&self) -> bool {
        false
    }
}

/// Dijkstra's algorithm planner for weighted traversal.
///
/// Uses stored edge weights only, so it works even for nodes reached through
/// edges whose endpoints carry no position data.
#[derive(Debug, Clone, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(
        &self,
        graph: &Graph,
        _plan: &FloorPlan,
        start: &str,
        goal: &str,
    ) -> Option<SearchResult> {
        find_route_dijkstra(graph, start, goal)
    }
}

/// A* planner guided by straight-line distance to the goal.
///
/// Bounds frontier expansion when edge weights correlate with geometry;
/// fails fast when either endpoint is missing from the node collection.
#[derive(Debug, Clone, Default)]
pub struct AStarPlanner;

impl RoutePlanner for AStarPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AStar
    }

    fn find_path(
        &self,
        graph: &Graph,
        plan: &FloorPlan,
        start: &str,
        goal: &str,
    ) -> Option<SearchResult> {
        find_route_a_star(graph, plan, start, goal)
    }

    fn uses_heuristic(&self) -> bool {
        true
    }
}

/// Select the appropriate planner for a given algorithm.
pub fn select_planner(algorithm: RouteAlgorithm) -> Box<dyn RoutePlanner> {
    match algorithm {
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
        RouteAlgorithm::AStar => Box::new(AStarPlanner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dijkstra_planner_returns_correct_algorithm() {
        let planner = DijkstraPlanner;
        assert_eq!(planner.algorithm(), RouteAlgorithm::Dijkstra);
        assert!(!planner.uses_heuristic());
    }

    #[test]
    fn astar_planner_returns_correct_algorithm() {
        let planner = AStarPlanner;
        assert_eq!(planner.algorithm(), RouteAlgorithm::AStar);
        assert!(planner.uses_heuristic());
    }

    #[test]
    fn select_planner_chooses_correct_type() {
        let planner = select_planner(RouteAlgorithm::AStar);
        assert_eq!(planner.algorithm(), RouteAlgorithm::AStar);
    }
}
