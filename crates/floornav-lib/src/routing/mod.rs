//! Route planning for indoor floor plans.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported routing algorithms (Dijkstra, A*)
//! - [`RouteEndpoint`] - Node-id or POI-name endpoints
//! - [`RouteRequest`] - High-level route planning request
//! - [`RoutePlan`] - Planned route result
//! - [`plan_route`] - Main entry point for computing routes
//!
//! Each request is a pure function of the floor-plan snapshot: the adjacency
//! structure is rebuilt from the current node/edge collections every time,
//! so editor mutations between requests can never leak stale state into a
//! route. The solver layer itself signals "no route" with `None`; only this
//! orchestrator converts that into a typed error for consumers.

mod planner;

pub use planner::{select_planner, AStarPlanner, DijkstraPlanner, RoutePlanner};

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::build_graph;
use crate::instructions::generate_instructions;
use crate::plan::FloorPlan;
use crate::poi::resolve_poi;

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Dijkstra's algorithm over stored edge weights.
    #[default]
    Dijkstra,
    /// A* search guided by straight-line distance to the goal.
    #[serde(rename = "a-star")]
    AStar,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

/// Start or goal of a route request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteEndpoint {
    /// A navigation node referenced by identifier.
    Node(String),
    /// A point of interest referenced by name, resolved to its nearest node
    /// before routing.
    Poi(String),
}

impl RouteEndpoint {
    /// The user-supplied label, for error messages.
    pub fn label(&self) -> &str {
        match self {
            RouteEndpoint::Node(id) => id,
            RouteEndpoint::Poi(name) => name,
        }
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    /// Route between two node identifiers with the default algorithm.
    pub fn between_nodes(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: RouteEndpoint::Node(start.into()),
            goal: RouteEndpoint::Node(goal.into()),
            algorithm: RouteAlgorithm::default(),
        }
    }

    /// Route between two POI names with the default algorithm.
    pub fn between_pois(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: RouteEndpoint::Poi(start.into()),
            goal: RouteEndpoint::Poi(goal.into()),
            algorithm: RouteAlgorithm::default(),
        }
    }

    /// Override the routing algorithm.
    pub fn with_algorithm(mut self, algorithm: RouteAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    /// Resolved start node identifier.
    pub start: String,
    /// Resolved goal node identifier.
    pub goal: String,
    /// Ordered node identifiers from start to goal inclusive.
    pub steps: Vec<String>,
    /// Total distance as the sum of traversed edge weights.
    pub distance: f64,
    /// One cardinal-direction instruction per traversed segment.
    pub instructions: Vec<String>,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Resolve an endpoint to a node identifier.
///
/// Unknown node ids and POI names fail with fuzzy suggestions; a POI over an
/// empty node collection yields `None` (surfaced by the caller as
/// route-not-found, matching the unreachable-target outcome).
fn resolve_endpoint(plan: &FloorPlan, endpoint: &RouteEndpoint) -> Result<Option<String>> {
    match endpoint {
        RouteEndpoint::Node(id) => {
            if plan.node(id).is_none() {
                return Err(Error::UnknownNode {
                    id: id.clone(),
                    suggestions: plan.fuzzy_node_matches(id, 3),
                });
            }
            Ok(Some(id.clone()))
        }
        RouteEndpoint::Poi(name) => {
            let poi = plan.poi_by_name(name).ok_or_else(|| Error::UnknownPoi {
                name: name.clone(),
                suggestions: plan.fuzzy_poi_matches(name, 3),
            })?;
            Ok(resolve_poi(plan, poi).map(|node| node.id.clone()))
        }
    }
}

/// Compute a route using the requested algorithm.
///
/// This is the main entry point for route planning. It:
/// 1. Resolves endpoints to node identifiers (POIs via nearest-node lookup)
/// 2. Builds the adjacency graph from the current floor-plan snapshot
/// 3. Selects the planner strategy and executes pathfinding
/// 4. Attaches generated instructions to the result
pub fn plan_route(plan: &FloorPlan, request: &RouteRequest) -> Result<RoutePlan> {
    let route_not_found = || Error::RouteNotFound {
        start: request.start.label().to_string(),
        goal: request.goal.label().to_string(),
    };

    let start_id = resolve_endpoint(plan, &request.start)?.ok_or_else(route_not_found)?;
    let goal_id = resolve_endpoint(plan, &request.goal)?.ok_or_else(route_not_found)?;

    let graph = build_graph(plan);
    let planner = select_planner(request.algorithm);

    let result = planner
        .find_path(&graph, plan, &start_id, &goal_id)
        .ok_or_else(route_not_found)?;

    let instructions = generate_instructions(plan, &result.steps);

    Ok(RoutePlan {
        algorithm: request.algorithm,
        start: start_id,
        goal: goal_id,
        steps: result.steps,
        distance: result.distance,
        instructions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_plan_hop_count() {
        let plan = RoutePlan {
            algorithm: RouteAlgorithm::Dijkstra,
            start: "a".to_string(),
            goal: "c".to_string(),
            steps: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            distance: 12.0,
            instructions: Vec::new(),
        };
        assert_eq!(plan.hop_count(), 2);
    }

    #[test]
    fn single_node_plan_has_no_hops() {
        let plan = RoutePlan {
            algorithm: RouteAlgorithm::AStar,
            start: "a".to_string(),
            goal: "a".to_string(),
            steps: vec!["a".to_string()],
            distance: 0.0,
            instructions: Vec::new(),
        };
        assert_eq!(plan.hop_count(), 0);
    }
}
