//! floornav library entry points.
//!
//! This crate exposes helpers to load an indoor floor plan from its JSON
//! document, build the navigation graph, resolve points of interest to
//! routable nodes, and run pathfinding algorithms. Higher-level consumers
//! (CLI, editor panels) should only depend on the functions exported here
//! instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod instructions;
pub mod output;
pub mod path;
pub mod plan;
pub mod poi;
pub mod routing;

pub use error::{Error, Result};
pub use graph::{build_connection_graph, build_edge_graph, build_graph, Graph, GraphEdge, GraphMode};
pub use instructions::{direction_between, generate_instructions, CardinalDirection};
pub use output::{RouteOutputKind, RouteRenderMode, RouteSummary};
pub use path::{find_route_a_star, find_route_dijkstra, SearchResult};
pub use plan::{load_floor_plan, Edge, FloorPlan, Node, NodeKind, Point, Poi, PoiCategory};
pub use poi::{nearest_node, resolve_poi};
pub use routing::{plan_route, RouteAlgorithm, RouteEndpoint, RoutePlan, RouteRequest};
