use std::cmp::Ordering;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Minimum Jaro-Winkler similarity for a name to qualify as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// 2D position in floor-plan pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Calculate the Euclidean distance to another position.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Semantic classification for a navigation node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Room,
    Intersection,
    Door,
    Entrance,
    #[default]
    Waypoint,
}

/// A routable point in the indoor navigation graph.
///
/// Nodes may carry inline `connections` (identifiers of directly reachable
/// nodes) as produced by the simplified editor variant; the graph builder
/// weights those links by Euclidean distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connections: Vec<String>,
}

impl Node {
    pub fn position(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }
}

/// A weighted, optionally bidirectional connection between two nodes.
///
/// The weight is operator-supplied travel cost and need not equal the
/// Euclidean distance between the endpoints (corridors vs. stairs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub from: String,
    pub to: String,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidirectional: Option<bool>,
}

impl Edge {
    /// A missing `bidirectional` flag means bidirectional. Floor plans
    /// exported by the editor routinely omit the field, so this default
    /// must not be tightened.
    pub fn is_bidirectional(&self) -> bool {
        self.bidirectional != Some(false)
    }
}

/// Category assigned to a point of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PoiCategory {
    Office,
    Restroom,
    Emergency,
    Elevator,
    Stairs,
    Meeting,
    #[default]
    Other,
}

impl From<String> for PoiCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "office" => PoiCategory::Office,
            "restroom" => PoiCategory::Restroom,
            "emergency" => PoiCategory::Emergency,
            "elevator" => PoiCategory::Elevator,
            "stairs" => PoiCategory::Stairs,
            "meeting" => PoiCategory::Meeting,
            _ => PoiCategory::Other,
        }
    }
}

impl From<PoiCategory> for String {
    fn from(value: PoiCategory) -> Self {
        let label = match value {
            PoiCategory::Office => "office",
            PoiCategory::Restroom => "restroom",
            PoiCategory::Emergency => "emergency",
            PoiCategory::Elevator => "elevator",
            PoiCategory::Stairs => "stairs",
            PoiCategory::Meeting => "meeting",
            PoiCategory::Other => "other",
        };
        label.to_string()
    }
}

/// A named place of interest. Not itself a graph node; resolved to the
/// nearest node before routing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type", default)]
    pub category: PoiCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Poi {
    pub fn position(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }
}

/// In-memory snapshot of a single floor's navigation data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FloorPlan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub level: i32,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub pois: Vec<Poi>,
}

impl FloorPlan {
    /// Lookup a node by its identifier.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Lookup a POI by its case-sensitive name.
    pub fn poi_by_name(&self, name: &str) -> Option<&Poi> {
        self.pois.iter().find(|poi| poi.name == name)
    }

    /// Node identifiers similar to `query`, best matches first.
    pub fn fuzzy_node_matches(&self, query: &str, limit: usize) -> Vec<String> {
        fuzzy_matches(self.nodes.iter().map(|node| node.id.as_str()), query, limit)
    }

    /// POI names similar to `query`, best matches first.
    pub fn fuzzy_poi_matches(&self, query: &str, limit: usize) -> Vec<String> {
        fuzzy_matches(self.pois.iter().map(|poi| poi.name.as_str()), query, limit)
    }

    /// Edges whose `from` or `to` endpoint does not reference a known node.
    ///
    /// Such edges are tolerated at build time (they are never traversed);
    /// this accessor lets strict callers surface them as warnings.
    pub fn dangling_edges(&self) -> Vec<&Edge> {
        let known: HashSet<&str> = self.nodes.iter().map(|node| node.id.as_str()).collect();
        self.edges
            .iter()
            .filter(|edge| !known.contains(edge.from.as_str()) || !known.contains(edge.to.as_str()))
            .collect()
    }
}

/// Load a floor plan document from a JSON file exported by the editor.
pub fn load_floor_plan(path: &Path) -> Result<FloorPlan> {
    if !path.exists() {
        return Err(Error::FloorPlanNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let plan: FloorPlan = serde_json::from_reader(BufReader::new(file))?;

    debug!(
        nodes = plan.nodes.len(),
        edges = plan.edges.len(),
        pois = plan.pois.len(),
        "loaded floor plan '{}'",
        plan.name
    );

    let dangling = plan.dangling_edges();
    if !dangling.is_empty() {
        warn!(
            count = dangling.len(),
            "floor plan contains edges referencing unknown nodes; they will be ignored"
        );
    }

    Ok(plan)
}

fn fuzzy_matches<'a, I>(names: I, query: &str, limit: usize) -> Vec<String>
where
    I: Iterator<Item = &'a str>,
{
    let needle = query.to_lowercase();
    let mut scored: Vec<(f64, &str)> = names
        .map(|name| (strsim::jaro_winkler(&needle, &name.to_lowercase()), name))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    scored.truncate(limit);
    scored.into_iter().map(|(_, name)| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_bidirectional_flag_defaults_to_true() {
        let edge: Edge = serde_json::from_str(
            r#"{"id": "e1", "from": "a", "to": "b", "weight": 10.0}"#,
        )
        .unwrap();
        assert_eq!(edge.bidirectional, None);
        assert!(edge.is_bidirectional());
    }

    #[test]
    fn unknown_poi_category_falls_back_to_other() {
        let poi: Poi = serde_json::from_str(
            r#"{"id": "p1", "name": "Lobby", "x": 0.0, "y": 0.0, "type": "atrium"}"#,
        )
        .unwrap();
        assert_eq!(poi.category, PoiCategory::Other);
    }

    #[test]
    fn fuzzy_matches_respect_limit_and_threshold() {
        let names = ["Reception", "Receiving", "Server Room"];
        let matches = fuzzy_matches(names.iter().copied(), "Recepton", 1);
        assert_eq!(matches, vec!["Reception".to_string()]);

        let none = fuzzy_matches(names.iter().copied(), "zzzzzz", 3);
        assert!(none.is_empty());
    }
}
