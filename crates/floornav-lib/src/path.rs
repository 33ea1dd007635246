use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::graph::Graph;
use crate::plan::{FloorPlan, Point};

/// Solved path between two node identifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Ordered node identifiers from start to goal inclusive.
    pub steps: Vec<String>,
    /// Sum of traversed edge weights.
    pub distance: f64,
}

impl SearchResult {
    fn single(node: &str) -> Self {
        Self {
            steps: vec![node.to_string()],
            distance: 0.0,
        }
    }
}

/// Run Dijkstra's algorithm to find the lowest-cost path between `start` and
/// `goal`.
///
/// Relaxation uses the stored edge weight, never a recomputed geometric
/// distance, so operator-supplied costs (stairs vs. corridors) are honoured.
/// Returns `None` when no path exists or when either endpoint is unknown to
/// the graph.
pub fn find_route_dijkstra(graph: &Graph, start: &str, goal: &str) -> Option<SearchResult> {
    if start == goal {
        if !graph.contains(start) {
            return None;
        }
        return Some(SearchResult::single(start));
    }

    let mut distances: HashMap<String, f64> = HashMap::new();
    let mut parents: HashMap<String, Option<String>> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start.to_string(), 0.0);
    parents.insert(start.to_string(), None);
    queue.push(QueueEntry::new(start.to_string(), 0.0));

    while let Some(entry) = queue.pop() {
        let best = *distances.get(&entry.node).unwrap_or(&f64::INFINITY);
        if entry.cost.0 > best {
            continue; // stale frontier entry
        }

        if entry.node == goal {
            return Some(SearchResult {
                steps: reconstruct_path(&parents, start, goal),
                distance: best,
            });
        }

        for edge in graph.neighbours(&entry.node) {
            let next_cost = best + edge.weight;
            if next_cost < *distances.get(&edge.target).unwrap_or(&f64::INFINITY) {
                distances.insert(edge.target.clone(), next_cost);
                parents.insert(edge.target.clone(), Some(entry.node.clone()));
                queue.push(QueueEntry::new(edge.target.clone(), next_cost));
            }
        }
    }

    None
}

/// Run A* search ordered by `g + h`, where the heuristic is the straight-line
/// distance from the candidate node to the goal position.
///
/// Node positions are required to evaluate the heuristic, so this fails fast
/// with `None` when either endpoint has no node record in the plan. The
/// heuristic is admissible as long as edge weights are no smaller than the
/// Euclidean distance between their endpoints; with cheaper weights (express
/// corridors) the returned path may be suboptimal, which is an accepted
/// trade-off.
pub fn find_route_a_star(
    graph: &Graph,
    plan: &FloorPlan,
    start: &str,
    goal: &str,
) -> Option<SearchResult> {
    let start_node = plan.node(start)?;
    let goal_node = plan.node(goal)?;
    let goal_position = goal_node.position();

    if start == goal {
        return Some(SearchResult::single(start));
    }

    let mut g_score: HashMap<String, f64> = HashMap::new();
    let mut parents: HashMap<String, Option<String>> = HashMap::new();
    let mut queue = BinaryHeap::new();

    g_score.insert(start.to_string(), 0.0);
    parents.insert(start.to_string(), None);
    queue.push(AStarEntry::new(
        start.to_string(),
        0.0,
        start_node.position().distance_to(&goal_position),
    ));

    while let Some(entry) = queue.pop() {
        let best = *g_score.get(&entry.node).unwrap_or(&f64::INFINITY);
        if entry.cost.0 > best {
            continue;
        }

        if entry.node == goal {
            return Some(SearchResult {
                steps: reconstruct_path(&parents, start, goal),
                distance: best,
            });
        }

        for edge in graph.neighbours(&entry.node) {
            let tentative_g = best + edge.weight;
            if tentative_g < *g_score.get(&edge.target).unwrap_or(&f64::INFINITY) {
                g_score.insert(edge.target.clone(), tentative_g);
                parents.insert(edge.target.clone(), Some(entry.node.clone()));
                let heuristic = heuristic_distance(plan, &edge.target, goal_position);
                queue.push(AStarEntry::new(edge.target.clone(), tentative_g, heuristic));
            }
        }
    }

    None
}

fn heuristic_distance(plan: &FloorPlan, from: &str, goal: Point) -> f64 {
    // Nodes reached through dangling edge references have no position;
    // a zero estimate keeps the heuristic admissible for them.
    plan.node(from)
        .map(|node| node.position().distance_to(&goal))
        .unwrap_or(0.0)
}

fn reconstruct_path(
    parents: &HashMap<String, Option<String>>,
    start: &str,
    goal: &str,
) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = Some(goal.to_string());
    while let Some(node) = current {
        let done = node == start;
        path.push(node.clone());
        if done {
            break;
        }
        current = parents.get(&node).cloned().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: String,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: String, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct AStarEntry {
    node: String,
    cost: FloatOrd,
    estimate: FloatOrd,
}

impl AStarEntry {
    fn new(node: String, cost: f64, heuristic: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            estimate: FloatOrd(cost + heuristic),
        }
    }
}

impl Ord for AStarEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for AStarEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
