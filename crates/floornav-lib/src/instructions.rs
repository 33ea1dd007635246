//! Coarse cardinal-direction instructions for a solved path.
//!
//! Convention: floor-plan screen coordinates, y increasing downward. The
//! segment angle is `atan2(dy, dx)` in degrees, bucketed into four
//! non-overlapping ranges: east = [-45, 45], south = (45, 135], west =
//! angle >= 135 or <= -135, north otherwise. Presentation only, but the
//! partition is fixed so the output stays deterministic.

use std::fmt;

use crate::plan::{FloorPlan, Point};

/// One of the four coarse travel directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardinalDirection {
    East,
    South,
    West,
    North,
}

impl fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            CardinalDirection::East => "east",
            CardinalDirection::South => "south",
            CardinalDirection::West => "west",
            CardinalDirection::North => "north",
        };
        f.write_str(value)
    }
}

/// Classify the direction of travel from one position to another.
pub fn direction_between(from: Point, to: Point) -> CardinalDirection {
    let angle = (to.y - from.y).atan2(to.x - from.x).to_degrees();

    if (-45.0..=45.0).contains(&angle) {
        CardinalDirection::East
    } else if angle > 45.0 && angle <= 135.0 {
        CardinalDirection::South
    } else if angle >= 135.0 || angle <= -135.0 {
        CardinalDirection::West
    } else {
        CardinalDirection::North
    }
}

/// Produce one textual instruction per consecutive pair of path nodes.
///
/// Empty and single-node paths yield no instructions. Pairs whose nodes are
/// missing from the plan are skipped.
pub fn generate_instructions(plan: &FloorPlan, steps: &[String]) -> Vec<String> {
    let mut instructions = Vec::new();

    for (index, pair) in steps.windows(2).enumerate() {
        let (Some(current), Some(next)) = (plan.node(&pair[0]), plan.node(&pair[1])) else {
            continue;
        };

        let direction = direction_between(current.position(), next.position());
        instructions.push(format!("Head {} to waypoint {}", direction, index + 2));
    }

    instructions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    #[test]
    fn axis_aligned_segments_bucket_cleanly() {
        let origin = point(0.0, 0.0);
        assert_eq!(
            direction_between(origin, point(10.0, 0.0)),
            CardinalDirection::East
        );
        assert_eq!(
            direction_between(origin, point(0.0, 10.0)),
            CardinalDirection::South
        );
        assert_eq!(
            direction_between(origin, point(-10.0, 0.0)),
            CardinalDirection::West
        );
        assert_eq!(
            direction_between(origin, point(0.0, -10.0)),
            CardinalDirection::North
        );
    }

    #[test]
    fn forty_five_degree_boundary_belongs_to_east() {
        let origin = point(0.0, 0.0);
        assert_eq!(
            direction_between(origin, point(10.0, 10.0)),
            CardinalDirection::East
        );
        assert_eq!(
            direction_between(origin, point(10.0, -10.0)),
            CardinalDirection::East
        );
    }
}
