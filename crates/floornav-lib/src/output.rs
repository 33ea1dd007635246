use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::plan::FloorPlan;
use crate::routing::{RouteAlgorithm, RoutePlan};

/// Classifies the high-level command that produced a route summary.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RouteOutputKind {
    Route,
    Directions,
}

impl RouteOutputKind {
    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            RouteOutputKind::Route => "Route",
            RouteOutputKind::Directions => "Directions",
        }
    }
}

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteEndpointSummary {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl RouteEndpointSummary {
    fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub x: f64,
    pub y: f64,
}

impl RouteStep {
    fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

/// Structured representation of a planned route that consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub kind: RouteOutputKind,
    pub algorithm: RouteAlgorithm,
    pub hops: usize,
    /// Total distance in floor-plan pixels.
    pub distance: f64,
    pub start: RouteEndpointSummary,
    pub goal: RouteEndpointSummary,
    pub steps: Vec<RouteStep>,
    pub instructions: Vec<String>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a structured summary with resolved node
    /// labels and positions.
    pub fn from_plan(kind: RouteOutputKind, plan: &FloorPlan, route: &RoutePlan) -> Result<Self> {
        if route.steps.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        let steps = route
            .steps
            .iter()
            .enumerate()
            .map(|(index, node_id)| {
                let node = plan.node(node_id);
                RouteStep {
                    index,
                    id: node_id.clone(),
                    label: node.and_then(|n| n.label.clone()),
                    x: node.map(|n| n.x).unwrap_or_default(),
                    y: node.map(|n| n.y).unwrap_or_default(),
                }
            })
            .collect::<Vec<_>>();

        let start = RouteEndpointSummary {
            id: route.start.clone(),
            label: steps.first().and_then(|step| step.label.clone()),
        };
        let goal = RouteEndpointSummary {
            id: route.goal.clone(),
            label: steps.last().and_then(|step| step.label.clone()),
        };

        Ok(Self {
            kind,
            algorithm: route.algorithm,
            hops: route.hop_count(),
            distance: route.distance,
            start,
            goal,
            steps,
            instructions: route.instructions.clone(),
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "{}: {} -> {} ({} hops, {:.1} px, algorithm: {})",
            self.kind.label(),
            self.start.display_name(),
            self.goal.display_name(),
            self.hops,
            self.distance,
            self.algorithm
        );

        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "{:>3}: {} ({:.0}, {:.0})",
                step.index,
                step.display_name(),
                step.x,
                step.y
            );
        }

        for instruction in &self.instructions {
            let _ = writeln!(buffer, "{instruction}");
        }

        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**{}** — _{} → {}_ ({} hops, {:.1} px, algorithm: `{}`)",
            self.kind.label(),
            self.start.display_name(),
            self.goal.display_name(),
            self.hops,
            self.distance,
            self.algorithm
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** (`{}`)",
                step.index,
                step.display_name(),
                step.id
            );
        }
        for instruction in &self.instructions {
            let _ = writeln!(buffer, "> {instruction}");
        }
        buffer
    }
}
