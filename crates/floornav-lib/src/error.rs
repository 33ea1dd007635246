use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the floornav library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Floor plan document could not be located at the resolved path.
    #[error("floor plan not found at {path}")]
    FloorPlanNotFound { path: PathBuf },

    /// Raised when a node identifier could not be found in the floor plan.
    #[error("unknown node id: {id}{}", format_suggestions(.suggestions))]
    UnknownNode { id: String, suggestions: Vec<String> },

    /// Raised when a POI name could not be found in the floor plan.
    #[error("unknown point of interest: {name}{}", format_suggestions(.suggestions))]
    UnknownPoi {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route could be found between two endpoints.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a computed route plan lacks any nodes.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
