// File: src/error.rs
// Purpose: Configuration-integrity faults in a route table

/// Reasons a route table is rejected when it is loaded
///
/// These are raised once, when the table is built. Looking up a
/// breadcrumb trail never fails.
#[derive(Debug, thiserror::Error)]
pub enum RouteMapError {
    #[error("Route path must not be empty")]
    EmptyPath,

    #[error("Route {path} has an empty label")]
    EmptyLabel { path: String },

    #[error("Route {0} is defined more than once")]
    DuplicatePath(String),

    #[error("Route parents form a cycle: {}", .chain.join(" -> "))]
    Cycle { chain: Vec<String> },

    #[error("Failed to parse route table: {0}")]
    Parse(#[from] toml::de::Error),
}
