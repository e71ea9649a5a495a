use thiserror::Error;

use crate::graph::Metric;

/// Failures of a path query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A source or destination label that the graph does not contain.
    #[error("vertex '{0}' not found in graph")]
    VertexNotFound(String),

    /// Reconstruction asked for a vertex outside the run's state table.
    #[error("destination '{0}' is not part of this shortest-path run")]
    InvalidDestination(String),

    /// The destination exists but is unreachable from the start vertex.
    #[error("no path from '{from}' to '{to}'")]
    NoPathFound { from: String, to: String },

    /// Accumulating a metric along the connection `from -> to` left the
    /// representable range.
    #[error("{metric} overflows on the connection from '{from}' to '{to}'")]
    WeightOverflow {
        metric: Metric,
        from: String,
        to: String,
    },
}

/// Failures while building a graph from an adjacency table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read table: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed table: {0}")]
    Csv(#[from] csv::Error),

    /// A cell with a non-zero distance but no price, or numbers too large to hold.
    #[error("row '{row}', column '{column}': cannot read distance and price from '{text}'")]
    MalformedCell {
        row: String,
        column: String,
        text: String,
    },

    #[error("row {row} has no vertex label")]
    MissingLabel { row: usize },

    #[error("row '{label}' appears more than once")]
    DuplicateRow { label: String },

    #[error("table has no header row")]
    MissingHeader,
}
