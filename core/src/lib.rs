//! pathcost-core: dual-metric route engine.
//!
//! A pure Rust library that holds a small weighted graph whose edges carry
//! two independent metrics (distance and cost) and answers "shortest" and
//! "cheapest" route queries between named points. Each query runs a
//! Dijkstra pass on one metric and reports the other metric as accumulated
//! along the same path.
//!
//! Graphs come from adjacency tables (see [`load_table`]) or are built
//! directly with [`Graph::connect`].

mod engine;
mod error;
mod graph;
mod path;
mod query;
mod table;

pub use engine::{compute_shortest_paths, NodeState, ShortestPaths};
pub use error::{PathError, TableError};
pub use graph::{Edge, Graph, Metric, ParseMetricError, VertexId, Weight, Weights, INFINITY};
pub use path::{path_labels, path_weights, reconstruct_path, render_path, DEFAULT_SEPARATOR};
pub use query::{
    cheapest_path_report, path_report, plan_route, shortest_path_report, PathReport, RoutePlan,
};
pub use table::{load_table, load_table_file, parse_cell, Cell};
