use serde::Serialize;

use crate::engine::compute_shortest_paths;
use crate::error::PathError;
use crate::graph::{Graph, Metric, Weight};
use crate::path::{path_labels, reconstruct_path};

/// Outcome of one optimization run between two vertices.
///
/// `distance` and `cost` both describe the reported `path`: the value of
/// `metric` is the optimum, the other is what that same path accumulates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    pub metric: Metric,
    pub source: String,
    pub destination: String,
    pub path: Vec<String>,
    pub distance: Weight,
    pub cost: Weight,
}

impl PathReport {
    /// The optimized value.
    pub fn primary(&self) -> Weight {
        self.value(self.metric)
    }

    /// The value accumulated along the path for the metric that was not optimized.
    pub fn secondary(&self) -> Weight {
        self.value(self.metric.other())
    }

    pub fn value(&self, metric: Metric) -> Weight {
        match metric {
            Metric::Distance => self.distance,
            Metric::Cost => self.cost,
        }
    }
}

/// Both reports for a source/destination pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub shortest: PathReport,
    pub cheapest: PathReport,
}

impl RoutePlan {
    /// Reports in output order: shortest first.
    pub fn reports(&self) -> [&PathReport; 2] {
        [&self.shortest, &self.cheapest]
    }
}

/// Run the engine on `metric` and report the best path to `destination`.
pub fn path_report(
    graph: &Graph,
    metric: Metric,
    source: &str,
    destination: &str,
) -> Result<PathReport, PathError> {
    if graph.vertex(destination).is_none() {
        return Err(PathError::VertexNotFound(destination.to_string()));
    }

    let paths = compute_shortest_paths(graph, metric, source)?;
    let path = reconstruct_path(&paths, destination)?;
    let state = paths
        .state_of(destination)
        .ok_or_else(|| PathError::InvalidDestination(destination.to_string()))?;

    Ok(PathReport {
        metric,
        source: source.to_string(),
        destination: destination.to_string(),
        path: path_labels(graph, &path),
        distance: state.distance,
        cost: state.cost,
    })
}

/// Shortest path by distance, with the cost that path incurs.
pub fn shortest_path_report(graph: &Graph, source: &str, destination: &str) -> Result<PathReport, PathError> {
    path_report(graph, Metric::Distance, source, destination)
}

/// Cheapest path by cost, with the distance that path covers.
pub fn cheapest_path_report(graph: &Graph, source: &str, destination: &str) -> Result<PathReport, PathError> {
    path_report(graph, Metric::Cost, source, destination)
}

/// Both reports as two independent runs over the same graph.
///
/// Either run failing fails the whole plan, so no partial plan is returned.
pub fn plan_route(graph: &Graph, source: &str, destination: &str) -> Result<RoutePlan, PathError> {
    let shortest = shortest_path_report(graph, source, destination)?;
    let cheapest = cheapest_path_report(graph, source, destination)?;
    tracing::debug!(
        source,
        destination,
        same_path = shortest.path == cheapest.path,
        "route planned"
    );
    Ok(RoutePlan { shortest, cheapest })
}
