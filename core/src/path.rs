use crate::engine::ShortestPaths;
use crate::error::PathError;
use crate::graph::{Graph, VertexId, Weights};

/// Separator used when rendering a path as text, e.g. `A-G-C-J`.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Walk predecessor links from `destination` back to the run's start.
///
/// Returns the vertices ordered start → destination. A destination that is
/// not a vertex of the run fails with `InvalidDestination`; one the run never
/// reached fails with `NoPathFound` rather than producing a one-element path.
pub fn reconstruct_path(paths: &ShortestPaths<'_>, destination: &str) -> Result<Vec<VertexId>, PathError> {
    let graph = paths.graph();
    let target = graph
        .vertex(destination)
        .filter(|&id| paths.state(id).is_some())
        .ok_or_else(|| PathError::InvalidDestination(destination.to_string()))?;

    if !paths.is_reached(target) {
        return Err(PathError::NoPathFound {
            from: graph.label(paths.start()).unwrap_or_default().to_string(),
            to: destination.to_string(),
        });
    }

    let mut path = vec![target];
    let mut current = target;
    while let Some(prev) = paths.state(current).and_then(|s| s.predecessor) {
        path.push(prev);
        current = prev;
    }

    path.reverse();
    Ok(path)
}

/// Labels of a path's vertices, in order.
pub fn path_labels(graph: &Graph, path: &[VertexId]) -> Vec<String> {
    path.iter()
        .filter_map(|&v| graph.label(v))
        .map(str::to_string)
        .collect()
}

/// Render a path as its labels joined by `separator`.
pub fn render_path(graph: &Graph, path: &[VertexId], separator: &str) -> String {
    path_labels(graph, path).join(separator)
}

/// Sum the edge weights along consecutive vertices of a path.
///
/// Returns None if two consecutive vertices are not connected or a sum overflows.
pub fn path_weights(graph: &Graph, path: &[VertexId]) -> Option<Weights> {
    path.windows(2).try_fold(Weights::new(0, 0), |acc, pair| {
        let w = graph.edge(pair[0], pair[1])?;
        Some(Weights::new(
            acc.distance.checked_add(w.distance)?,
            acc.cost.checked_add(w.cost)?,
        ))
    })
}
