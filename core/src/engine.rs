use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::PathError;
use crate::graph::{Graph, Metric, VertexId, Weight, INFINITY};

/// Per-vertex result of one shortest-path run.
///
/// Only the accumulator of the run's primary metric is optimal. The other one
/// is whatever that metric sums to along the chosen primary path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeState {
    pub distance: Weight,
    pub cost: Weight,
    /// Vertex the best known path arrives from. None for the start and for
    /// unreachable vertices.
    pub predecessor: Option<VertexId>,
}

impl NodeState {
    fn unreached() -> Self {
        Self {
            distance: INFINITY,
            cost: INFINITY,
            predecessor: None,
        }
    }

    pub fn value(&self, metric: Metric) -> Weight {
        match metric {
            Metric::Distance => self.distance,
            Metric::Cost => self.cost,
        }
    }
}

/// State table produced by [`compute_shortest_paths`].
///
/// Owns one [`NodeState`] per graph vertex, indexed by [`VertexId`], and
/// borrows the graph it was computed over so results can be named.
#[derive(Debug, Clone)]
pub struct ShortestPaths<'g> {
    graph: &'g Graph,
    start: VertexId,
    metric: Metric,
    states: Vec<NodeState>,
    settled: Vec<VertexId>,
}

impl<'g> ShortestPaths<'g> {
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn start(&self) -> VertexId {
        self.start
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn state(&self, id: VertexId) -> Option<&NodeState> {
        self.states.get(id as usize)
    }

    /// Look up a vertex's state by label.
    pub fn state_of(&self, label: &str) -> Option<&NodeState> {
        self.graph.vertex(label).and_then(|id| self.state(id))
    }

    pub fn states(&self) -> &[NodeState] {
        &self.states
    }

    /// Whether the run found a path to `id`: it is the start or has a predecessor.
    pub fn is_reached(&self, id: VertexId) -> bool {
        id == self.start || self.state(id).is_some_and(|s| s.predecessor.is_some())
    }

    /// Reachable vertices in the order they were finalized.
    pub fn settled(&self) -> &[VertexId] {
        &self.settled
    }
}

/// Add an edge weight to an accumulator. None once the sum reaches [`INFINITY`].
fn accumulate(total: Weight, weight: Weight) -> Option<Weight> {
    total.checked_add(weight).filter(|&sum| sum < INFINITY)
}

/// Heap entry: min-ordered on the primary value, lower id first on ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frontier {
    value: Weight,
    vertex: VertexId,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .value
            .cmp(&self.value)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source shortest paths from `start`, minimizing `metric`.
///
/// Dijkstra with a binary heap and lazy deletion: a vertex may sit in the
/// heap several times, only the entry matching its current value counts.
/// Weights are unsigned, so a finalized vertex's value is final.
///
/// When a neighbor improves, primary value, secondary value and predecessor
/// are replaced together. Equal-value candidates never replace an existing
/// path, so which of several equally short paths wins is unspecified.
///
/// Returns `VertexNotFound` if `start` is not a vertex of `graph`, and
/// `WeightOverflow` if either accumulator along a relaxed edge would reach
/// [`INFINITY`].
pub fn compute_shortest_paths<'g>(
    graph: &'g Graph,
    metric: Metric,
    start: &str,
) -> Result<ShortestPaths<'g>, PathError> {
    let start = graph
        .vertex(start)
        .ok_or_else(|| PathError::VertexNotFound(start.to_string()))?;

    let n = graph.vertex_count();
    let mut states = vec![NodeState::unreached(); n];
    let mut finalized = vec![false; n];
    let mut settled = Vec::with_capacity(n);
    let mut heap = BinaryHeap::with_capacity(n);

    states[start as usize] = NodeState {
        distance: 0,
        cost: 0,
        predecessor: None,
    };
    heap.push(Frontier {
        value: 0,
        vertex: start,
    });

    while let Some(Frontier { value, vertex }) = heap.pop() {
        let idx = vertex as usize;
        // Stale entry: the vertex was finalized or improved after this push.
        if finalized[idx] || value > states[idx].value(metric) {
            continue;
        }
        finalized[idx] = true;
        settled.push(vertex);

        let current = states[idx];
        for edge in graph.neighbors(vertex) {
            let target = edge.target as usize;
            if finalized[target] {
                continue;
            }

            let distance = accumulate(current.distance, edge.weights.distance);
            let cost = accumulate(current.cost, edge.weights.cost);
            let (Some(distance), Some(cost)) = (distance, cost) else {
                return Err(PathError::WeightOverflow {
                    metric: if distance.is_none() { Metric::Distance } else { Metric::Cost },
                    from: graph.label(vertex).unwrap_or_default().to_string(),
                    to: graph.label(edge.target).unwrap_or_default().to_string(),
                });
            };
            let candidate = NodeState {
                distance,
                cost,
                predecessor: Some(vertex),
            };
            let candidate_value = candidate.value(metric);

            if candidate_value < states[target].value(metric) {
                states[target] = candidate;
                heap.push(Frontier {
                    value: candidate_value,
                    vertex: edge.target,
                });
            }
        }
    }

    tracing::debug!(
        metric = %metric,
        start = graph.label(start).unwrap_or_default(),
        vertices = n,
        reached = settled.len(),
        "shortest paths computed"
    );

    Ok(ShortestPaths {
        graph,
        start,
        metric,
        states,
        settled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Weights;

    /// A–B (10, 200), A–C (15, 350), no B–C.
    fn make_triangle_without_base() -> Graph {
        let mut g = Graph::new();
        g.connect("A", "B", Weights::new(10, 200));
        g.connect("A", "C", Weights::new(15, 350));
        g
    }

    /// Two routes from S to T: short but expensive via X, long but cheap via Y.
    fn make_diverging() -> Graph {
        let mut g = Graph::new();
        g.connect("S", "X", Weights::new(5, 500));
        g.connect("X", "T", Weights::new(5, 500));
        g.connect("S", "Y", Weights::new(20, 40));
        g.connect("Y", "T", Weights::new(20, 40));
        g
    }

    fn make_grid(width: u32, height: u32) -> Graph {
        let mut g = Graph::new();
        let name = |x: u32, y: u32| format!("{}_{}", x, y);
        for y in 0..height {
            for x in 0..width {
                let d = (x * 7 + y * 3) % 11 + 1;
                let c = (x * 5 + y * 13) % 17 + 1;
                if x + 1 < width {
                    g.connect(&name(x, y), &name(x + 1, y), Weights::new(d as u64, c as u64 * 10));
                }
                if y + 1 < height {
                    g.connect(&name(x, y), &name(x, y + 1), Weights::new(c as u64, d as u64 * 10));
                }
            }
        }
        g
    }

    /// Minimum primary sum over all simple paths, by exhaustive search.
    fn brute_force_min(graph: &Graph, metric: Metric, from: VertexId, to: VertexId) -> Option<Weight> {
        fn walk(
            graph: &Graph,
            metric: Metric,
            at: VertexId,
            to: VertexId,
            sum: Weight,
            visited: &mut [bool],
            best: &mut Option<Weight>,
        ) {
            if at == to {
                *best = Some(best.map_or(sum, |b| b.min(sum)));
                return;
            }
            for edge in graph.neighbors(at) {
                let t = edge.target as usize;
                if visited[t] {
                    continue;
                }
                visited[t] = true;
                walk(graph, metric, edge.target, to, sum + metric.weight(&edge.weights), visited, best);
                visited[t] = false;
            }
        }

        let mut visited = vec![false; graph.vertex_count()];
        visited[from as usize] = true;
        let mut best = None;
        walk(graph, metric, from, to, 0, &mut visited, &mut best);
        best
    }

    #[test]
    fn test_two_spokes_scenario() {
        let g = make_triangle_without_base();
        let result = compute_shortest_paths(&g, Metric::Distance, "A").unwrap();

        let a = g.vertex("A").unwrap();
        assert_eq!(
            result.state_of("A"),
            Some(&NodeState { distance: 0, cost: 0, predecessor: None })
        );
        assert_eq!(
            result.state_of("B"),
            Some(&NodeState { distance: 10, cost: 200, predecessor: Some(a) })
        );
        assert_eq!(
            result.state_of("C"),
            Some(&NodeState { distance: 15, cost: 350, predecessor: Some(a) })
        );
    }

    #[test]
    fn test_start_is_zero_for_both_metrics() {
        let g = make_grid(4, 4);
        for metric in Metric::ALL {
            for v in g.vertices() {
                let label = g.label(v).unwrap();
                let result = compute_shortest_paths(&g, metric, label).unwrap();
                let state = result.state(v).unwrap();
                assert_eq!(state.value(metric), 0);
                assert_eq!(state.predecessor, None);
            }
        }
    }

    #[test]
    fn test_start_not_in_graph() {
        let g = make_triangle_without_base();
        let err = compute_shortest_paths(&g, Metric::Distance, "Z").unwrap_err();
        assert_eq!(err, PathError::VertexNotFound("Z".to_string()));
    }

    #[test]
    fn test_unreachable_keeps_infinity() {
        let mut g = make_triangle_without_base();
        g.connect("P", "Q", Weights::new(1, 1));
        let result = compute_shortest_paths(&g, Metric::Cost, "A").unwrap();
        for label in ["P", "Q"] {
            let s = result.state_of(label).unwrap();
            assert_eq!(s.distance, INFINITY);
            assert_eq!(s.cost, INFINITY);
            assert_eq!(s.predecessor, None);
        }
        assert!(!result.is_reached(g.vertex("P").unwrap()));
        assert!(result.is_reached(g.vertex("A").unwrap()));
        assert_eq!(result.settled().len(), 3);
    }

    #[test]
    fn test_single_vertex_graph() {
        let mut g = Graph::new();
        g.add_vertex("A");
        let result = compute_shortest_paths(&g, Metric::Distance, "A").unwrap();
        assert_eq!(result.states().len(), 1);
        assert_eq!(result.settled(), &[0]);
    }

    #[test]
    fn test_secondary_follows_primary_path() {
        let g = make_diverging();

        let by_distance = compute_shortest_paths(&g, Metric::Distance, "S").unwrap();
        let t = by_distance.state_of("T").unwrap();
        assert_eq!((t.distance, t.cost), (10, 1000));
        assert_eq!(t.predecessor, g.vertex("X"));

        let by_cost = compute_shortest_paths(&g, Metric::Cost, "S").unwrap();
        let t = by_cost.state_of("T").unwrap();
        assert_eq!((t.distance, t.cost), (40, 80));
        assert_eq!(t.predecessor, g.vertex("Y"));
    }

    #[test]
    fn test_secondary_not_independently_minimized() {
        // Two equal-distance routes; the first one found is kept even though
        // the other is cheaper, because only strict improvements replace.
        let mut g = Graph::new();
        g.connect("S", "A", Weights::new(1, 100));
        g.connect("S", "B", Weights::new(2, 1));
        g.connect("A", "T", Weights::new(2, 100));
        g.connect("B", "T", Weights::new(1, 1));
        let result = compute_shortest_paths(&g, Metric::Distance, "S").unwrap();
        let t = result.state_of("T").unwrap();
        assert_eq!(t.distance, 3);
        assert!(t.cost == 200 || t.cost == 2);
    }

    #[test]
    fn test_directed_entries_only() {
        let mut g = Graph::new();
        g.add_edge("A", "B", Weights::new(3, 30));
        let from_a = compute_shortest_paths(&g, Metric::Distance, "A").unwrap();
        assert_eq!(from_a.state_of("B").unwrap().distance, 3);
        let from_b = compute_shortest_paths(&g, Metric::Distance, "B").unwrap();
        assert!(!from_b.is_reached(g.vertex("A").unwrap()));
    }

    #[test]
    fn test_optimal_against_brute_force() {
        let g = make_grid(3, 4);
        let start = g.vertex("0_0").unwrap();
        for metric in Metric::ALL {
            let result = compute_shortest_paths(&g, metric, "0_0").unwrap();
            for v in g.vertices() {
                let expected = brute_force_min(&g, metric, start, v);
                assert_eq!(
                    Some(result.state(v).unwrap().value(metric)),
                    expected,
                    "metric {} vertex {}",
                    metric,
                    g.label(v).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_settled_order_is_monotone() {
        let g = make_grid(5, 5);
        for metric in Metric::ALL {
            let result = compute_shortest_paths(&g, metric, "2_2").unwrap();
            let values: Vec<Weight> = result
                .settled()
                .iter()
                .map(|&v| result.state(v).unwrap().value(metric))
                .collect();
            assert!(values.windows(2).all(|w| w[0] <= w[1]), "{:?}", values);
            assert_eq!(values.len(), g.vertex_count());
        }
    }

    #[test]
    fn test_symmetric_graph_symmetric_distance() {
        let g = make_grid(4, 3);
        for a in g.vertices() {
            let from_a = compute_shortest_paths(&g, Metric::Distance, g.label(a).unwrap()).unwrap();
            for b in g.vertices() {
                let from_b = compute_shortest_paths(&g, Metric::Distance, g.label(b).unwrap()).unwrap();
                assert_eq!(
                    from_a.state(b).unwrap().distance,
                    from_b.state(a).unwrap().distance
                );
            }
        }
    }

    #[test]
    fn test_cycle_terminates() {
        let mut g = Graph::new();
        for i in 0..6u64 {
            g.connect(&i.to_string(), &((i + 1) % 6).to_string(), Weights::new(1, i + 1));
        }
        let result = compute_shortest_paths(&g, Metric::Distance, "0").unwrap();
        assert_eq!(result.state_of("3").unwrap().distance, 3);
        assert_eq!(result.settled().len(), 6);
    }

    #[test]
    fn test_self_loop_ignored() {
        let mut g = Graph::new();
        g.add_edge("A", "A", Weights::new(4, 4));
        g.connect("A", "B", Weights::new(2, 2));
        let result = compute_shortest_paths(&g, Metric::Cost, "A").unwrap();
        assert_eq!(result.state_of("A").unwrap().cost, 0);
        assert_eq!(result.state_of("B").unwrap().cost, 2);
    }

    #[test]
    fn test_reachability_follows_predecessor_not_distance() {
        // Distance just below the sentinel must not make a cost run treat B
        // as unreached.
        let mut g = Graph::new();
        g.connect("A", "B", Weights::new(INFINITY - 1, 1));
        let result = compute_shortest_paths(&g, Metric::Cost, "A").unwrap();
        let b = g.vertex("B").unwrap();
        assert!(result.is_reached(b));
        assert_eq!(result.state(b).unwrap().distance, INFINITY - 1);
        assert_eq!(result.state(b).unwrap().cost, 1);
    }

    #[test]
    fn test_sentinel_sized_edge_is_overflow() {
        let mut g = Graph::new();
        g.connect("A", "B", Weights::new(INFINITY, 1));
        let err = compute_shortest_paths(&g, Metric::Cost, "A").unwrap_err();
        assert_eq!(
            err,
            PathError::WeightOverflow {
                metric: Metric::Distance,
                from: "A".to_string(),
                to: "B".to_string(),
            }
        );
    }

    #[test]
    fn test_accumulated_overflow_is_reported() {
        let mut g = Graph::new();
        g.connect("A", "B", Weights::new(1, INFINITY / 2 + 1));
        g.connect("B", "C", Weights::new(1, INFINITY / 2 + 1));
        let err = compute_shortest_paths(&g, Metric::Distance, "A").unwrap_err();
        assert!(matches!(
            err,
            PathError::WeightOverflow { metric: Metric::Cost, .. }
        ));
    }
}
