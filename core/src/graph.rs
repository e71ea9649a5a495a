use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Dense vertex index, assigned in first-seen order.
pub type VertexId = u32;

/// Accumulated metric value. Integer so that sums stay exact.
pub type Weight = u64;

/// Sentinel for "not reached". Real sums stay strictly below it.
pub const INFINITY: Weight = Weight::MAX;

/// The two independent weights carried by every edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub distance: Weight,
    pub cost: Weight,
}

impl Weights {
    pub fn new(distance: Weight, cost: Weight) -> Self {
        Self { distance, cost }
    }
}

/// Which edge weight drives the optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Distance,
    Cost,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Distance, Metric::Cost];

    /// Select this metric's component of an edge.
    pub fn weight(self, weights: &Weights) -> Weight {
        match self {
            Metric::Distance => weights.distance,
            Metric::Cost => weights.cost,
        }
    }

    /// The metric that is only accumulated, not optimized, in a run on `self`.
    pub fn other(self) -> Metric {
        match self {
            Metric::Distance => Metric::Cost,
            Metric::Cost => Metric::Distance,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Distance => "distance",
            Metric::Cost => "cost",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown metric '{0}': expected 'distance' or 'cost'")]
pub struct ParseMetricError(pub String);

impl FromStr for Metric {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "distance" => Ok(Metric::Distance),
            "cost" => Ok(Metric::Cost),
            other => Err(ParseMetricError(other.to_string())),
        }
    }
}

/// A directed entry in the adjacency list.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub target: VertexId,
    pub weights: Weights,
}

/// In-memory weighted graph: adjacency lists + interned vertex labels.
///
/// An undirected connection is a pair of directed entries (see [`Graph::connect`]).
/// The engine only ever follows outgoing entries and does not check symmetry.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    outgoing: Vec<Vec<Edge>>,
    labels: Vec<String>,
    label_map: HashMap<String, VertexId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known vertex count.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            outgoing: Vec::with_capacity(vertex_count),
            labels: Vec::with_capacity(vertex_count),
            label_map: HashMap::with_capacity(vertex_count),
        }
    }

    /// Intern a vertex label, returning its id. Existing labels keep their id.
    pub fn add_vertex(&mut self, label: &str) -> VertexId {
        if let Some(&id) = self.label_map.get(label) {
            return id;
        }
        let id = self.labels.len() as VertexId;
        self.labels.push(label.to_string());
        self.label_map.insert(label.to_string(), id);
        self.outgoing.push(Vec::new());
        id
    }

    /// Add a directed entry `from -> to`. Both vertices are registered if new.
    pub fn add_edge(&mut self, from: &str, to: &str, weights: Weights) {
        let from = self.add_vertex(from);
        let to = self.add_vertex(to);
        self.outgoing[from as usize].push(Edge { target: to, weights });
    }

    /// Add an undirected connection as two directed entries with equal weights.
    pub fn connect(&mut self, a: &str, b: &str, weights: Weights) {
        self.add_edge(a, b, weights);
        self.add_edge(b, a, weights);
    }

    /// Resolve a label to its vertex id.
    pub fn vertex(&self, label: &str) -> Option<VertexId> {
        self.label_map.get(label).copied()
    }

    pub fn label(&self, id: VertexId) -> Option<&str> {
        self.labels.get(id as usize).map(String::as_str)
    }

    /// Outgoing entries of a vertex. Unknown ids have none.
    pub fn neighbors(&self, id: VertexId) -> &[Edge] {
        self.outgoing
            .get(id as usize)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Weights of the entry `from -> to`, if present.
    pub fn edge(&self, from: VertexId, to: VertexId) -> Option<Weights> {
        self.neighbors(from)
            .iter()
            .find(|e| e.target == to)
            .map(|e| e.weights)
    }

    /// Vertex ids in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.labels.len()).map(|i| i as VertexId)
    }

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of directed entries (an undirected connection counts twice).
    pub fn edge_count(&self) -> usize {
        self.outgoing.iter().map(|v| v.len()).sum()
    }
}
