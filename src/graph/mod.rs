mod edge;

pub use edge::Edge;

use crate::collections::FxIndexMap;

use std::hash::Hash;


/// Read-only directed weighted graph
/// Implementors must treat an unknown vertex as having no outgoing edges
pub trait Graph<V> {
    /// Edges leaving `v`, empty if `v` has none or is unknown
    fn outgoing_edges(&self, v: &V) -> &[Edge<V>];
}


/// Adjacency list graph
/// Vertices are kept in insertion order, which keeps random walks reproducible for a fixed seed
#[derive(Debug, Clone)]
pub struct DirectedGraph<V> {
    adjacency: FxIndexMap<V, Vec<Edge<V>>>,
    edge_count: usize,
}

impl<V: Eq + Hash + Clone> DirectedGraph<V> {

    pub fn new() -> Self {
        Self {
            adjacency: FxIndexMap::default(),
            edge_count: 0,
        }
    }

    /// Register a vertex with no edges, no-op if it already exists
    pub fn add_vertex(&mut self, v: V) {
        self.adjacency.entry(v).or_default();
    }

    /// Add a directed edge, registering both endpoints
    pub fn add_edge(&mut self, from: V, to: V, weight: f64) {
        self.insert_edge(Edge::new(from, to, weight));
    }

    /// File an edge under its source vertex
    pub fn insert_edge(&mut self, edge: Edge<V>) {
        let to = edge.to().clone();
        self.adjacency.entry(edge.from().clone()).or_default().push(edge);
        self.add_vertex(to);
        self.edge_count += 1;
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// All known vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// All edges, grouped by source vertex
    pub fn edges(&self) -> impl Iterator<Item = &Edge<V>> {
        self.adjacency.values().flatten()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Build a graph from `(from, to, weight)` triples
    pub fn from_triples<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = (V, V, f64)>,
    {
        triples.into_iter().map(|(from, to, weight)| Edge::new(from, to, weight)).collect()
    }
}

impl<V: Eq + Hash + Clone> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Eq + Hash> Graph<V> for DirectedGraph<V> {
    fn outgoing_edges(&self, v: &V) -> &[Edge<V>] {
        match self.adjacency.get(v) {
            Some(edges) => edges,
            None => &[],
        }
    }
}

impl<V: Eq + Hash + Clone> Extend<Edge<V>> for DirectedGraph<V> {
    fn extend<I: IntoIterator<Item = Edge<V>>>(&mut self, iter: I) {
        for edge in iter {
            self.insert_edge(edge);
        }
    }
}

impl<V: Eq + Hash + Clone> FromIterator<Edge<V>> for DirectedGraph<V> {
    fn from_iter<I: IntoIterator<Item = Edge<V>>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}
