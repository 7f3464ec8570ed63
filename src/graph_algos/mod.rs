pub(crate) mod dijkstra;
pub(crate) mod a_star;
pub(crate) mod random_walk;
mod shortest_path;

use shortest_path::shortest_path;

use crate::collections::FxIndexMap;

/// Best known route to a vertex
/// parent is the index of the predecessor in the search tree, None for the start vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Label {
    pub parent: Option<usize>,
    pub dist: f64,
}

/// Type alias for the search tree built by the frontier searches
/// V: Vertex reached from the start
/// Label: predecessor index and best known distance from the start
pub(crate) type SearchTree<V> = FxIndexMap<V, Label>;

/// What a single algorithm run produced, before timing is attached
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Outcome<V> {
    pub visited_nodes: u64,
    pub found: Option<(Vec<V>, f64)>, // path from start to goal and its cost
}

impl<V> Outcome<V> {

    pub fn found(path: Vec<V>, cost: f64, visited_nodes: u64) -> Self {
        Self { visited_nodes, found: Some((path, cost)) }
    }

    pub fn not_found(visited_nodes: u64) -> Self {
        Self { visited_nodes, found: None }
    }
}
