use crate::errors::Result;
use crate::graph::Graph;
use super::dijkstra::{best_first, dijkstra};
use super::Outcome;

use std::{hash::Hash, fmt::Debug};


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// Same frontier search as Dijkstra, ordered by `dist(v) + heuristic(v, goal)`
/// The heuristic must be admissible (never overestimates the remaining cost to the goal)
/// A consistent heuristic never reopens a finalized vertex, an inconsistent one may
/// Without a heuristic this is exactly Dijkstra's algorithm
pub(crate) fn a_star<V, G, H>(graph: &G, start: &V, goal: &V, heuristic: Option<H>) -> Result<Outcome<V>>
where
    V: Eq + Hash + Clone + Debug,
    G: Graph<V> + ?Sized,
    H: Fn(&V, &V) -> f64,
{
    match heuristic {
        Some(h) => best_first(graph, start, goal, |v: &V| h(v, goal)),
        None => dijkstra(graph, start, goal),
    }
}
