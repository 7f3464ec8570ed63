use crate::errors::{Result, SearchError};
use crate::collections::FxHashSet;
use crate::graph::Graph;
use super::{shortest_path, Label, Outcome, SearchTree};

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug};
use indexmap::map::Entry::{Occupied, Vacant};
use tracing::{trace, warn};



/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start vertex, expand the cheapest unfinalized vertex until the goal is finalized
pub(crate) fn dijkstra<V, G>(graph: &G, start: &V, goal: &V) -> Result<Outcome<V>>
where
    V: Eq + Hash + Clone + Debug,
    G: Graph<V> + ?Sized,
{
    best_first(graph, start, goal, |_| 0.0)
}


/// Shared frontier search for Dijkstra and A*
/// The frontier is ordered by distance from the start plus `heuristic` of the vertex
pub(crate) fn best_first<V, G, H>(graph: &G, start: &V, goal: &V, heuristic: H) -> Result<Outcome<V>>
where
    V: Eq + Hash + Clone + Debug,
    G: Graph<V> + ?Sized,
    H: Fn(&V) -> f64,
{

    // Build the tree - terminates when the goal is finalized
    let (tree, goal_index, visited_nodes) = build_search_tree(graph, start, goal, heuristic)?;

    let found = goal_index.and_then(|goal_index| {
        let (_, label) = tree.get_index(goal_index)?;
        let path = shortest_path(&tree, goal_index)?;
        Some((path, label.dist))
    });

    match found {
        Some((path, cost)) => Ok(Outcome::found(path, cost, visited_nodes)),
        None => Ok(Outcome::not_found(visited_nodes)),
    }
}


/// Traverses the graph from start, expanding vertices in frontier order
/// Returns the search tree, the index of the goal vertex if it was reached, and the number of frontier pops
fn build_search_tree<V, G, H>(graph: &G, start: &V, goal: &V, heuristic: H) -> Result<(SearchTree<V>, Option<usize>, u64)>
where
    V: Eq + Hash + Clone + Debug,
    G: Graph<V> + ?Sized,
    H: Fn(&V) -> f64,
{

    // Vertices to visit - binary heap sorts Biggest to Smallest, NodeId reverses the ordering
    // The same vertex may be queued more than once, only its first pop is expanded
    let mut frontier: BinaryHeap<NodeId> = BinaryHeap::new();

    // Every vertex reached so far with its predecessor and best known distance
    let mut tree: SearchTree<V> = SearchTree::default();

    // Indices of vertices whose distance is final
    let mut finalized: FxHashSet<usize> = FxHashSet::default();

    let mut visited_nodes: u64 = 0;

    let start_index = tree.insert_full(start.clone(), Label { parent: None, dist: 0.0 }).0;
    frontier.push(NodeId {
        index: start_index,
        priority: heuristic(start),
    });

    while let Some(NodeId { index, .. }) = frontier.pop() {
        visited_nodes += 1;

        // Duplicate entry for a vertex that is already final
        if !finalized.insert(index) {
            continue;
        }

        let Some((vertex, &Label { dist, .. })) = tree.get_index(index) else {
            continue;
        };

        if vertex == goal {
            return Ok((tree, Some(index), visited_nodes));
        }

        trace!(?vertex, dist, "expanding vertex");

        for edge in graph.outgoing_edges(vertex) {
            let weight = edge.weight();
            if weight.is_nan() || weight < 0.0 {
                warn!(from = ?edge.from(), to = ?edge.to(), weight, "rejecting negative edge weight");
                return Err(SearchError::NegativeWeight {
                    from: format!("{:?}", edge.from()),
                    to: format!("{:?}", edge.to()),
                    weight,
                });
            }

            // new distance to the neighbor through this vertex
            let new_dist = dist + weight;

            let neighbor_index = match tree.entry(edge.to().clone()) {
                Vacant(e) => {
                    // First time we're seeing this neighbor
                    let neighbor_index = e.index();
                    e.insert(Label { parent: Some(index), dist: new_dist });
                    neighbor_index
                }
                Occupied(mut e) => {
                    if new_dist < e.get().dist {
                        // Found a better path to this neighbor
                        e.insert(Label { parent: Some(index), dist: new_dist });
                        e.index()
                    } else {
                        // The existing path is at least as good
                        continue;
                    }
                }
            };

            // Only reachable under an inconsistent A* heuristic, the vertex must be expanded again
            finalized.remove(&neighbor_index);

            frontier.push(NodeId {
                index: neighbor_index,
                priority: new_dist + heuristic(edge.to()),
            });
        }
    }

    Ok((tree, None, visited_nodes))
}


/// Frontier entry
/// - carries its own priority so ordering never depends on the tree's current state
/// - the vertex itself is looked up by its index in the search tree
#[derive(Debug)]
struct NodeId {
    index: usize,
    priority: f64,
}

impl Ord for NodeId {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.total_cmp(&self.priority)
    }
}
impl PartialOrd for NodeId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for NodeId {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for NodeId {}
