use crate::errors::{Result, SearchError};
use crate::graph::Graph;
use super::Outcome;

use std::fmt::Debug;
use rand::{Rng, seq::IndexedRandom};
use tracing::{trace, warn};


/// Uninformed random walk
/// From the start vertex, follow a uniformly random outgoing edge of the current vertex until the goal is reached
/// Fails (not found) at a vertex with no outgoing edges
/// There is no cycle detection, every vertex on the walk counts as visited, revisits included
/// Without a step_limit the walk may never terminate on a cyclic graph that cannot reach the goal
pub(crate) fn random_walk<'a, V, G, R>(graph: &'a G, start: &'a V, goal: &V, rng: &mut R, step_limit: Option<u64>) -> Result<Outcome<V>>
where
    V: PartialEq + Clone + Debug,
    G: Graph<V> + ?Sized,
    R: Rng + ?Sized,
{

    let mut visited_nodes: u64 = 0;
    let mut cost = 0.0;
    let mut path = vec![start.clone()];
    let mut current = start;

    loop {
        visited_nodes += 1;

        // goal is checked before any edge is looked at, start == goal succeeds immediately
        if current == goal {
            return Ok(Outcome::found(path, cost, visited_nodes));
        }

        if let Some(limit) = step_limit {
            if visited_nodes >= limit {
                warn!(limit, "random walk step limit exhausted");
                return Err(SearchError::StepLimitExhausted(visited_nodes));
            }
        }

        // Dead end
        let Some(edge) = graph.outgoing_edges(current).choose(rng) else {
            return Ok(Outcome::not_found(visited_nodes));
        };

        trace!(from = ?current, to = ?edge.to(), "random step");

        cost += edge.weight();
        current = edge.to();
        path.push(current.clone());
    }
}
