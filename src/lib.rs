//! Shortest-path search over directed weighted graphs
//!
//! Build a [`DirectedGraph`] (or implement [`Graph`] for your own storage), wrap it in a
//! [`PathFinder`] and run one of the [`Algorithm`]s between two vertices:
//!
//! ```
//! use pathfinder::{Algorithm, DirectedGraph, PathFinder};
//!
//! let graph = DirectedGraph::from_triples([("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 5.0)]);
//! let result = PathFinder::new(&graph).search(Algorithm::Dijkstra, "A", "C").unwrap();
//!
//! assert_eq!(result.cost(), 3.0);
//! assert_eq!(result.path(), Some(&["A", "B", "C"][..]));
//! ```

mod collections;
mod errors;
mod graph;
mod graph_algos;
mod path_finder;
mod result;

pub use errors::{Result, SearchError};
pub use graph::{DirectedGraph, Edge, Graph};
pub use path_finder::{Algorithm, Heuristic, PathFinder, SearchOptions};
pub use result::SearchResult;
