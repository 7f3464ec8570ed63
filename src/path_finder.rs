use crate::errors::{Result, SearchError};
use crate::graph::Graph;
use crate::graph_algos::{a_star::a_star, dijkstra::dijkstra, random_walk::random_walk, Outcome};
use crate::result::SearchResult;

use std::{fmt, hash::Hash, fmt::Debug, str::FromStr, time::Instant};
use rand::{SeedableRng, rngs::StdRng};
use tracing::debug;


/// Search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Random, // Uninformed random walk
    Dijkstra, // Uniform-cost search
    AStar, // Best-first search guided by a heuristic
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Random, Algorithm::Dijkstra, Algorithm::AStar];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Random => "random",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Algorithm::Random),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Algorithm::AStar),
            _ => Err(SearchError::UnknownAlgorithm(s.to_string())),
        }
    }
}


/// Knobs for a PathFinder, the defaults keep every algorithm unbounded and unseeded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum vertices a random walk may visit before giving up
    pub random_step_limit: Option<u64>,
    /// Seed for the random walk, makes walks reproducible
    pub seed: Option<u64>,
}

impl SearchOptions {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_random_step_limit(mut self, limit: u64) -> Self {
        self.random_step_limit = Some(limit);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}


/// Heuristic estimate of the remaining cost from a vertex to the goal
pub type Heuristic<'a, V> = Box<dyn Fn(&V, &V) -> f64 + Send + Sync + 'a>;

/// Runs searches over a borrowed graph
/// Each call owns its own frontier and search tree, so one graph can serve any number of finders
pub struct PathFinder<'a, V, G: ?Sized> {
    graph: &'a G,
    heuristic: Option<Heuristic<'a, V>>,
    options: SearchOptions,
}

impl<'a, V, G> PathFinder<'a, V, G>
where
    V: Eq + Hash + Clone + Debug,
    G: Graph<V> + ?Sized,
{

    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            heuristic: None,
            options: SearchOptions::default(),
        }
    }

    /// Heuristic used by A*, must never overestimate the remaining cost
    pub fn with_heuristic<H>(mut self, heuristic: H) -> Self
    where
        H: Fn(&V, &V) -> f64 + Send + Sync + 'a,
    {
        self.heuristic = Some(Box::new(heuristic));
        self
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Search for a path from start to goal
    /// Not finding a path is a successful call with `success() == false`
    pub fn search(&self, algorithm: Algorithm, start: V, goal: V) -> Result<SearchResult<V>> {
        let started = Instant::now();
        debug!(%algorithm, ?start, ?goal, "starting search");

        let outcome = match algorithm {
            Algorithm::Random => self.search_random(&start, &goal)?,
            Algorithm::Dijkstra => dijkstra(self.graph, &start, &goal)?,
            Algorithm::AStar => a_star(self.graph, &start, &goal, self.heuristic.as_deref())?,
        };

        let Outcome { visited_nodes, found } = outcome;
        let elapsed_seconds = started.elapsed().as_secs_f64();

        let result = found
            .and_then(|(path, cost)| SearchResult::found(path, cost, visited_nodes, elapsed_seconds))
            .unwrap_or_else(|| SearchResult::not_found(start, visited_nodes, elapsed_seconds));

        debug!(
            %algorithm,
            success = result.success(),
            visited_nodes,
            cost = result.cost(),
            "search finished"
        );

        Ok(result)
    }

    fn search_random(&self, start: &V, goal: &V) -> Result<Outcome<V>> {
        let limit = self.options.random_step_limit;
        match self.options.seed {
            Some(seed) => random_walk(self.graph, start, goal, &mut StdRng::seed_from_u64(seed), limit),
            None => random_walk(self.graph, start, goal, &mut rand::rng(), limit),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;

    fn abc_graph() -> DirectedGraph<&'static str> {
        DirectedGraph::from_triples([
            ("A", "B", 1.0),
            ("B", "C", 2.0),
            ("A", "C", 5.0),
        ])
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("random".parse::<Algorithm>().unwrap(), Algorithm::Random);
        assert_eq!("Dijkstra".parse::<Algorithm>().unwrap(), Algorithm::Dijkstra);
        assert_eq!(" astar ".parse::<Algorithm>().unwrap(), Algorithm::AStar);
        assert_eq!("A*".parse::<Algorithm>().unwrap(), Algorithm::AStar);

        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_parse_unknown_algorithm() {
        let err = "bfs".parse::<Algorithm>().unwrap_err();

        assert!(matches!(err, SearchError::UnknownAlgorithm(ref name) if name == "bfs"));
        assert_eq!(err.to_string(), "Unknown search algorithm: bfs");
    }

    #[test]
    fn test_search_dijkstra() {
        let graph = abc_graph();
        let finder = PathFinder::new(&graph);

        let result = finder.search(Algorithm::Dijkstra, "A", "C").unwrap();

        assert!(result.success());
        assert_eq!(result.cost(), 3.0);
        assert_eq!(result.path(), Some(&["A", "B", "C"][..]));
        assert_eq!(result.visited_nodes(), 3);
        assert!(result.elapsed_seconds() >= 0.0);
    }

    #[test]
    fn test_search_a_star_zero_heuristic_matches_dijkstra() {
        let graph = abc_graph();
        let finder = PathFinder::new(&graph).with_heuristic(|_: &&str, _: &&str| 0.0);

        let a_star = finder.search(Algorithm::AStar, "A", "C").unwrap();
        let dijkstra = finder.search(Algorithm::Dijkstra, "A", "C").unwrap();

        assert_eq!(a_star.cost(), dijkstra.cost());
        assert_eq!(a_star.path(), dijkstra.path());
        assert_eq!(a_star.visited_nodes(), dijkstra.visited_nodes());
    }

    #[test]
    fn test_search_a_star_without_heuristic() {
        let graph = abc_graph();
        let finder = PathFinder::new(&graph);

        let result = finder.search(Algorithm::AStar, "A", "C").unwrap();

        assert_eq!(result.path(), Some(&["A", "B", "C"][..]));
        assert_eq!(result.visited_nodes(), 3);
    }

    #[test]
    fn test_search_start_is_goal() {
        let graph = abc_graph();
        let finder = PathFinder::new(&graph).with_options(SearchOptions::new().with_seed(1));

        for algorithm in Algorithm::ALL {
            let result = finder.search(algorithm, "B", "B").unwrap();

            assert!(result.success(), "{algorithm} should succeed");
            assert_eq!(result.cost(), 0.0);
            assert_eq!(result.path(), Some(&["B"][..]));
            assert_eq!(result.visited_nodes(), 1);
        }
    }

    #[test]
    fn test_search_dead_end() {
        let mut graph = abc_graph();
        graph.add_vertex("D");
        let finder = PathFinder::new(&graph);

        for algorithm in Algorithm::ALL {
            let result = finder.search(algorithm, "D", "Z").unwrap();

            assert!(!result.success());
            assert_eq!(result.cost(), -1.0);
            assert_eq!(result.path(), None);
            assert_eq!(result.goal(), None);
            assert_eq!(result.start(), &"D");
        }
    }

    #[test]
    fn test_search_random_with_seed_is_reproducible() {
        let graph = DirectedGraph::from_triples([
            ("A", "B", 1.0),
            ("A", "C", 2.0),
            ("B", "A", 1.0),
            ("B", "D", 3.0),
            ("C", "A", 1.0),
            ("C", "D", 1.0),
        ]);
        let options = SearchOptions::new().with_seed(99).with_random_step_limit(10_000);
        let finder = PathFinder::new(&graph).with_options(options);

        let first = finder.search(Algorithm::Random, "A", "D").unwrap();
        let second = finder.search(Algorithm::Random, "A", "D").unwrap();

        assert!(first.success());
        assert_eq!(first.path(), second.path());
        assert_eq!(first.cost(), second.cost());
        assert_eq!(first.path().map(<[_]>::len), Some(first.visited_nodes() as usize));
    }

    #[test]
    fn test_search_random_step_limit() {
        let graph = DirectedGraph::from_triples([("A", "B", 1.0), ("B", "A", 1.0)]);
        let finder = PathFinder::new(&graph)
            .with_options(SearchOptions::new().with_random_step_limit(20));

        let result = finder.search(Algorithm::Random, "A", "Z");

        assert!(matches!(result, Err(SearchError::StepLimitExhausted(20))));
    }

    #[test]
    fn test_search_result_rendering() {
        let graph = abc_graph();
        let finder = PathFinder::new(&graph);

        let found = finder.search(Algorithm::Dijkstra, "A", "C").unwrap().to_string();
        let missing = finder.search(Algorithm::Dijkstra, "C", "A").unwrap().to_string();

        assert!(found.ends_with("Total cost from A -> C: 3.0\nPath: A -> B -> C"), "{found}");
        assert!(missing.ends_with("No path found from C"), "{missing}");
    }

    #[test]
    fn test_search_shared_across_threads() {
        let graph = DirectedGraph::from_triples([
            ("A", "B", 1.0),
            ("A", "C", 4.0),
            ("B", "C", 1.0),
            ("B", "D", 5.0),
            ("C", "D", 1.0),
        ]);
        let finder = PathFinder::new(&graph).with_heuristic(|_: &&str, _: &&str| 0.0);
        let expected = finder.search(Algorithm::Dijkstra, "A", "D").unwrap();

        let results: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let finder = &finder;
                    let algorithm = if i % 2 == 0 { Algorithm::Dijkstra } else { Algorithm::AStar };
                    scope.spawn(move || finder.search(algorithm, "A", "D").unwrap())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for result in results {
            assert!(result.success());
            assert_eq!(result.cost(), expected.cost());
            assert_eq!(result.path(), Some(&["A", "B", "C", "D"][..]));
            assert_eq!(result.visited_nodes(), expected.visited_nodes());
        }
    }

    #[test]
    fn test_search_negative_weight() {
        let graph = DirectedGraph::from_triples([("A", "B", -1.0)]);
        let finder = PathFinder::new(&graph);

        assert!(finder.search(Algorithm::Dijkstra, "A", "B").is_err());
        assert!(finder.search(Algorithm::AStar, "A", "B").is_err());
    }
}
