use std::fmt;


/// Outcome of one search
///
/// A successful result carries the goal, the path from start to goal (both inclusive)
/// and the total edge weight along it. An unsuccessful one has no goal or path and
/// a cost of `-1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<V> {
    success: bool,
    start: V,
    goal: Option<V>,
    cost: f64,
    path: Option<Vec<V>>,
    visited_nodes: u64,
    elapsed_seconds: f64,
}

impl<V: Clone> SearchResult<V> {

    /// Cost reported when no path was found
    pub const NO_PATH_COST: f64 = -1.0;

    /// A path was found, its last vertex is the goal
    pub(crate) fn found(path: Vec<V>, cost: f64, visited_nodes: u64, elapsed_seconds: f64) -> Option<Self> {
        let start = path.first()?.clone();
        let goal = path.last()?.clone();
        Some(Self {
            success: true,
            start,
            goal: Some(goal),
            cost,
            path: Some(path),
            visited_nodes,
            elapsed_seconds,
        })
    }

    pub(crate) fn not_found(start: V, visited_nodes: u64, elapsed_seconds: f64) -> Self {
        Self {
            success: false,
            start,
            goal: None,
            cost: Self::NO_PATH_COST,
            path: None,
            visited_nodes,
            elapsed_seconds,
        }
    }
}

impl<V> SearchResult<V> {

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn start(&self) -> &V {
        &self.start
    }

    pub fn goal(&self) -> Option<&V> {
        self.goal.as_ref()
    }

    /// Sum of edge weights along the path, `-1.0` if no path was found
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Vertices from start to goal inclusive
    pub fn path(&self) -> Option<&[V]> {
        self.path.as_deref()
    }

    /// Number of vertices taken off the frontier (or stepped on, for a random walk)
    pub fn visited_nodes(&self) -> u64 {
        self.visited_nodes
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }
}

impl<V: fmt::Display> fmt::Display for SearchResult<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Visited nodes: {}", self.visited_nodes)?;
        writeln!(f, "Elapsed time: {:.1}s", self.elapsed_seconds)?;

        match (&self.goal, &self.path) {
            (Some(goal), Some(path)) if self.success => {
                writeln!(f, "Total cost from {} -> {}: {:?}", self.start, goal, self.cost)?;
                write!(f, "Path: ")?;
                for (i, v) in path.iter().enumerate() {
                    if i > 0 {
                        write!(f, " -> ")?;
                    }
                    write!(f, "{v}")?;
                }
                Ok(())
            }
            _ => write!(f, "No path found from {}", self.start),
        }
    }
}
