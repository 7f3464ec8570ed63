/// Directed weighted edge between two vertices
/// Dijkstra and A* require a non-negative weight, this is checked when the edge is relaxed
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<V> {
    from: V,
    to: V,
    weight: f64,
}

impl<V> Edge<V> {

    pub fn new(from: V, to: V, weight: f64) -> Self {
        Self { from, to, weight }
    }

    pub fn from(&self) -> &V {
        &self.from
    }

    pub fn to(&self) -> &V {
        &self.to
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}
