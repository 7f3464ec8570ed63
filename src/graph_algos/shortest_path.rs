use super::SearchTree;

/// Construct the shortest path by walking predecessors back from the goal
/// Returns the ordered path as a vector of vertices from start to goal
/// tree: SearchTree<V> - map of vertices with their parent index and distance
/// goal_index: usize - index of the goal vertex in the tree
/// Returns None if goal_index or one of its ancestors is missing from the tree
pub(crate) fn shortest_path<V>(tree: &SearchTree<V>, goal_index: usize) -> Option<Vec<V>>
where
    V: Clone,
{

    let mut path = Vec::new();
    let mut current = Some(goal_index);

    // Trace back from goal to start, the start vertex has no parent
    while let Some(index) = current {
        let (vertex, label) = tree.get_index(index)?;
        path.push(vertex.clone());
        current = label.parent;
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    if path.is_empty() {
        return None;
    }

    Some(path)
}
