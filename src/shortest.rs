//! Single-pair shortest paths.

use std::collections::HashMap;
use std::hash::Hash;

use super::{Edge, Error, Graph, IndexedMinHeap, Result};

/// The outcome of a shortest-path query.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShortestPath<V, E> {
    /// The start and end were the same vertex.
    SingleVertex(V),
    /// The edges of a shortest path, in order from start to end.
    Success(Vec<E>),
    /// The end is unreachable from the start.
    Failure,
}

impl<V: Clone, E: Edge<Vertex = V>> ShortestPath<V, E> {
    /// Was a path found?
    pub fn exists(&self) -> bool {
        !matches!(self, ShortestPath::Failure)
    }

    /// The path’s edges; empty unless the path is a `Success`.
    pub fn edges(&self) -> &[E] {
        match self {
            ShortestPath::Success(edges) => edges.as_slice(),
            _ => &[],
        }
    }

    /// The vertices along the path, start and end included.
    pub fn vertices(&self) -> Vec<V> {
        match self {
            ShortestPath::SingleVertex(vertex) => vec![vertex.clone()],
            ShortestPath::Success(edges) => {
                let mut vertices = Vec::with_capacity(edges.len() + 1);
                if let Some(first) = edges.first() {
                    vertices.push(first.from().clone());
                }
                vertices.extend(edges.iter().map(|edge| edge.to().clone()));
                vertices
            }
            ShortestPath::Failure => vec![],
        }
    }

    /// The sum of the path’s edge weights; infinite on `Failure`.
    pub fn total_weight(&self) -> f64 {
        match self {
            ShortestPath::SingleVertex(_) => 0.0,
            ShortestPath::Success(edges) => edges.iter().map(Edge::weight).sum(),
            ShortestPath::Failure => f64::INFINITY,
        }
    }
}

/// Finds a shortest path between two vertices of a graph.
pub trait ShortestPathFinder<G: Graph> {
    /// Computes a shortest path from `start` to `end`.
    ///
    /// An unreachable `end` is reported as
    /// [`ShortestPath::Failure`](enum.ShortestPath.html#variant.Failure),
    /// not as an error.
    fn find_shortest_path(&self,
                          graph: &G,
                          start: &G::Vertex,
                          end: &G::Vertex)
                          -> Result<ShortestPath<G::Vertex, G::Edge>>;
}

/// Dijkstra’s algorithm over an [`IndexedMinHeap`](struct.IndexedMinHeap.html).
///
/// Edge weights must be non-negative. A negative or NaN weight met while
/// searching fails the query with
/// [`Error::InvalidWeight`](enum.Error.html#variant.InvalidWeight).
///
/// # Examples
///
/// ```
/// use graph_algos::*;
///
/// let graph = AdjacencyListGraph::undirected(vec![
///     WeightedEdge::new("A", "B", 1.0),
///     WeightedEdge::new("B", "C", 2.0),
///     WeightedEdge::new("A", "C", 4.0),
/// ]);
///
/// let path = DijkstraShortestPathFinder::new()
///     .find_shortest_path(&graph, &"A", &"C")
///     .unwrap();
///
/// assert_eq!(vec!["A", "B", "C"], path.vertices());
/// assert_eq!(3.0, path.total_weight());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraShortestPathFinder;

impl DijkstraShortestPathFinder {
    /// Creates a finder.
    pub fn new() -> Self {
        DijkstraShortestPathFinder
    }

    /// Builds the shortest-path tree from `start`, mapping each reached
    /// vertex to the edge that reaches it on a shortest path.
    ///
    /// The search stops as soon as `end` is settled, so the tree need not
    /// cover every vertex reachable from `start`.
    pub fn shortest_paths_tree<G: Graph>(&self,
                                         graph: &G,
                                         start: &G::Vertex,
                                         end: &G::Vertex)
                                         -> Result<HashMap<G::Vertex, G::Edge>> {
        let mut spt = HashMap::new();
        let mut distances = HashMap::new();
        let mut queue = IndexedMinHeap::new();

        distances.insert(start.clone(), 0.0);
        queue.add(start.clone(), 0.0)?;

        while !queue.is_empty() {
            let vertex = queue.remove_min()?;
            if vertex == *end {
                log::debug!("reached target; settled tree has {} edges", spt.len());
                break;
            }

            let distance = distance_to(&distances, &vertex);
            for edge in graph.outgoing_edges_from(&vertex) {
                let weight = edge.weight();
                if !(weight >= 0.0) {
                    return Err(Error::InvalidWeight(weight));
                }

                let target = edge.to();
                let candidate = distance + weight;
                if candidate < distance_to(&distances, target) {
                    distances.insert(target.clone(), candidate);
                    spt.insert(target.clone(), edge.clone());

                    if queue.contains(target) {
                        queue.change_priority(target, candidate)?;
                    } else {
                        queue.add(target.clone(), candidate)?;
                    }
                    log::trace!("relaxed edge; new distance {}", candidate);
                }
            }
        }

        Ok(spt)
    }

    /// Reads the path to `end` out of a tree built by
    /// [`shortest_paths_tree`](#method.shortest_paths_tree).
    pub fn extract_shortest_path<V, E>(&self,
                                       spt: &HashMap<V, E>,
                                       start: &V,
                                       end: &V)
                                       -> ShortestPath<V, E>
            where V: Clone + Eq + Hash,
                  E: Edge<Vertex = V> + Clone {
        if start == end {
            return ShortestPath::SingleVertex(start.clone());
        }

        let mut edges = Vec::new();
        let mut vertex = end;
        while vertex != start {
            match spt.get(vertex) {
                Some(edge) => {
                    edges.push(edge.clone());
                    vertex = edge.from();
                }
                None => return ShortestPath::Failure,
            }
        }

        edges.reverse();
        ShortestPath::Success(edges)
    }
}

impl<G: Graph> ShortestPathFinder<G> for DijkstraShortestPathFinder {
    fn find_shortest_path(&self,
                          graph: &G,
                          start: &G::Vertex,
                          end: &G::Vertex)
                          -> Result<ShortestPath<G::Vertex, G::Edge>> {
        let spt = self.shortest_paths_tree(graph, start, end)?;
        Ok(self.extract_shortest_path(&spt, start, end))
    }
}

fn distance_to<V: Eq + Hash>(distances: &HashMap<V, f64>, vertex: &V) -> f64 {
    distances.get(vertex).copied().unwrap_or(f64::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AdjacencyListGraph, WeightedEdge};

    type TestGraph = AdjacencyListGraph<char, WeightedEdge<char>>;

    fn find(graph: &TestGraph, start: char, end: char) -> ShortestPath<char, WeightedEdge<char>> {
        DijkstraShortestPathFinder::new()
            .find_shortest_path(graph, &start, &end)
            .unwrap()
    }

    #[test]
    fn triangle() {
        let graph = AdjacencyListGraph::undirected(vec![
            WeightedEdge::new('A', 'B', 1.0),
            WeightedEdge::new('B', 'C', 2.0),
            WeightedEdge::new('A', 'C', 4.0),
        ]);

        let path = find(&graph, 'A', 'C');
        assert!(path.exists());
        assert_eq!(vec!['A', 'B', 'C'], path.vertices());
        assert_eq!(3.0, path.total_weight());
        assert_eq!(2, path.edges().len());
    }

    #[test]
    fn single_vertex() {
        let mut graph = TestGraph::new();
        graph.add_vertex('A');

        let path = find(&graph, 'A', 'A');
        assert_eq!(ShortestPath::SingleVertex('A'), path);
        assert_eq!(0.0, path.total_weight());
        assert!(path.edges().is_empty());
        assert_eq!(vec!['A'], path.vertices());
    }

    #[test]
    fn unreachable() {
        let mut graph = TestGraph::new();
        graph.add_vertex('X');
        graph.add_vertex('Y');

        let path = find(&graph, 'X', 'Y');
        assert_eq!(ShortestPath::Failure, path);
        assert!(!path.exists());
        assert!(path.vertices().is_empty());
    }

    #[test]
    fn directed() {
        let graph = TestGraph::from_edges(vec![
            WeightedEdge::new('A', 'B', 1.0),
        ]);
        assert!(find(&graph, 'A', 'B').exists());
        assert!(!find(&graph, 'B', 'A').exists());
    }

    #[test]
    fn decrease_key() {
        // D is first discovered at 10 through A, then improved through C.
        let graph = TestGraph::from_edges(vec![
            WeightedEdge::new('A', 'D', 10.0),
            WeightedEdge::new('A', 'B', 1.0),
            WeightedEdge::new('B', 'C', 1.0),
            WeightedEdge::new('C', 'D', 1.0),
            WeightedEdge::new('D', 'E', 1.0),
        ]);

        let path = find(&graph, 'A', 'E');
        assert_eq!(vec!['A', 'B', 'C', 'D', 'E'], path.vertices());
        assert_eq!(4.0, path.total_weight());
    }

    #[test]
    fn zero_weights() {
        let graph = AdjacencyListGraph::undirected(vec![
            WeightedEdge::new('A', 'B', 0.0),
            WeightedEdge::new('B', 'C', 0.0),
        ]);
        let path = find(&graph, 'A', 'C');
        assert_eq!(vec!['A', 'B', 'C'], path.vertices());
        assert_eq!(0.0, path.total_weight());
    }

    #[test]
    fn stops_at_target() {
        let graph = TestGraph::from_edges(vec![
            WeightedEdge::new('A', 'B', 1.0),
            WeightedEdge::new('A', 'D', 5.0),
            WeightedEdge::new('B', 'C', 1.0),
        ]);

        let spt = DijkstraShortestPathFinder::new()
            .shortest_paths_tree(&graph, &'A', &'B')
            .unwrap();
        assert!(spt.contains_key(&'B'));
        assert!(spt.contains_key(&'D'));
        assert!(!spt.contains_key(&'C'));
        assert!(!spt.contains_key(&'A'));
    }

    #[test]
    fn negative_weight() {
        let graph = TestGraph::from_edges(vec![
            WeightedEdge::new('A', 'B', 1.0),
            WeightedEdge::new('B', 'C', -2.0),
        ]);
        let result = DijkstraShortestPathFinder::new()
            .find_shortest_path(&graph, &'A', &'C');
        assert_eq!(Err(Error::InvalidWeight(-2.0)), result);
    }

    #[test]
    fn nan_weight() {
        let graph = TestGraph::from_edges(vec![
            WeightedEdge::new('A', 'B', f64::NAN),
        ]);
        let result = DijkstraShortestPathFinder::new()
            .find_shortest_path(&graph, &'A', &'B');
        assert!(matches!(result, Err(Error::InvalidWeight(w)) if w.is_nan()));
    }
}
