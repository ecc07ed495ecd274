//! Minimum spanning trees.

use super::{DisjointSetForest, Edge, KruskalGraph};

/// The outcome of a minimum-spanning-tree query.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MinimumSpanningTree<E> {
    /// The edges of a minimum spanning tree, in the order they were chosen.
    Success(Vec<E>),
    /// The graph has more than one connected component.
    Failure,
}

impl<E: Edge> MinimumSpanningTree<E> {
    /// Was a spanning tree found?
    pub fn exists(&self) -> bool {
        matches!(self, MinimumSpanningTree::Success(_))
    }

    /// The tree’s edges; empty on `Failure`.
    pub fn edges(&self) -> &[E] {
        match self {
            MinimumSpanningTree::Success(edges) => edges.as_slice(),
            MinimumSpanningTree::Failure => &[],
        }
    }

    /// Consumes the result, returning the tree’s edges.
    pub fn into_edges(self) -> Vec<E> {
        match self {
            MinimumSpanningTree::Success(edges) => edges,
            MinimumSpanningTree::Failure => Vec::new(),
        }
    }

    /// The sum of the tree’s edge weights; infinite on `Failure`.
    pub fn total_weight(&self) -> f64 {
        match self {
            MinimumSpanningTree::Success(edges) => edges.iter().map(Edge::weight).sum(),
            MinimumSpanningTree::Failure => f64::INFINITY,
        }
    }
}

/// Finds a minimum spanning tree of a graph.
pub trait MinimumSpanningTreeFinder<G: KruskalGraph> {
    /// Computes a minimum spanning tree, or `Failure` if `graph` is
    /// disconnected.
    fn find_minimum_spanning_tree(&self, graph: &G) -> MinimumSpanningTree<G::Edge>;
}

/// Kruskal’s algorithm over a [`DisjointSetForest`](struct.DisjointSetForest.html).
///
/// Any real weights are fine, negative ones included. Edges of equal
/// weight are taken in an unspecified order.
///
/// # Examples
///
/// ```
/// use graph_algos::*;
///
/// // Graph to use:
/// //
/// //  0 ------ 1 ------ 2
/// //  |    6   |    5   |
/// //  | 8      | 1      | 4
/// //  |        |        |
/// //  3 ------ 4 ------ 5
/// //  |    7   |    2   |
/// //  | 3      | 12     | 11
/// //  |        |        |
/// //  6 ------ 7 ------ 8
/// //       9        10
/// let graph = AdjacencyListGraph::undirected(vec![
///     WeightedEdge::new(0, 1, 6.0), WeightedEdge::new(0, 3, 8.0),
///     WeightedEdge::new(1, 2, 5.0), WeightedEdge::new(1, 4, 1.0),
///     WeightedEdge::new(2, 5, 4.0),
///     WeightedEdge::new(3, 4, 7.0), WeightedEdge::new(3, 6, 3.0),
///     WeightedEdge::new(4, 5, 2.0), WeightedEdge::new(4, 7, 12.0),
///     WeightedEdge::new(5, 8, 11.0),
///     WeightedEdge::new(6, 7, 9.0),
///     WeightedEdge::new(7, 8, 10.0),
/// ]);
///
/// let mst = KruskalMinimumSpanningTreeFinder::new()
///     .find_minimum_spanning_tree(&graph);
///
/// assert_eq!(8, mst.edges().len());
/// assert_eq!(42.0, mst.total_weight());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct KruskalMinimumSpanningTreeFinder;

impl KruskalMinimumSpanningTreeFinder {
    /// Creates a finder.
    pub fn new() -> Self {
        KruskalMinimumSpanningTreeFinder
    }
}

impl<G: KruskalGraph> MinimumSpanningTreeFinder<G> for KruskalMinimumSpanningTreeFinder {
    fn find_minimum_spanning_tree(&self, graph: &G) -> MinimumSpanningTree<G::Edge> {
        let vertices = graph.all_vertices();
        if vertices.len() <= 1 {
            return MinimumSpanningTree::Success(Vec::new());
        }

        let mut forest = DisjointSetForest::new();
        for vertex in vertices {
            // A graph that lists a vertex twice still has one set for it.
            let _ = forest.make_set(vertex);
        }

        let wanted = forest.len() - 1;
        if wanted == 0 {
            return MinimumSpanningTree::Success(Vec::new());
        }

        let mut edges: Vec<&G::Edge> = graph.all_edges().iter().collect();
        edges.sort_by(|a, b| a.weight().total_cmp(&b.weight()));

        let mut result = Vec::with_capacity(wanted);

        for edge in edges {
            match forest.union(&edge.from(), &edge.to()) {
                Ok(true) => {
                    result.push(edge.clone());
                    if result.len() == wanted {
                        log::debug!("spanning tree complete with {} edges", wanted);
                        return MinimumSpanningTree::Success(result);
                    }
                }
                Ok(false) => {}
                Err(err) => {
                    log::debug!("skipping edge with an endpoint outside the graph: {}", err);
                }
            }
        }

        log::debug!("graph is disconnected: {} sets remain", forest.set_count());
        MinimumSpanningTree::Failure
    }
}
