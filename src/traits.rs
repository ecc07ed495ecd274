use std::hash::Hash;

/// A directed, weighted edge between two vertices.
///
/// Undirected graphs hand out one edge per direction where that matters
/// (outgoing edges) and one edge per pair where it doesn’t (all edges).
pub trait Edge {
    /// The vertex type at both ends.
    type Vertex;

    /// The vertex the edge leaves.
    fn from(&self) -> &Self::Vertex;

    /// The vertex the edge enters.
    fn to(&self) -> &Self::Vertex;

    /// The edge’s weight.
    fn weight(&self) -> f64;
}

/// What Dijkstra needs from a graph: the edges leaving a vertex.
///
/// The graph must not change while an algorithm is reading it.
pub trait Graph {
    /// Vertex identity; compared and hashed, never inspected.
    type Vertex: Clone + Eq + Hash;

    /// The edges of the graph.
    type Edge: Edge<Vertex = Self::Vertex> + Clone;

    /// The edges whose `from` is `vertex`. Empty for unknown vertices.
    fn outgoing_edges_from(&self, vertex: &Self::Vertex) -> &[Self::Edge];
}

/// What Kruskal needs from a graph: every vertex and every edge.
pub trait KruskalGraph {
    /// Vertex identity; compared and hashed, never inspected.
    type Vertex: Clone + Eq + Hash;

    /// The edges of the graph.
    type Edge: Edge<Vertex = Self::Vertex> + Clone;

    /// Every vertex, each exactly once.
    fn all_vertices(&self) -> &[Self::Vertex];

    /// Every edge. An undirected edge should be listed once.
    fn all_edges(&self) -> &[Self::Edge];
}
