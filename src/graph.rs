//! A concrete adjacency-list graph for the algorithms to run on.

use std::collections::HashMap;
use std::hash::Hash;

use super::{Edge, Graph, KruskalGraph};

/// A directed edge with a weight and an opaque payload.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedEdge<V, D = ()> {
    from: V,
    to: V,
    weight: f64,
    data: D,
}

impl<V> WeightedEdge<V> {
    /// Creates an edge without a payload.
    pub fn new(from: V, to: V, weight: f64) -> Self {
        Self::with_data(from, to, weight, ())
    }
}

impl<V, D> WeightedEdge<V, D> {
    /// Creates an edge carrying `data`.
    pub fn with_data(from: V, to: V, weight: f64, data: D) -> Self {
        WeightedEdge { from, to, weight, data }
    }

    /// The payload.
    pub fn data(&self) -> &D {
        &self.data
    }

    /// Consumes the edge, returning its payload.
    pub fn into_data(self) -> D {
        self.data
    }

    /// The same edge pointing the other way.
    pub fn reversed(&self) -> Self
            where V: Clone, D: Clone {
        WeightedEdge {
            from: self.to.clone(),
            to: self.from.clone(),
            weight: self.weight,
            data: self.data.clone(),
        }
    }
}

impl<V, D> Edge for WeightedEdge<V, D> {
    type Vertex = V;

    fn from(&self) -> &V { &self.from }

    fn to(&self) -> &V { &self.to }

    fn weight(&self) -> f64 { self.weight }
}

/// Graph stored as a vertex list plus, per vertex, its outgoing edges.
///
/// Vertices are listed in the order they were first seen. Edges added
/// with [`add_undirected_edge`](#method.add_undirected_edge) appear in
/// both endpoints’ outgoing lists but only once in
/// [`all_edges`](trait.KruskalGraph.html#tymethod.all_edges).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjacencyListGraph<V: Hash + Eq, E> {
    vertices: Vec<V>,
    adjacency: HashMap<V, Vec<E>>,
    edges: Vec<E>,
}
// Invariant: self.adjacency has exactly one key per element of self.vertices

impl<V: Hash + Eq, E> Default for AdjacencyListGraph<V, E> {
    fn default() -> Self {
        AdjacencyListGraph {
            vertices: Vec::new(),
            adjacency: HashMap::new(),
            edges: Vec::new(),
        }
    }
}

impl<V, E> AdjacencyListGraph<V, E>
        where V: Clone + Eq + Hash,
              E: Edge<Vertex = V> + Clone {
    /// Creates a graph with no vertices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directed graph from its edges.
    pub fn from_edges<I>(edges: I) -> Self
            where I: IntoIterator<Item = E> {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(edge);
        }
        graph
    }

    /// Adds an isolated vertex. Returns whether it was new.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex.clone(), Vec::new());
        self.vertices.push(vertex);
        true
    }

    /// Adds a directed edge, adding its endpoints if needed.
    pub fn add_edge(&mut self, edge: E) {
        self.add_vertex(edge.from().clone());
        self.add_vertex(edge.to().clone());
        self.adjacency.entry(edge.from().clone())
            .or_default()
            .push(edge.clone());
        self.edges.push(edge);
    }

    /// Is `vertex` in the graph?
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// The number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// The number of edges, counting an undirected edge once.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<V, D> AdjacencyListGraph<V, WeightedEdge<V, D>>
        where V: Clone + Eq + Hash,
              D: Clone {
    /// Builds an undirected graph from one edge per connected pair.
    pub fn undirected<I>(edges: I) -> Self
            where I: IntoIterator<Item = WeightedEdge<V, D>> {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_undirected_edge(edge);
        }
        graph
    }

    /// Adds an edge that can be followed in both directions.
    pub fn add_undirected_edge(&mut self, edge: WeightedEdge<V, D>) {
        let reversed = edge.reversed();
        self.add_edge(edge);
        self.adjacency.entry(reversed.from.clone())
            .or_default()
            .push(reversed);
    }
}

impl<V, E> Graph for AdjacencyListGraph<V, E>
        where V: Clone + Eq + Hash,
              E: Edge<Vertex = V> + Clone {
    type Vertex = V;
    type Edge = E;

    fn outgoing_edges_from(&self, vertex: &V) -> &[E] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<V, E> KruskalGraph for AdjacencyListGraph<V, E>
        where V: Clone + Eq + Hash,
              E: Edge<Vertex = V> + Clone {
    type Vertex = V;
    type Edge = E;

    fn all_vertices(&self) -> &[V] {
        &self.vertices
    }

    fn all_edges(&self) -> &[E] {
        &self.edges
    }
}
