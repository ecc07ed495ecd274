#![doc(html_root_url = "https://docs.rs/graph-algos/0.1.0")]
//! Two classic graph algorithms and the structures that make them fast.
//!
//! The pieces are:
//!
//! |           | kind | built on |
//! | :-------- | :--- | :------- |
//! | [`IndexedMinHeap`](struct.IndexedMinHeap.html) | priority queue with decrease/increase-key | vector + index map |
//! | [`DisjointSetForest`](struct.DisjointSetForest.html) | union-find over arbitrary items | vector + index map |
//! | [`DijkstraShortestPathFinder`](struct.DijkstraShortestPathFinder.html) | single-pair shortest path | `IndexedMinHeap` |
//! | [`KruskalMinimumSpanningTreeFinder`](struct.KruskalMinimumSpanningTreeFinder.html) | minimum spanning tree | `DisjointSetForest` |
//! | [`KruskalMazeCarver`](struct.KruskalMazeCarver.html) | random maze | a spanning-tree finder |
//!
//! The forest does union by size with full path compression. The heap
//! keeps every item’s position up to date so that priorities can be
//! changed in O(log n).
//!
//! The algorithms read graphs through the [`Graph`](trait.Graph.html) and
//! [`KruskalGraph`](trait.KruskalGraph.html) traits;
//! [`AdjacencyListGraph`](struct.AdjacencyListGraph.html) implements both.
//!
//! None of the structures may be shared between threads without a lock.
//!
//! # Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! graph-algos = "0.1.0"
//! ```
//!
//! Enable the `serde` feature to serialize the structures and results.
//!
//! # Examples
//!
//! Kruskal’s algorithm by hand, using the forest directly:
//!
//! ```
//! use graph_algos::DisjointSetForest;
//! use std::collections::HashSet;
//!
//! type Node = &'static str;
//! type Weight = usize;
//!
//! fn mst(nodes: &[Node], mut edges: Vec<(Node, Node, Weight)>)
//!        -> HashSet<(Node, Node)> {
//!     let mut result = HashSet::new();
//!     let mut uf = DisjointSetForest::new();
//!     for &node in nodes {
//!         uf.make_set(node).unwrap();
//!     }
//!
//!     edges.sort_by_key(|&(_, _, weight)| weight);
//!     for (src, dst, _) in edges {
//!         if uf.union(&src, &dst).unwrap() {
//!             result.insert((src, dst));
//!         }
//!     }
//!
//!     result
//! }
//!
//! fn main() {
//!     let nodes = ["a", "b", "c", "d"];
//!     let edges = vec![
//!         ("a", "b", 4), ("b", "c", 1), ("c", "a", 2),
//!         ("c", "d", 7), ("b", "d", 5),
//!     ];
//!
//!     assert_eq! {
//!         mst(&nodes, edges),
//!         vec![ ("b", "c"), ("c", "a"), ("b", "d") ]
//!             .into_iter().collect::<HashSet<_>>()
//!     };
//! }
//! ```
//!
//! The same with the provided finder, plus a shortest path:
//!
//! ```
//! use graph_algos::*;
//!
//! let graph = AdjacencyListGraph::undirected(vec![
//!     WeightedEdge::new("a", "b", 4.0),
//!     WeightedEdge::new("b", "c", 1.0),
//!     WeightedEdge::new("c", "a", 2.0),
//!     WeightedEdge::new("c", "d", 7.0),
//!     WeightedEdge::new("b", "d", 5.0),
//! ]);
//!
//! let mst = KruskalMinimumSpanningTreeFinder::new()
//!     .find_minimum_spanning_tree(&graph);
//! assert_eq!(8.0, mst.total_weight());
//!
//! let path = DijkstraShortestPathFinder::new()
//!     .find_shortest_path(&graph, &"a", &"d")
//!     .unwrap();
//! assert_eq!(vec!["a", "c", "b", "d"], path.vertices());
//! ```

#![warn(missing_docs)]

mod error;
mod traits;
mod graph;
mod heap;
mod forest;
mod shortest;
mod spanning;
mod maze;

pub use error::*;
pub use traits::*;
pub use graph::*;
pub use heap::*;
pub use forest::*;
pub use shortest::*;
pub use spanning::*;
pub use maze::*;
