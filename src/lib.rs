//! Weighted graphs with minimum spanning trees computed by Kruskal's algorithm. Generic over
//! the node payload and the integer edge weight.
//!
//! A graph is built incrementally: nodes are added first, then weighted edges between them.
//! [`Graph::mst_edges`] computes a minimum spanning tree of the graph as it stands, or a
//! minimum spanning forest with one tree per connected component if the graph is not
//! connected. The edges are handed back as a lazily replayed sequence, lightest first. The
//! sequence is fail-fast: once the graph gains another edge, every attempt to advance the
//! sequence fails with [`MstError::ConcurrentStructuralChange`] rather than returning edges
//! of a tree that may no longer be minimal.
//!
//! Each computation works on its own disjoint-set forest, so spanning trees taken one after
//! another, or side by side, never influence each other.
//!
//! Around the core the crate also provides a map of cities: records of a name and a
//! latitude/longitude pair are loaded into a complete graph weighted by great-circle
//! distance, and can be drawn through any [`GraphRenderer`] with the spanning tree
//! highlighted.
//!
//! # Examples
//! ```
//!use kruskal_mst::{Graph, MstError};
//!
//!let mut graph: Graph<&str> = Graph::new();
//!let a = graph.add_node("A");
//!let b = graph.add_node("B");
//!let c = graph.add_node("C");
//!let d = graph.add_node("D");
//!graph.add_edge(a, b, 1);
//!graph.add_edge(c, d, 2);
//!
//!// Two components give a forest of two trees
//!let mut mst = graph.mst_edges();
//!assert!(mst.take_next().unwrap().connects(a, b));
//!
//!// Modifying the graph invalidates the sequence
//!graph.add_edge(b, c, 3);
//!assert_eq!(Err(MstError::ConcurrentStructuralChange), mst.take_next());
//! ```
//!
//! # References
//! * [Kruskal, J. B. On the shortest spanning subtree of a graph and the traveling salesman problem.](https://doi.org/10.1090/S0002-9939-1956-0078686-7)

pub use crate::city::City;
pub use crate::city_map::{parse_record, CityMap};
pub use crate::config::{CityMapConfig, CityMapConfigBuilder};
pub use crate::distance::DistanceMetric;
pub use crate::error::{CityMapError, MstError};
pub use crate::graph::{Edge, Graph, Node, NodeId};
pub use crate::kruskal::KruskalEdges;
pub use crate::render::{render_graph, GraphRenderer, TextRenderer};
pub use crate::union_find::DisjointSet;

mod city;
mod city_map;
mod config;
mod distance;
mod error;
mod graph;
mod kruskal;
mod render;
mod union_find;
mod validation;
