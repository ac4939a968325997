use crate::kruskal::KruskalEdges;
use num_traits::PrimInt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Identifies a node within the graph that created it. Ids are handed out in insertion
/// order, starting from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The position of the node in its graph's node sequence.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A vertex of a graph, wrapping an application supplied payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    id: NodeId,
    data: T,
}

impl<T> Node<T> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn data(&self) -> &T {
        &self.data
    }
}

/// An undirected, weighted edge between two nodes. Edges are immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<W> {
    node1: NodeId,
    node2: NodeId,
    weight: W,
}

impl<W: PrimInt> Edge<W> {
    pub fn node1(&self) -> NodeId {
        self.node1
    }

    pub fn node2(&self) -> NodeId {
        self.node2
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.node1, self.node2)
    }

    /// Whether this edge joins `a` and `b`, in either direction.
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.node1 == a && self.node2 == b) || (self.node1 == b && self.node2 == a)
    }

    pub fn is_self_loop(&self) -> bool {
        self.node1 == self.node2
    }
}

/// A weighted graph built incrementally from nodes and edges. Generic over the node
/// payload `T` and the integer edge weight `W`.
///
/// Every edge insertion bumps a modification counter owned by this graph. Spanning tree
/// sequences taken from the graph capture the counter and refuse to advance once it has
/// moved on.
#[derive(Debug)]
pub struct Graph<T, W = u32> {
    nodes: Vec<Node<T>>,
    edges: Vec<Edge<W>>,
    mod_count: Arc<AtomicU64>,
}

impl<T, W: PrimInt> Graph<T, W> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph {
            nodes: Vec::new(),
            edges: Vec::new(),
            mod_count: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Appends a node wrapping `data`. Duplicate payloads are allowed and produce
    /// distinct nodes.
    ///
    /// # Returns
    /// * The id of the new node, used to connect it with edges.
    pub fn add_node(&mut self, data: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { id, data });
        id
    }

    /// Appends an edge between `node1` and `node2`. Self-loops and parallel edges are
    /// accepted; neither can make a spanning tree heavier than necessary.
    ///
    /// # Panics
    /// * If either id was not handed out by this graph.
    pub fn add_edge(&mut self, node1: NodeId, node2: NodeId, weight: W) {
        assert!(
            node1.0 < self.nodes.len() && node2.0 < self.nodes.len(),
            "edge endpoints must be nodes of this graph"
        );
        self.edges.push(Edge { node1, node2, weight });
        self.mod_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Computes a minimum spanning forest of the graph as it is now, with Kruskal's
    /// algorithm. The edges are returned as a lazily replayed sequence in the order
    /// they were accepted, i.e. by ascending weight. Ties are resolved by insertion order.
    ///
    /// Adding an edge to the graph invalidates every sequence created before it.
    ///
    /// # Examples
    /// ```
    ///use kruskal_mst::Graph;
    ///
    ///let mut graph: Graph<&str> = Graph::new();
    ///let a = graph.add_node("A");
    ///let b = graph.add_node("B");
    ///let c = graph.add_node("C");
    ///graph.add_edge(a, b, 5);
    ///graph.add_edge(b, c, 3);
    ///graph.add_edge(a, c, 10);
    ///
    ///let weights = graph
    ///    .mst_edges()
    ///    .map(|edge| edge.map(|e| e.weight()))
    ///    .collect::<Result<Vec<_>, _>>()
    ///    .unwrap();
    ///assert_eq!(vec![3, 5], weights);
    /// ```
    pub fn mst_edges(&self) -> KruskalEdges<W> {
        KruskalEdges::new(self)
    }

    /// The total weight of a minimum spanning forest of the graph.
    ///
    /// # Returns
    /// * The total, or `None` if it does not fit in `W`.
    pub fn mst_weight(&self) -> Option<W> {
        // The graph is borrowed for the whole walk, so the sequence cannot be invalidated
        self.mst_edges()
            .filter_map(Result::ok)
            .try_fold(W::zero(), |total, edge| total.checked_add(&edge.weight()))
    }

    /// Edges with a weight of at least `threshold`, in insertion order.
    pub fn visible_edges(&self, threshold: W) -> impl Iterator<Item = &Edge<W>> + '_ {
        self.edges.iter().filter(move |edge| edge.weight >= threshold)
    }

    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// # Panics
    /// * If `id` was not handed out by this graph.
    pub fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    /// The number of structural modifications made to this graph so far.
    pub fn mod_count(&self) -> u64 {
        self.mod_count.load(Ordering::Relaxed)
    }

    pub(crate) fn mod_count_handle(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.mod_count)
    }
}

impl<T, W: PrimInt> Default for Graph<T, W> {
    fn default() -> Self {
        Self::new()
    }
}
