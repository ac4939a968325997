use crate::graph::{Edge, Graph};
use crate::union_find::DisjointSet;
use crate::MstError;
use num_traits::PrimInt;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// The edges of a minimum spanning forest, in the order Kruskal's algorithm accepted them.
///
/// The forest is computed in full when the sequence is created and then replayed one
/// edge at a time. The sequence is forward only and cannot be restarted. It shares the
/// modification counter of the graph it came from, and every advance fails with
/// [`MstError::ConcurrentStructuralChange`] once that graph has gained an edge.
///
/// As an [`Iterator`] it yields `Ok` edges until exhausted. A detected modification is
/// yielded once as an `Err`, after which iteration ends.
#[derive(Debug)]
pub struct KruskalEdges<W> {
    accepted: Vec<Edge<W>>,
    position: usize,
    mod_count_on_creation: u64,
    mod_count: Arc<AtomicU64>,
    failed: bool,
}

impl<W: PrimInt> KruskalEdges<W> {
    pub(crate) fn new<T>(graph: &Graph<T, W>) -> Self {
        let mod_count = graph.mod_count_handle();
        let mod_count_on_creation = mod_count.load(Ordering::Relaxed);
        let accepted = kruskal(graph.n_nodes(), graph.edges());
        KruskalEdges {
            accepted,
            position: 0,
            mod_count_on_creation,
            mod_count,
            failed: false,
        }
    }

    /// Whether another edge can be taken.
    ///
    /// # Returns
    /// * An error if the graph was modified since the sequence was created.
    pub fn has_next(&self) -> Result<bool, MstError> {
        self.check_mod_count()?;
        Ok(self.position < self.accepted.len())
    }

    /// Takes the next edge of the spanning forest.
    ///
    /// # Returns
    /// * The next edge, [`MstError::ConcurrentStructuralChange`] if the graph was modified
    ///   since the sequence was created or [`MstError::ExhaustedSequence`] if every edge
    ///   has already been taken.
    pub fn take_next(&mut self) -> Result<Edge<W>, MstError> {
        if !self.has_next()? {
            return Err(MstError::ExhaustedSequence);
        }
        let edge = self.accepted[self.position];
        self.position += 1;
        Ok(edge)
    }

    /// The number of edges not yet taken.
    pub fn remaining(&self) -> Result<usize, MstError> {
        self.check_mod_count()?;
        Ok(self.accepted.len() - self.position)
    }

    fn check_mod_count(&self) -> Result<(), MstError> {
        if self.mod_count.load(Ordering::Relaxed) != self.mod_count_on_creation {
            return Err(MstError::ConcurrentStructuralChange);
        }
        Ok(())
    }
}

impl<W: PrimInt> Iterator for KruskalEdges<W> {
    type Item = Result<Edge<W>, MstError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.has_next() {
            Ok(true) => Some(self.take_next()),
            Ok(false) => None,
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

/// Runs Kruskal's algorithm over `edges` between nodes `0..n_nodes`, using a disjoint-set
/// forest private to this call. Edges are drawn from a min-heap keyed on weight, then
/// insertion index.
fn kruskal<W: PrimInt>(n_nodes: usize, edges: &[Edge<W>]) -> Vec<Edge<W>> {
    let mut forest = DisjointSet::new(n_nodes);
    let mut queue = edges
        .iter()
        .enumerate()
        .map(|(idx, edge)| Reverse((edge.weight(), idx)))
        .collect::<BinaryHeap<_>>();

    let mut accepted = Vec::with_capacity(n_nodes.saturating_sub(1));
    while let Some(Reverse((_, idx))) = queue.pop() {
        let edge = edges[idx];
        let (node1, node2) = edge.endpoints();
        if forest.union(node1.index(), node2.index()) {
            accepted.push(edge);
        }
    }
    accepted
}
