/// A disjoint-set forest over the indices `0..n`, merged by rank.
///
/// A fresh forest is allocated for every minimum spanning tree computation, so
/// two computations never observe each other's merges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<usize>,
    n_sets: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets. Every element starts as its own root with rank 0.
    pub fn new(n: usize) -> Self {
        DisjointSet {
            parent: (0..n).collect(),
            rank: vec![0; n],
            n_sets: n,
        }
    }

    /// Finds the representative of the set containing `n` by following parent links
    /// up to the self-parented root. No path compression is performed.
    ///
    /// # Panics
    /// * If `n` is out of range.
    pub fn find(&self, mut n: usize) -> usize {
        while self.parent[n] != n {
            n = self.parent[n];
        }
        n
    }

    /// Merges the sets containing `m` and `n`.
    ///
    /// The root of lower rank is attached under the other. On a tie the root of `m`
    /// goes under the root of `n`, whose rank is bumped by one.
    ///
    /// # Returns
    /// * `true` if two distinct sets were merged, `false` if they were already one.
    pub fn union(&mut self, m: usize, n: usize) -> bool {
        let root1 = self.find(m);
        let root2 = self.find(n);
        if root1 == root2 {
            return false;
        }
        if self.rank[root1] > self.rank[root2] {
            self.parent[root2] = root1;
        } else {
            self.parent[root1] = root2;
            if self.rank[root1] == self.rank[root2] {
                self.rank[root2] += 1;
            }
        }
        self.n_sets -= 1;
        true
    }

    /// Whether `m` and `n` are in the same set.
    pub fn same(&self, m: usize, n: usize) -> bool {
        self.find(m) == self.find(n)
    }

    pub fn rank_of(&self, n: usize) -> usize {
        self.rank[n]
    }

    /// The number of disjoint sets remaining.
    pub fn n_sets(&self) -> usize {
        self.n_sets
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
