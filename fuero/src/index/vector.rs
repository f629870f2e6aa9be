use std::sync::Arc;

use parking_lot::RwLock;

/// Immutable set of vectors built in one pass. Position i corresponds to the
/// i-th vector handed to [`VectorIndex::rebuild`].
#[derive(Debug, Default)]
pub struct IndexSnapshot {
    vectors: Vec<Vec<f32>>,
}

impl IndexSnapshot {
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Nearest neighbors by squared Euclidean distance, ascending, at most
    /// `k` results. An empty snapshot yields an empty result, the natural
    /// "no data yet" state, not an error.
    pub fn query(&self, vector: &[f32], k: usize) -> Vec<(usize, f32)> {
        if self.vectors.is_empty() || k == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(position, candidate)| (position, squared_l2(candidate, vector)))
            .collect();
        scored.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);
        scored
    }
}

/// Nearest-neighbor index over raw embeddings, no normalization.
///
/// Rebuilds replace the whole structure: the new snapshot is built off to
/// the side and published with a single pointer swap, so queries racing a
/// rebuild see either the old or the new snapshot and never block on it.
pub struct VectorIndex {
    snapshot: RwLock<Arc<IndexSnapshot>>,
}

impl VectorIndex {
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(IndexSnapshot::default())),
        }
    }

    /// Replaces the index wholesale. O(n·D) for n vectors of dimension D.
    pub fn rebuild(&self, vectors: Vec<Vec<f32>>) {
        let next = Arc::new(IndexSnapshot { vectors });
        *self.snapshot.write() = next;
    }

    pub fn snapshot(&self) -> Arc<IndexSnapshot> {
        Arc::clone(&self.snapshot.read())
    }

    pub fn query(&self, vector: &[f32], k: usize) -> Vec<(usize, f32)> {
        self.snapshot().query(vector, k)
    }

    pub fn len(&self) -> usize {
        self.snapshot.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.read().is_empty()
    }
}

impl Default for VectorIndex {
    fn default() -> Self {
        Self::new()
    }
}

fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_index_returns_no_neighbors() {
        let index = VectorIndex::new();
        assert!(index.query(&[1.0, 0.0], 5).is_empty());
    }

    #[test]
    fn query_returns_at_most_min_k_n_results() {
        let index = VectorIndex::new();
        index.rebuild(vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]]);

        assert_eq!(index.query(&[0.0, 0.0], 2).len(), 2);
        assert_eq!(index.query(&[0.0, 0.0], 10).len(), 3);
        assert!(index.query(&[0.0, 0.0], 0).is_empty());
    }

    #[test]
    fn distances_are_squared_l2_in_ascending_order() {
        let index = VectorIndex::new();
        index.rebuild(vec![vec![3.0, 0.0], vec![1.0, 0.0], vec![2.0, 0.0]]);

        let results = index.query(&[0.0, 0.0], 3);
        assert_eq!(results[0], (1, 1.0));
        assert_eq!(results[1], (2, 4.0));
        assert_eq!(results[2], (0, 9.0));
        assert!(results.windows(2).all(|w| w[0].1 <= w[1].1));
    }

    #[test]
    fn rebuild_replaces_the_whole_index() {
        let index = VectorIndex::new();
        index.rebuild(vec![vec![1.0], vec![2.0]]);
        assert_eq!(index.len(), 2);

        index.rebuild(vec![vec![5.0]]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.query(&[5.0], 3), vec![(0, 0.0)]);
    }

    #[test]
    fn snapshot_taken_before_rebuild_stays_consistent() {
        let index = VectorIndex::new();
        index.rebuild(vec![vec![1.0], vec![2.0]]);

        let snapshot = index.snapshot();
        index.rebuild(vec![vec![9.0]]);

        // The old snapshot is immutable and still answers for its own data.
        assert_eq!(snapshot.len(), 2);
        assert_eq!(index.len(), 1);
    }
}
