use std::cmp::Ordering;

use super::PointSet;

/// For each vertex, the indices of its `k` nearest other vertices,
/// nearest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborTable {
    k: usize,
    neighbors: Vec<Vec<usize>>,
}

impl NeighborTable {
    /// Ties in distance go to the lower index, so this is fully
    /// deterministic for a given point set.
    pub fn new(points: &PointSet, k: usize) -> NeighborTable {
        let neighbors = (0..points.len())
            .map(|i| {
                let mut others: Vec<usize> = (0..points.len()).filter(|&j| j != i).collect();
                // Stable sort; equal distances keep index order.
                others.sort_by(|&a, &b| {
                    let da = (points[a] - points[i]).norm();
                    let db = (points[b] - points[i]).norm();
                    da.partial_cmp(&db).unwrap_or(Ordering::Equal)
                });
                others.truncate(k);
                others
            })
            .collect();
        NeighborTable { k, neighbors }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    pub fn neighbors_of(&self, vertex: usize) -> &[usize] {
        &self.neighbors[vertex]
    }

    pub fn is_neighbor(&self, vertex: usize, other: usize) -> bool {
        self.neighbors[vertex].contains(&other)
    }
}
