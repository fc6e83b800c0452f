use std::collections::BTreeSet;

use super::NeighborTable;

/// A triangle identified only by its three vertex indices.
///
/// Always stored sorted, so two faces made from the same
/// vertices in any order compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Face([usize; 3]);

impl Face {
    /// Panics if any two indices are the same.
    pub fn new(a: usize, b: usize, c: usize) -> Face {
        assert!(
            a != b && b != c && a != c,
            "Face vertices must be distinct; got {}, {}, {}",
            a,
            b,
            c
        );
        let mut indices = [a, b, c];
        indices.sort_unstable();
        Face(indices)
    }

    pub fn indices(&self) -> [usize; 3] {
        self.0
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.0.contains(&vertex)
    }
}

// Ordered set so iteration order is at least deterministic,
// but nobody should care what that order actually is.
pub type FaceSet = BTreeSet<Face>;

/// Recover triangular faces from "who is near whom" alone.
///
/// On a convex, nearly regular solid, two vertices that are each
/// other's neighbours and share a third neighbour bound a face.
/// If the point cloud is poorly relaxed this can invent or miss
/// faces; we don't try to correct for that.
pub fn triangulate(table: &NeighborTable) -> FaceSet {
    let mut faces = FaceSet::new();
    for i in 0..table.len() {
        let i_neighbors = table.neighbors_of(i);
        for &j in i_neighbors {
            // `i` is never in its own list, and `j` is never in its
            // own list, so `k` can't be either of them.
            let shared = table
                .neighbors_of(j)
                .iter()
                .filter(|&k| i_neighbors.contains(k));
            for &k in shared {
                faces.insert(Face::new(i, j, k));
            }
        }
    }
    faces
}
