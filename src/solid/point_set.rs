use std::ops::Index;
use std::slice;

use crate::error::{Error, Result};
use crate::types::*;

// Anything shorter than this after centering is treated as sitting
// on the centroid; there's no direction to push it out along.
const MIN_NORM: Real = 1e-12;

/// Ordered vertex positions. A vertex's index is its only identity,
/// so nothing here ever reorders points.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet {
    points: Vec<Pt3>,
}

impl PointSet {
    pub fn new(points: Vec<Pt3>) -> PointSet {
        PointSet { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Pt3> {
        self.points.iter()
    }

    // Only relaxation moves points; everyone else gets a frozen set.
    pub(crate) fn iter_mut(&mut self) -> slice::IterMut<'_, Pt3> {
        self.points.iter_mut()
    }

    pub fn points(&self) -> &[Pt3] {
        &self.points
    }

    /// Component-wise mean. The origin for an empty set.
    pub fn centroid(&self) -> Pt3 {
        if self.points.is_empty() {
            return Pt3::origin();
        }
        let sum = self
            .points
            .iter()
            .fold(Vec3::zeros(), |sum, p| sum + p.coords);
        Pt3::from(sum / self.points.len() as Real)
    }

    /// Move the centroid to the origin, then push every point
    /// out (or in) to the unit sphere.
    ///
    /// Fails if any point ends up on the centroid.
    pub fn normalize(&mut self) -> Result<()> {
        let centroid = self.centroid().coords;
        for (i, p) in self.points.iter_mut().enumerate() {
            let centered = p.coords - centroid;
            let norm = centered.norm();
            // Written this way round so NaN fails too.
            if !(norm > MIN_NORM) {
                return Err(Error::DegenerateGeometry(format!(
                    "point {} collapsed onto the centroid (|p| = {})",
                    i, norm
                )));
            }
            *p = Pt3::from(centered / norm);
        }
        Ok(())
    }
}

impl Index<usize> for PointSet {
    type Output = Pt3;

    fn index(&self, index: usize) -> &Pt3 {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Pt3;
    type IntoIter = slice::Iter<'a, Pt3>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
