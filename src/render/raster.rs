use std::ops::Range;

use crate::types::*;

/// Square grid of sample positions covering `[-1, 1] × [-1, 1]`.
///
/// Row `r` sits at first coordinate `lin(r)` and column `c` at second
/// coordinate `lin(c)`, where `lin` steps evenly from -1 to 1 inclusive.
/// That means a projected point `(x, y)` lands in row-ish `x` and
/// column-ish `y`.
#[derive(Clone, Debug)]
pub struct PixelGrid {
    resolution: usize,
    lin: Vec<Real>,
}

impl PixelGrid {
    pub fn new(resolution: usize) -> PixelGrid {
        let lin = match resolution {
            0 => Vec::new(),
            1 => vec![-1.0],
            _ => {
                let last = (resolution - 1) as Real;
                (0..resolution)
                    .map(|k| -1.0 + 2.0 * k as Real / last)
                    .collect()
            }
        };
        PixelGrid { resolution, lin }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn lin(&self, k: usize) -> Real {
        self.lin[k]
    }

    pub fn coord(&self, row: usize, col: usize) -> Pt2 {
        Pt2::new(self.lin[row], self.lin[col])
    }

    /// Every `(row, col)` in the grid, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> {
        iproduct!(0..self.resolution, 0..self.resolution)
    }

    // Indices whose coordinates might fall inside `[min, max]`.
    // Generous by a pixel either side; callers still do the exact test.
    fn index_range(&self, min: Real, max: Real) -> Range<usize> {
        if self.resolution < 2 {
            return 0..self.resolution;
        }
        let scale = (self.resolution - 1) as Real / 2.0;
        let to_index = |v: Real| ((v + 1.0) * scale).floor();
        let start = (to_index(min) - 1.0).max(0.0) as usize;
        let end = ((to_index(max) + 2.0).max(0.0) as usize).min(self.resolution);
        start.min(end)..end
    }
}

/// Which pixels of a `PixelGrid` a triangle covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    resolution: usize,
    bits: Vec<bool>,
    // Nothing outside these is ever set.
    rows: Range<usize>,
    cols: Range<usize>,
}

impl Mask {
    pub fn empty(resolution: usize) -> Mask {
        Mask {
            resolution,
            bits: vec![false; resolution * resolution],
            rows: 0..0,
            cols: 0..0,
        }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.bits[row * self.resolution + col]
    }

    /// Every `(row, col)` that is set, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        iproduct!(self.rows.clone(), self.cols.clone()).filter(move |&(row, col)| self.get(row, col))
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// 2D cross product; positive if `b` is anticlockwise from `a`.
pub fn cross(a: &Vec2, b: &Vec2) -> Real {
    a.x * b.y - a.y * b.x
}

/// Swap the last two corners if needed so that
/// `cross(p3 - p1, p2 - p1)` is never negative.
pub fn normalize_winding(triangle: [Pt2; 3]) -> [Pt2; 3] {
    let [p1, p2, p3] = triangle;
    if cross(&(p3 - p1), &(p2 - p1)) < 0.0 {
        [p1, p3, p2]
    } else {
        [p1, p2, p3]
    }
}

/// Mark every grid pixel inside the triangle.
///
/// A pixel is inside if, for each edge, it lies on the same side of that
/// edge as the opposite corner. Lying exactly on an edge (cross product of
/// zero) counts as inside, for all three edges alike. A triangle with no
/// area covers nothing.
pub fn fill_mask(triangle: [Pt2; 3], grid: &PixelGrid) -> Mask {
    let [p1, p2, p3] = normalize_winding(triangle);
    let mut mask = Mask::empty(grid.resolution());
    if cross(&(p2 - p1), &(p3 - p1)) == 0.0 {
        return mask;
    }

    // (start, end, opposite corner) for each edge.
    let edges = [(p1, p2, p3), (p2, p3, p1), (p3, p1, p2)];
    let expected: Vec<Real> = edges
        .iter()
        .map(|(start, end, opposite)| cross(&(end - start), &(opposite - start)).signum())
        .collect();

    let (x_min, x_max) = span([p1.x, p2.x, p3.x]);
    let (y_min, y_max) = span([p1.y, p2.y, p3.y]);
    mask.rows = grid.index_range(x_min, x_max);
    mask.cols = grid.index_range(y_min, y_max);

    for (row, col) in iproduct!(mask.rows.clone(), mask.cols.clone()) {
        let p = grid.coord(row, col);
        let inside = edges
            .iter()
            .zip(&expected)
            .all(|((start, end, _), &sign)| {
                let side = cross(&(end - start), &(p - start));
                side == 0.0 || side.signum() == sign
            });
        if inside {
            mask.bits[row * mask.resolution + col] = true;
        }
    }
    mask
}

fn span(values: [Real; 3]) -> (Real, Real) {
    values
        .iter()
        .fold((Real::INFINITY, Real::NEG_INFINITY), |(min, max), &v| (min.min(v), max.max(v)))
}
