use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use slog::Logger;

use super::PointSet;
use crate::error::Result;
use crate::spec::Spec;
use crate::types::*;

/// Point cloud generator. Stores everything needed to turn a seed
/// into a relaxed set of points on the unit sphere.
///
/// Regularity is emergent: points start out uniformly random in the
/// unit cube and push each other apart until they settle. There's no
/// golden-ratio construction anywhere, so the result is only ever
/// _nearly_ an icosahedron.
pub struct Gen {
    log: Logger,
    vertex_count: usize,
    seed: u64,
    relax_iterations: usize,
    relax_step: Real,
}

impl Gen {
    pub fn new(spec: &Spec, parent_log: &Logger) -> Gen {
        Gen {
            log: parent_log.new(o!("seed" => spec.seed)),
            vertex_count: spec.vertex_count,
            seed: spec.seed,
            relax_iterations: spec.relax_iterations,
            relax_step: spec.relax_step,
        }
    }

    pub fn generate(&self) -> Result<PointSet> {
        let points = random_points(self.vertex_count, self.seed)?;
        debug!(self.log, "Seeded point cloud"; "points" => points.len());
        let points = relax(points, self.relax_iterations, self.relax_step)?;
        info!(
            self.log,
            "Relaxed point cloud";
            "points" => points.len(),
            "iterations" => self.relax_iterations,
            "min_separation" => min_separation(&points)
        );
        Ok(points)
    }
}

/// Draw `n` points uniformly from `[0, 1)^3` and normalize them.
///
/// The same seed always gives bit-identical output.
pub fn random_points(n: usize, seed: u64) -> Result<PointSet> {
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    let points = (0..n)
        .map(|_| Pt3::new(rng.gen(), rng.gen(), rng.gen()))
        .collect();
    let mut points = PointSet::new(points);
    points.normalize()?;
    Ok(points)
}

/// Push every point away from every other point with an inverse-square
/// force, step by `step` times that force, and re-normalize. Repeat
/// exactly `iterations` times.
///
/// Forces for one step are all computed from the positions at the
/// start of that step, so the result doesn't depend on point order.
pub fn relax(mut points: PointSet, iterations: usize, step: Real) -> Result<PointSet> {
    for _ in 0..iterations {
        let forces: Vec<Vec3> = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                points
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .fold(Vec3::zeros(), |force, (_, other)| {
                        let v = p - other;
                        force + v / v.norm_squared()
                    })
            })
            .collect();
        for (p, force) in points.iter_mut().zip(forces) {
            *p += force * step;
        }
        points.normalize()?;
    }
    Ok(points)
}

/// Smallest distance between any two distinct points.
pub fn min_separation(points: &PointSet) -> Real {
    iproduct!(0..points.len(), 0..points.len())
        .filter(|&(i, j)| i < j)
        .map(|(i, j)| (points[i] - points[j]).norm())
        .fold(Real::INFINITY, Real::min)
}
