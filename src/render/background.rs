use std::f64::consts::PI;

use super::{PixelBuffer, PixelGrid};
use crate::spec::{RayTerm, Spec};
use crate::types::*;

/// Opacity of the ray burst at one point of the `[-1, 1]²` plane.
///
/// The averaged ray terms are pushed up near the centre and down near the
/// edges by `-r² + 1/r²`, then clamped to `[0, 1]`. At the exact centre
/// `1/r²` is infinite, which just clamps to fully opaque.
pub fn ray_alpha(p: Pt2, progress: Real, rays: &[RayTerm]) -> Real {
    let r2 = p.coords.norm_squared();
    let angle = p.y.atan2(p.x);
    let sum: Real = rays
        .iter()
        .map(|ray| {
            (2.0 * PI * ray.phase_harmonic * (progress + ray.phase_offset)).cos()
                * ((angle + ray.angle_offset) * ray.frequency).cos()
        })
        .sum();
    let alpha = sum / rays.len() as Real - r2 + 1.0 / r2;
    alpha.max(0.0).min(1.0)
}

/// The starting buffer for a frame: ray colour everywhere,
/// with the ray burst as its opacity.
pub fn background(grid: &PixelGrid, progress: Real, spec: &Spec) -> PixelBuffer {
    let colour = spec.ray_colour();
    let resolution = grid.resolution();
    let mut buffer = PixelBuffer::new(resolution, resolution);
    for (row, col) in grid.iter() {
        let alpha = ray_alpha(grid.coord(row, col), progress, &spec.rays);
        buffer[(row, col)] = Rgba::new(colour.x, colour.y, colour.z, alpha);
    }
    buffer
}
