use super::PointSet;
use crate::spec::Spec;
use crate::types::*;

/// Spins a point set about a fixed, tilted axis.
///
/// The axis is the y-axis of `basis`: points are carried into that
/// frame, rotated about y, then carried back out.
#[derive(Clone, Copy, Debug)]
pub struct Rotator {
    basis: Rot3,
}

impl Rotator {
    /// `basis` must be orthonormal; see `Spec::validate`.
    pub fn new(basis: Mat3) -> Rotator {
        Rotator {
            basis: Rot3::from_matrix_unchecked(basis),
        }
    }

    pub fn from_spec(spec: &Spec) -> Rotator {
        Rotator::new(spec.rotation_basis())
    }

    pub fn rotation(&self, angle: Real) -> Rot3 {
        self.basis.inverse() * spin(angle) * self.basis
    }

    /// New point set; `points` is untouched.
    pub fn rotate(&self, points: &PointSet, angle: Real) -> PointSet {
        let rotation = self.rotation(angle);
        PointSet::new(points.iter().map(|p| rotation * *p).collect())
    }
}

// Rotation about the y-axis, with x swinging towards -z for positive angles.
#[rustfmt::skip]
fn spin(angle: Real) -> Rot3 {
    let (s, c) = angle.sin_cos();
    Rot3::from_matrix_unchecked(Mat3::new(
        c,   0.0, -s,
        0.0, 1.0, 0.0,
        s,   0.0, c,
    ))
}
