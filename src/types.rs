use crate::na;

// Common types for all of d20kit.
//
// Everything is `f64`; nothing here is realtime,
// and relaxation runs for a thousand iterations
// so we'd rather not accumulate `f32` error.
pub type Real = f64;
pub type Vec2 = na::Vector2<Real>;
pub type Vec3 = na::Vector3<Real>;
pub type Pt2 = na::Point2<Real>;
pub type Pt3 = na::Point3<Real>;
pub type Mat2 = na::Matrix2<Real>;
pub type Mat3 = na::Matrix3<Real>;
pub type Rot3 = na::Rotation3<Real>;

/// Straight (not premultiplied) colour, each channel nominally in `[0, 1]`.
pub type Rgba = na::Vector4<Real>;
