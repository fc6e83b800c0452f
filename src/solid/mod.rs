//! Building the solid: relaxing a random point cloud onto the unit
//! sphere, recovering its faces, and spinning it.

mod faces;
mod gen;
mod mesh;
mod neighbors;
mod point_set;
mod rotate;

pub use self::faces::{triangulate, Face, FaceSet};
pub use self::gen::{min_separation, random_points, relax, Gen};
pub use self::mesh::Mesh;
pub use self::neighbors::NeighborTable;
pub use self::point_set::PointSet;
pub use self::rotate::Rotator;
