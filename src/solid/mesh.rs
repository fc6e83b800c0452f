use slog::Logger;

use super::{triangulate, FaceSet, Gen, NeighborTable, PointSet};
use crate::error::Result;
use crate::spec::Spec;

/// Relaxed points plus the faces recovered from them.
///
/// Built once, before any rotation. Rotating a mesh only ever produces
/// new positions; face membership never changes from frame to frame.
#[derive(Clone, Debug)]
pub struct Mesh {
    points: PointSet,
    neighbors: NeighborTable,
    faces: FaceSet,
}

impl Mesh {
    /// Triangulate an already relaxed point set.
    pub fn new(points: PointSet, neighbors_per_vertex: usize) -> Mesh {
        let neighbors = NeighborTable::new(&points, neighbors_per_vertex);
        let faces = triangulate(&neighbors);
        Mesh {
            points,
            neighbors,
            faces,
        }
    }

    /// Generate, relax, and triangulate a point cloud from scratch.
    pub fn generate(spec: &Spec, parent_log: &Logger) -> Result<Mesh> {
        spec.validate()?;
        let log = parent_log.new(o!());
        let points = Gen::new(spec, &log).generate()?;
        let mesh = Mesh::new(points, spec.neighbors_per_vertex);

        info!(log, "Triangulated mesh"; "faces" => mesh.faces.len());
        // Neither of these is fatal; a closed mesh is only needed for
        // the picture to look right, so just complain loudly.
        if mesh.faces.len() != spec.expected_face_count() {
            warn!(
                log,
                "Unexpected face count; relaxation may not have converged";
                "faces" => mesh.faces.len(),
                "expected" => spec.expected_face_count()
            );
        }
        let orphans = mesh.orphan_vertices();
        if !orphans.is_empty() {
            warn!(log, "Some vertices belong to no face"; "vertices" => format!("{:?}", orphans));
        }

        Ok(mesh)
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn neighbors(&self) -> &NeighborTable {
        &self.neighbors
    }

    pub fn faces(&self) -> &FaceSet {
        &self.faces
    }

    /// Vertices not referenced by any face.
    pub fn orphan_vertices(&self) -> Vec<usize> {
        (0..self.points.len())
            .filter(|&v| !self.faces.iter().any(|face| face.contains(v)))
            .collect()
    }
}
