use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::*;

/// One cosine term of the background ray burst.
///
/// Contributes `cos(2π · phase_harmonic · (progress + phase_offset))
/// · cos((angle + angle_offset) · frequency)` at polar angle `angle`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RayTerm {
    pub frequency: Real,
    pub angle_offset: Real,
    pub phase_harmonic: Real,
    pub phase_offset: Real,
}

// Contains the specifications (counts, seed, colours, etc.)
// needed to deterministically generate a sprite sheet.
//
// Every field can be overridden, e.g., from a JSON file;
// `validate` is the only gatekeeper, so call it (or go through
// something that does) before trusting any of these.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spec {
    pub vertex_count: usize,
    pub neighbors_per_vertex: usize,
    // Fixed number of relaxation steps; there is deliberately no
    // convergence test, so the same seed always gives the same solid.
    pub relax_iterations: usize,
    pub relax_step: Real,
    pub seed: u64,
    // Square side length of the supersampled buffer and of each output frame.
    // The former must be a whole multiple of the latter.
    pub render_resolution: usize,
    pub output_resolution: usize,
    pub frame_count: usize,
    // Rows of an orthonormal matrix taking model space into the frame where
    // the spin axis is the y-axis.
    pub rotation_basis: [[Real; 3]; 3],
    // Not necessarily normalized.
    pub light_direction: [Real; 3],
    // Shade of a face pointing directly away from the light.
    pub ambient: Real,
    pub face_colour: [Real; 4],
    pub outline_colour: [Real; 4],
    // Scale of the inner (filled) triangle relative to the outline triangle,
    // about the projected centroid.
    pub inset: Real,
    pub ray_colour: [Real; 4],
    pub rays: Vec<RayTerm>,
    pub texture_scale: Real,
}

impl Spec {
    pub fn new_example() -> Spec {
        let h = std::f64::consts::FRAC_1_SQRT_2;
        Spec {
            vertex_count: 12,
            neighbors_per_vertex: 5,
            relax_iterations: 1000,
            relax_step: 0.1,
            seed: 0,
            render_resolution: 256,
            output_resolution: 32,
            frame_count: 120,
            // Tilt the spin axis 45 degrees in the xy-plane.
            // Nothing deep here; it just looks nice.
            rotation_basis: [
                [h, -h, 0.0],
                [h, h, 0.0],
                [0.0, 0.0, 1.0],
            ],
            light_direction: [-1.0, 1.0, 1.0],
            ambient: 0.3,
            // #a161fe
            face_colour: [
                f64::from(0xa1) / 255.0,
                f64::from(0x61) / 255.0,
                f64::from(0xfe) / 255.0,
                1.0,
            ],
            outline_colour: [0.0, 0.0, 0.0, 1.0],
            inset: 0.99,
            ray_colour: [1.0, 1.0, 0.5, 0.5],
            rays: vec![
                RayTerm { frequency: 11.0, angle_offset: 0.0, phase_harmonic: 1.0, phase_offset: 0.0 },
                RayTerm { frequency: 14.0, angle_offset: 0.1, phase_harmonic: 2.0, phase_offset: 0.1 },
                RayTerm { frequency: 16.0, angle_offset: 0.2, phase_harmonic: 3.0, phase_offset: 0.0 },
                RayTerm { frequency: 18.0, angle_offset: 0.3, phase_harmonic: 4.0, phase_offset: 0.0 },
            ],
            texture_scale: 1.0,
        }
    }

    /// Read a spec from a JSON file. Anything the file leaves out
    /// takes its value from `new_example`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Spec> {
        let file = File::open(path)?;
        let spec: Spec = serde_json::from_reader(BufReader::new(file))?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> Result<()> {
        fn invalid(msg: String) -> Result<()> {
            Err(Error::InvalidSpec(msg))
        }

        if self.vertex_count < 4 {
            return invalid(format!(
                "need at least 4 vertices for a solid; got {}",
                self.vertex_count
            ));
        }
        // Need at least two neighbours to ever close a triangle,
        // and strictly fewer than every other vertex or every vertex
        // is everybody's neighbour.
        if self.neighbors_per_vertex < 2 || self.neighbors_per_vertex >= self.vertex_count - 1 {
            return invalid(format!(
                "neighbors_per_vertex must be in [2, {}); got {}",
                self.vertex_count - 1,
                self.neighbors_per_vertex
            ));
        }
        if !(self.relax_step > 0.0) {
            return invalid(format!("relax_step must be positive; got {}", self.relax_step));
        }
        if self.render_resolution == 0 || self.output_resolution == 0 {
            return invalid("resolutions must be non-zero".to_string());
        }
        if self.render_resolution % self.output_resolution != 0 {
            return invalid(format!(
                "render_resolution {} is not a multiple of output_resolution {}",
                self.render_resolution, self.output_resolution
            ));
        }
        if self.frame_count == 0 {
            return invalid("frame_count must be non-zero".to_string());
        }
        let basis = self.rotation_basis();
        let gram = basis * basis.transpose();
        if (gram - Mat3::identity()).amax() > 1e-9 {
            return invalid(format!("rotation_basis is not orthonormal: {:?}", self.rotation_basis));
        }
        if Vec3::from(self.light_direction).norm() == 0.0 {
            return invalid("light_direction must not be zero".to_string());
        }
        if !(self.ambient >= 0.0 && self.ambient <= 1.0) {
            return invalid(format!("ambient must be in [0, 1]; got {}", self.ambient));
        }
        if !(self.inset > 0.0 && self.inset <= 1.0) {
            return invalid(format!("inset must be in (0, 1]; got {}", self.inset));
        }
        if self.rays.is_empty() {
            return invalid("need at least one ray term".to_string());
        }
        if !(self.texture_scale > 0.0) {
            return invalid(format!("texture_scale must be positive; got {}", self.texture_scale));
        }
        Ok(())
    }

    /// Pixels along each side of a supersampling block.
    pub fn block_size(&self) -> usize {
        // Assume render resolution divides perfectly into output resolution.
        self.render_resolution / self.output_resolution
    }

    pub fn rotation_basis(&self) -> Mat3 {
        let b = &self.rotation_basis;
        Mat3::new(
            b[0][0], b[0][1], b[0][2],
            b[1][0], b[1][1], b[1][2],
            b[2][0], b[2][1], b[2][2],
        )
    }

    pub fn light_direction(&self) -> Vec3 {
        Vec3::from(self.light_direction).normalize()
    }

    pub fn face_colour(&self) -> Rgba {
        Rgba::from(self.face_colour)
    }

    pub fn outline_colour(&self) -> Rgba {
        Rgba::from(self.outline_colour)
    }

    pub fn ray_colour(&self) -> Rgba {
        Rgba::from(self.ray_colour)
    }

    /// Number of faces a closed triangulated sphere with `vertex_count`
    /// vertices has (Euler: F = 2V - 4).
    pub fn expected_face_count(&self) -> usize {
        2 * self.vertex_count - 4
    }
}

impl Default for Spec {
    fn default() -> Self {
        Self::new_example()
    }
}
