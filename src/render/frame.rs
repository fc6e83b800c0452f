use slog::Logger;

use super::{background, fill_mask, normalize_winding, Frame, Mask, PixelBuffer, PixelGrid, Texture};
use crate::error::{Error, Result};
use crate::solid::{Face, FaceSet, PointSet};
use crate::spec::Spec;
use crate::types::*;

/// Draws one rotated solid, over its background, into one frame.
///
/// Faces are drawn in whatever order the face set iterates in, and later
/// faces simply overwrite earlier ones where they overlap. There is no depth
/// buffer; back-face culling is all that keeps the far side hidden, which is
/// enough for a convex solid.
pub struct FrameRenderer {
    log: Logger,
    spec: Spec,
    texture: Texture,
    grid: PixelGrid,
    light: Vec3,
}

/// How one face is lit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    /// Multiplier for face and texture colour, in `[ambient, 1]`.
    pub shade: Real,
    /// How far to blend towards white.
    pub specular: Real,
}

impl FrameRenderer {
    pub fn new(spec: &Spec, texture: Texture, parent_log: &Logger) -> Result<FrameRenderer> {
        spec.validate()?;
        Ok(FrameRenderer {
            log: parent_log.new(o!("texture_size" => texture.size())),
            spec: spec.clone(),
            texture,
            grid: PixelGrid::new(spec.render_resolution),
            light: spec.light_direction(),
        })
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// Render at full resolution, then flip and box-filter
    /// down to output resolution.
    pub fn render(&self, points: &PointSet, faces: &FaceSet, progress: Real) -> Result<Frame> {
        let image = self.render_full_resolution(points, faces, progress)?;
        Ok(image.flip_columns().downsample(self.spec.block_size()))
    }

    /// Everything up to, but not including, the flip and downsample.
    pub fn render_full_resolution(
        &self,
        points: &PointSet,
        faces: &FaceSet,
        progress: Real,
    ) -> Result<PixelBuffer> {
        let mut image = background(&self.grid, progress, &self.spec);
        let mut drawn = 0;
        for face in faces {
            if self.draw_face(&mut image, points, *face)? {
                drawn += 1;
            }
        }
        debug!(
            self.log,
            "Rendered frame";
            "progress" => progress,
            "faces_drawn" => drawn,
            "faces_culled" => faces.len() - drawn
        );
        Ok(image)
    }

    pub fn lighting(&self, normal: &Vec3) -> Lighting {
        let lit = self.light.dot(normal);
        // Specular comes from the raw dot product, before the
        // ambient floor is applied.
        let specular = if lit > 0.0 { lit.powi(3) } else { 0.0 };
        let ambient = self.spec.ambient;
        let shade = (lit + 1.0) / 2.0 * (1.0 - ambient) + ambient;
        Lighting { shade, specular }
    }

    // Returns whether the face was drawn (i.e., not culled).
    fn draw_face(&self, image: &mut PixelBuffer, points: &PointSet, face: Face) -> Result<bool> {
        let [a, b, c] = face.indices();
        let corners = [points[a], points[b], points[c]];
        let normal = face_normal(&corners)?;
        if normal.z < 0.0 {
            // Facing away from the viewer.
            return Ok(false);
        }
        let Lighting { shade, specular } = self.lighting(&normal);

        let outer = normalize_winding([project(&corners[0]), project(&corners[1]), project(&corners[2])]);
        let outer_mask = fill_mask(outer, &self.grid);
        let outline = self.spec.outline_colour();
        for pixel in outer_mask.iter() {
            image[pixel] = outline;
        }

        // Filling a slightly smaller triangle over the top
        // leaves a thin outline around the edge.
        let inner = inset(outer, self.spec.inset);
        let inner_mask = fill_mask(inner, &self.grid);
        let face_colour = self.spec.face_colour();
        let fill = Rgba::new(
            face_colour.x * shade,
            face_colour.y * shade,
            face_colour.z * shade,
            face_colour.w,
        );
        for pixel in inner_mask.iter() {
            image[pixel] = fill;
        }

        self.stamp_texture(image, inner, &inner_mask, shade);

        let white = Rgba::repeat(specular);
        for pixel in outer_mask.iter() {
            image[pixel] = white + image[pixel] * (1.0 - specular);
        }
        Ok(true)
    }

    // Map the (already wound) triangle onto an equilateral triangle in
    // texture space with `p1` at the texture origin, and copy across every
    // channel that comes out positive.
    fn stamp_texture(&self, image: &mut PixelBuffer, triangle: [Pt2; 3], mask: &Mask, shade: Real) {
        let transform = match texture_transform(triangle, self.texture.size() as Real * self.spec.texture_scale) {
            Some(transform) => transform,
            // No area; nothing to stamp onto.
            None => return,
        };
        let origin = triangle[0];
        for (row, col) in mask.iter() {
            let t = transform * (self.grid.coord(row, col) - origin);
            let texel = self.texture.texel(t.x.round() as i64, t.y.round() as i64);
            let shaded = Rgba::new(texel.x * shade, texel.y * shade, texel.z * shade, texel.w);
            let pixel = &mut image[(row, col)];
            for channel in 0..4 {
                if shaded[channel] > 0.0 {
                    pixel[channel] = shaded[channel];
                }
            }
        }
    }
}

/// Outward normal of a face on a sphere centred at the origin:
/// the direction of the mean of its corners.
pub fn face_normal(corners: &[Pt3; 3]) -> Result<Vec3> {
    let mean = (corners[0].coords + corners[1].coords + corners[2].coords) / 3.0;
    mean.try_normalize(0.0).ok_or_else(|| {
        Error::DegenerateGeometry(format!("face {:?} has no outward direction", corners))
    })
}

/// Orthographic projection along z.
pub fn project(p: &Pt3) -> Pt2 {
    Pt2::new(p.x, p.y)
}

/// Shrink a triangle towards its centroid by `scale`.
pub fn inset(triangle: [Pt2; 3], scale: Real) -> [Pt2; 3] {
    let [p1, p2, p3] = triangle;
    let middle = Pt2::from((p1.coords + p2.coords + p3.coords) / 3.0);
    [
        middle + (p1 - middle) * scale,
        middle + (p2 - middle) * scale,
        middle + (p3 - middle) * scale,
    ]
}

/// Linear map from offsets relative to `p1` into texel (row, col) space,
/// taking `p2` to `size · (1, 1/2)` and `p3` to `size · (0, √3/2)`.
///
/// `None` if the triangle has no area.
pub fn texture_transform(triangle: [Pt2; 3], size: Real) -> Option<Mat2> {
    let [p1, p2, p3] = triangle;
    let edges = Mat2::from_columns(&[p2 - p1, p3 - p1]);
    let target = Mat2::new(1.0, 0.0, 0.5, 3.0f64.sqrt() / 2.0) * size;
    edges.try_inverse().map(|inverse| target * inverse)
}
