use super::*;
use crate::error::Error;
use crate::solid::{Face, FaceSet, PointSet};
use crate::spec::Spec;
use crate::types::*;

fn discard_log() -> slog::Logger {
    slog::Logger::root(slog::Discard, o!())
}

fn small_spec() -> Spec {
    Spec {
        render_resolution: 64,
        output_resolution: 8,
        ..Spec::new_example()
    }
}

fn grey() -> Rgba {
    Rgba::new(0.5, 0.5, 0.5, 1.0)
}

// One big triangle whose corners all sit at height `z`
// (flip the sign to face away from the viewer).
fn single_face(z: Real) -> (PointSet, FaceSet) {
    let r = (1.0 - z * z).sqrt();
    let corner = |theta: Real| Pt3::new(r * theta.cos(), r * theta.sin(), z);
    let third = 2.0 * std::f64::consts::PI / 3.0;
    let points = PointSet::new(vec![corner(0.0), corner(third), corner(2.0 * third)]);
    let mut faces = FaceSet::new();
    faces.insert(Face::new(0, 1, 2));
    (points, faces)
}

// Centre of the full-resolution grid; lands inside `single_face`.
fn middle(spec: &Spec) -> (usize, usize) {
    let m = spec.render_resolution / 2;
    (m, m)
}

#[test]
fn normal_points_away_from_origin() {
    let normal = face_normal(&[
        Pt3::new(1.0, 0.0, 0.0),
        Pt3::new(0.0, 1.0, 0.0),
        Pt3::new(0.0, 0.0, 1.0),
    ])
    .unwrap();
    let third = 1.0 / 3.0f64.sqrt();
    assert_relative_eq!(normal, Vec3::new(third, third, third), epsilon = 1e-12);
}

#[test]
fn normal_through_origin_is_degenerate() {
    let result = face_normal(&[
        Pt3::new(1.0, 0.0, 0.0),
        Pt3::new(-1.0, 0.0, 0.0),
        Pt3::new(0.0, 0.0, 0.0),
    ]);
    assert!(matches!(result, Err(Error::DegenerateGeometry(_))));
}

#[test]
fn lighting_has_ambient_floor() {
    let spec = small_spec();
    let renderer = FrameRenderer::new(&spec, Texture::flat(4, grey()).unwrap(), &discard_log()).unwrap();
    let towards = renderer.lighting(&spec.light_direction());
    assert_relative_eq!(towards.shade, 1.0, epsilon = 1e-12);
    assert_relative_eq!(towards.specular, 1.0, epsilon = 1e-12);
    let away = renderer.lighting(&-spec.light_direction());
    assert_relative_eq!(away.shade, spec.ambient, epsilon = 1e-12);
    assert_eq!(0.0, away.specular);
}

#[test]
fn inset_shrinks_about_centroid() {
    let triangle = [Pt2::new(0.0, 0.0), Pt2::new(3.0, 0.0), Pt2::new(0.0, 3.0)];
    assert_eq!(triangle, inset(triangle, 1.0));
    let half = inset(triangle, 0.5);
    assert_relative_eq!(half[0], Pt2::new(0.5, 0.5), epsilon = 1e-12);
    assert_relative_eq!(half[1], Pt2::new(2.0, 0.5), epsilon = 1e-12);
}

#[test]
fn texture_transform_lays_out_equilateral_triangle() {
    let triangle = [Pt2::new(0.2, 0.1), Pt2::new(0.7, 0.3), Pt2::new(0.1, 0.6)];
    let transform = texture_transform(triangle, 64.0).unwrap();
    let [p1, p2, p3] = triangle;
    assert_relative_eq!(transform * (p2 - p1), Vec2::new(64.0, 32.0), epsilon = 1e-9);
    assert_relative_eq!(transform * (p3 - p1), Vec2::new(0.0, 32.0 * 3.0f64.sqrt()), epsilon = 1e-9);
}

#[test]
fn texture_transform_of_flat_triangle_is_none() {
    let line = [Pt2::new(0.0, 0.0), Pt2::new(1.0, 1.0), Pt2::new(2.0, 2.0)];
    assert_eq!(None, texture_transform(line, 64.0));
}

#[test]
fn front_face_is_textured_and_lit() {
    let spec = small_spec();
    let renderer = FrameRenderer::new(&spec, Texture::flat(16, grey()).unwrap(), &discard_log()).unwrap();
    let (points, faces) = single_face(0.6);
    let image = renderer.render_full_resolution(&points, &faces, 0.0).unwrap();

    let Lighting { shade, specular } = renderer.lighting(&Vec3::z());
    let expected = Rgba::repeat(specular) + Rgba::new(0.5 * shade, 0.5 * shade, 0.5 * shade, 1.0) * (1.0 - specular);
    assert_relative_eq!(image[middle(&spec)], expected, epsilon = 1e-12);
}

#[test]
fn transparent_texture_leaves_face_colour() {
    let spec = small_spec();
    let renderer = FrameRenderer::new(&spec, Texture::flat(16, Rgba::zeros()).unwrap(), &discard_log()).unwrap();
    let (points, faces) = single_face(0.6);
    let image = renderer.render_full_resolution(&points, &faces, 0.0).unwrap();

    let Lighting { shade, specular } = renderer.lighting(&Vec3::z());
    let face = spec.face_colour();
    let fill = Rgba::new(face.x * shade, face.y * shade, face.z * shade, face.w);
    let expected = Rgba::repeat(specular) + fill * (1.0 - specular);
    assert_relative_eq!(image[middle(&spec)], expected, epsilon = 1e-12);
}

#[test]
fn outline_surrounds_fill() {
    // A fat inset so there is definitely a visible border.
    let spec = Spec {
        inset: 0.5,
        ..small_spec()
    };
    let renderer = FrameRenderer::new(&spec, Texture::flat(16, Rgba::zeros()).unwrap(), &discard_log()).unwrap();
    let (points, faces) = single_face(0.6);
    let image = renderer.render_full_resolution(&points, &faces, 0.0).unwrap();

    let outer = normalize_winding([project(&points[0]), project(&points[1]), project(&points[2])]);
    let outer_mask = fill_mask(outer, renderer.grid());
    let inner_mask = fill_mask(inset(outer, spec.inset), renderer.grid());
    let border: Vec<_> = outer_mask.iter().filter(|&(r, c)| !inner_mask.get(r, c)).collect();
    assert!(!border.is_empty());

    let Lighting { specular, .. } = renderer.lighting(&Vec3::z());
    let expected = Rgba::repeat(specular) + spec.outline_colour() * (1.0 - specular);
    for pixel in border {
        assert_relative_eq!(image[pixel], expected, epsilon = 1e-12);
    }
}

#[test]
fn back_face_is_culled() {
    let spec = small_spec();
    let renderer = FrameRenderer::new(&spec, Texture::flat(16, grey()).unwrap(), &discard_log()).unwrap();
    let (points, faces) = single_face(-0.6);
    let image = renderer.render_full_resolution(&points, &faces, 0.25).unwrap();
    assert_eq!(background(renderer.grid(), 0.25, &spec), image);
}

#[test]
fn render_downsamples_to_output_resolution() {
    let spec = small_spec();
    let renderer = FrameRenderer::new(&spec, Texture::flat(16, grey()).unwrap(), &discard_log()).unwrap();
    let (points, faces) = single_face(0.6);
    let full = renderer.render_full_resolution(&points, &faces, 0.0).unwrap();
    let frame = renderer.render(&points, &faces, 0.0).unwrap();
    assert_eq!(8, frame.rows());
    assert_eq!(8, frame.cols());
    assert_eq!(full.flip_columns().downsample(8), frame);
}

#[test]
fn renderer_rejects_invalid_spec() {
    let spec = Spec {
        output_resolution: 0,
        ..small_spec()
    };
    assert!(FrameRenderer::new(&spec, Texture::flat(4, grey()).unwrap(), &discard_log()).is_err());
}
