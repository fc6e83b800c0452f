use std::collections::HashSet;

use crate::animation::Animator;
use crate::render::{face_normal, fill_mask, normalize_winding, project, PixelGrid, Texture};
use crate::solid::{Mesh, PointSet, Rotator};
use crate::spec::Spec;
use crate::types::*;

// Output pixels whose source block overlaps any front-facing face,
// taking the column flip into account.
fn covered_output_pixels(points: &PointSet, mesh: &Mesh, grid: &PixelGrid, block: usize) -> HashSet<(usize, usize)> {
    let last_col = grid.resolution() - 1;
    let mut covered = HashSet::new();
    for face in mesh.faces() {
        let [a, b, c] = face.indices();
        let corners = [points[a], points[b], points[c]];
        if face_normal(&corners).unwrap().z < 0.0 {
            continue;
        }
        let triangle = normalize_winding([project(&corners[0]), project(&corners[1]), project(&corners[2])]);
        for (row, col) in fill_mask(triangle, grid).iter() {
            covered.insert((row / block, (last_col - col) / block));
        }
    }
    covered
}

// The full-size reference animation: 12 vertices, 1000 relaxation steps,
// 120 frames rendered at 256 and filtered down to 32.
#[test]
fn reference_sprite_sheet() {
    // Log to nowhere.
    let log = slog::Logger::root(slog::Discard, o!("d20kit_version" => env!("CARGO_PKG_VERSION")));
    let spec = Spec::new_example();
    let texture = Texture::flat(64, Rgba::new(0.5, 0.5, 0.5, 1.0)).unwrap();

    let mesh = Mesh::generate(&spec, &log).unwrap();
    assert_eq!(20, mesh.faces().len());

    let animator = Animator::new(&spec, texture, &log).unwrap();
    let sheet = animator.assemble(&mesh).unwrap();
    let buffer = sheet.buffer();
    assert_eq!(32, buffer.rows());
    assert_eq!(32 * 120, buffer.cols());

    // Nothing ever leaves [0, 1], give or take rounding in the box filter.
    assert!(buffer
        .pixels()
        .iter()
        .all(|p| p.iter().all(|&v| v >= 0.0 && v <= 1.0 + 1e-12)));

    // The far corners only ever see background, and the
    // background fades out completely by then.
    for index in 0..sheet.frame_count() {
        let frame = sheet.frame(index);
        assert_eq!(0.0, frame[(0, 0)].w);
        assert_eq!(0.0, frame[(31, 31)].w);
    }

    // Somewhere the rays are neither fully there nor fully gone, even
    // well away from the solid. Only count output pixels that no visible
    // face touches, so edges blended with the background don't count.
    let rotator = Rotator::from_spec(&spec);
    let grid = PixelGrid::new(spec.render_resolution);
    let block = spec.block_size();
    let mut partial = 0;
    for index in 0..sheet.frame_count() {
        let points = rotator.rotate(mesh.points(), animator.angle(index));
        let covered = covered_output_pixels(&points, &mesh, &grid, block);
        let frame = sheet.frame(index);
        partial += iproduct!(0..frame.rows(), 0..frame.cols())
            .filter(|&(row, col)| !covered.contains(&(row, col)))
            .filter(|&(row, col)| frame[(row, col)].w > 0.0 && frame[(row, col)].w < 1.0)
            .count();
    }
    assert!(partial > 0);

    // The solid always covers the middle of the frame (its projection
    // contains a disc about as big as its inscribed sphere), so the middle
    // output pixels are as opaque as the faces and outlines drawn there.
    for index in 0..sheet.frame_count() {
        let frame = sheet.frame(index);
        for &(row, col) in &[(15, 15), (15, 16), (16, 15), (16, 16)] {
            assert_relative_eq!(frame[(row, col)].w, spec.face_colour[3], epsilon = 1e-12);
        }
    }
}
