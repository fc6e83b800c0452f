use std::f64::consts::PI;

use rayon::prelude::*;
use slog::Logger;

use crate::error::Result;
use crate::render::{Frame, FrameRenderer, PixelBuffer, Texture};
use crate::solid::{Mesh, Rotator};
use crate::spec::Spec;
use crate::types::*;

/// Every frame of one full turn of the solid, side by side, left to right.
#[derive(Clone, Debug, PartialEq)]
pub struct SpriteSheet {
    frame_resolution: usize,
    frame_count: usize,
    buffer: PixelBuffer,
}

impl SpriteSheet {
    /// All transparent to start with.
    pub fn new(frame_resolution: usize, frame_count: usize) -> SpriteSheet {
        SpriteSheet {
            frame_resolution,
            frame_count,
            buffer: PixelBuffer::new(frame_resolution, frame_resolution * frame_count),
        }
    }

    pub fn frame_resolution(&self) -> usize {
        self.frame_resolution
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Panics if `index` is past the end, or `frame` is the wrong size.
    pub fn place(&mut self, index: usize, frame: &Frame) {
        assert!(index < self.frame_count, "No frame {} in a sheet of {}", index, self.frame_count);
        assert_eq!(self.frame_resolution, frame.rows());
        assert_eq!(self.frame_resolution, frame.cols());
        self.buffer.blit(frame, 0, index * self.frame_resolution);
    }

    pub fn frame(&self, index: usize) -> Frame {
        assert!(index < self.frame_count, "No frame {} in a sheet of {}", index, self.frame_count);
        self.buffer.window(
            0,
            index * self.frame_resolution,
            self.frame_resolution,
            self.frame_resolution,
        )
    }
}

/// Spins a mesh through one full turn, rendering a frame at each step.
pub struct Animator {
    log: Logger,
    frame_count: usize,
    output_resolution: usize,
    rotator: Rotator,
    renderer: FrameRenderer,
}

impl Animator {
    pub fn new(spec: &Spec, texture: Texture, parent_log: &Logger) -> Result<Animator> {
        let log = parent_log.new(o!("frames" => spec.frame_count));
        let renderer = FrameRenderer::new(spec, texture, &log)?;
        Ok(Animator {
            log,
            frame_count: spec.frame_count,
            output_resolution: spec.output_resolution,
            rotator: Rotator::from_spec(spec),
            renderer,
        })
    }

    /// Rotation for frame `index`; frames are evenly spaced over
    /// a full turn, and the last one stops one step short of it.
    pub fn angle(&self, index: usize) -> Real {
        index as Real * (2.0 * PI / self.frame_count as Real)
    }

    /// How far through the animation frame `index` is, in `[0, 1)`.
    pub fn progress(&self, index: usize) -> Real {
        index as Real / self.frame_count as Real
    }

    pub fn render_frame(&self, mesh: &Mesh, index: usize) -> Result<Frame> {
        let points = self.rotator.rotate(mesh.points(), self.angle(index));
        self.renderer
            .render(&points, mesh.faces(), self.progress(index))
    }

    pub fn assemble(&self, mesh: &Mesh) -> Result<SpriteSheet> {
        // Frames share nothing mutable, so render them all at once
        // and only put them in order at the end.
        let frames = (0..self.frame_count)
            .into_par_iter()
            .map(|index| self.render_frame(mesh, index))
            .collect::<Result<Vec<Frame>>>()?;

        let mut sheet = SpriteSheet::new(self.output_resolution, self.frame_count);
        for (index, frame) in frames.iter().enumerate() {
            sheet.place(index, frame);
        }
        info!(
            self.log,
            "Assembled sprite sheet";
            "rows" => sheet.buffer().rows(),
            "cols" => sheet.buffer().cols()
        );
        Ok(sheet)
    }
}

/// Render every frame of `mesh` spinning and tile them into one sheet.
pub fn assemble(mesh: &Mesh, spec: &Spec, texture: Texture, parent_log: &Logger) -> Result<SpriteSheet> {
    Animator::new(spec, texture, parent_log)?.assemble(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discard_log() -> Logger {
        Logger::root(slog::Discard, o!())
    }

    fn quick_spec() -> Spec {
        Spec {
            relax_iterations: 300,
            render_resolution: 32,
            output_resolution: 8,
            frame_count: 6,
            ..Spec::new_example()
        }
    }

    fn grey_texture() -> Texture {
        Texture::flat(16, Rgba::new(0.5, 0.5, 0.5, 1.0)).unwrap()
    }

    #[test]
    fn angles_and_progress_are_evenly_spaced() {
        let animator = Animator::new(&quick_spec(), grey_texture(), &discard_log()).unwrap();
        assert_eq!(0.0, animator.angle(0));
        assert_relative_eq!(animator.angle(3), PI, epsilon = 1e-12);
        assert_eq!(0.0, animator.progress(0));
        assert_relative_eq!(animator.progress(3), 0.5, epsilon = 1e-12);
        assert!(animator.progress(5) < 1.0);
    }

    #[test]
    fn sheet_tiles_frames_left_to_right() {
        let spec = quick_spec();
        let mesh = Mesh::generate(&spec, &discard_log()).unwrap();
        let animator = Animator::new(&spec, grey_texture(), &discard_log()).unwrap();
        let sheet = animator.assemble(&mesh).unwrap();

        assert_eq!(8, sheet.buffer().rows());
        assert_eq!(8 * 6, sheet.buffer().cols());
        for index in 0..6 {
            assert_eq!(animator.render_frame(&mesh, index).unwrap(), sheet.frame(index));
        }
        // The solid actually turns.
        assert_ne!(sheet.frame(0), sheet.frame(1));
    }

    #[test]
    fn place_and_read_back() {
        let mut sheet = SpriteSheet::new(2, 3);
        let frame = PixelBuffer::filled(2, 2, Rgba::new(1.0, 0.0, 0.0, 1.0));
        sheet.place(2, &frame);
        assert_eq!(frame, sheet.frame(2));
        assert_eq!(PixelBuffer::new(2, 2), sheet.frame(1));
    }

    #[test]
    #[should_panic]
    fn place_rejects_missing_frame() {
        let mut sheet = SpriteSheet::new(2, 3);
        sheet.place(3, &PixelBuffer::new(2, 2));
    }
}
