//! Getting images in and out. Everything in here is a thin shim around
//! the `image` crate; the rest of the crate only sees `Texture`s and
//! `PixelBuffer`s of `[0, 1]` floats.

use std::path::Path;

use image::{ImageBuffer, Rgba as ImageRgba, RgbaImage};

use crate::error::Result;
use crate::render::{PixelBuffer, Texture};
use crate::types::*;

/// Decode any image the `image` crate understands into a texture.
///
/// Fails with `MalformedTexture` if it's empty or not square.
pub fn load_texture<P: AsRef<Path>>(path: P) -> Result<Texture> {
    let image = image::open(path)?.to_rgba32f();
    let (width, height) = image.dimensions();
    let texels = image
        .pixels()
        .map(|p| Rgba::new(p[0].into(), p[1].into(), p[2].into(), p[3].into()))
        .collect();
    Texture::from_dimensions(width as usize, height as usize, texels)
}

/// Quantize to 8 bits per channel. Columns become x, rows become y.
pub fn to_rgba8(buffer: &PixelBuffer) -> RgbaImage {
    ImageBuffer::from_fn(buffer.cols() as u32, buffer.rows() as u32, |x, y| {
        let p = buffer[(y as usize, x as usize)];
        ImageRgba([quantize(p.x), quantize(p.y), quantize(p.z), quantize(p.w)])
    })
}

pub fn save_buffer<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> Result<()> {
    to_rgba8(buffer).save(path)?;
    Ok(())
}

fn quantize(v: Real) -> u8 {
    (v.max(0.0).min(1.0) * 255.0).round() as u8
}
