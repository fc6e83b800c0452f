//! Software rendering of the solid: rasterizing projected triangles,
//! shading and texturing them over a procedural background, and
//! box-filtering the result down to frame size.

mod background;
mod frame;
mod pixel_buffer;
mod raster;
mod texture;

pub use self::background::{background, ray_alpha};
pub use self::frame::{face_normal, inset, project, texture_transform, FrameRenderer, Lighting};
pub use self::pixel_buffer::{Frame, PixelBuffer};
pub use self::raster::{cross, fill_mask, normalize_winding, Mask, PixelGrid};
pub use self::texture::Texture;

#[cfg(test)]
mod tests;
