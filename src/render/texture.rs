use crate::error::{Error, Result};
use crate::types::*;

/// Square image stamped onto every face.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    size: usize,
    texels: Vec<Rgba>,
}

impl Texture {
    /// `texels` is row-major, `size` × `size`.
    pub fn new(size: usize, texels: Vec<Rgba>) -> Result<Texture> {
        if size == 0 {
            return Err(Error::MalformedTexture("texture is empty".to_string()));
        }
        if texels.len() != size * size {
            return Err(Error::MalformedTexture(format!(
                "expected {} texels for a {}x{} texture; got {}",
                size * size,
                size,
                size,
                texels.len()
            )));
        }
        Ok(Texture { size, texels })
    }

    /// Build from `width` × `height` row-major texels, insisting that it's square.
    pub fn from_dimensions(width: usize, height: usize, texels: Vec<Rgba>) -> Result<Texture> {
        if width != height {
            return Err(Error::MalformedTexture(format!(
                "texture must be square; got {}x{}",
                width, height
            )));
        }
        Texture::new(width, texels)
    }

    /// Every texel the same colour.
    pub fn flat(size: usize, colour: Rgba) -> Result<Texture> {
        Texture::new(size, vec![colour; size * size])
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Look up a texel. Anything off the edge of the image
    /// is fully transparent rather than an error.
    pub fn texel(&self, row: i64, col: i64) -> Rgba {
        let size = self.size as i64;
        if row < 0 || col < 0 || row >= size || col >= size {
            return Rgba::zeros();
        }
        self.texels[row as usize * self.size + col as usize]
    }
}
