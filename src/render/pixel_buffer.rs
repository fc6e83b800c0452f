use std::ops::{Index, IndexMut};

use crate::types::*;

/// Row-major grid of RGBA samples.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    rows: usize,
    cols: usize,
    pixels: Vec<Rgba>,
}

/// A finished, downsampled buffer at output resolution.
pub type Frame = PixelBuffer;

impl PixelBuffer {
    /// Fully transparent black.
    pub fn new(rows: usize, cols: usize) -> PixelBuffer {
        PixelBuffer::filled(rows, cols, Rgba::zeros())
    }

    pub fn filled(rows: usize, cols: usize, colour: Rgba) -> PixelBuffer {
        PixelBuffer {
            rows,
            cols,
            pixels: vec![colour; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Rgba> {
        if row < self.rows && col < self.cols {
            self.pixels.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Mirror left-to-right, i.e., reverse the order of the columns.
    pub fn flip_columns(&self) -> PixelBuffer {
        let mut flipped = self.clone();
        for row in flipped.pixels.chunks_mut(self.cols) {
            row.reverse();
        }
        flipped
    }

    /// Box-filter down by averaging each `block` × `block` square into one pixel.
    ///
    /// Panics if either dimension isn't a multiple of `block`.
    pub fn downsample(&self, block: usize) -> PixelBuffer {
        assert!(block > 0, "Block size must be non-zero");
        assert!(
            self.rows % block == 0 && self.cols % block == 0,
            "{}x{} buffer doesn't divide into {}x{} blocks",
            self.rows,
            self.cols,
            block,
            block
        );
        let mut out = PixelBuffer::new(self.rows / block, self.cols / block);
        let weight = 1.0 / (block * block) as Real;
        for (row, col) in iproduct!(0..self.rows, 0..self.cols) {
            out[(row / block, col / block)] += self[(row, col)] * weight;
        }
        out
    }

    /// Copy all of `src` into this buffer with its top-left corner at
    /// (`row_offset`, `col_offset`).
    ///
    /// Panics if `src` doesn't fit.
    pub fn blit(&mut self, src: &PixelBuffer, row_offset: usize, col_offset: usize) {
        assert!(
            row_offset + src.rows <= self.rows && col_offset + src.cols <= self.cols,
            "Can't fit {}x{} buffer at ({}, {}) in {}x{} buffer",
            src.rows,
            src.cols,
            row_offset,
            col_offset,
            self.rows,
            self.cols
        );
        for (src_row, dest_row) in src
            .pixels
            .chunks(src.cols)
            .zip(self.pixels.chunks_mut(self.cols).skip(row_offset))
        {
            dest_row[col_offset..col_offset + src.cols].copy_from_slice(src_row);
        }
    }

    /// Copy out a `rows` × `cols` window starting at (`row_offset`, `col_offset`).
    pub fn window(&self, row_offset: usize, col_offset: usize, rows: usize, cols: usize) -> PixelBuffer {
        assert!(row_offset + rows <= self.rows && col_offset + cols <= self.cols);
        let mut out = PixelBuffer::new(rows, cols);
        for (row, col) in iproduct!(0..rows, 0..cols) {
            out[(row, col)] = self[(row_offset + row, col_offset + col)];
        }
        out
    }
}

impl Index<(usize, usize)> for PixelBuffer {
    type Output = Rgba;

    fn index(&self, (row, col): (usize, usize)) -> &Rgba {
        debug_assert!(row < self.rows && col < self.cols);
        &self.pixels[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for PixelBuffer {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Rgba {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.pixels[row * self.cols + col]
    }
}
