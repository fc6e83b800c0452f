/*!
# d20kit

**d20kit** draws a spinning twenty-sided die into a sprite sheet, entirely on the CPU.

It never writes down an icosahedron. Instead it:

  - Scatters a handful of random points, then lets them push each other apart
    over the surface of the unit sphere until they settle into (nearly) regular positions.
  - Works out which points make up each triangular face just from which points are
    near which others.
  - Spins the result about a tilted axis and rasterizes each visible face, shaded,
    outlined, and with a texture stamped on it, over an animated ray-burst background.

Rendering is supersampled and box-filtered down, and all the frames of one full turn
are laid out side by side in a single image.


## High-level design

Data only ever flows one way:

```text
Gen -> Mesh (points, neighbours, faces) -> for each frame { Rotator -> FrameRenderer } -> SpriteSheet
```

The mesh is built once; every frame rotates a copy of its points.
All of the knobs live in [`Spec`](spec/struct.Spec.html).
*/

extern crate nalgebra as na;
#[macro_use]
extern crate slog;
#[macro_use]
extern crate itertools;
#[macro_use]
extern crate serde_derive;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod animation;
pub mod error;
pub mod image_io;
pub mod render;
pub mod solid;
pub mod spec;
pub mod types;

pub use crate::error::{Error, Result};
pub use crate::spec::Spec;

#[cfg(test)]
mod integration_tests;
