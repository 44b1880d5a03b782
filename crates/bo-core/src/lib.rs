//! Foundational primitives for alpha-contour bevel rendering.
//!
//! ## Pixel Packing
//! Pixels are packed `u32` values. Bits 0-7, 8-15 and 16-23 hold the three
//! color channels, bits 24-31 hold alpha. A pixel is inside the shape iff its
//! alpha is nonzero.
//!
//! ## Grid Coordinates
//! Images are row-major and contiguous, `width * height` elements. Signed
//! coordinates are accepted everywhere a probe may step off the grid;
//! [`ImageView::index`] returns `None` for anything outside.
//!
//! ## Directions
//! [`Direction`] encodes the four unit steps `(1,0)`, `(0,1)`, `(-1,0)`,
//! `(0,-1)` with y growing downward, so incrementing a direction is a
//! clockwise quarter turn on screen.

mod error;
mod geom;
mod image;
mod pixel;

pub use error::Error;
pub use geom::{Direction, Vec2f, Vec2i, rotate, rotate_f32, unit_dx, unit_dy};
pub use image::{Image, ImageView, ImageViewMut, linear_index};
pub use pixel::{ALPHA_MASK, COLOR_MASK, adjust_pixel, alpha, fill, is_opaque};
