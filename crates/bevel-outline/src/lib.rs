//! Umbrella crate for the `bevel-outline` workspace.
//!
//! Traces the opaque shape of a packed `u32` image (alpha in bits 24-31) and
//! renders a directionally lit bevel along its border, in place.
//!
//! ```
//! use bevel_outline::{RenderSettings, fill, outline};
//!
//! let (w, h) = (32, 32);
//! let mut img = vec![0u32; w * h];
//! for y in 8..24 {
//!     fill(0xff80_8080, &mut img[y * w + 8..y * w + 24]);
//! }
//!
//! let settings = RenderSettings { border_width: 3, ..RenderSettings::default() };
//! let report = outline(&mut img, w, h, &settings).expect("closed contour");
//! assert_eq!(report.contour_len, 64);
//! ```

pub use bo_contour::*;
pub use bo_core::*;
pub use bo_render::*;

/// [`outline`] with [`RenderSettings::for_image`] defaults: border width
/// `max(width, height) / 20`, light from below.
pub fn outline_with_defaults(
    img: &mut [u32],
    width: usize,
    height: usize,
) -> Result<OutlineReport, OutlineError> {
    outline(img, width, height, &RenderSettings::for_image(width, height))
}
