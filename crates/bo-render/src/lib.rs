//! Directional bevel rendering along the alpha contour of a packed image.
//!
//! One pass walks the contour twice:
//! 1. Scanning: every traced point snapshots the pixels of its footprint
//!    and seeds their distance with a placeholder.
//! 2. Rendering: the center of a `2 * border_width` backlog window is
//!    painted with an inverse-square brightness falloff, signed by how much
//!    its smoothed outward normal faces the light.
//!
//! Overlapping footprints are resolved through a per-pixel distance field:
//! a write happens only when it is strictly closer than the current owner,
//! and always starts from the snapshot, so results do not depend on how
//! often a pixel is visited.
//!
//! All scratch memory lives in a [`RenderContext`] owned by one call.

mod border;
mod context;
mod outline;
mod settings;

pub use border::{SampleOutcome, falloff, illumination_cosine, render_border, segment_normals};
pub use context::RenderContext;
pub use outline::{OutlineError, OutlineReport, outline, outline_view};
pub use settings::RenderSettings;
