//! Wall-following contour tracing on packed-pixel alpha masks.
//!
//! The tracer walks the boundary of the opaque region that touches the
//! vertical center column, keeping the shape on its right-hand side:
//! - [`find_start`] scans `x = width / 2` downward for the first opaque pixel
//!   and heads right from there.
//! - [`step`] probes forward-left, then forward, and otherwise pivots right in
//!   place. Each call yields one [`TraceStep`].
//! - [`trace_closed_contour`] repeats [`step`] until the full pose
//!   `(x, y, direction)` returns to the start.
//!
//! Alpha is a binary signal here: any nonzero alpha is inside. Only a single
//! closed contour is followed; holes and disconnected regions are ignored.
//!
//! [`Backlog`] is the fixed-size ring of recent points used downstream for
//! tangent smoothing.

mod backlog;
mod point;
mod trace;

pub use backlog::Backlog;
pub use point::{BorderPoint, Turn};
pub use trace::{
    Contour, ContourTracer, DEFAULT_MAX_STEPS, TraceError, TraceStep, find_start, step,
    trace_closed_contour,
};
