use core::fmt;

use bo_contour::{Backlog, Turn, find_start, step};
use bo_core::ImageViewMut;

use crate::border::{SampleOutcome, render_border};
use crate::context::RenderContext;
use crate::settings::RenderSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineError {
    InvalidDimensions { width: usize, height: usize },
    SizeMismatch { expected: usize, actual: usize },
    NoStartPoint,
    IterationCapExceeded { steps: usize },
    ContourTooShort { steps: usize, window: usize },
}

impl fmt::Display for OutlineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid dimensions {width}x{height}")
            }
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::NoStartPoint => write!(f, "no start point found"),
            Self::IterationCapExceeded { steps } => write!(f, "aborted after {steps} steps"),
            Self::ContourTooShort { steps, window } => {
                write!(f, "contour of {steps} steps is shorter than the {window}-point window")
            }
        }
    }
}

impl std::error::Error for OutlineError {}

impl From<bo_core::Error> for OutlineError {
    fn from(err: bo_core::Error) -> Self {
        match err {
            bo_core::Error::SizeMismatch { expected, actual } => {
                Self::SizeMismatch { expected, actual }
            }
            bo_core::Error::InvalidDimensions { width, height } => {
                Self::InvalidDimensions { width, height }
            }
        }
    }
}

/// What one successful pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutlineReport {
    /// Steps needed to return to the start pose.
    pub contour_len: usize,
    /// Total tracer steps over both stages.
    pub steps: usize,
    pub rendered_points: usize,
    /// Samples dropped for a zero or outward normal.
    pub skipped_points: usize,
    /// Pixel writes that won the distance arbitration.
    pub pixel_writes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// First revolution: capture snapshots and seed distances.
    Scanning,
    /// Second revolution: paint the smoothed samples.
    Rendering,
}

/// Renders the bevel into a row-major `width x height` buffer in place.
///
/// On `InvalidDimensions`, `SizeMismatch` and `NoStartPoint` the buffer is
/// untouched. On `IterationCapExceeded` and `ContourTooShort` whatever was
/// painted before the abort is kept.
pub fn outline(
    img: &mut [u32],
    width: usize,
    height: usize,
    settings: &RenderSettings,
) -> Result<OutlineReport, OutlineError> {
    let mut view = ImageViewMut::from_slice_mut(width, height, img)?;
    outline_view(&mut view, settings)
}

pub fn outline_view(
    img: &mut ImageViewMut<'_, u32>,
    settings: &RenderSettings,
) -> Result<OutlineReport, OutlineError> {
    let Some(start) = find_start(&img.as_view()) else {
        log::warn!("no start point found, aborting");
        return Err(OutlineError::NoStartPoint);
    };

    let border_width = settings.effective_border_width();
    let mut ctx = RenderContext::new(img.width(), img.height());
    let mut backlog = Backlog::new(2 * border_width, start);
    let mut stage = Stage::Scanning;
    let mut report = OutlineReport::default();
    let mut cursor = start;

    for n in 1..=settings.max_steps {
        let next = step(&img.as_view(), cursor);
        cursor = next.point;
        backlog.push(cursor);
        report.steps = n;

        match stage {
            Stage::Scanning => {
                ctx.seed_footprint(img.data(), cursor, border_width, next.turn == Turn::Left);
                if cursor == start {
                    report.contour_len = n;
                    stage = Stage::Rendering;
                    log::debug!("contour closed after {n} steps, rendering");
                }
            }
            Stage::Rendering => {
                // The window is valid only after `capacity` tracer steps.
                if n < backlog.capacity() {
                    log::warn!(
                        "contour of {} steps cannot fill a {}-point window, aborting",
                        report.contour_len,
                        backlog.capacity()
                    );
                    return Err(OutlineError::ContourTooShort {
                        steps: report.contour_len,
                        window: backlog.capacity(),
                    });
                }

                match render_border(&mut ctx, img, &backlog, settings) {
                    SampleOutcome::Painted(writes) => {
                        report.rendered_points += 1;
                        report.pixel_writes += writes;
                    }
                    SampleOutcome::Degenerate => {
                        report.skipped_points += 1;
                        log::trace!("skipping degenerate sample at {:?}", backlog.center());
                    }
                }

                if cursor.same_position(&start) {
                    log::debug!("outline done: {report:?}");
                    return Ok(report);
                }
            }
        }
    }

    log::warn!("aborted after {} steps", settings.max_steps);
    Err(OutlineError::IterationCapExceeded {
        steps: settings.max_steps,
    })
}
