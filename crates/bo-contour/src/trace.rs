use core::fmt;

use bo_core::{Direction, ImageView, Vec2i, is_opaque};

use crate::point::{BorderPoint, Turn};

/// Step cap after which a contour is considered non-closing.
pub const DEFAULT_MAX_STEPS: usize = 200_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    NoStartPoint,
    IterationCapExceeded { steps: usize },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoStartPoint => write!(f, "no opaque pixel on the center column"),
            Self::IterationCapExceeded { steps } => {
                write!(f, "contour did not close within {steps} steps")
            }
        }
    }
}

impl std::error::Error for TraceError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceStep {
    pub point: BorderPoint,
    pub turn: Turn,
}

fn opaque_at(img: &ImageView<'_, u32>, p: Vec2i) -> bool {
    img.get(p.x, p.y).is_some_and(|&px| is_opaque(px))
}

/// First opaque pixel on the center column, scanning from the top.
pub fn find_start(img: &ImageView<'_, u32>) -> Option<BorderPoint> {
    let x = (img.width() / 2) as isize;
    (0..img.height() as isize)
        .find(|&y| opaque_at(img, Vec2i::new(x, y)))
        .map(|y| BorderPoint::new(x, y, Direction::Right))
}

/// Advances the cursor by one wall-following step.
pub fn step(img: &ImageView<'_, u32>, cursor: BorderPoint) -> TraceStep {
    let left = cursor.dir.left();

    let diagonal = cursor.pos() + cursor.dir.unit() + left.unit();
    if opaque_at(img, diagonal) {
        return TraceStep {
            point: BorderPoint::new(diagonal.x, diagonal.y, left),
            turn: Turn::Left,
        };
    }

    let ahead = cursor.offset(cursor.dir, 1);
    if opaque_at(img, ahead) {
        return TraceStep {
            point: BorderPoint::new(ahead.x, ahead.y, cursor.dir),
            turn: Turn::Straight,
        };
    }

    // At most four pivots bring the cursor back to its own pose.
    TraceStep {
        point: BorderPoint::new(cursor.x, cursor.y, cursor.dir.right()),
        turn: Turn::Right,
    }
}

/// Endless iterator of tracer steps starting from `cursor`.
#[derive(Debug, Clone)]
pub struct ContourTracer<'a> {
    img: ImageView<'a, u32>,
    cursor: BorderPoint,
}

impl<'a> ContourTracer<'a> {
    pub fn new(img: ImageView<'a, u32>, cursor: BorderPoint) -> Self {
        Self { img, cursor }
    }

    pub fn from_start(img: ImageView<'a, u32>) -> Option<Self> {
        let start = find_start(&img)?;
        Some(Self::new(img, start))
    }

    pub fn cursor(&self) -> BorderPoint {
        self.cursor
    }
}

impl Iterator for ContourTracer<'_> {
    type Item = TraceStep;

    fn next(&mut self) -> Option<Self::Item> {
        let s = step(&self.img, self.cursor);
        self.cursor = s.point;
        Some(s)
    }
}

/// One full revolution of the tracer. The last step lands on `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contour {
    pub start: BorderPoint,
    pub steps: Vec<TraceStep>,
}

impl Contour {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = BorderPoint> + '_ {
        self.steps.iter().map(|s| s.point)
    }

    /// Right turns minus left turns, in quarter turns.
    pub fn net_turning(&self) -> i32 {
        self.steps.iter().map(|s| s.turn.quarter_turns()).sum()
    }

    pub fn count_turns(&self, turn: Turn) -> usize {
        self.steps.iter().filter(|s| s.turn == turn).count()
    }
}

pub fn trace_closed_contour(
    img: &ImageView<'_, u32>,
    max_steps: usize,
) -> Result<Contour, TraceError> {
    let start = find_start(img).ok_or(TraceError::NoStartPoint)?;
    let mut steps = Vec::new();

    for s in ContourTracer::new(*img, start).take(max_steps) {
        steps.push(s);
        if s.point == start {
            log::debug!("contour closed after {} steps", steps.len());
            return Ok(Contour { start, steps });
        }
    }

    Err(TraceError::IterationCapExceeded { steps: max_steps })
}
