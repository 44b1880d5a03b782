use bo_core::{Direction, Vec2i};

/// Kind of heading change produced by one tracer step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Moved diagonally forward-left and turned left (concave corner).
    Left,
    /// Moved one step forward.
    Straight,
    /// Stayed in place and turned right (convex corner).
    Right,
}

impl Turn {
    /// Signed quarter turns, right positive.
    pub fn quarter_turns(self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Straight => 0,
            Self::Right => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderPoint {
    pub x: isize,
    pub y: isize,
    pub dir: Direction,
}

impl BorderPoint {
    pub fn new(x: isize, y: isize, dir: Direction) -> Self {
        Self { x, y, dir }
    }

    pub fn pos(&self) -> Vec2i {
        Vec2i::new(self.x, self.y)
    }

    pub fn same_position(&self, other: &BorderPoint) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Offset by `steps` units along `dir`.
    pub fn offset(&self, dir: Direction, steps: isize) -> Vec2i {
        self.pos() + dir.unit() * steps
    }
}
