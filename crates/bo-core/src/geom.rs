use core::ops::{Add, Mul, Neg, Sub};

/// One of the four grid directions.
///
/// The discriminant is the quarter-turn index: incrementing it rotates the
/// direction clockwise in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Right = 0,
    Down = 1,
    Left = 2,
    Up = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Right, Self::Down, Self::Left, Self::Up];

    /// Quarter-turn count for a clockwise (right) turn.
    pub const RIGHT: i32 = 1;
    /// Quarter-turn count for a counter-clockwise (left) turn, `-1 mod 4`.
    pub const LEFT: i32 = 3;

    pub fn from_index(index: i32) -> Self {
        Self::ALL[index.rem_euclid(4) as usize]
    }

    pub fn index(self) -> i32 {
        self as i32
    }

    pub fn turned(self, steps: i32) -> Self {
        Self::from_index(self.index() + steps)
    }

    pub fn right(self) -> Self {
        self.turned(Self::RIGHT)
    }

    pub fn left(self) -> Self {
        self.turned(Self::LEFT)
    }

    pub fn dx(self) -> isize {
        unit_dx(self.index()) as isize
    }

    pub fn dy(self) -> isize {
        unit_dy(self.index()) as isize
    }

    pub fn unit(self) -> Vec2i {
        Vec2i {
            x: self.dx(),
            y: self.dy(),
        }
    }
}

/// X component of the unit step for `dir mod 4`: `1, 0, -1, 0`.
pub fn unit_dx(dir: i32) -> i32 {
    match dir.rem_euclid(4) {
        0 => 1,
        2 => -1,
        _ => 0,
    }
}

/// Y component of the unit step for `dir mod 4`: `0, 1, 0, -1`.
pub fn unit_dy(dir: i32) -> i32 {
    match dir.rem_euclid(4) {
        1 => 1,
        3 => -1,
        _ => 0,
    }
}

/// Rotates `v` clockwise by `steps` quarter turns.
///
/// Negative `steps` rotate counter-clockwise, so `rotate(v, -d.index())`
/// expresses `v` in the frame where `d` points right.
pub fn rotate(v: Vec2i, steps: i32) -> Vec2i {
    let (ax, ay) = (unit_dx(steps) as isize, unit_dy(steps) as isize);
    let (bx, by) = (unit_dx(steps + 1) as isize, unit_dy(steps + 1) as isize);
    Vec2i {
        x: v.x * ax + v.y * bx,
        y: v.x * ay + v.y * by,
    }
}

/// Float variant of [`rotate`].
pub fn rotate_f32(v: Vec2f, steps: i32) -> Vec2f {
    let (ax, ay) = (unit_dx(steps) as f32, unit_dy(steps) as f32);
    let (bx, by) = (unit_dx(steps + 1) as f32, unit_dy(steps + 1) as f32);
    Vec2f {
        x: v.x * ax + v.y * bx,
        y: v.x * ay + v.y * by,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec2i {
    pub x: isize,
    pub y: isize,
}

impl Vec2i {
    pub fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    pub fn to_f32(self) -> Vec2f {
        Vec2f {
            x: self.x as f32,
            y: self.y as f32,
        }
    }
}

impl Add for Vec2i {
    type Output = Vec2i;

    fn add(self, rhs: Vec2i) -> Self::Output {
        Vec2i {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Vec2i {
    type Output = Vec2i;

    fn sub(self, rhs: Vec2i) -> Self::Output {
        Vec2i {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<isize> for Vec2i {
    type Output = Vec2i;

    fn mul(self, rhs: isize) -> Self::Output {
        Vec2i {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2f {
    pub x: f32,
    pub y: f32,
}

impl Vec2f {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    pub fn norm(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// `(-y, x)`: the tangent turned a quarter clockwise on screen.
    pub fn perp(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }
}

impl Add for Vec2f {
    type Output = Vec2f;

    fn add(self, rhs: Vec2f) -> Self::Output {
        Vec2f {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Vec2f {
    type Output = Vec2f;

    fn sub(self, rhs: Vec2f) -> Self::Output {
        Vec2f {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Neg for Vec2f {
    type Output = Vec2f;

    fn neg(self) -> Self::Output {
        Vec2f {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul<f32> for Vec2f {
    type Output = Vec2f;

    fn mul(self, rhs: f32) -> Self::Output {
        Vec2f {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
