//! Points on the 2D integer lattice.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

/// A point `(x, y)` on the integer lattice.
///
/// `add`, `sub` and `scale` return new points; `accumulate` mutates in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal component (east is positive).
    pub x: i64,
    /// Vertical component (north is positive).
    pub y: i64,
}

impl Point {
    /// The lattice origin `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Creates a point from its components.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Component-wise sum.
    pub fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference `self - other`.
    pub fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// Multiplies both components by `k`.
    pub fn scale(self, k: i64) -> Point {
        Point::new(self.x * k, self.y * k)
    }

    /// Adds `other` into this point in place.
    pub fn accumulate(&mut self, other: Point) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::add(self, rhs)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::sub(self, rhs)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.accumulate(rhs);
    }
}

impl Mul<i64> for Point {
    type Output = Point;

    fn mul(self, k: i64) -> Point {
        self.scale(k)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
