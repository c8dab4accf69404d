//! Geometry primitives shared by the board, the falling piece and the renderer.
//!
//! All positions are in pixel units. The y axis grows downward.

use std::ops::{Add, AddAssign, Sub};

/// A 2D vector in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Scale each axis independently.
    pub fn scale(self, sx: f64, sy: f64) -> Self {
        Self::new(self.x * sx, self.y * sy)
    }

    /// Floor both axes down to the nearest multiple of `size`.
    pub fn floor_to(self, size: f64) -> Self {
        Self::new(
            (self.x / size).floor() * size,
            (self.y / size).floor() * size,
        )
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned rectangle: top-left position plus dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub pos: Vec2,
    pub dim: Vec2,
}

impl Rect {
    pub const fn new_at(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            pos: Vec2::new(x, y),
            dim: Vec2::new(w, h),
        }
    }

    pub fn min_x(&self) -> f64 {
        self.pos.x
    }

    pub fn max_x(&self) -> f64 {
        self.pos.x + self.dim.x
    }

    pub fn min_y(&self) -> f64 {
        self.pos.y
    }

    pub fn max_y(&self) -> f64 {
        self.pos.y + self.dim.y
    }

    pub fn width(&self) -> f64 {
        self.dim.x
    }

    pub fn height(&self) -> f64 {
        self.dim.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(10.0, -4.0);
        assert_eq!(a + b, Vec2::new(11.0, -2.0));
        assert_eq!(b - a, Vec2::new(9.0, -6.0));
        assert_eq!(a.scale(10.0, 5.0), Vec2::new(10.0, 10.0));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
    }

    #[test]
    fn test_floor_to_rounds_toward_negative_infinity() {
        assert_eq!(Vec2::new(63.7, 128.2).floor_to(10.0), Vec2::new(60.0, 120.0));
        assert_eq!(Vec2::new(60.0, 120.0).floor_to(10.0), Vec2::new(60.0, 120.0));
        assert_eq!(Vec2::new(-3.0, -12.0).floor_to(10.0), Vec2::new(-10.0, -20.0));
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new_at(20.0, 20.0, 100.0, 200.0);
        assert_eq!(r.min_x(), 20.0);
        assert_eq!(r.max_x(), 120.0);
        assert_eq!(r.min_y(), 20.0);
        assert_eq!(r.max_y(), 220.0);
        assert_eq!(r.width(), 100.0);
        assert_eq!(r.height(), 200.0);
    }
}
