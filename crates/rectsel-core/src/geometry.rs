//! Integer pixel geometry: points, displacement vectors and rectangles.
//!
//! Rectangles use inclusive pixel coordinates: a rect at `x` with width `w`
//! covers the columns `x..=x + w - 1`. A width of 1 is the smallest
//! non-empty rectangle.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Shl, Shr, Sub};

/// A pixel position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Round a floating-point position (e.g. a cursor from the host) to a pixel.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_kurbo(point: kurbo::Point) -> Self {
        Self::new(point.x.round() as i32, point.y.round() as i32)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, v: Vector) -> Point {
        Point::new(self.x + v.x, self.y + v.y)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, v: Vector) -> Point {
        Point::new(self.x - v.x, self.y - v.y)
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, other: Point) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }
}

impl From<Point> for kurbo::Point {
    fn from(p: Point) -> Self {
        kurbo::Point::new(f64::from(p.x), f64::from(p.y))
    }
}

/// A displacement between two points, used by translate and resize operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    /// The zero displacement.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new vector.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Projection on the X axis.
    pub const fn proj_x(self) -> Self {
        Self::new(self.x, 0)
    }

    /// Projection on the Y axis.
    pub const fn proj_y(self) -> Self {
        Self::new(0, self.y)
    }

    /// Same vector with X negated.
    pub const fn neg_x(self) -> Self {
        Self::new(-self.x, self.y)
    }

    /// Same vector with Y negated.
    pub const fn neg_y(self) -> Self {
        Self::new(self.x, -self.y)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

/// Scale both coordinates, rounding to the nearest pixel (ties to even).
impl Mul<f64> for Vector {
    type Output = Vector;

    #[allow(clippy::cast_possible_truncation)]
    fn mul(self, coef: f64) -> Vector {
        Vector::new(
            (f64::from(self.x) * coef).round_ties_even() as i32,
            (f64::from(self.y) * coef).round_ties_even() as i32,
        )
    }
}

/// A rectangle given by its top-left pixel and its size.
///
/// Width and height may be zero or negative while a drag is in progress;
/// [`Rect::normalized`] restores the canonical form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Create a new rectangle.
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle at the origin covering `w` x `h` pixels.
    pub const fn from_size(w: i32, h: i32) -> Self {
        Self::new(0, 0, w, h)
    }

    /// A 1x1 rectangle covering a single pixel.
    pub const fn from_point(p: Point) -> Self {
        Self::new(p.x, p.y, 1, 1)
    }

    /// True when either dimension is zero.
    pub const fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Top-left corner.
    pub const fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Top-right corner (inclusive).
    pub const fn top_right(&self) -> Point {
        Point::new(self.x + self.w - 1, self.y)
    }

    /// Bottom-right corner (inclusive).
    pub const fn bottom_right(&self) -> Point {
        Point::new(self.x + self.w - 1, self.y + self.h - 1)
    }

    /// Bottom-left corner (inclusive).
    pub const fn bottom_left(&self) -> Point {
        Point::new(self.x, self.y + self.h - 1)
    }

    /// Corners in order: top-left, top-right, bottom-right, bottom-left.
    pub const fn corners(&self) -> [Point; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_right(),
            self.bottom_left(),
        ]
    }

    /// Center pixel (rounded towards the top-left).
    pub const fn center(&self) -> Point {
        Point::new(self.x + (self.w - 1) / 2, self.y + (self.h - 1) / 2)
    }

    /// Same size, origin shifted by `v`.
    pub const fn translated(&self, v: Vector) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.w, self.h)
    }

    /// Same size, origin shifted by `-v`.
    pub const fn translated_back(&self, v: Vector) -> Self {
        Self::new(self.x - v.x, self.y - v.y, self.w, self.h)
    }

    /// Same origin, size grown by `v`.
    pub const fn grown(&self, v: Vector) -> Self {
        Self::new(self.x, self.y, self.w + v.x, self.h + v.y)
    }

    /// Same origin, size shrunk by `v`.
    pub const fn shrunk(&self, v: Vector) -> Self {
        Self::new(self.x, self.y, self.w - v.x, self.h - v.y)
    }

    /// Flip any axis whose size is zero or negative.
    ///
    /// Flipping keeps the inclusive convention: a 1px wide rect whose right
    /// side moves one pixel left ends up 2px wide, covering both the old
    /// and the new column.
    pub const fn normalized(&self) -> Self {
        let mut r = *self;
        if r.w <= 0 {
            r.x += r.w - 1;
            r.w = -r.w + 2;
        }
        if r.h <= 0 {
            r.y += r.h - 1;
            r.h = -r.h + 2;
        }
        r
    }

    /// Whether `p` lies inside the rect grown by `allowance` on every side.
    pub const fn contains(&self, p: Point, allowance: i32) -> bool {
        let tl = self.top_left();
        let br = self.bottom_right();
        tl.x - allowance <= p.x
            && p.x <= br.x + allowance
            && tl.y - allowance <= p.y
            && p.y <= br.y + allowance
    }

    /// Overlapping part of two rects, or an empty rect if they don't overlap.
    pub fn intersect(&self, other: &Rect) -> Self {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.bottom_right().x.min(other.bottom_right().x);
        let y1 = self.bottom_right().y.min(other.bottom_right().y);
        if self.is_empty() || other.is_empty() || x1 < x0 || y1 < y0 {
            return Self::default();
        }
        Self::new(x0, y0, x1 - x0 + 1, y1 - y0 + 1)
    }

    /// Vertical and horizontal segments through the middle of the rect.
    pub fn crosshair(&self) -> [(Point, Point); 2] {
        let [tl, tr, _, bl] = self.corners();
        let half_w = Vector::new(self.w, 0) * 0.5;
        let half_h = Vector::new(0, self.h) * 0.5;
        [(tl + half_w, bl + half_w), (tl + half_h, tr + half_h)]
    }
}

impl Shr<Vector> for Rect {
    type Output = Rect;

    fn shr(self, v: Vector) -> Rect {
        self.translated(v)
    }
}

impl Shl<Vector> for Rect {
    type Output = Rect;

    fn shl(self, v: Vector) -> Rect {
        self.translated_back(v)
    }
}

impl Add<Vector> for Rect {
    type Output = Rect;

    fn add(self, v: Vector) -> Rect {
        self.grown(v)
    }
}

impl Sub<Vector> for Rect {
    type Output = Rect;

    fn sub(self, v: Vector) -> Rect {
        self.shrunk(v)
    }
}

/// Pixel-area rect: a 1x1 rect at (3, 4) covers `3.0..4.0` x `4.0..5.0`.
impl From<Rect> for kurbo::Rect {
    fn from(r: Rect) -> Self {
        let r = r.normalized();
        kurbo::Rect::new(
            f64::from(r.x),
            f64::from(r.y),
            f64::from(r.x + r.w),
            f64::from(r.y + r.h),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_are_inclusive() {
        let r = Rect::new(10, 20, 5, 3);
        assert_eq!(
            r.corners(),
            [
                Point::new(10, 20),
                Point::new(14, 20),
                Point::new(14, 22),
                Point::new(10, 22),
            ]
        );

        let px = Rect::from_point(Point::new(7, 7));
        assert_eq!(px.top_left(), px.bottom_right());
    }

    #[test]
    fn test_empty() {
        assert!(Rect::default().is_empty());
        assert!(Rect::new(5, 5, 0, 10).is_empty());
        assert!(Rect::new(5, 5, 10, 0).is_empty());
        assert!(!Rect::new(5, 5, 1, 1).is_empty());
        assert!(!Rect::new(5, 5, -2, 3).is_empty());
    }

    #[test]
    fn test_normalize_flips_with_inclusive_edges() {
        // Right side of a 1px rect moved one pixel left
        assert_eq!(Rect::new(16, 16, 0, 1).normalized(), Rect::new(15, 16, 2, 1));
        // Dragged 5px past the anchor
        assert_eq!(Rect::new(10, 10, -4, 3).normalized(), Rect::new(5, 10, 6, 3));
        assert_eq!(Rect::new(10, 10, 3, -1).normalized(), Rect::new(10, 8, 3, 3));
        // Canonical rects are left alone
        let r = Rect::new(1, 2, 3, 4);
        assert_eq!(r.normalized(), r);
    }

    #[test]
    fn test_normalize_idempotent() {
        for x in -3..3 {
            for w in -6..6 {
                for h in -6..6 {
                    let once = Rect::new(x, -x, w, h).normalized();
                    assert_eq!(once.normalized(), once, "{once:?}");
                    assert!(once.w >= 1 && once.h >= 1);
                }
            }
        }
    }

    #[test]
    fn test_translate_round_trip() {
        let r = Rect::new(3, -4, 10, 12);
        for v in [Vector::new(5, 7), Vector::new(-9, 2), Vector::ZERO] {
            assert_eq!((r >> v) << v, r);
            let moved = r.translated(v);
            assert_eq!((moved.w, moved.h), (r.w, r.h));
        }
    }

    #[test]
    fn test_resize_operators() {
        let r = Rect::new(0, 0, 10, 10);
        assert_eq!(r + Vector::new(2, -3), Rect::new(0, 0, 12, 7));
        assert_eq!(r - Vector::new(2, -3), Rect::new(0, 0, 8, 13));
        assert_eq!(r >> Vector::new(1, 1), Rect::new(1, 1, 10, 10));
        assert_eq!(r << Vector::new(1, 1), Rect::new(-1, -1, 10, 10));
    }

    #[test]
    fn test_vector_ops() {
        let v = Vector::new(3, -4);
        assert_eq!(v.proj_x(), Vector::new(3, 0));
        assert_eq!(v.proj_y(), Vector::new(0, -4));
        assert_eq!(v.neg_x(), Vector::new(-3, -4));
        assert_eq!(v.neg_y(), Vector::new(3, 4));
        assert_eq!(-v, Vector::new(-3, 4));
        assert_eq!(v * 2.0, Vector::new(6, -8));
        // Ties round to even
        assert_eq!(Vector::new(5, -5) * 0.5, Vector::new(2, -2));
        assert_eq!(Vector::new(7, 3) * 0.5, Vector::new(4, 2));
        assert_ne!(Vector::new(-3, -4), Vector::new(3, 4));
    }

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(10, 10);
        let b = Point::new(4, 15);
        assert_eq!(a - b, Vector::new(6, -5));
        assert_eq!(b + (a - b), a);
        assert_eq!(a - Vector::new(1, 2), Point::new(9, 8));
    }

    #[test]
    fn test_contains_with_allowance() {
        let r = Rect::new(10, 10, 10, 10);
        assert!(r.contains(Point::new(10, 10), 0));
        assert!(r.contains(Point::new(19, 19), 0));
        assert!(!r.contains(Point::new(20, 19), 0));
        assert!(r.contains(Point::new(22, 7), 3));
        assert!(!r.contains(Point::new(23, 7), 3));
    }

    #[test]
    fn test_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        assert_eq!(a.intersect(&Rect::new(5, 5, 10, 10)), Rect::new(5, 5, 5, 5));
        assert_eq!(a.intersect(&Rect::new(2, 2, 3, 3)), Rect::new(2, 2, 3, 3));
        assert!(a.intersect(&Rect::new(10, 0, 5, 5)).is_empty());
        assert!(a.intersect(&Rect::default()).is_empty());
    }

    #[test]
    fn test_crosshair() {
        let [vertical, horizontal] = Rect::new(0, 0, 10, 6).crosshair();
        assert_eq!(vertical, (Point::new(5, 0), Point::new(5, 5)));
        assert_eq!(horizontal, (Point::new(0, 3), Point::new(9, 3)));
    }

    #[test]
    fn test_crosshair_odd_size() {
        // 5 / 2 rounds down to 2, 3 / 2 rounds up to 2
        let [vertical, horizontal] = Rect::new(0, 0, 5, 3).crosshair();
        assert_eq!(vertical, (Point::new(2, 0), Point::new(2, 2)));
        assert_eq!(horizontal, (Point::new(0, 2), Point::new(4, 2)));
    }

    #[test]
    fn test_kurbo_conversion() {
        let k: kurbo::Rect = Rect::new(3, 4, 2, 5).into();
        assert!((k.x0 - 3.0).abs() < f64::EPSILON);
        assert!((k.y1 - 9.0).abs() < f64::EPSILON);
        assert!((k.width() - 2.0).abs() < f64::EPSILON);

        assert_eq!(Point::from_kurbo(kurbo::Point::new(2.6, -1.4)), Point::new(3, -1));
    }
}
