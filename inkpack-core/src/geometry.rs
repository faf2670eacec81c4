//! Plane geometry primitives shared by the packers and composers.

/// A point in drawing coordinates (y grows downward, as in SVG).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 2]> for Point {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle spanning `(x, y)`..`(x1, y1)`.
///
/// Invariant: `x <= x1` and `y <= y1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, x1: f32, y1: f32) -> Self {
        Self { x, y, x1, y1 }
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y
    }

    /// Length of the shorter side; padding amounts derive from this.
    pub fn min_side(&self) -> f32 {
        self.width().min(self.height())
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Clamps all four coordinates into `outer`, absorbing the floating-point
    /// overshoot padded splits can produce.
    pub fn clamp_within(&self, outer: &Rect) -> Rect {
        Rect {
            x: self.x.clamp(outer.x, outer.x1),
            y: self.y.clamp(outer.y, outer.y1),
            x1: self.x1.clamp(outer.x, outer.x1),
            y1: self.y1.clamp(outer.y, outer.y1),
        }
    }

    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x && other.y >= self.y && other.x1 <= self.x1 && other.y1 <= self.y1
    }
}

/// One packed character cell: a rectangle plus the character it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub rect: Rect,
    pub ch: char,
}

/// Accumulates a combined min/max bounding box over points.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Bounds {
    pub fn empty() -> Self {
        Self {
            min_x: f32::INFINITY,
            max_x: f32::NEG_INFINITY,
            min_y: f32::INFINITY,
            max_y: f32::NEG_INFINITY,
        }
    }

    pub fn extend(&mut self, [x, y]: [f32; 2]) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    pub fn from_points<'a, I: IntoIterator<Item = &'a [f32; 2]>>(points: I) -> Self {
        let mut bounds = Self::empty();
        for &p in points {
            bounds.extend(p);
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_absorbs_overshoot() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let wild = Rect::new(-3.0, 12.0, 104.5, 99.0);
        let clamped = wild.clamp_within(&outer);
        assert_eq!(clamped, Rect::new(0.0, 12.0, 100.0, 99.0));
        assert!(outer.contains(&clamped));
    }

    #[test]
    fn bounds_accumulate_min_max() {
        let points = [[1.0, 5.0], [-2.0, 3.0], [4.0, 4.0]];
        let b = Bounds::from_points(&points);
        assert_eq!((b.min_x, b.max_x, b.min_y, b.max_y), (-2.0, 4.0, 3.0, 5.0));
        assert!(!b.is_empty());
        assert!(Bounds::empty().is_empty());
    }
}
