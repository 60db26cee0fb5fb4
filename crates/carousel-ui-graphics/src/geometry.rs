//! Geometric primitives: Point, Rect

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle. `x` is the left edge relative to the track origin.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle spanning `[left, left + width]` horizontally with no height.
    ///
    /// Horizontal paging only ever reads the x extent, so most callers build
    /// item bounds this way.
    pub const fn horizontal(left: f32, width: f32) -> Self {
        Self::new(left, 0.0, width, 0.0)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_rect_edges() {
        let rect = Rect::horizontal(100.0, 50.0);
        assert_eq!(rect.left(), 100.0);
        assert_eq!(rect.center_x(), 125.0);
        assert_eq!(rect, Rect::new(100.0, 0.0, 50.0, 0.0));
    }
}
