#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A point in CSS pixels, relative to whatever frame the host reports in.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset from `origin` to `self`.
    #[must_use]
    pub fn delta_from(self, origin: Point) -> Delta {
        Delta { dx: self.x - origin.x, dy: self.y - origin.y }
    }
}

/// A displacement between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Delta {
    pub dx: f64,
    pub dy: f64,
}

impl Delta {
    #[must_use]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Whether either axis moved strictly further than `threshold`.
    #[must_use]
    pub fn exceeds(self, threshold: f64) -> bool {
        self.dx.abs() > threshold || self.dy.abs() > threshold
    }
}

/// Width and height in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Clamp a box's top-left corner so a box of `size` stays inside `container`.
///
/// A box larger than its container is pinned to the origin on that axis.
#[must_use]
pub fn clamp_to_container(origin: Point, size: Size, container: Size) -> Point {
    let max_x = (container.width - size.width).max(0.0);
    let max_y = (container.height - size.height).max(0.0);
    Point { x: origin.x.clamp(0.0, max_x), y: origin.y.clamp(0.0, max_y) }
}
