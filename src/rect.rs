use crate::units::*;

/// A rectangle, specified by two opposite corners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the first (left) corner.
    pub x1: Pt,
    /// The y-coordinate of the first (top) corner.
    pub y1: Pt,
    /// The x-coordinate of the second (right) corner.
    pub x2: Pt,
    /// The y-coordinate of the second (bottom) corner.
    pub y2: Pt,
}

impl Rect {
    /// Create a rectangle from its top-left corner and its extents
    pub fn from_origin(x: Pt, y: Pt, width: Pt, height: Pt) -> Rect {
        Rect {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }

    /// Whether `other` lies entirely within this rectangle (edges may touch)
    pub fn contains(&self, other: &Rect) -> bool {
        other.x1 >= self.x1 && other.y1 >= self.y1 && other.x2 <= self.x2 && other.y2 <= self.y2
    }
}
