//! Integer screen regions.
//!
//! A [`Region`] is an axis-aligned rectangle in window coordinates, used for both the viewport
//! and the scissor box.

/// An axis-aligned integer rectangle, stored as its minimum corner and size.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Region {
  /// The x screen position of the minimum corner.
  pub x: i32,

  /// The y screen position of the minimum corner.
  pub y: i32,

  /// The screen width of the region.
  pub width: i32,

  /// The screen height of the region.
  pub height: i32,
}

impl Region {
  /// Create a new [`Region`] from its minimum corner and size.
  pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
    Region {
      x,
      y,
      width,
      height,
    }
  }

  /// Create a new [`Region`] from its minimum and maximum corners.
  pub fn from_corners(min: (i32, i32), max: (i32, i32)) -> Self {
    Region {
      x: min.0,
      y: min.1,
      width: max.0 - min.0,
      height: max.1 - min.1,
    }
  }

  /// The minimum corner of the region.
  pub fn min(self) -> (i32, i32) {
    (self.x, self.y)
  }

  /// The size of the region.
  pub fn size(self) -> (i32, i32) {
    (self.width, self.height)
  }
}
