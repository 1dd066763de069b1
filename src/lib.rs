//! Region Quadtree.
//!
//! Recursively partitions a 2D rectangular region so that items can be queried by overlapping
//! area without scanning every item.
//!
//! # Contracts:
//! - Rectangles have non-negative width and height.
//! - The rectangle of an item must not change while the item is in the tree.
//! - Containment and intersection are boundary inclusive: touching edges overlap.
//!
pub mod config;
pub mod error;
pub mod quadtree;

pub use config::Config;
pub use error::{ConfigError, OutOfBounds};
pub use quadtree::{Node, Quadtree};

/// Axis-aligned rectangle given by its origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        debug_assert!(width >= 0.0, "negative width: {}", width);
        debug_assert!(height >= 0.0, "negative height: {}", height);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// A rectangle without interior
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Return whether every point of `other` lies within or on the boundary of `self`.
    pub fn contains(&self, other: &Rectangle) -> bool {
        self.left() <= other.left()
            && other.right() <= self.right()
            && self.top() <= other.top()
            && other.bottom() <= self.bottom()
    }

    /// Return whether the two rectangles share at least one point. Touching edges count.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    /// Split into four equal quadrants.
    ///
    /// The order is fixed: top-left, bottom-left, top-right, bottom-right.
    pub fn quadrants(&self) -> [Rectangle; 4] {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let [x, y] = [self.x, self.y];

        [
            Self::new(x, y, half_w, half_h),
            Self::new(x, y + half_h, half_w, half_h),
            Self::new(x + half_w, y, half_w, half_h),
            Self::new(x + half_w, y + half_h, half_w, half_h),
        ]
    }
}

/// Items that know their own rectangle.
pub trait HasRect {
    fn rect(&self) -> Rectangle;
}

impl HasRect for Rectangle {
    fn rect(&self) -> Rectangle {
        *self
    }
}
