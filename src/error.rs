use crate::Rectangle;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("node capacity must be at least 1")]
    ZeroCapacity,
    #[error("minimum node size must be a finite, non-negative area, got {0}")]
    InvalidMinNodeSize(f64),
}

/// Returned by insertion when the item does not fit into the bounds of the node.
/// The tree is left untouched and the item is handed back.
#[derive(Debug, Clone, Error)]
#[error("item rectangle {rect:?} is out of the node bounds {bounds:?}")]
pub struct OutOfBounds<T> {
    pub item: T,
    pub rect: Rectangle,
    pub bounds: Rectangle,
}

impl<T> OutOfBounds<T> {
    pub fn into_item(self) -> T {
        self.item
    }
}
