use crate::error::ConfigError;

/// Subdivision policy of a [`Quadtree`](crate::Quadtree). Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Once a node holds this many items directly it attempts to subdivide.
    pub node_capacity: usize,
    /// Nodes with an area at or below this never subdivide.
    pub min_node_size: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_capacity: 10,
            min_node_size: 1.0,
        }
    }
}

impl Config {
    pub fn new(node_capacity: usize, min_node_size: f64) -> Self {
        Self {
            node_capacity,
            min_node_size,
        }
    }

    pub fn with_node_capacity(mut self, node_capacity: usize) -> Self {
        self.node_capacity = node_capacity;
        self
    }

    pub fn with_min_node_size(mut self, min_node_size: f64) -> Self {
        self.min_node_size = min_node_size;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.node_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !self.min_node_size.is_finite() || self.min_node_size < 0.0 {
            return Err(ConfigError::InvalidMinNodeSize(self.min_node_size));
        }
        Ok(())
    }

    /// Return whether a node with the given area may split into quadrants
    pub(crate) fn can_subdivide(&self, area: f64) -> bool {
        area > self.min_node_size
    }
}
