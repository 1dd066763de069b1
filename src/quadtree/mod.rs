//! Pointer based region quadtree.
//!
//! Items are placed in the smallest node that fully contains their rectangle. Nodes split into
//! four quadrants once they hold `node_capacity` items and are larger than `min_node_size`.
//! Splits are permanent.
//!
//! The tree is not synchronized: mutate from a single owner, query from as many readers as you
//! like once building is done.
mod node;
mod query;

pub use node::Node;
pub use query::{Nodes, Query, SubtreeItems};

use crate::{Config, ConfigError, HasRect, OutOfBounds, Rectangle};
use rayon::prelude::*;
use std::fmt;

pub struct Quadtree<T, F = fn(&T) -> Rectangle> {
    root: Node<T>,
    config: Config,
    // must return the same rectangle for an item for as long as it is in the tree
    get_rect: F,
}

impl<T: fmt::Debug, F> fmt::Debug for Quadtree<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quadtree")
            .field("config", &self.config)
            .field("root", &self.root)
            .finish()
    }
}

impl<T: HasRect> Quadtree<T> {
    /// Tree of items that carry their own rectangle
    pub fn from_rects(bounds: Rectangle, config: Config) -> Result<Self, ConfigError> {
        Self::with_config(bounds, config, T::rect as fn(&T) -> Rectangle)
    }
}

impl<T, F> Quadtree<T, F>
where
    F: Fn(&T) -> Rectangle,
{
    pub fn new(
        bounds: Rectangle,
        node_capacity: usize,
        min_node_size: f64,
        get_rect: F,
    ) -> Result<Self, ConfigError> {
        Self::with_config(bounds, Config::new(node_capacity, min_node_size), get_rect)
    }

    pub fn with_config(bounds: Rectangle, config: Config, get_rect: F) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            root: Node::new(bounds),
            config,
            get_rect,
        })
    }

    pub fn bounds(&self) -> Rectangle {
        self.root.bounds()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    /// Insert an item into the tree.
    ///
    /// Items that do not fit into the bounds of the tree are rejected, logged and handed back
    /// in the error. The tree is not modified in that case.
    pub fn insert(&mut self, item: T) -> Result<(), OutOfBounds<T>> {
        self.root.insert(item, &self.get_rect, &self.config)
    }

    /// Find every item whose rectangle intersects `area`, touching edges included.
    ///
    /// The result is lazy and borrows the tree; call again for a fresh iteration.
    pub fn query(&self, area: Rectangle) -> Query<'_, T, F> {
        self.root.query(area, &self.get_rect)
    }

    /// Run many queries in parallel. Results are in the order of `areas`.
    pub fn query_many<'a>(&'a self, areas: &[Rectangle]) -> Vec<Vec<&'a T>>
    where
        T: Sync,
        F: Sync,
    {
        areas
            .par_iter()
            .map(|area| self.query(*area).collect::<Vec<_>>())
            .collect()
    }

    /// Total number of items in the tree
    pub fn count(&self) -> usize {
        self.root.count()
    }

    pub fn is_empty(&self) -> bool {
        self.items().next().is_none()
    }

    /// All items, in no particular order
    pub fn items(&self) -> SubtreeItems<'_, T> {
        self.root.subtree_items()
    }

    /// Every node, root first, depth first
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes::new(&self.root)
    }

    pub fn for_each_node<V>(&self, mut visitor: V)
    where
        V: FnMut(&Node<T>),
    {
        self.root.for_each(&mut visitor);
    }
}

impl<T, F> Extend<T> for Quadtree<T, F>
where
    F: Fn(&T) -> Rectangle,
{
    /// Rejected items are dropped
    fn extend<It>(&mut self, it: It)
    where
        It: IntoIterator<Item = T>,
    {
        for item in it {
            // insert already logged the rejection
            let _ = self.insert(item);
        }
    }
}
