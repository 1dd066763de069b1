use super::query::{Query, SubtreeItems};
use crate::{Config, OutOfBounds, Rectangle};
use std::mem;

type Children<T> = Option<Box<[Node<T>; 4]>>;

/// A rectangular region of the tree.
///
/// Holds the items that do not fit entirely into any of its quadrants, and either no children
/// or exactly four.
#[derive(Debug, Clone)]
pub struct Node<T> {
    bounds: Rectangle,

    children: Children<T>,

    // unordered, no upper limit
    items: Vec<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            children: None,
            items: Vec::new(),
        }
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Items stored directly in this node
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Either empty or the four quadrants: top-left, bottom-left, top-right, bottom-right
    pub fn children(&self) -> &[Node<T>] {
        match self.children {
            Some(ref children) => &children[..],
            None => &[],
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && (self.bounds.is_degenerate() || self.children.is_none())
    }

    /// Total number of items in this node and all of its descendants
    pub fn count(&self) -> usize {
        self.children().iter().map(Node::count).sum::<usize>() + self.items.len()
    }

    /// Every item in this node and its descendants.
    pub fn subtree_items(&self) -> SubtreeItems<'_, T> {
        SubtreeItems::new(self)
    }

    /// Lazily find the items in this subtree whose rectangle intersects `area`.
    pub fn query<'a, F>(&'a self, area: Rectangle, get_rect: &'a F) -> Query<'a, T, F>
    where
        F: Fn(&T) -> Rectangle,
    {
        Query::new(self, area, get_rect)
    }

    /// Run `visitor` on this node, then on every descendant, depth first.
    pub fn for_each<V>(&self, visitor: &mut V)
    where
        V: FnMut(&Node<T>),
    {
        visitor(self);
        for child in self.children() {
            child.for_each(visitor);
        }
    }

    /// Return `Err` if the item is not contained by the bounds of this node
    pub(crate) fn insert<F>(
        &mut self,
        item: T,
        get_rect: &F,
        config: &Config,
    ) -> Result<(), OutOfBounds<T>>
    where
        F: Fn(&T) -> Rectangle,
    {
        let rect = get_rect(&item);
        if !self.bounds.contains(&rect) {
            log::warn!(
                "item {:?} is out of the bounds of the quadtree node {:?}",
                rect,
                self.bounds
            );
            return Err(OutOfBounds {
                item,
                rect,
                bounds: self.bounds,
            });
        }

        if self.children.is_none() && self.items.len() >= config.node_capacity {
            if self.split(config) {
                self.move_items_to_children(get_rect, config);
            } else if self.items.len() == config.node_capacity {
                log::debug!(
                    "node {:?} is at the minimum size, it will hold more than {} items",
                    self.bounds,
                    config.node_capacity
                );
            }
        }

        if self.items.len() > config.node_capacity {
            // full, push the item into the first quadrant that can take it
            if let Some(children) = self.children.as_mut() {
                if let Some(child) = children.iter_mut().find(|c| c.bounds.contains(&rect)) {
                    return child.insert(item, get_rect, config);
                }
            }
        }

        // add, even if over capacity
        self.items.push(item);
        Ok(())
    }

    /// Create the quadrants. Return false if the node is too small to be split
    fn split(&mut self, config: &Config) -> bool {
        assert!(self.children.is_none());

        if !config.can_subdivide(self.bounds.area()) {
            return false;
        }

        let [top_left, bottom_left, top_right, bottom_right] = self.bounds.quadrants();
        self.children = Some(Box::new([
            Self::new(top_left),
            Self::new(bottom_left),
            Self::new(top_right),
            Self::new(bottom_right),
        ]));
        true
    }

    /// Push every item that fits entirely into a quadrant down into it
    fn move_items_to_children<F>(&mut self, get_rect: &F, config: &Config)
    where
        F: Fn(&T) -> Rectangle,
    {
        let children = match self.children.as_mut() {
            Some(children) => children,
            None => return,
        };

        let items = mem::take(&mut self.items);
        let total = items.len();
        for item in items {
            let rect = get_rect(&item);
            let item = match children.iter_mut().find(|c| c.bounds.contains(&rect)) {
                Some(child) => match child.insert(item, get_rect, config) {
                    Ok(()) => continue,
                    Err(err) => err.into_item(),
                },
                None => item,
            };
            self.items.push(item);
        }

        log::trace!(
            "split node {:?}, moved {} of {} items into quadrants",
            self.bounds,
            total - self.items.len(),
            total
        );
    }
}
