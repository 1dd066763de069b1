use super::node::Node;
use crate::Rectangle;
use arrayvec::ArrayVec;
use std::slice;

enum Visit<'a, T> {
    /// Test every item against the query area
    Filtered(&'a Node<T>),
    /// The node lies within the query area, take everything
    All(&'a Node<T>),
}

/// Lazy rectangle query. Produced by [`Quadtree::query`](crate::Quadtree::query).
///
/// Every item intersecting the area is yielded exactly once. Dropping the iterator early is
/// fine, the tree is only ever read.
pub struct Query<'a, T, F> {
    area: Rectangle,
    get_rect: &'a F,

    pending: Vec<Visit<'a, T>>,

    items: slice::Iter<'a, T>,
    filter: bool,
}

impl<'a, T, F> Query<'a, T, F>
where
    F: Fn(&T) -> Rectangle,
{
    pub(crate) fn new(node: &'a Node<T>, area: Rectangle, get_rect: &'a F) -> Self {
        Self {
            area,
            get_rect,
            pending: vec![Visit::Filtered(node)],
            items: <&[T]>::default().iter(),
            filter: true,
        }
    }

    fn visit(&mut self, visit: Visit<'a, T>) {
        match visit {
            Visit::Filtered(node) => {
                self.items = node.items().iter();
                self.filter = true;
                self.schedule_children(node);
            }
            Visit::All(node) => {
                self.items = node.items().iter();
                self.filter = false;
                self.pending.extend(
                    node.children()
                        .iter()
                        .rev()
                        .filter(|child| !child.is_empty())
                        .map(Visit::All),
                );
            }
        }
    }

    fn schedule_children(&mut self, node: &'a Node<T>) {
        let area = self.area;
        let mut next = ArrayVec::<[Visit<'a, T>; 4]>::new();

        for child in node.children() {
            if child.is_empty() {
                continue;
            }
            let bounds = child.bounds();

            // Quadrants share their edges and touching counts as intersecting, so only an area
            // strictly inside the quadrant rules out the siblings.
            if contains_strictly(&bounds, &area) {
                next.push(Visit::Filtered(child));
                break;
            }
            if area.contains(&bounds) {
                next.push(Visit::All(child));
                continue;
            }
            if bounds.intersects(&area) {
                next.push(Visit::Filtered(child));
            }
        }

        // keep the quadrant order when popping
        self.pending.extend(next.into_iter().rev());
    }
}

impl<'a, T, F> Iterator for Query<'a, T, F>
where
    F: Fn(&T) -> Rectangle,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            while let Some(item) = self.items.next() {
                if !self.filter || self.area.intersects(&(self.get_rect)(item)) {
                    return Some(item);
                }
            }
            let visit = self.pending.pop()?;
            self.visit(visit);
        }
    }
}

fn contains_strictly(outer: &Rectangle, inner: &Rectangle) -> bool {
    outer.left() < inner.left()
        && inner.right() < outer.right()
        && outer.top() < inner.top()
        && inner.bottom() < outer.bottom()
}

/// Every item of a subtree, parents before children.
pub struct SubtreeItems<'a, T> {
    pending: Vec<&'a Node<T>>,
    items: slice::Iter<'a, T>,
}

impl<'a, T> SubtreeItems<'a, T> {
    pub(crate) fn new(node: &'a Node<T>) -> Self {
        Self {
            pending: vec![node],
            items: <&[T]>::default().iter(),
        }
    }
}

impl<'a, T> Iterator for SubtreeItems<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(item) = self.items.next() {
                return Some(item);
            }
            let node = self.pending.pop()?;
            self.items = node.items().iter();
            self.pending.extend(node.children().iter().rev());
        }
    }
}

/// Pre-order traversal of the nodes of a tree, starting with the root.
pub struct Nodes<'a, T> {
    pending: Vec<&'a Node<T>>,
}

impl<'a, T> Nodes<'a, T> {
    pub(crate) fn new(root: &'a Node<T>) -> Self {
        Self {
            pending: vec![root],
        }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<&'a Node<T>> {
        let node = self.pending.pop()?;
        self.pending.extend(node.children().iter().rev());
        Some(node)
    }
}
