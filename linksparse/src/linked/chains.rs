//! Traversal of row and column chains

use super::item::{Item, ItemHandle};
use crate::error::Axis;

/// Iterator over one row or column chain, in chain order
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    items: &'a [Item],
    next: Option<ItemHandle>,
    axis: Axis,
}

impl<'a> Chain<'a> {
    pub(crate) fn new(items: &'a [Item], head: Option<ItemHandle>, axis: Axis) -> Self {
        Self {
            items,
            next: head,
            axis,
        }
    }

    /// Which kind of chain this walks
    pub fn axis(&self) -> Axis {
        self.axis
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.next?;
        let item = &self.items[handle.index()];
        self.next = match self.axis {
            Axis::Row => item.next_in_row,
            Axis::Col => item.next_in_col,
        };
        Some(item)
    }
}

impl std::iter::FusedIterator for Chain<'_> {}
