use core::iter::FusedIterator;
use std::vec;

use crate::UnrolledList;
use crate::block::Block;
use crate::node::{NodeId, Nodes};

/// An owning iterator over the elements of an UnrolledList.
///
/// This struct is created by UnrolledList::into_iter().
pub struct IntoIter<T> {
    nodes: Nodes<T>,
    blocks: vec::IntoIter<Block>,
    cursor: Option<NodeId>,
    block_remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn from_list(list: UnrolledList<T>) -> Self {
        Self {
            nodes: list.nodes,
            blocks: list.blocks.into_iter(),
            cursor: None,
            block_remaining: 0,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.nodes.len() == 0 {
            return None;
        }

        while self.block_remaining == 0 {
            let block = self.blocks.next()?;
            self.block_remaining = block.len();
            self.cursor = block.head(&self.nodes);
        }

        let id = self.cursor?;
        self.cursor = Some(self.nodes.next(id));
        self.block_remaining -= 1;
        Some(self.nodes.release(id))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.nodes.len(), Some(self.nodes.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> core::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IntoIter")
            .field("len", &self.nodes.len())
            .finish_non_exhaustive()
    }
}
