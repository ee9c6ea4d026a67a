use core::iter::FusedIterator;
use std::slice;

use crate::UnrolledList;
use crate::block::Block;
use crate::node::{NodeId, Nodes};

/// An iterator over the elements of an UnrolledList.
///
/// This struct is created by UnrolledList::iter().
pub struct Iter<'a, T> {
    nodes: &'a Nodes<T>,
    blocks: slice::Iter<'a, Block>,
    cursor: Option<NodeId>,
    block_remaining: usize,
    len: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn from_list(list: &'a UnrolledList<T>) -> Self {
        Self::from_blocks(&list.nodes, &list.blocks)
    }

    pub(crate) fn from_blocks(nodes: &'a Nodes<T>, blocks: &'a [Block]) -> Self {
        Self {
            nodes,
            blocks: blocks.iter(),
            cursor: None,
            block_remaining: 0,
            len: blocks.iter().map(Block::len).sum(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            blocks: self.blocks.clone(),
            cursor: self.cursor,
            block_remaining: self.block_remaining,
            len: self.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        while self.block_remaining == 0 {
            let block = self.blocks.next()?;
            self.block_remaining = block.len();
            self.cursor = block.head(self.nodes);
        }

        let id = self.cursor?;
        self.cursor = Some(self.nodes.next(id));
        self.block_remaining -= 1;
        self.len -= 1;
        Some(self.nodes.data(id))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> core::fmt::Debug for Iter<'_, T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.clone().collect::<Vec<_>>())
            .field(&self.len)
            .finish()
    }
}
