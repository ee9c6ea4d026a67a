//! Cross-block rebalancing.
//!
//! Outside of a mutating call every block but the last holds exactly
//! `block_count` elements, and the blocks that are not full form a suffix of
//! the chain: at most one partially filled block followed by empty ones.
//! The routines below restore that shape after growth, insertion and
//! deletion by relinking nodes between neighbouring blocks.

use tracing::{debug, trace};

use crate::UnrolledList;
use crate::block::Block;
use crate::node::Nodes;

impl<T> UnrolledList<T> {
    /// Raises every block's occupancy to `block_count + 1` ahead of growth,
    /// pulling the missing nodes from the head of the following block.
    ///
    /// The walk stops at the last block or at the first block whose
    /// successor is empty.
    pub(crate) fn distribute_forward(&mut self) {
        let target_len = self.block_count() + 1;
        let last = self.blocks.len() - 1;
        let mut moved = 0;

        let mut index = 0;
        while index < last && !self.blocks[index + 1].is_empty() {
            let needed = target_len.saturating_sub(self.blocks[index].len());
            if needed > 0 {
                let (current, next, nodes) = self.adjacent_mut(index);
                if let Some(chain) = next.extract_prefix(nodes, needed) {
                    moved += chain.len;
                    current.splice_back(nodes, chain);
                }
            }

            index += 1;
        }

        trace!(target_len, moved, "distributed nodes forward");
    }

    /// Moves the tail of every overfull block to the head of its successor,
    /// starting at `start`. The last block may keep one extra element.
    pub(crate) fn shift_forward(&mut self, start: usize) {
        let block_count = self.block_count();

        let mut index = start;
        while index + 1 < self.blocks.len() && self.blocks[index].len() > block_count {
            let (current, next, nodes) = self.adjacent_mut(index);
            if let Some(id) = current.unlink_back(nodes) {
                next.link_front(nodes, id);
            }

            index += 1;
        }

        trace!(start, end = index, "shifted nodes forward");
    }

    /// Refills an underfull block at `start` by pulling the head of every
    /// following non-empty block one step back.
    pub(crate) fn shift_backward(&mut self, start: usize) {
        let mut index = start;
        while index + 1 < self.blocks.len() && !self.blocks[index + 1].is_empty() {
            let (current, next, nodes) = self.adjacent_mut(index);
            if let Some(id) = next.unlink_front(nodes) {
                current.link_back(nodes, id);
            }

            index += 1;
        }

        trace!(start, end = index, "shifted nodes backward");
    }

    /// Appends an empty block, raising the target occupancy by one.
    pub(crate) fn grow(&mut self) {
        self.blocks.push(Block::new());

        debug!(
            block_count = self.block_count(),
            len = self.len(),
            "grew block chain"
        );
    }

    fn adjacent_mut(&mut self, index: usize) -> (&mut Block, &mut Block, &mut Nodes<T>) {
        let (head, tail) = self.blocks.split_at_mut(index + 1);
        (&mut head[index], &mut tail[0], &mut self.nodes)
    }
}
