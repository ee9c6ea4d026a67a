use crate::node::{NodeId, Nodes};

/// A run of nodes detached from a block, still linked head to tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Chain {
    pub head: NodeId,
    pub tail: NodeId,
    pub len: usize,
}

/// One segment of the list.
///
/// The block's nodes form a circular ring: `last` is the tail and
/// `next(last)` is the head, so both ends are reachable in O(1).
/// An empty block has no ring at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Block {
    len: usize,
    last: Option<NodeId>,
}

impl Block {
    pub const fn new() -> Self {
        Self { len: 0, last: None }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn head<T>(&self, nodes: &Nodes<T>) -> Option<NodeId> {
        self.last.map(|last| nodes.next(last))
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Returns the node at `index` within this block.
    pub fn node_at<T>(&self, nodes: &Nodes<T>, index: usize) -> Option<NodeId> {
        if index >= self.len {
            return None;
        }

        self.last.map(|last| nodes.walk(last, index + 1))
    }

    /// Allocates a node for `value` and links it as the new tail.
    pub fn push_back<T>(&mut self, nodes: &mut Nodes<T>, value: T) {
        let id = nodes.alloc(value);
        self.link_back(nodes, id);
    }

    /// Links a detached node in front of the head.
    pub fn link_front<T>(&mut self, nodes: &mut Nodes<T>, id: NodeId) {
        match self.last {
            None => {
                nodes.set_next(id, id);
                self.last = Some(id);
            }
            Some(last) => {
                nodes.set_next(id, nodes.next(last));
                nodes.set_next(last, id);
            }
        }

        self.len += 1;
    }

    /// Links a detached node after the tail.
    pub fn link_back<T>(&mut self, nodes: &mut Nodes<T>, id: NodeId) {
        // A node placed between tail and head is the new tail once `last` moves.
        self.link_front(nodes, id);
        self.last = Some(id);
    }

    /// Links a detached node so that it ends up at `index`.
    ///
    /// # Panics
    /// - Panics if `index` is greater than the block's length.
    pub fn link_at<T>(&mut self, nodes: &mut Nodes<T>, index: usize, id: NodeId) {
        assert!(
            index <= self.len,
            "Index out of bounds: cannot link at index {index}"
        );

        match self.last {
            Some(last) if 0 < index && index < self.len => {
                let prev = nodes.walk(last, index);
                nodes.set_next(id, nodes.next(prev));
                nodes.set_next(prev, id);
                self.len += 1;
            }
            _ if index == 0 => self.link_front(nodes, id),
            _ => self.link_back(nodes, id),
        }
    }

    /// Detaches the head, leaving it self-linked.
    pub fn unlink_front<T>(&mut self, nodes: &mut Nodes<T>) -> Option<NodeId> {
        let last = self.last?;
        let head = nodes.next(last);

        if head == last {
            self.last = None;
        } else {
            nodes.set_next(last, nodes.next(head));
        }

        nodes.set_next(head, head);
        self.len -= 1;
        Some(head)
    }

    /// Detaches the tail, leaving it self-linked.
    ///
    /// The ring is singly linked, so finding the tail's predecessor walks the
    /// whole block.
    pub fn unlink_back<T>(&mut self, nodes: &mut Nodes<T>) -> Option<NodeId> {
        let last = self.last?;

        if self.len == 1 {
            self.clear();
            return Some(last);
        }

        let prev = nodes.walk(last, self.len - 1);
        nodes.set_next(prev, nodes.next(last));
        nodes.set_next(last, last);

        self.last = Some(prev);
        self.len -= 1;
        Some(last)
    }

    /// Detaches the node at `index`, leaving it self-linked.
    /// Returns `None`, without touching the block, if `index` is out of bounds.
    pub fn unlink_at<T>(&mut self, nodes: &mut Nodes<T>, index: usize) -> Option<NodeId> {
        if index >= self.len {
            return None;
        }

        if index == 0 {
            return self.unlink_front(nodes);
        }

        let last = self.last?;
        let prev = nodes.walk(last, index);
        let target = nodes.next(prev);

        nodes.set_next(prev, nodes.next(target));
        if target == last {
            self.last = Some(prev);
        }

        nodes.set_next(target, target);
        self.len -= 1;
        Some(target)
    }

    /// Detaches up to `count` nodes from the head of the block.
    ///
    /// Returns fewer nodes than requested if the block is short, and `None`
    /// if nothing was detached.
    pub fn extract_prefix<T>(&mut self, nodes: &mut Nodes<T>, count: usize) -> Option<Chain> {
        let last = self.last?;
        let count = count.min(self.len);
        if count == 0 {
            return None;
        }

        let head = nodes.next(last);
        let tail = nodes.walk(last, count);

        if count == self.len {
            self.last = None;
        } else {
            nodes.set_next(last, nodes.next(tail));
        }

        self.len -= count;
        Some(Chain {
            head,
            tail,
            len: count,
        })
    }

    /// Links a detached chain after the tail, preserving its order.
    pub fn splice_back<T>(&mut self, nodes: &mut Nodes<T>, chain: Chain) {
        match self.last {
            None => nodes.set_next(chain.tail, chain.head),
            Some(last) => {
                let head = nodes.next(last);
                nodes.set_next(last, chain.head);
                nodes.set_next(chain.tail, head);
            }
        }

        self.last = Some(chain.tail);
        self.len += chain.len;
    }
}
