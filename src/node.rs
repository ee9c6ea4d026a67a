use std::mem;

/// Index of an element node inside a [`Nodes`] arena.
pub(crate) type NodeId = usize;

#[derive(Clone)]
struct Node<T> {
    data: T,
    next: NodeId,
}

#[derive(Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant(Option<NodeId>),
}

/// Arena owning every element node of a list.
///
/// Links between nodes are arena indices. A freshly allocated node links to
/// itself, so it already forms a ring of one. Released slots are chained into
/// a free list and reused by later allocations.
#[derive(Clone)]
pub(crate) struct Nodes<T> {
    slots: Vec<Slot<T>>,
    free: Option<NodeId>,
    len: usize,
}

impl<T> Nodes<T> {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: None,
            len: 0,
        }
    }

    /// Number of live nodes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    pub fn alloc(&mut self, data: T) -> NodeId {
        self.len += 1;

        match self.free {
            Some(id) => {
                let Slot::Vacant(next_free) = self.slots[id] else {
                    panic!("Corrupted free list: slot {id} is occupied");
                };

                self.free = next_free;
                self.slots[id] = Slot::Occupied(Node { data, next: id });
                id
            }
            None => {
                let id = self.slots.len();
                self.slots.push(Slot::Occupied(Node { data, next: id }));
                id
            }
        }
    }

    /// Releases the node and hands back its payload. The node's link is lost,
    /// so callers must unlink it from its ring first.
    pub fn release(&mut self, id: NodeId) -> T {
        match mem::replace(&mut self.slots[id], Slot::Vacant(self.free)) {
            Slot::Occupied(node) => {
                self.free = Some(id);
                self.len -= 1;
                node.data
            }
            Slot::Vacant(next_free) => {
                self.slots[id] = Slot::Vacant(next_free);
                panic!("Dangling node link: slot {id} was already released");
            }
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }

    #[inline]
    pub fn next(&self, id: NodeId) -> NodeId {
        self.node(id).next
    }

    #[inline]
    pub fn set_next(&mut self, id: NodeId, next: NodeId) {
        self.node_mut(id).next = next;
    }

    #[inline]
    pub fn data(&self, id: NodeId) -> &T {
        &self.node(id).data
    }

    #[inline]
    pub fn data_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.node_mut(id).data
    }

    /// Follows `steps` links starting from `from`.
    pub fn walk(&self, from: NodeId, steps: usize) -> NodeId {
        (0..steps).fold(from, |id, _| self.next(id))
    }

    fn node(&self, id: NodeId) -> &Node<T> {
        match &self.slots[id] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => panic!("Dangling node link: slot {id} is vacant"),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match &mut self.slots[id] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => panic!("Dangling node link: slot {id} is vacant"),
        }
    }
}
