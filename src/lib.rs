//! # unrolled_list
//!
//! `unrolled_list` implements an **unrolled linked list** whose shape is driven by a
//! single number, the block count. The list owns exactly that many blocks and
//! aims to keep that many elements in each of them, so an index is translated
//! into a block and an offset with one division.
//!
//! ## Features
//! - Ordered sequence with index based element access, insertion and deletion.
//! - Two traversal stages per lookup: a walk along the block chain, then a
//!   short walk along one block's ring of nodes.
//! - Automatic growth: once `block_count * block_count` elements are stored,
//!   the next insertion adds a block and raises the per-block target by one.
//! - Elements move between blocks by relinking nodes, never by copying values.
//!
//! ## Balance
//! Outside of a call, every block but the last holds exactly `block_count`
//! elements. Deleting never removes blocks: the elements left behind are
//! packed towards the front and the trailing blocks stay allocated.
//!
//! ## Example
//! ```rust
//! use unrolled_list::UnrolledList;
//!
//! let mut list = UnrolledList::new(2)?;
//! list.push(1);
//! list.push(3);
//! list.insert(1, 2)?;
//!
//! assert_eq!(list.get(0), Ok(&1));
//! assert_eq!(list.get(1), Ok(&2));
//! assert_eq!(list.get(2), Ok(&3));
//!
//! assert_eq!(list.delete(1), Ok(2));
//! assert_eq!(list.len(), 2);
//! # Ok::<(), unrolled_list::Error>(())
//! ```

mod balance;
mod block;
mod error;
mod into_iter;
mod iter;
mod node;

pub use error::{Error, Result};
pub use into_iter::IntoIter;
pub use iter::Iter;

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::slice;

use crate::block::Block;
use crate::node::{NodeId, Nodes};

/// An ordered sequence stored as a chain of blocks, each block holding a
/// circular ring of element nodes.
///
/// # Features
/// - **Balanced blocks**: all blocks but the last are kept exactly full, so
///   `index / block_count` names the block holding `index`.
/// - **Growing capacity**: the list holds up to `block_count²` elements and
///   grows by one block when that limit is passed.
///
/// # Type Parameters
/// - `T`: The type of elements stored in the list.
///
/// # Example
/// ```rust
/// use unrolled_list::UnrolledList;
///
/// let mut list = UnrolledList::new(2)?;
/// (1..=4).for_each(|value| list.push(value));
///
/// assert!(list.is_full());
/// assert_eq!(list.block_count(), 2);
///
/// list.push(5);
/// assert_eq!(list.block_count(), 3);
/// assert_eq!(list, [1, 2, 3, 4, 5]);
/// # Ok::<(), unrolled_list::Error>(())
/// ```
#[derive(Clone)]
pub struct UnrolledList<T> {
    blocks: Vec<Block>,
    nodes: Nodes<T>,
}

impl<T, const M: usize> From<[T; M]> for UnrolledList<T> {
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> FromIterator<T> for UnrolledList<T> {
    /// Collects the elements into a list whose block count is the smallest one
    /// able to hold them all.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements: Vec<T> = iter.into_iter().collect();
        let len = elements.len();
        let root = len.isqrt();
        let block_count = if root * root < len { root + 1 } else { root };

        Self::assemble(block_count.max(1), elements)
    }
}

impl<T> Extend<T> for UnrolledList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push(value));
    }
}

impl<'a, T> Extend<&'a T> for UnrolledList<T>
where
    T: Clone,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T> Default for UnrolledList<T> {
    /// Creates an empty list with a single block.
    fn default() -> Self {
        Self {
            blocks: vec![Block::new()],
            nodes: Nodes::new(),
        }
    }
}

impl<T> UnrolledList<T> {
    /// Creates an empty list with `block_count` blocks, able to hold
    /// `block_count * block_count` elements before it grows.
    ///
    /// # Errors
    /// - [`Error::ZeroBlockCount`] if `block_count` is zero.
    ///
    /// # Example
    /// ```rust
    /// use unrolled_list::{Error, UnrolledList};
    ///
    /// let list = UnrolledList::<i64>::new(3)?;
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 9);
    ///
    /// assert_eq!(UnrolledList::<i64>::new(0).err(), Some(Error::ZeroBlockCount));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new(block_count: usize) -> Result<Self> {
        Self::with_elements(block_count, [])
    }

    /// Creates a list with `block_count` blocks and fills them, in order,
    /// with `elements`: the first `block_count` elements go to the first
    /// block, the next `block_count` to the second one, and so on.
    ///
    /// # Errors
    /// - [`Error::ZeroBlockCount`] if `block_count` is zero.
    /// - [`Error::CapacityExceeded`] if there are more than
    ///   `block_count * block_count` elements.
    ///
    /// # Example
    /// ```rust
    /// use unrolled_list::{Error, UnrolledList};
    ///
    /// let list = UnrolledList::with_elements(2, [1, 2, 3])?;
    /// assert_eq!(list, [1, 2, 3]);
    ///
    /// assert_eq!(
    ///     UnrolledList::with_elements(2, [0; 10]).err(),
    ///     Some(Error::CapacityExceeded { len: 10, capacity: 4 })
    /// );
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_elements<I>(block_count: usize, elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        if block_count == 0 {
            return Err(Error::ZeroBlockCount);
        }

        let elements: Vec<T> = elements.into_iter().collect();
        let capacity = block_count.saturating_mul(block_count);
        if elements.len() > capacity {
            return Err(Error::CapacityExceeded {
                len: elements.len(),
                capacity,
            });
        }

        Ok(Self::assemble(block_count, elements))
    }

    fn assemble(block_count: usize, elements: Vec<T>) -> Self {
        let mut blocks = vec![Block::new(); block_count];
        let mut nodes = Nodes::with_capacity(elements.len());

        for (index, value) in elements.into_iter().enumerate() {
            blocks[index / block_count].push_back(&mut nodes, value);
        }

        Self { blocks, nodes }
    }

    /// Returns the number of blocks, which is also the number of elements
    /// every block but the last is meant to hold.
    #[inline]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Returns how many elements the list holds before its next growth.
    ///
    /// # Example
    /// ```rust
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut list = UnrolledList::new(1)?;
    /// assert_eq!(list.capacity(), 1);
    ///
    /// list.push("a");
    /// list.push("b");
    /// assert_eq!(list.capacity(), 4);
    /// # Ok::<(), unrolled_list::Error>(())
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.block_count() * self.block_count()
    }

    /// Returns the number of elements currently stored in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Checks if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks if the list holds exactly `block_count * block_count` elements,
    /// meaning the next insertion grows the block chain.
    ///
    /// # Example
    /// ```rust
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut list = UnrolledList::with_elements(2, [1, 2, 3])?;
    /// assert!(!list.is_full());
    ///
    /// list.push(4);
    /// assert!(list.is_full());
    /// # Ok::<(), unrolled_list::Error>(())
    /// ```
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Returns the occupancy of every block, in chain order.
    ///
    /// # Example
    /// ```rust
    /// use unrolled_list::UnrolledList;
    ///
    /// let list = UnrolledList::with_elements(3, 0..7)?;
    /// assert!(list.block_lengths().eq([3, 3, 1]));
    /// # Ok::<(), unrolled_list::Error>(())
    /// ```
    pub fn block_lengths(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.blocks.iter().map(Block::len)
    }

    /// Returns the occupancy of the block at `block_index`.
    ///
    /// # Errors
    /// - [`Error::BlockOutOfBounds`] if `block_index >= block_count`.
    pub fn block_len(&self, block_index: usize) -> Result<usize> {
        self.block_at(block_index).map(Block::len)
    }

    /// Returns a reference to the element at the specified index.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfBounds`] if no element lives at `index`.
    ///
    /// # Example
    /// ```rust
    /// use unrolled_list::{Error, UnrolledList};
    ///
    /// let mut list = UnrolledList::new(1)?;
    /// list.push(1);
    ///
    /// assert_eq!(list.get(0), Ok(&1));
    /// assert_eq!(list.get(1), Err(Error::IndexOutOfBounds { index: 1, len: 1 }));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        let id = self.node_at(index)?;
        Ok(self.nodes.data(id))
    }

    /// Returns a mutable reference to the element at the specified index.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfBounds`] if no element lives at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let id = self.node_at(index)?;
        Ok(self.nodes.data_mut(id))
    }

    /// Returns a reference to the first element, if any.
    pub fn front(&self) -> Option<&T> {
        self.get(0).ok()
    }

    /// Returns a reference to the last element, if any.
    pub fn back(&self) -> Option<&T> {
        self.len()
            .checked_sub(1)
            .and_then(|index| self.get(index).ok())
    }

    /// Overwrites the element at the specified index, returning the old one.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfBounds`] if no element lives at `index`.
    ///
    /// # Example
    /// ```rust
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut list = UnrolledList::with_elements(2, ["a", "b", "c"])?;
    /// assert_eq!(list.replace(1, "z"), Ok("b"));
    /// assert_eq!(list, ["a", "z", "c"]);
    /// # Ok::<(), unrolled_list::Error>(())
    /// ```
    pub fn replace(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Appends an element after the last one.
    ///
    /// The element lands in the first block with room to spare. If every
    /// block is full, the elements are redistributed for a target of
    /// `block_count + 1`, a new block is added, and the element is appended
    /// to the former last block.
    ///
    /// # Example
    /// ```rust
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut list = UnrolledList::new(2)?;
    /// (1..=5).for_each(|value| list.push(value));
    ///
    /// assert_eq!(list, [1, 2, 3, 4, 5]);
    /// assert!(list.block_lengths().eq([3, 2, 0]));
    /// # Ok::<(), unrolled_list::Error>(())
    /// ```
    pub fn push(&mut self, value: T) {
        let block_count = self.block_count();
        let last = self.blocks.len() - 1;
        let block_index = self
            .blocks
            .iter()
            .position(|block| block.len() < block_count)
            .unwrap_or(last);

        if self.blocks[block_index].len() < block_count {
            self.blocks[block_index].push_back(&mut self.nodes, value);
            return;
        }

        if block_count > 1 {
            self.distribute_forward();
        }

        self.grow();
        self.blocks[last].push_back(&mut self.nodes, value);
    }

    /// Inserts an element at the specified index, shifting subsequent elements
    /// one position to the right.
    ///
    /// Inserting into a full list grows the block chain afterwards.
    ///
    /// # Errors
    /// - [`Error::InvalidInsertPosition`] if `index > len`, since there is no
    ///   preceding element to insert after.
    ///
    /// # Example
    /// ```rust
    /// use unrolled_list::{Error, UnrolledList};
    ///
    /// let mut list = UnrolledList::with_elements(2, [10, 30])?;
    /// list.insert(1, 20)?;
    /// list.insert(3, 40)?;
    /// assert_eq!(list, [10, 20, 30, 40]);
    ///
    /// assert_eq!(
    ///     list.insert(6, 60),
    ///     Err(Error::InvalidInsertPosition { index: 6, len: 4 })
    /// );
    /// # Ok::<(), Error>(())
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.len();
        let invalid = Error::InvalidInsertPosition { index, len };
        if index > len {
            return Err(invalid);
        }

        let was_full = self.is_full();
        let SearchTarget {
            mut block_index,
            mut node_index,
        } = self.locate(index);

        if block_index == self.block_count() && was_full {
            // Appending right after the last element of a full list.
            if node_index > 0 {
                return Err(invalid);
            }

            block_index -= 1;
            node_index = self.blocks[block_index].len();
        }

        let block = self.block_at(block_index).map_err(|_| invalid)?;
        if block.len() < node_index {
            return Err(invalid);
        }

        let id = self.nodes.alloc(value);
        self.blocks[block_index].link_at(&mut self.nodes, node_index, id);

        if was_full {
            self.distribute_forward();
            self.grow();
            return Ok(());
        }

        self.shift_forward(block_index);
        Ok(())
    }

    /// Removes and returns the element at the specified index, shifting
    /// subsequent elements one position to the left.
    ///
    /// The block count never shrinks: blocks emptied by deletions stay in
    /// the chain.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfBounds`] if no element lives at `index`.
    ///
    /// # Example
    /// ```rust
    /// use unrolled_list::{Error, UnrolledList};
    ///
    /// let mut list = UnrolledList::with_elements(2, [10, 20, 30, 40])?;
    /// assert_eq!(list.delete(1), Ok(20));
    /// assert_eq!(list, [10, 30, 40]);
    /// assert_eq!(list.block_count(), 2);
    ///
    /// assert_eq!(list.delete(3), Err(Error::IndexOutOfBounds { index: 3, len: 3 }));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn delete(&mut self, index: usize) -> Result<T> {
        let out_of_bounds = self.out_of_bounds(index);
        let SearchTarget {
            block_index,
            node_index,
        } = self.locate(index);

        if block_index >= self.block_count() {
            return Err(out_of_bounds);
        }

        let id = self.blocks[block_index]
            .unlink_at(&mut self.nodes, node_index)
            .ok_or(out_of_bounds)?;
        let value = self.nodes.release(id);

        if !self.blocks[block_index].is_empty() {
            self.shift_backward(block_index);
        }

        Ok(value)
    }

    /// Calls `callback` with every element and its index, in order.
    ///
    /// # Example
    /// ```rust
    /// use unrolled_list::UnrolledList;
    ///
    /// let list = UnrolledList::with_elements(2, ['a', 'b', 'c'])?;
    ///
    /// let mut seen = Vec::new();
    /// list.loop_over(|value, index| seen.push((index, *value)));
    /// assert_eq!(seen, [(0, 'a'), (1, 'b'), (2, 'c')]);
    /// # Ok::<(), unrolled_list::Error>(())
    /// ```
    pub fn loop_over<F>(&self, mut callback: F)
    where
        F: FnMut(&T, usize),
    {
        self.iter()
            .enumerate()
            .for_each(|(index, value)| callback(value, index));
    }

    /// Removes every element. The block count is left unchanged.
    pub fn clear(&mut self) {
        self.blocks.iter_mut().for_each(Block::clear);
        self.nodes.clear();
    }

    /// Provides an iterator over list's elements.
    ///
    /// # Examples
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let list = UnrolledList::with_elements(2, [0, 1, 2])?;
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// # Ok::<(), unrolled_list::Error>(())
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::from_list(self)
    }

    fn locate(&self, index: usize) -> SearchTarget {
        let block_count = self.block_count();

        SearchTarget {
            block_index: index / block_count,
            node_index: index % block_count,
        }
    }

    fn block_at(&self, block_index: usize) -> Result<&Block> {
        self.blocks
            .get(block_index)
            .ok_or(Error::BlockOutOfBounds {
                index: block_index,
                block_count: self.block_count(),
            })
    }

    fn node_at(&self, index: usize) -> Result<NodeId> {
        let SearchTarget {
            block_index,
            node_index,
        } = self.locate(index);

        self.block_at(block_index)
            .ok()
            .and_then(|block| block.node_at(&self.nodes, node_index))
            .ok_or(self.out_of_bounds(index))
    }

    fn out_of_bounds(&self, index: usize) -> Error {
        Error::IndexOutOfBounds {
            index,
            len: self.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SearchTarget {
    block_index: usize,
    node_index: usize,
}

impl<T, const M: usize> PartialEq<[T; M]> for UnrolledList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq<&[T]> for UnrolledList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> PartialEq<[T]> for UnrolledList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq for UnrolledList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> Eq for UnrolledList<T> where T: Eq {}

impl<T> PartialOrd for UnrolledList<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T> Ord for UnrolledList<T>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T> Hash for UnrolledList<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|v| v.hash(state));
    }
}

impl<T> std::fmt::Debug for UnrolledList<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.blocks.iter().map(|block| {
                Iter::from_blocks(&self.nodes, slice::from_ref(block)).collect::<Vec<_>>()
            }))
            .finish()
    }
}

impl<T> IntoIterator for UnrolledList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a UnrolledList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::from_list(self)
    }
}
