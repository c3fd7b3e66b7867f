//! Singly-linked chain with a sentinel anchor.
//!
//! Nodes live in slab storage owned by the chain and link forward by key.
//! Every walk starts at the sentinel, a payload-free anchor whose successor
//! is the first real node, so inserting into an empty chain and a non-empty
//! chain is the same relink.
//!
//! # Costs
//!
//! | Operation | Cost |
//! |-----------|------|
//! | [`append_left`](Chain::append_left), [`pop_left`](Chain::pop_left), [`is_empty`](Chain::is_empty) | O(1) |
//! | [`append`](Chain::append), [`pop`](Chain::pop) | O(n), walks to the tail |
//! | [`get`](Chain::get), [`set`](Chain::set), [`delete`](Chain::delete) | O(i) |
//! | [`find`](Chain::find), [`remove`](Chain::remove), [`contains`](Chain::contains) | O(n) |
//! | [`len`](Chain::len) | O(n), never cached |
//!
//! The length is recounted on every call. Only the sentinel link is stored,
//! so there is no counter to drift out of sync with the links.
//!
//! # Example
//!
//! ```
//! use anchor_collections::Chain;
//!
//! let mut chain: Chain<u64> = Chain::new();
//! chain.append(2).append(3).append_left(1);
//!
//! assert_eq!(chain.len(), 3);
//! assert_eq!(chain.to_string(), "HEAD -> 1 -> 2 -> 3 -> None");
//!
//! // Queue from the front, stack from the back
//! assert_eq!(chain.pop_left(), Some(1));
//! assert_eq!(chain.pop(), Some(3));
//! assert_eq!(chain.pop(), Some(2));
//! assert_eq!(chain.pop(), None);
//! ```
//!
//! # Ordering
//!
//! `==` is position-wise: equal length and equal values at every position.
//! The relational operators compare **length only**, so this is a weak
//! ordering. Two chains of the same length but different content are
//! neither `<` nor `>` each other, yet `<=` and `>=` both hold and
//! `partial_cmp` returns `Some(Equal)` while `==` is `false`. Code that needs
//! `partial_cmp` to agree with `==` (sorting by content, dedup) must not use
//! these operators.
//!
//! ```
//! use anchor_collections::Chain;
//!
//! let a: Chain<u8> = Chain::from([1, 2]);
//! let b: Chain<u8> = Chain::from([3, 4]);
//! let c: Chain<u8> = Chain::from([9]);
//!
//! assert!(a != b);
//! assert!(!(a < b) && !(a > b));
//! assert!(a <= b && a >= b);
//! assert!(c < a);
//! assert_eq!(a.cmp_len(&b), std::cmp::Ordering::Equal);
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;
use core::mem;
use std::marker::PhantomData;

use crate::{Key, OutOfRange, Storage, UnboundedStorage};

/// Default node storage for a [`Chain`].
pub type ChainStorage<T> = slab::Slab<ChainNode<T, usize>>;

/// A node in the chain.
///
/// Wraps one value with the key of its successor. Users only ever see `&T`
/// or owned `T`; the node is an implementation detail of the storage.
#[derive(Debug, Clone)]
pub struct ChainNode<T, K: Key = usize> {
    pub(crate) data: T,
    pub(crate) next: K,
}

impl<T, K: Key> ChainNode<T, K> {
    #[inline]
    fn new(data: T, next: K) -> Self {
        Self { data, next }
    }
}

/// The payload-free anchor in front of the first real node.
#[derive(Debug, Clone, Copy)]
struct Sentinel<K> {
    next: K,
}

/// A place a link can be read from or written to.
#[derive(Debug, Clone, Copy)]
enum Pos<K> {
    Sentinel,
    Node(K),
}

/// A sentinel-anchored singly-linked chain.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `S`: Node storage (default [`ChainStorage<T>`], a `slab::Slab`)
/// - `K`: Key type of the storage (default `usize`)
///
/// # Example
///
/// ```
/// use anchor_collections::Chain;
///
/// let mut chain: Chain<&str> = Chain::from(["a", "b", "c"]);
///
/// assert_eq!(chain.get(1), Ok(&"b"));
/// assert_eq!(chain.set(1, "B"), Ok("b"));
/// assert_eq!(chain.delete(0), Ok("a"));
/// assert!(chain.get(2).is_err());
///
/// assert_eq!(chain.remove(&"c"), Some("c"));
/// assert_eq!(chain.remove(&"zzz"), None);
/// assert!(chain.contains(&"B"));
/// ```
pub struct Chain<T, S = ChainStorage<T>, K: Key = usize>
where
    S: Storage<ChainNode<T, K>, Key = K>,
{
    sentinel: Sentinel<K>,
    storage: S,
    _marker: PhantomData<T>,
}

impl<T> Chain<T> {
    /// Creates an empty chain backed by a fresh slab.
    #[inline]
    pub fn new() -> Self {
        Self::with_storage(slab::Slab::new())
    }

    /// Creates an empty chain whose slab can hold `capacity` nodes before
    /// reallocating.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_storage(slab::Slab::with_capacity(capacity))
    }
}

impl<T, S, K: Key> Default for Chain<T, S, K>
where
    S: Storage<ChainNode<T, K>, Key = K> + Default,
{
    fn default() -> Self {
        Self::with_storage(S::default())
    }
}

// =============================================================================
// Base impl - any storage (read/unlink operations)
// =============================================================================

impl<T, S, K: Key> Chain<T, S, K>
where
    S: Storage<ChainNode<T, K>, Key = K>,
{
    /// Creates an empty chain over the given storage.
    ///
    /// The chain takes exclusive ownership of `storage`. Any values already
    /// in it are dropped.
    pub fn with_storage(mut storage: S) -> Self {
        storage.clear();
        Self {
            sentinel: Sentinel { next: K::NONE },
            storage,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements, counted by walking the chain.
    ///
    /// This is O(n) on every call. The sentinel is not counted.
    pub fn len(&self) -> usize {
        let len = self.iter().count();
        debug_assert_eq!(len, self.storage.len(), "unreachable nodes in storage");
        len
    }

    /// Returns `true` if the chain holds no elements. O(1).
    #[inline]
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.sentinel.next.is_none(), self.storage.is_empty());
        self.sentinel.next.is_none()
    }

    /// Returns the first element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.data(self.sentinel.next.to_option()?)
    }

    /// Returns the last element. O(n).
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Compares chain lengths only.
    ///
    /// This is the ordering behind `<`, `<=`, `>` and `>=`. Content is
    /// ignored.
    pub fn cmp_len(&self, other: &Self) -> Ordering {
        self.len().cmp(&other.len())
    }

    // ========================================================================
    // Remove operations
    // ========================================================================

    /// Removes and returns the first element.
    ///
    /// Returns `None` if the chain is empty.
    #[inline]
    pub fn pop_left(&mut self) -> Option<T> {
        let first = self.sentinel.next.to_option()?;
        self.unlink(Pos::Sentinel, first)
    }

    /// Removes and returns the last element.
    ///
    /// Walks to the node before the tail, so this is O(n).
    /// Returns `None` if the chain is empty.
    pub fn pop(&mut self) -> Option<T> {
        let mut pred = Pos::Sentinel;
        let mut cur = self.sentinel.next.to_option()?;

        while let Some(next) = self.next_of(Pos::Node(cur)).to_option() {
            pred = Pos::Node(cur);
            cur = next;
        }

        self.unlink(pred, cur)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.sentinel.next = K::NONE;
    }

    // ========================================================================
    // Indexed access
    // ========================================================================

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] unless `index < self.len()`.
    pub fn get(&self, index: usize) -> Result<&T, OutOfRange> {
        let (_, key) = self.locate(index)?;
        self.data(key).ok_or_else(|| self.out_of_range(index))
    }

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] unless `index < self.len()`. `value` is
    /// dropped in that case.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, OutOfRange> {
        let (_, key) = self.locate(index)?;
        match self.storage.get_mut(key) {
            Some(node) => Ok(mem::replace(&mut node.data, value)),
            None => Err(self.out_of_range(index)),
        }
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] unless `index < self.len()`.
    pub fn delete(&mut self, index: usize) -> Result<T, OutOfRange> {
        let (pred, key) = self.locate(index)?;
        self.unlink(pred, key).ok_or_else(|| self.out_of_range(index))
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over references to elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, S, K> {
        Iter {
            storage: &self.storage,
            current: self.sentinel.next,
            _marker: PhantomData,
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    #[inline]
    fn data(&self, key: K) -> Option<&T> {
        self.storage.get(key).map(|node| &node.data)
    }

    /// Reads the successor link stored at `pos`.
    #[inline]
    fn next_of(&self, pos: Pos<K>) -> K {
        match pos {
            Pos::Sentinel => self.sentinel.next,
            Pos::Node(key) => self.storage.get(key).map_or(K::NONE, |node| node.next),
        }
    }

    /// Overwrites the successor link stored at `pos`.
    #[inline]
    fn set_next_of(&mut self, pos: Pos<K>, next: K) {
        match pos {
            Pos::Sentinel => self.sentinel.next = next,
            Pos::Node(key) => {
                if let Some(node) = self.storage.get_mut(key) {
                    node.next = next;
                }
            }
        }
    }

    /// Finds the node at `index` together with its predecessor.
    ///
    /// Walks `index` hops from the sentinel, then takes one more.
    fn locate(&self, index: usize) -> Result<(Pos<K>, K), OutOfRange> {
        let mut pred = Pos::Sentinel;
        for _ in 0..index {
            match self.next_of(pred).to_option() {
                Some(key) => pred = Pos::Node(key),
                None => return Err(self.out_of_range(index)),
            }
        }

        match self.next_of(pred).to_option() {
            Some(key) => Ok((pred, key)),
            None => Err(self.out_of_range(index)),
        }
    }

    #[cold]
    fn out_of_range(&self, index: usize) -> OutOfRange {
        OutOfRange {
            index,
            len: self.len(),
        }
    }

    /// Splices `key` out from behind `pred` and frees its slot.
    #[inline]
    fn unlink(&mut self, pred: Pos<K>, key: K) -> Option<T> {
        let node = self.storage.remove(key)?;
        self.set_next_of(pred, node.next);
        Some(node.data)
    }
}

// =============================================================================
// Search - needs element equality
// =============================================================================

impl<T: PartialEq, S, K: Key> Chain<T, S, K>
where
    S: Storage<ChainNode<T, K>, Key = K>,
{
    /// Returns the first element equal to `value`.
    pub fn find(&self, value: &T) -> Option<&T> {
        self.iter().find(|data| *data == value)
    }

    /// Returns `true` if any element equals `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Removes the first element equal to `value` and returns it.
    ///
    /// Returns `None`, leaving the chain untouched, if no element matches.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let mut pred = Pos::Sentinel;

        while let Some(key) = self.next_of(pred).to_option() {
            if self.data(key).is_some_and(|data| data == value) {
                return self.unlink(pred, key);
            }
            pred = Pos::Node(key);
        }

        None
    }
}

// =============================================================================
// Unbounded storage impl - infallible insertion
// =============================================================================

impl<T, S, K: Key> Chain<T, S, K>
where
    S: UnboundedStorage<ChainNode<T, K>, Key = K>,
{
    /// Appends a value after the last element.
    ///
    /// Walks to the tail, so this is O(n). Returns `self` for chaining.
    pub fn append(&mut self, value: T) -> &mut Self {
        let mut last = Pos::Sentinel;
        while let Some(key) = self.next_of(last).to_option() {
            last = Pos::Node(key);
        }

        self.link_after(last, value);
        self
    }

    /// Inserts a value directly after the sentinel. O(1).
    ///
    /// Returns `self` for chaining.
    #[inline]
    pub fn append_left(&mut self, value: T) -> &mut Self {
        self.link_after(Pos::Sentinel, value);
        self
    }

    #[inline]
    fn link_after(&mut self, pos: Pos<K>, value: T) -> K {
        let next = self.next_of(pos);
        let key = self.storage.insert(ChainNode::new(value, next));
        self.set_next_of(pos, key);
        key
    }
}

// =============================================================================
// Trait impls
// =============================================================================

impl<T: PartialEq, S, K: Key> PartialEq for Chain<T, S, K>
where
    S: Storage<ChainNode<T, K>, Key = K>,
{
    /// Position-wise equality: same length, equal values at every index.
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq, S, K: Key> Eq for Chain<T, S, K> where S: Storage<ChainNode<T, K>, Key = K> {}

impl<T: PartialEq, S, K: Key> PartialOrd for Chain<T, S, K>
where
    S: Storage<ChainNode<T, K>, Key = K>,
{
    /// Length ordering. Content is ignored, so equal-length chains compare
    /// `Equal` even when they are not `==`.
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp_len(other))
    }
}

impl<T: fmt::Display, S, K: Key> fmt::Display for Chain<T, S, K>
where
    S: Storage<ChainNode<T, K>, Key = K>,
{
    /// Renders `HEAD -> a -> b -> None`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HEAD")?;
        for data in self {
            write!(f, " -> {data}")?;
        }
        f.write_str(" -> None")
    }
}

impl<T: fmt::Debug, S, K: Key> fmt::Debug for Chain<T, S, K>
where
    S: Storage<ChainNode<T, K>, Key = K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone, S, K: Key> Clone for Chain<T, S, K>
where
    S: UnboundedStorage<ChainNode<T, K>, Key = K> + Default,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T, S, K: Key> Extend<T> for Chain<T, S, K>
where
    S: UnboundedStorage<ChainNode<T, K>, Key = K>,
{
    /// Appends each value in turn.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T, S, K: Key> FromIterator<T> for Chain<T, S, K>
where
    S: UnboundedStorage<ChainNode<T, K>, Key = K> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chain = Self::default();
        chain.extend(iter);
        chain
    }
}

impl<T, S, K: Key> From<Vec<T>> for Chain<T, S, K>
where
    S: UnboundedStorage<ChainNode<T, K>, Key = K> + Default,
{
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, S, K: Key, const N: usize> From<[T; N]> for Chain<T, S, K>
where
    S: UnboundedStorage<ChainNode<T, K>, Key = K> + Default,
{
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T, S, K: Key> IntoIterator for &'a Chain<T, S, K>
where
    S: Storage<ChainNode<T, K>, Key = K>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, S, K>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S, K: Key> IntoIterator for Chain<T, S, K>
where
    S: Storage<ChainNode<T, K>, Key = K>,
{
    type Item = T;
    type IntoIter = IntoIter<T, S, K>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { chain: self }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to chain elements, front to back.
pub struct Iter<'a, T, S, K: Key> {
    storage: &'a S,
    current: K,
    _marker: PhantomData<T>,
}

impl<'a, T: 'a, S, K: Key + 'a> Iterator for Iter<'a, T, S, K>
where
    S: Storage<ChainNode<T, K>, Key = K>,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.storage.get(self.current.to_option()?)?;
        self.current = node.next;
        Some(&node.data)
    }
}

impl<'a, T: 'a, S, K: Key + 'a> FusedIterator for Iter<'a, T, S, K> where
    S: Storage<ChainNode<T, K>, Key = K>
{
}

/// Owning iterator that pops elements from the front.
pub struct IntoIter<T, S, K: Key>
where
    S: Storage<ChainNode<T, K>, Key = K>,
{
    chain: Chain<T, S, K>,
}

impl<T, S, K: Key> Iterator for IntoIter<T, S, K>
where
    S: Storage<ChainNode<T, K>, Key = K>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.chain.pop_left()
    }
}

impl<T, S, K: Key> FusedIterator for IntoIter<T, S, K> where S: Storage<ChainNode<T, K>, Key = K> {}
