//! Sentinel-anchored linked chain and array-backed min-heap.
//!
//! Two independent building blocks for queue, stack and priority-queue
//! workloads (adjacency lists, graph search frontiers, scheduling by
//! priority):
//!
//! ```text
//! Chain<T>    - singly linked, sentinel anchor, nodes in a slab
//! MinHeap<T>  - complete binary tree in a Vec, smallest at the root
//! ```
//!
//! # Quick Start
//!
//! ```
//! use anchor_collections::{Chain, MinHeap};
//!
//! // Deque-style chain
//! let mut chain: Chain<u64> = Chain::new();
//! chain.append(2).append(3).append_left(1);
//! assert_eq!(chain.pop_left(), Some(1));
//! assert_eq!(chain.pop(), Some(3));
//!
//! // Priority queue
//! let mut heap: MinHeap<u64> = MinHeap::new();
//! heap.add(5);
//! heap.add(1);
//! assert_eq!(heap.poll(), Some(1));
//! ```
//!
//! # Storage
//!
//! Chain nodes are not boxed individually. They live in a slab and link to
//! each other by key, so each node is owned by exactly one slot and the
//! chain can never form a cycle or share a node:
//!
//! ```text
//! Storage (slab::Slab)  - owns nodes, provides stable keys
//! Chain                 - owns the storage and the sentinel link
//! ```
//!
//! Any type implementing [`UnboundedStorage`] can stand in for the slab via
//! [`Chain::with_storage`].
//!
//! # Data Structures
//!
//! | Structure | Use Case | Key Operations |
//! |-----------|----------|----------------|
//! | [`Chain`] | Queues, stacks, small sequences | O(1) `append_left`/`pop_left`, O(n) `append`/`pop`/`len` |
//! | [`MinHeap`] | Priority queues, heapsort | O(log n) `add`/`poll`, O(1) `peek`, O(n) `heapify` |
//!
//! # Missing Values
//!
//! Empty pops, empty peeks and failed searches return `None`. Because the
//! payload is generic, a stored `None` comes back as `Some(None)` and is
//! never mistaken for an empty container. Only indexed chain access has an
//! error type, [`OutOfRange`].

#![warn(missing_docs)]

pub mod chain;
pub mod error;
pub mod heap;
pub mod key;
#[cfg(test)]
mod latency;
pub mod sort;
pub mod storage;

pub use chain::{Chain, ChainNode, ChainStorage};
pub use error::OutOfRange;
pub use heap::{IntoIterSorted, MinHeap};
pub use key::Key;
pub use sort::{heapsort_aux, heapsort_in_place};
pub use storage::{Storage, UnboundedStorage};
