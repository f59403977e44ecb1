//! Linear Collections
//!
//! Foundational linear data structures:
//!
//! - **RingBuffer**: circular array with front insertion and automatic growth
//! - **DynamicArray**: bounds-checked wrapper over `Vec`
//! - **SinglyLinkedList**: forward-linked list of unique values
//! - **DoublyLinkedList**: arena-backed list walkable from both ends
//!
//! # Quick Start
//!
//! ```
//! use linear_collections::RingBuffer;
//!
//! let mut ring = RingBuffer::new(4);
//! for value in [4, 3, 2, 1] {
//!     ring.prepend(value);
//! }
//! assert_eq!(ring.get(0), Ok(&1));
//! assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
//! ```

// ─── Containers ────────────────────────────────────────────────────
pub mod array;
pub mod linked_list;

// ─── Support ───────────────────────────────────────────────────────
pub mod cli;
pub mod config;
pub mod errors;
pub mod observability;

pub use array::{DynamicArray, RingBuffer, RingBufferSnapshot};
pub use errors::{CollectionError, Result, RingBufferError};
pub use linked_list::{DoublyLinkedList, SinglyLinkedList};
