//! Node-based lists.
//!
//! - [`SinglyLinkedList`]: forward links only, unique values
//! - [`DoublyLinkedList`]: links in both directions, duplicates allowed

pub mod doubly;
pub mod singly;

pub use doubly::DoublyLinkedList;
pub use singly::SinglyLinkedList;
