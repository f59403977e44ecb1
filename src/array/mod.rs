//! Contiguous containers: a bounds-checked dynamic array and a growable
//! circular array.

pub mod circular;
pub mod dynamic;

pub use circular::{RingBuffer, RingBufferSnapshot};
pub use dynamic::DynamicArray;
