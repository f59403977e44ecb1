//! Growable circular array with front insertion.
//!
//! Elements live in a fixed run of slots addressed modulo the capacity. The
//! logical element `i` (counted from the front) sits in physical slot
//! `(front + i) % capacity`. Prepending walks `front` backwards, wrapping from
//! slot 0 to `capacity - 1`, so no element is ever shifted.
//!
//! When every slot is taken, the next prepend first grows the storage to
//! `(capacity + 1) * 2`. The `+ 1` keeps growth strictly increasing from a
//! zero-capacity buffer. Growth copies the elements into slots
//! `0..len` of the new storage in logical order, un-wrapping the ring.
//!
//! Capacity never shrinks.

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::RingConfig;
use crate::errors::RingBufferError;

/// Capacity used by [`RingBuffer::default`].
pub const DEFAULT_CAPACITY: usize = 1;

/// Capacity a full buffer grows to on the next prepend.
#[inline]
pub fn grown_capacity(capacity: usize) -> usize {
    capacity.saturating_add(1).saturating_mul(2)
}

/// A capacity-bounded, front-insertable sequence that grows when full.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    front: Option<usize>,
    end: Option<usize>,
    len: usize,
}

/// Serialisable view of a ring buffer's state, contents in logical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RingBufferSnapshot<T> {
    pub capacity: usize,
    pub len: usize,
    pub front: Option<usize>,
    pub end: Option<usize>,
    pub elements: Vec<T>,
}

fn empty_slots<T>(capacity: usize) -> Vec<Option<T>> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> RingBuffer<T> {
    /// Create an empty buffer with exactly `capacity` slots. Zero is allowed.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity),
            front: None,
            end: None,
            len: 0,
        }
    }

    pub fn from_config(config: &RingConfig) -> Self {
        Self::new(config.initial_capacity)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Physical slot of the logical first element, `None` while empty.
    #[inline]
    pub fn front_index(&self) -> Option<usize> {
        self.front
    }

    /// Physical slot of the logical last element, `None` while empty.
    #[inline]
    pub fn end_index(&self) -> Option<usize> {
        self.end
    }

    /// True when `index` does not name a stored element. Always true while
    /// the buffer is empty.
    pub fn out_of_bounds(&self, index: isize) -> bool {
        if self.len == 0 {
            return true;
        }
        index < 0 || index as usize >= self.len
    }

    /// Element at logical position `index` (0 is the front).
    pub fn get(&self, index: isize) -> Result<&T, RingBufferError> {
        let out_of_range = RingBufferError::IndexOutOfRange {
            index,
            len: self.len,
        };
        if self.out_of_bounds(index) {
            return Err(out_of_range);
        }
        let front = self.front.ok_or_else(|| out_of_range.clone())?;
        let slot = (front + index as usize) % self.capacity();
        self.slots[slot].as_ref().ok_or(out_of_range)
    }

    /// Grow the storage to `new_capacity` slots, un-wrapping the contents so the
    /// front lands in slot 0. Fails without side effects unless
    /// `new_capacity > capacity`.
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), RingBufferError> {
        if new_capacity <= self.capacity() {
            return Err(RingBufferError::InvalidResize {
                requested: new_capacity,
                capacity: self.capacity(),
            });
        }
        self.relocate(new_capacity);
        Ok(())
    }

    /// Insert `elem` as the new logical front, growing first if full.
    pub fn prepend(&mut self, elem: T) {
        if self.is_full() {
            let grown = grown_capacity(self.capacity());
            debug!(
                from = self.capacity(),
                to = grown,
                len = self.len,
                "ring buffer full, growing before prepend"
            );
            self.relocate(grown);
        }

        let slot = match self.front {
            None => {
                self.end = Some(0);
                0
            }
            Some(0) => self.capacity() - 1,
            Some(front) => front - 1,
        };
        trace!(slot, wrapped = slot + 1 == self.capacity() && self.len > 0, "prepend");

        self.slots[slot] = Some(elem);
        self.front = Some(slot);
        self.len += 1;
    }

    /// Iterate from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            front: self.front.unwrap_or(0),
            pos: 0,
            len: self.len,
        }
    }

    /// Move every element into fresh storage of `new_capacity` slots. Callers
    /// guarantee `new_capacity > capacity`.
    fn relocate(&mut self, new_capacity: usize) {
        let old_capacity = self.capacity();
        let mut old = std::mem::replace(&mut self.slots, empty_slots(new_capacity));

        if let Some(front) = self.front {
            for i in 0..self.len {
                self.slots[i] = old[(front + i) % old_capacity].take();
            }
            self.front = Some(0);
            self.end = Some(self.len - 1);
        }

        debug!(
            from = old_capacity,
            to = new_capacity,
            len = self.len,
            "ring buffer resized"
        );
    }
}

impl<T: Clone> RingBuffer<T> {
    pub fn snapshot(&self) -> RingBufferSnapshot<T> {
        RingBufferSnapshot {
            capacity: self.capacity(),
            len: self.len,
            front: self.front,
            end: self.end,
            elements: self.iter().cloned().collect(),
        }
    }
}

impl<T> Default for RingBuffer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Front-to-back iterator over a [`RingBuffer`].
pub struct Iter<'a, T> {
    slots: &'a [Option<T>],
    front: usize,
    pos: usize,
    len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.len {
            return None;
        }
        let slot = (self.front + self.pos) % self.slots.len();
        self.pos += 1;
        self.slots[slot].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.pos;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
