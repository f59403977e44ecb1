//! Doubly linked list backed by an index arena.
//!
//! Nodes are stored in a `Vec` and linked by slot index, so both directions
//! can be walked without shared ownership or raw pointers. Slots freed by a
//! removal are recycled by later insertions. Duplicate values are allowed.

struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

pub struct DoublyLinkedList<T> {
    nodes: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<&T> {
        self.head.and_then(|slot| self.node(slot)).map(|node| &node.value)
    }

    pub fn tail(&self) -> Option<&T> {
        self.tail.and_then(|slot| self.node(slot)).map(|node| &node.value)
    }

    /// True unless `0 <= index < len`.
    pub fn out_of_bounds(&self, index: isize) -> bool {
        if self.is_empty() {
            return true;
        }
        index < 0 || index as usize >= self.len
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    pub fn prepend(&mut self, value: T) {
        let slot = self.alloc(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(old_head) => self.link_mut(old_head).prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
        self.len += 1;
    }

    pub fn append(&mut self, value: T) {
        let slot = self.alloc(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(old_tail) => self.link_mut(old_tail).next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    /// Insert `value` before the node currently at `index`.
    pub fn insert_at_index(&mut self, value: T, index: isize) -> bool {
        if self.out_of_bounds(index) {
            return false;
        }
        if index == 0 {
            self.prepend(value);
            return true;
        }
        let Some(next) = self.slot_at(index as usize) else {
            return false;
        };
        let Some(prev) = self.node(next).and_then(|node| node.prev) else {
            return false;
        };
        let slot = self.alloc(Node {
            value,
            prev: Some(prev),
            next: Some(next),
        });
        self.link_mut(prev).next = Some(slot);
        self.link_mut(next).prev = Some(slot);
        self.len += 1;
        true
    }

    pub fn remove_head(&mut self) -> Option<T> {
        let slot = self.head?;
        let node = self.release(slot)?;
        match node.next {
            Some(next) => self.link_mut(next).prev = None,
            None => self.tail = None,
        }
        self.head = node.next;
        self.len -= 1;
        Some(node.value)
    }

    pub fn remove_tail(&mut self) -> Option<T> {
        let slot = self.tail?;
        let node = self.release(slot)?;
        match node.prev {
            Some(prev) => self.link_mut(prev).next = None,
            None => self.head = None,
        }
        self.tail = node.prev;
        self.len -= 1;
        Some(node.value)
    }

    fn node(&self, slot: usize) -> Option<&Node<T>> {
        self.nodes.get(slot).and_then(Option::as_ref)
    }

    /// Node at a slot that is known to be linked into the list.
    ///
    /// Every `head`, `tail`, `prev` and `next` link names an occupied slot.
    /// Callers of `release` only follow the freed node's own `prev`/`next`,
    /// which still point at live neighbours, so this never lands on `None`.
    fn link_mut(&mut self, slot: usize) -> &mut Node<T> {
        match self.nodes.get_mut(slot).and_then(Option::as_mut) {
            Some(node) => node,
            None => unreachable!("dangling link to slot {}", slot),
        }
    }

    fn slot_at(&self, index: usize) -> Option<usize> {
        let mut cursor = self.head;
        for _ in 0..index {
            cursor = self.node(cursor?)?.next;
        }
        cursor
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                slot
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, slot: usize) -> Option<Node<T>> {
        let node = self.nodes.get_mut(slot)?.take()?;
        self.free.push(slot);
        Some(node)
    }

    /// Unlink an interior node (one with both neighbours).
    fn unlink_interior(&mut self, slot: usize) -> Option<T> {
        let node = self.release(slot)?;
        if let (Some(prev), Some(next)) = (node.prev, node.next) {
            self.link_mut(prev).next = Some(next);
            self.link_mut(next).prev = Some(prev);
        }
        self.len -= 1;
        Some(node.value)
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    pub fn exists(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    pub fn find(&self, value: &T) -> Option<&T> {
        self.iter().find(|candidate| *candidate == value)
    }

    /// Remove the first node holding `value`.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let node = self.node(slot)?;
            if node.value == *value {
                if Some(slot) == self.head {
                    return self.remove_head();
                }
                if Some(slot) == self.tail {
                    return self.remove_tail();
                }
                return self.unlink_interior(slot);
            }
            cursor = node.next;
        }
        None
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.append(value);
        }
        list
    }
}

impl<T> From<Vec<T>> for DoublyLinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Walks the list from either end.
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
