//! Singly linked list of unique values.
//!
//! Owned `Box` chain with a cached length. Insertions refuse a value that is
//! already present and report it by returning `false`.

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

pub struct SinglyLinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
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
        self.head.as_ref().map(|node| &node.value)
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
            next: self.head.as_deref(),
        }
    }

    pub fn remove_head(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    pub fn remove_tail(&mut self) -> Option<T> {
        match self.len {
            0 => None,
            1 => self.remove_head(),
            len => self.unlink_after(len - 2),
        }
    }

    /// Mutable access to the node at `index`, which must be `< len`.
    fn node_at_mut(&mut self, index: usize) -> Option<&mut Box<Node<T>>> {
        let mut cursor = self.head.as_mut();
        for _ in 0..index {
            cursor = cursor.and_then(|node| node.next.as_mut());
        }
        cursor
    }

    /// Remove the node following position `index`.
    fn unlink_after(&mut self, index: usize) -> Option<T> {
        let prev = self.node_at_mut(index)?;
        let mut removed = prev.next.take()?;
        prev.next = removed.next.take();
        self.len -= 1;
        Some(removed.value)
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    pub fn exists(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    pub fn find(&self, value: &T) -> Option<&T> {
        self.iter().find(|candidate| *candidate == value)
    }

    pub fn position(&self, value: &T) -> Option<usize> {
        self.iter().position(|candidate| candidate == value)
    }

    pub fn prepend(&mut self, value: T) -> bool {
        if self.exists(&value) {
            return false;
        }
        let node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
        true
    }

    pub fn append(&mut self, value: T) -> bool {
        if self.exists(&value) {
            return false;
        }
        let node = Box::new(Node { value, next: None });
        let mut cursor = &mut self.head;
        while let Some(current) = cursor {
            cursor = &mut current.next;
        }
        *cursor = Some(node);
        self.len += 1;
        true
    }

    /// Insert `value` before the node currently at `index`.
    pub fn insert_at_index(&mut self, value: T, index: isize) -> bool {
        if self.exists(&value) || self.out_of_bounds(index) {
            return false;
        }
        if index == 0 {
            return self.prepend(value);
        }
        let Some(prev) = self.node_at_mut(index as usize - 1) else {
            return false;
        };
        let next = prev.next.take();
        prev.next = Some(Box::new(Node { value, next }));
        self.len += 1;
        true
    }

    /// Unlink the node holding `value`.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        match self.position(value)? {
            0 => self.remove_head(),
            index => self.unlink_after(index - 1),
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T: PartialEq> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.append(value);
        }
        list
    }
}

impl<T: PartialEq> From<Vec<T>> for SinglyLinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
