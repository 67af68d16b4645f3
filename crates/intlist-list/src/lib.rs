//! Singly linked integer list
//!
//! The list owns its head node and every node owns its successor, so the
//! whole chain is released when the list is dropped. Traversal hands out
//! non-owning references only.

use std::fmt;

/// Errors for operations without a defined result
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("operation undefined on an empty list")]
    Empty,

    #[error("value {value} not in list")]
    NotFound { value: i64 },
}

struct Node {
    value: i64,
    next: Option<Box<Node>>,
}

/// A singly linked, head-referenced list of integers
///
/// Prepend is O(1); every other operation walks the chain from the head.
/// The node count is not cached, `len` counts by traversal.
#[derive(Default)]
pub struct IntegerList {
    head: Option<Box<Node>>,
}

impl IntegerList {
    /// Create an empty list (no nodes allocated)
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Number of nodes, counted by walking the chain. O(n).
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Prepend `value`; the new node becomes the head. O(1).
    pub fn push_head(&mut self, value: i64) {
        let node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
    }

    /// Append `value` after the last node; an empty list gets a new head. O(n).
    pub fn push_tail(&mut self, value: i64) {
        if self.head.is_none() {
            self.head = Some(Box::new(Node { value, next: None }));
            return;
        }
        let mut cur = self.head.as_mut();
        while let Some(node) = cur {
            if node.next.is_none() {
                node.next = Some(Box::new(Node { value, next: None }));
                return;
            }
            cur = node.next.as_mut();
        }
    }

    /// Insert `value` so it becomes the node at 0-based `index`
    ///
    /// `index == 0` is a prepend, `index == len` an append. A failed bounds
    /// check leaves the chain untouched.
    ///
    /// # Errors
    ///
    /// Returns `ListError::IndexOutOfRange` when `index > len`.
    pub fn insert(&mut self, index: usize, value: i64) -> Result<(), ListError> {
        if index == 0 {
            self.push_head(value);
            return Ok(());
        }
        let mut at = 0;
        let mut cur = self.head.as_mut();
        while let Some(node) = cur {
            at += 1;
            if at == index {
                let next = node.next.take();
                node.next = Some(Box::new(Node { value, next }));
                return Ok(());
            }
            cur = node.next.as_mut();
        }
        Err(ListError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Reverse the chain in place by re-linking each node to its
    /// predecessor. O(n) time, O(1) extra space.
    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
    }

    /// Release every node; the list is empty and reusable afterwards.
    ///
    /// Iterative so a long chain cannot overflow the stack through nested
    /// `Box` drops.
    pub fn clear(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }

    /// Remove the first node (head-to-tail) holding `value`
    ///
    /// Exactly one occurrence is removed per call.
    ///
    /// # Errors
    ///
    /// Returns `ListError::NotFound` when no node holds `value`.
    pub fn delete_value(&mut self, value: i64) -> Result<(), ListError> {
        let index = self
            .iter()
            .position(|&v| v == value)
            .ok_or(ListError::NotFound { value })?;
        self.delete_at(index).map(|_| ())
    }

    /// Remove the node at 0-based `index` and return its value
    ///
    /// # Errors
    ///
    /// Returns `ListError::IndexOutOfRange` when `index >= len`; the chain
    /// is untouched in that case.
    pub fn delete_at(&mut self, index: usize) -> Result<i64, ListError> {
        let len = self.len();
        if index >= len {
            return Err(ListError::IndexOutOfRange { index, len });
        }
        if index == 0 {
            let mut node = self
                .head
                .take()
                .ok_or(ListError::IndexOutOfRange { index, len })?;
            self.head = node.next.take();
            return Ok(node.value);
        }
        let mut at = 0;
        let mut cur = self.head.as_mut();
        while let Some(node) = cur {
            at += 1;
            if at == index {
                let mut removed = node
                    .next
                    .take()
                    .ok_or(ListError::IndexOutOfRange { index, len })?;
                node.next = removed.next.take();
                return Ok(removed.value);
            }
            cur = node.next.as_mut();
        }
        Err(ListError::IndexOutOfRange { index, len })
    }

    /// Arithmetic mean of all values
    ///
    /// # Errors
    ///
    /// Returns `ListError::Empty` for a list with zero nodes; the mean of
    /// nothing is undefined, not a silent division by zero.
    pub fn average(&self) -> Result<f64, ListError> {
        let mut count: usize = 0;
        let mut sum: i128 = 0;
        for &v in self.iter() {
            count += 1;
            sum += i128::from(v);
        }
        if count == 0 {
            return Err(ListError::Empty);
        }
        Ok(sum as f64 / count as f64)
    }

    /// Borrowing head-to-tail iterator
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

/// Borrowing iterator over the chain, head to tail
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a i64;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a> IntoIterator for &'a IntegerList {
    type Item = &'a i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<i64> for IntegerList {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut values: Vec<i64> = iter.into_iter().collect();
        let mut list = Self::new();
        while let Some(v) = values.pop() {
            list.push_head(v);
        }
        list
    }
}

/// Values head-to-tail, space separated
impl fmt::Display for IntegerList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for v in self.iter() {
            if first {
                first = false;
            } else {
                write!(f, " ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl Drop for IntegerList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for IntegerList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
