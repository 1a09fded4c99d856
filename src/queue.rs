use std::collections::VecDeque;
use std::fmt;
use std::io::{self, Write};
use std::iter::FromIterator;

use crate::error::QueueError;

// =============================================================================
// Closed element set
// =============================================================================

mod sealed {
    pub trait Sealed {}

    impl Sealed for String {}
    impl Sealed for i64 {}
}

/// Element types a [`Queue`] accepts: `String` and `i64`, nothing else.
pub trait QueueItem: sealed::Sealed + fmt::Debug {}

impl QueueItem for String {}
impl QueueItem for i64 {}

// =============================================================================
// FIFO queue
// =============================================================================

/// First-in-first-out queue over a single growable sequence.
///
/// Not synchronized; share it across threads only behind your own lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T: QueueItem> {
    items: VecDeque<T>,
}

impl<T: QueueItem> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: QueueItem> Queue<T> {
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the front element.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        self.items.pop_front().ok_or(QueueError::Empty)
    }

    /// Returns the front element without removing it.
    pub fn peek(&self) -> Result<&T, QueueError> {
        self.items.front().ok_or(QueueError::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }

    /// Writes the backing sequence on one line, front first.
    pub fn display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }
}

impl<T: QueueItem> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: QueueItem> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: QueueItem> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}
