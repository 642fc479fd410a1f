//! Binary min-heap with an external ordering.
//!
//! The comparison is supplied by the caller instead of an `Ord` impl on the
//! element type. Elements with equal priority are not reordered by any
//! secondary key; their relative order is fixed by the sift discipline below,
//! so the same sequence of pushes and pops always yields the same elements in
//! the same order:
//!
//! - push appends and sifts toward the root while strictly less than the parent;
//! - pop moves the last element to the top, walks it down to a leaf along the
//!   smaller child (the right child when neither is less), then sifts it back up.
//!
//! Together with pushing leaves in first-occurrence order, this is the crate's
//! tie-break for equal frequencies. A first-in-first-out `(freq, seq)` key would
//! order ties differently and give a different code for the same input.

/// Min-priority queue ordered by a `less` predicate.
pub struct MinQueue<T, K> {
    items: Vec<T>,
    less: K,
}

impl<T, K> MinQueue<T, K>
where
    K: Fn(&T, &T) -> bool,
{
    /// Create an empty queue ordered by `less`.
    pub fn new(less: K) -> Self {
        Self {
            items: Vec::new(),
            less,
        }
    }

    /// Create an empty queue with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, less: K) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            less,
        }
    }

    /// Number of queued elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the queue holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The minimum element, if any.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Insert an element.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        let last = self.items.len() - 1;
        self.sift_up(0, last);
    }

    /// Remove and return the minimum element.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.items.pop()?;
        if self.items.is_empty() {
            return Some(last);
        }
        let top = std::mem::replace(&mut self.items[0], last);
        self.sift_down(0);
        Some(top)
    }

    fn sift_up(&mut self, start: usize, mut pos: usize) {
        while pos > start {
            let parent = (pos - 1) >> 1;
            if !(self.less)(&self.items[pos], &self.items[parent]) {
                break;
            }
            self.items.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, start: usize) {
        let end = self.items.len();
        let mut pos = start;
        let mut child = 2 * pos + 1;
        while child < end {
            let right = child + 1;
            if right < end && !(self.less)(&self.items[child], &self.items[right]) {
                child = right;
            }
            self.items.swap(pos, child);
            pos = child;
            child = 2 * pos + 1;
        }
        self.sift_up(start, pos);
    }
}
