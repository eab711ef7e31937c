//! Binary min-heap with caller-supplied scoring and in-place re-scoring.
//!
//! Unlike [`std::collections::BinaryHeap`], an element already in the queue
//! can be located, mutated and repaired without re-inserting it, which is what
//! the A* frontier needs when a node is reached again by a cheaper route.

use std::slice;

/// A binary min-heap ordered by a scoring function fixed at construction.
///
/// Elements are located by `PartialEq`, so they should compare by identity
/// (a node handle, an index), never by score. Order among equal scores is
/// unspecified; fold a tie-breaker into the score when it matters.
///
/// Uses 0-indexed storage with parent = (i-1)/2, children = 2i+1, 2i+2.
#[derive(Clone)]
pub struct PriorityQueue<T, F> {
    items: Vec<T>,
    score: F,
}

impl<T, F, K> PriorityQueue<T, F>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    /// Create an empty queue ordered by `score`.
    pub fn new(score: F) -> Self {
        Self {
            items: Vec::new(),
            score,
        }
    }

    /// Create an empty queue with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, score: F) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            score,
        }
    }

    /// Number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The minimum-scored element, if any.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Iterate over the queued elements in storage (not score) order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Remove every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Insert an element in O(log n).
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        let last = self.items.len() - 1;
        self.sift_up(last);
    }

    /// Remove and return the minimum-scored element in O(log n).
    ///
    /// Returns `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.items.len().checked_sub(1)?;
        self.items.swap(0, last);
        let top = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        top
    }

    /// Whether every parent scores no higher than its children.
    pub fn is_valid(&self) -> bool {
        (1..self.items.len()).all(|i| {
            let parent = (i - 1) / 2;
            (self.score)(&self.items[parent]) <= (self.score)(&self.items[i])
        })
    }

    /// Restore heap order for the element at `index` in either direction.
    fn repair(&mut self, index: usize) {
        let index = self.sift_up(index);
        self.sift_down(index);
    }

    /// Move the element at `index` towards the root. Returns its final slot.
    fn sift_up(&mut self, mut index: usize) -> usize {
        if self.items.len() == 1 {
            return index;
        }
        let score = (self.score)(&self.items[index]);
        while index > 0 {
            let parent = (index - 1) / 2;
            if score < (self.score)(&self.items[parent]) {
                self.items.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index
    }

    /// Move the element at `index` towards the leaves.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        if len == 1 {
            return;
        }
        let score = (self.score)(&self.items[index]);
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = None;

            if left < len {
                let ls = (self.score)(&self.items[left]);
                if ls < score {
                    smallest = Some((left, ls));
                }
            }
            if right < len {
                let rs = (self.score)(&self.items[right]);
                let beats = match &smallest {
                    Some((_, ls)) => rs < *ls,
                    None => rs < score,
                };
                if beats {
                    smallest = Some((right, rs));
                }
            }

            let Some((child, _)) = smallest else {
                break;
            };
            self.items.swap(index, child);
            index = child;
        }
    }
}

impl<T, F, K> PriorityQueue<T, F>
where
    T: PartialEq,
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|it| it == item)
    }

    /// Whether an element equal to `item` is queued.
    pub fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    /// Remove the element equal to `item` and return it.
    ///
    /// O(n) to find it plus O(log n) to repair. Returns `None` if absent.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let index = self.position(item)?;
        let removed = self.items.swap_remove(index);
        if index < self.items.len() {
            self.repair(index);
        }
        Some(removed)
    }

    /// Re-establish heap order for `item` after its score inputs changed
    /// outside the queue.
    ///
    /// Returns `false` if `item` is not queued.
    pub fn rescore(&mut self, item: &T) -> bool {
        match self.position(item) {
            Some(index) => {
                self.repair(index);
                true
            }
            None => false,
        }
    }

    /// Mutate the queued element equal to `item` in place, then repair the
    /// heap around it.
    ///
    /// Returns `false` (without calling `f`) if `item` is not queued.
    pub fn update(&mut self, item: &T, f: impl FnOnce(&mut T)) -> bool {
        match self.position(item) {
            Some(index) => {
                f(&mut self.items[index]);
                self.repair(index);
                true
            }
            None => false,
        }
    }
}
