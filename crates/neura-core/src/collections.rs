//! Bounded, ordered histories.
//!
//! Every collection in the day model is capped and always drops its oldest
//! entry on overflow. Two layouts exist and are kept distinct on purpose:
//!
//! - [`Layout::NewestFirst`]: insert at the front, truncate the back
//!   (tasks, focus sessions, finance ledger).
//! - [`Layout::Fifo`]: append at the back, pop the front (study queue).

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

pub const TASK_CAPACITY: usize = 40;
pub const FOCUS_SESSION_CAPACITY: usize = 20;
pub const STUDY_QUEUE_CAPACITY: usize = 12;
pub const FINANCE_CAPACITY: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    NewestFirst,
    Fifo,
}

/// Capped sequence with a fixed eviction end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundedHistory<T> {
    items: VecDeque<T>,
    capacity: usize,
    layout: Layout,
}

impl<T> BoundedHistory<T> {
    pub fn new(capacity: usize, layout: Layout) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
            layout,
        }
    }

    pub fn newest_first(capacity: usize) -> Self {
        Self::new(capacity, Layout::NewestFirst)
    }

    pub fn fifo(capacity: usize) -> Self {
        Self::new(capacity, Layout::Fifo)
    }

    /// Insert at the layout's "new" end, then evict down to capacity.
    ///
    /// Returns the evicted entry, if any.
    pub fn insert(&mut self, item: T) -> Option<T> {
        match self.layout {
            Layout::NewestFirst => {
                self.items.push_front(item);
                if self.items.len() > self.capacity {
                    self.items.pop_back()
                } else {
                    None
                }
            }
            Layout::Fifo => {
                self.items.push_back(item);
                if self.items.len() > self.capacity {
                    self.items.pop_front()
                } else {
                    None
                }
            }
        }
    }

    /// Replace the whole collection, keeping the given order and the first
    /// `capacity` entries.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items.into_iter().take(self.capacity).collect();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Iterate in stored order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn find_mut(&mut self, pred: impl FnMut(&&mut T) -> bool) -> Option<&mut T> {
        self.items.iter_mut().find(pred)
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first_evicts_the_back() {
        let mut h = BoundedHistory::newest_first(TASK_CAPACITY);
        for i in 0..TASK_CAPACITY {
            assert!(h.insert(i).is_none());
        }
        assert_eq!(h.len(), 40);
        assert_eq!(h.get(0), Some(&39));
        assert_eq!(h.get(39), Some(&0));

        // 41st insert drops the oldest, which sits at index 40 after the prepend.
        let evicted = h.insert(40);
        assert_eq!(evicted, Some(0));
        assert_eq!(h.len(), 40);
        assert_eq!(h.get(0), Some(&40));
        assert_eq!(h.get(39), Some(&1));
    }

    #[test]
    fn fifo_evicts_the_front() {
        let mut h = BoundedHistory::fifo(STUDY_QUEUE_CAPACITY);
        for i in 0..13 {
            h.insert(i);
        }
        assert_eq!(h.len(), 12);
        assert_eq!(h.get(0), Some(&1));
        assert_eq!(h.get(11), Some(&12));
    }

    #[test]
    fn both_layouts_keep_the_same_survivors() {
        let mut front = BoundedHistory::newest_first(3);
        let mut back = BoundedHistory::fifo(3);
        for i in 0..5 {
            front.insert(i);
            back.insert(i);
        }
        let mut a: Vec<_> = front.to_vec();
        a.reverse();
        assert_eq!(a, back.to_vec());
        assert_eq!(a, vec![2, 3, 4]);
    }

    #[test]
    fn replace_all_keeps_first_n() {
        let mut h = BoundedHistory::newest_first(FOCUS_SESSION_CAPACITY);
        h.insert(99);
        h.replace_all((0..25).collect());
        assert_eq!(h.len(), 20);
        assert_eq!(h.get(0), Some(&0));
        assert_eq!(h.get(19), Some(&19));
    }

    #[test]
    fn find_mut_updates_in_place() {
        let mut h = BoundedHistory::newest_first(4);
        h.insert(1);
        h.insert(2);
        if let Some(v) = h.find_mut(|v| **v == 1) {
            *v = 10;
        }
        assert_eq!(h.to_vec(), vec![2, 10]);
    }
}
