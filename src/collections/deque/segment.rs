//! `Segment` - a fixed-capacity ring buffer block.
//!
//! A segment owns `capacity` slots. Logical element `i` (counted from the
//! segment's own front) lives at `slots[(begin + i) % capacity]`. Unused slots
//! hold `None`, so a cleared segment carries no stale values when it is
//! recycled through the pool.
//!
//! Performance Characteristics:
//! - Push/Pop at either end: O(1)
//! - Access: O(1) with modular arithmetic
//! - Insert/Erase at `i`: O(min(i, len - i)), always shifting the shorter side

use crate::error::{DequeError, Result};

/// A fixed-capacity ring buffer holding a contiguous run of deque elements.
pub struct Segment<T> {
    slots: Box<[Option<T>]>,
    begin: usize,
    end: usize,
    len: usize,
}

impl<T> Segment<T> {
    /// Creates an empty segment able to hold `capacity` elements.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity != 0, "Segment capacity must be > 0");
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            begin: 0,
            end: 0,
            len: 0,
        }
    }

    /// Returns the fixed capacity of the segment.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of live elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the segment holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the segment is at capacity.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Returns a reference to logical element `index`, if present.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[self.physical(index)].as_ref()
    }

    /// Returns a mutable reference to logical element `index`, if present.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let slot = self.physical(index);
        self.slots[slot].as_mut()
    }

    /// Returns a reference to logical element `index`.
    ///
    /// # Errors
    /// Returns [`DequeError::OutOfRange`] if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.get(index).ok_or(DequeError::OutOfRange {
            index,
            len: self.len,
        })
    }

    /// Replaces logical element `index`, returning the previous value.
    ///
    /// # Errors
    /// Returns [`DequeError::OutOfRange`] if `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let len = self.len;
        self.get_mut(index)
            .map(|slot| core::mem::replace(slot, value))
            .ok_or(DequeError::OutOfRange { index, len })
    }

    /// Returns the first element.
    ///
    /// # Errors
    /// Returns [`DequeError::Underflow`] if the segment is empty.
    pub fn front(&self) -> Result<&T> {
        self.get(0).ok_or(DequeError::Underflow)
    }

    /// Returns the last element.
    ///
    /// # Errors
    /// Returns [`DequeError::Underflow`] if the segment is empty.
    pub fn back(&self) -> Result<&T> {
        match self.len {
            0 => Err(DequeError::Underflow),
            len => self.get(len - 1).ok_or(DequeError::Underflow),
        }
    }

    /// Appends an element.
    ///
    /// # Errors
    /// Returns [`DequeError::SegmentFull`] if the segment is at capacity.
    pub fn push_back(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(self.full_error());
        }
        self.put_back(value);
        Ok(())
    }

    /// Prepends an element.
    ///
    /// # Errors
    /// Returns [`DequeError::SegmentFull`] if the segment is at capacity.
    pub fn push_front(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(self.full_error());
        }
        self.put_front(value);
        Ok(())
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    /// Returns [`DequeError::Underflow`] if the segment is empty.
    pub fn pop_back(&mut self) -> Result<T> {
        self.take_back().ok_or(DequeError::Underflow)
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    /// Returns [`DequeError::Underflow`] if the segment is empty.
    pub fn pop_front(&mut self) -> Result<T> {
        self.take_front().ok_or(DequeError::Underflow)
    }

    /// Inserts `value` so that it becomes logical element `index`.
    ///
    /// Shifts `min(index, len - index)` elements by one slot.
    ///
    /// # Errors
    /// Returns [`DequeError::OutOfRange`] if `index > len`, or
    /// [`DequeError::SegmentFull`] if there is no free slot. Nothing is moved
    /// on error.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(DequeError::OutOfRange {
                index,
                len: self.len,
            });
        }
        if self.is_full() {
            return Err(self.full_error());
        }
        self.insert_unchecked(index, value);
        Ok(())
    }

    /// Removes and returns logical element `index`, closing the gap from the
    /// shorter side.
    ///
    /// # Errors
    /// Returns [`DequeError::OutOfRange`] if `index >= len`.
    pub fn erase_at(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(DequeError::OutOfRange {
                index,
                len: self.len,
            });
        }
        let hole = self.physical(index);
        let removed = self.slots[hole].take().ok_or(DequeError::Underflow)?;

        if index < self.len - index - 1 {
            // Pull the front part one slot towards the back.
            for i in (0..index).rev() {
                let (to, from) = (self.physical(i + 1), self.physical(i));
                self.slots.swap(to, from);
            }
            self.begin = self.next(self.begin);
        } else {
            for i in index..self.len - 1 {
                let (to, from) = (self.physical(i), self.physical(i + 1));
                self.slots.swap(to, from);
            }
            self.end = self.prev(self.end);
        }
        self.len -= 1;
        Ok(removed)
    }

    /// Exchanges logical elements `a` and `b`.
    ///
    /// # Errors
    /// Returns [`DequeError::OutOfRange`] if either index is `>= len`.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        for index in [a, b] {
            if index >= self.len {
                return Err(DequeError::OutOfRange {
                    index,
                    len: self.len,
                });
            }
        }
        let (a, b) = (self.physical(a), self.physical(b));
        self.slots.swap(a, b);
        Ok(())
    }

    /// Drops every element and resets the cursors.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.begin = 0;
        self.end = 0;
        self.len = 0;
    }

    /// Visits elements in logical order; stops early when `f` returns `false`.
    ///
    /// Returns `false` if the visit was cut short.
    pub(crate) fn visit<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        (0..self.len).all(|i| self.slots[self.physical(i)].as_ref().map_or(true, &mut f))
    }

    /// Appends without a capacity check. The deque guarantees room.
    #[inline]
    pub(crate) fn put_back(&mut self, value: T) {
        debug_assert!(!self.is_full(), "put_back on a full segment");
        self.slots[self.end] = Some(value);
        self.end = self.next(self.end);
        self.len += 1;
    }

    /// Prepends without a capacity check. The deque guarantees room.
    #[inline]
    pub(crate) fn put_front(&mut self, value: T) {
        debug_assert!(!self.is_full(), "put_front on a full segment");
        self.begin = self.prev(self.begin);
        self.slots[self.begin] = Some(value);
        self.len += 1;
    }

    #[inline]
    pub(crate) fn take_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.end = self.prev(self.end);
        self.len -= 1;
        self.slots[self.end].take()
    }

    #[inline]
    pub(crate) fn take_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.begin].take();
        self.begin = self.next(self.begin);
        self.len -= 1;
        value
    }

    /// Inserts at `index <= len` into a segment that is not full.
    pub(crate) fn insert_unchecked(&mut self, index: usize, value: T) {
        debug_assert!(index <= self.len && !self.is_full());
        if index < self.len - index {
            // Open the hole at the front and walk it forward to `index`.
            self.begin = self.prev(self.begin);
            for i in 0..index {
                let (to, from) = (self.physical(i), self.physical(i + 1));
                self.slots.swap(to, from);
            }
        } else {
            // Open the hole at `end` and walk it back to `index`.
            for i in (index..self.len).rev() {
                let (to, from) = (self.physical(i + 1), self.physical(i));
                self.slots.swap(to, from);
            }
            self.end = self.next(self.end);
        }
        let slot = self.physical(index);
        self.slots[slot] = Some(value);
        self.len += 1;
    }

    #[inline(always)]
    fn physical(&self, index: usize) -> usize {
        (self.begin + index) % self.slots.len()
    }

    #[inline(always)]
    fn next(&self, slot: usize) -> usize {
        (slot + 1) % self.slots.len()
    }

    #[inline(always)]
    fn prev(&self, slot: usize) -> usize {
        (slot + self.slots.len() - 1) % self.slots.len()
    }

    fn full_error(&self) -> DequeError {
        DequeError::SegmentFull {
            capacity: self.capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(seg: &Segment<u32>) -> Vec<u32> {
        let mut out = Vec::new();
        seg.visit(|&x| {
            out.push(x);
            true
        });
        out
    }

    #[test]
    fn push_pop_both_ends() {
        let mut seg = Segment::new(4);
        assert!(seg.is_empty());
        seg.push_back(1).unwrap();
        seg.push_back(2).unwrap();
        seg.push_front(0).unwrap();
        assert_eq!(contents(&seg), vec![0, 1, 2]);
        assert_eq!(*seg.front().unwrap(), 0);
        assert_eq!(*seg.back().unwrap(), 2);

        assert_eq!(seg.pop_front().unwrap(), 0);
        assert_eq!(seg.pop_back().unwrap(), 2);
        assert_eq!(seg.pop_back().unwrap(), 1);
        assert_eq!(seg.pop_back(), Err(DequeError::Underflow));
        assert_eq!(seg.pop_front(), Err(DequeError::Underflow));
        assert_eq!(seg.front(), Err(DequeError::Underflow));
        assert_eq!(seg.back(), Err(DequeError::Underflow));
    }

    #[test]
    fn full_segment_rejects_pushes() {
        let mut seg = Segment::new(2);
        seg.push_back(1).unwrap();
        seg.push_front(0).unwrap();
        assert!(seg.is_full());
        assert_eq!(seg.push_back(9), Err(DequeError::SegmentFull { capacity: 2 }));
        assert_eq!(seg.push_front(9), Err(DequeError::SegmentFull { capacity: 2 }));
        assert_eq!(seg.insert(1, 9), Err(DequeError::SegmentFull { capacity: 2 }));
        assert_eq!(contents(&seg), vec![0, 1]);
    }

    #[test]
    fn wraps_around_storage() {
        let mut seg = Segment::new(4);
        for i in 1..=4 {
            seg.push_back(i).unwrap();
        }
        seg.pop_front().unwrap();
        seg.pop_front().unwrap();
        seg.push_back(5).unwrap();
        seg.push_back(6).unwrap();
        assert_eq!(contents(&seg), vec![3, 4, 5, 6]);
        assert_eq!(*seg.at(3).unwrap(), 6);
    }

    #[test]
    fn at_and_set_check_bounds() {
        let mut seg = Segment::new(4);
        seg.push_back(10).unwrap();
        seg.push_back(20).unwrap();
        assert_eq!(seg.set(1, 21).unwrap(), 20);
        assert_eq!(*seg.at(1).unwrap(), 21);
        assert_eq!(seg.at(2), Err(DequeError::OutOfRange { index: 2, len: 2 }));
        assert_eq!(seg.set(5, 0), Err(DequeError::OutOfRange { index: 5, len: 2 }));
    }

    #[test]
    fn insert_shifts_either_side() {
        let mut seg = Segment::new(8);
        for i in [0, 1, 2, 3, 4] {
            seg.push_back(i).unwrap();
        }
        // Front side is shorter.
        seg.insert(1, 10).unwrap();
        assert_eq!(contents(&seg), vec![0, 10, 1, 2, 3, 4]);
        // Back side is shorter.
        seg.insert(5, 20).unwrap();
        assert_eq!(contents(&seg), vec![0, 10, 1, 2, 3, 20, 4]);
        seg.insert(0, 30).unwrap();
        assert_eq!(contents(&seg), vec![30, 0, 10, 1, 2, 3, 20, 4]);
        assert!(seg.is_full());
    }

    #[test]
    fn insert_at_ends_and_out_of_range() {
        let mut seg = Segment::new(4);
        seg.insert(0, 2).unwrap();
        seg.insert(1, 3).unwrap();
        seg.insert(0, 1).unwrap();
        assert_eq!(contents(&seg), vec![1, 2, 3]);
        assert_eq!(seg.insert(5, 0), Err(DequeError::OutOfRange { index: 5, len: 3 }));
    }

    #[test]
    fn erase_closes_gap_from_shorter_side() {
        let mut seg = Segment::new(8);
        for i in 0..7 {
            seg.push_back(i).unwrap();
        }
        assert_eq!(seg.erase_at(1).unwrap(), 1);
        assert_eq!(contents(&seg), vec![0, 2, 3, 4, 5, 6]);
        assert_eq!(seg.erase_at(4).unwrap(), 5);
        assert_eq!(contents(&seg), vec![0, 2, 3, 4, 6]);
        assert_eq!(seg.erase_at(0).unwrap(), 0);
        assert_eq!(seg.erase_at(3).unwrap(), 6);
        assert_eq!(contents(&seg), vec![2, 3, 4]);
        assert_eq!(seg.erase_at(3), Err(DequeError::OutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn insert_and_erase_across_wrap() {
        let mut seg = Segment::new(5);
        for i in 0..5 {
            seg.push_back(i).unwrap();
        }
        seg.pop_front().unwrap();
        seg.pop_front().unwrap();
        seg.push_back(5).unwrap();
        // Physical layout now wraps: [5, _, 2, 3, 4] with begin at 2.
        seg.insert(2, 9).unwrap();
        assert_eq!(contents(&seg), vec![2, 3, 9, 4, 5]);
        assert_eq!(seg.erase_at(3).unwrap(), 4);
        assert_eq!(contents(&seg), vec![2, 3, 9, 5]);
    }

    #[test]
    fn clear_wipes_storage() {
        let mut seg = Segment::new(3);
        seg.push_back(String::from("a")).unwrap();
        seg.push_front(String::from("b")).unwrap();
        seg.clear();
        assert!(seg.is_empty());
        assert!(seg.slots.iter().all(Option::is_none));
        assert_eq!((seg.begin, seg.end), (0, 0));
    }

    #[test]
    fn swap_exchanges_elements() {
        let mut seg = Segment::new(4);
        for i in 0..3 {
            seg.push_back(i).unwrap();
        }
        seg.swap(0, 2).unwrap();
        assert_eq!(contents(&seg), vec![2, 1, 0]);
        assert_eq!(seg.swap(0, 3), Err(DequeError::OutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn visit_stops_early() {
        let mut seg = Segment::new(4);
        for i in 0..4 {
            seg.push_back(i).unwrap();
        }
        let mut seen = Vec::new();
        let finished = seg.visit(|&x| {
            seen.push(x);
            x < 1
        });
        assert!(!finished);
        assert_eq!(seen, vec![0, 1]);
    }

    #[test]
    #[should_panic(expected = "Segment capacity must be > 0")]
    fn zero_capacity_panics() {
        let _ = Segment::<u8>::new(0);
    }
}
