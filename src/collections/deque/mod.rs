//! `Deque` - a segmented double-ended queue.
//!
//! Elements live in fixed-capacity ring-buffer [`Segment`]s. The deque keeps a
//! circular array of segment handles (the *segment ring*) and a
//! [`SegmentPool`] of emptied segments that are reused instead of reallocated.
//!
//! Performance Characteristics:
//! - Push/Pop at either end: O(1) amortized
//! - Random access: O(1), via the index map (first segment, then full segments)
//! - Insert/Erase at `i`: cross-segment migration bounded by the distance to
//!   the nearer end in segments, plus a segment-local shift of the shorter side
//! - Ring resizing: O(segments in use), only when linking or unlinking a segment
//!
//! ```rust
//! use segdeque::Deque;
//!
//! let mut deque: Deque<i32> = (1..=5).collect();
//! assert_eq!(deque.to_string(), "[1 2 3 4 5]");
//!
//! deque.erase_at(1).unwrap();
//! deque.push_front(0);
//! deque.insert_at(2, 9);
//! assert_eq!(deque.to_string(), "[0 1 9 3 4 5]");
//! ```

mod migrate;
mod pool;
mod ring;
mod segment;


pub use pool::SegmentPool;
pub use segment::Segment;

use crate::config::DequeConfig;
use crate::error::{DequeError, Result};
use core::fmt;
use core::ops::{Index, IndexMut};

/// A double-ended queue built from pooled fixed-capacity ring buffers.
pub struct Deque<T> {
    /// Circular array of segment handles; `None` marks an unused slot.
    ring: Vec<Option<Segment<T>>>,
    /// Ring slot of the first in-use segment.
    begin: usize,
    /// Ring slot one past the last in-use segment.
    end: usize,
    /// Total number of live elements.
    len: usize,
    pool: SegmentPool<T>,
}

impl<T> Deque<T> {
    /// Creates an empty deque with the default segment capacity.
    pub fn new() -> Self {
        Self::from_segment_capacity(DequeConfig::new().segment_capacity)
    }

    /// Creates an empty deque from validated options.
    ///
    /// # Errors
    /// Returns [`DequeError::InvalidConfig`] if `config` fails validation.
    pub fn with_config(config: DequeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_segment_capacity(config.segment_capacity))
    }

    fn from_segment_capacity(segment_capacity: usize) -> Self {
        Self {
            ring: Vec::new(),
            begin: 0,
            end: 0,
            len: 0,
            pool: SegmentPool::new(segment_capacity),
        }
    }

    /// Returns the number of elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Capacity of each segment.
    #[inline(always)]
    pub fn segment_capacity(&self) -> usize {
        self.pool.segment_capacity()
    }

    /// Number of idle segments parked in the pool.
    #[inline(always)]
    pub fn pooled_segments(&self) -> usize {
        self.pool.len()
    }

    /// Prepends an element. Logical indices of existing elements shift up by one.
    pub fn push_front(&mut self, value: T) {
        self.front_with_room().put_front(value);
        self.len += 1;
    }

    /// Appends an element.
    pub fn push_back(&mut self, value: T) {
        self.back_with_room().put_back(value);
        self.len += 1;
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    /// Returns [`DequeError::Underflow`] if the deque is empty.
    pub fn pop_front(&mut self) -> Result<T> {
        let value = self
            .segment_mut(0)
            .and_then(Segment::take_front)
            .ok_or(DequeError::Underflow)?;
        self.len -= 1;
        if self.segment(0).is_some_and(Segment::is_empty) {
            self.unlink_front();
        }
        self.assert_invariants();
        Ok(value)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    /// Returns [`DequeError::Underflow`] if the deque is empty.
    pub fn pop_back(&mut self) -> Result<T> {
        let last = self.segments_in_use().checked_sub(1).ok_or(DequeError::Underflow)?;
        let value = self
            .segment_mut(last)
            .and_then(Segment::take_back)
            .ok_or(DequeError::Underflow)?;
        self.len -= 1;
        if self.segment(last).is_some_and(Segment::is_empty) {
            self.unlink_back();
        }
        self.assert_invariants();
        Ok(value)
    }

    /// Returns the first element.
    ///
    /// # Errors
    /// Returns [`DequeError::Underflow`] if the deque is empty.
    pub fn front(&self) -> Result<&T> {
        self.segment(0).ok_or(DequeError::Underflow)?.front()
    }

    /// Returns the last element.
    ///
    /// # Errors
    /// Returns [`DequeError::Underflow`] if the deque is empty.
    pub fn back(&self) -> Result<&T> {
        let last = self.segments_in_use().checked_sub(1).ok_or(DequeError::Underflow)?;
        self.segment(last).ok_or(DequeError::Underflow)?.back()
    }

    /// Returns a reference to the element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let (seg, offset) = self.locate(index);
        self.segment(seg)?.get(offset)
    }

    /// Returns a mutable reference to the element at `index`, if any.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let (seg, offset) = self.locate(index);
        self.segment_mut(seg)?.get_mut(offset)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`DequeError::OutOfRange`] if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.len;
        self.get(index).ok_or(DequeError::OutOfRange { index, len })
    }

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// # Errors
    /// Returns [`DequeError::OutOfRange`] if `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let len = self.len;
        self.get_mut(index)
            .map(|slot| core::mem::replace(slot, value))
            .ok_or(DequeError::OutOfRange { index, len })
    }

    /// Exchanges the elements at `a` and `b`.
    ///
    /// # Errors
    /// Returns [`DequeError::OutOfRange`] if either index is `>= len`.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let len = self.len;
        for index in [a, b] {
            if index >= len {
                return Err(DequeError::OutOfRange { index, len });
            }
        }
        if a == b {
            return Ok(());
        }
        let (seg_a, off_a) = self.locate(a);
        let (seg_b, off_b) = self.locate(b);
        if seg_a == seg_b {
            return self
                .segment_mut(seg_a)
                .ok_or(DequeError::OutOfRange { index: a, len })?
                .swap(off_a, off_b);
        }

        let (mut lo, mut hi) = ((self.slot_of(seg_a), off_a), (self.slot_of(seg_b), off_b));
        if lo.0 > hi.0 {
            core::mem::swap(&mut lo, &mut hi);
        }
        let (left, right) = self.ring.split_at_mut(hi.0);
        let x = left[lo.0].as_mut().and_then(|seg| seg.get_mut(lo.1));
        let y = right[0].as_mut().and_then(|seg| seg.get_mut(hi.1));
        if let (Some(x), Some(y)) = (x, y) {
            core::mem::swap(x, y);
        }
        Ok(())
    }

    /// Exchanges contents element by element with an equally long deque.
    ///
    /// # Errors
    /// Returns [`DequeError::LengthMismatch`] if the lengths differ; neither
    /// deque is modified in that case.
    pub fn swap_with(&mut self, other: &mut Self) -> Result<()> {
        if self.len != other.len {
            return Err(DequeError::LengthMismatch {
                left: self.len,
                right: other.len,
            });
        }
        for index in 0..self.len {
            if let (Some(x), Some(y)) = (self.get_mut(index), other.get_mut(index)) {
                core::mem::swap(x, y);
            }
        }
        Ok(())
    }

    /// Removes elements in `start..end`.
    ///
    /// Returns `false`, leaving the deque untouched, if the range is empty or
    /// extends past the end.
    pub fn erase_range(&mut self, start: usize, end: usize) -> bool {
        self.try_erase_range(start, end).is_ok()
    }

    /// Removes elements in `start..end`, overwriting the gap from whichever side
    /// needs fewer moves and then trimming the other end.
    ///
    /// # Errors
    /// Returns [`DequeError::InvalidRange`] if `start >= end` or `end > len`.
    pub fn try_erase_range(&mut self, start: usize, end: usize) -> Result<()> {
        if start >= end || end > self.len {
            return Err(DequeError::InvalidRange {
                start,
                end,
                len: self.len,
            });
        }
        let count = end - start;
        if self.len - start < end {
            // Fewer elements after the range: shift them left, drop the tail.
            for index in start..self.len - count {
                self.swap(index, index + count)?;
            }
            for _ in 0..count {
                self.pop_back()?;
            }
        } else {
            for index in (count..end).rev() {
                self.swap(index, index - count)?;
            }
            for _ in 0..count {
                self.pop_front()?;
            }
        }
        self.assert_invariants();
        Ok(())
    }

    /// Removes every element. Emptied segments go back to the pool.
    pub fn clear(&mut self) {
        let len = self.len;
        self.erase_range(0, len);
    }

    /// Drops idle pooled segments and packs the segment ring tightly.
    pub fn shrink_to_fit(&mut self) {
        self.pool.release();
        let used = self.segments_in_use();
        if self.ring.len() > used + 1 {
            self.repack(used + 1);
        }
    }

    /// Calls `visitor(index, &value)` for each element in logical order,
    /// stopping as soon as it returns `false`.
    pub fn traverse<F>(&self, mut visitor: F)
    where
        F: FnMut(usize, &T) -> bool,
    {
        let mut index = 0;
        for seg in 0..self.segments_in_use() {
            let Some(segment) = self.segment(seg) else {
                return;
            };
            let finished = segment.visit(|value| {
                let more = visitor(index, value);
                index += 1;
                more
            });
            if !finished {
                return;
            }
        }
    }

    /// Debug-asserts the structural invariants of the segment ring.
    pub(crate) fn assert_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        let used = self.segments_in_use();
        debug_assert!(self.ring.is_empty() || used < self.ring.len(), "segment ring overfull");
        debug_assert_eq!(self.len == 0, self.begin == self.end, "empty iff begin == end");

        let mut total = 0;
        for seg in 0..used {
            let Some(segment) = self.segment(seg) else {
                debug_assert!(false, "in-use ring slot {seg} is empty");
                return;
            };
            debug_assert!(!segment.is_empty(), "linked segment {seg} is empty");
            if seg > 0 && seg + 1 < used {
                debug_assert!(segment.is_full(), "interior segment {seg} is not full");
            }
            total += segment.len();
        }
        debug_assert_eq!(total, self.len, "segment lengths disagree with len");

        let linked = self.ring.iter().filter(|slot| slot.is_some()).count();
        debug_assert_eq!(linked, used, "segment outside the in-use range");
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Self {
        let mut out = Self::from_segment_capacity(self.segment_capacity());
        self.traverse(|_, value| {
            out.push_back(value.clone());
            true
        });
        out
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        let mut equal = true;
        self.traverse(|index, value| {
            equal = other.get(index) == Some(value);
            equal
        });
        equal
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        self.traverse(|_, value| {
            list.entry(value);
            true
        });
        list.finish()
    }
}

/// Renders `[a b c]`.
impl<T: fmt::Display> fmt::Display for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut result = Ok(());
        self.traverse(|index, value| {
            result = if index == 0 {
                write!(f, "{value}")
            } else {
                write!(f, " {value}")
            };
            result.is_ok()
        });
        result?;
        f.write_str("]")
    }
}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!("{}", DequeError::OutOfRange { index, len: self.len }),
        }
    }
}

impl<T> IndexMut<usize> for Deque<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("{}", DequeError::OutOfRange { index, len }),
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}
