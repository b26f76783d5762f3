//! Random insertion and erasure.
//!
//! Both operations edit one segment locally and then migrate single elements
//! between neighbouring segments towards whichever end of the deque is nearer,
//! measured in segments. Every interior segment gives one element and takes
//! one, so it stays full and the index map remains valid.

use super::segment::Segment;
use super::Deque;
use crate::error::{DequeError, Result};

impl<T> Deque<T> {
    /// Inserts `value` so that it ends up at logical position `index`.
    ///
    /// `index == 0` is a [`push_front`](Self::push_front) and `index >= len` a
    /// [`push_back`](Self::push_back).
    pub fn insert_at(&mut self, index: usize, value: T) {
        if index == 0 {
            return self.push_front(value);
        }
        if index >= self.len {
            return self.push_back(value);
        }
        let (seg, offset) = self.locate(index);
        let used = self.segments_in_use();
        if seg < used - seg {
            self.insert_toward_front(seg, offset, value);
        } else {
            self.insert_toward_back(seg, offset, value);
        }
        self.len += 1;
        self.assert_invariants();
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    /// Returns [`DequeError::OutOfRange`] if `index >= len`. The deque is not
    /// touched in that case.
    pub fn erase_at(&mut self, index: usize) -> Result<T> {
        let len = self.len;
        if index >= len {
            return Err(DequeError::OutOfRange { index, len });
        }
        let (seg, offset) = self.locate(index);
        let removed = self
            .segment_mut(seg)
            .ok_or(DequeError::OutOfRange { index, len })?
            .erase_at(offset)?;
        self.len -= 1;

        let used = self.segments_in_use();
        if seg + 1 < used - seg {
            // Refill from the front half; the first segment shrinks.
            for k in (1..=seg).rev() {
                self.migrate_back_to_front(k - 1, k);
            }
            if self.segment(0).is_some_and(Segment::is_empty) {
                self.unlink_front();
            }
        } else {
            for k in seg..used - 1 {
                self.migrate_front_to_back(k + 1, k);
            }
            if self.segment(used - 1).is_some_and(Segment::is_empty) {
                self.unlink_back();
            }
        }
        self.assert_invariants();
        Ok(removed)
    }

    /// Opens room by pushing one element per segment towards the front.
    fn insert_toward_front(&mut self, mut seg: usize, mut offset: usize, value: T) {
        if self.segment(0).map_or(true, Segment::is_full) {
            self.reserve_slot();
            self.begin = self.prev_slot(self.begin);
            self.ring[self.begin] = Some(self.pool.get());
            seg += 1;
        }
        if offset == 0 && seg > 0 {
            // The target heads its segment: append to the previous one instead.
            seg -= 1;
            offset = self.segment(seg).map_or(0, Segment::len);
        }
        for k in 0..seg {
            self.migrate_front_to_back(k + 1, k);
        }
        if seg > 0 {
            // The target segment gave away its first element.
            offset -= 1;
        }
        if let Some(target) = self.segment_mut(seg) {
            target.insert_unchecked(offset, value);
        }
    }

    /// Opens room by pushing one element per segment towards the back.
    fn insert_toward_back(&mut self, seg: usize, offset: usize, value: T) {
        let used = self.segments_in_use();
        if self.segment(used - 1).map_or(true, Segment::is_full) {
            self.reserve_slot();
            let slot = self.end;
            self.end = self.next_slot(self.end);
            self.ring[slot] = Some(self.pool.get());
        }
        let used = self.segments_in_use();
        for k in (seg + 1..used).rev() {
            self.migrate_back_to_front(k - 1, k);
        }
        if let Some(target) = self.segment_mut(seg) {
            target.insert_unchecked(offset, value);
        }
    }

    /// Moves the first element of segment `from` to the back of segment `to`.
    fn migrate_front_to_back(&mut self, from: usize, to: usize) {
        if let Some(value) = self.segment_mut(from).and_then(Segment::take_front) {
            if let Some(dst) = self.segment_mut(to) {
                dst.put_back(value);
            }
        }
    }

    /// Moves the last element of segment `from` to the front of segment `to`.
    fn migrate_back_to_front(&mut self, from: usize, to: usize) {
        if let Some(value) = self.segment_mut(from).and_then(Segment::take_back) {
            if let Some(dst) = self.segment_mut(to) {
                dst.put_front(value);
            }
        }
    }
}
