//! Segment-ring bookkeeping for [`Deque`].
//!
//! The ring is a circular array of optional segment handles. Slots in
//! `[begin, end)` (circularly) hold the in-use segments in logical order; every
//! other slot is `None`. The ring is grown before it could fill up, so
//! `begin == end` always means the deque is empty.

use super::segment::Segment;
use super::Deque;
use crate::macros::debug_event;

impl<T> Deque<T> {
    /// Number of slots in the segment ring.
    #[inline(always)]
    pub fn ring_capacity(&self) -> usize {
        self.ring.len()
    }

    /// Number of segments currently linked into the ring.
    #[inline]
    pub fn segments_in_use(&self) -> usize {
        let cap = self.ring.len();
        if cap == 0 {
            0
        } else {
            (self.end + cap - self.begin) % cap
        }
    }

    #[inline(always)]
    pub(super) fn next_slot(&self, slot: usize) -> usize {
        (slot + 1) % self.ring.len()
    }

    #[inline(always)]
    pub(super) fn prev_slot(&self, slot: usize) -> usize {
        (slot + self.ring.len() - 1) % self.ring.len()
    }

    /// Ring slot of the `seg`-th in-use segment.
    #[inline(always)]
    pub(super) fn slot_of(&self, seg: usize) -> usize {
        (self.begin + seg) % self.ring.len()
    }

    #[inline]
    pub(super) fn segment(&self, seg: usize) -> Option<&Segment<T>> {
        if seg >= self.segments_in_use() {
            return None;
        }
        self.ring[self.slot_of(seg)].as_ref()
    }

    #[inline]
    pub(super) fn segment_mut(&mut self, seg: usize) -> Option<&mut Segment<T>> {
        if seg >= self.segments_in_use() {
            return None;
        }
        let slot = self.slot_of(seg);
        self.ring[slot].as_mut()
    }

    /// Maps a logical index (`index < len`) to `(segment, offset)`.
    ///
    /// The first segment covers `[0, first.len())`; every later segment covers
    /// exactly `segment_capacity` indices, except possibly the last.
    #[inline]
    pub(super) fn locate(&self, index: usize) -> (usize, usize) {
        let first = self.segment(0).map_or(0, Segment::len);
        if index < first {
            return (0, index);
        }
        let rest = index - first;
        let capacity = self.segment_capacity();
        (rest / capacity + 1, rest % capacity)
    }

    /// Returns the first segment, linking a fresh one in front if the current
    /// first segment is full or absent.
    pub(super) fn front_with_room(&mut self) -> &mut Segment<T> {
        let has_room = self.segment(0).is_some_and(|seg| !seg.is_full());
        if !has_room {
            self.reserve_slot();
            self.begin = self.prev_slot(self.begin);
        }
        let pool = &mut self.pool;
        self.ring[self.begin].get_or_insert_with(|| pool.get())
    }

    /// Returns the last segment, linking a fresh one behind if the current
    /// last segment is full or absent.
    pub(super) fn back_with_room(&mut self) -> &mut Segment<T> {
        let used = self.segments_in_use();
        let has_room = used > 0 && self.segment(used - 1).is_some_and(|seg| !seg.is_full());
        let slot = if has_room {
            self.prev_slot(self.end)
        } else {
            self.reserve_slot();
            let slot = self.end;
            self.end = self.next_slot(self.end);
            slot
        };
        let pool = &mut self.pool;
        self.ring[slot].get_or_insert_with(|| pool.get())
    }

    /// Returns the first segment to the pool.
    pub(super) fn unlink_front(&mut self) {
        if let Some(segment) = self.ring[self.begin].take() {
            self.pool.put(segment);
        }
        self.begin = self.next_slot(self.begin);
        self.after_unlink();
    }

    /// Returns the last segment to the pool.
    pub(super) fn unlink_back(&mut self) {
        self.end = self.prev_slot(self.end);
        if let Some(segment) = self.ring[self.end].take() {
            self.pool.put(segment);
        }
        self.after_unlink();
    }

    fn after_unlink(&mut self) {
        self.pool.trim(self.segments_in_use());
        self.shrink_if_needed();
    }

    /// Makes sure one more segment can be linked without the ring filling up.
    pub(super) fn reserve_slot(&mut self) {
        if self.segments_in_use() + 1 >= self.ring.len() {
            self.expand();
        }
    }

    /// Doubles the ring relative to the segment count it is about to hold.
    fn expand(&mut self) {
        let capacity = 2 * (self.segments_in_use() + 1);
        debug_event!(
            from = self.ring.len(),
            to = capacity,
            segments = self.segments_in_use(),
            "expanding segment ring"
        );
        self.repack(capacity);
    }

    /// Halves the ring once usage drops well below capacity.
    fn shrink_if_needed(&mut self) {
        let used = self.segments_in_use();
        let cap = self.ring.len();
        if used * 12 < cap * 5 && used < cap / 2 {
            debug_event!(from = cap, to = cap / 2, segments = used, "shrinking segment ring");
            self.repack(cap / 2);
        }
    }

    /// Moves the in-use handles, in order, to the start of a fresh ring of
    /// `capacity` slots.
    pub(super) fn repack(&mut self, capacity: usize) {
        let used = self.segments_in_use();
        debug_assert!(used < capacity || (used == 0 && capacity == 0));
        let old_cap = self.ring.len();
        let mut old = core::mem::take(&mut self.ring);

        let mut ring = Vec::with_capacity(capacity);
        for seg in 0..used {
            ring.push(old[(self.begin + seg) % old_cap].take());
        }
        ring.resize_with(capacity, || None);

        self.ring = ring;
        self.begin = 0;
        self.end = used;
    }
}
