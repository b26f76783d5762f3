//! `SegmentPool` - a free list of emptied segments.
//!
//! Segments freed by pops and erasures are cleared and parked here instead of
//! being deallocated, so a deque that repeatedly grows and shrinks reuses the
//! same backing storage. The pool is a LIFO stack: the most recently returned
//! segment is handed out first, and trimming drops the newest entries, keeping
//! the oldest.

use super::segment::Segment;
use crate::macros::trace_event;

/// Idle segments are always allowed to reach this count, so push/pop traffic
/// oscillating across a segment boundary never reallocates.
const MIN_RETAINED: usize = 1;

/// A LIFO free list of empty segments, owned by a single deque.
pub struct SegmentPool<T> {
    idle: Vec<Segment<T>>,
    segment_capacity: usize,
}

impl<T> SegmentPool<T> {
    /// Creates an empty pool producing segments of `segment_capacity` slots.
    ///
    /// # Panics
    /// Panics if `segment_capacity` is zero.
    pub fn new(segment_capacity: usize) -> Self {
        assert!(segment_capacity != 0, "SegmentPool segment capacity must be > 0");
        Self {
            idle: Vec::new(),
            segment_capacity,
        }
    }

    /// Capacity of every segment this pool hands out.
    #[inline(always)]
    pub fn segment_capacity(&self) -> usize {
        self.segment_capacity
    }

    /// Number of idle segments currently retained.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.idle.len()
    }

    /// Returns `true` if no idle segment is retained.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.idle.is_empty()
    }

    /// Takes a recycled segment, or allocates a fresh one.
    pub fn get(&mut self) -> Segment<T> {
        match self.idle.pop() {
            Some(segment) => {
                debug_assert!(segment.is_empty(), "pooled segment must be empty");
                segment
            }
            None => {
                trace_event!(capacity = self.segment_capacity, "allocating segment");
                Segment::new(self.segment_capacity)
            }
        }
    }

    /// Clears `segment` and parks it for reuse.
    pub fn put(&mut self, mut segment: Segment<T>) {
        debug_assert_eq!(segment.capacity(), self.segment_capacity);
        segment.clear();
        self.idle.push(segment);
    }

    /// Bounds idle retention relative to `in_use`, the number of segments the
    /// owning deque currently links into its ring.
    ///
    /// Once `idle * 6 / 5` exceeds `in_use`, the pool is cut back to
    /// `max(in_use / 5, 1)` segments.
    pub fn trim(&mut self, in_use: usize) {
        let limit = Self::retention_limit(in_use);
        if self.idle.len() * 6 / 5 > in_use && self.idle.len() > limit {
            trace_event!(idle = self.idle.len(), limit, in_use, "trimming segment pool");
            self.idle.truncate(limit);
        }
    }

    /// Drops every idle segment.
    pub fn release(&mut self) {
        self.idle.clear();
        self.idle.shrink_to_fit();
    }

    #[inline]
    fn retention_limit(in_use: usize) -> usize {
        (in_use / 5).max(MIN_RETAINED)
    }
}
