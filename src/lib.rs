//! # `segdeque` - Segmented Double-Ended Queue
//!
//! A deque assembled from fixed-capacity ring-buffer segments. Segments are
//! linked through a circular array of handles and recycled through a pool, so
//! steady push/pop traffic at either end does not allocate.
//!
//! ## Key Features
//!
//! - **O(1) ends**: push and pop at both ends touch one segment
//! - **O(1) indexing**: every segment but the first and last is full, so a
//!   logical index maps to `(segment, offset)` arithmetically
//! - **Local insert/erase**: elements shift inside one segment and migrate one
//!   per segment towards the nearer end
//! - **Adapters**: [`Queue`] and [`Stack`] over any [`Container`], with the
//!   locking strategy chosen by type ([`Unguarded`], [`Locked`], [`Sharded`])
//!
//! ## Architecture
//!
//! 1. **Segment** ([`Segment`]): ring buffer with bounded capacity and
//!    shorter-side shifting for positional edits.
//! 2. **Pool** ([`SegmentPool`]): LIFO reuse of emptied segments with a
//!    retention limit proportional to the segments in use.
//! 3. **Deque** ([`Deque`]): the segment ring, index map and migration logic.
//! 4. **Adapters** ([`Queue`], [`Stack`]): FIFO/LIFO views behind a [`Guard`].
//!
//! ## Example
//!
//! ```rust
//! use segdeque::{Deque, DequeConfig, SyncQueue};
//!
//! let config = DequeConfig::new().with_segment_capacity(4);
//! let mut deque = Deque::with_config(config).unwrap();
//! for i in 0..10 {
//!     deque.push_back(i);
//! }
//! assert_eq!(deque.segments_in_use(), 3);
//! assert_eq!(deque[7], 7);
//!
//! let queue: SyncQueue<&str> = SyncQueue::new();
//! std::thread::scope(|s| {
//!     s.spawn(|| queue.push("from a thread"));
//! });
//! assert_eq!(queue.pop(), Ok("from a thread"));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod macros;

pub mod collections;
pub mod config;
pub mod error;
pub mod sync;
pub mod visitor;

pub use collections::{
    Container, Deque, Queue, Segment, SegmentPool, ShardedQueue, ShardedStack, Stack, SyncQueue,
    SyncStack,
};
pub use config::{DequeConfig, DEFAULT_SEGMENT_CAPACITY};
pub use error::{DequeError, Result};
pub use sync::{Guard, Locked, Sharded, Unguarded};
pub use visitor::Traverse;
