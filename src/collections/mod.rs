//! Collections.
//!
//! - `deque`: the segmented deque and its building blocks (segments, pool)
//! - `adapters`: queue and stack views over any [`Container`]

pub mod adapters;
pub mod deque;

pub use adapters::{Container, Queue, ShardedQueue, ShardedStack, Stack, SyncQueue, SyncStack};
pub use deque::{Deque, Segment, SegmentPool};
