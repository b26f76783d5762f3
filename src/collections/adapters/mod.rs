//! Queue and stack adapters.
//!
//! Both hold any [`Container`] (by default a [`Deque`](crate::Deque)) behind a
//! [`Guard`](crate::sync::Guard) and expose a narrower operation set. Read-only
//! calls take the guard's shared side, mutating calls its exclusive side.

pub mod container;
pub mod queue;
pub mod stack;

pub use container::Container;
pub use queue::{Queue, ShardedQueue, SyncQueue};
pub use stack::{ShardedStack, Stack, SyncStack};
