//! Synchronization strategies.

pub mod guard;

pub use guard::{Guard, Locked, Sharded, Unguarded};
