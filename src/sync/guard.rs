//! Lock strategies for the container adapters.
//!
//! A [`Guard`] owns a container and hands out scoped access to it. Picking the
//! strategy is a type-level decision: [`Unguarded`] is free of atomics but not
//! `Sync`, [`Locked`] wraps a [`std::sync::RwLock`] and [`Sharded`] a
//! [`crossbeam_utils::sync::ShardedLock`], which favours read-heavy workloads.
//!
//! Lock poisoning is recovered from. Adapter operations leave the container
//! consistent at every step, so a panic in another thread cannot leave
//! observable damage behind.

use core::cell::RefCell;
use crossbeam_utils::sync::ShardedLock;
use std::sync::{PoisonError, RwLock};

/// Scoped shared and exclusive access to an owned value.
pub trait Guard<C> {
    /// Takes ownership of `inner`.
    fn new(inner: C) -> Self;

    /// Runs `f` with shared access.
    fn read<R>(&self, f: impl FnOnce(&C) -> R) -> R;

    /// Runs `f` with exclusive access.
    fn write<R>(&self, f: impl FnOnce(&mut C) -> R) -> R;

    /// Exclusive access through a unique borrow; never blocks.
    fn get_mut(&mut self) -> &mut C;

    /// Releases the guarded value.
    fn into_inner(self) -> C;
}

/// Single-threaded strategy built on [`RefCell`].
///
/// # Panics
/// Re-entrant access from inside a `read`/`write` closure panics, as it would
/// deadlock under the locking strategies.
#[derive(Debug, Default)]
pub struct Unguarded<C>(RefCell<C>);

impl<C> Guard<C> for Unguarded<C> {
    #[inline]
    fn new(inner: C) -> Self {
        Self(RefCell::new(inner))
    }

    #[inline]
    fn read<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        f(&self.0.borrow())
    }

    #[inline]
    fn write<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }

    #[inline]
    fn get_mut(&mut self) -> &mut C {
        self.0.get_mut()
    }

    #[inline]
    fn into_inner(self) -> C {
        self.0.into_inner()
    }
}

/// Reader-writer strategy built on [`RwLock`].
#[derive(Debug, Default)]
pub struct Locked<C>(RwLock<C>);

impl<C> Guard<C> for Locked<C> {
    fn new(inner: C) -> Self {
        Self(RwLock::new(inner))
    }

    fn read<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        let guard = self.0.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn write<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        let mut guard = self.0.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    fn get_mut(&mut self) -> &mut C {
        self.0.get_mut().unwrap_or_else(PoisonError::into_inner)
    }

    fn into_inner(self) -> C {
        self.0.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Reader-writer strategy built on [`ShardedLock`].
///
/// Reads only touch a per-thread shard, so concurrent `front`/`len` calls do
/// not contend; writes lock every shard.
#[derive(Debug, Default)]
pub struct Sharded<C>(ShardedLock<C>);

impl<C> Guard<C> for Sharded<C> {
    fn new(inner: C) -> Self {
        Self(ShardedLock::new(inner))
    }

    fn read<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        let guard = self.0.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn write<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        let mut guard = self.0.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    fn get_mut(&mut self) -> &mut C {
        self.0.get_mut().unwrap_or_else(PoisonError::into_inner)
    }

    fn into_inner(self) -> C {
        self.0.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
