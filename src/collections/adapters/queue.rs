//! FIFO adapter.

use super::container::Container;
use crate::config::DequeConfig;
use crate::error::Result;
use crate::sync::{Guard, Locked, Sharded, Unguarded};
use crate::visitor::Traverse;
use crate::Deque;
use core::fmt;
use core::marker::PhantomData;

/// First-in first-out view over a [`Container`].
///
/// `push` appends at the back, `pop` removes from the front. The guard `G`
/// decides whether the queue may be shared between threads; see
/// [`SyncQueue`] and [`ShardedQueue`].
///
/// # Examples
///
/// ```
/// use segdeque::Queue;
///
/// let queue: Queue<u32> = Queue::new();
/// queue.push(1);
/// queue.push(2);
/// assert_eq!(queue.pop(), Ok(1));
/// assert_eq!(queue.to_string(), "[2]");
/// ```
pub struct Queue<T, C = Deque<T>, G = Unguarded<C>> {
    guard: G,
    _marker: PhantomData<fn() -> (T, C)>,
}

/// Queue behind a [`std::sync::RwLock`].
pub type SyncQueue<T, C = Deque<T>> = Queue<T, C, Locked<C>>;

/// Queue behind a [`crossbeam_utils::sync::ShardedLock`].
pub type ShardedQueue<T, C = Deque<T>> = Queue<T, C, Sharded<C>>;

impl<T, G: Guard<Deque<T>>> Queue<T, Deque<T>, G> {
    /// Creates an empty queue over a default [`Deque`].
    pub fn new() -> Self {
        Self::with_container(Deque::new())
    }

    /// Creates an empty queue over a [`Deque`] built from `config`.
    ///
    /// # Errors
    /// Propagates [`Deque::with_config`] errors.
    pub fn with_config(config: DequeConfig) -> Result<Self> {
        Ok(Self::with_container(Deque::with_config(config)?))
    }
}

impl<T, C: Container<T>, G: Guard<C>> Queue<T, C, G> {
    /// Wraps an existing container; its front is the head of the queue.
    pub fn with_container(container: C) -> Self {
        Self {
            guard: G::new(container),
            _marker: PhantomData,
        }
    }

    /// Appends `value` at the tail.
    pub fn push(&self, value: T) {
        self.guard.write(|c| c.push_back(value));
    }

    /// Removes the head.
    ///
    /// # Errors
    /// [`DequeError::Underflow`](crate::DequeError::Underflow) when empty.
    pub fn pop(&self) -> Result<T> {
        self.guard.write(|c| c.pop_front())
    }

    /// Returns a copy of the head.
    ///
    /// # Errors
    /// [`DequeError::Underflow`](crate::DequeError::Underflow) when empty.
    pub fn front(&self) -> Result<T>
    where
        T: Clone,
    {
        self.guard.read(|c| c.front().cloned())
    }

    /// Number of queued elements.
    pub fn len(&self) -> usize {
        self.guard.read(|c| c.len())
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.guard.read(|c| c.is_empty())
    }

    /// Drops every queued element.
    pub fn clear(&self) {
        self.guard.write(|c| c.clear());
    }

    /// Visits the elements from head to tail under the shared lock.
    pub fn traverse<F>(&self, visitor: F)
    where
        C: Traverse<T>,
        F: FnMut(usize, &T) -> bool,
    {
        self.guard.read(|c| c.traverse(visitor));
    }

    /// Direct access to the container through a unique borrow.
    pub fn get_mut(&mut self) -> &mut C {
        self.guard.get_mut()
    }

    /// Releases the container.
    pub fn into_inner(self) -> C {
        self.guard.into_inner()
    }
}

impl<T, C: Container<T> + Default, G: Guard<C>> Default for Queue<T, C, G> {
    fn default() -> Self {
        Self::with_container(C::default())
    }
}

impl<T, C: Container<T> + fmt::Display, G: Guard<C>> fmt::Display for Queue<T, C, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.guard.read(|c| fmt::Display::fmt(c, f))
    }
}

impl<T, C: Container<T> + fmt::Debug, G: Guard<C>> fmt::Debug for Queue<T, C, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.guard
            .read(|c| f.debug_struct("Queue").field("container", c).finish())
    }
}
