//! LIFO adapter.

use super::container::Container;
use crate::config::DequeConfig;
use crate::error::Result;
use crate::sync::{Guard, Locked, Sharded, Unguarded};
use crate::visitor::Traverse;
use crate::Deque;
use core::fmt;
use core::marker::PhantomData;

/// Last-in first-out view over a [`Container`].
///
/// The container's front is the top of the stack.
///
/// # Examples
///
/// ```
/// use segdeque::Stack;
///
/// let stack: Stack<char> = Stack::new();
/// stack.push('a');
/// stack.push('b');
/// assert_eq!(stack.top(), Ok('b'));
/// assert_eq!(stack.pop(), Ok('b'));
/// assert_eq!(stack.len(), 1);
/// ```
pub struct Stack<T, C = Deque<T>, G = Unguarded<C>> {
    guard: G,
    _marker: PhantomData<fn() -> (T, C)>,
}

/// Stack behind a [`std::sync::RwLock`].
pub type SyncStack<T, C = Deque<T>> = Stack<T, C, Locked<C>>;

/// Stack behind a [`crossbeam_utils::sync::ShardedLock`].
pub type ShardedStack<T, C = Deque<T>> = Stack<T, C, Sharded<C>>;

impl<T, G: Guard<Deque<T>>> Stack<T, Deque<T>, G> {
    /// Creates an empty stack over a default [`Deque`].
    pub fn new() -> Self {
        Self::with_container(Deque::new())
    }

    /// Creates an empty stack over a [`Deque`] built from `config`.
    ///
    /// # Errors
    /// Propagates [`Deque::with_config`] errors.
    pub fn with_config(config: DequeConfig) -> Result<Self> {
        Ok(Self::with_container(Deque::with_config(config)?))
    }
}

impl<T, C: Container<T>, G: Guard<C>> Stack<T, C, G> {
    /// Wraps an existing container; its front is the top.
    pub fn with_container(container: C) -> Self {
        Self {
            guard: G::new(container),
            _marker: PhantomData,
        }
    }

    /// Pushes `value` on top.
    pub fn push(&self, value: T) {
        self.guard.write(|c| c.push_front(value));
    }

    /// Removes the top.
    ///
    /// # Errors
    /// [`DequeError::Underflow`](crate::DequeError::Underflow) when empty.
    pub fn pop(&self) -> Result<T> {
        self.guard.write(|c| c.pop_front())
    }

    /// Returns a copy of the top.
    ///
    /// # Errors
    /// [`DequeError::Underflow`](crate::DequeError::Underflow) when empty.
    pub fn top(&self) -> Result<T>
    where
        T: Clone,
    {
        self.guard.read(|c| c.front().cloned())
    }

    /// Number of stacked elements.
    pub fn len(&self) -> usize {
        self.guard.read(|c| c.len())
    }

    /// Returns `true` if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.guard.read(|c| c.is_empty())
    }

    /// Drops every element.
    pub fn clear(&self) {
        self.guard.write(|c| c.clear());
    }

    /// Visits the elements from top to bottom under the shared lock.
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

impl<T, C: Container<T> + Default, G: Guard<C>> Default for Stack<T, C, G> {
    fn default() -> Self {
        Self::with_container(C::default())
    }
}

impl<T, C: Container<T> + fmt::Display, G: Guard<C>> fmt::Display for Stack<T, C, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.guard.read(|c| fmt::Display::fmt(c, f))
    }
}

impl<T, C: Container<T> + fmt::Debug, G: Guard<C>> fmt::Debug for Stack<T, C, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.guard
            .read(|c| f.debug_struct("Stack").field("container", c).finish())
    }
}
