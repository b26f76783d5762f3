//! The double-ended container capability consumed by the adapters.

use crate::error::{DequeError, Result};
use crate::Deque;
use std::collections::VecDeque;

/// Double-ended storage a [`Queue`](super::Queue) or [`Stack`](super::Stack)
/// can delegate to.
///
/// Rendering is left to [`Display`](core::fmt::Display); adapters implement it
/// whenever their container does.
pub trait Container<T> {
    /// Appends an element.
    fn push_back(&mut self, value: T);
    /// Prepends an element.
    fn push_front(&mut self, value: T);
    /// Removes the last element.
    ///
    /// # Errors
    /// [`DequeError::Underflow`] when empty.
    fn pop_back(&mut self) -> Result<T>;
    /// Removes the first element.
    ///
    /// # Errors
    /// [`DequeError::Underflow`] when empty.
    fn pop_front(&mut self) -> Result<T>;
    /// Returns the first element.
    ///
    /// # Errors
    /// [`DequeError::Underflow`] when empty.
    fn front(&self) -> Result<&T>;
    /// Returns the last element.
    ///
    /// # Errors
    /// [`DequeError::Underflow`] when empty.
    fn back(&self) -> Result<&T>;
    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool;
    /// Returns the number of elements.
    fn len(&self) -> usize;
    /// Removes every element.
    fn clear(&mut self);
}

impl<T> Container<T> for Deque<T> {
    #[inline]
    fn push_back(&mut self, value: T) {
        Deque::push_back(self, value);
    }

    #[inline]
    fn push_front(&mut self, value: T) {
        Deque::push_front(self, value);
    }

    #[inline]
    fn pop_back(&mut self) -> Result<T> {
        Deque::pop_back(self)
    }

    #[inline]
    fn pop_front(&mut self) -> Result<T> {
        Deque::pop_front(self)
    }

    #[inline]
    fn front(&self) -> Result<&T> {
        Deque::front(self)
    }

    #[inline]
    fn back(&self) -> Result<&T> {
        Deque::back(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Deque::is_empty(self)
    }

    #[inline]
    fn len(&self) -> usize {
        Deque::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        Deque::clear(self);
    }
}

impl<T> Container<T> for VecDeque<T> {
    fn push_back(&mut self, value: T) {
        VecDeque::push_back(self, value);
    }

    fn push_front(&mut self, value: T) {
        VecDeque::push_front(self, value);
    }

    fn pop_back(&mut self) -> Result<T> {
        VecDeque::pop_back(self).ok_or(DequeError::Underflow)
    }

    fn pop_front(&mut self) -> Result<T> {
        VecDeque::pop_front(self).ok_or(DequeError::Underflow)
    }

    fn front(&self) -> Result<&T> {
        VecDeque::front(self).ok_or(DequeError::Underflow)
    }

    fn back(&self) -> Result<&T> {
        VecDeque::back(self).ok_or(DequeError::Underflow)
    }

    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn clear(&mut self) {
        VecDeque::clear(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise<C: Container<u32>>(mut container: C) {
        assert!(container.is_empty());
        assert_eq!(container.pop_front(), Err(DequeError::Underflow));
        assert_eq!(container.back(), Err(DequeError::Underflow));

        container.push_back(2);
        container.push_back(3);
        container.push_front(1);
        assert_eq!(container.len(), 3);
        assert_eq!(container.front(), Ok(&1));
        assert_eq!(container.back(), Ok(&3));
        assert_eq!(container.pop_back(), Ok(3));
        assert_eq!(container.pop_front(), Ok(1));

        container.clear();
        assert!(container.is_empty());
        assert_eq!(container.pop_back(), Err(DequeError::Underflow));
    }

    #[test]
    fn deque_satisfies_contract() {
        exercise(Deque::new());
    }

    #[test]
    fn vec_deque_satisfies_contract() {
        exercise(VecDeque::new());
    }
}
