//! Early-exit visitor protocol.
//!
//! The deque exposes no general iterator over its segments.
//! Read-only walks go through [`Traverse`]: the visitor receives
//! `(index, &value)` in logical order and returns `false` to stop.

use std::collections::VecDeque;

/// Containers that can be walked in order with an early-exit visitor.
pub trait Traverse<T> {
    /// Calls `visitor(index, &value)` for each element until it returns `false`.
    fn traverse<F>(&self, visitor: F)
    where
        F: FnMut(usize, &T) -> bool;
}

impl<T> Traverse<T> for crate::Deque<T> {
    #[inline]
    fn traverse<F>(&self, visitor: F)
    where
        F: FnMut(usize, &T) -> bool,
    {
        crate::Deque::traverse(self, visitor);
    }
}

impl<T> Traverse<T> for VecDeque<T> {
    fn traverse<F>(&self, mut visitor: F)
    where
        F: FnMut(usize, &T) -> bool,
    {
        for (index, value) in self.iter().enumerate() {
            if !visitor(index, value) {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Deque;

    fn collect_until<C: Traverse<u32>>(container: &C, stop: u32) -> Vec<(usize, u32)> {
        let mut seen = Vec::new();
        container.traverse(|index, &value| {
            seen.push((index, value));
            value != stop
        });
        seen
    }

    #[test]
    fn deque_and_vec_deque_agree() {
        let deque: Deque<u32> = (10..20).collect();
        let std_deque: VecDeque<u32> = (10..20).collect();
        assert_eq!(collect_until(&deque, 13), collect_until(&std_deque, 13));
        assert_eq!(collect_until(&deque, 13).len(), 4);
        assert_eq!(collect_until(&deque, 99).len(), 10);
    }
}
