//! Construction options for [`Deque`](crate::Deque).

use crate::error::{DequeError, Result};

/// Segment capacity used when none is configured.
pub const DEFAULT_SEGMENT_CAPACITY: usize = 128;

/// Validated construction options for a [`Deque`](crate::Deque).
///
/// ```rust
/// use segdeque::{Deque, DequeConfig};
///
/// let config = DequeConfig::default().with_segment_capacity(16);
/// let deque: Deque<u32> = Deque::with_config(config).unwrap();
/// assert_eq!(deque.segment_capacity(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DequeConfig {
    /// Number of elements each segment can hold.
    pub segment_capacity: usize,
}

impl DequeConfig {
    /// Creates the default configuration.
    pub const fn new() -> Self {
        Self {
            segment_capacity: DEFAULT_SEGMENT_CAPACITY,
        }
    }

    /// Sets the per-segment capacity.
    #[must_use]
    pub const fn with_segment_capacity(mut self, segment_capacity: usize) -> Self {
        self.segment_capacity = segment_capacity;
        self
    }

    /// Checks that the options describe a usable deque.
    ///
    /// # Errors
    /// Returns [`DequeError::InvalidConfig`] if `segment_capacity` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.segment_capacity == 0 {
            return Err(DequeError::InvalidConfig("segment capacity must be non-zero"));
        }
        Ok(())
    }
}

impl Default for DequeConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = DequeConfig::default();
        assert_eq!(config.segment_capacity, DEFAULT_SEGMENT_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let config = DequeConfig::new().with_segment_capacity(0);
        assert!(matches!(config.validate(), Err(DequeError::InvalidConfig(_))));
    }

    #[test]
    fn capacity_of_one_is_accepted() {
        assert!(DequeConfig::new().with_segment_capacity(1).validate().is_ok());
    }
}
