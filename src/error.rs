//! Error type shared by the deque, its segments and the adapters.

use core::fmt;

/// Errors reported by [`Deque`](crate::Deque), [`Segment`](crate::collections::deque::Segment)
/// and the queue/stack adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DequeError {
    /// A logical index fell outside `[0, len)`.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// A pop or peek was attempted on an empty container.
    Underflow,
    /// An erase range was empty, reversed, or extended past the end.
    InvalidRange {
        /// Inclusive lower bound that was requested.
        start: usize,
        /// Exclusive upper bound that was requested.
        end: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// Two containers that must have equal length did not.
    LengthMismatch {
        /// Length of the receiver.
        left: usize,
        /// Length of the argument.
        right: usize,
    },
    /// A push or insert targeted a segment that is already at capacity.
    SegmentFull {
        /// The segment's fixed capacity.
        capacity: usize,
    },
    /// A [`DequeConfig`](crate::DequeConfig) failed validation.
    InvalidConfig(&'static str),
}

impl fmt::Display for DequeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::OutOfRange { index, len } => {
                write!(f, "index out of range: index {index}, len {len}")
            }
            Self::Underflow => f.write_str("operation on an empty container"),
            Self::InvalidRange { start, end, len } => {
                write!(f, "invalid range {start}..{end} for len {len}")
            }
            Self::LengthMismatch { left, right } => {
                write!(f, "length mismatch: {left} != {right}")
            }
            Self::SegmentFull { capacity } => {
                write!(f, "segment is full (capacity {capacity})")
            }
            Self::InvalidConfig(reason) => write!(f, "invalid configuration: {reason}"),
        }
    }
}

impl std::error::Error for DequeError {}

/// Result alias used throughout the crate.
pub type Result<T, E = DequeError> = core::result::Result<T, E>;
