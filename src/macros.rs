//! Logging shims.
//!
//! `tracing` is an optional dependency; these expand to an empty block unless
//! the `tracing` feature is enabled.

macro_rules! debug_event {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
    }};
}

macro_rules! trace_event {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    }};
}

pub(crate) use debug_event;
pub(crate) use trace_event;
