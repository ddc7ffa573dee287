//! Internal diagnostics.
//!
//! With the `tracing` feature enabled these forward to the matching `tracing`
//! macros; without it they expand to nothing and their arguments are not
//! evaluated.

macro_rules! trace_event {
    ($($arg:tt)*) => {
        {
            #[cfg(feature = "tracing")]
            ::tracing::trace!($($arg)*);
        }
    };
}

macro_rules! debug_event {
    ($($arg:tt)*) => {
        {
            #[cfg(feature = "tracing")]
            ::tracing::debug!($($arg)*);
        }
    };
}

pub(crate) use debug_event;
pub(crate) use trace_event;
