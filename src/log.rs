//! Logging for dropped elements, dropped attributes and skipped style
//! properties.
//!
//! `debug!` reports what the normalizer removes, `warn!` reports input it
//! could not make sense of. With the `tracing` feature these are the
//! `tracing` macros and the binary installs a subscriber on stderr; without
//! it they expand to nothing and a normalization run prints only its
//! progress lines.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
