//! A contiguous, growable array with an explicit grow/shrink policy and a
//! fallible, index-based list interface.
//!
//! [`DynamicArray`] doubles its buffer when full and halves it once less than
//! half of it is in use, never shrinking below [`DEFAULT_CAPACITY`].

pub mod dynamic_array;
pub mod error;
pub mod list;

pub use dynamic_array::{DEFAULT_CAPACITY, DynamicArray};
pub use error::{ListError, Result};
pub use list::List;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub(crate) mod test_utils {
    /// Initialize a tracing subscriber that writes through the test harness.
    /// Defaults to TRACE so reallocations show up; `RUST_LOG` overrides it.
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
            )
            .with_test_writer()
            .try_init();
    }
}
