//! Retry handling for metadata requests

pub mod retry;

pub use retry::{Classify, RetryConfig, RetryPolicy, RetryableError};
