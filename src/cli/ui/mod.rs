//! Terminal UI helpers for the CLI

pub mod spinner;

pub use spinner::{Spinner, with_spinner};
