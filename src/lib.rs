//! Generate TypeScript declarations from an OData service's `$metadata`

pub mod api;
pub mod cli;
pub mod config;
pub mod metadata;
pub mod typegen;
pub mod ui;
