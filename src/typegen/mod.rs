//! TypeScript declaration generation from CSDL schemas

pub mod emit;
pub mod error;
pub mod generator;
pub mod header;
pub mod settings;
pub mod types;

pub use emit::{EmitOptions, SENTINEL, emit};
pub use error::GenerateError;
pub use generator::{Generated, Generator, normalize_source, render};
pub use header::{HEADER_PREFIX, HeaderMatch, find_header, render_header};
pub use settings::{BasicAuth, GeneratorSettings, Modularity, RequestOptions};
pub use types::{FALLBACK_TYPE, PrimitiveTypes};
