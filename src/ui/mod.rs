//! Interactive prompts

pub mod prompts;
