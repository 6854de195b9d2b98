//! CLI command implementations.
//!
//! - `resolve`: Resolve layered configuration into deployment settings
//! - `parse`: Infer and validate roles for an inventory host
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod parse;
pub mod resolve;

pub use completions::CompletionsCommand;
pub use parse::ParseCommand;
pub use resolve::ResolveCommand;
