//! Content source implementations.
//!
//! Concrete types that satisfy the `ContentSource` port: the pack compiled
//! into the binary and a JSON file chosen at runtime.

pub mod builtin;
pub mod json_file;

pub use builtin::BuiltinContent;
pub use json_file::JsonFileContent;
