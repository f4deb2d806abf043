//! Tribunal Engine library.
//!
//! Loads the content pack, owns the live playthrough and drives it from a
//! terminal.
//!
//! ## Structure
//!
//! - `infrastructure/` - Configuration, the content port and its adapters
//! - `use_cases/` - The presentation session wrapping the playthrough
//! - `api/` - Wire-format conversion and the terminal driver
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
