//! Use cases - orchestration of the playthrough for a presentation layer.

pub mod session;

pub use session::PresentationSession;
