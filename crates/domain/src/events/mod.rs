//! Domain Events
//!
//! Return types from aggregate mutations, communicating what happened when
//! state was (or was not) modified. The engine maps them to log lines and
//! to the wire-level `ActionResponse`.

pub mod playthrough_events;

pub use playthrough_events::*;
