//! Domain entities - The static tables consumed by the state machine

mod advocate;
mod question;
mod role_profile;
mod ruling;
mod witness;

pub use advocate::Advocate;
pub use question::{Question, MIN_OPTIONS};
pub use role_profile::{Highlight, RoleBadge, RoleProfile};
pub use ruling::{IntroCard, Ruling};
pub use witness::Witness;
