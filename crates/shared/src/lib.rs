//! Tribunal Shared - Wire-format types between the engine and a presentation layer
//!
//! This crate contains the request and response types a front end exchanges
//! with the engine:
//! - `PlayerAction` requests (one user intent each)
//! - `StageView` / `ActionResponse` responses (one screen each)
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and the domain vocabulary
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Conversions live in the engine** - this crate never sees a `Playthrough`

pub mod requests;
pub mod responses;

pub use requests::PlayerAction;
pub use responses::{
    ActionResponse, BadgeData, CourtHeader, OptionData, QuizQuestionData, ScoreData, StageView,
};
