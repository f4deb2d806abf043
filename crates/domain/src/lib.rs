extern crate self as tribunal_domain;

pub mod aggregates;
pub mod content;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use aggregates::{Playthrough, PlaythroughAction, QuizProgress, QuizStep};

pub use content::{ContentPack, ContentTables};

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    Advocate, Highlight, IntroCard, Question, RoleBadge, RoleProfile, Ruling, Witness, MIN_OPTIONS,
};

pub use error::DomainError;
pub use events::{PlaythroughUpdate, Rejection};

// Re-export ID types
pub use ids::PlaythroughId;

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{OptionMark, ProgressValue, Role, Score, Stage, COURTROOM_STEPS};
