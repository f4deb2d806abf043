//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Returns domain events from mutations
//!
//! # Rustic DDD Principles
//!
//! | Java DDD Pattern | Rustic Equivalent |
//! |------------------|-------------------|
//! | Private fields + getters | Newtypes valid by construction |
//! | Aggregate root guards | Ownership (borrow checker enforces) |
//! | Factory pattern | `::new()` |
//! | Domain Events | Return enums from mutations |

pub mod playthrough;
pub mod quiz_progress;

pub use playthrough::{Playthrough, PlaythroughAction};
pub use quiz_progress::{QuizProgress, QuizStep};
