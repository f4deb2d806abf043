//! Value objects - immutable, validated-by-construction domain values.

mod option_mark;
mod progress;
mod role;
mod score;
mod stage;

pub use option_mark::OptionMark;
pub use progress::ProgressValue;
pub use role::Role;
pub use score::Score;
pub use stage::{Stage, COURTROOM_STEPS};
