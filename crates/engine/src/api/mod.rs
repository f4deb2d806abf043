//! Entry points - wire-format conversion and the terminal driver.

pub mod stage_protocol;
pub mod terminal;
