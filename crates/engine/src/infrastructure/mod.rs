//! Infrastructure - ports and the adapters behind them.

pub mod config;
pub mod content_sources;
pub mod ports;
