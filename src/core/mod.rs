//! Core module - configuration and the calculation error taxonomy

pub mod config;
pub mod error;

pub use config::EngineConfig;
pub use error::CalcError;
