//! Infrastructure layer - Configuration sources

pub mod config;

pub use config::Config;
