//! Application layer - Use cases and orchestration

pub mod calculate;
pub mod show_config;

pub use calculate::{calculate, CalculateService, DischargeCalculation};
pub use show_config::ConfigService;
