//! remit - Remission and discharge date calculator
//!
//! Computes the latest and earliest possible discharge dates for a prison
//! sentence. Sentence lengths are added on a fixed-unit calendar (30-day
//! months, 12-month years), remission is derived with tiered rules, and
//! the result is expressed as real calendar dates.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::RemitError;
