//! Domain layer - Sentence arithmetic and remission rules

pub mod calendar;
pub mod discharge;
pub mod duration;
pub mod policy;
pub mod remission;

pub use calendar::{days_in_calendar_month, fixed_to_calendar, CalendarDate, FixedDate};
pub use discharge::{earliest_discharge, subtract_remission};
pub use duration::{add_duration, SentenceDuration};
pub use policy::ShortSentencePolicy;
pub use remission::{calculate_remission, Remission, RemissionTier};
