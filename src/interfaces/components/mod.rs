pub mod card;
pub mod metrics;
