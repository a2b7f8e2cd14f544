pub mod estimate_view_model;

pub use estimate_view_model::{EstimateViewModel, format_money};
