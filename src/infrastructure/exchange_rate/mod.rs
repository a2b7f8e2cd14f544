pub mod er_api;
pub mod fixed;

pub use er_api::ErApiRateSource;
pub use fixed::FixedRateSource;
