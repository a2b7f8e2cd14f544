pub mod rate_cache;

pub use rate_cache::{CurrencyRateCache, RateCacheSettings};
