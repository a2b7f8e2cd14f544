// Employee input domain
pub mod employee;

// Currency conversion domain
pub mod currency;

// Feature preprocessing domain
pub mod ml;

// Domain-specific error types
pub mod errors;
