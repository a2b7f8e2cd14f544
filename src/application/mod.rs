// Process wiring from configuration
pub mod bootstrap;

// Currency conversion
pub mod currency;

// Model bundle and inference pipeline
pub mod ml;

// Prediction + conversion facade used by every surface
pub mod salary_service;

// Channel-based client for synchronous front-ends
pub mod client;
