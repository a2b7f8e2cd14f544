pub mod services;

pub use services::ServicesBootstrap;
