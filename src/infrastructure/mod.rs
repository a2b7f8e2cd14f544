pub mod exchange_rate;
pub mod http_client_factory;
pub mod mock;
