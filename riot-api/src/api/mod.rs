pub mod client;
pub mod lol;
pub mod metrics;
pub mod request;
pub mod static_data;
