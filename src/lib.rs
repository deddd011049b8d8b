pub mod config;
pub mod error;
pub mod fixtures;
pub mod http_client;
pub mod ingest;
pub mod normalize;
pub mod payload;
pub mod records;
pub mod render;
pub mod stats;
pub mod store;
