// salonly-api: Async Rust client for the salonly booking backend

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::SalonClient;
pub use error::Error;
pub use transport::TransportConfig;
