//! Backend API adapters over a shared HTTP transport.

mod auth_client;
mod profile_client;
mod transport;

pub use auth_client::HttpAuthClient;
pub use profile_client::HttpProfileClient;
pub use transport::ApiTransport;
