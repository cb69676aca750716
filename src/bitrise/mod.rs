pub mod bitrise_endpoint;
pub mod bitrise_model;
#[cfg(test)]
pub mod mock_bitrise_server;
pub mod query;
pub mod token_bitrise_async_client;

pub const BITRISE_API_DOMAIN: &str = "https://api.bitrise.io";
pub const BITRISE_API_VERSION: &str = "v0.1";
