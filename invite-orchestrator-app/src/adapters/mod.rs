//! Backend adapters for shells that do not bring their own gateway.

#[cfg(feature = "http-gateway")]
mod http_folder_gateway;

#[cfg(feature = "http-gateway")]
pub use http_folder_gateway::HttpFolderGateway;
