//! Error and metadata types shared across the client and server engines

pub mod client;
pub mod server;
