//! book-registry - A minimal in-memory book registry served over HTTP
//!
//! Books live only in process memory; a restart resets the registry to its
//! three seed records.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod registry;
