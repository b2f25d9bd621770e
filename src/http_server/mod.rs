//! # HTTP Server Module
//!
//! Axum routing layer over the in-memory book registry.
//!
//! # Endpoints
//!
//! - `GET /` - Welcome text
//! - `GET /health` - Health check with the current book count
//! - `GET|POST /books` - List and create books
//! - `GET|PUT|DELETE /books/:id` - Fetch, update and delete a book

pub mod book_routes;
pub mod config;
pub mod errors;
pub mod extract;
pub mod health_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, MessageResponse};
pub use server::{build_router, with_error_boundary, HttpServer};
