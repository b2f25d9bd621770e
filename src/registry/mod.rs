//! # Book Registry
//!
//! In-memory store of book records with monotonically assigned ids.
//! Nothing is persisted; a restart returns to the seed records.

pub mod book;
pub mod errors;
pub mod store;

pub use book::{Book, BookId, BookPatch, NewBook, ValidBook};
pub use errors::{RegistryError, RegistryResult};
pub use store::BookRegistry;
