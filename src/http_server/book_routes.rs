//! Book HTTP Routes
//!
//! CRUD endpoints over the shared [`BookRegistry`]. Unsupported methods on
//! a known path get the same 404 as an unknown path.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::errors::{route_not_found, ApiError, ApiResult, MessageResponse};
use super::extract::{BookIdPath, BookJson};
use crate::registry::{Book, BookPatch, BookRegistry, NewBook};

/// Plain-text body served at `/`
pub const WELCOME_MESSAGE: &str = "Book API Running";

/// Create book routes
pub fn book_routes(registry: Arc<BookRegistry>) -> Router {
    Router::new()
        .route("/", get(welcome_handler).fallback(route_not_found))
        .route(
            "/books",
            get(list_books_handler)
                .post(create_book_handler)
                .fallback(route_not_found),
        )
        .route(
            "/books/:id",
            get(get_book_handler)
                .put(update_book_handler)
                .delete(delete_book_handler)
                .fallback(route_not_found),
        )
        .with_state(registry)
}

async fn welcome_handler() -> &'static str {
    WELCOME_MESSAGE
}

async fn list_books_handler(
    State(registry): State<Arc<BookRegistry>>,
) -> ApiResult<Json<Vec<Book>>> {
    Ok(Json(registry.list()?))
}

async fn get_book_handler(
    State(registry): State<Arc<BookRegistry>>,
    BookIdPath(id): BookIdPath,
) -> ApiResult<Json<Book>> {
    Ok(Json(registry.get(id)?))
}

async fn create_book_handler(
    State(registry): State<Arc<BookRegistry>>,
    BookJson(new): BookJson<NewBook>,
) -> ApiResult<(StatusCode, Json<Book>)> {
    let book = registry.create(new)?;
    Ok((StatusCode::CREATED, Json(book)))
}

async fn update_book_handler(
    State(registry): State<Arc<BookRegistry>>,
    BookIdPath(id): BookIdPath,
    body: Result<BookJson<BookPatch>, ApiError>,
) -> ApiResult<Json<Book>> {
    // A missing book wins over a bad body
    let patch = match body {
        Ok(BookJson(patch)) => patch,
        Err(err) => {
            registry.get(id)?;
            return Err(err);
        }
    };
    Ok(Json(registry.update(id, patch)?))
}

async fn delete_book_handler(
    State(registry): State<Arc<BookRegistry>>,
    BookIdPath(id): BookIdPath,
) -> ApiResult<Json<MessageResponse>> {
    registry.delete(id)?;
    Ok(Json(MessageResponse::new("Book deleted successfully")))
}
