//! Request extraction helpers for the book routes.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::errors::ApiError;
use crate::registry::{BookId, RegistryError};

/// Book id taken from the `:id` path segment.
///
/// A segment that does not decode, or that [`parse_book_id`] rejects,
/// matches no book and is rejected as not-found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookIdPath(pub BookId);

#[async_trait]
impl<S> FromRequestParts<S> for BookIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let segment = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(segment)) => segment,
            Err(rejection) => {
                debug!(%rejection, "undecodable book id");
                return Err(RegistryError::NotFound.into());
            }
        };

        parse_book_id(&segment)
            .map(Self)
            .ok_or_else(|| RegistryError::NotFound.into())
    }
}

/// JSON request body with lenient framing.
///
/// An empty body, a body whose content type is not JSON, and a top-level
/// JSON array all decode as `T::default()`. Any other non-object JSON, or
/// an object that fails to decode into `T`, is rejected with
/// [`ApiError::MalformedBody`].
#[derive(Debug, Clone, Default)]
pub struct BookJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for BookJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Internal(format!("failed to read body: {}", e)))?;

        if !is_json || bytes.is_empty() {
            return Ok(Self(T::default()));
        }

        let value: Value =
            serde_json::from_slice(&bytes).map_err(|e| ApiError::MalformedBody(e.to_string()))?;
        if value.is_array() {
            return Ok(Self(T::default()));
        }
        if !value.is_object() {
            return Err(ApiError::MalformedBody("expected a JSON object".to_string()));
        }

        serde_json::from_value(value)
            .map(Self)
            .map_err(|e| ApiError::MalformedBody(e.to_string()))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = value.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Parse a book id from a path segment.
///
/// Takes the leading run of decimal digits after optional whitespace and an
/// optional `+`, so `"12abc"` yields 12. Anything without leading digits,
/// negative values, and values out of range yield `None`, which matches no
/// book.
pub fn parse_book_id(segment: &str) -> Option<BookId> {
    let s = segment.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);

    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(s.len());

    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_parse_book_id() {
        assert_eq!(parse_book_id("1"), Some(1));
        assert_eq!(parse_book_id("0042"), Some(42));
        assert_eq!(parse_book_id("12abc"), Some(12));
        assert_eq!(parse_book_id(" 7"), Some(7));
        assert_eq!(parse_book_id("+3"), Some(3));
        assert_eq!(parse_book_id("3.9"), Some(3));
    }

    #[test]
    fn test_parse_book_id_rejects_non_numbers() {
        assert_eq!(parse_book_id("abc"), None);
        assert_eq!(parse_book_id(""), None);
        assert_eq!(parse_book_id("-1"), None);
        assert_eq!(parse_book_id("99999999999999999999999"), None);
    }

    #[test]
    fn test_json_content_type_detection() {
        let mut headers = HeaderMap::new();
        assert!(!has_json_content_type(&headers));

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        assert!(has_json_content_type(&headers));

        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("Application/JSON; charset=utf-8"),
        );
        assert!(has_json_content_type(&headers));

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/merge-patch+json"));
        assert!(has_json_content_type(&headers));

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        assert!(!has_json_content_type(&headers));
    }
}
