//! Request-scoped access control gate.

use crate::error::ApiError;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

/// The authenticated identity attached to a request.
///
/// The bearer token is opaque: it is never parsed or validated here, only
/// checked for presence and later compared against record owners. A
/// missing or empty token rejects the request uniformly, before any
/// handler or storage code runs. The gate is stateless and knows nothing
/// about document contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity(String);

impl Identity {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| Identity(token.to_string()))
            .ok_or(ApiError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Result<Identity, ApiError> {
        let (mut parts, ()) = request.into_parts();
        Identity::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_bearer_token_accepted() {
        let request = Request::builder()
            .header(AUTHORIZATION, "Bearer U1")
            .body(())
            .unwrap();
        let identity = extract(request).await.unwrap();
        assert_eq!(identity.as_str(), "U1");
    }

    #[tokio::test]
    async fn test_missing_header_rejected() {
        let request = Request::builder().body(()).unwrap();
        assert_eq!(extract(request).await, Err(ApiError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_empty_token_rejected() {
        let request = Request::builder()
            .header(AUTHORIZATION, "Bearer ")
            .body(())
            .unwrap();
        assert_eq!(extract(request).await, Err(ApiError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_rejected() {
        let request = Request::builder()
            .header(AUTHORIZATION, "Basic dXNlcjpwdw==")
            .body(())
            .unwrap();
        assert_eq!(extract(request).await, Err(ApiError::Unauthenticated));
    }
}
