use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use uuid::Uuid;

static USER_ID_HEADER: &str = "x-user-id";

/// The verified caller identity, forwarded by the authentication layer in
/// front of this service. Requests without a parseable id are rejected before
/// any handler runs.
#[derive(Debug, Clone)]
pub struct Identity(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value).ok())
            .map(Identity)
            .ok_or(StatusCode::FORBIDDEN)
    }
}
