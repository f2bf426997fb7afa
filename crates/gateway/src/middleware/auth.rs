//! Authentication middleware.

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

use common::AppError;

use crate::state::AppState;

/// Caller identity resolved by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: String,
}

/// Authentication middleware.
///
/// Resolves the caller through the configured auth provider and injects the
/// [`CurrentUser`] into the request extensions. Requests without an identity
/// are answered with 403 before the body is read.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let id = state
        .auth_provider
        .user_id(request.headers())
        .ok_or(AppError::Unauthorized)?;

    request.extensions_mut().insert(CurrentUser { id });

    Ok(next.run(request).await)
}
