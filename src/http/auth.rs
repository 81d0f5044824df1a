use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::app::auth::AuthService;
use crate::http::AppError;
use crate::AppState;

/// Resolved session for routes behind the auth gate. Absent or invalid
/// credentials short-circuit with 401 before the handler body runs.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: uuid::Uuid,
}

pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("No autorizado"))?;

    value
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthorized("No autorizado"))
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;

        let service = AuthService::new(state.db.clone(), state.session_ttl_hours);
        let session = service.authenticate(token).await.map_err(|err| {
            tracing::error!(error = ?err, "failed to resolve session");
            AppError::internal("Error interno del servidor")
        })?;

        let session = session.ok_or_else(|| AppError::unauthorized("No autorizado"))?;
        Ok(AuthUser {
            user_id: session.user_id,
        })
    }
}
