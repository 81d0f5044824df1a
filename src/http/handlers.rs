use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::app::auth::AuthService;
use crate::app::hotels::HotelService;
use crate::app::notifications::NotificationService;
use crate::app::offers::{OfferCreator, OfferWizard};
use crate::app::packages::PackageService;
use crate::app::users::{PreferencesPatch, UserService};
use crate::domain::notification::Notification;
use crate::domain::offer::{Offer, OfferDraft};
use crate::http::auth::bearer_token;
use crate::http::{AppError, AuthUser};
use crate::AppState;

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Success half of the response envelope: `{ "success": true, "data": ... }`.
#[derive(Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Serialize)]
pub struct CountResponse {
    pub success: bool,
    pub count: i64,
}

/// Ids arrive as raw path segments; anything that is not a UUID can only
/// name a nonexistent record, so it gets the same 404 as a miss.
fn parse_id(raw: &str, not_found_message: &'static str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::not_found(not_found_message))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub(crate) struct HealthResponse {
    status: &'static str,
}

pub(crate) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let status = if state.db.ping().await.is_ok() {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse { status })
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub token: String,
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<DataResponse<SessionResponse>>, AppError> {
    if payload.email.trim().is_empty() || payload.password.trim().is_empty() {
        return Err(AppError::bad_request(
            "Correo y contraseña son obligatorios",
        ));
    }

    let service = AuthService::new(state.db.clone(), state.session_ttl_hours);
    let session = service
        .login(&payload.email, &payload.password)
        .await
        .map_err(|err| {
            tracing::error!(error = ?err, "failed to login");
            AppError::internal("Error interno del servidor")
        })?;

    match session {
        Some(session) => Ok(Json(DataResponse::new(SessionResponse {
            token: session.token,
            expires_at: session.expires_at,
        }))),
        None => Err(AppError::unauthorized("Credenciales inválidas")),
    }
}

pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let token = bearer_token(&headers)?;

    let service = AuthService::new(state.db.clone(), state.session_ttl_hours);
    let revoked = service.revoke(token).await.map_err(|err| {
        tracing::error!(error = ?err, "failed to revoke session");
        AppError::internal("Error interno del servidor")
    })?;

    if !revoked {
        return Err(AppError::unauthorized("No autorizado"));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Current user
// ---------------------------------------------------------------------------

pub async fn get_me(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<DataResponse<crate::domain::user::ClientUser>>, AppError> {
    let service = UserService::new(state.db.clone());
    let user = service.get_client_user(auth.user_id).await.map_err(|err| {
        tracing::error!(error = ?err, user_id = %auth.user_id, "failed to fetch current user");
        AppError::internal("Error interno del servidor")
    })?;

    let user = user.ok_or_else(|| AppError::not_found("Usuario no encontrado"))?;
    Ok(Json(DataResponse::new(user)))
}

pub async fn update_preferences(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(patch): Json<PreferencesPatch>,
) -> Result<Json<DataResponse<crate::domain::user::ClientUser>>, AppError> {
    let service = UserService::new(state.db.clone());
    let user = service
        .update_preferences(auth.user_id, patch)
        .await
        .map_err(|err| {
            tracing::error!(error = ?err, user_id = %auth.user_id, "failed to update preferences");
            AppError::internal("Error interno del servidor")
        })?;

    let user = user.ok_or_else(|| AppError::not_found("Usuario no encontrado"))?;
    Ok(Json(DataResponse::new(user)))
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
}

pub async fn unread_count(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<CountResponse>, AppError> {
    let service = NotificationService::new(state.db.clone());
    let count = service.unread_count(auth.user_id).await.map_err(|err| {
        tracing::error!(error = ?err, user_id = %auth.user_id, "failed to count notifications");
        AppError::internal("Error interno del servidor")
    })?;

    Ok(Json(CountResponse {
        success: true,
        count,
    }))
}

pub async fn list_notifications(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<DataResponse<Vec<Notification>>>, AppError> {
    let limit = query.limit.unwrap_or(20).clamp(1, 100);

    let service = NotificationService::new(state.db.clone());
    let notifications = service.list(auth.user_id, limit).await.map_err(|err| {
        tracing::error!(error = ?err, user_id = %auth.user_id, "failed to list notifications");
        AppError::internal("Error interno del servidor")
    })?;

    Ok(Json(DataResponse::new(notifications)))
}

pub async fn mark_notification_read(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let notification_id = parse_id(&id, "Notificación no encontrada")?;

    let service = NotificationService::new(state.db.clone());
    let updated = service
        .mark_read(notification_id, auth.user_id)
        .await
        .map_err(|err| {
            tracing::error!(error = ?err, user_id = %auth.user_id, "failed to mark notification read");
            AppError::internal("Error interno del servidor")
        })?;

    if !updated {
        return Err(AppError::not_found("Notificación no encontrada"));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn dismiss_notification(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let notification_id = parse_id(&id, "Notificación no encontrada")?;

    let service = NotificationService::new(state.db.clone());
    let dismissed = service
        .dismiss(notification_id, auth.user_id)
        .await
        .map_err(|err| {
            tracing::error!(error = ?err, user_id = %auth.user_id, "failed to dismiss notification");
            AppError::internal("Error interno del servidor")
        })?;

    if !dismissed {
        return Err(AppError::not_found("Notificación no encontrada"));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Offer intake
// ---------------------------------------------------------------------------

pub async fn create_offer(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(draft): Json<OfferDraft>,
) -> Result<(StatusCode, Json<DataResponse<Offer>>), AppError> {
    let creator = OfferCreator::new(OfferWizard::new(state.db.clone()));
    let offer = creator.create(auth.user_id, draft).await.map_err(|err| {
        tracing::error!(error = ?err, user_id = %auth.user_id, "failed to create offer");
        AppError::internal("Error interno del servidor")
    })?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(offer))))
}

// ---------------------------------------------------------------------------
// Public catalog
// ---------------------------------------------------------------------------

pub async fn get_public_flight(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<Offer>>, AppError> {
    let offer_id = parse_id(&id, "Vuelo no encontrado")?;

    let wizard = OfferWizard::new(state.db.clone());
    let offer = wizard.published_flight(offer_id).await.map_err(|err| {
        tracing::error!(error = ?err, offer_id = %offer_id, "failed to fetch flight offer");
        AppError::internal("Error interno del servidor")
    })?;

    let offer = offer.ok_or_else(|| AppError::not_found("Vuelo no encontrado"))?;
    Ok(Json(DataResponse::new(offer)))
}

pub async fn get_public_package(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<crate::domain::package::PublicPackage>>, AppError> {
    let package_id = parse_id(&id, "Paquete no encontrado")?;

    let service = PackageService::new(state.db.clone());
    let package = service.get_public(package_id).await.map_err(|err| {
        tracing::error!(error = ?err, package_id = %package_id, "failed to fetch package");
        AppError::internal("Error interno del servidor")
    })?;

    let package = package.ok_or_else(|| AppError::not_found("Paquete no encontrado"))?;
    Ok(Json(DataResponse::new(package)))
}

pub async fn get_hotel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<crate::domain::hotel::Hotel>>, AppError> {
    let hotel_id = parse_id(&id, "Hotel no encontrado")?;

    let service = HotelService::new(state.db.clone());
    // This route alone echoes the underlying failure to the caller.
    let hotel = service.get(hotel_id).await.map_err(|err| {
        tracing::error!(error = ?err, hotel_id = %hotel_id, "failed to fetch hotel");
        AppError::internal(format!("Error al obtener el hotel: {}", err))
    })?;

    let hotel = hotel.ok_or_else(|| AppError::not_found("Hotel no encontrado"))?;
    Ok(Json(DataResponse::new(hotel)))
}
