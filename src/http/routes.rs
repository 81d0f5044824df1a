use axum::{routing::get, routing::patch, routing::post, Router};

use crate::http::handlers;
use crate::AppState;

pub fn health() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health))
}

pub fn auth() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(handlers::login))
        .route("/api/auth/logout", post(handlers::logout))
}

pub fn account() -> Router<AppState> {
    Router::new()
        .route("/api/me", get(handlers::get_me))
        .route("/api/me/preferences", patch(handlers::update_preferences))
}

pub fn notifications() -> Router<AppState> {
    Router::new()
        .route("/api/notifications", get(handlers::list_notifications))
        .route(
            "/api/notifications/unread-count",
            get(handlers::unread_count),
        )
        .route(
            "/api/notifications/:id/read",
            post(handlers::mark_notification_read),
        )
        .route(
            "/api/notifications/:id/dismiss",
            post(handlers::dismiss_notification),
        )
}

pub fn offers() -> Router<AppState> {
    Router::new().route("/api/offers", post(handlers::create_offer))
}

pub fn public_catalog() -> Router<AppState> {
    Router::new()
        .route(
            "/api/public/booking/flights/:id",
            get(handlers::get_public_flight),
        )
        .route("/api/public/packages/:id", get(handlers::get_public_package))
        .route("/api/resources/hotels/:id", get(handlers::get_hotel))
}
