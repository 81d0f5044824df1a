//! Auth tests
//!
//! Covers the login flow, session revocation, the preferences routes, and
//! the 401 envelope on every route behind the gate.

mod common;

use axum::http::StatusCode;
use common::{app, DEFAULT_PASSWORD};
use serde_json::json;

// ===========================================================================
// Login
// ===========================================================================

#[tokio::test]
async fn login_requires_email_and_password() {
    let app = app().await;

    let resp = app
        .post_json("/api/auth/login", json!({"email": "", "password": ""}), None)
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.json()["success"], false);
    assert_eq!(resp.error_message(), "Correo y contraseña son obligatorios");
}

#[tokio::test]
async fn login_with_valid_credentials_returns_session() {
    let app = app().await;
    let user = app.create_user("login_ok").await;

    let resp = app
        .post_json(
            "/api/auth/login",
            json!({"email": user.email, "password": DEFAULT_PASSWORD}),
            None,
        )
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    let body = resp.json();
    assert_eq!(body["success"], true);
    let token = body["data"]["token"].as_str().unwrap().to_string();
    assert!(!token.is_empty());

    // The minted session resolves on a gated route.
    let me = app.get("/api/me", Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.json()["data"]["email"], user.email.as_str());
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = app().await;
    let user = app.create_user("login_wrongpw").await;

    let resp = app
        .post_json(
            "/api/auth/login",
            json!({"email": user.email, "password": "otracosa"}),
            None,
        )
        .await;

    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp.json()["success"], false);
    assert_eq!(resp.error_message(), "Credenciales inválidas");
}

#[tokio::test]
async fn login_with_unknown_email_is_unauthorized() {
    let app = app().await;

    let resp = app
        .post_json(
            "/api/auth/login",
            json!({"email": "nadie@example.com", "password": DEFAULT_PASSWORD}),
            None,
        )
        .await;

    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp.error_message(), "Credenciales inválidas");
}

// ===========================================================================
// Session revocation
// ===========================================================================

#[tokio::test]
async fn revoked_session_is_unauthorized() {
    let app = app().await;
    let user = app.create_user("logout_revoke").await;

    let before = app.get("/api/me", Some(&user.token)).await;
    assert_eq!(before.status, StatusCode::OK);

    let logout = app
        .post_json("/api/auth/logout", json!({}), Some(&user.token))
        .await;
    assert_eq!(logout.status, StatusCode::NO_CONTENT);

    let after = app.get("/api/me", Some(&user.token)).await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
    assert_eq!(after.json()["success"], false);
    assert_eq!(after.error_message(), "No autorizado");
}

#[tokio::test]
async fn logout_twice_is_unauthorized_the_second_time() {
    let app = app().await;
    let user = app.create_user("logout_twice").await;

    let first = app
        .post_json("/api/auth/logout", json!({}), Some(&user.token))
        .await;
    assert_eq!(first.status, StatusCode::NO_CONTENT);

    let second = app
        .post_json("/api/auth/logout", json!({}), Some(&user.token))
        .await;
    assert_eq!(second.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_without_credentials_is_unauthorized() {
    let app = app().await;

    let resp = app.post_json("/api/auth/logout", json!({}), None).await;

    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp.json()["success"], false);
    assert_eq!(resp.error_message(), "No autorizado");
}

// ===========================================================================
// Auth gate
// ===========================================================================

#[tokio::test]
async fn me_without_token_is_unauthorized() {
    let app = app().await;

    let resp = app.get("/api/me", None).await;

    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp.json()["success"], false);
    assert_eq!(resp.error_message(), "No autorizado");
}

#[tokio::test]
async fn non_bearer_authorization_scheme_is_rejected() {
    let app = app().await;

    let resp = app
        .request(
            axum::http::Method::GET,
            "/api/me",
            None,
            &[("Authorization", "Basic dXNlcjpwYXNz")],
        )
        .await;

    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp.error_message(), "No autorizado");
}

// ===========================================================================
// Preferences
// ===========================================================================

#[tokio::test]
async fn preferences_patch_without_token_is_unauthorized() {
    let app = app().await;

    let resp = app
        .patch_json("/api/me/preferences", json!({"theme": "dark"}), None)
        .await;

    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp.json()["success"], false);
}

#[tokio::test]
async fn partial_preferences_patches_do_not_clobber_each_other() {
    let app = app().await;
    let user = app.create_user("prefs_merge").await;

    let first = app
        .patch_json(
            "/api/me/preferences",
            json!({"language": "es"}),
            Some(&user.token),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.json()["data"]["preferences"]["language"], "es");

    // A later patch of a different field must keep the language.
    let second = app
        .patch_json(
            "/api/me/preferences",
            json!({"theme": "dark"}),
            Some(&user.token),
        )
        .await;
    assert_eq!(second.status, StatusCode::OK);
    let prefs = &second.json()["data"]["preferences"];
    assert_eq!(prefs["theme"], "dark");
    assert_eq!(prefs["language"], "es");
    assert_eq!(prefs["color_scheme"], "default");
}
