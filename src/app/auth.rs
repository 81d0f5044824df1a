use anyhow::{anyhow, Result};
use argon2::password_hash::{PasswordHash, PasswordVerifier};
use argon2::Argon2;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;
use sha2::{Digest, Sha256};
use sqlx::Row;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::infra::db::Db;

#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user_id: Uuid,
}

/// Raw session token handed to the client. Only its sha256 digest is stored.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub expires_at: OffsetDateTime,
}

#[derive(Clone)]
pub struct AuthService {
    db: Db,
    session_ttl_hours: u64,
}

impl AuthService {
    pub fn new(db: Db, session_ttl_hours: u64) -> Self {
        Self {
            db,
            session_ttl_hours,
        }
    }

    /// Verify credentials and mint a session. `None` on unknown email or
    /// wrong password; callers must not distinguish the two.
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<IssuedSession>> {
        let row = sqlx::query("SELECT id, password_hash FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(self.db.pool())
            .await?;

        let row = match row {
            Some(row) => row,
            None => return Ok(None),
        };

        let user_id: Uuid = row.get("id");
        let password_hash: String = row.get("password_hash");
        if password_hash.is_empty() {
            return Ok(None);
        }

        if !verify_password(password, &password_hash)? {
            return Ok(None);
        }

        let session = self.issue_session(user_id).await?;
        Ok(Some(session))
    }

    pub async fn authenticate(&self, token: &str) -> Result<Option<AuthSession>> {
        let row = sqlx::query(
            "SELECT user_id FROM sessions \
             WHERE token_digest = $1 AND expires_at > now()",
        )
        .bind(hash_token(token))
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.map(|row| AuthSession {
            user_id: row.get("user_id"),
        }))
    }

    pub async fn revoke(&self, token: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM sessions WHERE token_digest = $1")
            .bind(hash_token(token))
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn issue_session(&self, user_id: Uuid) -> Result<IssuedSession> {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        let token = URL_SAFE_NO_PAD.encode(bytes);
        let expires_at = OffsetDateTime::now_utc() + Duration::hours(self.session_ttl_hours as i64);

        sqlx::query(
            "INSERT INTO sessions (token_digest, user_id, expires_at) \
             VALUES ($1, $2, $3)",
        )
        .bind(hash_token(&token))
        .bind(user_id)
        .bind(expires_at)
        .execute(self.db.pool())
        .await?;

        Ok(IssuedSession { token, expires_at })
    }
}

fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|err| anyhow!("failed to parse password hash: {}", err))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{PasswordHasher, SaltString};

    #[test]
    fn password_verification_matches_argon2_hash() {
        let salt = SaltString::generate(&mut argon2::password_hash::rand_core::OsRng);
        let hash = Argon2::default()
            .hash_password(b"secreta123", &salt)
            .unwrap()
            .to_string();

        assert!(verify_password("secreta123", &hash).unwrap());
        assert!(!verify_password("otracosa", &hash).unwrap());
    }

    #[test]
    fn token_digest_is_stable_hex_sha256() {
        let digest = hash_token("abc");
        assert_eq!(digest.len(), 64);
        assert_eq!(digest, hash_token("abc"));
        assert_ne!(digest, hash_token("abd"));
    }
}
