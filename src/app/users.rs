use anyhow::Result;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::user::{ClientUser, UserPreferences};
use crate::infra::db::Db;

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct PreferencesPatch {
    pub theme: Option<String>,
    pub color_scheme: Option<String>,
    pub language: Option<String>,
}

#[derive(Clone)]
pub struct UserService {
    db: Db,
}

impl UserService {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    pub async fn get_client_user(&self, user_id: Uuid) -> Result<Option<ClientUser>> {
        let row = sqlx::query(
            "SELECT id, email, display_name, preferences FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(self.db.pool())
        .await?;

        let user = match row {
            Some(row) => Some(client_user_from_row(&row)?),
            None => None,
        };

        Ok(user)
    }

    /// Merges the patch into the stored preferences in one statement, so
    /// concurrent partial updates cannot clobber each other's fields.
    pub async fn update_preferences(
        &self,
        user_id: Uuid,
        patch: PreferencesPatch,
    ) -> Result<Option<ClientUser>> {
        let mut merge = serde_json::Map::new();
        if let Some(theme) = patch.theme {
            merge.insert("theme".into(), theme.into());
        }
        if let Some(color_scheme) = patch.color_scheme {
            merge.insert("color_scheme".into(), color_scheme.into());
        }
        if let Some(language) = patch.language {
            merge.insert("language".into(), language.into());
        }

        let row = sqlx::query(
            "UPDATE users \
             SET preferences = preferences || $2, updated_at = now() \
             WHERE id = $1 \
             RETURNING id, email, display_name, preferences",
        )
        .bind(user_id)
        .bind(serde_json::Value::Object(merge))
        .fetch_optional(self.db.pool())
        .await?;

        let user = match row {
            Some(row) => Some(client_user_from_row(&row)?),
            None => None,
        };

        Ok(user)
    }
}

fn client_user_from_row(row: &sqlx::postgres::PgRow) -> Result<ClientUser> {
    let preferences: serde_json::Value = row.get("preferences");
    let preferences: UserPreferences = serde_json::from_value(preferences)?;

    Ok(ClientUser {
        id: row.get("id"),
        email: row.get("email"),
        display_name: row.get("display_name"),
        preferences,
    })
}
