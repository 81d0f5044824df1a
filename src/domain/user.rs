use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Server user record. Deliberately not `Serialize`: the client shape is
/// [`ClientUser`], converted explicitly, so persistence fields can never
/// leak into a response.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
    pub preferences: UserPreferences,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub theme: String,
    pub color_scheme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            theme: "light".into(),
            color_scheme: "default".into(),
            language: None,
        }
    }
}

/// Client-facing user shape, decoupled from the server record.
#[derive(Debug, Clone, Serialize)]
pub struct ClientUser {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub preferences: UserPreferences,
}

impl From<User> for ClientUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            display_name: user.display_name,
            preferences: user.preferences,
        }
    }
}
