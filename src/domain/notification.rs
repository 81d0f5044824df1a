use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: String,
    pub payload: Value,
    pub is_read: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub dismissed_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Notification {
    /// A notification counts towards the unread badge until it is either
    /// read or dismissed.
    pub fn counts_as_unread(&self) -> bool {
        !self.is_read && self.dismissed_at.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(is_read: bool, dismissed: bool) -> Notification {
        Notification {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            kind: "booking_confirmed".into(),
            payload: serde_json::json!({"offer_id": "x"}),
            is_read,
            dismissed_at: dismissed.then(OffsetDateTime::now_utc),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn unread_and_not_dismissed_counts() {
        assert!(notification(false, false).counts_as_unread());
    }

    #[test]
    fn read_does_not_count() {
        assert!(!notification(true, false).counts_as_unread());
    }

    #[test]
    fn dismissed_does_not_count() {
        assert!(!notification(false, true).counts_as_unread());
        assert!(!notification(true, true).counts_as_unread());
    }
}
