use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Server-side package record, including audit columns.
#[derive(Debug, Clone)]
pub struct TravelPackage {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub nights: i32,
    pub destinations: Vec<String>,
    pub created_by: Uuid,
    pub updated_by: Uuid,
    pub revision: i32,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Public projection of a package. Audit fields (`created_by`, `updated_by`,
/// `revision`) never leave the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicPackage {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub nights: i32,
    pub destinations: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<TravelPackage> for PublicPackage {
    fn from(package: TravelPackage) -> Self {
        Self {
            id: package.id,
            name: package.name,
            description: package.description,
            price_cents: package.price_cents,
            nights: package.nights,
            destinations: package.destinations,
            created_at: package.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_projection_strips_audit_fields() {
        let package = TravelPackage {
            id: Uuid::new_v4(),
            name: "Costa Brava 5 noches".into(),
            description: "Vuelo + hotel + traslados".into(),
            price_cents: 89_900,
            nights: 5,
            destinations: vec!["Girona".into(), "Lloret de Mar".into()],
            created_by: Uuid::new_v4(),
            updated_by: Uuid::new_v4(),
            revision: 7,
            created_at: OffsetDateTime::now_utc(),
            updated_at: OffsetDateTime::now_utc(),
        };

        let value = serde_json::to_value(PublicPackage::from(package)).unwrap();
        let object = value.as_object().unwrap();

        assert!(object.contains_key("name"));
        assert!(object.contains_key("destinations"));
        assert!(!object.contains_key("created_by"));
        assert!(!object.contains_key("updated_by"));
        assert!(!object.contains_key("revision"));
        assert!(!object.contains_key("updated_at"));
    }
}
