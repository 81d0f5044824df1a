use anyhow::Result;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::package::PublicPackage;
use crate::infra::db::Db;

#[derive(Clone)]
pub struct PackageService {
    db: Db,
}

impl PackageService {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Public projection only; audit columns are never selected.
    pub async fn get_public(&self, package_id: Uuid) -> Result<Option<PublicPackage>> {
        let row = sqlx::query(
            "SELECT id, name, description, price_cents, nights, destinations, created_at \
             FROM packages WHERE id = $1",
        )
        .bind(package_id)
        .fetch_optional(self.db.pool())
        .await?;

        let package = match row {
            Some(row) => {
                let destinations: serde_json::Value = row.get("destinations");
                Some(PublicPackage {
                    id: row.get("id"),
                    name: row.get("name"),
                    description: row.get("description"),
                    price_cents: row.get("price_cents"),
                    nights: row.get("nights"),
                    destinations: serde_json::from_value(destinations)?,
                    created_at: row.get("created_at"),
                })
            }
            None => None,
        };

        Ok(package)
    }
}
