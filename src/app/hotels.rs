use anyhow::Result;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::hotel::Hotel;
use crate::infra::db::Db;

#[derive(Clone)]
pub struct HotelService {
    db: Db,
}

impl HotelService {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    pub async fn get(&self, hotel_id: Uuid) -> Result<Option<Hotel>> {
        let row = sqlx::query(
            "SELECT id, name, stars, description, location, room_types, \
                    amenities, policies, photos \
             FROM hotels WHERE id = $1",
        )
        .bind(hotel_id)
        .fetch_optional(self.db.pool())
        .await?;

        let hotel = match row {
            Some(row) => {
                let location: serde_json::Value = row.get("location");
                let room_types: serde_json::Value = row.get("room_types");
                let amenities: serde_json::Value = row.get("amenities");
                let policies: serde_json::Value = row.get("policies");
                let photos: serde_json::Value = row.get("photos");

                Some(Hotel {
                    id: row.get("id"),
                    name: row.get("name"),
                    stars: row.get("stars"),
                    description: row.get("description"),
                    location: serde_json::from_value(location)?,
                    room_types: serde_json::from_value(room_types)?,
                    amenities: serde_json::from_value(amenities)?,
                    policies: serde_json::from_value(policies)?,
                    photos: serde_json::from_value(photos)?,
                })
            }
            None => None,
        };

        Ok(hotel)
    }
}
