use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomType {
    pub name: String,
    pub capacity: i32,
    pub price_per_night_cents: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policies {
    pub check_in: String,
    pub check_out: String,
    pub cancellation: String,
}

/// Hotel resource as served to clients; the projection is exactly these
/// fields, nothing else from the stored record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    pub id: Uuid,
    pub name: String,
    pub stars: i16,
    pub description: String,
    pub location: Location,
    pub room_types: Vec<RoomType>,
    pub amenities: Vec<String>,
    pub policies: Policies,
    pub photos: Vec<String>,
}
