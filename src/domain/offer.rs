use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;
use uuid::Uuid;

/// Product-type tag on an offer. Stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferType {
    Flight,
    Hotel,
    Package,
    Transport,
    Activity,
}

impl OfferType {
    pub const ALL: [OfferType; 5] = [
        OfferType::Flight,
        OfferType::Hotel,
        OfferType::Package,
        OfferType::Transport,
        OfferType::Activity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OfferType::Flight => "flight",
            OfferType::Hotel => "hotel",
            OfferType::Package => "package",
            OfferType::Transport => "transport",
            OfferType::Activity => "activity",
        }
    }
}

impl FromStr for OfferType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flight" => Ok(OfferType::Flight),
            "hotel" => Ok(OfferType::Hotel),
            "package" => Ok(OfferType::Package),
            "transport" => Ok(OfferType::Transport),
            "activity" => Ok(OfferType::Activity),
            other => Err(anyhow!("unknown offer type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    Draft,
    Published,
    Archived,
}

impl OfferStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OfferStatus::Draft => "draft",
            OfferStatus::Published => "published",
            OfferStatus::Archived => "archived",
        }
    }
}

impl FromStr for OfferStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(OfferStatus::Draft),
            "published" => Ok(OfferStatus::Published),
            "archived" => Ok(OfferStatus::Archived),
            other => Err(anyhow!("unknown offer status: {}", other)),
        }
    }
}

/// One priced line on an offer, referencing an inventory resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferItem {
    pub resource_ref: String,
    pub description: String,
    pub unit_price_cents: i64,
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub id: Uuid,
    pub offer_type: OfferType,
    pub status: OfferStatus,
    pub title: String,
    pub items: Vec<OfferItem>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Client-submitted shape for a new offer. Persisted as a draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferDraft {
    pub offer_type: OfferType,
    pub title: String,
    pub items: Vec<OfferItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offer_type_round_trips_through_text() {
        for offer_type in OfferType::ALL {
            let parsed: OfferType = offer_type.as_str().parse().unwrap();
            assert_eq!(parsed, offer_type);
        }
    }

    #[test]
    fn offer_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&OfferType::Flight).unwrap(),
            "\"flight\""
        );
        assert_eq!(
            serde_json::to_string(&OfferType::Activity).unwrap(),
            "\"activity\""
        );
    }

    #[test]
    fn unknown_offer_type_is_rejected() {
        assert!("cruise".parse::<OfferType>().is_err());
        assert!("Flight".parse::<OfferType>().is_err());
    }

    #[test]
    fn offer_status_round_trips_through_text() {
        for status in [
            OfferStatus::Draft,
            OfferStatus::Published,
            OfferStatus::Archived,
        ] {
            let parsed: OfferStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }
}
