use anyhow::Result;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::offer::{Offer, OfferDraft, OfferStatus, OfferType};
use crate::infra::db::Db;

/// Seam between the intake surface and storage. The creator only knows this
/// trait, so intake tests can observe exactly what it forwards.
#[axum::async_trait]
pub trait IntakeWizard {
    async fn run(&self, created_by: Uuid, draft: OfferDraft) -> Result<Offer>;
}

#[derive(Clone)]
pub struct OfferWizard {
    db: Db,
}

impl OfferWizard {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Published-flight lookup for the public booking route. A matching id
    /// with the wrong type or a non-published status is treated as absent.
    pub async fn published_flight(&self, offer_id: Uuid) -> Result<Option<Offer>> {
        let row = sqlx::query(
            "SELECT id, offer_type, status, title, items, created_at, updated_at \
             FROM offers \
             WHERE id = $1 AND offer_type = 'flight' AND status = 'published'",
        )
        .bind(offer_id)
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(row) => Ok(Some(offer_from_row(&row)?)),
            None => Ok(None),
        }
    }
}

#[axum::async_trait]
impl IntakeWizard for OfferWizard {
    async fn run(&self, created_by: Uuid, draft: OfferDraft) -> Result<Offer> {
        let items = serde_json::to_value(&draft.items)?;
        let row = sqlx::query(
            "INSERT INTO offers (offer_type, status, title, items, created_by) \
             VALUES ($1, 'draft', $2, $3, $4) \
             RETURNING id, created_at, updated_at",
        )
        .bind(draft.offer_type.as_str())
        .bind(&draft.title)
        .bind(items)
        .bind(created_by)
        .fetch_one(self.db.pool())
        .await?;

        Ok(Offer {
            id: row.get("id"),
            offer_type: draft.offer_type,
            status: OfferStatus::Draft,
            title: draft.title,
            items: draft.items,
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }
}

/// Intake delegation: accepts a draft and hands it to the wizard unchanged,
/// whatever the product type. No state, no validation, no branching.
#[derive(Clone)]
pub struct OfferCreator<W = OfferWizard> {
    wizard: W,
}

impl<W: IntakeWizard> OfferCreator<W> {
    pub fn new(wizard: W) -> Self {
        Self { wizard }
    }

    pub async fn create(&self, created_by: Uuid, draft: OfferDraft) -> Result<Offer> {
        self.wizard.run(created_by, draft).await
    }
}

fn offer_from_row(row: &sqlx::postgres::PgRow) -> Result<Offer> {
    let offer_type: String = row.get("offer_type");
    let status: String = row.get("status");
    let items: serde_json::Value = row.get("items");

    Ok(Offer {
        id: row.get("id"),
        offer_type: offer_type.parse()?,
        status: status.parse()?,
        title: row.get("title"),
        items: serde_json::from_value(items)?,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}
