//! Part Document Module
//!
//! Stored form of a part and the translation boundary between the storage
//! key (`id`) and the domain identity (`partNumber`).

use chrono::{DateTime, Utc};

use crate::models::{NewPart, Part, PartChanges};

// == Part Document ==
/// A part as the store holds it.
///
/// Carries fields the wire representation never exposes: `is_deleted`
/// (persisted but unused by any exposed operation) and the bookkeeping
/// timestamps.
#[derive(Debug, Clone)]
pub struct PartDocument {
    /// Native primary key; surfaces as `partNumber` outside the store
    pub id: String,
    pub description: String,
    pub quantity_on_hand: i64,
    pub location_code: String,
    pub last_stock_check_date: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PartDocument {
    /// Builds a document from a validated create payload. The part number
    /// becomes the storage key.
    pub fn from_new(part: NewPart, now: DateTime<Utc>) -> Self {
        Self {
            id: part.part_number,
            description: part.description,
            quantity_on_hand: part.quantity_on_hand,
            location_code: part.location_code,
            last_stock_check_date: part.last_stock_check_date,
            is_deleted: part.is_deleted,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies the fields present in `changes`, leaving the rest untouched.
    /// The key is never rewritten.
    pub fn apply(&mut self, changes: &PartChanges, now: DateTime<Utc>) {
        if let Some(description) = &changes.description {
            self.description = description.clone();
        }
        if let Some(quantity) = changes.quantity_on_hand {
            self.quantity_on_hand = quantity;
        }
        if let Some(location_code) = &changes.location_code {
            self.location_code = location_code.clone();
        }
        if let Some(date) = changes.last_stock_check_date {
            self.last_stock_check_date = date;
        }
        if let Some(is_deleted) = changes.is_deleted {
            self.is_deleted = is_deleted;
        }
        self.updated_at = now;
    }

    /// Converts to the wire representation, renaming `id` to `partNumber`.
    pub fn to_part(&self) -> Part {
        Part {
            part_number: self.id.clone(),
            description: self.description.clone(),
            quantity_on_hand: self.quantity_on_hand,
            location_code: self.location_code.clone(),
            last_stock_check_date: self.last_stock_check_date,
        }
    }
}
