//! Part Entity
//!
//! Domain-facing representation of a part plus the validated payloads that
//! flow into the store.

use chrono::{DateTime, Utc};
use serde::Serialize;

// == Part ==
/// Wire representation of a part.
///
/// `partNumber` is the entity's identity. The stored document carries more
/// fields (`isDeleted`, timestamps) that are never exposed here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub part_number: String,
    pub description: String,
    pub quantity_on_hand: i64,
    pub location_code: String,
    /// None means the part was never stock-checked
    pub last_stock_check_date: Option<DateTime<Utc>>,
}

// == New Part ==
/// Validated payload for creating a part.
#[derive(Debug, Clone)]
pub struct NewPart {
    pub part_number: String,
    pub description: String,
    pub quantity_on_hand: i64,
    pub location_code: String,
    pub last_stock_check_date: Option<DateTime<Utc>>,
    pub is_deleted: bool,
}

// == Part Changes ==
/// Validated field changes for a partial update.
///
/// `None` leaves the stored value untouched. For `last_stock_check_date` the
/// outer `Option` distinguishes "omitted" from an explicit null that clears
/// the date.
#[derive(Debug, Clone, Default)]
pub struct PartChanges {
    pub description: Option<String>,
    pub quantity_on_hand: Option<i64>,
    pub location_code: Option<String>,
    pub last_stock_check_date: Option<Option<DateTime<Utc>>>,
    pub is_deleted: Option<bool>,
}

impl PartChanges {
    /// True when no field would be touched.
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.quantity_on_hand.is_none()
            && self.location_code.is_none()
            && self.last_stock_check_date.is_none()
            && self.is_deleted.is_none()
    }
}
