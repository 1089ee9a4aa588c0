//! Request DTOs for the parts API
//!
//! Defines the structure of incoming HTTP request bodies and their field
//! rules. Every field arrives optional so that all violations of one payload
//! can be reported together instead of failing on the first.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::error::FieldError;
use crate::models::{NewPart, PartChanges};
use crate::validation::Validator;

// == Create Request ==
/// Request body for POST /api/parts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePartRequest {
    pub part_number: Option<String>,
    pub description: Option<String>,
    pub quantity_on_hand: Option<i64>,
    pub location_code: Option<String>,
    /// Raw date string, parsed during validation
    pub last_stock_check_date: Option<String>,
    pub is_deleted: Option<bool>,
}

impl CreatePartRequest {
    /// Runs all field rules and converts into a validated payload.
    ///
    /// `now` is the validation instant; a stock-check date equal to it is
    /// accepted (boundary inclusive).
    pub fn validate(&self, now: DateTime<Utc>) -> Result<NewPart, Vec<FieldError>> {
        let mut v = Validator::new();

        v.field("partNumber").rule(
            present_non_empty(&self.part_number),
            "Part number is required",
        );
        v.field("description")
            .rule(
                present_non_empty(&self.description),
                "Description is required",
            )
            .rule(
                self.description
                    .as_deref()
                    .map_or(true, |d| d.chars().count() <= 200),
                "Description must be at most 200 characters long",
            );
        v.field("quantityOnHand")
            .rule(
                self.quantity_on_hand.is_some(),
                "Quantity on hand is required",
            )
            .rule(
                self.quantity_on_hand.map_or(true, |q| q >= 0),
                "Quantity on hand must be at least 0",
            );
        v.field("locationCode").rule(
            present_non_empty(&self.location_code),
            "Location code is required",
        );

        let last_stock_check_date =
            check_stock_check_date(&mut v, self.last_stock_check_date.as_deref(), now);

        v.finish()?;

        Ok(NewPart {
            part_number: self.part_number.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            quantity_on_hand: self.quantity_on_hand.unwrap_or_default(),
            location_code: self.location_code.clone().unwrap_or_default(),
            last_stock_check_date,
            is_deleted: self.is_deleted.unwrap_or(false),
        })
    }
}

// == Update Request ==
/// Request body for PATCH /api/parts/:id.
///
/// Same rules as create, but every field is optional and omitted fields are
/// neither validated nor touched. A part number in the body is validated but
/// never applied; identity is immutable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePartRequest {
    pub part_number: Option<String>,
    pub description: Option<String>,
    pub quantity_on_hand: Option<i64>,
    pub location_code: Option<String>,
    /// Outer Option: field present in the body. Inner Option: explicit null,
    /// which clears the stored date.
    #[serde(default, deserialize_with = "double_option")]
    pub last_stock_check_date: Option<Option<String>>,
    pub is_deleted: Option<bool>,
}

impl UpdatePartRequest {
    /// Runs field rules on the fields that are present and converts into a
    /// set of changes.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<PartChanges, Vec<FieldError>> {
        let mut v = Validator::new();

        if let Some(pn) = &self.part_number {
            v.field("partNumber")
                .rule(!pn.trim().is_empty(), "Part number is required");
        }
        if let Some(d) = &self.description {
            v.field("description")
                .rule(!d.trim().is_empty(), "Description is required")
                .rule(
                    d.chars().count() <= 200,
                    "Description must be at most 200 characters long",
                );
        }
        if let Some(q) = self.quantity_on_hand {
            v.field("quantityOnHand")
                .rule(q >= 0, "Quantity on hand must be at least 0");
        }
        if let Some(lc) = &self.location_code {
            v.field("locationCode")
                .rule(!lc.trim().is_empty(), "Location code is required");
        }

        let last_stock_check_date = match &self.last_stock_check_date {
            None => None,
            Some(None) => Some(None),
            Some(Some(raw)) => check_stock_check_date(&mut v, Some(raw.as_str()), now).map(Some),
        };

        v.finish()?;

        Ok(PartChanges {
            description: self.description.clone(),
            quantity_on_hand: self.quantity_on_hand,
            location_code: self.location_code.clone(),
            last_stock_check_date,
            is_deleted: self.is_deleted,
        })
    }
}

/// True when the value is present and not blank.
fn present_non_empty(value: &Option<String>) -> bool {
    value.as_deref().map_or(false, |s| !s.trim().is_empty())
}

// == Date Handling ==
/// Parses a stock-check date from its wire form.
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates (read as
/// midnight UTC).
fn parse_stock_check_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

/// Applies the stock-check date rules, returning the parsed value when the
/// field is present and parseable.
fn check_stock_check_date(
    v: &mut Validator,
    raw: Option<&str>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    let raw = raw?;
    match parse_stock_check_date(raw) {
        Some(date) => {
            v.field("lastStockCheckDate").rule(
                date <= now,
                "Last stock check date cannot be in the future",
            );
            Some(date)
        }
        None => {
            v.field("lastStockCheckDate")
                .rule(false, "Last stock check date must be a valid date");
            None
        }
    }
}

/// Deserializes a field so that "missing" and "explicit null" stay
/// distinguishable: missing stays `None` via the serde default, null becomes
/// `Some(None)`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
