//! The dish entity, its inbound request schema, and price coercion.
//!
//! Clients have historically sent `price` both as a JSON number and as a
//! string (form inputs), so the request schema accepts either and
//! [`DishRequest::validate`] normalizes it into a finite `f64`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DishId, Timestamp};

/// Maximum accepted length for `name` and `category`, in characters.
pub const MAX_TEXT_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A menu item as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub available: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Wire representation of a price: either a JSON number or a numeric string.
///
/// Any other JSON type lands in `Other` so it is rejected by
/// [`PriceValue::coerce`] with a message naming the field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl PriceValue {
    /// Coerce the wire value into a finite number.
    pub fn coerce(&self) -> Result<f64, CoreError> {
        let value = match self {
            PriceValue::Number(n) => *n,
            PriceValue::Text(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(CoreError::Validation("price must not be blank".into()));
                }
                trimmed.parse::<f64>().map_err(|_| {
                    CoreError::Validation(format!("price '{raw}' is not a number"))
                })?
            }
            PriceValue::Other(_) => {
                return Err(CoreError::Validation(
                    "price must be a number or a numeric string".into(),
                ));
            }
        };

        if !value.is_finite() {
            return Err(CoreError::Validation("price must be a finite number".into()));
        }
        Ok(value)
    }
}

/// Body of `POST /api/dishes` and `PUT /api/dishes/{id}`.
///
/// Every field is optional at the wire level so that missing fields surface
/// as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DishRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<PriceValue>,
}

/// Validated fields written by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct DishInput {
    pub name: String,
    pub category: String,
    pub price: f64,
}

impl DishRequest {
    /// Check presence of every field and coerce `price`.
    pub fn validate(self) -> Result<DishInput, CoreError> {
        let name = validate_text("name", self.name)?;
        let category = validate_text("category", self.category)?;
        let price = self
            .price
            .ok_or_else(|| CoreError::Validation("price is required".into()))?
            .coerce()?;

        Ok(DishInput {
            name,
            category,
            price,
        })
    }
}

fn validate_text(field: &str, value: Option<String>) -> Result<String, CoreError> {
    let value = value.ok_or_else(|| CoreError::Validation(format!("{field} is required")))?;
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if trimmed.chars().count() > MAX_TEXT_LENGTH {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {MAX_TEXT_LENGTH} characters"
        )));
    }
    Ok(trimmed.to_string())
}
