//! Validation of new items
//!
//! Input arrives as raw text, the way a form submits it. Field checks run
//! first and report every problem at once; the duplicate-name check only runs
//! when all fields are valid, and reports alone.

use crate::config::EngineConfig;
use crate::store::ItemStore;
use std::fmt;
use stockroom_core::{ItemId, ItemStatus, NewItem};
use thiserror::Error;

const NUMBERS_ONLY: &str = "Numbers only — letters and symbols are not allowed.";

/// Raw, unvalidated input for a new item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    /// Item name
    pub name: String,
    /// Category
    pub category: String,
    /// Quantity as typed
    pub quantity: String,
    /// Unit price as typed
    pub unit_price: String,
    /// Status label; blank means `In Stock`
    pub status: String,
}

impl ItemDraft {
    /// Convenience constructor
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: impl Into<String>,
        unit_price: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity: quantity.into(),
            unit_price: unit_price.into(),
            status: status.into(),
        }
    }

    /// Live total shown while typing: `quantity * unit_price` when both parse
    pub fn preview_total(&self) -> Option<f64> {
        let quantity = parse_number(&self.quantity)?;
        let unit_price = parse_number(&self.unit_price)?;
        Some(quantity * unit_price)
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Which input a [`FieldError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Item name
    Name,
    /// Category
    Category,
    /// Quantity
    Quantity,
    /// Unit price
    UnitPrice,
    /// Status
    Status,
}

impl Field {
    /// Field name as used in messages and JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Category => "category",
            Field::Quantity => "quantity",
            Field::UnitPrice => "unitPrice",
            Field::Status => "status",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Offending field
    pub field: Field,
    /// User-facing message
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// All validation failures for one draft. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.summary())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
    duplicate_of: Option<ItemId>,
}

impl ValidationErrors {
    /// Individual failures, in field order
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Message for `field`, if it failed
    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// True when the draft was rejected only because its name is taken
    pub fn is_duplicate_name(&self) -> bool {
        self.duplicate_of.is_some()
    }

    /// Id of the existing item holding the requested name
    pub fn duplicate_of(&self) -> Option<&ItemId> {
        self.duplicate_of.as_ref()
    }

    fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Checks drafts against field rules, the configured categories and the store.
pub struct Validator<'a> {
    config: &'a EngineConfig,
}

impl<'a> Validator<'a> {
    /// Validator using `config` for the category list
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Validate `draft` and reject names already present in `store`
    pub fn validate(&self, draft: &ItemDraft, store: &ItemStore) -> Result<NewItem, ValidationErrors> {
        let item = self.validate_fields(draft)?;
        if let Some(existing) = store.find_by_name(&item.name) {
            return Err(ValidationErrors {
                errors: vec![FieldError::new(
                    Field::Name,
                    format!(
                        "\"{}\" already exists ({}). Item names must be unique.",
                        existing.name, existing.id
                    ),
                )],
                duplicate_of: Some(existing.id.clone()),
            });
        }
        Ok(item)
    }

    /// Field checks only, without the duplicate-name lookup
    pub fn validate_fields(&self, draft: &ItemDraft) -> Result<NewItem, ValidationErrors> {
        let mut errors = Vec::new();

        let name = draft.name.trim();
        if name.is_empty() {
            errors.push(FieldError::new(Field::Name, "Item name is required."));
        }

        let category = if draft.category.trim().is_empty() {
            errors.push(FieldError::new(Field::Category, "Please select a category."));
            None
        } else {
            let resolved = self.config.resolve_category(&draft.category);
            if resolved.is_none() {
                errors.push(FieldError::new(
                    Field::Category,
                    format!(
                        "Unknown category \"{}\". Choose one of: {}.",
                        draft.category.trim(),
                        self.config.categories.join(", ")
                    ),
                ));
            }
            resolved
        };

        let quantity = check_amount(&draft.quantity, Field::Quantity, "Quantity", &mut errors);
        let unit_price = check_amount(&draft.unit_price, Field::UnitPrice, "Unit price", &mut errors);

        let status = if draft.status.trim().is_empty() {
            Some(ItemStatus::default())
        } else {
            match draft.status.parse::<ItemStatus>() {
                Ok(status) => Some(status),
                Err(_) => {
                    errors.push(FieldError::new(Field::Status, "Please select a valid status."));
                    None
                }
            }
        };

        match (category, quantity, unit_price, status) {
            (Some(category), Some(quantity), Some(unit_price), Some(status)) if errors.is_empty() => {
                Ok(NewItem {
                    name: name.to_string(),
                    category,
                    quantity,
                    unit_price,
                    status,
                })
            }
            _ => Err(ValidationErrors {
                errors,
                duplicate_of: None,
            }),
        }
    }
}

fn check_amount(raw: &str, field: Field, label: &str, errors: &mut Vec<FieldError>) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push(FieldError::new(field, format!("{} is required.", label)));
        return None;
    }
    let Some(value) = parse_number(raw) else {
        errors.push(FieldError::new(field, NUMBERS_ONLY));
        return None;
    };
    if value < 0.0 {
        errors.push(FieldError::new(field, format!("{} cannot be negative.", label)));
        return None;
    }
    Some(value)
}
