//! The `Product` entity and its payload validation contract.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::category::Category;
use crate::domain::types::{ProductId, ProductName, TypeConstraintError};

/// Errors raised while validating an inbound product payload.
///
/// Each variant renders a human-readable message naming the offending field;
/// the HTTP layer returns the message verbatim in a 400 response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataValidationError {
    /// A required key was absent from the payload.
    #[error("Invalid product: missing {0}")]
    MissingField(&'static str),
    /// A text field carried a non-string JSON value.
    #[error("Invalid product: {0} must be a string")]
    NotAString(&'static str),
    /// `available` was present but not a strict JSON boolean.
    #[error("Invalid product: invalid type for boolean [available]")]
    NotABoolean,
    /// `price` was neither a decimal string nor a JSON number.
    #[error("Invalid product: price is not a valid decimal number")]
    InvalidPrice,
    /// A field-level constraint failed (e.g. empty name).
    #[error("Invalid product: {0}")]
    Constraint(String),
    /// The request body was not a JSON object at all.
    #[error("Invalid product: body contained bad or no data")]
    BadPayload,
}

impl From<TypeConstraintError> for DataValidationError {
    fn from(err: TypeConstraintError) -> Self {
        Self::Constraint(err.to_string())
    }
}

/// A persisted product. Only the repository constructs these; the `id` is
/// assigned by the store and never taken from a client payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub description: String,
    /// String-formatted decimal on the wire to avoid floating-point drift.
    pub price: Decimal,
    pub available: bool,
    pub category: Category,
}

/// Information required to create or overwrite a [`Product`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewProduct {
    pub name: ProductName,
    pub description: String,
    pub price: Decimal,
    pub available: bool,
    pub category: Category,
}

impl Product {
    /// Combine a store-assigned id with client-supplied fields.
    pub fn from_new(id: ProductId, new: NewProduct) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            price: new.price,
            available: new.available,
            category: new.category,
        }
    }
}

impl From<Product> for NewProduct {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            description: product.description,
            price: product.price,
            available: product.available,
            category: product.category,
        }
    }
}

impl NewProduct {
    /// Validate a JSON payload into a `NewProduct`.
    ///
    /// `name`, `description`, `price` and `available` are required;
    /// `available` must be a strict boolean, never a truthy string. Any `id`
    /// key in the payload is ignored.
    pub fn deserialize(payload: &Value) -> Result<Self, DataValidationError> {
        let map = payload.as_object().ok_or(DataValidationError::BadPayload)?;

        let name = map
            .get("name")
            .ok_or(DataValidationError::MissingField("name"))?
            .as_str()
            .ok_or(DataValidationError::NotAString("name"))?;
        let name = ProductName::new(name)?;

        let description = map
            .get("description")
            .ok_or(DataValidationError::MissingField("description"))?
            .as_str()
            .ok_or(DataValidationError::NotAString("description"))?
            .to_string();

        let price = match map.get("price") {
            None => return Err(DataValidationError::MissingField("price")),
            Some(Value::String(text)) => {
                Decimal::from_str(text.trim()).map_err(|_| DataValidationError::InvalidPrice)?
            }
            Some(Value::Number(number)) => Decimal::from_str(&number.to_string())
                .map_err(|_| DataValidationError::InvalidPrice)?,
            Some(_) => return Err(DataValidationError::InvalidPrice),
        };

        let available = match map.get("available") {
            Some(Value::Bool(flag)) => *flag,
            Some(_) => return Err(DataValidationError::NotABoolean),
            None => return Err(DataValidationError::MissingField("available")),
        };

        // Unlike the other fields, a bad or missing category degrades to
        // Unknown instead of failing.
        let category = match map.get("category").and_then(Value::as_str) {
            Some(name) => Category::from_name(name).unwrap_or(Category::Unknown),
            None => Category::Unknown,
        };

        Ok(Self {
            name,
            description,
            price,
            available,
            category,
        })
    }
}
