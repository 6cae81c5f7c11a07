use std::str::FromStr;

use diesel::prelude::*;
use rust_decimal::Decimal;

use crate::domain::category::Category;
use crate::domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct};
use crate::domain::types::{ProductName, TypeConstraintError};

/// Diesel model representing the `products` table.
///
/// The price is stored as text so the decimal value survives the round trip
/// through SQLite without floating-point drift.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub available: bool,
    pub category: String,
}

/// Insertable/patchable form of [`Product`].
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: String,
    pub available: bool,
    pub category: String,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        let price = Decimal::from_str(&product.price).map_err(|_| {
            TypeConstraintError::InvalidValue(format!("stored price: {}", product.price))
        })?;
        Ok(Self {
            id: product.id.try_into()?,
            name: ProductName::new(product.name)?,
            description: product.description,
            price,
            available: product.available,
            // Stored values always come from the enum; tolerate anything else.
            category: Category::from_name(&product.category).unwrap_or(Category::Unknown),
        })
    }
}

impl From<DomainNewProduct> for NewProduct {
    fn from(product: DomainNewProduct) -> Self {
        Self {
            name: product.name.into_inner(),
            description: product.description,
            price: product.price.to_string(),
            available: product.available,
            category: product.category.as_str().to_string(),
        }
    }
}

impl From<&DomainNewProduct> for NewProduct {
    fn from(product: &DomainNewProduct) -> Self {
        product.clone().into()
    }
}
