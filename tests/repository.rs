use std::str::FromStr;

use rust_decimal::Decimal;

use product_catalog::domain::category::Category;
use product_catalog::domain::product::NewProduct;
use product_catalog::domain::types::{ProductId, ProductName};
use product_catalog::repository::{
    DieselRepository, ProductListQuery, ProductReader, ProductWriter,
};

mod common;

fn sample_new_product(name: &str, price: &str, category: Category, available: bool) -> NewProduct {
    NewProduct {
        name: ProductName::new(name).expect("valid product name"),
        description: format!("{name} description"),
        price: Decimal::from_str(price).expect("valid price"),
        available,
        category,
    }
}

#[test]
fn create_assigns_store_generated_ids() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let first = repo
        .create_product(&sample_new_product("Hat", "12.00", Category::Cloths, true))
        .expect("should create product");
    let second = repo
        .create_product(&sample_new_product("Saw", "30.50", Category::Tools, false))
        .expect("should create product");

    assert!(second.id.get() > first.id.get());
    assert_eq!(first.name, "Hat");
    assert_eq!(first.price, Decimal::from_str("12.00").unwrap());
}

#[test]
fn get_by_id_returns_the_row_or_none() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_product(&sample_new_product("Kettle", "24.50", Category::Housewares, true))
        .expect("should create product");

    let found = repo
        .get_product_by_id(created.id)
        .expect("lookup should succeed")
        .expect("product should exist");
    assert_eq!(found, created);

    let missing = repo
        .get_product_by_id(ProductId::new(9999).unwrap())
        .expect("lookup should succeed");
    assert!(missing.is_none());
}

#[test]
fn price_survives_the_round_trip_exactly() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_product(&sample_new_product("Wrench", "19.99", Category::Tools, true))
        .expect("should create product");
    let found = repo
        .get_product_by_id(created.id)
        .expect("lookup should succeed")
        .expect("product should exist");

    assert_eq!(found.price.to_string(), "19.99");
}

#[test]
fn list_filters_by_name_category_and_availability() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_product(&sample_new_product("Hat", "12.00", Category::Cloths, true))
        .unwrap();
    repo.create_product(&sample_new_product("Hat", "14.00", Category::Cloths, false))
        .unwrap();
    repo.create_product(&sample_new_product("Saw", "30.50", Category::Tools, true))
        .unwrap();

    let all = repo.list_products(ProductListQuery::default()).unwrap();
    assert_eq!(all.len(), 3);

    let by_name = repo
        .list_products(ProductListQuery::default().name("Hat"))
        .unwrap();
    assert_eq!(by_name.len(), 2);
    assert!(by_name.iter().all(|p| p.name == "Hat"));

    let by_category = repo
        .list_products(ProductListQuery::default().category(Category::Tools))
        .unwrap();
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category[0].name, "Saw");

    let by_availability = repo
        .list_products(ProductListQuery::default().available(false))
        .unwrap();
    assert_eq!(by_availability.len(), 1);
    assert!(!by_availability[0].available);
}

#[test]
fn update_overwrites_every_field_and_preserves_the_id() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_product(&sample_new_product("Hat", "12.00", Category::Cloths, true))
        .unwrap();

    let replacement = sample_new_product("Cap", "8.25", Category::Unknown, false);
    let updated = repo
        .update_product(created.id, &replacement)
        .expect("update should succeed")
        .expect("row should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Cap");
    assert_eq!(updated.price, Decimal::from_str("8.25").unwrap());
    assert!(!updated.available);
    assert_eq!(updated.category, Category::Unknown);
}

#[test]
fn update_of_a_missing_row_returns_none() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let replacement = sample_new_product("Cap", "8.25", Category::Cloths, false);
    let updated = repo
        .update_product(ProductId::new(42).unwrap(), &replacement)
        .expect("update should succeed");
    assert!(updated.is_none());
}

#[test]
fn delete_reports_affected_rows_and_is_idempotent() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_product(&sample_new_product("Hat", "12.00", Category::Cloths, true))
        .unwrap();

    assert_eq!(repo.delete_product(created.id).unwrap(), 1);
    assert_eq!(repo.delete_product(created.id).unwrap(), 0);
    assert!(repo.get_product_by_id(created.id).unwrap().is_none());
}
