//! Catalog loading from disk

use esim_core::{Catalog, ShopError};

#[test]
fn test_load_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"{
            "countries": [
                { "code": "IS", "name": "Iceland", "flag": "🇮🇸", "region": "Europe" }
            ],
            "packages": [
                {
                    "id": "is-3gb",
                    "country_code": "IS",
                    "name": "Iceland 3 GB",
                    "data_gb": 3,
                    "validity_days": 15,
                    "price": { "amount_cents": 900, "currency": "EUR" }
                }
            ]
        }"#,
    )
    .unwrap();

    let catalog = Catalog::load(&path).unwrap();
    let country = catalog.country("is").unwrap();
    assert_eq!(country.name, "Iceland");
    assert!(country.starting_price.is_none());

    let package = catalog.package("is-3gb").unwrap();
    assert!(package.features.is_empty());
    assert!(!package.popular);
    assert_eq!(package.price.to_string(), "€9.00");
}

#[test]
fn test_load_missing_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::load(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, ShopError::Io(_)));
}

#[test]
fn test_load_orphaned_package() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"{
            "countries": [],
            "packages": [
                {
                    "id": "x", "country_code": "ZZ", "name": "x",
                    "data_gb": 1, "validity_days": 1,
                    "price": { "amount_cents": 1, "currency": "USD" }
                }
            ]
        }"#,
    )
    .unwrap();
    assert!(matches!(
        Catalog::load(&path),
        Err(ShopError::OrphanPackage { .. })
    ));
}

#[test]
fn test_bundled_starting_prices_match_packages() {
    let catalog = Catalog::bundled().unwrap();
    for country in catalog.countries() {
        let cheapest = catalog.packages_for(&country.code).unwrap()[0];
        assert_eq!(country.starting_price.as_ref(), Some(&cheapest.price));
    }
}
