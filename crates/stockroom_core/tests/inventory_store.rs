use stockroom_core::{
    InventoryService, JsonFileProductRepository, Product, ProductRepository, RepoError,
    StockDirection,
};
use std::path::Path;

fn open(path: &Path) -> InventoryService<JsonFileProductRepository> {
    InventoryService::open(JsonFileProductRepository::new(path))
}

#[test]
fn fresh_directory_opens_empty() {
    let dir = tempfile::tempdir().unwrap();
    let service = open(&dir.path().join("inventory.dat"));

    assert!(service.is_empty());
    assert!(service.list().is_empty());
    assert!(service.find_by_id(1).is_none());
}

#[test]
fn widget_gadget_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = open(&dir.path().join("inventory.dat"));

    service.add(Product::new(1, "Widget", 10, 2.50)).unwrap();
    service.add(Product::new(2, "Gadget", 5, 9.99)).unwrap();

    service
        .update_quantity(1, 3, StockDirection::Remove)
        .unwrap();
    assert_eq!(service.find_by_id(1).unwrap().quantity, 7);

    service
        .update_quantity(1, 100, StockDirection::Remove)
        .unwrap();
    assert_eq!(service.find_by_id(1).unwrap().quantity, 7);

    let gadget = service.find_by_id(2).unwrap();
    assert_eq!(gadget.name, "Gadget");
    assert_eq!(gadget.quantity, 5);
    assert_eq!(gadget.price, 9.99);

    assert!(service.find_by_id(99).is_none());
}

#[test]
fn reopening_after_each_mutation_matches_memory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.dat");
    let mut service = open(&path);

    service.add(Product::new(1, "Widget", 10, 2.50)).unwrap();
    assert_eq!(open(&path).list(), service.list());

    service.add(Product::new(2, "Gadget", 5, 9.99)).unwrap();
    assert_eq!(open(&path).list(), service.list());

    service.update_quantity(2, 4, StockDirection::Add).unwrap();
    assert_eq!(open(&path).list(), service.list());

    service
        .update_quantity(1, 10, StockDirection::Remove)
        .unwrap();
    let reopened = open(&path);
    assert_eq!(reopened.list(), service.list());
    assert_eq!(reopened.find_by_id(1).unwrap().quantity, 0);
    assert_eq!(reopened.find_by_id(2).unwrap().quantity, 9);
}

#[test]
fn reopened_prices_match_bit_for_bit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.dat");
    let mut prices = vec![
        0.1,
        1.0 / 3.0,
        9.99,
        -0.0,
        f64::MIN_POSITIVE,
        f64::MAX,
        f64::MIN,
        f64::EPSILON,
        5e-324,
        1.0715660391465826e-75,
    ];
    let mut state = 0x9e37_79b9_7f4a_7c15_u64;
    while prices.len() < 2_000 {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        let candidate = f64::from_bits(state);
        if candidate.is_finite() {
            prices.push(candidate);
        }
    }

    let products = prices
        .iter()
        .zip(0..)
        .map(|(price, id)| Product::new(id, "p", 1, *price))
        .collect::<Vec<_>>();
    JsonFileProductRepository::new(&path)
        .save_products(&products)
        .unwrap();

    let reopened = open(&path);
    assert_eq!(reopened.len(), prices.len());
    for (product, price) in reopened.list().iter().zip(&prices) {
        assert_eq!(
            product.price.to_bits(),
            price.to_bits(),
            "price {price:e} came back as {:e}",
            product.price
        );
    }
}

#[test]
fn non_finite_price_fails_save_and_keeps_persisted_inventory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.dat");
    let mut service = open(&path);
    service.add(Product::new(1, "Widget", 10, 2.5)).unwrap();

    let err = service.add(Product::new(2, "Odd", 1, f64::NAN)).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)), "unexpected: {err}");
    assert_eq!(service.len(), 2);

    let reopened = open(&path);
    assert_eq!(reopened.list(), &[Product::new(1, "Widget", 10, 2.5)]);
}

#[test]
fn list_preserves_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = open(&dir.path().join("inventory.dat"));

    for id in [30, 10, 20] {
        service
            .add(Product::new(id, format!("item-{id}"), 1, 1.0))
            .unwrap();
    }

    let ids = service.list().iter().map(|p| p.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![30, 10, 20]);
}

#[test]
fn duplicate_ids_are_kept_and_lookup_returns_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.dat");
    let mut service = open(&path);

    service.add(Product::new(1, "First", 1, 1.0)).unwrap();
    service.add(Product::new(1, "Second", 2, 2.0)).unwrap();

    assert_eq!(service.len(), 2);
    assert_eq!(service.find_by_id(1).unwrap().name, "First");

    service.update_quantity(1, 5, StockDirection::Add).unwrap();
    let reopened = open(&path);
    assert_eq!(reopened.list()[0].quantity, 6);
    assert_eq!(reopened.list()[1].quantity, 2);
}

#[test]
fn update_unknown_id_returns_not_found_and_keeps_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.dat");
    let mut service = open(&path);
    service.add(Product::new(1, "Widget", 10, 2.50)).unwrap();
    let before = std::fs::read(&path).unwrap();

    let err = service
        .update_quantity(99, 1, StockDirection::Add)
        .unwrap_err();

    assert!(matches!(err, RepoError::NotFound(99)));
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn corrupt_file_opens_as_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.dat");
    std::fs::write(&path, "[{\"id\": 1, \"name\": \"Widget\"").unwrap();

    let service = open(&path);
    assert!(service.is_empty());
}

#[test]
fn wrong_shape_file_opens_as_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.dat");
    std::fs::write(&path, "{\"products\": []}").unwrap();

    let service = open(&path);
    assert!(service.is_empty());
}

#[test]
fn corrupt_file_is_overwritten_by_next_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.dat");
    std::fs::write(&path, "garbage").unwrap();

    let mut service = open(&path);
    service.add(Product::new(5, "Nut", 100, 0.05)).unwrap();

    let reopened = open(&path);
    assert_eq!(reopened.list(), &[Product::new(5, "Nut", 100, 0.05)]);
}

#[test]
fn failed_save_is_reported_but_memory_stays_authoritative() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("inventory.dat");
    let mut service = open(&path);

    let err = service.add(Product::new(1, "Widget", 10, 2.50)).unwrap_err();
    assert!(matches!(err, RepoError::Io(_)));
    assert_eq!(service.len(), 1);

    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    service.add(Product::new(2, "Gadget", 5, 9.99)).unwrap();

    let reopened = open(&path);
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened.find_by_id(1).unwrap().name, "Widget");
}

#[test]
fn independent_stores_do_not_share_state() {
    let dir = tempfile::tempdir().unwrap();
    let mut left = open(&dir.path().join("left.dat"));
    let right = open(&dir.path().join("right.dat"));

    left.add(Product::new(1, "Widget", 10, 2.50)).unwrap();

    assert_eq!(left.len(), 1);
    assert!(right.is_empty());
}
