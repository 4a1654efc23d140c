use catalogue::domain::product::{NewProduct, ProductPatch};
use catalogue::domain::types::{CategoryName, ProductId, ProductName, ProductPrice};
use catalogue::repository::{DieselRepository, ProductListQuery, ProductReader, ProductWriter};

mod common;

fn new_product(name: &str, price: f64, category: &str, available: bool) -> NewProduct {
    NewProduct {
        name: ProductName::new(name).expect("valid product name"),
        price: ProductPrice::new(price).expect("valid price"),
        category: CategoryName::new(category).expect("valid category"),
        available,
    }
}

#[test]
fn get_after_insert_returns_inserted_fields() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let widget = new_product("Widget", 9.99, "Tools", true);
    let id = repo.create_product(&widget).expect("should create product");

    let stored = repo
        .get_product_by_id(id)
        .expect("should query product")
        .expect("product should exist");
    assert_eq!(stored, widget.into_product(id));
}

#[test]
fn ids_are_not_reused_after_delete() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let first = repo
        .create_product(&new_product("A", 1.0, "X", false))
        .expect("should create product");
    assert_eq!(repo.delete_product(first).expect("should delete"), 1);

    let second = repo
        .create_product(&new_product("B", 1.0, "X", false))
        .expect("should create product");
    assert!(second > first);
}

#[test]
fn list_filters_by_exact_category() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_product(&new_product("Hammer", 12.0, "Tools", true))
        .expect("should create product");
    repo.create_product(&new_product("Apple", 0.5, "Food", true))
        .expect("should create product");
    repo.create_product(&new_product("Saw", 20.0, "Tools", false))
        .expect("should create product");

    let all = repo
        .list_products(ProductListQuery::default())
        .expect("should list products");
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].name, "Hammer");

    let tools = repo
        .list_products(ProductListQuery::default().category(CategoryName::new("Tools").unwrap()))
        .expect("should list products");
    assert_eq!(tools.len(), 2);
    assert!(tools.iter().all(|p| p.category == "Tools"));

    let none = repo
        .list_products(ProductListQuery::default().category(CategoryName::new("Tool").unwrap()))
        .expect("should list products");
    assert!(none.is_empty());

    let categories = repo.list_categories().expect("should list categories");
    assert_eq!(categories, vec!["Food", "Tools"]);
}

#[test]
fn toggle_flips_only_availability() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let id = repo
        .create_product(&new_product("Widget", 9.99, "Tools", true))
        .expect("should create product");
    let before = repo.get_product_by_id(id).unwrap().unwrap();

    assert_eq!(repo.toggle_product_availability(id).unwrap(), 1);
    let after = repo.get_product_by_id(id).unwrap().unwrap();
    assert!(!after.available);
    assert_eq!(after.name, before.name);
    assert_eq!(after.price, before.price);
    assert_eq!(after.category, before.category);

    assert_eq!(repo.toggle_product_availability(id).unwrap(), 1);
    assert_eq!(repo.get_product_by_id(id).unwrap().unwrap(), before);
}

#[test]
fn missing_ids_are_reported_as_zero_rows() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let missing = ProductId::new(42).unwrap();

    assert!(repo.get_product_by_id(missing).unwrap().is_none());
    assert_eq!(repo.toggle_product_availability(missing).unwrap(), 0);
    assert_eq!(repo.delete_product(missing).unwrap(), 0);
    assert_eq!(
        repo.update_product(missing, &ProductPatch::default().available(true))
            .unwrap(),
        0
    );
}

#[test]
fn update_applies_partial_patch() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let id = repo
        .create_product(&new_product("Widget", 9.99, "Tools", false))
        .expect("should create product");

    let patch = ProductPatch::default()
        .price(ProductPrice::new(12.5).unwrap())
        .category(CategoryName::new("Hardware").unwrap());
    assert_eq!(repo.update_product(id, &patch).unwrap(), 1);
    assert_eq!(repo.update_product(id, &ProductPatch::default()).unwrap(), 0);

    let stored = repo.get_product_by_id(id).unwrap().unwrap();
    assert_eq!(stored.name, "Widget");
    assert_eq!(stored.price, 12.5);
    assert_eq!(stored.category, "Hardware");
    assert!(!stored.available);
}

#[test]
fn concurrent_toggles_all_apply() {
    const THREADS: usize = 7;
    const TOGGLES_PER_THREAD: usize = 25;

    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let id = repo
        .create_product(&new_product("Widget", 9.99, "Tools", true))
        .expect("should create product");

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let repo = repo.clone();
                scope.spawn(move || {
                    (0..TOGGLES_PER_THREAD)
                        .map(|_| repo.toggle_product_availability(id))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|handle| handle.join().expect("toggle thread panicked"))
            .collect()
    });

    assert_eq!(results.len(), THREADS * TOGGLES_PER_THREAD);
    for result in &results {
        assert_eq!(*result.as_ref().expect("toggle should not fail"), 1);
    }

    let flipped = (THREADS * TOGGLES_PER_THREAD) % 2 == 1;
    let stored = repo.get_product_by_id(id).unwrap().unwrap();
    assert_eq!(stored.available, !flipped);
}
