mod common;

use catalog_core::{Money, Product};
use catalog_db::DbError;
use catalog_service::{ProductService, ServiceError};

use common::{product, two_products, Call, RecordingRepository};

fn service_with(products: Vec<Product>) -> ProductService<RecordingRepository> {
    ProductService::new(RecordingRepository::with_products(products))
}

#[tokio::test]
async fn get_all_products_delegates_to_find_all() {
    let service = service_with(two_products());

    let products = service.get_all_products().await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name, "测试商品1");
    assert_eq!(service.repository().calls(), [Call::FindAll]);
}

#[tokio::test]
async fn get_all_products_on_empty_store_is_empty() {
    let service = service_with(vec![]);
    assert!(service.get_all_products().await.unwrap().is_empty());
}

#[tokio::test]
async fn get_product_by_id_returns_stored_product() {
    let service = service_with(two_products());

    let found = service.get_product_by_id(1).await.unwrap().unwrap();

    assert_eq!(found.name, "测试商品1");
    assert_eq!(found.price, "99.99".parse::<Money>().unwrap());
    assert_eq!(service.repository().calls(), [Call::FindById(1)]);
}

#[tokio::test]
async fn get_product_by_id_missing_is_none_not_error() {
    let service = service_with(two_products());

    let found = service.get_product_by_id(999).await.unwrap();

    assert!(found.is_none());
    assert_eq!(service.repository().calls(), [Call::FindById(999)]);
}

#[tokio::test]
async fn create_product_saves_payload_unchanged() {
    let service = service_with(vec![]);
    let new_product = Product::new("新商品", Money::from_cents(29999)).with_stock(50);

    let created = service.create_product(&new_product).await.unwrap();

    assert!(created.id.is_some());
    assert_eq!(created.name, "新商品");
    assert_eq!(created.price, Money::from_cents(29999));
    assert_eq!(created.stock, 50);
    assert_eq!(service.repository().calls(), [Call::Save(new_product)]);
}

#[tokio::test]
async fn create_product_passes_caller_id_through() {
    let service = service_with(two_products());
    let colliding = product(1, "Overwrites id 1", 1, 1);

    service.create_product(&colliding).await.unwrap();

    let stored = service.repository().stored();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].name, "Overwrites id 1");
}

#[tokio::test]
async fn update_product_overwrites_all_six_fields() {
    let existing = product(1, "Old", 9999, 10)
        .with_description("old description")
        .with_category("tools")
        .with_image_url("https://img.example/old.png");
    let service = service_with(vec![existing]);

    let patch = Product::new("New", Money::from_cents(12345))
        .with_description("new description")
        .with_stock(3)
        .with_category("toys")
        .with_image_url("https://img.example/new.png");

    let updated = service.update_product(1, &patch).await.unwrap();

    assert_eq!(updated.id, Some(1));
    assert_eq!(updated.name, "New");
    assert_eq!(updated.description.as_deref(), Some("new description"));
    assert_eq!(updated.price, Money::from_cents(12345));
    assert_eq!(updated.stock, 3);
    assert_eq!(updated.category.as_deref(), Some("toys"));
    assert_eq!(updated.image_url.as_deref(), Some("https://img.example/new.png"));

    let calls = service.repository().calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], Call::FindById(1));
    assert_eq!(calls[1], Call::Save(updated));
}

#[tokio::test]
async fn update_product_discards_old_values_even_when_patch_is_empty() {
    let existing = product(1, "Old", 9999, 10)
        .with_description("old description")
        .with_category("tools")
        .with_image_url("https://img.example/old.png");
    let service = service_with(vec![existing]);

    let updated = service.update_product(1, &Product::default()).await.unwrap();

    assert_eq!(updated.id, Some(1));
    assert_eq!(updated.name, "");
    assert_eq!(updated.description, None);
    assert!(updated.price.is_zero());
    assert_eq!(updated.stock, 0);
    assert_eq!(updated.category, None);
    assert_eq!(updated.image_url, None);
}

#[tokio::test]
async fn update_product_ignores_patch_id() {
    let service = service_with(two_products());

    let patch = product(2, "Renamed", 1, 1);
    let updated = service.update_product(1, &patch).await.unwrap();

    assert_eq!(updated.id, Some(1));
    let stored = service.repository().stored();
    assert_eq!(stored[0].name, "Renamed");
    assert_eq!(stored[1].name, "测试商品2");
}

#[tokio::test]
async fn update_product_missing_fails_without_writing() {
    let service = service_with(two_products());

    let err = service
        .update_product(999, &Product::new("Ghost", Money::zero()))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::NotFound { id: 999 }));
    assert_eq!(err.to_string(), "Product not found: 999");
    assert_eq!(service.repository().save_count(), 0);
    assert_eq!(service.repository().calls(), [Call::FindById(999)]);
}

#[tokio::test]
async fn delete_product_delegates_without_existence_check() {
    let service = service_with(two_products());

    service.delete_product(1).await.unwrap();

    assert_eq!(service.repository().calls(), [Call::DeleteById(1)]);
    assert_eq!(service.repository().stored().len(), 1);
}

#[tokio::test]
async fn delete_product_is_idempotent() {
    let service = service_with(two_products());

    service.delete_product(1).await.unwrap();
    service.delete_product(1).await.unwrap();
    service.delete_product(404).await.unwrap();

    assert_eq!(
        service.repository().calls(),
        [Call::DeleteById(1), Call::DeleteById(1), Call::DeleteById(404)]
    );
}

#[tokio::test]
async fn get_products_by_category_delegates() {
    let service = service_with(vec![
        product(1, "Widget A", 100, 1).with_category("tools"),
        product(2, "Widget B", 100, 1).with_category("toys"),
    ]);

    let tools = service.get_products_by_category("tools").await.unwrap();

    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].id, Some(1));
    assert_eq!(
        service.repository().calls(),
        [Call::FindByCategory("tools".to_string())]
    );
}

#[tokio::test]
async fn search_products_delegates() {
    let service = service_with(two_products());

    let results = service.search_products("测试").await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(
        service.repository().calls(),
        [Call::FindByNameContaining("测试".to_string())]
    );
}

#[tokio::test]
async fn storage_failures_propagate_unchanged() {
    let service = ProductService::new(
        RecordingRepository::with_products(two_products()).failing(|| DbError::PoolExhausted),
    );

    let err = service.get_all_products().await.unwrap_err();
    assert!(matches!(err, ServiceError::Storage(DbError::PoolExhausted)));

    // A storage failure during the lookup is not reported as NotFound
    let err = service
        .update_product(1, &Product::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Storage(DbError::PoolExhausted)));
    assert_eq!(service.repository().save_count(), 0);
}
