use campus_bites_backend_integration::{sample_menu, StubBackend};
use campus_bites_client::admin::{self, DishForm};
use campus_bites_client::api::Backend;
use campus_bites_client::config::ClientConfig;
use campus_bites_client::error::{AdminError, CheckoutError, ClientError};
use campus_bites_client::http::HttpBackend;
use campus_bites_client::storefront::Storefront;
use campus_bites_common::cart::CART_STORAGE_KEY;
use campus_bites_common::dish::DishId;
use campus_bites_common::order::{CustomerInfo, OrderStatus};
use campus_bites_common::storage::{KeyValueStore, MemoryStore};

fn customer() -> CustomerInfo {
    CustomerInfo {
        name: "Ada Lovelace".into(),
        email: "ada@uni.edu".into(),
        student_id: "S-1815".into(),
        notes: "Extra napkins".into(),
    }
}

#[tokio::test]
async fn menu_is_fetched_and_filtered() {
    tracing_subscriber::fmt::try_init().ok();
    let stub = StubBackend::spawn(sample_menu()).await;
    let mut shop = Storefront::new(MemoryStore::new());

    shop.refresh(&stub.client()).await;

    assert_eq!(shop.dishes(), sample_menu().as_slice());
    assert_eq!(shop.categories(), ["All", "Lunch", "Drinks"]);
    shop.select_category("Drinks");
    let names: Vec<_> = shop.visible_dishes().iter().map(|d| d.name.clone()).collect();
    assert_eq!(names, ["Dish B"]);
}

/// Two of Dish A and one of Dish B come to $16.97; placing the order
/// empties the cart and the backend sees the same snapshot.
#[tokio::test]
async fn checkout_end_to_end() {
    tracing_subscriber::fmt::try_init().ok();
    let stub = StubBackend::spawn(sample_menu()).await;
    let backend = stub.client();
    let mut shop = Storefront::new(MemoryStore::new());
    shop.refresh(&backend).await;

    shop.add_to_cart(&DishId("dish-a".into()));
    shop.add_to_cart(&DishId("dish-a".into()));
    shop.add_to_cart(&DishId("dish-b".into()));
    let totals = shop.totals();
    assert_eq!(totals.items, 3);
    assert_eq!(totals.price.to_string(), "$16.97");

    let order_id = shop.checkout(&backend, customer()).await.unwrap();

    assert!(!order_id.0.is_empty());
    assert!(shop.cart().is_empty());

    let orders = stub.orders();
    assert_eq!(orders.len(), 1);
    let order = &orders[0];
    assert_eq!(order.id, order_id);
    assert_eq!(order.total_price.cents(), 1697);
    assert_eq!(order.customer_info, customer());
    let items: Vec<_> = order
        .items
        .iter()
        .map(|i| (i.dish_id.0.as_str(), i.quantity, i.price.cents()))
        .collect();
    assert_eq!(items, [("dish-a", 2, 599), ("dish-b", 1, 499)]);
}

#[tokio::test]
async fn rejected_order_leaves_cart_alone() {
    tracing_subscriber::fmt::try_init().ok();
    let stub = StubBackend::spawn(sample_menu()).await;
    stub.reject_orders("Kitchen is closed");
    let backend = stub.client();
    let mut shop = Storefront::new(MemoryStore::new());
    shop.refresh(&backend).await;
    shop.add_to_cart(&DishId("dish-b".into()));
    let before = shop.cart().clone();

    let err = shop.checkout(&backend, customer()).await.unwrap_err();

    assert_eq!(
        err,
        CheckoutError::Client(ClientError::Status {
            status: 400,
            message: "Kitchen is closed".into(),
        })
    );
    assert_eq!(shop.cart(), &before);
    assert!(shop.last_order().is_none());
    assert!(stub.orders().is_empty());
}

#[tokio::test]
async fn unreachable_backend_degrades_gracefully() {
    tracing_subscriber::fmt::try_init().ok();
    // Nothing listens on port 9 of the loopback interface.
    let backend = HttpBackend::new(ClientConfig::new("http://127.0.0.1:9"));

    let mut store = MemoryStore::new();
    store
        .set(CART_STORAGE_KEY, r#"[{"_id":"dish-a","name":"Dish A","price":5.99,"quantity":1}]"#)
        .unwrap();
    let mut shop = Storefront::new(store);
    shop.refresh(&backend).await;

    assert!(shop.dishes().is_empty());
    assert!(!shop.is_loading());
    assert_eq!(shop.totals().items, 1);

    let err = shop.checkout(&backend, customer()).await.unwrap_err();
    assert!(matches!(err, CheckoutError::Client(ClientError::Transport(_))));
    assert_eq!(shop.totals().items, 1);

    assert!(admin::load_orders(&backend).await.is_empty());
}

#[tokio::test]
async fn dish_crud_refreshes_after_each_change() {
    tracing_subscriber::fmt::try_init().ok();
    let stub = StubBackend::spawn(sample_menu()).await;
    let backend = stub.client();

    let form = DishForm {
        editing: None,
        name: "Masala Chai".into(),
        description: "Spiced milk tea".into(),
        price: "1.75".into(),
        category: "Drinks".into(),
        image: "https://img.example/chai.jpg".into(),
    };
    let dishes = admin::save_dish(&backend, &form).await.unwrap();
    assert_eq!(dishes.len(), 3);
    let chai = dishes.iter().find(|d| d.name == "Masala Chai").unwrap().clone();
    assert_eq!(chai.price.cents(), 175);

    let mut edit = DishForm::edit(&chai);
    edit.price = "2".into();
    let dishes = admin::save_dish(&backend, &edit).await.unwrap();
    let updated = dishes.iter().find(|d| d.id == chai.id).unwrap();
    assert_eq!(updated.price.to_string(), "$2.00");

    let dishes = admin::delete_dish(&backend, &chai.id).await.unwrap();
    assert_eq!(dishes, sample_menu());
    assert_eq!(stub.dishes(), sample_menu());

    let err = admin::delete_dish(&backend, &chai.id).await.unwrap_err();
    assert!(matches!(
        err,
        AdminError::Client(ClientError::Status { status: 404, .. })
    ));
}

#[tokio::test]
async fn order_status_changes_are_unrestricted() {
    tracing_subscriber::fmt::try_init().ok();
    let stub = StubBackend::spawn(sample_menu()).await;
    let backend = stub.client();
    let mut shop = Storefront::new(MemoryStore::new());
    shop.refresh(&backend).await;
    shop.add_to_cart(&DishId("dish-a".into()));
    let id = shop.checkout(&backend, customer()).await.unwrap();

    let orders = admin::load_orders(&backend).await;
    assert_eq!(orders[0].status, OrderStatus::Pending);
    assert!(orders[0].placed_at().is_some());

    let orders = admin::set_order_status(&backend, &id, OrderStatus::Delivered)
        .await
        .unwrap();
    assert_eq!(orders[0].status, OrderStatus::Delivered);

    let orders = admin::set_order_status(&backend, &id, OrderStatus::Pending)
        .await
        .unwrap();
    assert_eq!(orders[0].status, OrderStatus::Pending);

    let updated = backend
        .update_order_status(&id, OrderStatus::Cancelled)
        .await
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Cancelled);
}
