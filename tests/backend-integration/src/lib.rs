//! In-process stand-in for the menu/order REST service.
//!
//! Speaks the same JSON as the real backend (Mongo-style `_id`s, decimal
//! prices, `{orderId}` / `{error}` order receipts) so the reqwest client can
//! be exercised end to end without a database.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use tokio::net::TcpListener;

use campus_bites_client::config::ClientConfig;
use campus_bites_client::http::HttpBackend;
use campus_bites_common::api::{ErrorBody, OrderReceipt, StatusUpdate};
use campus_bites_common::dish::{Dish, DishDraft, DishId};
use campus_bites_common::order::{Order, OrderDraft, OrderId, OrderStatus};
use campus_bites_common::price::Price;

type Shared = Arc<Mutex<StubState>>;
type Failure = (StatusCode, Json<ErrorBody>);

#[derive(Debug, Default)]
struct StubState {
    dishes: Vec<Dish>,
    orders: Vec<Order>,
    next_id: u64,
    reject_orders: Option<String>,
}

impl StubState {
    /// 24 hex digits, shaped like a Mongo ObjectId.
    fn object_id(&mut self) -> String {
        self.next_id += 1;
        format!("65f1c0ffee{:014x}", self.next_id)
    }
}

fn not_found(what: &str) -> Failure {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: format!("{what} not found"),
        }),
    )
}

/// A running stub backend bound to a random local port.
pub struct StubBackend {
    addr: SocketAddr,
    state: Shared,
}

impl StubBackend {
    pub async fn spawn(dishes: Vec<Dish>) -> Self {
        let state: Shared = Arc::new(Mutex::new(StubState {
            dishes,
            ..StubState::default()
        }));
        let app = Router::new()
            .route("/api/dishes", get(list_dishes).post(create_dish))
            .route("/api/dishes/{id}", put(update_dish).delete(delete_dish))
            .route("/api/orders", get(list_orders).post(create_order))
            .route("/api/orders/{id}", put(update_order))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub backend");
        let addr = listener.local_addr().expect("stub backend address");
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("Stub backend stopped: {e}");
            }
        });
        tracing::debug!("Stub backend listening on {addr}");
        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self) -> HttpBackend {
        HttpBackend::new(ClientConfig::new(self.base_url()))
    }

    /// Answer every order submission with `400 {error: message}`.
    pub fn reject_orders(&self, message: &str) {
        self.state.lock().unwrap().reject_orders = Some(message.to_string());
    }

    pub fn orders(&self) -> Vec<Order> {
        self.state.lock().unwrap().orders.clone()
    }

    pub fn dishes(&self) -> Vec<Dish> {
        self.state.lock().unwrap().dishes.clone()
    }
}

/// The two dishes used throughout the end-to-end scenarios.
pub fn sample_menu() -> Vec<Dish> {
    vec![
        Dish {
            id: DishId("dish-a".into()),
            name: "Dish A".into(),
            description: "Paneer wrap".into(),
            price: Price::from_cents(599),
            image: "https://img.example/a.jpg".into(),
            category: "Lunch".into(),
        },
        Dish {
            id: DishId("dish-b".into()),
            name: "Dish B".into(),
            description: "Iced coffee".into(),
            price: Price::from_cents(499),
            image: "https://img.example/b.jpg".into(),
            category: "Drinks".into(),
        },
    ]
}

async fn list_dishes(State(state): State<Shared>) -> Json<Vec<Dish>> {
    Json(state.lock().unwrap().dishes.clone())
}

async fn create_dish(
    State(state): State<Shared>,
    Json(draft): Json<DishDraft>,
) -> (StatusCode, Json<Dish>) {
    let mut state = state.lock().unwrap();
    let id = DishId(state.object_id());
    let dish = draft.into_dish(id);
    state.dishes.push(dish.clone());
    (StatusCode::CREATED, Json(dish))
}

async fn update_dish(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(draft): Json<DishDraft>,
) -> Result<Json<Dish>, Failure> {
    let mut state = state.lock().unwrap();
    let id = DishId(id);
    let slot = state
        .dishes
        .iter_mut()
        .find(|d| d.id == id)
        .ok_or_else(|| not_found("Dish"))?;
    *slot = draft.into_dish(id);
    Ok(Json(slot.clone()))
}

async fn delete_dish(
    State(state): State<Shared>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, Failure> {
    let mut state = state.lock().unwrap();
    let before = state.dishes.len();
    state.dishes.retain(|d| d.id.0 != id);
    if state.dishes.len() == before {
        return Err(not_found("Dish"));
    }
    Ok(Json(serde_json::json!({ "message": "Dish deleted" })))
}

async fn list_orders(State(state): State<Shared>) -> Json<Vec<Order>> {
    Json(state.lock().unwrap().orders.clone())
}

async fn create_order(
    State(state): State<Shared>,
    Json(draft): Json<OrderDraft>,
) -> (StatusCode, Json<OrderReceipt>) {
    let mut state = state.lock().unwrap();
    if let Some(error) = state.reject_orders.clone() {
        return (
            StatusCode::BAD_REQUEST,
            Json(OrderReceipt {
                order_id: None,
                error: Some(error),
            }),
        );
    }
    let id = OrderId(state.object_id());
    state.orders.push(Order {
        id: id.clone(),
        items: draft.items,
        total_price: draft.total_price,
        customer_info: draft.customer_info,
        status: OrderStatus::Pending,
        created_at: Some(chrono::Utc::now()),
    });
    (
        StatusCode::CREATED,
        Json(OrderReceipt {
            order_id: Some(id),
            error: None,
        }),
    )
}

async fn update_order(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(update): Json<StatusUpdate>,
) -> Result<Json<Order>, Failure> {
    let mut state = state.lock().unwrap();
    let order = state
        .orders
        .iter_mut()
        .find(|o| o.id.0 == id)
        .ok_or_else(|| not_found("Order"))?;
    order.status = update.status;
    Ok(Json(order.clone()))
}
