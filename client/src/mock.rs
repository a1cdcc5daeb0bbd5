//! In-memory [`Backend`] for tests and offline development.
//!
//! Behaves like the real service for the happy path and can be told to fail
//! every call, which is how checkout and admin error paths are exercised.

use std::cell::RefCell;

use campus_bites_common::dish::{Dish, DishDraft, DishId};
use campus_bites_common::order::{Order, OrderDraft, OrderId, OrderStatus};

use crate::api::Backend;
use crate::error::ClientError;

#[derive(Debug, Default)]
struct MockState {
    dishes: Vec<Dish>,
    orders: Vec<Order>,
    next_id: u64,
    failure: Option<ClientError>,
    calls: Vec<&'static str>,
}

#[derive(Debug, Default)]
pub struct MockBackend {
    state: RefCell<MockState>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dishes(dishes: Vec<Dish>) -> Self {
        let mock = Self::new();
        mock.state.borrow_mut().dishes = dishes;
        mock
    }

    /// Make every subsequent call fail with `error` until [`recover`](Self::recover).
    pub fn fail_with(&self, error: ClientError) {
        self.state.borrow_mut().failure = Some(error);
    }

    pub fn recover(&self) {
        self.state.borrow_mut().failure = None;
    }

    /// Names of the backend methods called so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.state.borrow().calls.clone()
    }

    pub fn dishes(&self) -> Vec<Dish> {
        self.state.borrow().dishes.clone()
    }

    pub fn orders(&self) -> Vec<Order> {
        self.state.borrow().orders.clone()
    }

    fn begin(&self, call: &'static str) -> Result<(), ClientError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(call);
        match &state.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn fresh_id(&self, prefix: &str) -> String {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        format!("{prefix}{:06}", state.next_id)
    }
}

fn not_found(what: &str) -> ClientError {
    ClientError::Status {
        status: 404,
        message: format!("{what} not found"),
    }
}

impl Backend for MockBackend {
    async fn list_dishes(&self) -> Result<Vec<Dish>, ClientError> {
        self.begin("list_dishes")?;
        Ok(self.dishes())
    }

    async fn create_dish(&self, draft: &DishDraft) -> Result<Dish, ClientError> {
        self.begin("create_dish")?;
        let dish = draft.clone().into_dish(DishId(self.fresh_id("dish-")));
        self.state.borrow_mut().dishes.push(dish.clone());
        Ok(dish)
    }

    async fn update_dish(&self, id: &DishId, draft: &DishDraft) -> Result<Dish, ClientError> {
        self.begin("update_dish")?;
        let mut state = self.state.borrow_mut();
        let slot = state
            .dishes
            .iter_mut()
            .find(|d| &d.id == id)
            .ok_or_else(|| not_found("Dish"))?;
        *slot = draft.clone().into_dish(id.clone());
        Ok(slot.clone())
    }

    async fn delete_dish(&self, id: &DishId) -> Result<(), ClientError> {
        self.begin("delete_dish")?;
        let mut state = self.state.borrow_mut();
        let before = state.dishes.len();
        state.dishes.retain(|d| &d.id != id);
        if state.dishes.len() == before {
            return Err(not_found("Dish"));
        }
        Ok(())
    }

    async fn list_orders(&self) -> Result<Vec<Order>, ClientError> {
        self.begin("list_orders")?;
        Ok(self.orders())
    }

    async fn create_order(&self, order: &OrderDraft) -> Result<OrderId, ClientError> {
        self.begin("create_order")?;
        let id = OrderId(self.fresh_id("order-"));
        self.state.borrow_mut().orders.push(Order {
            id: id.clone(),
            items: order.items.clone(),
            total_price: order.total_price,
            customer_info: order.customer_info.clone(),
            status: OrderStatus::Pending,
            created_at: None,
        });
        Ok(id)
    }

    async fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, ClientError> {
        self.begin("update_order_status")?;
        let mut state = self.state.borrow_mut();
        let order = state
            .orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| not_found("Order"))?;
        order.status = status;
        Ok(order.clone())
    }
}
