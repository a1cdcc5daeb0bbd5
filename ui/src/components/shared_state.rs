use dioxus::prelude::*;

use campus_bites_client::error::AdminError;
use campus_bites_common::cart::PersistentCart;
use campus_bites_common::dish::Dish;
use campus_bites_common::order::{Order, OrderId};

use super::browser_storage::LocalStorage;

/// Backend-sourced state shared across all components.
///
/// Written only by the API coroutine after each call completes; components
/// read from it and send [`ApiAction`](super::api_actions::ApiAction)s to
/// change it.
#[derive(Clone, Debug)]
pub struct SharedState {
    pub dishes: Vec<Dish>,
    pub dishes_loading: bool,
    pub orders: Vec<Order>,
    pub orders_loading: bool,
    /// Last failed admin mutation, shown as a banner.
    pub last_error: Option<String>,
    /// Bumped after each successful dish save; the dish form resets when it
    /// changes.
    pub dishes_saved: u64,
    /// Last failed order submission, shown in the checkout modal.
    pub checkout_error: Option<String>,
    /// Id of the order just placed, until the success panel is closed.
    pub placed_order: Option<OrderId>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            dishes: Vec::new(),
            dishes_loading: true,
            orders: Vec::new(),
            orders_loading: true,
            last_error: None,
            dishes_saved: 0,
            checkout_error: None,
            placed_order: None,
        }
    }

    /// Take in the outcome of a dish save. A failure only sets the banner;
    /// the dish list and the form stay as they were.
    pub fn apply_dish_save(&mut self, result: Result<Vec<Dish>, AdminError>) {
        match result {
            Ok(dishes) => {
                self.dishes = dishes;
                self.last_error = None;
                self.dishes_saved += 1;
            }
            Err(e) => self.last_error = Some(format!("Failed to save dish: {e}")),
        }
    }
}

pub fn use_shared_state() -> Signal<SharedState> {
    use_context::<Signal<SharedState>>()
}

/// The customer's cart, saved to `localStorage` after every change.
pub type BrowserCart = PersistentCart<LocalStorage>;

pub fn use_cart() -> Signal<BrowserCart> {
    use_context::<Signal<BrowserCart>>()
}
