use dioxus::prelude::*;
use futures::StreamExt;

use campus_bites_client::admin::{self, DishForm};
use campus_bites_client::checkout;
use campus_bites_client::config::ClientConfig;
use campus_bites_common::dish::DishId;
use campus_bites_common::order::{CustomerInfo, OrderId, OrderStatus};

use super::fetch_backend::FetchBackend;
use super::shared_state::{use_cart, use_shared_state, BrowserCart, SharedState};

/// Actions the UI can send to the backend via the coroutine.
#[derive(Debug, Clone)]
pub enum ApiAction {
    /// Re-read the dish list.
    LoadMenu,
    /// Re-read the order list.
    LoadOrders,
    /// Create the dish (or update the one being edited), then reload.
    SaveDish(DishForm),
    DeleteDish(DishId),
    /// Move an order to any status, then reload the order list.
    SetOrderStatus { id: OrderId, status: OrderStatus },
    /// Submit the current cart for this customer.
    PlaceOrder(CustomerInfo),
}

/// Get a handle to send actions to the backend coroutine.
pub fn use_api_action() -> Coroutine<ApiAction> {
    use_coroutine_handle::<ApiAction>()
}

/// Start the backend coroutine. Actions are handled one at a time, in the
/// order they were sent.
pub fn use_api_coroutine() {
    let shared_state = use_shared_state();
    let cart = use_cart();
    use_coroutine(move |rx: UnboundedReceiver<ApiAction>| api_loop(rx, shared_state, cart));
}

async fn api_loop(
    mut rx: UnboundedReceiver<ApiAction>,
    mut shared_state: Signal<SharedState>,
    mut cart: Signal<BrowserCart>,
) {
    let backend = FetchBackend::new(ClientConfig::from_env());

    while let Some(action) = rx.next().await {
        tracing::debug!("API action: {:?}", action);
        match action {
            ApiAction::LoadMenu => {
                shared_state.write().dishes_loading = true;
                let dishes = admin::load_dishes(&backend).await;
                let mut state = shared_state.write();
                state.dishes = dishes;
                state.dishes_loading = false;
            }
            ApiAction::LoadOrders => {
                shared_state.write().orders_loading = true;
                let orders = admin::load_orders(&backend).await;
                let mut state = shared_state.write();
                state.orders = orders;
                state.orders_loading = false;
            }
            ApiAction::SaveDish(form) => {
                let result = admin::save_dish(&backend, &form).await;
                shared_state.write().apply_dish_save(result);
            }
            ApiAction::DeleteDish(id) => {
                let result = admin::delete_dish(&backend, &id).await;
                let mut state = shared_state.write();
                match result {
                    Ok(dishes) => {
                        state.dishes = dishes;
                        state.last_error = None;
                    }
                    Err(e) => state.last_error = Some(format!("Failed to delete dish: {e}")),
                }
            }
            ApiAction::SetOrderStatus { id, status } => {
                let result = admin::set_order_status(&backend, &id, status).await;
                let mut state = shared_state.write();
                match result {
                    Ok(orders) => {
                        state.orders = orders;
                        state.last_error = None;
                    }
                    Err(e) => {
                        state.last_error = Some(format!("Failed to update order status: {e}"))
                    }
                }
            }
            ApiAction::PlaceOrder(customer) => {
                // The cart signal is not held across the request.
                let prepared = checkout::prepare_order(cart.read().cart(), customer);
                let draft = match prepared {
                    Ok(draft) => draft,
                    Err(e) => {
                        shared_state.write().checkout_error = Some(e.to_string());
                        continue;
                    }
                };
                match checkout::send_order(&backend, &draft, || cart.write().clear()).await {
                    Ok(order_id) => {
                        let mut state = shared_state.write();
                        state.placed_order = Some(order_id);
                        state.checkout_error = None;
                    }
                    Err(e) => {
                        shared_state.write().checkout_error = Some(e.to_string());
                    }
                }
            }
        }
    }
}
