use campus_bites_common::cart::{Cart, PersistentCart};
use campus_bites_common::order::{CustomerInfo, OrderDraft, OrderId};
use campus_bites_common::storage::KeyValueStore;

use crate::api::Backend;
use crate::error::CheckoutError;

/// Validate the customer details and snapshot the cart into an order body.
/// Nothing is sent and nothing changes.
pub fn prepare_order(cart: &Cart, customer: CustomerInfo) -> Result<OrderDraft, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    let customer = customer.validated()?;
    Ok(OrderDraft::from_cart(cart, customer))
}

/// Send a prepared order. `clear_cart` runs only once the backend has
/// accepted it and returned an id.
pub async fn send_order<B: Backend>(
    backend: &B,
    draft: &OrderDraft,
    clear_cart: impl FnOnce(),
) -> Result<OrderId, CheckoutError> {
    match backend.create_order(draft).await {
        Ok(order_id) => {
            tracing::info!(%order_id, total = %draft.total_price, "Order placed");
            clear_cart();
            Ok(order_id)
        }
        Err(e) => {
            tracing::error!("Error submitting order: {e}");
            Err(e.into())
        }
    }
}

/// Place an order for everything in the cart.
///
/// The cart (and its saved copy) is emptied only once the backend has
/// accepted the order; on any failure it is left exactly as it was so the
/// customer can try again.
pub async fn submit_order<B, S>(
    backend: &B,
    cart: &mut PersistentCart<S>,
    customer: CustomerInfo,
) -> Result<OrderId, CheckoutError>
where
    B: Backend,
    S: KeyValueStore,
{
    let draft = prepare_order(cart.cart(), customer)?;
    send_order(backend, &draft, || cart.clear()).await
}
