use campus_bites_common::api::OrderReceipt;
use campus_bites_common::dish::{Dish, DishDraft, DishId};
use campus_bites_common::order::{Order, OrderDraft, OrderId, OrderStatus};

use crate::error::ClientError;

/// The menu/order REST service.
///
/// One method per endpoint; implementations do no caching, retrying or
/// reconciliation. Callers re-read after every mutation.
#[allow(async_fn_in_trait)] // futures are not Send on wasm
pub trait Backend {
    /// `GET /api/dishes`
    async fn list_dishes(&self) -> Result<Vec<Dish>, ClientError>;

    /// `POST /api/dishes`
    async fn create_dish(&self, draft: &DishDraft) -> Result<Dish, ClientError>;

    /// `PUT /api/dishes/{id}`
    async fn update_dish(&self, id: &DishId, draft: &DishDraft) -> Result<Dish, ClientError>;

    /// `DELETE /api/dishes/{id}`
    async fn delete_dish(&self, id: &DishId) -> Result<(), ClientError>;

    /// `GET /api/orders`
    async fn list_orders(&self) -> Result<Vec<Order>, ClientError>;

    /// `POST /api/orders`
    async fn create_order(&self, order: &OrderDraft) -> Result<OrderId, ClientError>;

    /// `PUT /api/orders/{id}`
    async fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, ClientError>;
}

/// Turn a create-order response body into the assigned id.
pub fn receipt_into_id(receipt: OrderReceipt) -> Result<OrderId, ClientError> {
    if let Some(error) = receipt.error {
        return Err(ClientError::Rejected(error));
    }
    match receipt.order_id {
        Some(id) if !id.0.trim().is_empty() => Ok(id),
        _ => Err(ClientError::Decode("response carried no orderId".into())),
    }
}
