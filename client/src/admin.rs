//! Menu and order management.
//!
//! Every mutation is followed by a full re-read of the affected list, and the
//! fresh list is what the caller displays. There is no local reconciliation
//! and no optimistic update.

use thiserror::Error;

use campus_bites_common::dish::{Dish, DishDraft, DishId};
use campus_bites_common::order::{Order, OrderId, OrderStatus};
use campus_bites_common::price::PriceError;

use crate::api::Backend;
use crate::error::AdminError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DishFormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error(transparent)]
    Price(#[from] PriceError),
}

/// The add/edit dish form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishForm {
    /// Set when the form edits an existing dish rather than adding one.
    pub editing: Option<DishId>,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub image: String,
}

impl DishForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill the form from an existing dish.
    pub fn edit(dish: &Dish) -> Self {
        Self {
            editing: Some(dish.id.clone()),
            name: dish.name.clone(),
            description: dish.description.clone(),
            price: format!("{:.2}", dish.price.as_decimal()),
            category: dish.category.clone(),
            image: dish.image.clone(),
        }
    }

    /// Back to an empty "add new dish" form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn to_draft(&self) -> Result<DishDraft, DishFormError> {
        let required = |value: &str, field: &'static str| {
            let value = value.trim();
            if value.is_empty() {
                Err(DishFormError::Missing(field))
            } else {
                Ok(value.to_string())
            }
        };
        Ok(DishDraft {
            name: required(&self.name, "name")?,
            description: required(&self.description, "description")?,
            price: self.price.parse()?,
            category: required(&self.category, "category")?,
            image: required(&self.image, "image")?,
        })
    }
}

/// Read the menu; on failure log it and show an empty table.
pub async fn load_dishes<B: Backend>(backend: &B) -> Vec<Dish> {
    backend.list_dishes().await.unwrap_or_else(|e| {
        tracing::error!("Error fetching dishes: {e}");
        Vec::new()
    })
}

/// Read all orders; on failure log it and show an empty table.
pub async fn load_orders<B: Backend>(backend: &B) -> Vec<Order> {
    backend.list_orders().await.unwrap_or_else(|e| {
        tracing::error!("Error fetching orders: {e}");
        Vec::new()
    })
}

/// Create or update a dish from the form, then re-read the menu.
pub async fn save_dish<B: Backend>(backend: &B, form: &DishForm) -> Result<Vec<Dish>, AdminError> {
    let draft = form.to_draft()?;
    let saved = match &form.editing {
        Some(id) => backend.update_dish(id, &draft).await,
        None => backend.create_dish(&draft).await,
    };
    match saved {
        Ok(dish) => tracing::info!(id = %dish.id, name = %dish.name, "Dish saved"),
        Err(e) => {
            tracing::error!("Error saving dish: {e}");
            return Err(e.into());
        }
    }
    Ok(load_dishes(backend).await)
}

pub async fn delete_dish<B: Backend>(backend: &B, id: &DishId) -> Result<Vec<Dish>, AdminError> {
    if let Err(e) = backend.delete_dish(id).await {
        tracing::error!("Error deleting dish {id}: {e}");
        return Err(e.into());
    }
    tracing::info!(%id, "Dish deleted");
    Ok(load_dishes(backend).await)
}

/// Move an order to `status`, then re-read the order list. Any status may
/// follow any other.
pub async fn set_order_status<B: Backend>(
    backend: &B,
    id: &OrderId,
    status: OrderStatus,
) -> Result<Vec<Order>, AdminError> {
    if let Err(e) = backend.update_order_status(id, status).await {
        tracing::error!("Error updating order status: {e}");
        return Err(e.into());
    }
    tracing::info!(%id, %status, "Order status updated");
    Ok(load_orders(backend).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_bites_common::order::{CustomerInfo, OrderDraft};
    use campus_bites_common::price::Price;

    use crate::error::ClientError;
    use crate::mock::MockBackend;

    fn samosa() -> Dish {
        Dish {
            id: "d1".into(),
            name: "Samosa".into(),
            description: "Two pieces".into(),
            price: Price::from_cents(250),
            image: "https://img.example/samosa.jpg".into(),
            category: "Snacks".into(),
        }
    }

    fn filled_form() -> DishForm {
        DishForm {
            editing: None,
            name: "Chai".into(),
            description: "Masala tea".into(),
            price: "1.75".into(),
            category: "Drinks".into(),
            image: "https://img.example/chai.jpg".into(),
        }
    }

    #[test]
    fn edit_prefills_and_reset_clears() {
        let mut form = DishForm::edit(&samosa());
        assert!(form.is_editing());
        assert_eq!(form.price, "2.50");
        assert_eq!(form.to_draft().unwrap(), samosa().draft());

        form.reset();
        assert_eq!(form, DishForm::new());
    }

    #[test]
    fn form_validation() {
        let mut form = filled_form();
        form.category = "  ".into();
        assert_eq!(form.to_draft(), Err(DishFormError::Missing("category")));

        let mut form = filled_form();
        form.price = "cheap".into();
        assert!(matches!(form.to_draft(), Err(DishFormError::Price(_))));
    }

    #[tokio::test]
    async fn create_then_refresh() {
        let backend = MockBackend::with_dishes(vec![samosa()]);

        let dishes = save_dish(&backend, &filled_form()).await.unwrap();

        assert_eq!(backend.calls(), vec!["create_dish", "list_dishes"]);
        assert_eq!(dishes.len(), 2);
        assert_eq!(dishes[1].name, "Chai");
        assert_eq!(dishes[1].price.cents(), 175);
    }

    #[tokio::test]
    async fn update_existing_dish() {
        let backend = MockBackend::with_dishes(vec![samosa()]);
        let mut form = DishForm::edit(&samosa());
        form.price = "3".into();

        let dishes = save_dish(&backend, &form).await.unwrap();

        assert_eq!(backend.calls(), vec!["update_dish", "list_dishes"]);
        assert_eq!(dishes, vec![Dish { price: Price::from_cents(300), ..samosa() }]);
    }

    #[tokio::test]
    async fn invalid_form_is_not_sent() {
        let backend = MockBackend::new();
        let err = save_dish(&backend, &DishForm::new()).await.unwrap_err();
        assert_eq!(err, AdminError::Form(DishFormError::Missing("name")));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn failed_delete_skips_refresh() {
        let backend = MockBackend::with_dishes(vec![samosa()]);
        backend.fail_with(ClientError::Transport("connection refused".into()));

        let err = delete_dish(&backend, &"d1".into()).await.unwrap_err();

        assert!(matches!(err, AdminError::Client(ClientError::Transport(_))));
        assert_eq!(backend.calls(), vec!["delete_dish"]);
        backend.recover();
        assert_eq!(backend.dishes().len(), 1);
    }

    #[tokio::test]
    async fn delete_then_refresh() {
        let backend = MockBackend::with_dishes(vec![samosa()]);
        let dishes = delete_dish(&backend, &"d1".into()).await.unwrap();
        assert!(dishes.is_empty());
        assert_eq!(backend.calls(), vec!["delete_dish", "list_dishes"]);
    }

    #[tokio::test]
    async fn any_status_transition_is_allowed() {
        let backend = MockBackend::new();
        let draft = OrderDraft {
            items: Vec::new(),
            total_price: Price::ZERO,
            customer_info: CustomerInfo::new("Ada", "ada@uni.edu"),
        };
        let id = backend.create_order(&draft).await.unwrap();

        let orders = set_order_status(&backend, &id, OrderStatus::Delivered).await.unwrap();
        assert_eq!(orders[0].status, OrderStatus::Delivered);

        let orders = set_order_status(&backend, &id, OrderStatus::Pending).await.unwrap();
        assert_eq!(orders[0].status, OrderStatus::Pending);
        assert_eq!(
            backend.calls(),
            vec![
                "create_order",
                "update_order_status",
                "list_orders",
                "update_order_status",
                "list_orders"
            ]
        );
    }

    #[tokio::test]
    async fn unreachable_backend_yields_empty_lists() {
        let backend = MockBackend::with_dishes(vec![samosa()]);
        backend.fail_with(ClientError::Transport("offline".into()));
        assert!(load_dishes(&backend).await.is_empty());
        assert!(load_orders(&backend).await.is_empty());
    }
}
