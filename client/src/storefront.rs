use campus_bites_common::cart::{Cart, CartTotals, PersistentCart};
use campus_bites_common::dish::{Dish, DishId, DishSnapshot};
use campus_bites_common::menu::{self, CategoryFilter};
use campus_bites_common::order::{CustomerInfo, OrderId};
use campus_bites_common::storage::KeyValueStore;

use crate::api::Backend;
use crate::checkout;
use crate::error::CheckoutError;

/// Everything the customer-facing page holds: the fetched menu, the chosen
/// category and the persisted cart.
#[derive(Debug)]
pub struct Storefront<S> {
    dishes: Vec<Dish>,
    categories: Vec<String>,
    selection: CategoryFilter,
    loading: bool,
    cart: PersistentCart<S>,
    last_order: Option<OrderId>,
}

impl<S: KeyValueStore> Storefront<S> {
    /// Start with the saved cart and no menu yet.
    pub fn new(store: S) -> Self {
        Self {
            dishes: Vec::new(),
            categories: menu::categories(&[]),
            selection: CategoryFilter::All,
            loading: true,
            cart: PersistentCart::restore(store),
            last_order: None,
        }
    }

    /// Re-read the menu. A failed fetch leaves an empty menu behind.
    pub async fn refresh<B: Backend>(&mut self, backend: &B) {
        self.loading = true;
        let dishes = backend.list_dishes().await.unwrap_or_else(|e| {
            tracing::error!("Error fetching dishes: {e}");
            Vec::new()
        });
        self.set_menu(dishes);
    }

    pub fn set_menu(&mut self, dishes: Vec<Dish>) {
        self.categories = menu::categories(&dishes);
        if !self.categories.iter().any(|c| c == self.selection.label()) {
            self.selection = CategoryFilter::All;
        }
        self.dishes = dishes;
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn dish(&self, id: &DishId) -> Option<&Dish> {
        self.dishes.iter().find(|d| &d.id == id)
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn selection(&self) -> &CategoryFilter {
        &self.selection
    }

    pub fn select_category(&mut self, label: &str) {
        self.selection = CategoryFilter::from_label(label);
    }

    pub fn visible_dishes(&self) -> Vec<&Dish> {
        menu::filter(&self.dishes, &self.selection)
    }

    pub fn cart(&self) -> &Cart {
        self.cart.cart()
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    /// Add one of a menu dish. Returns `false` if the id is not on the menu.
    pub fn add_to_cart(&mut self, id: &DishId) -> bool {
        let Some(dish) = self.dish(id).map(DishSnapshot::from) else {
            return false;
        };
        self.cart.add(dish);
        true
    }

    pub fn remove_from_cart(&mut self, id: &DishId) -> bool {
        self.cart.remove(id)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    pub async fn checkout<B: Backend>(
        &mut self,
        backend: &B,
        customer: CustomerInfo,
    ) -> Result<OrderId, CheckoutError> {
        let order_id = checkout::submit_order(backend, &mut self.cart, customer).await?;
        self.last_order = Some(order_id.clone());
        Ok(order_id)
    }

    pub fn last_order(&self) -> Option<&OrderId> {
        self.last_order.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_bites_common::price::Price;
    use campus_bites_common::storage::MemoryStore;

    use crate::error::ClientError;
    use crate::mock::MockBackend;

    fn dish(id: &str, category: &str, cents: u64) -> Dish {
        Dish {
            id: id.into(),
            name: id.to_uppercase(),
            description: String::new(),
            price: Price::from_cents(cents),
            image: String::new(),
            category: category.into(),
        }
    }

    fn backend() -> MockBackend {
        MockBackend::with_dishes(vec![
            dish("a", "Lunch", 599),
            dish("b", "Drinks", 499),
            dish("c", "Lunch", 350),
        ])
    }

    #[tokio::test]
    async fn refresh_loads_menu_and_categories() {
        let mut shop = Storefront::new(MemoryStore::new());
        assert!(shop.is_loading());

        shop.refresh(&backend()).await;

        assert!(!shop.is_loading());
        assert_eq!(shop.categories(), ["All", "Lunch", "Drinks"]);
        shop.select_category("Lunch");
        let ids: Vec<_> = shop.visible_dishes().iter().map(|d| d.id.0.clone()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[tokio::test]
    async fn failed_refresh_shows_empty_menu() {
        let backend = backend();
        backend.fail_with(ClientError::Transport("offline".into()));
        let mut shop = Storefront::new(MemoryStore::new());

        shop.refresh(&backend).await;

        assert!(!shop.is_loading());
        assert!(shop.dishes().is_empty());
        assert_eq!(shop.categories(), ["All"]);
    }

    #[tokio::test]
    async fn vanished_category_falls_back_to_all() {
        let mut shop = Storefront::new(MemoryStore::new());
        shop.refresh(&backend()).await;
        shop.select_category("Drinks");

        shop.set_menu(vec![dish("a", "Lunch", 599)]);

        assert_eq!(shop.selection(), &CategoryFilter::All);
        assert_eq!(shop.visible_dishes().len(), 1);
    }

    #[tokio::test]
    async fn cart_survives_a_reload() {
        let backend = backend();
        let mut shop = Storefront::new(MemoryStore::new());
        shop.refresh(&backend).await;
        assert!(shop.add_to_cart(&"a".into()));
        assert!(shop.add_to_cart(&"a".into()));
        assert!(!shop.add_to_cart(&"nope".into()));

        let store = shop.cart.into_store();
        let reloaded = Storefront::new(store);
        assert_eq!(reloaded.totals().items, 2);
        assert_eq!(reloaded.totals().price.to_string(), "$11.98");
    }

    #[tokio::test]
    async fn checkout_records_order_and_empties_cart() {
        let backend = backend();
        let mut shop = Storefront::new(MemoryStore::new());
        shop.refresh(&backend).await;
        shop.add_to_cart(&"b".into());

        let id = shop
            .checkout(&backend, CustomerInfo::new("Grace", "grace@uni.edu"))
            .await
            .unwrap();

        assert_eq!(shop.last_order(), Some(&id));
        assert!(shop.cart().is_empty());
    }
}
