//! The shopping cart: an ordered list of line items, at most one per dish.
//!
//! [`Cart`] is the pure reducer. [`PersistentCart`] pairs it with a
//! [`KeyValueStore`] and writes the whole line list back after every change,
//! so a reload picks up where the customer left off.

use serde::{Deserialize, Serialize};

use crate::dish::{DishId, DishSnapshot};
use crate::price::Price;
use crate::storage::KeyValueStore;

/// Key under which the serialized cart is kept.
pub const CART_STORAGE_KEY: &str = "cart";

/// One dish in the cart. `quantity` is never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(rename = "_id")]
    pub dish_id: DishId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> Price {
        self.price.times(self.quantity)
    }

    pub fn snapshot(&self) -> DishSnapshot {
        DishSnapshot {
            id: self.dish_id.clone(),
            name: self.name.clone(),
            price: self.price,
        }
    }
}

impl From<&CartLine> for DishSnapshot {
    fn from(line: &CartLine) -> Self {
        line.snapshot()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartTotals {
    pub items: u32,
    pub price: Price,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from arbitrary lines, restoring the invariants:
    /// zero-quantity lines are dropped and repeated dish ids are folded into
    /// the first occurrence.
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = Cart::new();
        for line in lines {
            if line.quantity == 0 {
                continue;
            }
            match cart.line_mut(&line.dish_id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(line.quantity)
                }
                None => cart.lines.push(line),
            }
        }
        cart
    }

    /// Decode a serialized cart.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        let lines: Vec<CartLine> = serde_json::from_str(raw)?;
        Ok(Cart::from_lines(lines))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.lines)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn quantity_of(&self, id: &DishId) -> u32 {
        self.lines
            .iter()
            .find(|l| &l.dish_id == id)
            .map_or(0, |l| l.quantity)
    }

    fn line_mut(&mut self, id: &DishId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| &l.dish_id == id)
    }

    /// Add one unit of a dish. An existing line keeps the name and price it
    /// was first added with.
    pub fn add(&mut self, dish: impl Into<DishSnapshot>) {
        let dish = dish.into();
        if let Some(line) = self.line_mut(&dish.id) {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }
        self.lines.push(CartLine {
            dish_id: dish.id,
            name: dish.name,
            price: dish.price,
            quantity: 1,
        });
    }

    /// Take one unit of a dish out. Returns `false` (and changes nothing)
    /// when the dish is not in the cart.
    pub fn remove(&mut self, id: &DishId) -> bool {
        let Some(pos) = self.lines.iter().position(|l| &l.dish_id == id) else {
            return false;
        };
        if self.lines[pos].quantity > 1 {
            self.lines[pos].quantity -= 1;
        } else {
            self.lines.remove(pos);
        }
        true
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals {
            items: self.total_items(),
            price: self.total_price(),
        }
    }

    /// Sum of all quantities, saturating at `u32::MAX`.
    pub fn total_items(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |total, l| total.saturating_add(l.quantity))
    }

    pub fn total_price(&self) -> Price {
        self.lines.iter().map(CartLine::subtotal).sum()
    }
}

/// A cart bound to its durable slot.
///
/// Storage failures are logged and otherwise ignored: the in-memory cart is
/// the source of truth for the running session.
#[derive(Debug)]
pub struct PersistentCart<S> {
    cart: Cart,
    store: S,
}

impl<S: KeyValueStore> PersistentCart<S> {
    /// Load whatever the store holds. Missing or unreadable data yields an
    /// empty cart.
    pub fn restore(store: S) -> Self {
        let cart = match store.get(CART_STORAGE_KEY) {
            Ok(Some(raw)) => Cart::parse(&raw).unwrap_or_else(|e| {
                tracing::warn!("Discarding malformed saved cart: {e}");
                Cart::new()
            }),
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!("Could not read saved cart: {e}");
                Cart::new()
            }
        };
        tracing::debug!(lines = cart.lines().len(), "Cart restored");
        Self { cart, store }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    pub fn add(&mut self, dish: impl Into<DishSnapshot>) {
        self.cart.add(dish);
        self.persist();
    }

    pub fn remove(&mut self, id: &DishId) -> bool {
        let changed = self.cart.remove(id);
        if changed {
            self.persist();
        }
        changed
    }

    /// Empty the cart and drop the saved copy.
    pub fn clear(&mut self) {
        self.cart.clear();
        if let Err(e) = self.store.remove(CART_STORAGE_KEY) {
            tracing::warn!("Could not remove saved cart: {e}");
        }
    }

    fn persist(&mut self) {
        let raw = match self.cart.to_json() {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Could not serialize cart: {e}");
                return;
            }
        };
        if let Err(e) = self.store.set(CART_STORAGE_KEY, &raw) {
            tracing::warn!("Could not save cart: {e}");
        }
    }
}
