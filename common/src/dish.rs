use std::fmt;

use serde::{Deserialize, Serialize};

use crate::price::Price;

/// Backend-assigned dish identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DishId(pub String);

impl fmt::Display for DishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DishId {
    fn from(id: &str) -> Self {
        DishId(id.to_string())
    }
}

/// A menu item as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    #[serde(rename = "_id")]
    pub id: DishId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Price,
    /// Image URI.
    #[serde(default)]
    pub image: String,
    pub category: String,
}

impl Dish {
    /// The editable fields of this dish, as sent back on update.
    pub fn draft(&self) -> DishDraft {
        DishDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            image: self.image.clone(),
            category: self.category.clone(),
        }
    }
}

/// Body for creating or updating a dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishDraft {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image: String,
    pub category: String,
}

impl DishDraft {
    pub fn into_dish(self, id: DishId) -> Dish {
        Dish {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            image: self.image,
            category: self.category,
        }
    }
}

/// The part of a dish captured when it goes into the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishSnapshot {
    #[serde(rename = "_id")]
    pub id: DishId,
    pub name: String,
    pub price: Price,
}

impl From<&Dish> for DishSnapshot {
    fn from(dish: &Dish) -> Self {
        DishSnapshot {
            id: dish.id.clone(),
            name: dish.name.clone(),
            price: dish.price,
        }
    }
}

impl From<Dish> for DishSnapshot {
    fn from(dish: Dish) -> Self {
        DishSnapshot {
            id: dish.id,
            name: dish.name,
            price: dish.price,
        }
    }
}
