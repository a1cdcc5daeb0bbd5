use crate::dish::Dish;

/// Label of the catch-all category button.
pub const ALL_CATEGORIES: &str = "All";

/// Which slice of the menu is on display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Interpret a category button label; `"All"` is the sentinel.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }

    pub fn matches(&self, dish: &Dish) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => &dish.category == category,
        }
    }
}

/// `"All"` followed by each distinct category in the order first seen.
pub fn categories(dishes: &[Dish]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for dish in dishes {
        if !out.iter().any(|c| c == &dish.category) {
            out.push(dish.category.clone());
        }
    }
    out
}

pub fn filter<'a>(dishes: &'a [Dish], selection: &CategoryFilter) -> Vec<&'a Dish> {
    dishes.iter().filter(|d| selection.matches(d)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Price;

    fn dish(id: &str, category: &str) -> Dish {
        Dish {
            id: id.into(),
            name: id.to_uppercase(),
            description: String::new(),
            price: Price::from_cents(100),
            image: String::new(),
            category: category.into(),
        }
    }

    fn menu() -> Vec<Dish> {
        vec![
            dish("a", "Breakfast"),
            dish("b", "Lunch"),
            dish("c", "Breakfast"),
            dish("d", "Drinks"),
        ]
    }

    #[test]
    fn categories_are_distinct_and_prefixed_with_all() {
        assert_eq!(categories(&menu()), vec!["All", "Breakfast", "Lunch", "Drinks"]);
        assert_eq!(categories(&[]), vec!["All"]);
    }

    #[test]
    fn filter_keeps_menu_order() {
        let menu = menu();
        let ids: Vec<_> = filter(&menu, &CategoryFilter::from_label("Breakfast"))
            .iter()
            .map(|d| d.id.0.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn all_returns_everything() {
        let menu = menu();
        assert_eq!(filter(&menu, &CategoryFilter::from_label("All")).len(), 4);
        assert!(filter(&menu, &CategoryFilter::Only("Dessert".into())).is_empty());
    }

    #[test]
    fn label_round_trips() {
        assert_eq!(CategoryFilter::from_label("Lunch").label(), "Lunch");
        assert_eq!(CategoryFilter::All.label(), ALL_CATEGORIES);
    }
}
