use dioxus::prelude::*;

use campus_bites_common::dish::Dish;
use campus_bites_common::menu::{self, CategoryFilter};

use super::api_actions::{use_api_action, ApiAction};
use super::cart_panel::CartPanel;
use super::checkout_form::CheckoutForm;
use super::shared_state::{use_cart, use_shared_state};

#[component]
pub fn StorefrontView() -> Element {
    let shared_state = use_shared_state();
    let cart = use_cart();
    let api = use_api_action();
    let mut filter = use_signal(|| CategoryFilter::All);
    let mut cart_open = use_signal(|| false);
    let mut checkout_open = use_signal(|| false);

    use_effect(move || api.send(ApiAction::LoadMenu));

    let state = shared_state.read();
    let loading = state.dishes_loading;
    let categories = menu::categories(&state.dishes);
    // A category that vanished after a reload shows everything.
    let active = if categories.iter().any(|c| *c == filter.read().label()) {
        filter.read().clone()
    } else {
        CategoryFilter::All
    };
    let visible: Vec<Dish> = menu::filter(&state.dishes, &active)
        .into_iter()
        .cloned()
        .collect();
    drop(state);

    let item_count = cart.read().totals().items;
    let active_label = active.label().to_string();

    rsx! {
        div { class: "storefront",
            header { class: "header",
                div { class: "logo",
                    h1 { "Campus Bites" }
                    p { "Your College Canteen" }
                }
                div { class: "cart-icon",
                    onclick: move |_| cart_open.set(!cart_open()),
                    span { "Cart" }
                    if item_count > 0 {
                        span { class: "cart-count", "{item_count}" }
                    }
                }
            }

            section { class: "hero",
                h2 { "Delicious Food, Delivered Fast" }
                p { "Order from your college canteen and skip the queue" }
            }

            section { class: "menu-section",
                h2 { "Our Menu" }
                div { class: "category-filter",
                    {categories.into_iter().map(|category| {
                        let class = if category == active_label {
                            "category-btn active"
                        } else {
                            "category-btn"
                        };
                        let next = CategoryFilter::from_label(&category);
                        rsx! {
                            button {
                                key: "{category}",
                                class: "{class}",
                                onclick: move |_| filter.set(next.clone()),
                                "{category}"
                            }
                        }
                    })}
                }

                if loading {
                    div { class: "loading", "Loading menu..." }
                } else if visible.is_empty() {
                    p { class: "empty-state", "No dishes available right now." }
                } else {
                    div { class: "dishes-grid",
                        {visible.into_iter().map(|dish| rsx! {
                            DishCard { key: "{dish.id}", dish }
                        })}
                    }
                }
            }

            CartPanel {
                open: cart_open(),
                on_close: move |_| cart_open.set(false),
                on_checkout: move |_| {
                    cart_open.set(false);
                    checkout_open.set(true);
                },
            }

            if checkout_open() {
                CheckoutForm { on_close: move |_| checkout_open.set(false) }
            }

            footer { class: "footer",
                p { "Campus Bites - Your College Canteen" }
            }
        }
    }
}

#[component]
fn DishCard(dish: Dish) -> Element {
    let mut cart = use_cart();
    let price = dish.price.to_string();
    let for_cart = dish.clone();

    rsx! {
        div { class: "dish-card",
            div { class: "dish-image",
                style: "background-image: url({dish.image})",
            }
            div { class: "dish-info",
                h3 { "{dish.name}" }
                p { class: "dish-category", "{dish.category}" }
                p { class: "dish-description", "{dish.description}" }
                div { class: "dish-footer",
                    span { class: "dish-price", "{price}" }
                    button { class: "add-to-cart",
                        onclick: move |_| cart.write().add(&for_cart),
                        "Add to Cart"
                    }
                }
            }
        }
    }
}
