use dioxus::prelude::*;

use super::shared_state::use_cart;

/// Slide-out cart: one row per dish with -/+ controls and the running total.
#[component]
pub fn CartPanel(open: bool, on_close: EventHandler<()>, on_checkout: EventHandler<()>) -> Element {
    let mut cart = use_cart();

    let state = cart.read();
    let lines = state.cart().lines().to_vec();
    let total = state.totals().price;
    drop(state);

    let class = if open { "cart-sidebar open" } else { "cart-sidebar" };

    rsx! {
        div { class: "{class}",
            div { class: "cart-header",
                h3 { "Your Order" }
                button { class: "close-cart",
                    onclick: move |_| on_close.call(()),
                    "x"
                }
            }

            if lines.is_empty() {
                div { class: "empty-cart",
                    p { "Your cart is empty" }
                }
            } else {
                div { class: "cart-items",
                    {lines.into_iter().map(|line| {
                        let id = line.dish_id.clone();
                        let snapshot = line.snapshot();
                        let price = line.price.to_string();
                        rsx! {
                            div { class: "cart-item", key: "{line.dish_id}",
                                div { class: "item-info",
                                    h4 { "{line.name}" }
                                    p { "{price}" }
                                }
                                div { class: "item-quantity",
                                    button {
                                        onclick: move |_| { cart.write().remove(&id); },
                                        "-"
                                    }
                                    span { "{line.quantity}" }
                                    button {
                                        onclick: move |_| cart.write().add(snapshot.clone()),
                                        "+"
                                    }
                                }
                            }
                        }
                    })}
                }
                div { class: "cart-footer",
                    div { class: "cart-total",
                        span { "Total:" }
                        span { "{total}" }
                    }
                    button { class: "checkout-button",
                        onclick: move |_| on_checkout.call(()),
                        "Proceed to Checkout"
                    }
                }
            }
        }
    }
}
