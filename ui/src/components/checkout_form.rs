use dioxus::prelude::*;

use campus_bites_common::order::CustomerInfo;

use super::api_actions::{use_api_action, ApiAction};
use super::shared_state::{use_cart, use_shared_state};

/// Checkout modal: order summary, customer details and, once the backend
/// accepts the order, the confirmation panel.
#[component]
pub fn CheckoutForm(on_close: EventHandler<()>) -> Element {
    let cart = use_cart();
    let mut shared_state = use_shared_state();
    let api = use_api_action();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut student_id = use_signal(String::new);
    let mut notes = use_signal(String::new);

    let can_submit = use_memo(move || {
        !name.read().trim().is_empty() && !email.read().trim().is_empty()
    });

    let mut close = move || {
        let mut state = shared_state.write();
        state.placed_order = None;
        state.checkout_error = None;
        drop(state);
        on_close.call(());
    };

    let state = shared_state.read();
    let placed = state.placed_order.clone();
    let error = state.checkout_error.clone();
    drop(state);

    if let Some(order_id) = placed {
        return rsx! {
            div { class: "modal-overlay",
                div { class: "modal",
                    div { class: "order-success",
                        h3 { "Order Placed Successfully!" }
                        p { "Your order ID is: " strong { "{order_id}" } }
                        p { "We'll notify you when your order is ready." }
                        button { class: "close-button",
                            onclick: move |_| close(),
                            "Close"
                        }
                    }
                }
            }
        };
    }

    let cart_state = cart.read();
    let lines = cart_state.cart().lines().to_vec();
    let total = cart_state.totals().price;
    drop(cart_state);

    let submit = move |_| {
        if !can_submit() {
            return;
        }
        shared_state.write().checkout_error = None;
        api.send(ApiAction::PlaceOrder(CustomerInfo {
            name: name(),
            email: email(),
            student_id: student_id(),
            notes: notes(),
        }));
    };

    rsx! {
        div { class: "modal-overlay",
            div { class: "modal",
                div { class: "modal-header",
                    h3 { "Checkout" }
                    button { class: "close-modal",
                        onclick: move |_| close(),
                        "x"
                    }
                }

                div { class: "order-summary",
                    h4 { "Order Summary" }
                    {lines.iter().map(|line| {
                        let subtotal = line.subtotal();
                        rsx! {
                            div { class: "summary-item", key: "{line.dish_id}",
                                span { "{line.name} x {line.quantity}" }
                                span { "{subtotal}" }
                            }
                        }
                    })}
                    div { class: "summary-total",
                        span { "Total:" }
                        span { "{total}" }
                    }
                }

                div { class: "checkout-form",
                    div { class: "form-group",
                        label { "Name" }
                        input {
                            r#type: "text",
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    div { class: "form-group",
                        label { "Email" }
                        input {
                            r#type: "email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    div { class: "form-group",
                        label { "Student ID" }
                        input {
                            r#type: "text",
                            value: "{student_id}",
                            oninput: move |evt| student_id.set(evt.value()),
                        }
                    }
                    div { class: "form-group",
                        label { "Special Instructions" }
                        textarea {
                            value: "{notes}",
                            oninput: move |evt| notes.set(evt.value()),
                        }
                    }

                    if let Some(err) = error {
                        p { class: "error-message", "{err}" }
                    }

                    button { class: "place-order-button",
                        disabled: !can_submit(),
                        onclick: submit,
                        "Place Order"
                    }
                }
            }
        }
    }
}
