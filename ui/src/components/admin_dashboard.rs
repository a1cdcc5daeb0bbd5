use dioxus::prelude::*;

use campus_bites_client::admin::DishForm;
use campus_bites_common::order::OrderStatus;

use super::api_actions::{use_api_action, ApiAction};
use super::shared_state::use_shared_state;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Tab {
    Dishes,
    Orders,
}

#[component]
pub fn AdminDashboard() -> Element {
    let shared_state = use_shared_state();
    let api = use_api_action();
    let mut active_tab = use_signal(|| Tab::Dishes);

    // Reload whichever list the selected tab shows.
    use_effect(move || match active_tab() {
        Tab::Dishes => api.send(ApiAction::LoadMenu),
        Tab::Orders => api.send(ApiAction::LoadOrders),
    });

    let last_error = shared_state.read().last_error.clone();
    let tab = active_tab();
    let dishes_class = if tab == Tab::Dishes { "tab active" } else { "tab" };
    let orders_class = if tab == Tab::Orders { "tab active" } else { "tab" };

    rsx! {
        div { class: "admin-dashboard",
            div { class: "admin-header",
                h1 { "Admin Dashboard" }
                div { class: "admin-tabs",
                    button { class: "{dishes_class}",
                        onclick: move |_| active_tab.set(Tab::Dishes),
                        "Manage Menu"
                    }
                    button { class: "{orders_class}",
                        onclick: move |_| active_tab.set(Tab::Orders),
                        "Orders"
                    }
                }
            }

            if let Some(err) = last_error {
                div { class: "error-banner", "{err}" }
            }

            div { class: "admin-content",
                if tab == Tab::Dishes {
                    DishManager {}
                } else {
                    OrderManager {}
                }
            }
        }
    }
}

#[component]
fn DishManager() -> Element {
    let mut shared_state = use_shared_state();
    let api = use_api_action();
    let mut form = use_signal(DishForm::new);

    // Only a save the backend accepted clears what was typed.
    let saved = use_memo(move || shared_state.read().dishes_saved);
    use_effect(move || {
        if saved() > 0 {
            form.write().reset();
        }
    });

    let state = shared_state.read();
    let dishes = state.dishes.clone();
    let loading = state.dishes_loading;
    drop(state);

    let current = form.read().clone();
    let editing = current.is_editing();

    let save = move |_| {
        let current = form.read().clone();
        if let Err(e) = current.to_draft() {
            shared_state.write().last_error = Some(e.to_string());
            return;
        }
        api.send(ApiAction::SaveDish(current));
    };

    rsx! {
        div { class: "dishes-management",
            h2 {
                if editing { "Edit Dish" } else { "Add New Dish" }
            }
            div { class: "dish-form",
                div { class: "form-group",
                    label { "Dish Name" }
                    input {
                        r#type: "text",
                        value: "{current.name}",
                        oninput: move |evt| form.write().name = evt.value(),
                    }
                }
                div { class: "form-group",
                    label { "Description" }
                    textarea {
                        value: "{current.description}",
                        oninput: move |evt| form.write().description = evt.value(),
                    }
                }
                div { class: "form-row",
                    div { class: "form-group",
                        label { "Price" }
                        input {
                            r#type: "number",
                            step: "0.01",
                            value: "{current.price}",
                            oninput: move |evt| form.write().price = evt.value(),
                        }
                    }
                    div { class: "form-group",
                        label { "Category" }
                        input {
                            r#type: "text",
                            value: "{current.category}",
                            oninput: move |evt| form.write().category = evt.value(),
                        }
                    }
                }
                div { class: "form-group",
                    label { "Image URL" }
                    input {
                        r#type: "url",
                        value: "{current.image}",
                        oninput: move |evt| form.write().image = evt.value(),
                    }
                }
                div { class: "form-actions",
                    button { class: "save-button",
                        onclick: save,
                        if editing { "Update Dish" } else { "Add Dish" }
                    }
                    if editing {
                        button { class: "cancel-button",
                            onclick: move |_| form.write().reset(),
                            "Cancel"
                        }
                    }
                }
            }

            h2 { "Current Menu" }
            if loading {
                div { class: "loading", "Loading dishes..." }
            } else {
                table { class: "dishes-table",
                    thead {
                        tr {
                            th { "Image" }
                            th { "Name" }
                            th { "Category" }
                            th { "Price" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        {dishes.into_iter().map(|dish| {
                            let price = dish.price.to_string();
                            let id = dish.id.clone();
                            let name = dish.name.clone();
                            let target = dish.clone();
                            rsx! {
                                tr { key: "{dish.id}",
                                    td {
                                        img { class: "dish-thumbnail", src: "{dish.image}", alt: "{dish.name}" }
                                    }
                                    td { "{dish.name}" }
                                    td { "{dish.category}" }
                                    td { "{price}" }
                                    td {
                                        button { class: "edit-button",
                                            onclick: move |_| form.set(DishForm::edit(&target)),
                                            "Edit"
                                        }
                                        button { class: "delete-button",
                                            onclick: move |_| {
                                                if confirm(&format!("Delete {name}?")) {
                                                    api.send(ApiAction::DeleteDish(id.clone()));
                                                }
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        })}
                    }
                }
            }
        }
    }
}

#[component]
fn OrderManager() -> Element {
    let shared_state = use_shared_state();
    let api = use_api_action();

    let state = shared_state.read();
    let orders = state.orders.clone();
    let loading = state.orders_loading;
    drop(state);

    if loading {
        return rsx! { div { class: "loading", "Loading orders..." } };
    }
    if orders.is_empty() {
        return rsx! { p { class: "empty-state", "No orders yet." } };
    }

    rsx! {
        div { class: "orders-management",
            h2 { "Customer Orders" }
            table { class: "orders-table",
                thead {
                    tr {
                        th { "Order ID" }
                        th { "Customer" }
                        th { "Items" }
                        th { "Total" }
                        th { "Date" }
                        th { "Status" }
                        th { "Actions" }
                    }
                }
                tbody {
                    {orders.iter().map(|order| {
                        let id = order.id.clone();
                        let short_id = order.id.short();
                        let total = order.total_price.to_string();
                        let placed = order.placed_at().unwrap_or_default();
                        let current = order.status;
                        let badge = format!("status-badge {}", current.as_str());
                        let status_label = current.label();
                        rsx! {
                            tr { key: "{order.id}",
                                td { "{short_id}" }
                                td {
                                    div { "{order.customer_info.name}" }
                                    div { class: "customer-email", "{order.customer_info.email}" }
                                    if !order.customer_info.student_id.is_empty() {
                                        div { class: "student-id", "ID: {order.customer_info.student_id}" }
                                    }
                                }
                                td {
                                    {order.items.iter().map(|item| rsx! {
                                        div { class: "order-item", "{item.quantity}x {item.name}" }
                                    })}
                                }
                                td { "{total}" }
                                td { "{placed}" }
                                td {
                                    span { class: "{badge}", "{status_label}" }
                                }
                                td {
                                    select { class: "status-dropdown",
                                        onchange: move |evt| {
                                            match evt.value().parse::<OrderStatus>() {
                                                Ok(status) => api.send(ApiAction::SetOrderStatus {
                                                    id: id.clone(),
                                                    status,
                                                }),
                                                Err(e) => tracing::warn!("{e}"),
                                            }
                                        },
                                        {OrderStatus::all().iter().map(|status| {
                                            let value = status.as_str();
                                            let label = status.label();
                                            rsx! {
                                                option {
                                                    key: "{value}",
                                                    value: "{value}",
                                                    selected: *status == current,
                                                    "{label}"
                                                }
                                            }
                                        })}
                                    }
                                }
                            }
                        }
                    })}
                }
            }
        }
    }
}

#[cfg(target_family = "wasm")]
fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(not(target_family = "wasm"))]
fn confirm(_message: &str) -> bool {
    true
}
