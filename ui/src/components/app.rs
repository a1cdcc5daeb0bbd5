use dioxus::prelude::*;

use campus_bites_common::cart::PersistentCart;

use super::admin_dashboard::AdminDashboard;
use super::api_actions::use_api_coroutine;
use super::browser_storage::LocalStorage;
use super::shared_state::SharedState;
use super::storefront_view::StorefrontView;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/admin")]
    Admin {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(SharedState::new()));
    use_context_provider(|| Signal::new(PersistentCart::restore(LocalStorage)));
    use_api_coroutine();

    rsx! { Router::<Route> {} }
}

#[component]
fn AppLayout() -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "campus-bites",
            nav { class: "main-nav",
                div { class: "nav-container",
                    div { class: "nav-logo",
                        onclick: move |_| { nav.push(Route::Home {}); },
                        "Campus Bites"
                    }
                    div { class: "nav-links",
                        button { class: "nav-link",
                            onclick: move |_| { nav.push(Route::Home {}); },
                            "Home"
                        }
                        button { class: "nav-link admin-link",
                            onclick: move |_| { nav.push(Route::Admin {}); },
                            "Admin"
                        }
                    }
                }
            }
            main {
                Outlet::<Route> {}
            }
        }
    }
}

/// Route component: the customer storefront.
#[component]
fn Home() -> Element {
    rsx! { StorefrontView {} }
}

/// Route component: menu and order management.
#[component]
fn Admin() -> Element {
    rsx! { AdminDashboard {} }
}
