pub mod admin_dashboard;
pub mod api_actions;
pub mod app;
pub mod browser_storage;
pub mod cart_panel;
pub mod checkout_form;
pub mod fetch_backend;
pub mod shared_state;
pub mod storefront_view;
