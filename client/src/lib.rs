//! Client side of the Campus Bites storefront: the backend contract, an HTTP
//! implementation of it, and the storefront, checkout and admin flows built
//! on top.

pub mod admin;
pub mod api;
pub mod checkout;
pub mod config;
pub mod error;
#[cfg(feature = "http")]
pub mod http;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod storefront;

pub use campus_bites_common as common;
