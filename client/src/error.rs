use thiserror::Error;

use campus_bites_common::order::CustomerError;

use crate::admin::DishFormError;

/// Failures talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("could not reach backend: {0}")]
    Transport(String),
    #[error("backend returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response from backend: {0}")]
    Decode(String),
    #[error("backend rejected the request: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("your cart is empty")]
    EmptyCart,
    #[error(transparent)]
    Customer(#[from] CustomerError),
    #[error("order could not be placed: {0}")]
    Client(#[from] ClientError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    #[error(transparent)]
    Form(#[from] DishFormError),
    #[error(transparent)]
    Client(#[from] ClientError),
}
