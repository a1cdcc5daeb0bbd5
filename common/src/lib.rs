pub mod api;
pub mod cart;
pub mod dish;
pub mod menu;
pub mod order;
pub mod price;
pub mod storage;
