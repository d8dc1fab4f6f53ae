//! Assistant API
//!
//! Wire types and HTTP calls for `/api/query` and `/api/add`.

pub mod client;
pub mod dto;

pub use client::{add_order, query};
pub use dto::{AddOrderResponse, NewOrder};
