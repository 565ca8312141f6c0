//! HTTP handlers for records and the store-free demo endpoints.

pub mod demo;
pub mod records;
