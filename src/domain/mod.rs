//! Domain aggregates exposed by the report service layer.

pub mod customer;
pub mod order;
pub mod report;
pub mod types;
