//! Database models backing the report service repository.

pub mod config;
pub mod customer;
pub mod order;
pub mod report;
