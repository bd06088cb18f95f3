pub mod config;
pub mod customers;
pub mod transactions;
