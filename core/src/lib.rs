//! Client 360 backend core: stored client hierarchy plus synthetic
//! account and transaction generation.

pub mod account_generator;
pub mod client;
pub mod clock;
pub mod config;
pub mod error;
pub mod field_map;
pub mod hierarchy;
pub mod rng;
pub mod service;
pub mod store;
pub mod transaction_generator;
pub mod transaction_query;
pub mod types;
