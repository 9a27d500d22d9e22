//! HTTP adapter for the allocation source port.

mod client;
pub mod models;

pub use client::HttpAllocationSource;
