//! Adapter implementations for the allocation source port and page output.

pub mod html;
pub mod http;
pub mod memory;
