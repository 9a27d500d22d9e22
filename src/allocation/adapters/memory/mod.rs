//! In-memory adapters for the task detail read path.

mod source;

pub use source::{HandledRequest, InMemoryAllocationSource};
