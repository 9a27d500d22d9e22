//! Step definitions for task detail page scenarios.

pub mod world;

mod given;
mod then;
mod when;
