//! Unit tests for the task detail read path.
