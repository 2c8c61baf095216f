//! Deterministic, pure logic shared by every tool.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data and return deterministic outputs suitable for tests.

pub mod mapping;
pub mod messages;
pub mod types;
pub mod validation;
