//! Infrastructure adapters. Implement ports.
//!
//! Transcript service (HTTP, in-memory), observability, terminal UI. Map errors to DomainError.

pub mod http;
pub mod memory;
pub mod observability;
pub mod ui;
