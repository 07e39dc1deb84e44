//! Observability adapters. Implement ViewObserver.

pub mod tracing_observer;

pub use tracing_observer::TracingObserver;
