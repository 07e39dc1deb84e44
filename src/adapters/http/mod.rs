//! HTTP adapter for the transcript REST service.

pub mod client;

pub use client::HttpTranscriptClient;
