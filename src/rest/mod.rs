//! REST client adapter.
//!
//! Thin contract over the upstream `users` and `companies` collections.
//! Single-attempt semantics: no retries, no timeout handling, no caching.

mod client;

pub use client::RestClient;
