//! # Graft - a GraphQL gateway over a plain REST backend
//!
//! Graft exposes a small typed graph (`User`, `Company`) on top of a REST
//! backend with `users` and `companies` collections. Each schema field is
//! bound to a resolver that issues the corresponding REST call; nested
//! relations are stitched across separate calls, lazily, only when selected.
//!
//! ## Behavior
//!
//! - Backend ids are surfaced as strings even when stored as numbers
//! - A failed relation fetch becomes a field-level error next to partial data
//! - Mutations validate required arguments before any REST call is issued
//! - No caching, batching, retries, or request deduplication
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers, and HTTP server
//! - [`model`]: Backend record types and payload shapes
//! - [`rest`]: REST client adapter

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `graft.yml` configuration files and backend settings.
pub mod config;

/// Error types and result aliases.
///
/// Defines the `GraftError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers, and HTTP server wiring.
pub mod graphql;

/// Backend record types (`UserRecord`, `CompanyRecord`) and payload shapes.
pub mod model;

/// REST client adapter over the upstream collections.
pub mod rest;

pub mod logging;
