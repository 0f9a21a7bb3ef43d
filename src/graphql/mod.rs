//! GraphQL schema and resolvers.
//!
//! The resolver layer maps each schema field to a REST operation: root
//! queries fetch a single record per resource, relation fields (`User.company`,
//! `Company.users`) issue their own REST call only when selected, and
//! mutations drive the write verbs against `users`.
//!
//! ## Usage
//!
//! ```bash
//! # Start the gateway
//! graft serve --port 4000
//!
//! # One-shot query from the CLI
//! graft query '{ user { id firstName company { name } } }'
//!
//! # One-shot mutation
//! graft query 'mutation { addUser(firstName: "Charley", age: 20) { id } }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `user`, `company`
//! - **Mutations**: `addUser`, `deleteUser`, `editUser`

mod schema;
mod server;
mod types;

pub use schema::{GraftSchema, build_schema};
pub use server::{endpoint_url, run_server};
pub use types::{Company, User};
