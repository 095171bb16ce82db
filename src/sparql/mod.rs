//! Query gateway: templating, remote execution, and result rows.

pub mod api_types;
pub mod client;
pub mod queries;
pub mod query;

pub use api_types::Row;
pub use client::SparqlClient;
pub use query::{SelectQuery, Term};
