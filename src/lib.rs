//! Read-mostly data gateway for a city time-machine dataset.
//!
//! Parameterized lookups are translated into templated SPARQL queries
//! against a remote graph store, raw and derived responses are cached in a
//! volatile key-value store, and flat result rows are folded into nested,
//! paginated domain entities.

pub mod aggregate;
pub mod cache;
pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod periods;
pub mod sparql;
pub mod types;

pub use cache::CacheStore;
pub use config::Config;
pub use data::{DataService, IndexFilter};
pub use error::LookupError;
pub use sparql::SparqlClient;
