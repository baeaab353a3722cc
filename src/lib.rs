//! ecotrack - a sustainability action tracker served over HTTP
//!
//! One collection of action records, persisted as a single JSON array
//! file. No indexes, no locks on disk, no migrations: read the whole
//! file, mutate in memory, write the whole file back.

pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod store;
pub mod validation;
