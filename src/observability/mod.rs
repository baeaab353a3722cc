//! Observability for ecotrack.
//!
//! One concern only: structured JSON log lines for server lifecycle and
//! write-path events. Logs are synchronous and unbuffered; one line is one
//! event.

mod logger;

pub use logger::{Logger, Severity};
