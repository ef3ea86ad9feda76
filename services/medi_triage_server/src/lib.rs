//! HTTP API for the `medi_triage` scorer.
//!
//! `POST /api/v1/analyze` validates a symptom/vitals report and returns a
//! triage assessment. The remaining routes serve consent acknowledgement,
//! measurement guides and liveness checks.

pub mod config;
pub mod cors;
pub mod error;
pub mod logging;
pub mod routes;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ErrorBody, ServerError};
pub use routes::{app, router};
pub use state::AppState;
