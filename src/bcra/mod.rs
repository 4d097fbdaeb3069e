//! Central-bank (BCRA) statistics client.
//!
//! Two surfaces share this module: the paginated monetary-statistics endpoint
//! (`/estadisticas/v3.0/monetarias/{id}`) and the exchange-rate quote endpoint
//! (`/estadisticascambiarias/v1.0/Cotizaciones/{code}`).
//!
//! Failures here are the *soft* tier of the dashboard: every method returns a
//! typed [`BcraError`] and the dashboard downgrades it to a warning banner
//! while the other panels keep rendering.

pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::{BcraClient, BcraClientBuilder};
pub use error::{BcraError, BcraResult, ErrorBody};
pub use types::*;
