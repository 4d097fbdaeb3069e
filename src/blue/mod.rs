//! Bluelytics parallel-rate ("dólar blue") client.
//!
//! A single unpaginated request returning the full quote history; the caller
//! windows it to the dashboard range. This is the dashboard's *hard* failure
//! tier: a [`BlueError`] propagates out of the render cycle instead of being
//! downgraded to a warning.

pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::{BluelyticsClient, BluelyticsClientBuilder};
pub use error::{BlueError, BlueResult};
pub use types::{EvolutionEntry, BLUE_SERIES_NAME, SOURCE_BLUE};
