//! Request and response types for the BCRA statistics APIs.

pub mod exchange;
pub mod monetary;

// Re-export all types for convenience
pub use exchange::*;
pub use monetary::*;
