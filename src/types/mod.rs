//! Domain-based type organization
//!
//! - connection: persisted address and theme preference
//! - probe: reachability probe outcomes and diagnostics

pub mod connection;
pub mod probe;

pub use connection::*;
pub use probe::*;
