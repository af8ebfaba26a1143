//! Build session: owns the mutable build and drives recomputation.
//!
//! This crate wires the pure rules of `metanin-core` to the catalogs of
//! `metanin-content`, adds environment-driven configuration and installs
//! tracing for front-ends.

pub mod builder;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;

pub use builder::SessionBuilder;
pub use config::SessionConfig;
pub use error::{Result, SessionError};
pub use logging::setup_logging;
pub use session::{BuildInput, BuildSession};
