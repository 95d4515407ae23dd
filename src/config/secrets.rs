//! Secret handling utilities.
//!
//! Re-exports the secrecy types the CLI needs to read the database URL
//! without depending on secrecy directly.

pub use secrecy::{ExposeSecret, SecretString};
