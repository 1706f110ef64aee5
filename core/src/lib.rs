//! Core components for signing and verifying HTTP requests.
//!
//! This crate provides the foundational types shared by the reqseal signature
//! schemes.
//!
//! ## Overview
//!
//! - **Error**: a single [`Error`] type carrying an [`ErrorKind`], so callers
//!   branch on the failure reason instead of a boolean
//! - **Env**: an abstraction over environment lookups used to load configuration
//!
//! ## Utilities
//!
//! - [`hash`]: base64url helpers used by the compact signature encoding
//! - [`utils`]: general utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod utils;

mod env;
pub use env::Env;
pub use env::OsEnv;
pub use env::StaticEnv;

mod error;
pub use error::{Error, ErrorKind, Result};
