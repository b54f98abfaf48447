//! # Bandex Common Library
//!
//! Shared code for the Bandex band catalog:
//! - Database models
//! - Configuration resolution
//! - Common error types

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
