#![forbid(unsafe_code)]

//! Core domain model and rules for the tissue adaptation simulator.
//!
//! This crate provides:
//! - Domain types (exercise categories, levels, tissue effects)
//! - Ordinal label scales
//! - The tissue response evaluator
//! - Configuration and logging setup for front ends

pub mod types;
pub mod error;
pub mod scales;
pub mod config;
pub mod logging;
pub mod evaluator;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use scales::{Bucket, Scale};
pub use config::Config;
pub use evaluator::evaluate;
