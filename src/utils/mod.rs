//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Whole-file storage and config file loading

pub mod error;
pub mod files;

// Re-export commonly used items
pub use error::{ExportError, MatexError, MatexResult, ParseError};
pub use files::{DocumentStore, MemoryDocumentStore, StdDocumentStore};

#[cfg(feature = "config-file")]
pub use error::ConfigError;
#[cfg(feature = "config-file")]
pub use files::load_config;
