//! Core domain models for depstale
//!
//! This module contains the fundamental types used throughout the application:
//! - Ecosystem types pairing a manifest dialect with a registry
//! - Dependency and parsed specifier structures
//! - Registry records and classification results

mod classification;
mod dependency;
mod ecosystem;
mod record;
mod specifier;

pub use classification::{Classification, OutcomeKind};
pub use dependency::Dependency;
pub use ecosystem::Ecosystem;
pub use record::{RegistryRecord, UNKNOWN};
pub use specifier::ParsedSpecifier;
