//! depstale - Stale dependency checker library
//!
//! This library checks the versions declared in a manifest against the
//! registry's latest release:
//! - Python (requirements.txt, checked against PyPI)
//! - Node.js (package.json, checked against npm)

pub mod check;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod parser;
pub mod progress;
pub mod registry;
