//! Core types and configuration for commitgate.
//!
//! This crate provides the foundational data structures used across all commitgate crates:
//! - [`types`] — Pull-request events, event kinds, errors, and exit codes
//! - [`config`] — Configuration loading from `.commitgate.json`

pub mod config;
pub mod types;
