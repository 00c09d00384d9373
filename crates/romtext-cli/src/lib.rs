//! romtext CLI library.
//!
//! This crate provides the core functionality for the romtext CLI:
//! loading width tables, profiles and text, emitting banks in the supported
//! output formats, and the command implementations.

pub mod commands;
pub mod emit;
pub mod input;
pub mod logging;
