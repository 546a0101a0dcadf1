//! Generates Ansible variables listing the newest Go toolchain releases
//!
//! # Modules
//!
//! - [`config`]: Run configuration and defaults
//! - [`fetcher`]: Retrieves the download index page
//! - [`version`]: Extracts, deduplicates and orders versions from page text
//! - [`render`]: Formats and writes the variables file
//! - [`pipeline`]: Runs fetch, extract and render in sequence
//! - [`logging`]: tracing subscriber setup

pub mod config;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod pipeline;
pub mod render;
pub mod version;

pub use error::Error;
