//! Version extraction layer
//!
//! Turns the raw text of a download index into the newest Go versions.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Scanner   │────▶│   Parser    │────▶│ VersionSet  │────▶│  Selector   │
//! │  (regex)    │     │  (dotted)   │     │  (dedup)    │     │ (sort, cap) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`scanner`]: Finds `go<version>.<platform>.tar.gz` names in text
//! - [`dotted`]: Dotted-numeric version value with total ordering
//! - [`selector`]: Deduplication by canonical form and top-N selection
//! - [`extractor`]: Composes the above into a single call
//! - [`error`]: Parse errors for malformed version tokens

pub mod dotted;
pub mod error;
pub mod extractor;
pub mod scanner;
pub mod selector;

pub use dotted::DottedVersion;
pub use error::ParseError;
pub use extractor::VersionExtractor;
