//! Version extraction from an index page
//!
//! Runs the scanner, parses every capture, drops malformed ones with a
//! warning, deduplicates and returns the newest versions.

use tracing::{debug, warn};

use crate::version::dotted::DottedVersion;
use crate::version::scanner::TarballScanner;
use crate::version::selector::VersionSet;

pub struct VersionExtractor {
    scanner: TarballScanner,
}

impl VersionExtractor {
    pub fn new(platform: &str) -> Self {
        Self {
            scanner: TarballScanner::new(platform),
        }
    }

    /// Returns at most `limit` canonical versions, strictly descending
    pub fn extract(&self, text: &str, limit: usize) -> Vec<String> {
        let tokens = self.scanner.scan(text);
        debug!("Found {} tarball names", tokens.len());

        let set: VersionSet = tokens
            .into_iter()
            .filter_map(|token| match DottedVersion::parse(token) {
                Ok(version) => Some(version),
                Err(e) => {
                    warn!("Skipping version '{}': {}", token, e);
                    None
                }
            })
            .collect();
        if set.is_empty() {
            debug!("No parseable versions");
        } else {
            debug!("{} distinct versions", set.len());
        }

        set.select(limit)
    }
}
