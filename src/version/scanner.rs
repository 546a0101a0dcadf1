//! Tarball name scanner
//!
//! Finds Go release tarball names such as `go1.21.0.linux-amd64.tar.gz` in
//! arbitrary text and yields the version part (`1.21.0`).

use regex::Regex;

/// Scanner for `go<version>.<platform>.tar.gz` tarball names
pub struct TarballScanner {
    /// Captures the digits-and-dots run between `go` and `.<platform>.tar.gz`
    tarball_re: Regex,
}

impl TarballScanner {
    pub fn new(platform: &str) -> Self {
        let pattern = format!(r"go([0-9.]+)\.{}\.tar\.gz", regex::escape(platform));
        Self {
            // The platform is escaped, so the pattern is always valid
            tarball_re: Regex::new(&pattern).unwrap(),
        }
    }

    /// Returns version captures in text order, duplicates included
    pub fn scan<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.tarball_re
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    }
}
