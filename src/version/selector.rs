//! Deduplication and selection of the newest versions

use indexmap::IndexMap;

use crate::version::dotted::DottedVersion;

/// Versions keyed by value with trailing zeros ignored; the first
/// occurrence is kept, so `1.21` then `1.21.0` stays `1.21`
#[derive(Debug, Default, Clone)]
pub struct VersionSet {
    entries: IndexMap<Vec<u64>, DottedVersion>,
}

impl VersionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a version unless an equal one is already present.
    /// Returns whether the version was new.
    pub fn insert(&mut self, version: DottedVersion) -> bool {
        if self.entries.contains_key(version.key()) {
            return false;
        }
        self.entries.insert(version.key().to_vec(), version);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newest `limit` versions as canonical strings, strictly descending
    pub fn select(self, limit: usize) -> Vec<String> {
        let mut versions: Vec<DottedVersion> = self.entries.into_values().collect();
        versions.sort_unstable_by(|a, b| b.cmp(a));
        versions.truncate(limit);
        versions.iter().map(DottedVersion::canonical).collect()
    }
}

impl FromIterator<DottedVersion> for VersionSet {
    fn from_iter<I: IntoIterator<Item = DottedVersion>>(iter: I) -> Self {
        let mut set = Self::new();
        for version in iter {
            set.insert(version);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn set_of(versions: &[&str]) -> VersionSet {
        versions
            .iter()
            .map(|v| DottedVersion::parse(v).unwrap())
            .collect()
    }

    #[test]
    fn insert_ignores_equal_versions() {
        let mut set = VersionSet::new();

        assert!(set.insert(DottedVersion::parse("1.21.0").unwrap()));
        assert!(!set.insert(DottedVersion::parse("1.21.0").unwrap()));
        assert!(!set.insert(DottedVersion::parse("01.21.00").unwrap()));
        assert!(!set.insert(DottedVersion::parse("1.21").unwrap()));
        assert!(set.insert(DottedVersion::parse("1.21.1").unwrap()));

        assert_eq!(set.len(), 2);
    }

    #[rstest]
    #[case(&["1.21.0", "1.21.0", "1.20.5"], 20, &["1.21.0", "1.20.5"])]
    #[case(&["1.9", "1.10"], 20, &["1.10", "1.9"])]
    #[case(&["1.20.5", "1.22.0", "1.21.3"], 2, &["1.22.0", "1.21.3"])]
    #[case(&["1.21", "1.21.0"], 20, &["1.21"])]
    #[case(&["1.21.0", "1.21", "1.20"], 20, &["1.21.0", "1.20"])]
    #[case(&[], 20, &[])]
    fn select_returns_newest_first(
        #[case] input: &[&str],
        #[case] limit: usize,
        #[case] expected: &[&str],
    ) {
        assert_eq!(set_of(input).select(limit), expected);
    }

    #[test]
    fn select_result_does_not_depend_on_input_order() {
        let forward = set_of(&["1.18", "1.19.2", "1.20.1", "1.19.2"]).select(20);
        let backward = set_of(&["1.19.2", "1.20.1", "1.19.2", "1.18"]).select(20);

        assert_eq!(forward, backward);
    }

    #[test]
    fn select_truncates_to_highest_versions() {
        let input: Vec<String> = (0..25).map(|minor| format!("1.{}.0", minor)).collect();
        let refs: Vec<&str> = input.iter().map(String::as_str).collect();

        let selected = set_of(&refs).select(20);

        let expected: Vec<String> = (5..25).rev().map(|minor| format!("1.{}.0", minor)).collect();
        assert_eq!(selected, expected);
    }
}
