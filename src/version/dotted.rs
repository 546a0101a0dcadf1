//! Dotted-numeric version value
//!
//! Go release tarballs are named with plain numeric versions such as `1.9`,
//! `1.21.0` or `1.10.3`. Ordering is numeric per segment, so `1.10 > 1.9`,
//! and missing trailing segments count as zero, so `1.21 == 1.21.0`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::version::error::ParseError;

#[derive(Debug, Clone)]
pub struct DottedVersion {
    segments: Vec<u64>,
}

impl DottedVersion {
    /// Parse a version such as `1.21.0`.
    ///
    /// Leading zeros are accepted and dropped from the canonical form
    /// (`1.021` reads as `1.21`). The segment count is kept as written.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty);
        }

        let segments = input
            .split('.')
            .enumerate()
            .map(|(position, segment)| parse_segment(input, position, segment))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    /// Canonical string form as written, minus leading zeros
    pub fn canonical(&self) -> String {
        self.to_string()
    }

    /// Segments without trailing zeros; equal keys mean equal versions
    pub fn key(&self) -> &[u64] {
        let len = self
            .segments
            .iter()
            .rposition(|&segment| segment != 0)
            .map_or(0, |i| i + 1);
        &self.segments[..len]
    }

    /// Segment-wise comparison with implicit trailing zeros
    fn cmp_numeric(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        (0..len)
            .map(|i| {
                let a = self.segments.get(i).copied().unwrap_or(0);
                let b = other.segments.get(i).copied().unwrap_or(0);
                a.cmp(&b)
            })
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

fn parse_segment(input: &str, position: usize, segment: &str) -> Result<u64, ParseError> {
    if segment.is_empty() {
        return Err(ParseError::EmptySegment {
            input: input.to_string(),
            position,
        });
    }

    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::NonNumeric {
            input: input.to_string(),
            segment: segment.to_string(),
        });
    }

    // Only digits remain, so the sole failure mode is overflow
    segment.parse::<u64>().map_err(|_| ParseError::Overflow {
        input: input.to_string(),
        segment: segment.to_string(),
    })
}

impl PartialEq for DottedVersion {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for DottedVersion {}

impl Hash for DottedVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl Ord for DottedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_numeric(other)
    }
}

impl PartialOrd for DottedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for DottedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for DottedVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
