use thiserror::Error;

/// Error returned when a token cannot be read as a dotted-numeric version
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty version string")]
    Empty,

    #[error("Empty segment at position {position} in '{input}'")]
    EmptySegment { input: String, position: usize },

    #[error("Non-numeric segment '{segment}' in '{input}'")]
    NonNumeric { input: String, segment: String },

    #[error("Segment '{segment}' in '{input}' is out of range")]
    Overflow { input: String, segment: String },
}
