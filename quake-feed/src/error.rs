use std::fmt;

/// Errors that can occur when fetching or parsing the feed document.
///
/// Every variant belongs to the fetch failure category: none of them
/// leaves a usable document behind, so rendering must not start.
#[derive(Debug, PartialEq, Clone)]
pub enum FeedError {
    /// Transport failure before any response arrived.
    Network(String),
    /// The server answered with a non-2xx status.
    HttpStatus(u16),
    /// The body was not a GeoJSON feed document.
    Parse(String),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Network(msg) => write!(f, "feed request failed: {}", msg),
            FeedError::HttpStatus(code) => write!(f, "feed responded with HTTP {}", code),
            FeedError::Parse(msg) => write!(f, "feed document is malformed: {}", msg),
        }
    }
}

impl std::error::Error for FeedError {}

/// Why a single feature could not become a display record.
#[derive(Debug, PartialEq, Clone)]
pub enum TransformError {
    /// The feature's JSON did not have the expected types.
    Malformed(String),
    MissingProperty(&'static str),
    /// Coordinate tuple had this many elements instead of 3.
    BadCoordinates(usize),
    /// Epoch milliseconds outside the representable calendar range.
    BadTime(i64),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::Malformed(msg) => write!(f, "feature is malformed: {}", msg),
            TransformError::MissingProperty(name) => {
                write!(f, "feature is missing property '{}'", name)
            }
            TransformError::BadCoordinates(len) => {
                write!(f, "expected 3 coordinates, found {}", len)
            }
            TransformError::BadTime(millis) => write!(f, "invalid event time {}", millis),
        }
    }
}

impl std::error::Error for TransformError {}
