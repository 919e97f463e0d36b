use thiserror::Error;

/// Reasons a forecast body is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The body has no `prediction` field (or is not an object at all)
    #[error("missing `prediction` field")]
    MissingField,

    /// `prediction` exists but is not an array
    #[error("`prediction` is not a sequence (found {found})")]
    NotASequence { found: &'static str },

    /// An element is not a JSON number
    #[error("element {index} is not numeric (found {found})")]
    NonNumeric { index: usize, found: &'static str },

    /// An element is a number that cannot be represented as a finite f64
    #[error("element {index} is not a finite number")]
    NotFinite { index: usize },
}

/// Failures of the forecast request itself, before any body validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never produced a response (network error or abort)
    #[error("Request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("HTTP error: {status}")]
    Http { status: u16 },

    /// The response body could not be parsed as JSON
    #[error("Failed to parse response: {0}")]
    Body(String),
}

/// Why a settled forecast ended up empty
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The body parsed but did not carry a usable forecast
    #[error("Invalid prediction data: {0}")]
    Validation(#[from] ValidationError),
}
