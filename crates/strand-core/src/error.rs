pub type Result<T> = std::result::Result<T, ValidationError>;

/// Rejected input for a generation request.
///
/// This is the only failure the generator reports. It never leaves partially built state behind,
/// so callers can retry with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid sequence: at least one letter (a-z) is required")]
    Empty,

    #[error("Invalid sequence: {ch:?} at position {index} is not a letter (a-z)")]
    InvalidCharacter { ch: char, index: usize },
}
