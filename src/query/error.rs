use core::fmt;

/// Error indicating that a geometric query is not supported between certain
/// shape combinations.
///
/// The narrow phase returns this instead of a silent "no collision" so that
/// a broad phase feeding it unsupported pairs is caught by the caller
/// rather than masked.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Unsupported;

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad("query not supported between these shapes")
    }
}

impl std::error::Error for Unsupported {}
