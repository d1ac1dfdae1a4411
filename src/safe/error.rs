//! Error types for the safe FFI wrapper.

use crate::bindgen;
use std::ffi::c_int;
use thiserror::Error;

/// libavfilter-specific error type
#[derive(Error, Debug)]
pub enum FilterError {
    /// End of file reached
    #[error("End of file")]
    Eof,

    /// No filter registered under the requested name
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// Could not create or initialize a filter instance
    #[error("Failed to create filter: {0}")]
    CreateFilter(String),

    /// Could not parse a textual graph description
    #[error("Failed to parse graph description: {0}")]
    ParseGraph(String),

    /// Format negotiation across the graph failed
    #[error("Failed to configure graph: {0}")]
    ConfigGraph(String),

    /// Memory allocation failure
    #[error("Memory allocation failed")]
    Alloc,

    /// Invalid argument provided
    #[error("Invalid argument: {0}")]
    InvalidArg(String),

    /// The entry point was removed from libavfilter and has no replacement
    #[error("Unsupported operation: {0} was removed from libavfilter")]
    Unsupported(&'static str),

    /// Generic FFmpeg error with code and message
    #[error("FFmpeg error ({code}): {message}")]
    Ffmpeg { code: c_int, message: String },
}

impl FilterError {
    /// Create a FilterError from an FFmpeg error code
    pub fn from_code(code: c_int) -> Self {
        // Check for EOF specifically
        let eof_code =
            -('E' as c_int | ('O' as c_int) << 8 | ('F' as c_int) << 16 | (' ' as c_int) << 24);
        if code == eof_code {
            return FilterError::Eof;
        }

        let message = bindgen::get_error_string(code);
        FilterError::Ffmpeg { code, message }
    }
}

/// Result type alias for operations that may fail with FilterError
pub type Result<T> = std::result::Result<T, FilterError>;

/// Convert an FFmpeg return code to a Result carrying the code on success.
///
/// libavfilter uses non-negative returns both as plain success and as counts,
/// so the code is passed through rather than discarded.
pub fn check_ret(code: c_int) -> Result<c_int> {
    if code >= 0 {
        Ok(code)
    } else {
        Err(FilterError::from_code(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FilterError::Eof;
        assert_eq!(format!("{}", err), "End of file");

        let err = FilterError::UnknownFilter("frobnicate".into());
        assert!(format!("{}", err).contains("frobnicate"));

        let err = FilterError::Unsupported("avfilter_register_all");
        assert!(format!("{}", err).contains("avfilter_register_all"));
    }

    #[test]
    fn test_from_code() {
        // Test with a negative code
        let err = FilterError::from_code(-1);
        if let FilterError::Ffmpeg { code, .. } = err {
            assert_eq!(code, -1);
        }
    }

    #[test]
    fn test_check_ret_passes_counts_through() {
        assert_eq!(check_ret(0).unwrap(), 0);
        assert_eq!(check_ret(3).unwrap(), 3);
        assert!(check_ret(-22).is_err());
    }
}
