//! Build and license metadata queries.
//!
//! These copy static strings out of the native library; they take no
//! arguments, never fail, and return the same value on every call.

use crate::bindgen;
use crate::safe::error::{FilterError, Result};
use std::ffi::CStr;

/// The LIBAVFILTER_VERSION_INT constant of the linked library.
pub fn version() -> u32 {
    unsafe { bindgen::avfilter_version() }
}

/// The linked libavfilter version as (major, minor, micro).
pub fn version_triple() -> (u32, u32, u32) {
    let v = version();
    ((v >> 16) & 0xff, (v >> 8) & 0xff, v & 0xff)
}

/// The libavfilter build-time configuration string.
pub fn configuration() -> String {
    unsafe {
        CStr::from_ptr(bindgen::avfilter_configuration())
            .to_string_lossy()
            .into_owned()
    }
}

/// The libavfilter license string.
pub fn license() -> String {
    unsafe {
        CStr::from_ptr(bindgen::avfilter_license())
            .to_string_lossy()
            .into_owned()
    }
}

/// The LIBAVUTIL_VERSION_INT constant of the linked sibling library.
pub fn avutil_version() -> u32 {
    unsafe { bindgen::avutil_version() }
}

/// Name of the reflection class shared by all filter contexts, from
/// `avfilter_get_class`. Useful for structured logging and generic option
/// introspection.
pub fn class_name() -> String {
    unsafe {
        let class = bindgen::avfilter_get_class();
        CStr::from_ptr((*class).class_name)
            .to_string_lossy()
            .into_owned()
    }
}

/// Register all built-in filters.
///
/// libavfilter dropped global registration (filters are always available
/// since FFmpeg 4); the native symbol no longer exists. Kept for source
/// compatibility, this always reports the operation as unsupported.
pub fn register_all() -> Result<()> {
    Err(FilterError::Unsupported("avfilter_register_all"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_nonzero() {
        assert!(version() > 0);
        let (major, _, _) = version_triple();
        assert!(major > 0);
    }

    #[test]
    fn test_metadata_deterministic() {
        let conf = configuration();
        let lic = license();
        assert!(!conf.is_empty());
        assert!(!lic.is_empty());
        // Static native data: repeated queries must agree
        assert_eq!(conf, configuration());
        assert_eq!(lic, license());
    }

    #[test]
    fn test_class_name() {
        assert_eq!(class_name(), "AVFilter");
    }

    #[test]
    fn test_register_all_unsupported() {
        assert!(matches!(
            register_all(),
            Err(FilterError::Unsupported("avfilter_register_all"))
        ));
    }
}
