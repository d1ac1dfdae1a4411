//! Safe wrapper for the libavutil AVDictionary companion type.
//!
//! The dictionary is only a collaborator here: the binding passes it into
//! `avfilter_init_dict` as an opaque option container. Just enough of the
//! libavutil dictionary API is wrapped to build one and inspect what the
//! filter left unconsumed.

use crate::bindgen;
use crate::safe::error::{check_ret, FilterError, Result};
use std::ffi::{CStr, CString};
use std::ptr;

/// Owned AVDictionary handle. A NULL pointer is the valid empty dictionary;
/// the native library allocates on first insert.
pub struct Dictionary {
    ptr: *mut bindgen::AVDictionary,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Dictionary { ptr: ptr::null_mut() }
    }

    /// Insert or overwrite an entry.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let c_key = CString::new(key)
            .map_err(|_| FilterError::InvalidArg("Key contains null byte".into()))?;
        let c_value = CString::new(value)
            .map_err(|_| FilterError::InvalidArg("Value contains null byte".into()))?;
        let ret =
            unsafe { bindgen::av_dict_set(&mut self.ptr, c_key.as_ptr(), c_value.as_ptr(), 0) };
        check_ret(ret)?;
        Ok(())
    }

    /// Look up an entry by exact key.
    pub fn get(&self, key: &str) -> Option<String> {
        let c_key = CString::new(key).ok()?;
        unsafe {
            let entry =
                bindgen::av_dict_get(self.ptr, c_key.as_ptr(), ptr::null(), 0);
            if entry.is_null() {
                None
            } else {
                Some(CStr::from_ptr((*entry).value).to_string_lossy().into_owned())
            }
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        if self.ptr.is_null() {
            0
        } else {
            unsafe { bindgen::av_dict_count(self.ptr) as usize }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pointer to the handle itself, for calls that consume or replace the
    /// dictionary in place (`avfilter_init_dict`).
    pub(crate) fn as_mut_ptr_ref(&mut self) -> *mut *mut bindgen::AVDictionary {
        &mut self.ptr
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Dictionary::new()
    }
}

impl Drop for Dictionary {
    fn drop(&mut self) {
        if !self.ptr.is_null() {
            unsafe {
                bindgen::av_dict_free(&mut self.ptr);
            }
        }
    }
}

// Dictionary is not Send/Sync by default due to raw pointer
// This is intentional for safety

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dict() {
        let dict = Dictionary::new();
        assert!(dict.is_empty());
        assert!(dict.get("missing").is_none());
    }

    #[test]
    fn test_set_get() {
        let mut dict = Dictionary::new();
        dict.set("color", "red").unwrap();
        dict.set("size", "64x64").unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("color").as_deref(), Some("red"));
        assert_eq!(dict.get("size").as_deref(), Some("64x64"));

        // Overwrite keeps the entry count stable
        dict.set("color", "blue").unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("color").as_deref(), Some("blue"));
    }
}
