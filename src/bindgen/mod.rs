//! Auto-generated FFI bindings via bindgen.
//!
//! This module provides bindings automatically generated at build time from
//! the FFmpeg C headers using bindgen.
//!
//! Advantages:
//! - Accurate: generated directly from C headers
//! - Complete: includes all types, functions, and constants
//! - Maintainable: regenerates when headers change
//!
//! Disadvantages:
//! - Build-time dependency on libclang
//! - Generated code can be verbose
//! - May include more than needed

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(dead_code)]
#![allow(clippy::all)]

// Include the generated bindings
include!(concat!(env!("OUT_DIR"), "/bindings.rs"));

/// Helper function to get a Rust String from an FFmpeg error code
pub fn get_error_string(errnum: std::ffi::c_int) -> String {
    let mut buf = [0 as std::os::raw::c_char; 256];
    unsafe {
        av_strerror(errnum, buf.as_mut_ptr(), buf.len());
    }
    let cstr = unsafe { std::ffi::CStr::from_ptr(buf.as_ptr()) };
    cstr.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avfilter_version() {
        let version = unsafe { avfilter_version() };
        assert!(version > 0);
        let major = (version >> 16) & 0xff;
        let minor = (version >> 8) & 0xff;
        let micro = version & 0xff;
        println!(
            "libavfilter version (bindgen): {}.{}.{}",
            major, minor, micro
        );
    }

    #[test]
    fn test_inout_alloc_free() {
        unsafe {
            let mut inout = avfilter_inout_alloc();
            assert!(!inout.is_null());
            avfilter_inout_free(&mut inout);
            assert!(inout.is_null());
            // Freeing the nulled pointer again is a documented no-op
            avfilter_inout_free(&mut inout);
            assert!(inout.is_null());
        }
    }

    #[test]
    fn test_graph_alloc_free() {
        unsafe {
            let mut graph = avfilter_graph_alloc();
            assert!(!graph.is_null());
            avfilter_graph_free(&mut graph);
            assert!(graph.is_null());
        }
    }
}
