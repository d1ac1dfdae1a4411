//! Hand-written C type definitions for libavfilter FFI.
//!
//! These are manually defined to demonstrate understanding of C struct layouts
//! and how they map to Rust. Only the publicly documented field prefixes are
//! included; anything past them is private to libavfilter.

use std::ffi::c_int;
use std::os::raw::{c_char, c_uint, c_void};

/// AVRational represents a rational number (numerator/denominator)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AVRational {
    pub num: c_int,
    pub den: c_int,
}

/// Media type enumeration
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AVMediaType {
    Unknown = -1,
    Video = 0,
    Audio = 1,
    Data = 2,
    Subtitle = 3,
    Attachment = 4,
    Nb = 5,
}

impl Default for AVMediaType {
    fn default() -> Self {
        AVMediaType::Unknown
    }
}

/// Opaque filter graph - we only use it as a pointer
#[repr(C)]
pub struct AVFilterGraph {
    _opaque: [u8; 0],
}

/// Opaque pad descriptor. Pads are introspected through
/// `avfilter_pad_count` / `avfilter_pad_get_name` / `avfilter_pad_get_type`,
/// never by dereferencing.
#[repr(C)]
pub struct AVFilterPad {
    _opaque: [u8; 0],
}

/// Opaque reflection/metadata class used for logging and option access
#[repr(C)]
pub struct AVClass {
    _opaque: [u8; 0],
}

/// Opaque key/value dictionary from libavutil
#[repr(C)]
pub struct AVDictionary {
    _opaque: [u8; 0],
}

/// Static filter descriptor - partial definition with the public prefix
#[repr(C)]
pub struct AVFilter {
    pub name: *const c_char,
    pub description: *const c_char,
    pub inputs: *const AVFilterPad,
    pub outputs: *const AVFilterPad,
    pub priv_class: *const AVClass,
    pub flags: c_int,
    // ... more fields exist but they are private API
}

/// Instantiated filter node - partial definition.
/// Note: the actual struct is much larger; this covers the documented
/// public prefix, which has been stable across FFmpeg major versions.
#[repr(C)]
pub struct AVFilterContext {
    pub av_class: *const AVClass,
    pub filter: *const AVFilter,
    pub name: *mut c_char,
    pub input_pads: *mut AVFilterPad,
    pub inputs: *mut *mut AVFilterLink,
    pub nb_inputs: c_uint,
    pub output_pads: *mut AVFilterPad,
    pub outputs: *mut *mut AVFilterLink,
    pub nb_outputs: c_uint,
    _priv: *mut c_void,
    pub graph: *mut AVFilterGraph,
    pub thread_type: c_int,
    // ... more fields exist
}

/// Link between two filter pads - partial definition.
/// Only the endpoints and media type are layout-stable; field order past
/// `type` has changed between FFmpeg versions, so properties such as the
/// time base must be read through the bindgen layer instead.
#[repr(C)]
pub struct AVFilterLink {
    pub src: *mut AVFilterContext,
    pub srcpad: *mut AVFilterPad,
    pub dst: *mut AVFilterContext,
    pub dstpad: *mut AVFilterPad,
    pub media_type: AVMediaType,
    // ... version-dependent fields follow; use bindgen for those
}

/// Linked-list node naming an unconnected pad while a textual graph
/// description is being parsed. This layout is fully public and stable.
#[repr(C)]
pub struct AVFilterInOut {
    pub name: *mut c_char,
    pub filter_ctx: *mut AVFilterContext,
    pub pad_idx: c_int,
    pub next: *mut AVFilterInOut,
}

/// Error codes (AVERROR values are typically negative)
pub const AVERROR_EOF: c_int =
    -(('E' as c_int) | (('O' as c_int) << 8) | (('F' as c_int) << 16) | ((' ' as c_int) << 24));
