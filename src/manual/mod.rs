//! Hand-written FFI declarations for libavfilter.
//!
//! This module demonstrates the manual approach to FFI, where you write
//! the extern "C" declarations yourself based on C header files.
//!
//! Advantages:
//! - Full control over types and layouts
//! - No build-time dependencies (no bindgen)
//! - Can define only what you need
//!
//! Disadvantages:
//! - Error-prone: must match C declarations exactly
//! - Maintenance burden when library updates
//! - May miss subtle ABI details
//!
//! Two legacy entry points (`avfilter_register_all` and
//! `avfilter_link_get_channels`) are deliberately not declared: the symbols
//! were removed from libavfilter and any call would fail at link time. The
//! safe layer reports them as unsupported instead.

pub mod types;

pub use types::*;

use std::ffi::c_int;
use std::os::raw::{c_char, c_uint, c_void};

// Allow clashing declarations - this module intentionally re-declares FFI functions
// that are also declared by bindgen, to demonstrate manual FFI bindings.
#[allow(clashing_extern_declarations)]
#[link(name = "avfilter")]
#[link(name = "avutil")]
extern "C" {
    /// Return the LIBAVFILTER_VERSION_INT constant.
    pub fn avfilter_version() -> c_uint;

    /// Return the libavfilter build-time configuration.
    ///
    /// Returns a static, NUL-terminated string; never NULL.
    pub fn avfilter_configuration() -> *const c_char;

    /// Return the libavfilter license.
    ///
    /// Returns a static, NUL-terminated string; never NULL.
    pub fn avfilter_license() -> *const c_char;

    /// Get the number of elements in a NULL-terminated array of pads.
    ///
    /// # Safety
    /// - `pads` must point to a pad array obtained from an `AVFilter`
    pub fn avfilter_pad_count(pads: *const AVFilterPad) -> c_int;

    /// Get the name of a pad at `pad_idx` in the array `pads`.
    ///
    /// # Safety
    /// - `pad_idx` must be within the count reported by `avfilter_pad_count`;
    ///   out-of-bounds access is undefined behavior in the native library
    pub fn avfilter_pad_get_name(pads: *const AVFilterPad, pad_idx: c_int) -> *const c_char;

    /// Get the media type of a pad at `pad_idx` in the array `pads`.
    ///
    /// # Safety
    /// - Same index contract as `avfilter_pad_get_name`
    pub fn avfilter_pad_get_type(pads: *const AVFilterPad, pad_idx: c_int) -> AVMediaType;

    /// Link two filters together.
    ///
    /// # Safety
    /// - `src` and `dst` must be valid, initialized filter contexts
    /// - `srcpad`/`dstpad` are zero-based pad indices on each context
    ///
    /// Returns 0 on success, negative AVERROR on failure.
    pub fn avfilter_link(
        src: *mut AVFilterContext,
        srcpad: c_uint,
        dst: *mut AVFilterContext,
        dstpad: c_uint,
    ) -> c_int;

    /// Free the link in `*link`, and set its pointer to NULL.
    ///
    /// # Safety
    /// - `link` must be a valid pointer to an AVFilterLink pointer
    /// - Calling with `*link == NULL` is a no-op
    pub fn avfilter_link_free(link: *mut *mut AVFilterLink);

    /// Negotiate the media format, dimensions, etc of all inputs to a filter.
    ///
    /// # Safety
    /// - `filter` must be a valid, initialized filter context
    ///
    /// Returns 0 on success, negative AVERROR on failure.
    pub fn avfilter_config_links(filter: *mut AVFilterContext) -> c_int;

    /// Make the filter instance process a command.
    ///
    /// # Safety
    /// - `cmd` and `arg` must be valid NUL-terminated C strings
    /// - `res` must be a writable buffer of at least `res_len` bytes, or NULL
    ///
    /// Returns >= 0 on success, AVERROR(ENOSYS) if the filter does not
    /// support the command, another negative AVERROR on failure.
    pub fn avfilter_process_command(
        filter: *mut AVFilterContext,
        cmd: *const c_char,
        arg: *const c_char,
        res: *mut c_char,
        res_len: c_int,
        flags: c_int,
    ) -> c_int;

    /// Initialize a filter with the supplied options string.
    ///
    /// # Safety
    /// - `ctx` must be a freshly allocated, uninitialized filter context
    /// - `args` must be a valid NUL-terminated C string, or NULL
    ///
    /// Returns 0 on success, negative AVERROR on failure.
    pub fn avfilter_init_str(ctx: *mut AVFilterContext, args: *const c_char) -> c_int;

    /// Initialize a filter with the supplied dictionary of options.
    ///
    /// # Safety
    /// - `ctx` must be a freshly allocated, uninitialized filter context
    /// - `options` may be NULL; consumed entries are removed from the dict
    ///
    /// Returns 0 on success, negative AVERROR on failure.
    pub fn avfilter_init_dict(ctx: *mut AVFilterContext, options: *mut *mut AVDictionary)
        -> c_int;

    /// Free a filter context. Only for contexts not owned by a graph;
    /// graph-owned contexts are freed by `avfilter_graph_free`.
    ///
    /// # Safety
    /// - `filter` must not be referenced by any link or graph afterwards
    pub fn avfilter_free(filter: *mut AVFilterContext);

    /// Insert a filter in the middle of an existing link.
    ///
    /// # Safety
    /// - `link` must be a live link; `filt` an initialized, unlinked context
    ///
    /// Returns 0 on success, negative AVERROR on failure.
    pub fn avfilter_insert_filter(
        link: *mut AVFilterLink,
        filt: *mut AVFilterContext,
        filt_srcpad_idx: c_uint,
        filt_dstpad_idx: c_uint,
    ) -> c_int;

    /// Return the AVClass for AVFilterContext, usable for logging and
    /// option introspection.
    pub fn avfilter_get_class() -> *const AVClass;

    /// Look up a registered filter descriptor by name.
    ///
    /// Returns NULL if no filter with that name exists.
    pub fn avfilter_get_by_name(name: *const c_char) -> *const AVFilter;

    /// Allocate a single AVFilterInOut entry, zeroed.
    ///
    /// Returns NULL on allocation failure.
    pub fn avfilter_inout_alloc() -> *mut AVFilterInOut;

    /// Free the supplied list of AVFilterInOut (walking `next`) and set
    /// `*inout` to NULL. Frees each node's `name` with the libavutil
    /// allocator, so names must come from `av_strdup`.
    ///
    /// # Safety
    /// - Calling with `*inout == NULL` is a no-op
    pub fn avfilter_inout_free(inout: *mut *mut AVFilterInOut);

    /// Allocate an empty filter graph.
    ///
    /// Returns NULL on allocation failure.
    pub fn avfilter_graph_alloc() -> *mut AVFilterGraph;

    /// Allocate a new, uninitialized filter context owned by `graph`.
    ///
    /// # Safety
    /// - `graph` must be a valid graph; `filter` a valid descriptor
    ///
    /// Returns NULL on failure.
    pub fn avfilter_graph_alloc_filter(
        graph: *mut AVFilterGraph,
        filter: *const AVFilter,
        name: *const c_char,
    ) -> *mut AVFilterContext;

    /// Create and initialize a filter instance in a graph in one call.
    ///
    /// # Safety
    /// - On success `*filt_ctx` points to the new context, owned by `graph`
    ///
    /// Returns 0 on success, negative AVERROR on failure.
    pub fn avfilter_graph_create_filter(
        filt_ctx: *mut *mut AVFilterContext,
        filt: *const AVFilter,
        name: *const c_char,
        args: *const c_char,
        opaque: *mut c_void,
        graph_ctx: *mut AVFilterGraph,
    ) -> c_int;

    /// Add a graph described by a string to a graph.
    ///
    /// # Safety
    /// - `inputs`/`outputs` are consumed on input and replaced with the
    ///   open pads remaining after parsing; free them with
    ///   `avfilter_inout_free`
    ///
    /// Returns 0 on success, negative AVERROR on failure.
    pub fn avfilter_graph_parse_ptr(
        graph: *mut AVFilterGraph,
        filters: *const c_char,
        inputs: *mut *mut AVFilterInOut,
        outputs: *mut *mut AVFilterInOut,
        log_ctx: *mut c_void,
    ) -> c_int;

    /// Check validity and configure all the links and formats in the graph.
    ///
    /// Returns >= 0 on success, negative AVERROR on failure.
    pub fn avfilter_graph_config(graphctx: *mut AVFilterGraph, log_ctx: *mut c_void) -> c_int;

    /// Free a graph, destroy its links, and set `*graph` to NULL.
    ///
    /// # Safety
    /// - Calling with `*graph == NULL` is a no-op
    pub fn avfilter_graph_free(graph: *mut *mut AVFilterGraph);

    /// Put a description of the AVERROR code errnum in errbuf.
    ///
    /// # Safety
    /// - `errbuf` must be a valid buffer of at least `errbuf_size` bytes
    ///
    /// Returns 0 on success, negative value if errnum is not found.
    pub fn av_strerror(errnum: c_int, errbuf: *mut c_char, errbuf_size: usize) -> c_int;

    /// Duplicate a string with the libavutil allocator.
    ///
    /// Returns NULL on allocation failure.
    pub fn av_strdup(s: *const c_char) -> *mut c_char;
}

/// Helper function to get a Rust String from an FFmpeg error code
pub fn get_error_string(errnum: c_int) -> String {
    let mut buf = [0 as c_char; 256];
    unsafe {
        av_strerror(errnum, buf.as_mut_ptr(), buf.len());
    }
    // Convert to Rust string, stopping at null terminator
    let cstr = unsafe { std::ffi::CStr::from_ptr(buf.as_ptr()) };
    cstr.to_string_lossy().into_owned()
}

/// Reconstruct the bounded input-link view of a context from its count field.
///
/// A zero count yields an empty slice without touching the base pointer;
/// a NULL base with a zero count is valid for unconfigured contexts.
///
/// # Safety
/// - `ctx` must be a valid AVFilterContext pointer
pub unsafe fn context_inputs<'a>(ctx: *const AVFilterContext) -> &'a [*mut AVFilterLink] {
    let nb = (*ctx).nb_inputs as usize;
    if nb == 0 || (*ctx).inputs.is_null() {
        return &[];
    }
    std::slice::from_raw_parts((*ctx).inputs, nb)
}

/// Reconstruct the bounded output-link view of a context.
///
/// # Safety
/// - `ctx` must be a valid AVFilterContext pointer
pub unsafe fn context_outputs<'a>(ctx: *const AVFilterContext) -> &'a [*mut AVFilterLink] {
    let nb = (*ctx).nb_outputs as usize;
    if nb == 0 || (*ctx).outputs.is_null() {
        return &[];
    }
    std::slice::from_raw_parts((*ctx).outputs, nb)
}
