//! Safe wrappers for AVFilterContext and AVFilterLink.

use crate::bindgen;
use crate::safe::error::{FilterError, Result};
use crate::safe::graph::{GraphRef, MediaType};
use log::trace;
use std::ffi::{c_int, CStr, CString};
use std::marker::PhantomData;

/// Rational number copied out of the native AVRational layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rational {
    pub num: i32,
    pub den: i32,
}

impl From<bindgen::AVRational> for Rational {
    fn from(r: bindgen::AVRational) -> Self {
        Rational { num: r.num, den: r.den }
    }
}

/// Live filter instance inside a graph.
///
/// The context is owned by its graph and borrows it; it is freed together
/// with the graph, or earlier through [`FilterContext::free`].
pub struct FilterContext<'g> {
    ptr: *mut bindgen::AVFilterContext,
    _graph: GraphRef<'g>,
}

impl<'g> FilterContext<'g> {
    /// Wrap a context pointer produced by a graph factory call.
    ///
    /// # Safety
    /// - `ptr` must be a valid context owned by the graph `'g` borrows
    pub(crate) unsafe fn from_ptr(ptr: *mut bindgen::AVFilterContext) -> Self {
        FilterContext { ptr, _graph: PhantomData }
    }

    /// Initialize a freshly allocated, unlinked context with an options
    /// string (for example `w=128:h=96` for `scale`).
    pub fn init_str(&self, args: Option<&str>) -> Result<()> {
        let c_args = match args {
            Some(a) => Some(
                CString::new(a)
                    .map_err(|_| FilterError::InvalidArg("Args contain null byte".into()))?,
            ),
            None => None,
        };
        let ret = unsafe {
            bindgen::avfilter_init_str(
                self.ptr,
                c_args.as_ref().map_or(std::ptr::null(), |a| a.as_ptr()),
            )
        };
        if ret < 0 {
            return Err(FilterError::CreateFilter(bindgen::get_error_string(ret)));
        }
        Ok(())
    }

    /// Initialize a freshly allocated, unlinked context from a key/value
    /// dictionary. Options consumed by the filter are removed from `dict`;
    /// anything left over was not recognized.
    pub fn init_dict(&self, dict: &mut crate::safe::dict::Dictionary) -> Result<()> {
        let ret = unsafe { bindgen::avfilter_init_dict(self.ptr, dict.as_mut_ptr_ref()) };
        if ret < 0 {
            return Err(FilterError::CreateFilter(bindgen::get_error_string(ret)));
        }
        Ok(())
    }

    /// Link output pad `srcpad` of this context to input pad `dstpad` of
    /// `dst`. Pad indices are zero-based; compatibility is checked by the
    /// native library, not here.
    pub fn link(&self, srcpad: u32, dst: &FilterContext<'g>, dstpad: u32) -> Result<()> {
        trace!("linking {:?}:{} -> {:?}:{}", self.name(), srcpad, dst.name(), dstpad);
        let ret = unsafe { bindgen::avfilter_link(self.ptr, srcpad, dst.ptr, dstpad) };
        if ret < 0 {
            return Err(FilterError::from_code(ret));
        }
        Ok(())
    }

    /// Negotiate the media format, dimensions, etc of all inputs to this
    /// filter, recursing through the graph feeding it.
    pub fn config_links(&self) -> Result<()> {
        let ret = unsafe { bindgen::avfilter_config_links(self.ptr) };
        if ret < 0 {
            return Err(FilterError::ConfigGraph(bindgen::get_error_string(ret)));
        }
        Ok(())
    }

    /// Make the filter process a command.
    ///
    /// Returns the filter's textual response. The marshaled command and
    /// argument buffers are released on every exit path, including native
    /// failure returns.
    pub fn process_command(&self, cmd: &str, arg: &str, flags: i32) -> Result<String> {
        let c_cmd = CString::new(cmd)
            .map_err(|_| FilterError::InvalidArg("Command contains null byte".into()))?;
        let c_arg = CString::new(arg)
            .map_err(|_| FilterError::InvalidArg("Argument contains null byte".into()))?;
        let mut res = [0 as std::os::raw::c_char; 256];

        trace!("process_command {:?} cmd={} arg={}", self.name(), cmd, arg);
        let ret = unsafe {
            bindgen::avfilter_process_command(
                self.ptr,
                c_cmd.as_ptr(),
                c_arg.as_ptr(),
                res.as_mut_ptr(),
                res.len() as c_int,
                flags,
            )
        };
        if ret < 0 {
            return Err(FilterError::from_code(ret));
        }
        let response = unsafe { CStr::from_ptr(res.as_ptr()) };
        Ok(response.to_string_lossy().into_owned())
    }

    /// Instance name of this context, if set.
    pub fn name(&self) -> Option<String> {
        unsafe {
            let name = (*self.ptr).name;
            if name.is_null() {
                None
            } else {
                Some(CStr::from_ptr(name).to_string_lossy().into_owned())
            }
        }
    }

    /// Number of input pads on this context.
    pub fn nb_inputs(&self) -> usize {
        unsafe { (*self.ptr).nb_inputs as usize }
    }

    /// Number of output pads on this context.
    pub fn nb_outputs(&self) -> usize {
        unsafe { (*self.ptr).nb_outputs as usize }
    }

    /// Bounded view of the input links, one element per input pad.
    ///
    /// A pad that has not been linked yet appears as `None`. A context with
    /// zero inputs yields an empty vector without the base pointer being
    /// read, which covers the valid NULL-array/zero-count state.
    pub fn inputs(&self) -> Vec<Option<Link<'g>>> {
        unsafe { links_view((*self.ptr).inputs, self.nb_inputs()) }
    }

    /// Bounded view of the output links, one element per output pad.
    pub fn outputs(&self) -> Vec<Option<Link<'g>>> {
        unsafe { links_view((*self.ptr).outputs, self.nb_outputs()) }
    }

    /// Free this context, unlinking it and removing it from its graph.
    ///
    /// Dropping the graph frees its contexts anyway; this is for tearing a
    /// single filter out of a live graph.
    pub fn free(self) {
        unsafe { bindgen::avfilter_free(self.ptr) };
    }

    /// Get the raw pointer (for advanced FFI usage).
    ///
    /// # Safety
    /// The returned pointer is valid only while the owning graph is alive.
    pub unsafe fn as_mut_ptr(&self) -> *mut bindgen::AVFilterContext {
        self.ptr
    }
}

unsafe fn links_view<'g>(
    base: *mut *mut bindgen::AVFilterLink,
    count: usize,
) -> Vec<Option<Link<'g>>> {
    if count == 0 || base.is_null() {
        return Vec::new();
    }
    std::slice::from_raw_parts(base, count)
        .iter()
        .map(|&ptr| {
            if ptr.is_null() {
                None
            } else {
                Some(Link { ptr, _graph: PhantomData })
            }
        })
        .collect()
}

/// Borrowed view of a link between two filter contexts.
pub struct Link<'g> {
    ptr: *mut bindgen::AVFilterLink,
    _graph: GraphRef<'g>,
}

impl<'g> Link<'g> {
    /// Media type carried by this link.
    pub fn media_type(&self) -> MediaType {
        unsafe { MediaType::from((*self.ptr).type_) }
    }

    /// Time base of the stream on this link, valid after configuration.
    /// Read straight out of the native field with no conversion arithmetic.
    pub fn time_base(&self) -> Rational {
        unsafe { Rational::from((*self.ptr).time_base) }
    }

    /// Splice an initialized, unlinked filter into the middle of this link,
    /// connecting the old source to `filt`'s pad `filt_srcpad_idx` and
    /// `filt`'s pad `filt_dstpad_idx` to the old destination.
    pub fn insert(&self, filt: &FilterContext<'g>, filt_srcpad_idx: u32, filt_dstpad_idx: u32) -> Result<()> {
        let ret = unsafe {
            bindgen::avfilter_insert_filter(self.ptr, filt.ptr, filt_srcpad_idx, filt_dstpad_idx)
        };
        if ret < 0 {
            return Err(FilterError::from_code(ret));
        }
        Ok(())
    }

    /// Channel count of an audio link.
    ///
    /// The underlying `avfilter_link_get_channels` entry point was removed
    /// from libavfilter; kept for source compatibility, this always reports
    /// the operation as unsupported.
    pub fn channels(&self) -> Result<i32> {
        Err(FilterError::Unsupported("avfilter_link_get_channels"))
    }

    /// Get the raw pointer (for advanced FFI usage).
    ///
    /// # Safety
    /// The returned pointer is valid only while the owning graph is alive
    /// and the link has not been freed.
    pub unsafe fn as_mut_ptr(&self) -> *mut bindgen::AVFilterLink {
        self.ptr
    }
}

// FilterContext and Link are not Send/Sync by default due to raw pointers
// This is intentional for safety

#[cfg(test)]
mod tests {
    use super::*;
    use crate::safe::dict::Dictionary;
    use crate::safe::graph::{Filter, FilterGraph};

    fn color_to_sink(graph: &FilterGraph) -> (FilterContext<'_>, FilterContext<'_>) {
        let color = Filter::by_name("color").unwrap();
        let nullsink = Filter::by_name("nullsink").unwrap();
        let src = graph
            .create_filter(&color, "src", Some("c=red:s=64x64"))
            .unwrap();
        let sink = graph.create_filter(&nullsink, "sink", None).unwrap();
        (src, sink)
    }

    #[test]
    fn test_zero_inputs_view_is_empty() {
        let graph = FilterGraph::new().unwrap();
        let (src, sink) = color_to_sink(&graph);
        assert_eq!(src.nb_inputs(), 0);
        assert!(src.inputs().is_empty());
        assert_eq!(sink.nb_outputs(), 0);
        assert!(sink.outputs().is_empty());
    }

    #[test]
    fn test_links_match_counts_after_linking() {
        let graph = FilterGraph::new().unwrap();
        let (src, sink) = color_to_sink(&graph);

        // Before linking: one output pad, no link in the slot
        let outputs = src.outputs();
        assert_eq!(outputs.len(), 1);
        assert!(outputs[0].is_none());

        src.link(0, &sink, 0).unwrap();
        graph.config().unwrap();

        let outputs = src.outputs();
        assert_eq!(outputs.len(), 1);
        let link = outputs[0].as_ref().unwrap();
        assert_eq!(link.media_type(), MediaType::Video);
        let tb = link.time_base();
        assert!(tb.num > 0 && tb.den > 0);

        // Both endpoints see the same link
        let inputs = sink.inputs();
        assert_eq!(inputs.len(), 1);
        assert!(inputs[0].is_some());
    }

    #[test]
    fn test_init_str() {
        let graph = FilterGraph::new().unwrap();
        let color = Filter::by_name("color").unwrap();
        let ctx = graph.alloc_filter(&color, "src").unwrap();
        ctx.init_str(Some("c=blue:s=48x48")).unwrap();
        assert_eq!(ctx.name().as_deref(), Some("src"));
        assert_eq!(ctx.nb_outputs(), 1);
    }

    #[test]
    fn test_init_dict_consumes_known_options() {
        let graph = FilterGraph::new().unwrap();
        let color = Filter::by_name("color").unwrap();
        let ctx = graph.alloc_filter(&color, "src").unwrap();

        let mut opts = Dictionary::new();
        opts.set("color", "green").unwrap();
        opts.set("size", "32x32").unwrap();
        ctx.init_dict(&mut opts).unwrap();
        // All options were recognized and consumed
        assert!(opts.is_empty());
    }

    #[test]
    fn test_process_command_unknown_is_error() {
        let graph = FilterGraph::new().unwrap();
        let (src, sink) = color_to_sink(&graph);
        src.link(0, &sink, 0).unwrap();
        graph.config().unwrap();

        // The sink supports no commands; the transient buffers must still be
        // released (CString RAII) and the native code surfaced unchanged.
        let err = sink.process_command("no-such-command", "1", 0);
        assert!(err.is_err());
    }

    #[test]
    fn test_insert_filter_into_link() {
        let graph = FilterGraph::new().unwrap();
        let (src, sink) = color_to_sink(&graph);
        src.link(0, &sink, 0).unwrap();

        let scale = Filter::by_name("scale").unwrap();
        let mid = graph
            .create_filter(&scale, "mid", Some("w=32:h=32"))
            .unwrap();

        let outputs = src.outputs();
        let link = outputs[0].as_ref().unwrap();
        link.insert(&mid, 0, 0).unwrap();
        graph.config().unwrap();

        // The spliced filter now sits between source and sink
        assert!(mid.inputs()[0].is_some());
        assert!(mid.outputs()[0].is_some());
    }

    #[test]
    fn test_link_channels_unsupported() {
        let graph = FilterGraph::new().unwrap();
        let (src, sink) = color_to_sink(&graph);
        src.link(0, &sink, 0).unwrap();
        graph.config().unwrap();

        let outputs = src.outputs();
        let link = outputs[0].as_ref().unwrap();
        assert!(matches!(
            link.channels(),
            Err(FilterError::Unsupported(_))
        ));
    }

    #[test]
    fn test_config_links_after_negotiation() {
        let graph = FilterGraph::new().unwrap();
        let (src, sink) = color_to_sink(&graph);
        src.link(0, &sink, 0).unwrap();
        graph.config().unwrap();
        // Re-running per-filter link configuration is accepted natively
        sink.config_links().unwrap();
    }

    #[test]
    fn test_free_single_context() {
        let graph = FilterGraph::new().unwrap();
        let color = Filter::by_name("color").unwrap();
        let ctx = graph
            .create_filter(&color, "src", Some("c=red:s=64x64"))
            .unwrap();
        ctx.free();
        // Graph drop after an explicit free must not double-free
    }
}
