//! Safe wrappers for AVFilter descriptors and AVFilterGraph.

use crate::bindgen;
use crate::safe::context::FilterContext;
use crate::safe::error::{FilterError, Result};
use crate::safe::inout::InOut;
use log::debug;
use std::ffi::{CStr, CString};
use std::marker::PhantomData;
use std::ptr;

/// Media type enumeration (mirrors AVMediaType)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Unknown,
    Video,
    Audio,
    Data,
    Subtitle,
    Attachment,
}

impl From<bindgen::AVMediaType> for MediaType {
    fn from(t: bindgen::AVMediaType) -> Self {
        match t {
            bindgen::AVMediaType::AVMEDIA_TYPE_VIDEO => MediaType::Video,
            bindgen::AVMediaType::AVMEDIA_TYPE_AUDIO => MediaType::Audio,
            bindgen::AVMediaType::AVMEDIA_TYPE_DATA => MediaType::Data,
            bindgen::AVMediaType::AVMEDIA_TYPE_SUBTITLE => MediaType::Subtitle,
            bindgen::AVMediaType::AVMEDIA_TYPE_ATTACHMENT => MediaType::Attachment,
            _ => MediaType::Unknown,
        }
    }
}

/// Read-only handle to a registered filter descriptor.
///
/// Descriptors live in libavfilter's static registry, so the handle carries
/// a `'static` borrow and can be looked up once and reused freely.
#[derive(Debug, Clone, Copy)]
pub struct Filter {
    ptr: *const bindgen::AVFilter,
}

impl Filter {
    /// Look up a filter descriptor by name (for example `scale` or `color`).
    pub fn by_name(name: &str) -> Result<Self> {
        let c_name = CString::new(name)
            .map_err(|_| FilterError::InvalidArg("Filter name contains null byte".into()))?;
        let ptr = unsafe { bindgen::avfilter_get_by_name(c_name.as_ptr()) };
        if ptr.is_null() {
            return Err(FilterError::UnknownFilter(name.to_owned()));
        }
        Ok(Filter { ptr })
    }

    /// The filter's registered name.
    pub fn name(&self) -> String {
        unsafe {
            CStr::from_ptr((*self.ptr).name)
                .to_string_lossy()
                .into_owned()
        }
    }

    /// Human-readable description, if the filter provides one.
    pub fn description(&self) -> Option<String> {
        unsafe {
            let desc = (*self.ptr).description;
            if desc.is_null() {
                None
            } else {
                Some(CStr::from_ptr(desc).to_string_lossy().into_owned())
            }
        }
    }

    /// Bounded view over the filter's static input pad templates.
    pub fn input_pads(&self) -> Pads {
        unsafe { Pads::new((*self.ptr).inputs) }
    }

    /// Bounded view over the filter's static output pad templates.
    pub fn output_pads(&self) -> Pads {
        unsafe { Pads::new((*self.ptr).outputs) }
    }

    /// Get the raw pointer (for advanced FFI usage).
    pub fn as_ptr(&self) -> *const bindgen::AVFilter {
        self.ptr
    }
}

/// Bounded view over a NULL-terminated native pad array.
///
/// The element count is taken from the native library once at construction;
/// indexed accessors reject anything past it rather than forwarding an
/// out-of-bounds index to the native side.
#[derive(Debug, Clone, Copy)]
pub struct Pads {
    ptr: *const bindgen::AVFilterPad,
    count: usize,
}

impl Pads {
    /// Build a view from a pad-array base pointer. A NULL base (a filter
    /// with no pads on that side) yields an empty view.
    pub(crate) unsafe fn new(ptr: *const bindgen::AVFilterPad) -> Self {
        let count = if ptr.is_null() {
            0
        } else {
            bindgen::avfilter_pad_count(ptr) as usize
        };
        Pads { ptr, count }
    }

    /// Number of pads in the array.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Name of the pad at `index`, or None if the index is out of bounds.
    pub fn name(&self, index: usize) -> Option<String> {
        if index >= self.count {
            return None;
        }
        unsafe {
            let name = bindgen::avfilter_pad_get_name(self.ptr, index as i32);
            if name.is_null() {
                None
            } else {
                Some(CStr::from_ptr(name).to_string_lossy().into_owned())
            }
        }
    }

    /// Media type of the pad at `index`, or None if the index is out of bounds.
    pub fn media_type(&self, index: usize) -> Option<MediaType> {
        if index >= self.count {
            return None;
        }
        unsafe { Some(MediaType::from(bindgen::avfilter_pad_get_type(self.ptr, index as i32))) }
    }
}

/// Safe wrapper around AVFilterGraph.
///
/// The graph owns every filter context and link created inside it; dropping
/// the graph frees them all via `avfilter_graph_free`. Contexts handed out
/// by this type borrow the graph, so they cannot outlive it.
///
/// Mutating calls take `&self`: contexts returned from `create_filter` keep
/// the graph borrowed while they are alive, and the type is neither `Send`
/// nor `Sync`, so no concurrent mutation can occur.
pub struct FilterGraph {
    ptr: *mut bindgen::AVFilterGraph,
}

impl FilterGraph {
    /// Allocate an empty filter graph.
    pub fn new() -> Result<Self> {
        let ptr = unsafe { bindgen::avfilter_graph_alloc() };
        if ptr.is_null() {
            return Err(FilterError::Alloc);
        }
        Ok(FilterGraph { ptr })
    }

    /// Create and initialize a filter instance in this graph.
    ///
    /// `args` is the filter's option string, for example `c=red:s=64x64`
    /// for the `color` source.
    pub fn create_filter(
        &self,
        filter: &Filter,
        name: &str,
        args: Option<&str>,
    ) -> Result<FilterContext<'_>> {
        let c_name = CString::new(name)
            .map_err(|_| FilterError::InvalidArg("Instance name contains null byte".into()))?;
        let c_args = match args {
            Some(a) => Some(
                CString::new(a)
                    .map_err(|_| FilterError::InvalidArg("Args contain null byte".into()))?,
            ),
            None => None,
        };

        let mut ctx: *mut bindgen::AVFilterContext = ptr::null_mut();
        let ret = unsafe {
            bindgen::avfilter_graph_create_filter(
                &mut ctx,
                filter.as_ptr(),
                c_name.as_ptr(),
                c_args.as_ref().map_or(ptr::null(), |a| a.as_ptr()),
                ptr::null_mut(),
                self.ptr,
            )
        };
        if ret < 0 {
            return Err(FilterError::CreateFilter(bindgen::get_error_string(ret)));
        }

        debug!("created filter instance {} ({})", name, filter.name());
        Ok(unsafe { FilterContext::from_ptr(ctx) })
    }

    /// Allocate an uninitialized filter instance in this graph.
    ///
    /// The returned context must be initialized with
    /// [`FilterContext::init_str`] or [`FilterContext::init_dict`] before it
    /// can be linked.
    pub fn alloc_filter(&self, filter: &Filter, name: &str) -> Result<FilterContext<'_>> {
        let c_name = CString::new(name)
            .map_err(|_| FilterError::InvalidArg("Instance name contains null byte".into()))?;
        let ctx = unsafe {
            bindgen::avfilter_graph_alloc_filter(self.ptr, filter.as_ptr(), c_name.as_ptr())
        };
        if ctx.is_null() {
            return Err(FilterError::Alloc);
        }
        Ok(unsafe { FilterContext::from_ptr(ctx) })
    }

    /// Add filters described by a graph string (the `filter,filter;chain`
    /// syntax) to this graph.
    ///
    /// `inputs` and `outputs` name the open pads the description connects to;
    /// both are consumed. The open pads remaining after parsing are returned
    /// as new lists.
    pub fn parse(
        &self,
        description: &str,
        inputs: Option<InOut>,
        outputs: Option<InOut>,
    ) -> Result<(Option<InOut>, Option<InOut>)> {
        let c_desc = CString::new(description)
            .map_err(|_| FilterError::InvalidArg("Description contains null byte".into()))?;

        let mut in_ptr = inputs.map_or(ptr::null_mut(), InOut::into_raw);
        let mut out_ptr = outputs.map_or(ptr::null_mut(), InOut::into_raw);

        let ret = unsafe {
            bindgen::avfilter_graph_parse_ptr(
                self.ptr,
                c_desc.as_ptr(),
                &mut in_ptr,
                &mut out_ptr,
                ptr::null_mut(),
            )
        };

        // On failure the native parser has already freed both lists.
        if ret < 0 {
            return Err(FilterError::ParseGraph(bindgen::get_error_string(ret)));
        }

        debug!("parsed graph description: {}", description);
        unsafe { Ok((InOut::from_raw(in_ptr), InOut::from_raw(out_ptr))) }
    }

    /// Check validity and configure all links and formats in the graph.
    pub fn config(&self) -> Result<()> {
        let ret = unsafe { bindgen::avfilter_graph_config(self.ptr, ptr::null_mut()) };
        if ret < 0 {
            return Err(FilterError::ConfigGraph(bindgen::get_error_string(ret)));
        }
        debug!("graph configured");
        Ok(())
    }

    /// Get the raw pointer (for advanced FFI usage).
    ///
    /// # Safety
    /// The returned pointer is valid only for the lifetime of this FilterGraph.
    pub unsafe fn as_mut_ptr(&self) -> *mut bindgen::AVFilterGraph {
        self.ptr
    }
}

impl Drop for FilterGraph {
    fn drop(&mut self) {
        if !self.ptr.is_null() {
            unsafe {
                bindgen::avfilter_graph_free(&mut self.ptr);
            }
        }
    }
}

// FilterGraph is not Send/Sync by default due to raw pointer
// This is intentional for safety

/// Ties a borrowed handle's lifetime to its owning graph.
pub(crate) type GraphRef<'g> = PhantomData<&'g FilterGraph>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_lookup() {
        let filt = Filter::by_name("null").unwrap();
        assert_eq!(filt.name(), "null");
        assert!(filt.description().is_some());

        assert!(matches!(
            Filter::by_name("no-such-filter-exists"),
            Err(FilterError::UnknownFilter(_))
        ));
    }

    #[test]
    fn test_pad_views() {
        let scale = Filter::by_name("scale").unwrap();
        let inputs = scale.input_pads();
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs.name(0).as_deref(), Some("default"));
        assert_eq!(inputs.media_type(0), Some(MediaType::Video));
        // Out-of-bounds indices are rejected, not forwarded
        assert!(inputs.name(1).is_none());
        assert!(inputs.media_type(99).is_none());

        // A source filter has no input pads; the view must be empty
        let color = Filter::by_name("color").unwrap();
        assert!(color.input_pads().is_empty());
        assert_eq!(color.output_pads().len(), 1);
    }

    #[test]
    fn test_graph_create_and_config() {
        let graph = FilterGraph::new().unwrap();
        let color = Filter::by_name("color").unwrap();
        let nullsink = Filter::by_name("nullsink").unwrap();

        let src = graph
            .create_filter(&color, "src", Some("c=red:s=64x64"))
            .unwrap();
        let sink = graph.create_filter(&nullsink, "sink", None).unwrap();

        src.link(0, &sink, 0).unwrap();
        graph.config().unwrap();
    }

    #[test]
    fn test_graph_parse() {
        let graph = FilterGraph::new().unwrap();
        // A self-contained chain leaves no open pads
        let (inputs, outputs) = graph
            .parse("color=c=blue:s=32x32,nullsink", None, None)
            .unwrap();
        assert!(inputs.is_none());
        assert!(outputs.is_none());
        graph.config().unwrap();
    }

    #[test]
    fn test_graph_parse_with_labeled_pads() {
        let graph = FilterGraph::new().unwrap();
        let color = Filter::by_name("color").unwrap();
        let nullsink = Filter::by_name("nullsink").unwrap();
        let src = graph
            .create_filter(&color, "src", Some("c=red:s=64x64"))
            .unwrap();
        let sink = graph.create_filter(&nullsink, "sink", None).unwrap();

        // The existing source's open output feeds [in]; [out] drains into
        // the existing sink's open input.
        let mut outputs = InOut::new().unwrap();
        outputs.set_name("in").unwrap();
        outputs.set_filter_ctx(&src);
        outputs.set_pad_idx(0);

        let mut inputs = InOut::new().unwrap();
        inputs.set_name("out").unwrap();
        inputs.set_filter_ctx(&sink);
        inputs.set_pad_idx(0);

        let (rem_in, rem_out) = graph
            .parse("[in] scale=32:32 [out]", Some(inputs), Some(outputs))
            .unwrap();
        assert!(rem_in.is_none());
        assert!(rem_out.is_none());
        graph.config().unwrap();

        // The parsed scaler closed both open pads
        assert!(src.outputs()[0].is_some());
        assert!(sink.inputs()[0].is_some());
    }

    #[test]
    fn test_graph_parse_error() {
        let graph = FilterGraph::new().unwrap();
        let err = graph.parse("definitely/not=a)graph(", None, None);
        assert!(matches!(err, Err(FilterError::ParseGraph(_))));
    }
}
