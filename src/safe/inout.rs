//! Safe wrapper for AVFilterInOut lists.

use crate::bindgen;
use crate::safe::context::FilterContext;
use crate::safe::error::{FilterError, Result};
use std::ffi::{CStr, CString};

/// Owned head of an AVFilterInOut list.
///
/// InOut nodes name the unconnected pads of a graph while a textual
/// description is being parsed. The wrapper owns the whole chain reachable
/// through `next`; dropping it frees every node and its name with
/// `avfilter_inout_free`.
///
/// The filter context a node points at is owned by its graph, not by this
/// list; the list must be dropped or consumed by [`FilterGraph::parse`]
/// while that graph is still alive.
///
/// [`FilterGraph::parse`]: crate::safe::graph::FilterGraph::parse
pub struct InOut {
    ptr: *mut bindgen::AVFilterInOut,
}

impl InOut {
    /// Allocate a single zeroed entry.
    pub fn new() -> Result<Self> {
        let ptr = unsafe { bindgen::avfilter_inout_alloc() };
        if ptr.is_null() {
            return Err(FilterError::Alloc);
        }
        Ok(InOut { ptr })
    }

    /// Set the pad label for this entry.
    ///
    /// The string is copied into native memory with `av_strdup` so that
    /// `avfilter_inout_free` can release it with the matching allocator;
    /// any previous name is released first.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        let c_name = CString::new(name)
            .map_err(|_| FilterError::InvalidArg("Name contains null byte".into()))?;
        unsafe {
            let dup = bindgen::av_strdup(c_name.as_ptr());
            if dup.is_null() {
                return Err(FilterError::Alloc);
            }
            bindgen::av_freep(&mut (*self.ptr).name as *mut _ as *mut std::ffi::c_void);
            (*self.ptr).name = dup;
        }
        Ok(())
    }

    /// Read the pad label back out of native memory.
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

    /// Point this entry at a filter context.
    pub fn set_filter_ctx(&mut self, ctx: &FilterContext<'_>) {
        unsafe {
            (*self.ptr).filter_ctx = ctx.as_mut_ptr();
        }
    }

    /// Set the pad index on the referenced context.
    pub fn set_pad_idx(&mut self, idx: i32) {
        unsafe {
            (*self.ptr).pad_idx = idx;
        }
    }

    /// The pad index on the referenced context.
    pub fn pad_idx(&self) -> i32 {
        unsafe { (*self.ptr).pad_idx }
    }

    /// Append `next` to this entry, taking ownership of it. Any list already
    /// hanging off this entry is freed first.
    pub fn set_next(&mut self, next: InOut) {
        unsafe {
            let mut old = (*self.ptr).next;
            if !old.is_null() {
                bindgen::avfilter_inout_free(&mut old);
            }
            (*self.ptr).next = InOut::into_raw(next);
        }
    }

    /// Number of entries in the chain starting at this node, always at
    /// least one.
    pub fn chain_len(&self) -> usize {
        let mut count = 0;
        let mut cur = self.ptr;
        while !cur.is_null() {
            count += 1;
            cur = unsafe { (*cur).next };
        }
        count
    }

    /// Release ownership and return the raw list head, for handing the list
    /// to a native call that consumes it.
    pub fn into_raw(this: InOut) -> *mut bindgen::AVFilterInOut {
        let ptr = this.ptr;
        std::mem::forget(this);
        ptr
    }

    /// Take ownership of a native list head. Returns None for a NULL head.
    ///
    /// # Safety
    /// - `ptr` must be a valid list head not owned elsewhere
    pub(crate) unsafe fn from_raw(ptr: *mut bindgen::AVFilterInOut) -> Option<Self> {
        if ptr.is_null() {
            None
        } else {
            Some(InOut { ptr })
        }
    }
}

impl Drop for InOut {
    fn drop(&mut self) {
        if !self.ptr.is_null() {
            unsafe {
                bindgen::avfilter_inout_free(&mut self.ptr);
            }
        }
    }
}

// InOut is not Send/Sync by default due to raw pointer
// This is intentional for safety

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_and_drop() {
        let inout = InOut::new().unwrap();
        assert!(inout.name().is_none());
        assert_eq!(inout.pad_idx(), 0);
        assert_eq!(inout.chain_len(), 1);
    }

    #[test]
    fn test_name_round_trip() {
        let mut inout = InOut::new().unwrap();
        inout.set_name("out").unwrap();
        assert_eq!(inout.name().as_deref(), Some("out"));

        // Replacing the name releases the old copy and round-trips the new one
        inout.set_name("v:0").unwrap();
        assert_eq!(inout.name().as_deref(), Some("v:0"));
    }

    #[test]
    fn test_pad_idx() {
        let mut inout = InOut::new().unwrap();
        inout.set_pad_idx(3);
        assert_eq!(inout.pad_idx(), 3);
    }

    #[test]
    fn test_chain_ownership() {
        let mut head = InOut::new().unwrap();
        head.set_name("first").unwrap();
        let mut second = InOut::new().unwrap();
        second.set_name("second").unwrap();

        head.set_next(second);
        assert_eq!(head.chain_len(), 2);
        // Dropping head frees the whole chain, names included
    }
}
