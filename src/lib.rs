//! FFI bindings for libavfilter demonstrating three approaches.
//!
//! This crate provides bindings to FFmpeg's libavfilter filter-graph
//! subsystem using three different FFI approaches:
//!
//! 1. **Manual FFI** (`manual` module) - Hand-written extern "C" declarations
//! 2. **Bindgen FFI** (`bindgen` module) - Auto-generated bindings via bindgen
//! 3. **Safe Wrapper** (`safe` module) - Idiomatic Rust API on top of bindgen
//!
//! All filter-graph semantics - topology construction, format negotiation,
//! pad linking, command dispatch - live in the native library. This crate
//! only translates calling conventions: string marshaling, pointer casts,
//! and array-length reconstruction from raw pointers plus count fields.
//!
//! # Prerequisites
//!
//! You need FFmpeg development libraries installed:
//!
//! ```sh
//! # Ubuntu/Debian
//! sudo apt install libavfilter-dev libavutil-dev
//!
//! # Fedora
//! sudo dnf install ffmpeg-devel
//!
//! # macOS
//! brew install ffmpeg
//! ```
//!
//! # Choosing an Approach
//!
//! - Use **manual** when you need fine-grained control or minimal dependencies
//! - Use **bindgen** when you need complete, accurate bindings
//! - Use **safe** for most applications - it prevents common FFI errors
//!
//! # Example
//!
//! ```no_run
//! use libavfilter_ffi::safe::{Filter, FilterGraph};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Build a small graph: a color source feeding a null sink
//!     let graph = FilterGraph::new()?;
//!     let src = graph.create_filter(
//!         &Filter::by_name("color")?,
//!         "src",
//!         Some("c=red:s=320x240"),
//!     )?;
//!     let sink = graph.create_filter(&Filter::by_name("nullsink")?, "out", None)?;
//!
//!     src.link(0, &sink, 0)?;
//!     graph.config()?;
//!
//!     println!("source outputs: {}", src.nb_outputs());
//!     Ok(())
//! }
//! ```

pub mod bindgen;
pub mod manual;
pub mod safe;

// Re-export the safe API at the crate root for convenience
pub use safe::{
    Dictionary, Filter, FilterContext, FilterError, FilterGraph, InOut, Link, MediaType, Pads,
    Rational, Result,
};
