//! Safe, idiomatic Rust wrapper for libavfilter.
//!
//! This module provides a high-level, safe API built on top of the raw
//! bindgen bindings. It uses RAII for resource management and Rust's
//! type system to prevent common FFI errors: the graph owns its filter
//! contexts and links, contexts borrow the graph, and every transient
//! C string is released on all exit paths.
//!
//! # Example
//!
//! ```no_run
//! use libavfilter_ffi::safe::{Filter, FilterGraph};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let graph = FilterGraph::new()?;
//!     let color = Filter::by_name("color")?;
//!     let sink = Filter::by_name("nullsink")?;
//!
//!     let src = graph.create_filter(&color, "src", Some("c=red:s=320x240"))?;
//!     let out = graph.create_filter(&sink, "out", None)?;
//!     src.link(0, &out, 0)?;
//!     graph.config()?;
//!
//!     for link in src.outputs().into_iter().flatten() {
//!         println!("link time base: {:?}", link.time_base());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod dict;
pub mod error;
pub mod graph;
pub mod inout;
pub mod meta;

pub use context::{FilterContext, Link, Rational};
pub use dict::Dictionary;
pub use error::{FilterError, Result};
pub use graph::{Filter, FilterGraph, MediaType, Pads};
pub use inout::InOut;
pub use meta::{
    avutil_version, class_name, configuration, license, register_all, version, version_triple,
};
