//! Example using the manual FFI bindings.
//!
//! This demonstrates direct use of hand-written extern "C" declarations.
//! It requires careful handling of raw pointers and manual memory management.
//!
//! Run with: cargo run --example manual_example

use libavfilter_ffi::manual::{self, AVFilterContext};
use std::ffi::{CStr, CString};
use std::ptr;

fn main() {
    unsafe {
        // Print version info
        let version = manual::avfilter_version();
        let major = (version >> 16) & 0xff;
        let minor = (version >> 8) & 0xff;
        let micro = version & 0xff;
        println!("libavfilter version: {}.{}.{}", major, minor, micro);
        println!(
            "license: {}",
            CStr::from_ptr(manual::avfilter_license()).to_string_lossy()
        );

        // Introspect the static pads of the scale filter
        let scale_name = CString::new("scale").unwrap();
        let scale = manual::avfilter_get_by_name(scale_name.as_ptr());
        if scale.is_null() {
            eprintln!("scale filter not found");
            std::process::exit(1);
        }

        println!("\n--- Pads of 'scale' ---");
        let pads = (*scale).inputs;
        let count = manual::avfilter_pad_count(pads);
        for i in 0..count {
            let name = CStr::from_ptr(manual::avfilter_pad_get_name(pads, i));
            let media_type = manual::avfilter_pad_get_type(pads, i);
            println!(
                "input pad {}: name={}, type={:?}",
                i,
                name.to_string_lossy(),
                media_type
            );
        }

        // Build a tiny graph by hand: color source -> null sink
        let graph = manual::avfilter_graph_alloc();
        if graph.is_null() {
            eprintln!("Failed to allocate graph");
            std::process::exit(1);
        }

        let color_name = CString::new("color").unwrap();
        let sink_name = CString::new("nullsink").unwrap();
        let color = manual::avfilter_get_by_name(color_name.as_ptr());
        let nullsink = manual::avfilter_get_by_name(sink_name.as_ptr());

        let src_label = CString::new("src").unwrap();
        let src_args = CString::new("c=red:s=320x240").unwrap();
        let mut src: *mut AVFilterContext = ptr::null_mut();
        let ret = manual::avfilter_graph_create_filter(
            &mut src,
            color,
            src_label.as_ptr(),
            src_args.as_ptr(),
            ptr::null_mut(),
            graph,
        );
        if ret < 0 {
            eprintln!("Failed to create source: {}", manual::get_error_string(ret));
            std::process::exit(1);
        }

        let sink_label = CString::new("out").unwrap();
        let mut sink: *mut AVFilterContext = ptr::null_mut();
        let ret = manual::avfilter_graph_create_filter(
            &mut sink,
            nullsink,
            sink_label.as_ptr(),
            ptr::null(),
            ptr::null_mut(),
            graph,
        );
        if ret < 0 {
            eprintln!("Failed to create sink: {}", manual::get_error_string(ret));
            std::process::exit(1);
        }

        let ret = manual::avfilter_link(src, 0, sink, 0);
        if ret < 0 {
            eprintln!("Failed to link: {}", manual::get_error_string(ret));
            std::process::exit(1);
        }

        let ret = manual::avfilter_graph_config(graph, ptr::null_mut());
        if ret < 0 {
            eprintln!("Failed to configure: {}", manual::get_error_string(ret));
            std::process::exit(1);
        }

        // Walk the bounded link views reconstructed from the count fields
        println!("\n--- Configured graph ---");
        println!(
            "source: {} inputs, {} outputs",
            (*src).nb_inputs,
            (*src).nb_outputs
        );
        for (i, link) in manual::context_outputs(src).iter().enumerate() {
            println!(
                "source output link {}: media type {:?}",
                i,
                (**link).media_type
            );
        }

        // Clean up: the graph frees every context and link it owns
        let mut graph = graph;
        manual::avfilter_graph_free(&mut graph);

        println!("\nManual FFI example completed successfully!");
    }
}
