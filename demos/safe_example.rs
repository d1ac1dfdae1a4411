//! Example using the safe Rust wrapper.
//!
//! This demonstrates the idiomatic Rust API built on top of the FFI bindings.
//! No unsafe code is needed - resource management is handled via RAII.
//!
//! Run with: cargo run --example safe_example

use libavfilter_ffi::safe::{self, Filter, FilterGraph};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::init_with_level(log::Level::Debug)?;

    let (major, minor, micro) = safe::version_triple();
    println!("libavfilter version: {}.{}.{}", major, minor, micro);

    // Look up filter descriptors from the registry
    let color = Filter::by_name("color")?;
    let scale = Filter::by_name("scale")?;
    let nullsink = Filter::by_name("nullsink")?;

    println!("\n--- Filter descriptors ---");
    for filt in [&color, &scale, &nullsink] {
        println!(
            "{}: {} ({} input pads, {} output pads)",
            filt.name(),
            filt.description().unwrap_or_default(),
            filt.input_pads().len(),
            filt.output_pads().len(),
        );
    }

    // Build and configure: color source -> null sink
    let graph = FilterGraph::new()?;
    let src = graph.create_filter(&color, "src", Some("c=red:s=320x240:r=25"))?;
    let sink = graph.create_filter(&nullsink, "out", None)?;
    src.link(0, &sink, 0)?;

    // Splice a scaler into the existing link before configuring
    let mid = graph.create_filter(&scale, "mid", Some("w=160:h=120"))?;
    let outputs = src.outputs();
    let link = outputs[0]
        .as_ref()
        .expect("source was linked, slot cannot be empty");
    link.insert(&mid, 0, 0)?;

    graph.config()?;

    println!("\n--- Configured graph ---");
    for ctx in [&src, &mid, &sink] {
        println!(
            "{}: {} inputs, {} outputs",
            ctx.name().unwrap_or_default(),
            ctx.nb_inputs(),
            ctx.nb_outputs()
        );
        for link in ctx.outputs().into_iter().flatten() {
            let tb = link.time_base();
            println!(
                "  output link: type={:?}, time_base={}/{}",
                link.media_type(),
                tb.num,
                tb.den
            );
        }
    }

    // Dispatch a runtime command to the scaler
    println!("\n--- Commands ---");
    match mid.process_command("width", "80", 0) {
        Ok(res) => println!("scale accepted width command: {:?}", res),
        Err(e) => println!("scale rejected width command: {}", e),
    }

    println!("\nSafe wrapper example completed successfully!");

    // The graph and everything it owns are freed when it goes out of scope
    Ok(())
}
