use std::env;
use std::path::PathBuf;

fn main() {
    // Use pkg-config to find FFmpeg libraries
    let avfilter = pkg_config::probe_library("libavfilter").expect(
        "libavfilter not found. Install FFmpeg development libraries:\n\
         Ubuntu/Debian: sudo apt install libavfilter-dev libavutil-dev\n\
         Fedora: sudo dnf install ffmpeg-devel\n\
         macOS: brew install ffmpeg",
    );

    let avutil = pkg_config::probe_library("libavutil").expect("libavutil not found");

    // Collect all include paths
    let mut include_paths = Vec::new();
    include_paths.extend(avfilter.include_paths.iter().cloned());
    include_paths.extend(avutil.include_paths.iter().cloned());

    // Configure bindgen
    let mut builder = bindgen::Builder::default()
        .header_contents(
            "wrapper.h",
            r#"
            #include <libavfilter/avfilter.h>
            #include <libavutil/avutil.h>
            #include <libavutil/dict.h>
            #include <libavutil/error.h>
            #include <libavutil/mem.h>
            "#,
        )
        // Allowlist functions we need
        .allowlist_function("avfilter_version")
        .allowlist_function("avfilter_configuration")
        .allowlist_function("avfilter_license")
        .allowlist_function("avfilter_pad_count")
        .allowlist_function("avfilter_pad_get_name")
        .allowlist_function("avfilter_pad_get_type")
        .allowlist_function("avfilter_link")
        .allowlist_function("avfilter_link_free")
        .allowlist_function("avfilter_config_links")
        .allowlist_function("avfilter_process_command")
        .allowlist_function("avfilter_init_str")
        .allowlist_function("avfilter_init_dict")
        .allowlist_function("avfilter_free")
        .allowlist_function("avfilter_insert_filter")
        .allowlist_function("avfilter_get_class")
        .allowlist_function("avfilter_get_by_name")
        .allowlist_function("avfilter_inout_alloc")
        .allowlist_function("avfilter_inout_free")
        .allowlist_function("avfilter_graph_alloc")
        .allowlist_function("avfilter_graph_alloc_filter")
        .allowlist_function("avfilter_graph_create_filter")
        .allowlist_function("avfilter_graph_parse_ptr")
        .allowlist_function("avfilter_graph_config")
        .allowlist_function("avfilter_graph_free")
        .allowlist_function("avutil_version")
        .allowlist_function("av_strerror")
        .allowlist_function("av_strdup")
        .allowlist_function("av_freep")
        .allowlist_function("av_dict_set")
        .allowlist_function("av_dict_get")
        .allowlist_function("av_dict_count")
        .allowlist_function("av_dict_free")
        // Allowlist types
        .allowlist_type("AVFilter")
        .allowlist_type("AVFilterContext")
        .allowlist_type("AVFilterLink")
        .allowlist_type("AVFilterGraph")
        .allowlist_type("AVFilterInOut")
        .allowlist_type("AVFilterPad")
        .allowlist_type("AVClass")
        .allowlist_type("AVMediaType")
        .allowlist_type("AVDictionary")
        .allowlist_type("AVDictionaryEntry")
        .allowlist_type("AVRational")
        // Allowlist constants
        .allowlist_var("AVMEDIA_TYPE_.*")
        .allowlist_var("AVFILTER_CMD_FLAG_.*")
        .allowlist_var("AVFILTER_FLAG_.*")
        .allowlist_var("AVERROR.*")
        // Generate constants as enums where possible
        .rustified_enum("AVMediaType")
        // Derive traits
        .derive_debug(true)
        .derive_default(true)
        // Layout tests can be noisy, disable them
        .layout_tests(false);

    // Add include paths to bindgen
    for path in &include_paths {
        builder = builder.clang_arg(format!("-I{}", path.display()));
    }

    // Generate bindings
    let bindings = builder.generate().expect("Failed to generate bindings");

    // Write bindings to output file
    let out_path = PathBuf::from(env::var("OUT_DIR").unwrap());
    bindings
        .write_to_file(out_path.join("bindings.rs"))
        .expect("Failed to write bindings");

    // Re-run build script if these change
    println!("cargo:rerun-if-changed=build.rs");
}
