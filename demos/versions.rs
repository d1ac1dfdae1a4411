//! Print build and license metadata from the linked FFmpeg libraries.
//!
//! No flags, no configuration; exits zero unconditionally.
//!
//! Run with: cargo run --example versions

use libavfilter_ffi::safe;
use log::info;

fn main() {
    simple_logger::init_with_level(log::Level::Info).unwrap();

    let (major, minor, micro) = safe::version_triple();
    info!("AvFilter Version:\t{}.{}.{}", major, minor, micro);

    let util = safe::avutil_version();
    info!(
        "AvUtil Version:\t{}.{}.{}",
        (util >> 16) & 0xff,
        (util >> 8) & 0xff,
        util & 0xff
    );

    info!("AvFilter License:\t{}", safe::license());
    info!("AvFilter Configuration:\t{}", safe::configuration());
}
