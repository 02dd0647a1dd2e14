// File: crates/pulse-render-skia/build.rs
// Summary: Links the Windows registry API that skia-safe's ICU data lookup needs.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // Target, not host: the script itself may run on another OS when cross-compiling.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        println!("cargo:rustc-link-lib=advapi32");
    }
}
