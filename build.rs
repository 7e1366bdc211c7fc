use std::env;

fn main() {
    // Linker scripts only matter for the firmware binary.
    if env::var_os("CARGO_FEATURE_BOARD").is_none() {
        return;
    }

    // `memory.x` is provided by stm32f7xx-hal's `rt` feature.
    println!("cargo:rustc-link-arg-bins=-Tlink.x");

    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }
}
