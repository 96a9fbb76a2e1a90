// build.rs

use std::env;

#[path = "src/gate.rs"]
#[allow(dead_code)]
mod gate;

fn main() {
    println!("cargo:rerun-if-changed=src/gate.rs");
    println!("cargo:rerun-if-env-changed=LLVM_FACADE_EXPECT_VERSION");

    for predicate in gate::all_predicates() {
        println!("cargo:rustc-check-cfg=cfg({predicate})");
    }

    let features = env::vars().filter_map(|(key, _)| {
        key.strip_prefix("CARGO_FEATURE_").map(gate::feature_from_env)
    });

    // A failed gate is a failed build; the message names the minimum release.
    let selected = match gate::resolve(features) {
        Ok(selected) => selected,
        Err(err) => panic!("llvm-facade: {err}"),
    };

    if let Ok(expected) = env::var("LLVM_FACADE_EXPECT_VERSION") {
        if let Err(err) = gate::check_expectation(&expected, selected) {
            panic!("llvm-facade: {err}");
        }
    }

    for predicate in gate::predicates(selected) {
        println!("cargo:rustc-cfg={predicate}");
    }
    println!("cargo:rustc-env=LLVM_FACADE_GATE={}", selected.0);
}
