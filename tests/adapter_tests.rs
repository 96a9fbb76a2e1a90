//! Tests for the version-independent adapters.

use std::rc::Rc;
use std::sync::Arc;
use std::thread;

use llvm_facade::llvm::context::Context;
use llvm_facade::llvm::module::Module;
use llvm_facade::llvm::types::StructType;
use llvm_facade::{function_name, struct_type_by_name};

/// Create a module declaring `%struct.pair = { i32, i64 }` and two functions.
fn create_pair_module(context: &Context) -> (Module<'_>, StructType<'_>) {
    let module = context.create_module("pair_test");
    let i32_type = context.i32_type();
    let i64_type = context.i64_type();

    let pair = context.opaque_struct_type("struct.pair");
    pair.set_body(&[i32_type.into(), i64_type.into()], false);

    // i64 widen(i32 x) { return (i64) x; }
    let widen_type = i64_type.fn_type(&[i32_type.into()], false);
    let widen = module.add_function("widen", widen_type, None);
    let entry = context.append_basic_block(widen, "entry");
    let builder = context.create_builder();
    builder.position_at_end(entry);
    let x = widen.get_nth_param(0).unwrap().into_int_value();
    let wide = builder.build_int_s_extend(x, i64_type, "wide").unwrap();
    builder.build_return(Some(&wide)).unwrap();

    // { i32, i64 } make_pair()
    let make_type = pair.fn_type(&[], false);
    module.add_function("make_pair", make_type, None);

    (module, pair)
}

#[test]
fn test_function_name_accepts_every_handle_kind() {
    let context = Context::create();
    let (module, _) = create_pair_module(&context);
    let widen = module.get_function("widen").unwrap();

    let by_value = function_name(widen);
    let by_ref = function_name(&widen);
    let by_rc = function_name(Rc::new(widen));
    let by_arc = function_name(Arc::new(widen));

    assert_eq!(by_value, "widen");
    assert_eq!(by_value, by_ref);
    assert_eq!(by_value, by_rc);
    assert_eq!(by_value, by_arc);
}

#[test]
fn test_function_names_follow_module_order() {
    let context = Context::create();
    let (module, _) = create_pair_module(&context);

    let names: Vec<String> = module.get_functions().map(function_name).collect();
    assert_eq!(names, vec!["widen", "make_pair"]);
}

#[test]
fn test_missing_struct_is_not_found() {
    let context = Context::create();
    let (module, _) = create_pair_module(&context);

    assert!(struct_type_by_name(&module, "struct.missing").is_none());
    assert!(struct_type_by_name(&module, "struct.pai").is_none());
    assert!(struct_type_by_name(&module, "struct.pair\0").is_none());
}

#[test]
fn test_struct_lookup_matches_other_mechanisms() {
    let context = Context::create();
    let (module, pair) = create_pair_module(&context);

    let found = struct_type_by_name(&module, "struct.pair").unwrap();
    assert_eq!(found, pair);
    assert_eq!(Some(found), module.get_struct_type("struct.pair"));
    assert_eq!(found.get_name().unwrap().to_str().unwrap(), "struct.pair");
    assert_eq!(found.count_fields(), 2);

    // Looking up twice yields the same handle.
    assert_eq!(struct_type_by_name(&module, "struct.pair"), Some(found));
}

#[test]
fn test_struct_lookup_in_empty_module() {
    let context = Context::create();
    let module = context.create_module("empty");
    assert!(struct_type_by_name(&module, "struct.pair").is_none());
}

#[test]
fn test_adapters_run_on_independent_threads() {
    let handles: Vec<_> = (0..4)
        .map(|idx| {
            thread::spawn(move || {
                let context = Context::create();
                let (module, _) = create_pair_module(&context);
                let widen = module.get_function("widen").unwrap();
                let missing = format!("struct.missing{idx}");
                (
                    function_name(widen),
                    struct_type_by_name(&module, "struct.pair").is_some(),
                    struct_type_by_name(&module, &missing).is_none(),
                )
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), ("widen".to_string(), true, true));
    }
}
