// This module holds the adapter functions: stable signatures whose bodies are picked by
// the `llvm_at_least_*` predicates. LLVM 12 moved named-struct lookup from the module
// (LLVMGetTypeByName) to the context (LLVMGetTypeByName2); struct_type_by_name hides that
// behind a module handle and a name and reports absence as None. function_name accepts a
// function by value, by reference or through Rc/Arc and always returns an owned String.
// Every argument is a borrowed view: nothing here retains or frees LLVM objects, and no
// state is kept between calls, so the adapters can run on any thread that owns the
// objects it passes in.

//! Version-independent adapters over LLVM APIs that changed shape.

use std::borrow::Borrow;
use std::ffi::{CStr, CString};

use inkwell::module::Module;
use inkwell::types::StructType;
use inkwell::values::FunctionValue;
use log::trace;

use crate::llvm::sys::core;
use crate::llvm::sys::prelude::LLVMTypeRef;

/// Name of a function as an owned string.
///
/// Invalid UTF-8 is replaced lossily.
pub fn function_name<'ctx>(function: impl Borrow<FunctionValue<'ctx>>) -> String {
    function.borrow().get_name().to_string_lossy().into_owned()
}

/// Find a named struct type visible from `module`.
///
/// Returns `None` when no struct of that name exists. Names with an interior
/// NUL byte cannot exist in LLVM and also yield `None`.
pub fn struct_type_by_name<'ctx>(module: &Module<'ctx>, name: &str) -> Option<StructType<'ctx>> {
    let Ok(c_name) = CString::new(name) else {
        trace!("struct lookup for {name:?} skipped: interior NUL");
        return None;
    };

    let raw = lookup_named_type(module, &c_name);
    if raw.is_null() {
        trace!("struct {name:?} not found");
        return None;
    }
    // SAFETY: LLVM only names struct types, and the handle lives as long as the context.
    Some(unsafe { StructType::new(raw) })
}

#[cfg(llvm_at_least_12_0)]
fn lookup_named_type(module: &Module<'_>, name: &CStr) -> LLVMTypeRef {
    // SAFETY: the module handle is valid for the borrow and `name` is NUL terminated.
    unsafe {
        let context = core::LLVMGetModuleContext(module.as_mut_ptr());
        core::LLVMGetTypeByName2(context, name.as_ptr())
    }
}

#[cfg(not(llvm_at_least_12_0))]
fn lookup_named_type(module: &Module<'_>, name: &CStr) -> LLVMTypeRef {
    // SAFETY: the module handle is valid for the borrow and `name` is NUL terminated.
    unsafe { core::LLVMGetTypeByName(module.as_mut_ptr(), name.as_ptr()) }
}

/// `(major, minor, patch)` of the LLVM library linked into the process.
#[cfg(llvm_at_least_16_0)]
pub fn linked_release() -> (u32, u32, u32) {
    let (mut major, mut minor, mut patch) = (0, 0, 0);
    // SAFETY: LLVMGetVersion only writes through the three pointers.
    unsafe { core::LLVMGetVersion(&mut major, &mut minor, &mut patch) };
    (major, minor, patch)
}

/// Supported release matching the linked library, if any.
#[cfg(llvm_at_least_16_0)]
pub fn linked_version() -> Option<crate::version::LlvmVersion> {
    let (major, minor, _) = linked_release();
    let gate = major.checked_mul(10)?.checked_add(minor)?;
    crate::version::LlvmVersion::from_gate(gate)
}
