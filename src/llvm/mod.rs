// This module is the declaration surface the rest of a compiler sees instead of LLVM.
// It re-exports, under one set of names, the inkwell modules and the raw llvm-sys
// release matching the enabled `llvmNN-M` feature. Where LLVM added or removed a
// construct between releases, the re-export is compiled in or out by an
// `llvm_at_least_*` predicate pair rather than replaced with a stand-in, so code that
// needs a newer construct fails to compile against an older LLVM at its own call site.
// Optional back-ends are likewise only named when their Cargo feature is on.

//! Version-selected LLVM declarations.
//!
//! ```ignore
//! use llvm_facade::llvm::context::Context;
//! use llvm_facade::llvm::targets::{InitializationConfig, TargetMachine};
//!
//! let context = Context::create();
//! let module = context.create_module("unit");
//! ```

pub mod passes;
pub mod targets;

#[allow(deprecated, unused_imports)]
pub use inkwell::{
    attributes, basic_block, builder, context, data_layout, debug_info, execution_engine,
    intrinsics, memory_buffer, module, object_file, support, types, values,
};

pub use inkwell::{AddressSpace, FloatPredicate, IntPredicate, OptimizationLevel};

// Raw C API of the selected release. Exactly one of these is compiled.
#[cfg(feature = "llvm11-0")]
pub use llvm_sys_110 as sys;
#[cfg(feature = "llvm12-0")]
pub use llvm_sys_120 as sys;
#[cfg(feature = "llvm13-0")]
pub use llvm_sys_130 as sys;
#[cfg(feature = "llvm14-0")]
pub use llvm_sys_140 as sys;
#[cfg(feature = "llvm15-0")]
pub use llvm_sys_150 as sys;
#[cfg(feature = "llvm16-0")]
pub use llvm_sys_160 as sys;
#[cfg(feature = "llvm17-0")]
pub use llvm_sys_170 as sys;
#[cfg(feature = "llvm18-1")]
pub use llvm_sys_181 as sys;

/// LLVM's process-wide fatal error hooks.
pub mod error_handling {
    #[allow(deprecated, unused_imports)]
    pub use super::sys::error_handling::{
        LLVMEnablePrettyStackTrace, LLVMFatalErrorHandler, LLVMInstallFatalErrorHandler,
        LLVMResetFatalErrorHandler,
    };
}
