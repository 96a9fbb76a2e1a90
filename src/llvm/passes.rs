//! Pass manager declarations.
//!
//! LLVM 13 introduced the C-API handle for the new pass builder and LLVM 17
//! removed the legacy `PassManagerBuilder` together with the legacy pass adders,
//! so the two families overlap only for 13.0 through 16.0.

pub use inkwell::passes::{PassManager, PassManagerSubType};

#[cfg(llvm_at_least_13_0)]
pub use inkwell::passes::PassBuilderOptions;

#[cfg(not(llvm_at_least_17_0))]
#[allow(deprecated)]
pub use inkwell::passes::PassManagerBuilder;

/// Legacy alias analysis pass adders.
#[cfg(not(llvm_at_least_17_0))]
pub mod alias_analysis {
    #[allow(deprecated, unused_imports)]
    pub use crate::llvm::sys::transforms::scalar::{
        LLVMAddBasicAliasAnalysisPass, LLVMAddScopedNoAliasAAPass,
        LLVMAddTypeBasedAliasAnalysisPass,
    };
}
