//! llvm-facade - one LLVM API across LLVM releases.
//!
//! A code generator depends on this crate instead of on `inkwell` or
//! `llvm-sys` directly. Exactly one `llvmNN-M` Cargo feature picks the LLVM
//! release; the build script rejects no selection, several selections, and
//! releases older than 11.0. Everything version-specific lives here, so the
//! rest of the compiler sees a single set of names.
//!
//! # Primary Usage
//!
//! ```ignore
//! use llvm_facade::llvm::context::Context;
//! use llvm_facade::{function_name, struct_type_by_name};
//!
//! let context = Context::create();
//! let module = context.create_module("unit");
//! let frame = struct_type_by_name(&module, "struct.frame");
//! ```
//!
//! # Architecture
//!
//! - [`gate`] - build-time resolution of the version features
//! - [`version`] - the active release and the supported set
//! - [`capability`] - release capabilities, queryable in `const` context
//! - [`llvm`] - version-selected LLVM declarations
//! - [`adapters`] - stable signatures over APIs that changed shape
//! - [`guard`] - scoped fatal error handler
//! - [`error`] - errors of the target helpers

pub mod adapters;
pub mod capability;
pub mod error;
pub mod gate;
pub mod guard;
pub mod llvm;
pub mod version;

pub use adapters::{function_name, struct_type_by_name};
#[cfg(llvm_at_least_16_0)]
pub use adapters::{linked_release, linked_version};
pub use capability::Capability;
pub use error::{FacadeError, FacadeResult};
pub use gate::{Gate, GateError};
pub use guard::{
    live_guards, with_fatal_error_handler, FatalErrorHandler, FatalErrorHandlerGuard,
};
pub use version::{LlvmVersion, ACTIVE, MINIMUM};

/// cfg predicates that hold for this build, oldest release first.
pub fn active_predicates() -> Vec<String> {
    gate::predicates(Gate(ACTIVE.gate()))
}
