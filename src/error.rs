// This module defines the runtime error type of the facade using thiserror. The facade
// itself has almost nothing fallible: a missing named type is `None`, and an unsupported
// LLVM release is rejected when the crate is built. FacadeError covers the thin target
// helpers (initialization, triple lookup, machine creation), whose failure text comes
// straight from LLVM and is carried through unchanged, plus version strings parsed at
// run time. FacadeResult<T> is the usual alias.

//! Error types for the facade.

use thiserror::Error;

use crate::gate::GateError;

#[derive(Error, Debug)]
pub enum FacadeError {
    #[error("Target initialization failed: {0}")]
    TargetInit(String),

    #[error("Unknown target `{triple}`: {reason}")]
    UnknownTarget { triple: String, reason: String },

    #[error("Could not create a target machine for `{triple}` (cpu `{cpu}`)")]
    MachineCreation { triple: String, cpu: String },

    #[error(transparent)]
    Version(#[from] GateError),
}

/// Result type alias for facade operations.
pub type FacadeResult<T> = Result<T, FacadeError>;
