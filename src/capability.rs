//! Named capabilities and the releases or features that provide them.
//!
//! Most variants mirror a `cfg` decision made inside the facade (see
//! [`Capability::selects_declarations`]). `TargetRegistryInMc` and `OpaquePointers`
//! gate nothing here; they record release facts that callers branch on when they
//! cannot use the crate's build-script predicates.

use std::fmt;

use crate::version::{LlvmVersion, ACTIVE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Named struct lookup is keyed by the context instead of the module.
    ContextKeyedTypeLookup,
    /// Legacy C-API alias analysis pass adders.
    AliasAnalysisPasses,
    /// New pass manager driven through `PassBuilderOptions`.
    NewPassBuilder,
    /// Target registry lives in the MC layer.
    TargetRegistryInMc,
    /// Pointers carry no pointee type.
    OpaquePointers,
    /// The linked library reports its own version.
    LinkedVersionQuery,
    /// Legacy `PassManagerBuilder`.
    LegacyPassManagerBuilder,
    /// Hexagon back-end, `hexagon` feature.
    HexagonBackend,
    /// WebAssembly back-end, `webassembly` feature.
    WebAssemblyBackend,
}

impl Capability {
    pub const ALL: [Capability; 9] = [
        Capability::ContextKeyedTypeLookup,
        Capability::AliasAnalysisPasses,
        Capability::NewPassBuilder,
        Capability::TargetRegistryInMc,
        Capability::OpaquePointers,
        Capability::LinkedVersionQuery,
        Capability::LegacyPassManagerBuilder,
        Capability::HexagonBackend,
        Capability::WebAssemblyBackend,
    ];

    /// Whether `version` ships this capability, ignoring optional features.
    pub const fn supported_by(self, version: LlvmVersion) -> bool {
        match self {
            Capability::ContextKeyedTypeLookup => version.at_least(LlvmVersion::V12_0),
            Capability::AliasAnalysisPasses | Capability::LegacyPassManagerBuilder => {
                !version.at_least(LlvmVersion::V17_0)
            }
            Capability::NewPassBuilder => version.at_least(LlvmVersion::V13_0),
            Capability::TargetRegistryInMc => version.at_least(LlvmVersion::V14_0),
            Capability::OpaquePointers => version.at_least(LlvmVersion::V15_0),
            Capability::LinkedVersionQuery => version.at_least(LlvmVersion::V16_0),
            Capability::HexagonBackend | Capability::WebAssemblyBackend => true,
        }
    }

    /// Whether this build provides the capability.
    pub const fn is_available(self) -> bool {
        match self {
            Capability::HexagonBackend => cfg!(feature = "hexagon"),
            Capability::WebAssemblyBackend => cfg!(feature = "webassembly"),
            _ => self.supported_by(ACTIVE),
        }
    }

    /// Whether the facade compiles some declaration in or out on this capability.
    pub const fn selects_declarations(self) -> bool {
        !matches!(self, Capability::TargetRegistryInMc | Capability::OpaquePointers)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Capability::ContextKeyedTypeLookup => "context-keyed-type-lookup",
            Capability::AliasAnalysisPasses => "alias-analysis-passes",
            Capability::NewPassBuilder => "new-pass-builder",
            Capability::TargetRegistryInMc => "target-registry-in-mc",
            Capability::OpaquePointers => "opaque-pointers",
            Capability::LinkedVersionQuery => "linked-version-query",
            Capability::LegacyPassManagerBuilder => "legacy-pass-manager-builder",
            Capability::HexagonBackend => "hexagon-backend",
            Capability::WebAssemblyBackend => "webassembly-backend",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
