// This module exposes the version gate to Rust code. LlvmVersion is a closed enumeration
// of the supported LLVM releases, ordered oldest to newest, with `const fn` accessors for
// the gate value (MAJOR*10+MINOR) and the Cargo feature that selects it. ACTIVE is chosen
// by a block of mutually exclusive cfg items, one per version feature; the build script
// guarantees exactly one of them is compiled. Runtime version strings are parsed with the
// same rules the build script applied, so `"10.0"` is rejected here for the same reason
// `llvm10-0` fails the build.

//! LLVM release identification.

use std::fmt;
use std::str::FromStr;

use crate::gate::{self, Gate, GateError};

/// A supported LLVM release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LlvmVersion {
    V11_0,
    V12_0,
    V13_0,
    V14_0,
    V15_0,
    V16_0,
    V17_0,
    V18_1,
}

impl LlvmVersion {
    /// Every supported release, oldest first.
    pub const ALL: [LlvmVersion; 8] = [
        LlvmVersion::V11_0,
        LlvmVersion::V12_0,
        LlvmVersion::V13_0,
        LlvmVersion::V14_0,
        LlvmVersion::V15_0,
        LlvmVersion::V16_0,
        LlvmVersion::V17_0,
        LlvmVersion::V18_1,
    ];

    /// Gate value, `MAJOR * 10 + MINOR`.
    pub const fn gate(self) -> u32 {
        match self {
            LlvmVersion::V11_0 => 110,
            LlvmVersion::V12_0 => 120,
            LlvmVersion::V13_0 => 130,
            LlvmVersion::V14_0 => 140,
            LlvmVersion::V15_0 => 150,
            LlvmVersion::V16_0 => 160,
            LlvmVersion::V17_0 => 170,
            LlvmVersion::V18_1 => 181,
        }
    }

    pub const fn major(self) -> u32 {
        self.gate() / 10
    }

    pub const fn minor(self) -> u32 {
        self.gate() % 10
    }

    /// Cargo feature selecting this release.
    pub const fn feature(self) -> &'static str {
        match self {
            LlvmVersion::V11_0 => "llvm11-0",
            LlvmVersion::V12_0 => "llvm12-0",
            LlvmVersion::V13_0 => "llvm13-0",
            LlvmVersion::V14_0 => "llvm14-0",
            LlvmVersion::V15_0 => "llvm15-0",
            LlvmVersion::V16_0 => "llvm16-0",
            LlvmVersion::V17_0 => "llvm17-0",
            LlvmVersion::V18_1 => "llvm18-1",
        }
    }

    /// `true` when `self` is `other` or newer.
    pub const fn at_least(self, other: LlvmVersion) -> bool {
        self.gate() >= other.gate()
    }

    pub const fn from_gate(gate: u32) -> Option<LlvmVersion> {
        let mut idx = 0;
        while idx < Self::ALL.len() {
            if Self::ALL[idx].gate() == gate {
                return Some(Self::ALL[idx]);
            }
            idx += 1;
        }
        None
    }

    /// Name of the cfg predicate this release turns on.
    pub fn predicate(self) -> String {
        Gate(self.gate()).predicate()
    }
}

impl fmt::Display for LlvmVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major(), self.minor())
    }
}

impl FromStr for LlvmVersion {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = gate::parse(s)?;
        LlvmVersion::from_gate(found.0).ok_or_else(|| GateError::Unsupported {
            requested: s.trim().to_string(),
            found,
        })
    }
}

/// Oldest supported release.
pub const MINIMUM: LlvmVersion = LlvmVersion::V11_0;

/// Release selected for this build.
#[cfg(feature = "llvm11-0")]
pub const ACTIVE: LlvmVersion = LlvmVersion::V11_0;
#[cfg(feature = "llvm12-0")]
pub const ACTIVE: LlvmVersion = LlvmVersion::V12_0;
#[cfg(feature = "llvm13-0")]
pub const ACTIVE: LlvmVersion = LlvmVersion::V13_0;
#[cfg(feature = "llvm14-0")]
pub const ACTIVE: LlvmVersion = LlvmVersion::V14_0;
#[cfg(feature = "llvm15-0")]
pub const ACTIVE: LlvmVersion = LlvmVersion::V15_0;
#[cfg(feature = "llvm16-0")]
pub const ACTIVE: LlvmVersion = LlvmVersion::V16_0;
#[cfg(feature = "llvm17-0")]
pub const ACTIVE: LlvmVersion = LlvmVersion::V17_0;
#[cfg(feature = "llvm18-1")]
pub const ACTIVE: LlvmVersion = LlvmVersion::V18_1;

const _: () = assert!(ACTIVE.at_least(MINIMUM), "llvm-facade requires LLVM 11.0 or newer");

/// Gate value recorded by the build script.
pub const BUILD_GATE: &str = env!("LLVM_FACADE_GATE");

/// `true` when the active release is `version` or newer.
pub const fn at_least(version: LlvmVersion) -> bool {
    ACTIVE.at_least(version)
}
