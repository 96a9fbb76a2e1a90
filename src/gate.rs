// This module holds the version gate shared by the build script and the library. The
// build script includes it through `#[path]` to resolve the enabled `llvmNN-M` Cargo
// features into a single gate value (MAJOR*10+MINOR) and to emit the monotonic
// `llvm_at_least_*` cfg predicates; the library reuses the same tables and parser so
// runtime version strings are judged by exactly the rules the build applied. Resolution
// fails for no selection, a retired release, or more than one selection.

//! Build-time version gate.
//!
//! Only depends on `std` and `thiserror` so it can be compiled into `build.rs`.

use std::fmt;
use thiserror::Error;

/// Lowest supported gate value (LLVM 11.0).
pub const MINIMUM: Gate = Gate(110);

/// Supported releases as `(feature, gate)`, oldest first.
pub const SUPPORTED: &[(&str, u32)] = &[
    ("llvm11-0", 110),
    ("llvm12-0", 120),
    ("llvm13-0", 130),
    ("llvm14-0", 140),
    ("llvm15-0", 150),
    ("llvm16-0", 160),
    ("llvm17-0", 170),
    ("llvm18-1", 181),
];

/// Releases that still have a feature so selecting them can be rejected by name.
pub const RETIRED: &[(&str, u32)] = &[("llvm8-0", 80), ("llvm9-0", 90), ("llvm10-0", 100)];

/// A `MAJOR*10+MINOR` version value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gate(pub u32);

impl Gate {
    pub const fn major(self) -> u32 {
        self.0 / 10
    }

    pub const fn minor(self) -> u32 {
        self.0 % 10
    }

    /// Name of the cfg predicate that holds when the active release is at least `self`.
    pub fn predicate(self) -> String {
        format!("llvm_at_least_{}_{}", self.major(), self.minor())
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major(), self.minor())
    }
}

/// Errors produced while resolving or parsing an LLVM version.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    #[error("no LLVM version selected: enable one `llvmNN-M` feature (LLVM {minimum} or newer is required)")]
    NoVersionSelected { minimum: Gate },

    #[error("`{requested}` selects LLVM {found}, but LLVM {minimum} or newer is required")]
    BelowMinimum {
        requested: String,
        found: Gate,
        minimum: Gate,
    },

    #[error("`{requested}` selects LLVM {found}, which is not a supported release")]
    Unsupported { requested: String, found: Gate },

    #[error("malformed LLVM version `{0}`")]
    Malformed(String),

    #[error("conflicting LLVM versions selected: {}", .0.join(", "))]
    Conflicting(Vec<String>),

    #[error("LLVM_FACADE_EXPECT_VERSION asks for LLVM {expected} but the enabled feature selects LLVM {selected}")]
    ExpectationMismatch { expected: Gate, selected: Gate },
}

/// Turn a `CARGO_FEATURE_*` suffix back into the feature name (`LLVM14_0` -> `llvm14-0`).
pub fn feature_from_env(suffix: &str) -> String {
    suffix.to_ascii_lowercase().replace('_', "-")
}

/// Resolve the enabled features to the single active gate value.
///
/// Names that are not version features are ignored.
pub fn resolve<I, S>(features: I) -> Result<Gate, GateError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut selected = Vec::new();
    for feature in features {
        let feature = feature.as_ref();
        if let Some(&(name, gate)) = RETIRED.iter().find(|(name, _)| *name == feature) {
            return Err(GateError::BelowMinimum {
                requested: name.to_string(),
                found: Gate(gate),
                minimum: MINIMUM,
            });
        }
        if let Some(&(name, gate)) = SUPPORTED.iter().find(|(name, _)| *name == feature) {
            selected.push((name, gate));
        }
    }

    match selected.as_slice() {
        [] => Err(GateError::NoVersionSelected { minimum: MINIMUM }),
        [(_, gate)] => Ok(Gate(*gate)),
        many => {
            let mut names: Vec<String> = many.iter().map(|(name, _)| name.to_string()).collect();
            names.sort();
            Err(GateError::Conflicting(names))
        }
    }
}

/// Every predicate any supported build may emit.
pub fn all_predicates() -> Vec<String> {
    SUPPORTED.iter().map(|&(_, gate)| Gate(gate).predicate()).collect()
}

/// Predicates holding for `active`: one per supported release at or below it.
pub fn predicates(active: Gate) -> Vec<String> {
    SUPPORTED
        .iter()
        .map(|&(_, gate)| Gate(gate))
        .take_while(|gate| *gate <= active)
        .map(Gate::predicate)
        .collect()
}

/// Parse `"14"`, `"14.0"` or `"14.0.6"` into a supported gate value.
///
/// The patch component is ignored. A bare major picks the only supported
/// minor of that major (`"18"` is 18.1).
pub fn parse(text: &str) -> Result<Gate, GateError> {
    let malformed = || GateError::Malformed(text.to_string());
    let trimmed = text.trim();
    let mut parts = trimmed.split('.');

    let major: u32 = parts
        .next()
        .filter(|part| !part.is_empty())
        .and_then(|part| part.parse().ok())
        .ok_or_else(malformed)?;
    let minor: Option<u32> = match parts.next() {
        Some(part) => Some(part.parse().map_err(|_| malformed())?),
        None => None,
    };
    if let Some(patch) = parts.next() {
        patch.parse::<u32>().map_err(|_| malformed())?;
    }
    if parts.next().is_some() || minor.is_some_and(|minor| minor > 9) {
        return Err(malformed());
    }

    // A gate that does not fit in `u32` names no release at all.
    let found = match minor {
        Some(minor) => major
            .checked_mul(10)
            .and_then(|gate| gate.checked_add(minor))
            .map(Gate)
            .ok_or_else(malformed)?,
        None => match SUPPORTED
            .iter()
            .map(|&(_, gate)| Gate(gate))
            .find(|gate| gate.major() == major)
        {
            Some(gate) => gate,
            None => major.checked_mul(10).map(Gate).ok_or_else(malformed)?,
        },
    };

    if found < MINIMUM {
        return Err(GateError::BelowMinimum {
            requested: trimmed.to_string(),
            found,
            minimum: MINIMUM,
        });
    }
    if !SUPPORTED.iter().any(|&(_, gate)| gate == found.0) {
        return Err(GateError::Unsupported {
            requested: trimmed.to_string(),
            found,
        });
    }
    Ok(found)
}

/// Check a version pinned through the environment against the selected one.
pub fn check_expectation(expected: &str, selected: Gate) -> Result<(), GateError> {
    let expected = parse(expected)?;
    if expected != selected {
        return Err(GateError::ExpectationMismatch { expected, selected });
    }
    Ok(())
}
