// Target back-end registry. LLVM 14 moved the registry from Support into MC, which only
// matters to C++ consumers; the C API and inkwell expose it identically across every
// supported release, so the re-exports below are unconditional. The helpers wrap the
// fallible registry calls in FacadeError without rewording LLVM's messages. x86 and
// AArch64 are always built in; Hexagon and WebAssembly only exist when their Cargo
// feature is on, and nothing outside those cfg blocks names them.

//! Target registry and initialization helpers.

use log::debug;

use crate::error::{FacadeError, FacadeResult};

pub use inkwell::targets::{
    CodeModel, FileType, InitializationConfig, RelocMode, Target, TargetData, TargetMachine,
    TargetTriple,
};
use inkwell::OptimizationLevel;

/// Initialize the host target.
pub fn initialize_native(config: &InitializationConfig) -> FacadeResult<()> {
    debug!("initializing native target");
    Target::initialize_native(config).map_err(FacadeError::TargetInit)
}

/// Initialize every back-end this build carries.
pub fn initialize_builtin(config: &InitializationConfig) {
    debug!("initializing x86 and aarch64 targets");
    Target::initialize_x86(config);
    Target::initialize_aarch64(config);

    #[cfg(feature = "hexagon")]
    {
        debug!("initializing hexagon target");
        Target::initialize_hexagon(config);
    }

    #[cfg(feature = "webassembly")]
    {
        debug!("initializing webassembly target");
        Target::initialize_webassembly(config);
    }
}

/// Find a registered target by triple.
pub fn lookup_target(triple: &str) -> FacadeResult<Target> {
    let target_triple = TargetTriple::create(triple);
    Target::from_triple(&target_triple).map_err(|err| FacadeError::UnknownTarget {
        triple: triple.to_string(),
        reason: err.to_string_lossy().into_owned(),
    })
}

/// Target machine for the host triple, CPU and features.
///
/// The native target must already be initialized.
pub fn host_machine(level: OptimizationLevel) -> FacadeResult<TargetMachine> {
    let triple = TargetMachine::get_default_triple();
    let triple_text = triple.as_str().to_string_lossy().into_owned();
    let target = lookup_target(&triple_text)?;
    let cpu = TargetMachine::get_host_cpu_name().to_string_lossy().into_owned();
    let features = TargetMachine::get_host_cpu_features().to_string_lossy().into_owned();

    debug!("creating target machine for {triple_text} (cpu {cpu})");
    target
        .create_target_machine(
            &triple,
            &cpu,
            &features,
            level,
            RelocMode::PIC,
            CodeModel::Default,
        )
        .ok_or(FacadeError::MachineCreation {
            triple: triple_text,
            cpu,
        })
}

#[cfg(feature = "hexagon")]
pub const HEXAGON_TRIPLE: &str = "hexagon-unknown-linux-musl";

/// Look up a Hexagon intrinsic by its short name (`"V6.vaddw"` names
/// `llvm.hexagon.V6.vaddw`).
#[cfg(feature = "hexagon")]
pub fn hexagon_intrinsic(name: &str) -> Option<inkwell::intrinsics::Intrinsic> {
    inkwell::intrinsics::Intrinsic::find(&format!("llvm.hexagon.{name}"))
}

#[cfg(feature = "webassembly")]
pub const WASM32_TRIPLE: &str = "wasm32-unknown-unknown";
