//! Scoped installation of LLVM's fatal error handler.
//!
//! The handler is process-wide state inside LLVM. [`FatalErrorHandlerGuard`]
//! installs one and puts LLVM back on its default handler when dropped, on
//! normal exit and during unwinding alike. LLVM offers no way to read the
//! current handler, so guards must not overlap: dropping any guard clears the
//! handler for the whole process, including one installed by another guard.

use std::ffi::{c_char, CStr};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, warn};

// Guards currently alive anywhere in the process.
static LIVE_GUARDS: AtomicUsize = AtomicUsize::new(0);

use crate::llvm::error_handling::{LLVMInstallFatalErrorHandler, LLVMResetFatalErrorHandler};

/// Signature LLVM calls with the fatal error reason.
pub type FatalErrorHandler = extern "C" fn(reason: *const c_char);

/// Keeps a fatal error handler installed for its lifetime.
///
/// LLVM keeps one handler for the whole process, so at most one guard should be
/// alive at a time, on any thread. Installing a second guard replaces the first
/// handler, and dropping either guard resets LLVM to its default handler while
/// the other is still alive. Overlapping installs are logged as warnings.
#[must_use = "the handler is removed as soon as the guard is dropped"]
pub struct FatalErrorHandlerGuard {
    // Not `Send`, so a guard is dropped in the scope that created it.
    _not_send: PhantomData<*const ()>,
}

impl FatalErrorHandlerGuard {
    pub fn install(handler: FatalErrorHandler) -> Self {
        debug!("installing LLVM fatal error handler");
        let already_live = LIVE_GUARDS.fetch_add(1, Ordering::SeqCst);
        if already_live > 0 {
            warn!("LLVM fatal error handler replaced while {already_live} guard(s) are live");
        }
        // SAFETY: `handler` is a plain `extern "C"` function valid for the whole program.
        unsafe { LLVMInstallFatalErrorHandler(Some(handler)) };
        Self {
            _not_send: PhantomData,
        }
    }
}

impl Drop for FatalErrorHandlerGuard {
    fn drop(&mut self) {
        debug!("restoring default LLVM fatal error handler");
        // SAFETY: resetting only clears the hook installed above.
        unsafe { LLVMResetFatalErrorHandler() };
        LIVE_GUARDS.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Number of [`FatalErrorHandlerGuard`]s alive in the process.
pub fn live_guards() -> usize {
    LIVE_GUARDS.load(Ordering::SeqCst)
}

/// Run `f` with `handler` installed, restoring the default afterwards.
pub fn with_fatal_error_handler<R>(handler: FatalErrorHandler, f: impl FnOnce() -> R) -> R {
    let _guard = FatalErrorHandlerGuard::install(handler);
    f()
}

/// Read the reason LLVM passes to a [`FatalErrorHandler`].
///
/// # Safety
///
/// `reason` must be null or a valid NUL-terminated string.
pub unsafe fn fatal_reason(reason: *const c_char) -> String {
    if reason.is_null() {
        return String::new();
    }
    CStr::from_ptr(reason).to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic;
    use std::sync::{Mutex, MutexGuard};

    // The handler is process-wide; tests that install it run one at a time.
    static SERIAL: Mutex<()> = Mutex::new(());

    fn serial() -> MutexGuard<'static, ()> {
        SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    extern "C" fn ignore(_reason: *const c_char) {}

    #[test]
    fn guard_can_be_installed_repeatedly() {
        let _serial = serial();
        {
            let _guard = FatalErrorHandlerGuard::install(ignore);
            assert_eq!(live_guards(), 1);
        }
        assert_eq!(live_guards(), 0);
        let value = with_fatal_error_handler(ignore, live_guards);
        assert_eq!(value, 1);
        assert_eq!(live_guards(), 0);
    }

    #[test]
    fn overlapping_guards_are_counted() {
        let _serial = serial();
        let outer = FatalErrorHandlerGuard::install(ignore);
        let inner = FatalErrorHandlerGuard::install(ignore);
        assert_eq!(live_guards(), 2);
        drop(inner);
        assert_eq!(live_guards(), 1);
        drop(outer);
        assert_eq!(live_guards(), 0);
    }

    #[test]
    fn guard_drops_while_unwinding() {
        let _serial = serial();
        let result = panic::catch_unwind(|| {
            with_fatal_error_handler(ignore, || panic!("boom"));
        });
        assert!(result.is_err());
        assert_eq!(live_guards(), 0);
        // A fresh install after unwinding still works.
        drop(FatalErrorHandlerGuard::install(ignore));
    }

    #[test]
    fn reason_is_decoded() {
        let text = c"out of memory";
        assert_eq!(unsafe { fatal_reason(text.as_ptr()) }, "out of memory");
        assert_eq!(unsafe { fatal_reason(std::ptr::null()) }, "");
    }
}
