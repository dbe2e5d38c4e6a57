// ── Win32 platform implementation ─────────────────────────────────────────────
//
// The only library module where `unsafe` code is permitted.  Every `unsafe`
// block MUST carry a `// SAFETY:` comment that states:
//   • which invariant makes the operation sound, and
//   • what the caller is responsible for maintaining.
//
// The class registry and window table touched here are process-wide OS state.
// Nothing in this crate initialises or tears them down; the OS owns their
// lifecycle.

#![allow(unsafe_code)]

use windows::Win32::Foundation::GetLastError;

use crate::error::WindowError;

pub mod class;
pub mod window;

/// Capture the current Win32 last-error code and wrap it in a `WindowError`.
///
/// Call immediately after a Win32 function that signals failure; `GetLastError`
/// reads thread-local state that any subsequent API call can overwrite.
pub fn last_error(function: &'static str) -> WindowError {
    // SAFETY: GetLastError reads thread-local state set by the last Win32 call.
    // It is always safe to call and never fails.
    let code = unsafe { GetLastError() };
    WindowError::Win32 {
        function,
        code: code.0,
    }
}
