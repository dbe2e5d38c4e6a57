// ── Platform layer ────────────────────────────────────────────────────────────
//
// All Win32 FFI is confined to the `win32` sub-module, which only exists on
// Windows targets.  `wide` is pure Rust and builds everywhere.

pub mod wide;

#[cfg(windows)]
pub mod win32;
