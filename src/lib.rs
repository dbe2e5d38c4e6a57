//! Register a Win32 window class and create one visible, top-level window.
//!
//! The whole job is [`Win32Window::create`]: register the caller's class
//! descriptor, ask the OS for an overlapped window of that class, and wrap
//! the returned handle. Message loops, resizing, DPI handling and window
//! destruction stay with the caller.
//!
//! The class registry and window table are process-wide OS state. This crate
//! never initialises or tears them down, and a class registered by a call
//! whose window creation then fails is left registered.

// ── Safety policy ────────────────────────────────────────────────────────────
// Unsafe code is forbidden everywhere except `platform::win32` (Win32 FFI).
// Each unsafe block in that module MUST carry a `// SAFETY:` comment.
#![deny(unsafe_code)]

pub mod error;
pub mod platform;
pub mod settings;

pub use error::{Result, WindowError};
pub use settings::{WindowSettings, USE_DEFAULT};

#[cfg(windows)]
pub use platform::win32::{class::WindowClass, window::Win32Window};
