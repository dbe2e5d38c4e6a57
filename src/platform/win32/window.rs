// ── Top-level window factory ──────────────────────────────────────────────────
//
// Responsibilities in this file (unsafe confined here):
//   • Register a caller-supplied window class.
//   • Create a visible, overlapped, top-level window of that class.
//   • Hand the resulting HWND to the caller inside `Win32Window`.
//
// Not handled here: the message loop, resizing, DPI adjustment, destruction.
// A class registered by a call whose window creation then fails stays
// registered; there is no rollback.

#![allow(unsafe_code)]

use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::{HWND, WIN32_ERROR},
        UI::WindowsAndMessaging::{
            CreateWindowExW, RegisterClassExW, CW_USEDEFAULT, HMENU, WINDOW_EX_STYLE,
            WNDCLASSEXW, WS_OVERLAPPEDWINDOW, WS_VISIBLE,
        },
    },
};

use crate::{
    error::{Result, WindowError},
    platform::{win32::last_error, wide::to_wide},
    settings::WindowSettings,
};

/// `RegisterClassExW` returns this atom on failure.
const FAILED_CLASS_ATOM: u16 = 0;

/// A window created by [`Win32Window::create`].
///
/// Owns the handle value only. Dropping a `Win32Window` does not destroy the
/// OS window; callers that need deterministic cleanup call `DestroyWindow`
/// on [`handle`](Self::handle) themselves.
#[derive(Debug)]
pub struct Win32Window {
    handle: HWND,
}

impl Win32Window {
    /// Register `window_class`, then create and show a window of that class.
    ///
    /// `width_in_pixels` / `height_in_pixels` may be [`crate::USE_DEFAULT`]
    /// to let the OS choose. Returns `None` if either step fails; use
    /// [`try_create`](Self::try_create) to learn which.
    pub fn create(
        window_class: &WNDCLASSEXW,
        window_title: &str,
        width_in_pixels: i32,
        height_in_pixels: i32,
    ) -> Option<Self> {
        Self::try_create(window_class, window_title, width_in_pixels, height_in_pixels).ok()
    }

    /// Same as [`create`](Self::create), but reports the failing Win32 call.
    pub fn try_create(
        window_class: &WNDCLASSEXW,
        window_title: &str,
        width_in_pixels: i32,
        height_in_pixels: i32,
    ) -> Result<Self> {
        register_class(window_class)?;
        let handle = create_window(window_class, window_title, width_in_pixels, height_in_pixels)?;
        Ok(Self { handle })
    }

    /// Create a window using the title and size from `settings`.
    ///
    /// `settings.class_name` is not consulted; the class name comes from
    /// `window_class`.
    pub fn from_settings(window_class: &WNDCLASSEXW, settings: &WindowSettings) -> Option<Self> {
        Self::create(
            window_class,
            &settings.title,
            settings.width_in_pixels(),
            settings.height_in_pixels(),
        )
    }

    /// The OS handle. Valid when this value was constructed; the OS or other
    /// code may invalidate it later.
    pub fn handle(&self) -> HWND {
        self.handle
    }
}

// ── Class registration ────────────────────────────────────────────────────────

fn register_class(window_class: &WNDCLASSEXW) -> Result<()> {
    // SAFETY: window_class is a live WNDCLASSEXW borrowed for the call; the OS
    // validates its contents and copies what it keeps.
    let atom = unsafe { RegisterClassExW(window_class) };
    if atom == FAILED_CLASS_ATOM {
        let err = last_error("RegisterClassExW");
        log::debug!("window class registration failed: {err}");
        return Err(err);
    }

    log::debug!("registered window class (atom {atom:#06x})");
    Ok(())
}

// ── Window creation ───────────────────────────────────────────────────────────

fn create_window(
    window_class: &WNDCLASSEXW,
    window_title: &str,
    width_in_pixels: i32,
    height_in_pixels: i32,
) -> Result<HWND> {
    let title = to_wide(window_title);

    // SAFETY: the class named by lpszClassName was just registered for
    // hInstance; `title` is NUL-terminated and outlives the call.
    // HWND::default() (null parent) makes a top-level window; HMENU::default()
    // means no menu; None means no creation parameter.
    let created = unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE(0),
            window_class.lpszClassName,
            PCWSTR(title.as_ptr()),
            WS_OVERLAPPEDWINDOW | WS_VISIBLE,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            width_in_pixels,
            height_in_pixels,
            HWND::default(),
            HMENU::default(),
            window_class.hInstance,
            None,
        )
    };

    // A null handle already arrives as Err.
    match created {
        Ok(hwnd) => {
            log::debug!("created window {:?} ({width_in_pixels}x{height_in_pixels})", hwnd.0);
            Ok(hwnd)
        }
        Err(e) => {
            let err = WindowError::Win32 {
                function: "CreateWindowExW",
                code: win32_code(&e),
            };
            log::debug!("window creation failed: {err}");
            Err(err)
        }
    }
}

/// Recover the `GetLastError` value wrapped in a windows-crate error, so both
/// failure points report the same kind of code. Non-Win32 HRESULTs pass
/// through as their raw bits.
fn win32_code(e: &windows::core::Error) -> u32 {
    WIN32_ERROR::from_error(e).map_or(e.code().0 as u32, |w| w.0)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
//
// These create real windows on the test thread. Each test uses its own class
// name because the class registry is process-wide.
