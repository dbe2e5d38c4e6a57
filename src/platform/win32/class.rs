// ── Window class descriptor ───────────────────────────────────────────────────
//
// Builds a ready-to-register `WNDCLASSEXW` for the current module.  Callers
// that already have their own descriptor can skip this and pass it straight
// to `Win32Window::create`.

#![allow(unsafe_code)]

use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::HINSTANCE,
        Graphics::Gdi::{GetStockObject, HBRUSH, WHITE_BRUSH},
        System::LibraryLoader::GetModuleHandleW,
        UI::WindowsAndMessaging::{
            LoadCursorW, LoadIconW, CS_HREDRAW, CS_VREDRAW, IDC_ARROW, IDI_APPLICATION,
            WNDCLASSEXW, WNDPROC,
        },
    },
};

use crate::{error::Result, platform::wide::to_wide};

/// An owned class-registration record.
///
/// Holds the UTF-16 class name that `lpszClassName` points into, so the raw
/// descriptor stays valid for as long as this value lives.
pub struct WindowClass {
    name: Vec<u16>,
    raw: WNDCLASSEXW,
}

impl WindowClass {
    /// Describe a class called `name` whose messages go to `wnd_proc`.
    ///
    /// Uses the stock application icon, the arrow cursor and a white
    /// background; `CS_HREDRAW | CS_VREDRAW` repaint on resize.
    pub fn new(name: &str, wnd_proc: WNDPROC) -> Result<Self> {
        // SAFETY: GetModuleHandleW(None) returns the calling executable's own
        // HMODULE, valid for the lifetime of the process.
        let hmodule = unsafe { GetModuleHandleW(None) }?;
        // HINSTANCE and HMODULE carry the same value on Windows.
        let hinstance = HINSTANCE(hmodule.0);

        // SAFETY: IDI_APPLICATION is a built-in icon resource present on every
        // Windows version.
        let icon = unsafe { LoadIconW(None, IDI_APPLICATION) }?;

        // SAFETY: IDC_ARROW is a built-in cursor resource.
        let cursor = unsafe { LoadCursorW(None, IDC_ARROW) }?;

        // SAFETY: GetStockObject with WHITE_BRUSH always returns a valid
        // HGDIOBJ; stock brushes may be used as HBRUSH.
        let background = unsafe { HBRUSH(GetStockObject(WHITE_BRUSH).0) };

        let name = to_wide(name);
        let raw = WNDCLASSEXW {
            // WNDCLASSEXW is ~80 bytes; the cast to u32 is lossless.
            cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: wnd_proc,
            cbClsExtra: 0,
            cbWndExtra: 0,
            hInstance: hinstance,
            hIcon: icon,
            hCursor: cursor,
            hbrBackground: background,
            lpszMenuName: PCWSTR::null(),
            // Points into the Vec's heap buffer, which does not move with `Self`.
            lpszClassName: PCWSTR(name.as_ptr()),
            hIconSm: icon,
        };

        Ok(Self { name, raw })
    }

    /// The descriptor in the layout `RegisterClassExW` expects.
    pub fn as_raw(&self) -> &WNDCLASSEXW {
        &self.raw
    }

    /// NUL-terminated class name, valid while `self` lives.
    pub fn name(&self) -> PCWSTR {
        PCWSTR(self.name.as_ptr())
    }

    /// Module instance the class is registered under.
    pub fn instance(&self) -> HINSTANCE {
        self.raw.hInstance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use windows::Win32::{
        Foundation::{HWND, LPARAM, LRESULT, WPARAM},
        UI::WindowsAndMessaging::DefWindowProcW,
    };

    unsafe extern "system" fn passthrough(
        hwnd: HWND,
        msg: u32,
        wparam: WPARAM,
        lparam: LPARAM,
    ) -> LRESULT {
        DefWindowProcW(hwnd, msg, wparam, lparam)
    }

    #[test]
    fn descriptor_is_fully_populated() {
        let class = WindowClass::new("DescriptorProbe", Some(passthrough)).expect("class");
        let raw = class.as_raw();

        assert_eq!(raw.cbSize as usize, std::mem::size_of::<WNDCLASSEXW>());
        assert_eq!(raw.style, CS_HREDRAW | CS_VREDRAW);
        assert!(raw.lpfnWndProc.is_some());
        assert!(!raw.hInstance.0.is_null());
        assert!(!raw.hIcon.0.is_null());
        assert!(!raw.hCursor.0.is_null());
        assert_eq!(raw.lpszClassName, class.name());
        assert_eq!(class.instance(), raw.hInstance);
    }

    #[test]
    fn class_name_survives_move() {
        let class = WindowClass::new("MovedClass", None).expect("class");
        let moved = Box::new(class);

        // SAFETY: lpszClassName points at the NUL-terminated buffer owned by
        // `moved`, which is still alive.
        let name = unsafe { moved.as_raw().lpszClassName.to_string() }.expect("utf-16");
        assert_eq!(name, "MovedClass");
    }
}
