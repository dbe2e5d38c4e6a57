// ── Demo client ───────────────────────────────────────────────────────────────
//
// Plays the part of the code that owns a `Win32Window`: supplies the message
// procedure, creates the window, and runs the message loop until it closes.
// None of this lives in the library.

#![allow(unsafe_code)]

use std::path::Path;

use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::{HWND, LPARAM, LRESULT, WPARAM},
        UI::WindowsAndMessaging::{
            DefWindowProcW, DispatchMessageW, GetMessageW, MessageBoxW, PostQuitMessage,
            TranslateMessage, MB_ICONERROR, MB_OK, MSG, WM_DESTROY,
        },
    },
};

use win32_window::{
    platform::{wide::to_wide, win32::last_error},
    Result, Win32Window, WindowClass, WindowSettings,
};

/// Load settings (first CLI argument, if any), create the window, and drive
/// the message loop until the user closes it.
pub(crate) fn run() -> Result<()> {
    #[cfg(debug_assertions)]
    let t0 = std::time::Instant::now();

    let settings = match std::env::args_os().nth(1) {
        Some(path) => WindowSettings::load(Path::new(&path))?,
        None => demo_settings(),
    };

    let class = WindowClass::new(&settings.class_name, Some(wnd_proc))?;
    let window = Win32Window::try_create(
        class.as_raw(),
        &settings.title,
        settings.width_in_pixels(),
        settings.height_in_pixels(),
    )?;

    log::info!("window {:?} visible", window.handle().0);
    #[cfg(debug_assertions)]
    log::debug!("startup took {:.1} ms", t0.elapsed().as_secs_f64() * 1000.0);

    message_loop()
}

fn demo_settings() -> WindowSettings {
    WindowSettings {
        class_name: "SampleClass".to_owned(),
        title: "Hello".to_owned(),
        width: Some(800),
        height: Some(600),
    }
}

/// Show a modal error dialog with no owner window.
pub(crate) fn show_error_dialog(title: &str, message: &str) {
    let msg_wide = to_wide(message);
    let title_wide = to_wide(title);

    // SAFETY: msg_wide and title_wide are valid NUL-terminated UTF-16 strings
    // that remain allocated for the duration of the MessageBoxW call.
    // The pressed button is irrelevant for an error dialog.
    unsafe {
        let _ = MessageBoxW(
            HWND::default(),
            PCWSTR(msg_wide.as_ptr()),
            PCWSTR(title_wide.as_ptr()),
            MB_OK | MB_ICONERROR,
        );
    }
}

// ── Message loop ──────────────────────────────────────────────────────────────

fn message_loop() -> Result<()> {
    let mut msg = MSG::default();

    loop {
        // SAFETY: &mut msg is a valid MSG pointer; HWND::default() retrieves
        // messages for all windows on this thread; 0,0 filter accepts all.
        let ret = unsafe { GetMessageW(&mut msg, HWND::default(), 0, 0) };

        match ret.0 {
            -1 => return Err(last_error("GetMessageW")),
            // WM_QUIT.
            0 => break,
            _ => unsafe {
                // SAFETY: msg was populated by a successful GetMessageW call.
                let _ = TranslateMessage(&msg);
                let _ = DispatchMessageW(&msg);
            },
        }
    }

    Ok(())
}

// ── Window procedure ──────────────────────────────────────────────────────────

// SAFETY: registered as lpfnWndProc; Windows guarantees the arguments are
// valid for the duration of the call.
unsafe extern "system" fn wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_DESTROY => {
            PostQuitMessage(0);
            LRESULT(0)
        }
        // WM_CLOSE falls through: DefWindowProcW destroys the window.
        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}
