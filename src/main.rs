// Release builds run as a GUI application (no console window).
// Debug builds keep the console so that log output is visible.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![deny(unsafe_code)]

#[cfg(windows)]
mod client;

#[cfg(windows)]
fn main() {
    env_logger::init();

    if let Err(e) = client::run() {
        log::error!("{e}");
        // The only reliable output path in a GUI-subsystem binary.
        client::show_error_dialog("hello-window: fatal error", &e.to_string());
        std::process::exit(1);
    }
}

#[cfg(not(windows))]
fn main() {
    env_logger::init();
    log::error!("hello-window only runs on Windows");
    std::process::exit(1);
}
