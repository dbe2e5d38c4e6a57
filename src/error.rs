// ── Central error type ────────────────────────────────────────────────────────
//
// Fallible operations return `error::Result<T>`.  The window factory's public
// contract (`Win32Window::create`) still collapses every failure to `None`;
// `Win32Window::try_create` is the path that keeps the detail.

/// Every error this crate can produce.
#[derive(Debug)]
pub enum WindowError {
    /// A Win32 API call returned a failure code.
    Win32 {
        /// The name of the failing function, for display purposes.
        function: &'static str,
        /// The raw Win32 error code (`GetLastError()` value) or HRESULT.
        code: u32,
    },

    /// Reading a settings file failed.
    Io(std::io::Error),

    /// A settings file was not valid JSON for `WindowSettings`.
    Settings(serde_json::Error),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win32 { function, code } => {
                write!(f, "{function} failed (error {code:#010x})")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Settings(e) => write!(f, "invalid window settings: {e}"),
        }
    }
}

impl std::error::Error for WindowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Settings(e) => Some(e),
            Self::Win32 { .. } => None,
        }
    }
}

impl From<std::io::Error> for WindowError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for WindowError {
    fn from(e: serde_json::Error) -> Self {
        Self::Settings(e)
    }
}

// Lets `?` work on `windows::core::Result<T>` inside the platform module.
#[cfg(windows)]
impl From<windows::core::Error> for WindowError {
    fn from(e: windows::core::Error) -> Self {
        // HRESULT.0 is i32; Win32 errors appear as 0x8007xxxx.
        Self::Win32 {
            function: "windows",
            code: e.code().0 as u32,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WindowError>;
