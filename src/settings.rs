// ── Window settings ───────────────────────────────────────────────────────────
//
// Plain data describing what window to create, loadable from a JSON file.
// No `unsafe`, no Win32 imports; usable on every platform.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Size sentinel asking the OS to pick the dimension itself.
///
/// Same bit pattern as Win32 `CW_USEDEFAULT` (`0x80000000`).
pub const USE_DEFAULT: i32 = i32::MIN;

const DEFAULT_CLASS_NAME: &str = "Win32WindowClass";

/// What to create: class name, title text and optional outer window size.
///
/// Every field may be omitted from the JSON; missing sizes mean "let the OS
/// choose". Sizes are passed through unchecked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub class_name: String,
    pub title: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            class_name: DEFAULT_CLASS_NAME.to_owned(),
            title: String::new(),
            width: None,
            height: None,
        }
    }
}

impl WindowSettings {
    /// Read settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read(path)?;
        let settings = serde_json::from_slice(&data)?;
        log::debug!("loaded window settings from {}", path.display());
        Ok(settings)
    }

    /// Width to hand to the OS, or [`USE_DEFAULT`] when unset.
    pub fn width_in_pixels(&self) -> i32 {
        self.width.unwrap_or(USE_DEFAULT)
    }

    /// Height to hand to the OS, or [`USE_DEFAULT`] when unset.
    pub fn height_in_pixels(&self) -> i32 {
        self.height.unwrap_or(USE_DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WindowError;

    #[test]
    fn empty_object_gives_defaults() {
        let s: WindowSettings = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(s, WindowSettings::default());
        assert_eq!(s.class_name, "Win32WindowClass");
        assert_eq!(s.title, "");
    }

    #[test]
    fn missing_sizes_map_to_sentinel() {
        let s = WindowSettings::default();
        assert_eq!(s.width_in_pixels(), USE_DEFAULT);
        assert_eq!(s.height_in_pixels(), USE_DEFAULT);
    }

    #[test]
    fn explicit_sizes_pass_through() {
        let json = r#"{"class_name":"SampleClass","title":"Hello","width":800,"height":600}"#;
        let s: WindowSettings = serde_json::from_str(json).expect("deserialize");
        assert_eq!(s.class_name, "SampleClass");
        assert_eq!(s.title, "Hello");
        assert_eq!(s.width_in_pixels(), 800);
        assert_eq!(s.height_in_pixels(), 600);
    }

    /// No bounds validation: negative values reach the OS untouched.
    #[test]
    fn negative_sizes_are_not_clamped() {
        let s: WindowSettings = serde_json::from_str(r#"{"width":-5}"#).expect("deserialize");
        assert_eq!(s.width_in_pixels(), -5);
        assert_eq!(s.height_in_pixels(), USE_DEFAULT);
    }

    #[test]
    fn roundtrip_keeps_every_field() {
        let s = WindowSettings {
            class_name: "SampleClass".to_owned(),
            title: "Hello".to_owned(),
            width: Some(800),
            height: None,
        };
        let json = serde_json::to_string(&s).expect("serialize");
        let s2: WindowSettings = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(s2, s);
        assert_eq!(s2.height_in_pixels(), USE_DEFAULT);
    }

    #[test]
    fn sentinel_matches_cw_usedefault_bits() {
        assert_eq!(USE_DEFAULT as u32, 0x8000_0000);
    }

    #[cfg(windows)]
    #[test]
    fn sentinel_equals_win32_constant() {
        assert_eq!(
            USE_DEFAULT,
            windows::Win32::UI::WindowsAndMessaging::CW_USEDEFAULT
        );
    }

    #[test]
    fn load_reads_json_file() {
        let path = std::env::temp_dir().join(format!(
            "win32-window-settings-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{"title":"From disk","height":480}"#).expect("write");
        let s = WindowSettings::load(&path).expect("load");
        let _ = fs::remove_file(&path);

        assert_eq!(s.title, "From disk");
        assert_eq!(s.width, None);
        assert_eq!(s.height, Some(480));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("win32-window-settings-does-not-exist.json");
        let err = WindowSettings::load(&path).unwrap_err();
        assert!(matches!(err, WindowError::Io(_)));
    }
}
