/// Encode `s` as NUL-terminated UTF-16 for the `…W` Win32 entry points.
///
/// An interior NUL ends the string as far as the OS is concerned.
pub fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}
