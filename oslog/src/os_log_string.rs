use std::borrow::Cow;
use std::ffi::{CStr, CString};

/// Text that can be handed to the platform as a NUL-terminated string.
///
/// Rust strings may contain NUL bytes, C strings may not. A string with an
/// interior NUL is passed as the empty string rather than failing the call.
pub trait OsLogString {
    /// Calls `f` with a C string view of `self`.
    fn with_cstr<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CStr) -> R;
}

impl OsLogString for CStr {
    fn with_cstr<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CStr) -> R,
    {
        f(self)
    }
}

impl OsLogString for CString {
    fn with_cstr<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CStr) -> R,
    {
        f(self.as_c_str())
    }
}

impl OsLogString for str {
    fn with_cstr<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CStr) -> R,
    {
        f(CString::new(self).unwrap_or_default().as_c_str())
    }
}

impl OsLogString for String {
    fn with_cstr<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CStr) -> R,
    {
        self.as_str().with_cstr(f)
    }
}

impl OsLogString for Cow<'_, str> {
    fn with_cstr<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CStr) -> R,
    {
        (**self).with_cstr(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<S: OsLogString + ?Sized>(s: &S) -> Vec<u8> {
        s.with_cstr(|c| c.to_bytes().to_vec())
    }

    #[test]
    fn test_plain_str() {
        assert_eq!(collect("hello"), b"hello");
        assert_eq!(collect(&String::from("hello")), b"hello");
    }

    #[test]
    fn test_empty_str() {
        assert_eq!(collect(""), b"");
    }

    #[test]
    fn test_interior_nul_becomes_empty() {
        assert_eq!(collect("Hi\0test"), b"");
        assert_eq!(collect("\0leading"), b"");
        assert_eq!(collect(&String::from("trailing\0")), b"");
    }

    #[test]
    fn test_format_metacharacters_are_untouched() {
        assert_eq!(collect("%s %n %{public}@ %%"), b"%s %n %{public}@ %%");
    }

    #[test]
    fn test_c_strings_pass_through() {
        let owned = CString::new("owned").unwrap();
        assert_eq!(collect(&owned), b"owned");
        assert_eq!(collect(c"borrowed"), b"borrowed");
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(collect("\u{1F601}"), "\u{1F601}".as_bytes());
    }
}
