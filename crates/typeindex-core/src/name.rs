//! Name codec shared by every backend.
//!
//! Turns a raw, possibly mangled and possibly unprintable type name into text
//! for humans. Every function here is pure over its input and can be called
//! from any thread without synchronization.
//!
//! Demangling is best effort: whenever the demangler declines a name, the raw
//! name is returned verbatim (lossily decoded if it is not UTF-8).
//!
//! # Examples
//!
//! ```
//! use typeindex_core::name;
//!
//! // Already readable names come back untouched.
//! assert_eq!(name::pretty(b"alloc::string::String"), "alloc::string::String");
//!
//! // Rust symbols are demangled.
//! assert_eq!(name::pretty(b"_ZN4core3ptr8drop_in_place17h0123456789abcdefE"), "core::ptr::drop_in_place");
//! ```

use std::borrow::Cow;
use std::ffi::{CStr, CString};

use crate::error::{NameError, Result};

/// A demangling facility.
///
/// Implementations report failures through [`NameError`]; callers of the codec
/// never see them.
pub trait Demangle: Send + Sync {
    /// Decode `symbol` into a readable name.
    fn demangle(&self, symbol: &str) -> Result<String>;
}

/// Demangler for Rust symbols (legacy `_ZN...E` and v0 `_R...` forms).
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolDemangler;

impl SymbolDemangler {
    fn looks_mangled(symbol: &str) -> bool {
        ["_ZN", "__ZN", "_R", "__R"]
            .iter()
            .any(|prefix| symbol.starts_with(prefix))
    }
}

impl Demangle for SymbolDemangler {
    fn demangle(&self, symbol: &str) -> Result<String> {
        if symbol.is_empty() {
            return Err(NameError::Empty);
        }
        match rustc_demangle::try_demangle(symbol) {
            // `{:#}` drops the trailing hash segment.
            Ok(demangled) => Ok(format!("{demangled:#}")),
            Err(_) if Self::looks_mangled(symbol) => Err(NameError::Malformed {
                name: symbol.to_string(),
                detail: "not a valid Rust symbol".to_string(),
            }),
            Err(_) => Err(NameError::NotMangled {
                name: symbol.to_string(),
            }),
        }
    }
}

/// Readable form of `raw` using the default [`SymbolDemangler`].
pub fn pretty(raw: &[u8]) -> Cow<'_, str> {
    pretty_with(raw, &SymbolDemangler)
}

/// Readable form of `raw` using `demangler`, falling back to `raw` verbatim.
pub fn pretty_with<'a>(raw: &'a [u8], demangler: &dyn Demangle) -> Cow<'a, str> {
    let text = match std::str::from_utf8(raw) {
        Ok(text) => text,
        Err(err) => {
            let err = NameError::from(err);
            tracing::debug!(%err, "raw type name is not UTF-8, decoding lossily");
            return String::from_utf8_lossy(raw);
        }
    };

    match demangler.demangle(text) {
        Ok(pretty) if !pretty.is_empty() => Cow::Owned(pretty),
        Ok(_) => Cow::Borrowed(text),
        Err(NameError::NotMangled { .. }) => Cow::Borrowed(text),
        Err(err) => {
            tracing::debug!(name = text, %err, "demangling failed, using raw name");
            Cow::Borrowed(text)
        }
    }
}

/// Remove the outermost reference layers (`&`, `&mut`, `&'a`) from a rendered
/// type name.
///
/// Reference layers are the only type qualifiers Rust has; `*const` and
/// `*mut` pointers are distinct types and are kept.
///
/// ```
/// use typeindex_core::name::strip_qualifiers;
///
/// assert_eq!(strip_qualifiers("&mut &i32"), "i32");
/// assert_eq!(strip_qualifiers("&'static str"), "str");
/// assert_eq!(strip_qualifiers("*const u8"), "*const u8");
/// ```
pub fn strip_qualifiers(mut name: &str) -> &str {
    while let Some(rest) = name.strip_prefix('&') {
        let rest = skip_lifetime(rest);
        name = rest.strip_prefix("mut ").unwrap_or(rest);
    }
    name
}

fn skip_lifetime(name: &str) -> &str {
    match name.strip_prefix('\'') {
        Some(lifetime) => lifetime.split_once(' ').map_or(name, |(_, rest)| rest),
        None => name,
    }
}

/// Copy `name` into a zero-terminated buffer.
///
/// Interior NUL bytes cannot appear in a terminated name and are dropped.
pub fn terminated(name: &str) -> Box<CStr> {
    let bytes: Vec<u8> = name.bytes().filter(|&b| b != 0).collect();
    CString::new(bytes)
        .map(CString::into_boxed_c_str)
        .unwrap_or_default()
}
