//! Compile-time type-info backend.
//!
//! Names are cut out of the compiler's rendering of a private generic marker,
//! `Signature<T>`: a fixed prefix and suffix measured once from a probe type
//! are removed, leaving the rendering of `T` itself. No `TypeId` and no
//! vtable is involved, so records are identical across independently built
//! modules that share a compiler and its flags.
//!
//! Each distinct name is interned once; equality, ordering and hashing work on
//! the name bytes.
//!
//! # Limitations
//!
//! Two distinct types that render to the same text (for instance two
//! `struct Local` items declared in different blocks of one function) get the
//! same record and compare equal. This is accepted, not detected.
//!
//! This backend cannot recover the dynamic type of a trait object, so
//! `of_runtime_value` does not exist for it:
//!
//! ```compile_fail
//! use typeindex_core::Dynamic;
//! use typeindex_ctti::CttiIndex;
//!
//! trait Shape: Dynamic {}
//! struct Square;
//! impl Shape for Square {}
//!
//! let shape: &dyn Shape = &Square;
//! let _ = CttiIndex::of_runtime_value(shape);
//! ```
//!
//! # Examples
//!
//! ```
//! use typeindex_ctti::CttiIndex;
//!
//! assert_eq!(CttiIndex::of::<f64>().pretty_name(), "f64");
//! assert_eq!(CttiIndex::of::<&str>(), CttiIndex::of::<str>());
//! assert_ne!(CttiIndex::of::<i32>(), CttiIndex::of::<f64>());
//! ```

use std::any::type_name;
use std::ffi::CStr;
use std::fmt;
use std::marker::PhantomData;
use std::sync::OnceLock;

use typeindex_core::{Construct, Qualifiers, Registry, TypeIndex, TypeInfo, name};

/// Token type of the compile-time backend.
pub type CttiIndex = TypeIndex<CttiData>;

static NAMES: Registry<&'static str, CttiData> = Registry::new();

/// Marker whose rendered name embeds the rendering of `T`.
#[allow(dead_code)]
struct Signature<T: ?Sized>(PhantomData<T>);

/// Bytes to drop from each end of a rendered `Signature<T>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Skip {
    begin: usize,
    end: usize,
}

const PROBE: &str = "u8";

impl Skip {
    fn measure(rendered: &str) -> Option<Skip> {
        let suffix = ">";
        let prefix = rendered.strip_suffix(suffix)?.strip_suffix(PROBE)?;
        if !prefix.ends_with("Signature<") {
            return None;
        }
        Some(Skip {
            begin: prefix.len(),
            end: suffix.len(),
        })
    }

    fn current() -> Option<Skip> {
        static SKIP: OnceLock<Option<Skip>> = OnceLock::new();
        *SKIP.get_or_init(|| {
            let rendered = type_name::<Signature<u8>>();
            let skip = Skip::measure(rendered);
            if skip.is_none() {
                tracing::warn!(rendered, "unrecognized type name rendering, using names unstripped");
            }
            skip
        })
    }

    fn apply(self, rendered: &str) -> Option<&str> {
        let end = rendered.len().checked_sub(self.end)?;
        rendered.get(self.begin..end).filter(|name| !name.is_empty())
    }
}

/// The compiler's rendering of `T`, cut out of `Signature<T>`.
///
/// Falls back to the whole rendering when its shape is not recognized.
pub fn rendered_name<T: ?Sized>() -> &'static str {
    let rendered = type_name::<Signature<T>>();
    Skip::current()
        .and_then(|skip| skip.apply(rendered))
        .unwrap_or(rendered)
}

/// Interned name of one type.
pub struct CttiData {
    name: Box<CStr>,
}

impl CttiData {
    fn intern(canonical: &'static str) -> &'static CttiData {
        NAMES.get_or_init(canonical, || {
            tracing::trace!(type_name = canonical, "interning compile-time type name");
            CttiData {
                name: name::terminated(canonical),
            }
        })
    }

    /// Number of distinct names interned so far.
    pub fn interned() -> usize {
        NAMES.len()
    }
}

impl TypeInfo for CttiData {
    fn raw_name(&self) -> &CStr {
        &self.name
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.name == other.name
    }
}

impl Construct for CttiData {
    #[cfg_attr(feature = "profiling", profiling::function)]
    fn construct<T: ?Sized + 'static>(qualifiers: Qualifiers) -> &'static Self {
        Self::intern(qualifiers.apply(rendered_name::<T>()))
    }
}

impl fmt::Debug for CttiData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CttiData").field("name", &self.name).finish()
    }
}
