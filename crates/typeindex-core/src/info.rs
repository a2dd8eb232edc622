//! The minimal contract a type-info representation has to satisfy.
//!
//! A backend only implements [`TypeInfo`] (and [`Construct`] to make
//! records); [`TypeIndex`](crate::TypeIndex) derives equality, ordering,
//! hashing and printing from it. Backends that can recover the dynamic type of
//! a trait object additionally implement [`DynamicLookup`].
//!
//! # Examples
//!
//! A backend that only knows two types:
//!
//! ```
//! use std::any::TypeId;
//! use std::ffi::CStr;
//! use typeindex_core::{Construct, Qualifiers, TypeIndex, TypeInfo};
//!
//! struct Tiny(&'static CStr);
//!
//! static UNIT: Tiny = Tiny(c"unit");
//! static NUMBER: Tiny = Tiny(c"number");
//!
//! impl TypeInfo for Tiny {
//!     fn raw_name(&self) -> &CStr {
//!         self.0
//!     }
//! }
//!
//! impl Construct for Tiny {
//!     fn construct<T: ?Sized + 'static>(_: Qualifiers) -> &'static Self {
//!         if TypeId::of::<T>() == TypeId::of::<u32>() { &NUMBER } else { &UNIT }
//!     }
//! }
//!
//! let number = TypeIndex::<Tiny>::of::<u32>();
//! assert_eq!(number.pretty_name(), "number");
//! assert_ne!(number, TypeIndex::<Tiny>::default());
//! ```

use std::ffi::CStr;

use xxhash_rust::xxh64::xxh64;

use crate::dynamic::Dynamic;
use crate::name;

/// Whether reference qualifiers take part in a type's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Qualifiers {
    /// `&T`, `&mut T` and `T` all identify `T`.
    Strip,
    /// `&T`, `&mut T` and `T` are three different identities.
    Keep,
}

impl Qualifiers {
    /// Apply this mode to a rendered type name.
    pub fn apply(self, name: &str) -> &str {
        match self {
            Qualifiers::Strip => name::strip_qualifiers(name),
            Qualifiers::Keep => name,
        }
    }
}

/// A backend's representation of one type.
///
/// Only [`raw_name`](TypeInfo::raw_name) is required. The remaining methods
/// default to operations over the raw name and can be overridden when a
/// backend has something cheaper or different to offer. Overrides must keep
/// the three laws the facade relies on:
///
/// - `equals` is an equivalence relation,
/// - `before` is a strict total order consistent with `equals`,
/// - `a.equals(b)` implies `a.hash_code() == b.hash_code()`.
///
/// Records are compared only with records of the same backend; the facade is
/// typed by the representation, so mixing backends does not compile.
pub trait TypeInfo: Send + Sync + 'static {
    /// Canonical zero-terminated name. Not guaranteed to be printable.
    fn raw_name(&self) -> &CStr;

    /// Identity of two records of this backend.
    fn equals(&self, other: &Self) -> bool {
        self.raw_name() == other.raw_name()
    }

    /// Stable order of two records of this backend.
    fn before(&self, other: &Self) -> bool {
        self.raw_name() < other.raw_name()
    }

    /// Human-readable name. Falls back to the raw name, never fails.
    fn pretty_name(&self) -> String {
        name::pretty(self.raw_name().to_bytes()).into_owned()
    }

    /// Hash of this record, stable for the current process only.
    fn hash_code(&self) -> u64 {
        xxh64(self.raw_name().to_bytes(), 0)
    }
}

/// Maps Rust types to a backend's `'static` records.
pub trait Construct: TypeInfo {
    /// Record for `T`, with reference qualifiers handled per `qualifiers`.
    ///
    /// Every call with the same `T` and mode must return an equal record.
    fn construct<T: ?Sized + 'static>(qualifiers: Qualifiers) -> &'static Self;

    /// Record for the unit type, used by default-constructed tokens.
    fn void() -> &'static Self {
        Self::construct::<()>(Qualifiers::Keep)
    }
}

/// Backends that can recover the dynamic type behind a trait object.
///
/// Backends without runtime type support do not implement this trait, which
/// makes [`TypeIndex::of_runtime_value`](crate::TypeIndex::of_runtime_value)
/// unavailable for them at compile time.
pub trait DynamicLookup: Construct {
    /// Record for the concrete type behind `value`.
    fn construct_runtime<V: ?Sized + Dynamic>(value: &V) -> &'static Self;

    /// Record for `*const C`, where `C` is the concrete type behind `value`.
    fn construct_runtime_pointer<V: ?Sized + Dynamic>(value: &V) -> &'static Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static CStr);

    impl TypeInfo for Named {
        fn raw_name(&self) -> &CStr {
            self.0
        }
    }

    #[test]
    fn defaults_follow_raw_name() {
        let a = Named(c"alpha");
        let b = Named(c"beta");
        let a2 = Named(c"alpha");

        assert!(a.equals(&a2));
        assert!(!a.equals(&b));
        assert!(a.before(&b));
        assert!(!b.before(&a));
        assert!(!a.before(&a2));
        assert_eq!(a.hash_code(), a2.hash_code());
        assert_eq!(a.pretty_name(), "alpha");
    }

    #[test]
    fn qualifier_modes() {
        assert_eq!(Qualifiers::Strip.apply("&mut u8"), "u8");
        assert_eq!(Qualifiers::Keep.apply("&mut u8"), "&mut u8");
    }
}
