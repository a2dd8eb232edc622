//! The identity facade.
//!
//! [`TypeIndex<I>`] wraps a `'static` record of backend `I` and derives every
//! comparison, hash and formatting operation from the [`TypeInfo`] contract,
//! so a new backend only implements that contract to get all of them.

use std::cmp::Ordering;
use std::ffi::CStr;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::dynamic::Dynamic;
use crate::info::{Construct, DynamicLookup, Qualifiers, TypeInfo};

/// A copyable token identifying one type under backend `I`.
///
/// Tokens never own their record; records live for the rest of the process.
///
/// # Examples
///
/// ```
/// # use std::ffi::CStr;
/// # use typeindex_core::{Construct, Qualifiers, TypeIndex, TypeInfo};
/// # struct Names(Box<CStr>);
/// # impl TypeInfo for Names {
/// #     fn raw_name(&self) -> &CStr { &self.0 }
/// # }
/// # impl Construct for Names {
/// #     fn construct<T: ?Sized + 'static>(q: Qualifiers) -> &'static Self {
/// #         static REGISTRY: typeindex_core::Registry<String, Names> = typeindex_core::Registry::new();
/// #         let name = q.apply(std::any::type_name::<T>()).to_string();
/// #         REGISTRY.get_or_init(name.clone(), || Names(typeindex_core::name::terminated(&name)))
/// #     }
/// # }
/// type Index = TypeIndex<Names>;
///
/// assert_eq!(Index::of::<i32>(), Index::of::<&mut i32>());
/// assert_ne!(Index::of_with_qualifiers::<i32>(), Index::of_with_qualifiers::<&i32>());
/// assert_ne!(Index::of::<i32>(), Index::of::<f64>());
/// assert_eq!(Index::of::<f64>().to_string(), "f64");
/// ```
pub struct TypeIndex<I: TypeInfo> {
    info: &'static I,
}

impl<I: TypeInfo> TypeIndex<I> {
    /// Wrap an existing record.
    #[inline]
    pub const fn from_info(info: &'static I) -> Self {
        Self { info }
    }

    /// The underlying record.
    #[inline]
    pub fn info(&self) -> &'static I {
        self.info
    }

    /// Canonical zero-terminated name. Not guaranteed to be printable.
    #[inline]
    pub fn raw_name(&self) -> &'static CStr {
        self.info.raw_name()
    }

    /// The raw name as text, lossily decoded if it is not UTF-8.
    pub fn name(&self) -> std::borrow::Cow<'static, str> {
        self.raw_name().to_string_lossy()
    }

    /// Human-readable name; falls back to the raw name.
    pub fn pretty_name(&self) -> String {
        self.info.pretty_name()
    }

    /// Hash of the underlying record, stable for the current process only.
    #[inline]
    pub fn hash_code(&self) -> u64 {
        self.info.hash_code()
    }
}

impl<I: Construct> TypeIndex<I> {
    /// Token for `T` with reference qualifiers removed.
    ///
    /// `of::<T>()`, `of::<&T>()` and `of::<&mut T>()` are equal.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::from_info(I::construct::<T>(Qualifiers::Strip))
    }

    /// Token for `T` with reference qualifiers kept as part of its identity.
    ///
    /// For a `T` without qualifiers this equals [`of::<T>()`](Self::of).
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn of_with_qualifiers<T: ?Sized + 'static>() -> Self {
        Self::from_info(I::construct::<T>(Qualifiers::Keep))
    }
}

impl<I: DynamicLookup> TypeIndex<I> {
    /// Token for the concrete type behind `value`.
    ///
    /// Only backends implementing [`DynamicLookup`] provide this; on others the
    /// call does not compile. `value` is usually a trait object whose trait
    /// has [`Dynamic`] as a supertrait. Pass `&*boxed`, not `&boxed`, for
    /// boxed trait objects.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn of_runtime_value<V: ?Sized + Dynamic>(value: &V) -> Self {
        Self::from_info(I::construct_runtime(value))
    }

    /// Token for `*const C`, where `C` is the concrete type behind `value`.
    ///
    /// Kept separate from [`of_runtime_value`](Self::of_runtime_value): its
    /// pretty name carries the `*const ` indirection marker.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn of_runtime_pointer<V: ?Sized + Dynamic>(value: &V) -> Self {
        Self::from_info(I::construct_runtime_pointer(value))
    }
}

impl<I: TypeInfo> Clone for TypeIndex<I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: TypeInfo> Copy for TypeIndex<I> {}

impl<I: Construct> Default for TypeIndex<I> {
    /// Token for the unit type `()`.
    fn default() -> Self {
        Self::from_info(I::void())
    }
}

impl<I: TypeInfo> From<&'static I> for TypeIndex<I> {
    fn from(info: &'static I) -> Self {
        Self::from_info(info)
    }
}

impl<I: TypeInfo> PartialEq for TypeIndex<I> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.info.equals(other.info)
    }
}

impl<I: TypeInfo> Eq for TypeIndex<I> {}

impl<I: TypeInfo> PartialEq<I> for TypeIndex<I> {
    #[inline]
    fn eq(&self, other: &I) -> bool {
        self.info.equals(other)
    }
}

impl<I: TypeInfo> PartialOrd for TypeIndex<I> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I: TypeInfo> Ord for TypeIndex<I> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.info.equals(other.info) {
            Ordering::Equal
        } else if self.info.before(other.info) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl<I: TypeInfo> Hash for TypeIndex<I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.info.hash_code());
    }
}

impl<I: TypeInfo> fmt::Display for TypeIndex<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty_name())
    }
}

impl<I: TypeInfo> fmt::Debug for TypeIndex<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeIndex({})", self.pretty_name())
    }
}
