//! Copyable, comparable, hashable type identity tokens.
//!
//! [`TypeIndex`] identifies a type as an ordinary value: it can be compared,
//! ordered, hashed, printed, stored in collections and used as a map key.
//!
//! ```
//! use std::collections::BTreeMap;
//! use typeindex::TypeIndex;
//!
//! let mut sizes = BTreeMap::new();
//! sizes.insert(TypeIndex::of::<u32>(), 4);
//! sizes.insert(TypeIndex::of::<u64>(), 8);
//!
//! assert_eq!(sizes[&TypeIndex::of::<&u32>()], 4);
//! assert_eq!(TypeIndex::of::<u64>().pretty_name(), "u64");
//! ```
//!
//! # Backends
//!
//! Which backend [`TypeIndex`] uses is fixed when the crate is built, so
//! every token in an artifact is comparable with every other:
//!
//! - runtime backend ([`RttiData`], default): `TypeId` based descriptors,
//!   supports [`TypeIndex::of_runtime_value`] on trait objects,
//! - compile-time backend ([`CttiData`], feature `force-ctti`): names cut out
//!   of the compiler's type rendering, no runtime type facilities, no dynamic
//!   lookup.
//!
//! Both backends decide identity by rendered name, so closures and
//! function-local items sharing a path (two `struct Local` in different
//! blocks of one function) collide under either of them.
//!
//! Both backends stay available by name ([`RttiIndex`], [`CttiIndex`]), and a
//! custom backend only needs to implement [`TypeInfo`] and [`Construct`] to
//! be usable as `GenericTypeIndex<MyInfo>`.
//!
//! # Qualifiers
//!
//! Rust's only type qualifiers are reference layers. [`TypeIndex::of`] drops
//! them (`&T`, `&mut T` and `T` are one identity) while
//! [`TypeIndex::of_with_qualifiers`] keeps them.

pub use typeindex_core::TypeIndex as GenericTypeIndex;
pub use typeindex_core::{
    Construct, Dynamic, DynamicLookup, NameError, Qualifiers, Registry, TypeInfo, name,
};
pub use typeindex_ctti::{CttiData, CttiIndex, rendered_name};
pub use typeindex_rtti::{RttiData, RttiIndex};

/// Record type of the backend selected for this build.
#[cfg(not(feature = "force-ctti"))]
pub type Backend = RttiData;

/// Record type of the backend selected for this build.
#[cfg(feature = "force-ctti")]
pub type Backend = CttiData;

/// Identity token of the backend selected for this build.
pub type TypeIndex = GenericTypeIndex<Backend>;

/// Name of the backend selected for this build.
#[cfg(not(feature = "force-ctti"))]
pub const BACKEND: &str = "rtti";

/// Name of the backend selected for this build.
#[cfg(feature = "force-ctti")]
pub const BACKEND: &str = "ctti";
