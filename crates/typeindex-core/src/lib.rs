//! Core of the typeindex workspace.
//!
//! This crate holds everything that does not depend on how a type is
//! identified:
//!
//! - [`TypeInfo`], [`Construct`] and [`DynamicLookup`]: the contract a
//!   backend implements,
//! - [`TypeIndex`]: the copyable token that derives equality, ordering,
//!   hashing and printing from that contract,
//! - [`name`]: the codec turning raw names into readable ones,
//! - [`Registry`]: one-time, process-wide storage for backend records,
//! - [`Dynamic`]: vtable-dispatched type facts for trait objects.
//!
//! The runtime and compile-time backends live in `typeindex-rtti` and
//! `typeindex-ctti`; the `typeindex` crate picks one of them at build time.

pub mod dynamic;
pub mod error;
pub mod index;
pub mod info;
pub mod name;
pub mod registry;

pub use dynamic::Dynamic;
pub use error::{NameError, Result};
pub use index::TypeIndex;
pub use info::{Construct, DynamicLookup, Qualifiers, TypeInfo};
pub use registry::Registry;
