//! Dynamic type facts for trait objects.
//!
//! [`Dynamic`] is implemented for every sized `'static` type. Make it a
//! supertrait of your own trait and the facts are dispatched through the
//! trait object's vtable, so a `&dyn Shape` reports the concrete type that was
//! erased into it rather than `dyn Shape`:
//!
//! ```
//! use std::any::TypeId;
//! use typeindex_core::Dynamic;
//!
//! trait Shape: Dynamic {}
//!
//! struct Circle;
//! impl Shape for Circle {}
//!
//! let shape: &dyn Shape = &Circle;
//! assert_eq!(shape.dynamic_type_id(), TypeId::of::<Circle>());
//! assert!(shape.dynamic_type_name().ends_with("Circle"));
//! ```
//!
//! Passing a smart pointer itself (`&Box<dyn Shape>`) reports the pointer
//! type; dereference it first (`&*boxed`).

use std::any::{TypeId, type_name};

/// Vtable-dispatched type facts of a value.
pub trait Dynamic: 'static {
    /// `TypeId` of the concrete type.
    fn dynamic_type_id(&self) -> TypeId;

    /// Rendered name of the concrete type.
    fn dynamic_type_name(&self) -> &'static str;

    /// `TypeId` of `*const C` for the concrete type `C`.
    fn dynamic_pointer_type_id(&self) -> TypeId;

    /// Rendered name of `*const C` for the concrete type `C`.
    fn dynamic_pointer_type_name(&self) -> &'static str;
}

impl<T: 'static> Dynamic for T {
    fn dynamic_type_id(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn dynamic_type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn dynamic_pointer_type_id(&self) -> TypeId {
        TypeId::of::<*const T>()
    }

    fn dynamic_pointer_type_name(&self) -> &'static str {
        type_name::<*const T>()
    }
}
