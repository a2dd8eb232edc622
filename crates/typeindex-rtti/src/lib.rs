//! Runtime type-info backend.
//!
//! Descriptors are keyed by `core::any::TypeId` and named by
//! `core::any::type_name`. Dynamic lookup goes through the
//! [`Dynamic`] vtable, so a trait object reports its concrete type.
//!
//! The same type can end up with more than one descriptor (one per qualifier
//! mode, one per referenced form under stripping, one per independently
//! loaded module). Identity is therefore decided by name; comparing
//! descriptor addresses is only a shortcut taken when they happen to match.
//! Ordering and hashing are name based too, so they agree with equality.
//!
//! # Limitations
//!
//! Because identity follows the rendered name, distinct types that render to
//! the same text compare equal here too, even though their `TypeId`s differ.
//! This happens for closures defined in one function and for function-local
//! items with the same path (two `struct Local` in different blocks).
//!
//! # Examples
//!
//! ```
//! use typeindex_core::Dynamic;
//! use typeindex_rtti::RttiIndex;
//!
//! trait Widget: Dynamic {}
//! struct Button;
//! impl Widget for Button {}
//!
//! let widget: &dyn Widget = &Button;
//! assert_eq!(RttiIndex::of_runtime_value(widget), RttiIndex::of::<Button>());
//! assert_eq!(RttiIndex::of::<i32>().pretty_name(), "i32");
//! ```

use std::any::{TypeId, type_name};
use std::ffi::CStr;
use std::fmt;

use typeindex_core::{Construct, Dynamic, DynamicLookup, Qualifiers, Registry, TypeIndex, TypeInfo, name};

/// Token type of the runtime backend.
pub type RttiIndex = TypeIndex<RttiData>;

static DESCRIPTORS: Registry<(TypeId, Qualifiers), RttiData> = Registry::new();

/// Runtime descriptor of one type.
pub struct RttiData {
    name: Box<CStr>,
}

impl RttiData {
    #[cfg_attr(feature = "profiling", profiling::function)]
    fn lookup(id: TypeId, qualifiers: Qualifiers, rendered: &'static str) -> &'static RttiData {
        DESCRIPTORS.get_or_init((id, qualifiers), || {
            let canonical = qualifiers.apply(rendered);
            tracing::trace!(type_name = canonical, ?qualifiers, "publishing runtime type descriptor");
            RttiData {
                name: name::terminated(canonical),
            }
        })
    }

    /// Number of descriptors published so far.
    pub fn published() -> usize {
        DESCRIPTORS.len()
    }
}

impl TypeInfo for RttiData {
    fn raw_name(&self) -> &CStr {
        &self.name
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.name == other.name
    }
}

impl Construct for RttiData {
    fn construct<T: ?Sized + 'static>(qualifiers: Qualifiers) -> &'static Self {
        Self::lookup(TypeId::of::<T>(), qualifiers, type_name::<T>())
    }
}

impl DynamicLookup for RttiData {
    fn construct_runtime<V: ?Sized + Dynamic>(value: &V) -> &'static Self {
        Self::lookup(value.dynamic_type_id(), Qualifiers::Strip, value.dynamic_type_name())
    }

    fn construct_runtime_pointer<V: ?Sized + Dynamic>(value: &V) -> &'static Self {
        Self::lookup(
            value.dynamic_pointer_type_id(),
            Qualifiers::Keep,
            value.dynamic_pointer_type_name(),
        )
    }
}

impl fmt::Debug for RttiData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RttiData").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Base: Dynamic {
        fn id(&self) -> u32;
    }

    struct Left;
    struct Right;

    impl Base for Left {
        fn id(&self) -> u32 {
            1
        }
    }

    impl Base for Right {
        fn id(&self) -> u32 {
            2
        }
    }

    #[test]
    fn same_type_same_descriptor() {
        let a = RttiIndex::of::<Vec<u8>>();
        let b = RttiIndex::of::<Vec<u8>>();
        assert_eq!(a, b);
        assert!(std::ptr::eq(a.info(), b.info()));
    }

    #[test]
    fn stripped_forms_share_a_name_not_a_descriptor() {
        let plain = RttiIndex::of::<u32>();
        let referenced = RttiIndex::of::<&u32>();
        assert_eq!(plain, referenced);
        assert!(!std::ptr::eq(plain.info(), referenced.info()));
        assert_eq!(plain.hash_code(), referenced.hash_code());
    }

    #[test]
    fn qualifiers_kept_on_request() {
        assert_ne!(
            RttiIndex::of_with_qualifiers::<u32>(),
            RttiIndex::of_with_qualifiers::<&mut u32>()
        );
        assert_eq!(RttiIndex::of_with_qualifiers::<&mut u32>().pretty_name(), "&mut u32");
    }

    #[test]
    fn raw_name_is_native_rendering() {
        let index = RttiIndex::of::<Option<bool>>();
        assert_eq!(index.name(), type_name::<Option<bool>>());
        assert_eq!(index.raw_name().to_bytes_with_nul().last(), Some(&0));
    }

    #[test]
    fn dynamic_lookup_sees_through_trait_objects() {
        let items: Vec<Box<dyn Base>> = vec![Box::new(Left), Box::new(Right)];
        let left = RttiIndex::of_runtime_value(&*items[0]);
        let right = RttiIndex::of_runtime_value(&*items[1]);

        assert_eq!(left, RttiIndex::of::<Left>());
        assert_eq!(right, RttiIndex::of::<Right>());
        assert_ne!(left, RttiIndex::of::<dyn Base>());
        assert_eq!(items[0].id() + items[1].id(), 3);
    }

    #[test]
    fn dynamic_lookup_of_boxes_reports_the_box() {
        let boxed: Box<dyn Base> = Box::new(Left);
        assert_eq!(RttiIndex::of_runtime_value(&boxed), RttiIndex::of::<Box<dyn Base>>());
    }

    #[test]
    fn pointer_lookup_marks_indirection() {
        let item: &dyn Base = &Right;
        let pointer = RttiIndex::of_runtime_pointer(item);
        assert_eq!(pointer, RttiIndex::of::<*const Right>());
        assert_ne!(pointer, RttiIndex::of::<Right>());
        assert_eq!(pointer.pretty_name(), format!("*const {}", type_name::<Right>()));
    }

    #[test]
    fn colliding_renderings_compare_equal() {
        let (first, first_id) = {
            struct Local;
            (RttiIndex::of::<Local>(), TypeId::of::<Local>())
        };
        let (second, second_id) = {
            struct Local;
            (RttiIndex::of::<Local>(), TypeId::of::<Local>())
        };
        assert_ne!(first_id, second_id);
        assert_eq!(first, second);
    }

    #[test]
    fn closures_in_one_function_compare_equal() {
        fn token_of<F: 'static>(_: &F) -> (RttiIndex, TypeId) {
            (RttiIndex::of::<F>(), TypeId::of::<F>())
        }

        let (one, one_id) = token_of(&|| 1);
        let (two, two_id) = token_of(&|| 2);
        assert_ne!(one_id, two_id);
        assert_eq!(one, two);
        assert!(one.name().ends_with("{{closure}}"));
    }

    #[test]
    fn descriptors_are_counted() {
        RttiIndex::of::<[u16; 3]>();
        assert!(RttiData::published() >= 1);
    }
}
