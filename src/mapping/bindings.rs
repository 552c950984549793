//! Interface and element binding tables.
//!
//! A [`TypeBindingRegistry`] holds the two rule tables consulted while copying members:
//!
//! - **Interface bindings** resolve a destination member declared as a trait object, for a given
//!   owning type, to a concrete type that is instantiated and mapped recursively.
//! - **Element bindings** resolve the element type of a source collection to the destination
//!   element type each element is mapped onto.
//!
//! Both tables are append-only `boxcar` vectors, read without locking while mappings run in
//! parallel. Registration takes `&mut self`, so bindings can only be added during the build
//! phase. Handing the registry to [`Mapper::new`](crate::Mapper::new) freezes it: the mapper
//! only gives out shared references.
//!
//! # Examples
//!
//! ```rust
//! use mapscope::{impl_object, Reflect, TypeBindingRegistry, TypeBuilder, TypeInfo, TypeKey};
//!
//! #[derive(Clone, Default)]
//! struct Label {
//!     value: String,
//! }
//!
//! impl Reflect for Label {
//!     fn describe() -> TypeInfo {
//!         TypeBuilder::<Self>::class()
//!             .field("value", |l| &l.value, |l| &mut l.value)
//!             .default_constructor()
//!             .build()
//!     }
//! }
//! impl_object!(Label);
//!
//! let mut registry = TypeBindingRegistry::new();
//! registry.register_element::<String, Label>();
//!
//! let binding = registry
//!     .resolve_element(&TypeKey::of::<String>(), &TypeKey::of::<Label>())
//!     .unwrap();
//! assert_eq!(binding.dest.key, TypeKey::of::<Label>());
//! ```

use std::fmt;

use crate::typesystem::{type_of, Reflect, TypeKey, TypeRc};

/// Resolves a trait-object member of `owner` to a concrete type
pub struct InterfaceBinding {
    /// The type declaring the member
    pub owner: TypeKey,
    /// The declared type of the member, usually `dyn Trait`
    pub declared: TypeKey,
    /// The type instantiated for the member
    pub concrete: TypeRc,
}

impl fmt::Debug for InterfaceBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} => {}",
            self.owner.name(),
            self.declared.name(),
            self.concrete.name()
        )
    }
}

/// Resolves a source element type to the destination element type
pub struct ElementBinding {
    /// The element type of the source collection
    pub source: TypeKey,
    /// The type each element is mapped onto
    pub dest: TypeRc,
    /// Restricts the binding to collections assigned to members of this type
    pub dest_owner: Option<TypeKey>,
}

impl ElementBinding {
    fn applies(&self, source: &TypeKey, dest_owner: Option<&TypeKey>) -> bool {
        self.source == *source && self.dest_owner.as_ref() == dest_owner
    }
}

impl fmt::Debug for ElementBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.dest_owner {
            Some(owner) => write!(
                f,
                "{} => {} (in {})",
                self.source.name(),
                self.dest.name(),
                owner.name()
            ),
            None => write!(f, "{} => {}", self.source.name(), self.dest.name()),
        }
    }
}

/// Registry of interface and element bindings
pub struct TypeBindingRegistry {
    interfaces: boxcar::Vec<InterfaceBinding>,
    elements: boxcar::Vec<ElementBinding>,
}

impl TypeBindingRegistry {
    /// Create a new, empty registry
    #[must_use]
    pub fn new() -> Self {
        TypeBindingRegistry {
            interfaces: boxcar::Vec::new(),
            elements: boxcar::Vec::new(),
        }
    }

    /// Bind members of `O` declared as `I` to the concrete type `C`.
    ///
    /// Duplicate bindings for the same owner and declared type are kept; the first one registered
    /// is the one that resolves.
    ///
    /// `C` is not checked against the implementors listed in [`interface!`](crate::interface).
    /// Binding an unlisted type is accepted here and fails with
    /// [`Error::TypeMismatch`](crate::Error::TypeMismatch) when the member is assigned.
    pub fn register_interface<O: Reflect, I: ?Sized + 'static, C: Reflect>(
        &mut self,
    ) -> &mut Self {
        self.interfaces.push(InterfaceBinding {
            owner: TypeKey::of::<O>(),
            declared: TypeKey::of::<I>(),
            concrete: type_of::<C>(),
        });
        self
    }

    /// Map collections of `S` onto arrays of `D`
    pub fn register_element<S: ?Sized + 'static, D: Reflect>(&mut self) -> &mut Self {
        self.elements.push(ElementBinding {
            source: TypeKey::of::<S>(),
            dest: type_of::<D>(),
            dest_owner: None,
        });
        self
    }

    /// Map collections of `S` onto arrays of `D`, only for members declared by `O`.
    ///
    /// A qualified binding takes precedence over an unqualified one for the same element type.
    pub fn register_element_for<S: ?Sized + 'static, D: Reflect, O: Reflect>(
        &mut self,
    ) -> &mut Self {
        self.elements.push(ElementBinding {
            source: TypeKey::of::<S>(),
            dest: type_of::<D>(),
            dest_owner: Some(TypeKey::of::<O>()),
        });
        self
    }

    /// Find the concrete type for a member of `owner` declared as `declared`
    ///
    /// ## Arguments
    /// * `owner` - The type declaring the destination member
    /// * `declared` - The declared type of the destination member
    #[must_use]
    pub fn resolve_concrete(
        &self,
        owner: &TypeKey,
        declared: &TypeKey,
    ) -> Option<&InterfaceBinding> {
        self.interfaces
            .iter()
            .map(|(_, binding)| binding)
            .find(|binding| binding.owner == *owner && binding.declared == *declared)
    }

    /// Find the destination element type for elements of `source` assigned to a member of
    /// `dest_owner`
    ///
    /// The first binding qualified with `dest_owner` wins, then the first unqualified binding.
    /// Bindings qualified with another owner never match.
    ///
    /// ## Arguments
    /// * `source` - The element type of the source collection
    /// * `dest_owner` - The type declaring the destination member
    #[must_use]
    pub fn resolve_element(&self, source: &TypeKey, dest_owner: &TypeKey) -> Option<&ElementBinding> {
        self.find_element(source, Some(dest_owner))
            .or_else(|| self.find_element(source, None))
    }

    /// All interface bindings in registration order
    pub fn interfaces(&self) -> impl Iterator<Item = &InterfaceBinding> {
        self.interfaces.iter().map(|(_, binding)| binding)
    }

    /// All element bindings in registration order
    pub fn elements(&self) -> impl Iterator<Item = &ElementBinding> {
        self.elements.iter().map(|(_, binding)| binding)
    }

    /// Number of interface bindings
    #[must_use]
    pub fn interface_count(&self) -> usize {
        self.interfaces.count()
    }

    /// Number of element bindings
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.count()
    }

    /// Returns `true` if no binding of either kind was registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interface_count() == 0 && self.element_count() == 0
    }

    fn find_element(&self, source: &TypeKey, dest_owner: Option<&TypeKey>) -> Option<&ElementBinding> {
        self.elements
            .iter()
            .map(|(_, binding)| binding)
            .find(|binding| binding.applies(source, dest_owner))
    }
}

impl Default for TypeBindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TypeBindingRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeBindingRegistry")
            .field("interfaces", &self.interfaces().collect::<Vec<_>>())
            .field("elements", &self.elements().collect::<Vec<_>>())
            .finish()
    }
}
