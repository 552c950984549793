//! Runtime view of reflected values.
//!
//! Every value the mapper touches is an [`Object`]: something that can report its runtime type,
//! be cloned into a fresh box, and be downcast back to its concrete Rust type. Members convert
//! between their Rust type and the dynamic [`Value`] through [`MemberValue`].

use std::{
    any::{type_name, Any},
    fmt,
    sync::Arc,
};

use crate::{
    typesystem::{type_of, TypeBuilder, TypeFlavor, TypeInfo, TypeKey, TypeRc},
    Error, Result,
};

/// A dynamically typed member value. `None` is the null value.
pub type Value = Option<Box<dyn Object>>;

/// A value the mapper can inspect at runtime.
///
/// Implemented through [`impl_object!`](crate::impl_object) for reflected user types, and by the
/// crate for scalars, collections and dictionaries.
pub trait Object: Any + Send + Sync {
    /// The runtime type of this value
    fn object_type(&self) -> TypeRc;

    /// Borrow as [`Any`] for downcasting
    fn as_any(&self) -> &dyn Any;

    /// Mutably borrow as [`Any`] for downcasting
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Convert the box into a boxed [`Any`] for downcasting by value
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Clone into a new box
    fn clone_object(&self) -> Box<dyn Object>;

    /// The collection view, if this value is a homogeneous collection
    fn as_collection(&self) -> Option<&dyn Collection> {
        None
    }

    /// The dictionary view, if this value is a key/value collection
    fn as_dictionary(&self) -> Option<&dyn Dictionary> {
        None
    }
}

impl fmt::Debug for dyn Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object({})", self.object_type().key)
    }
}

/// A concrete type with a static description of its members.
///
/// The description is built once per process and cached, see [`type_of`]. `describe` must not
/// call `type_of::<Self>()`.
pub trait Reflect: Object + Sized {
    /// Build the description of `Self`
    fn describe() -> TypeInfo;
}

/// Conversion between the Rust type of a member and the dynamic [`Value`].
pub trait MemberValue: Sized + Send + Sync + 'static {
    /// The type this member is declared as, used for interface binding lookup.
    ///
    /// `Option<T>` reports the declared type of `T`; interface boxes report the trait object.
    fn declared_type() -> TypeKey;

    /// Read the member into a fresh value
    fn to_value(&self) -> Value;

    /// Take a value for assignment.
    ///
    /// # Errors
    /// Returns [`Error::TypeMismatch`] or [`Error::NullAssignment`] if the value can not be
    /// assigned to `Self`.
    fn from_value(value: Value) -> Result<Self>;
}

impl<T: MemberValue> MemberValue for Option<T> {
    fn declared_type() -> TypeKey {
        T::declared_type()
    }

    fn to_value(&self) -> Value {
        self.as_ref().and_then(|inner| inner.to_value())
    }

    fn from_value(value: Value) -> Result<Self> {
        value.map(|object| T::from_value(Some(object))).transpose()
    }
}

/// A trait object that members can be declared as, implemented through
/// [`interface!`](crate::interface).
///
/// Members of type `Arc<dyn Trait>` report `dyn Trait` as their declared type, which is what
/// interface bindings are looked up by.
pub trait Interface: Send + Sync + 'static {
    /// Clone the concrete value behind the interface
    fn clone_concrete(&self) -> Box<dyn Object>;

    /// Recover the interface from a concrete value.
    ///
    /// Returns the value unchanged if its type is not a known implementor.
    fn from_concrete(object: Box<dyn Any>) -> std::result::Result<Arc<Self>, Box<dyn Any>>;
}

impl<I: Interface + ?Sized> MemberValue for Arc<I> {
    fn declared_type() -> TypeKey {
        TypeKey::of::<I>()
    }

    fn to_value(&self) -> Value {
        Some(self.clone_concrete())
    }

    fn from_value(value: Value) -> Result<Self> {
        let object = require_value::<Self>(value)?;
        let found = object.object_type().key;

        I::from_concrete(object.into_any())
            .map_err(|_| mismatch_error!(type_name::<Self>(), found))
    }
}

/// A homogeneous collection of objects
pub trait Collection {
    /// The type of the elements
    fn element_type(&self) -> TypeKey;

    /// Number of elements
    fn len(&self) -> usize;

    /// Returns `true` if the collection has no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The elements in their natural enumeration order
    fn items(&self) -> Box<dyn Iterator<Item = &dyn Object> + '_>;
}

/// A key/value collection of objects
pub trait Dictionary {
    /// Number of entries
    fn len(&self) -> usize;

    /// Returns `true` if the dictionary has no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The values of all entries
    fn values(&self) -> Box<dyn Iterator<Item = &dyn Object> + '_>;
}

/// Reject a null value for a non-optional `T`.
///
/// # Errors
/// Returns [`Error::NullAssignment`] if `value` is `None`.
pub fn require_value<T: 'static>(value: Value) -> Result<Box<dyn Object>> {
    value.ok_or(Error::NullAssignment {
        member: String::new(),
        expected: type_name::<T>(),
    })
}

/// Take a value by downcasting it to exactly `T`.
///
/// # Errors
/// Returns [`Error::NullAssignment`] for null, [`Error::TypeMismatch`] if the runtime type is not
/// `T`.
pub fn downcast_value<T: Object>(value: Value) -> Result<T> {
    let object = require_value::<T>(value)?;
    let found = object.object_type().key;

    match object.into_any().downcast::<T>() {
        Ok(concrete) => Ok(*concrete),
        Err(_) => Err(mismatch_error!(type_name::<T>(), found)),
    }
}

/// Borrow a target object as its concrete type `T`.
///
/// # Errors
/// Returns [`Error::TypeMismatch`] if the runtime type of `target` is not `T`.
pub fn downcast_ref<T: Object>(target: &dyn Object) -> Result<&T> {
    match target.as_any().downcast_ref::<T>() {
        Some(concrete) => Ok(concrete),
        None => Err(mismatch_error!(
            "self",
            type_name::<T>(),
            target.object_type().key
        )),
    }
}

/// Mutably borrow a target object as its concrete type `T`.
///
/// # Errors
/// Returns [`Error::TypeMismatch`] if the runtime type of `target` is not `T`.
pub fn downcast_mut<T: Object>(target: &mut dyn Object) -> Result<&mut T> {
    let found = target.object_type().key;
    match target.as_any_mut().downcast_mut::<T>() {
        Some(concrete) => Ok(concrete),
        None => Err(mismatch_error!("self", type_name::<T>(), found)),
    }
}

/// A dynamically typed, fixed-length array.
///
/// Produced by collection conversion, where the destination element type is only known at
/// runtime. Collection members such as `Vec<T>` accept an `ObjectArray` whose items are all `T`.
pub struct ObjectArray {
    element: TypeKey,
    items: Vec<Box<dyn Object>>,
}

impl ObjectArray {
    /// Create an empty array for `len` elements of type `element`
    #[must_use]
    pub fn with_capacity(element: TypeKey, len: usize) -> Self {
        ObjectArray {
            element,
            items: Vec::with_capacity(len),
        }
    }

    /// Append an element
    pub fn push(&mut self, item: Box<dyn Object>) {
        self.items.push(item);
    }

    /// Access an element by index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&dyn Object> {
        self.items.get(index).map(|item| &**item)
    }

    /// Consume the array, returning its elements
    #[must_use]
    pub fn into_items(self) -> Vec<Box<dyn Object>> {
        self.items
    }
}

impl Clone for ObjectArray {
    fn clone(&self) -> Self {
        ObjectArray {
            element: self.element,
            items: self.items.iter().map(|item| item.clone_object()).collect(),
        }
    }
}

impl fmt::Debug for ObjectArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectArray")
            .field("element", &self.element)
            .field("len", &self.items.len())
            .finish()
    }
}

impl Collection for ObjectArray {
    fn element_type(&self) -> TypeKey {
        self.element
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn items(&self) -> Box<dyn Iterator<Item = &dyn Object> + '_> {
        Box::new(self.items.iter().map(|item| &**item))
    }
}

impl Object for ObjectArray {
    fn object_type(&self) -> TypeRc {
        type_of::<Self>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn clone_object(&self) -> Box<dyn Object> {
        Box::new(self.clone())
    }

    fn as_collection(&self) -> Option<&dyn Collection> {
        Some(self)
    }
}

impl Reflect for ObjectArray {
    fn describe() -> TypeInfo {
        TypeBuilder::<Self>::new(TypeFlavor::Array)
            .readonly_property("len", |array: &Self| array.items.len())
            .build()
    }
}
