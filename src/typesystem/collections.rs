//! Built-in collection and dictionary types.
//!
//! `Vec<T>` and `VecDeque<T>` are collections: they expose their elements through
//! [`Collection`] and accept either themselves or an [`ObjectArray`] of `T` on assignment.
//! `HashMap<K, V>` and `BTreeMap<K, V>` are dictionaries: they expose their values through
//! [`Dictionary`] and are only ever assigned as a whole.

use std::{
    any::{type_name, Any},
    collections::{BTreeMap, HashMap, VecDeque},
    hash::Hash,
};

use crate::{
    typesystem::{
        downcast_value, require_value, type_of, Collection, Dictionary, MemberValue, Object,
        ObjectArray, Reflect, TypeBuilder, TypeFlavor, TypeInfo, TypeKey, TypeRc, Value,
    },
    Result,
};

/// Take a value for a collection member of type `C` holding `T`.
///
/// Accepts a `C` as-is, or an [`ObjectArray`] whose items all convert to `T`.
fn collection_from_value<C, T>(value: Value) -> Result<C>
where
    C: Object + FromIterator<T>,
    T: MemberValue,
{
    let object = require_value::<C>(value)?;
    let found = object.object_type().key;

    let any = match object.into_any().downcast::<C>() {
        Ok(collection) => return Ok(*collection),
        Err(any) => any,
    };

    match any.downcast::<ObjectArray>() {
        Ok(array) => array
            .into_items()
            .into_iter()
            .map(|item| T::from_value(Some(item)))
            .collect(),
        Err(_) => Err(mismatch_error!(type_name::<C>(), found)),
    }
}

macro_rules! sequence_types {
    ($($seq:ident),+) => {
        $(
            impl<T: Object + MemberValue + Clone> Object for $seq<T> {
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

            impl<T: Object + MemberValue + Clone> Reflect for $seq<T> {
                fn describe() -> TypeInfo {
                    TypeBuilder::<Self>::new(TypeFlavor::Collection)
                        .readonly_property("len", |sequence: &$seq<T>| $seq::len(sequence))
                        .default_constructor()
                        .build()
                }
            }

            impl<T: Object + MemberValue + Clone> MemberValue for $seq<T> {
                fn declared_type() -> TypeKey {
                    TypeKey::of::<Self>()
                }

                fn to_value(&self) -> Value {
                    Some(Box::new(self.clone()))
                }

                fn from_value(value: Value) -> Result<Self> {
                    collection_from_value::<Self, T>(value)
                }
            }

            impl<T: Object + MemberValue + Clone> Collection for $seq<T> {
                fn element_type(&self) -> TypeKey {
                    TypeKey::of::<T>()
                }

                fn len(&self) -> usize {
                    $seq::len(self)
                }

                fn items(&self) -> Box<dyn Iterator<Item = &dyn Object> + '_> {
                    Box::new(self.iter().map(|item| item as &dyn Object))
                }
            }
        )+
    };
}

sequence_types!(Vec, VecDeque);

macro_rules! dictionary_types {
    ($($map:ident<K: $($bound:ident),+>),+) => {
        $(
            impl<K, V> Object for $map<K, V>
            where
                K: $($bound +)+ Clone + Send + Sync + 'static,
                V: Object + Clone,
            {
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

                fn as_dictionary(&self) -> Option<&dyn Dictionary> {
                    Some(self)
                }
            }

            impl<K, V> Reflect for $map<K, V>
            where
                K: $($bound +)+ Clone + Send + Sync + 'static,
                V: Object + Clone,
            {
                fn describe() -> TypeInfo {
                    TypeBuilder::<Self>::new(TypeFlavor::Dictionary)
                        .readonly_property("len", |map: &$map<K, V>| $map::len(map))
                        .default_constructor()
                        .build()
                }
            }

            impl<K, V> MemberValue for $map<K, V>
            where
                K: $($bound +)+ Clone + Send + Sync + 'static,
                V: Object + Clone,
            {
                fn declared_type() -> TypeKey {
                    TypeKey::of::<Self>()
                }

                fn to_value(&self) -> Value {
                    Some(Box::new(self.clone()))
                }

                fn from_value(value: Value) -> Result<Self> {
                    downcast_value::<Self>(value)
                }
            }

            impl<K, V> Dictionary for $map<K, V>
            where
                K: $($bound +)+ Clone + Send + Sync + 'static,
                V: Object + Clone,
            {
                fn len(&self) -> usize {
                    $map::len(self)
                }

                fn values(&self) -> Box<dyn Iterator<Item = &dyn Object> + '_> {
                    Box::new($map::values(self).map(|value| value as &dyn Object))
                }
            }
        )+
    };
}

dictionary_types!(HashMap<K: Eq, Hash>, BTreeMap<K: Ord>);
