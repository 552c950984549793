//! Collection conversion.
//!
//! A source value is classified as a dictionary, a collection or a scalar ([`ValueShape`]).
//! Collections whose element type has an element binding are converted into an [`ObjectArray`]
//! of the bound destination type, one freshly constructed and recursively mapped instance per
//! source element, in source order. Dictionaries are never converted, see [`DictionaryPolicy`].
//! Everything else is left to direct assignment.

use crate::{
    mapping::{DictionaryPolicy, TypeBindingRegistry},
    typesystem::{Collection, Dictionary, MemberInfo, Object, ObjectArray},
    Error, Result,
};

/// Classification of a source value
#[derive(Clone, Copy)]
pub enum ValueShape<'a> {
    /// Key/value semantics
    Dictionary(&'a dyn Dictionary),
    /// Homogeneous, enumerable collection
    Collection(&'a dyn Collection),
    /// Anything else
    Scalar,
}

impl<'a> ValueShape<'a> {
    /// Classify `value`. Dictionary semantics take precedence over collection semantics.
    #[must_use]
    pub fn classify(value: &'a dyn Object) -> Self {
        if let Some(dictionary) = value.as_dictionary() {
            ValueShape::Dictionary(dictionary)
        } else if let Some(collection) = value.as_collection() {
            ValueShape::Collection(collection)
        } else {
            ValueShape::Scalar
        }
    }
}

/// Outcome of [`CollectionConverter::try_convert`]
#[derive(Debug)]
pub enum Conversion {
    /// Converted into an array to assign to the destination member
    Converted(ObjectArray),
    /// Handled without producing a value, the destination member stays untouched
    Skipped,
    /// Not a convertible collection, the caller assigns the value directly
    Unhandled,
}

/// Converts collection-valued members through element bindings
pub struct CollectionConverter<'a> {
    bindings: &'a TypeBindingRegistry,
    policy: DictionaryPolicy,
}

impl<'a> CollectionConverter<'a> {
    /// Create a converter over a binding registry
    ///
    /// ## Arguments
    /// * `bindings` - The element bindings to resolve against
    /// * `policy` - Handling of dictionary-valued sources
    #[must_use]
    pub fn new(bindings: &'a TypeBindingRegistry, policy: DictionaryPolicy) -> Self {
        CollectionConverter { bindings, policy }
    }

    /// Try to convert `source` for assignment to `dest_member`.
    ///
    /// `map_element` is called with every source element and the freshly constructed destination
    /// element it must be mapped onto.
    ///
    /// ## Arguments
    /// * `source` - The source member value, `None` for null
    /// * `dest_member` - The destination member; its owner selects qualified element bindings
    /// * `map_element` - Maps one source element onto one destination element
    ///
    /// # Errors
    /// Returns [`Error::DictionaryUnsupported`] for dictionaries under
    /// [`DictionaryPolicy::Reject`], [`Error::NoDefaultConstructor`] if the destination element
    /// type can not be instantiated, and any error raised by `map_element`.
    pub fn try_convert<F>(
        &self,
        source: Option<&dyn Object>,
        dest_member: &MemberInfo,
        mut map_element: F,
    ) -> Result<Conversion>
    where
        F: FnMut(&dyn Object, &mut dyn Object) -> Result<()>,
    {
        let Some(source) = source else {
            return Ok(Conversion::Unhandled);
        };

        let collection = match ValueShape::classify(source) {
            ValueShape::Dictionary(dictionary) => {
                let qualified = format!("{}.{}", dest_member.owner.name(), dest_member.name);
                return match self.policy {
                    DictionaryPolicy::Skip => {
                        let dropped = dictionary.values().count();
                        log::warn!(
                            "Skipping dictionary-valued member {} ({} entries not copied)",
                            qualified,
                            dropped
                        );
                        Ok(Conversion::Skipped)
                    }
                    DictionaryPolicy::Reject => Err(Error::DictionaryUnsupported(qualified)),
                };
            }
            ValueShape::Collection(collection) => collection,
            ValueShape::Scalar => return Ok(Conversion::Unhandled),
        };

        let element = collection.element_type();
        let Some(binding) = self.bindings.resolve_element(&element, &dest_member.owner) else {
            log::trace!(
                "No element binding for {}, assigning {}.{} directly",
                element,
                dest_member.owner.name(),
                dest_member.name
            );
            return Ok(Conversion::Unhandled);
        };

        let mut array = ObjectArray::with_capacity(binding.dest.key, collection.len());
        for item in collection.items() {
            let mut instance = binding.dest.instantiate()?;
            map_element(item, instance.as_mut())?;
            array.push(instance);
        }

        Ok(Conversion::Converted(array))
    }
}
