//! Builder for type descriptions.
//!
//! This module provides the [`TypeBuilder`] struct, which offers a fluent API for describing the
//! fields, properties and default constructor of a type. It is what [`Reflect::describe`]
//! implementations return through.
//!
//! Fields are accessed through a reference into their owner, properties through a getter and a
//! setter. Static members ignore the instance they are read from or written to.
//!
//! # Example
//!
//! ```rust
//! use mapscope::{impl_object, Reflect, TypeBuilder, TypeFlavor, TypeInfo};
//!
//! #[derive(Clone, Default)]
//! struct Temperature {
//!     celsius: f64,
//! }
//!
//! impl Reflect for Temperature {
//!     fn describe() -> TypeInfo {
//!         TypeBuilder::<Self>::class()
//!             .field("celsius", |t| &t.celsius, |t| &mut t.celsius)
//!             .readonly_property("fahrenheit", |t: &Temperature| t.celsius * 1.8 + 32.0)
//!             .default_constructor()
//!             .build()
//!     }
//! }
//! impl_object!(Temperature);
//!
//! let info = Temperature::describe();
//! assert_eq!(info.flavor, TypeFlavor::Class);
//! assert_eq!(info.fields.len(), 1);
//! assert!(!info.properties[0].is_writable());
//! ```

use std::{marker::PhantomData, sync::Arc};

use crate::typesystem::{
    downcast_mut, downcast_ref, Constructor, Getter, MemberFlags, MemberInfo, MemberKind,
    MemberRc, MemberValue, Object, Reflect, Setter, TypeFlavor, TypeInfo, TypeKey, Value,
};

/// Provides a fluent API for describing a type
pub struct TypeBuilder<T> {
    flavor: TypeFlavor,
    fields: Vec<MemberRc>,
    properties: Vec<MemberRc>,
    constructor: Option<Constructor>,
    _owner: PhantomData<fn() -> T>,
}

impl<T: Reflect> TypeBuilder<T> {
    /// Start describing a type of the given flavor
    ///
    /// ## Arguments
    /// * `flavor` - The classification of the type
    #[must_use]
    pub fn new(flavor: TypeFlavor) -> Self {
        TypeBuilder {
            flavor,
            fields: Vec::new(),
            properties: Vec::new(),
            constructor: None,
            _owner: PhantomData,
        }
    }

    /// Start describing a class
    #[must_use]
    pub fn class() -> Self {
        Self::new(TypeFlavor::Class)
    }

    /// Add an instance field
    ///
    /// ## Arguments
    /// * `name` - The field name
    /// * `get` - Borrows the field from its owner
    /// * `get_mut` - Mutably borrows the field from its owner
    #[must_use]
    pub fn field<M: MemberValue>(
        self,
        name: &'static str,
        get: fn(&T) -> &M,
        get_mut: fn(&mut T) -> &mut M,
    ) -> Self {
        let getter: Getter = Box::new(move |target: &dyn Object| {
            let owner = downcast_ref::<T>(target)?;
            Ok(get(owner).to_value())
        });
        let setter: Setter = Box::new(move |target: &mut dyn Object, value: Value| {
            let member =
                M::from_value(value).map_err(|e| e.in_member(&TypeKey::of::<T>(), name))?;
            *get_mut(downcast_mut::<T>(target)?) = member;
            Ok(())
        });

        self.member::<M>(name, MemberKind::Field, MemberFlags::INSTANCE, getter, Some(setter))
    }

    /// Add an instance property with a getter and a setter
    ///
    /// ## Arguments
    /// * `name` - The property name
    /// * `get` - Reads the property by value
    /// * `set` - Writes the property
    #[must_use]
    pub fn property<M: MemberValue>(
        self,
        name: &'static str,
        get: fn(&T) -> M,
        set: fn(&mut T, M),
    ) -> Self {
        let getter = Self::property_getter(get);
        let setter: Setter = Box::new(move |target: &mut dyn Object, value: Value| {
            let member =
                M::from_value(value).map_err(|e| e.in_member(&TypeKey::of::<T>(), name))?;
            set(downcast_mut::<T>(target)?, member);
            Ok(())
        });

        self.member::<M>(
            name,
            MemberKind::Property,
            MemberFlags::INSTANCE,
            getter,
            Some(setter),
        )
    }

    /// Add an instance property without a setter
    ///
    /// ## Arguments
    /// * `name` - The property name
    /// * `get` - Reads the property by value
    #[must_use]
    pub fn readonly_property<M: MemberValue>(self, name: &'static str, get: fn(&T) -> M) -> Self {
        let getter = Self::property_getter(get);
        self.member::<M>(
            name,
            MemberKind::Property,
            MemberFlags::INSTANCE,
            getter,
            None,
        )
    }

    /// Add a static field, shared by all instances
    ///
    /// ## Arguments
    /// * `name` - The field name
    /// * `get` - Reads the shared value
    /// * `set` - Writes the shared value
    #[must_use]
    pub fn static_field<M: MemberValue>(
        self,
        name: &'static str,
        get: fn() -> M,
        set: fn(M),
    ) -> Self {
        let (getter, setter) = Self::static_accessors(name, get, set);
        self.member::<M>(name, MemberKind::Field, MemberFlags::STATIC, getter, Some(setter))
    }

    /// Add a static property, shared by all instances
    ///
    /// ## Arguments
    /// * `name` - The property name
    /// * `get` - Reads the shared value
    /// * `set` - Writes the shared value
    #[must_use]
    pub fn static_property<M: MemberValue>(
        self,
        name: &'static str,
        get: fn() -> M,
        set: fn(M),
    ) -> Self {
        let (getter, setter) = Self::static_accessors(name, get, set);
        self.member::<M>(
            name,
            MemberKind::Property,
            MemberFlags::STATIC,
            getter,
            Some(setter),
        )
    }

    /// Register the function creating a default instance
    ///
    /// ## Arguments
    /// * `constructor` - Creates a new instance
    #[must_use]
    pub fn constructor(mut self, constructor: fn() -> T) -> Self {
        self.constructor = Some(Box::new(move || Box::new(constructor()) as Box<dyn Object>));
        self
    }

    /// Use [`Default`] as the default constructor
    #[must_use]
    pub fn default_constructor(self) -> Self
    where
        T: Default,
    {
        self.constructor(T::default)
    }

    /// Finish the description
    #[must_use]
    pub fn build(self) -> TypeInfo {
        TypeInfo::new(
            TypeKey::of::<T>(),
            self.flavor,
            self.fields,
            self.properties,
            self.constructor,
        )
    }

    fn property_getter<M: MemberValue>(get: fn(&T) -> M) -> Getter {
        Box::new(move |target: &dyn Object| {
            let owner = downcast_ref::<T>(target)?;
            Ok(get(owner).to_value())
        })
    }

    fn static_accessors<M: MemberValue>(
        name: &'static str,
        get: fn() -> M,
        set: fn(M),
    ) -> (Getter, Setter) {
        let getter: Getter = Box::new(move |_: &dyn Object| Ok(get().to_value()));
        let setter: Setter = Box::new(move |_: &mut dyn Object, value: Value| {
            let member =
                M::from_value(value).map_err(|e| e.in_member(&TypeKey::of::<T>(), name))?;
            set(member);
            Ok(())
        });
        (getter, setter)
    }

    fn member<M: MemberValue>(
        mut self,
        name: &'static str,
        kind: MemberKind,
        flags: MemberFlags,
        getter: Getter,
        setter: Option<Setter>,
    ) -> Self {
        let member = Arc::new(MemberInfo::new(
            name,
            kind,
            flags,
            M::declared_type(),
            TypeKey::of::<T>(),
            getter,
            setter,
        ));

        match kind {
            MemberKind::Field => self.fields.push(member),
            MemberKind::Property => self.properties.push(member),
        }
        self
    }
}
