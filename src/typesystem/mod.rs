//! Reflective type system the mapper operates on.
//!
//! Rust has no runtime reflection, so every type taking part in a mapping carries a static
//! description of its members. This module provides that description and the runtime view of
//! values built on top of it.
//!
//! # Key Components
//!
//! - [`TypeInfo`]: Description of a type (flavor, fields, properties, default constructor)
//! - [`MemberInfo`]: Description of a single field or property, including its accessors
//! - [`TypeBuilder`]: Fluent API for describing a type
//! - [`TypeRegistry`]: Process-wide cache of type descriptions, see [`type_of`]
//! - [`Object`] / [`Reflect`] / [`MemberValue`]: Runtime view of values
//! - [`Collection`] / [`Dictionary`] / [`ObjectArray`]: Collection views
//!
//! # Examples
//!
//! ```rust
//! use mapscope::{impl_object, MemberKind, Reflect, TypeBuilder, TypeInfo, type_of};
//!
//! #[derive(Clone, Default)]
//! struct Account {
//!     owner: String,
//!     balance: i64,
//! }
//!
//! impl Account {
//!     fn balance(&self) -> i64 {
//!         self.balance
//!     }
//!
//!     fn set_balance(&mut self, balance: i64) {
//!         self.balance = balance;
//!     }
//! }
//!
//! impl Reflect for Account {
//!     fn describe() -> TypeInfo {
//!         TypeBuilder::<Self>::class()
//!             .field("owner", |a| &a.owner, |a| &mut a.owner)
//!             .property("balance", Account::balance, Account::set_balance)
//!             .default_constructor()
//!             .build()
//!     }
//! }
//! impl_object!(Account);
//!
//! let info = type_of::<Account>();
//! assert_eq!(info.name(), "Account");
//! assert_eq!(info.members(MemberKind::Field).len(), 1);
//! assert!(info.member(MemberKind::Property, "balance").is_some());
//! ```

mod base;
mod builder;
mod collections;
mod object;
mod primitives;
mod registry;

use std::{fmt, sync::Arc};

pub use base::{simple_name, MemberFlags, MemberKind, TypeFlavor, TypeKey};
pub use builder::TypeBuilder;
pub use object::{
    downcast_mut, downcast_ref, downcast_value, require_value, Collection, Dictionary,
    Interface, MemberValue, Object, ObjectArray, Reflect, Value,
};
pub use registry::{type_of, TypeRegistry};

use crate::{Error, Result};

/// Reference to a `TypeInfo`
pub type TypeRc = Arc<TypeInfo>;
/// Reference to a `MemberInfo`
pub type MemberRc = Arc<MemberInfo>;

/// Creates a default instance of a type
pub type Constructor = Box<dyn Fn() -> Box<dyn Object> + Send + Sync>;
/// Reads a member from its owner
pub type Getter = Box<dyn Fn(&dyn Object) -> Result<Value> + Send + Sync>;
/// Writes a member of its owner
pub type Setter = Box<dyn Fn(&mut dyn Object, Value) -> Result<()> + Send + Sync>;

/// Description of a single field or property
pub struct MemberInfo {
    /// Member name, matched case-sensitively
    pub name: &'static str,
    /// Field or property
    pub kind: MemberKind,
    /// Instance or static
    pub flags: MemberFlags,
    /// The type the member is declared as
    pub declared: TypeKey,
    /// The type that declares the member
    pub owner: TypeKey,
    getter: Getter,
    setter: Option<Setter>,
}

impl MemberInfo {
    /// Create a new member description
    ///
    /// ## Arguments
    /// * `name` - The member name
    /// * `kind` - Field or property
    /// * `flags` - Instance or static
    /// * `declared` - The declared type of the member
    /// * `owner` - The declaring type
    /// * `getter` - Reads the member
    /// * `setter` - Writes the member, `None` for read-only members
    pub fn new(
        name: &'static str,
        kind: MemberKind,
        flags: MemberFlags,
        declared: TypeKey,
        owner: TypeKey,
        getter: Getter,
        setter: Option<Setter>,
    ) -> Self {
        MemberInfo {
            name,
            kind,
            flags,
            declared,
            owner,
            getter,
            setter,
        }
    }

    /// Read the current value of this member from `target`
    ///
    /// # Errors
    /// Returns [`Error::TypeMismatch`] if `target` is not an instance of the owning type.
    pub fn get(&self, target: &dyn Object) -> Result<Value> {
        (self.getter)(target)
    }

    /// Assign `value` to this member of `target`
    ///
    /// # Errors
    /// Returns [`Error::MemberNotWritable`] for read-only members, or the assignment error raised
    /// by the member's type.
    pub fn set(&self, target: &mut dyn Object, value: Value) -> Result<()> {
        match &self.setter {
            Some(setter) => setter(target, value),
            None => Err(Error::MemberNotWritable {
                owner: self.owner.name(),
                member: self.name,
            }),
        }
    }

    /// Returns `true` if the member has a setter
    #[must_use]
    pub fn is_writable(&self) -> bool {
        self.setter.is_some()
    }

    /// Returns `true` for static members
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.flags.contains(MemberFlags::STATIC)
    }
}

impl fmt::Debug for MemberInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberInfo")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("flags", &self.flags)
            .field("declared", &self.declared)
            .field("owner", &self.owner)
            .field("writable", &self.is_writable())
            .finish()
    }
}

/// Description of a type: its identity, flavor, members and default constructor
pub struct TypeInfo {
    /// Identity of the type
    pub key: TypeKey,
    /// Classification of the type
    pub flavor: TypeFlavor,
    /// All fields, in declaration order
    pub fields: Vec<MemberRc>,
    /// All properties, in declaration order
    pub properties: Vec<MemberRc>,
    constructor: Option<Constructor>,
}

impl TypeInfo {
    /// Create a new type description
    pub fn new(
        key: TypeKey,
        flavor: TypeFlavor,
        fields: Vec<MemberRc>,
        properties: Vec<MemberRc>,
        constructor: Option<Constructor>,
    ) -> Self {
        TypeInfo {
            key,
            flavor,
            fields,
            properties,
            constructor,
        }
    }

    /// The simple name of the type
    #[must_use]
    pub fn name(&self) -> String {
        self.key.name()
    }

    /// All members of the given kind
    #[must_use]
    pub fn members(&self, kind: MemberKind) -> &[MemberRc] {
        match kind {
            MemberKind::Field => &self.fields,
            MemberKind::Property => &self.properties,
        }
    }

    /// Members of the given kind that match any of `flags`
    pub fn members_with(
        &self,
        kind: MemberKind,
        flags: MemberFlags,
    ) -> impl Iterator<Item = &MemberRc> {
        self.members(kind)
            .iter()
            .filter(move |member| member.flags.intersects(flags))
    }

    /// Look up a member by kind and exact name
    #[must_use]
    pub fn member(&self, kind: MemberKind, name: &str) -> Option<&MemberRc> {
        self.members(kind).iter().find(|member| member.name == name)
    }

    /// Returns `true` if the type can be instantiated through a default constructor
    #[must_use]
    pub fn has_default_constructor(&self) -> bool {
        self.constructor.is_some()
    }

    /// Create a new instance through the default constructor
    ///
    /// # Errors
    /// Returns [`Error::NoDefaultConstructor`] if the type has none.
    pub fn instantiate(&self) -> Result<Box<dyn Object>> {
        match &self.constructor {
            Some(constructor) => Ok(constructor()),
            None => Err(Error::NoDefaultConstructor(self.key.full_name().to_string())),
        }
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("key", &self.key)
            .field("flavor", &self.flavor)
            .field("fields", &self.fields)
            .field("properties", &self.properties)
            .field("constructor", &self.has_default_constructor())
            .finish()
    }
}
