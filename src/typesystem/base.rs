//! Identity and classification primitives of the reflective type system.
//!
//! - [`TypeKey`] identifies a Rust type (including unsized ones such as `dyn Trait`)
//! - [`TypeFlavor`] classifies a described type
//! - [`MemberKind`] and [`MemberFlags`] classify the members of a described type

use std::{
    any::{type_name, TypeId},
    fmt,
    hash::{Hash, Hasher},
};

use bitflags::bitflags;
use strum::{Display, EnumIter};

/// Identity of a Rust type.
///
/// Equality and hashing use the [`TypeId`] only, so two types that share a simple name but live
/// in different modules are always distinct. The fully qualified name is carried for diagnostics.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    full_name: &'static str,
}

impl TypeKey {
    /// Create the key of `T`
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        TypeKey {
            id: TypeId::of::<T>(),
            full_name: type_name::<T>(),
        }
    }

    /// The [`TypeId`] backing this key
    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The fully qualified name, e.g. `alloc::vec::Vec<alloc::string::String>`
    #[must_use]
    pub fn full_name(&self) -> &'static str {
        self.full_name
    }

    /// The simple name with every path qualifier removed, e.g. `Vec<String>`
    #[must_use]
    pub fn name(&self) -> String {
        simple_name(self.full_name)
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({})", self.full_name)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name)
    }
}

/// Strip module paths from every path segment of a type name.
///
/// `core::option::Option<alloc::string::String>` becomes `Option<String>` and
/// `dyn app::shapes::Shape` becomes `dyn Shape`.
#[must_use]
pub fn simple_name(full_name: &str) -> String {
    let mut result = String::with_capacity(full_name.len());
    let mut word = String::new();
    let mut chars = full_name.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            word.clear();
        } else if c.is_alphanumeric() || c == '_' {
            word.push(c);
        } else {
            result.push_str(&word);
            word.clear();
            result.push(c);
        }
    }

    result.push_str(&word);
    result
}

/// Classification of a described type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TypeFlavor {
    /// A user type with fields and properties
    Class,
    /// A scalar such as `bool`, `u32` or `String`
    Scalar,
    /// A homogeneous collection (`Vec<T>`, `VecDeque<T>`)
    Collection,
    /// A key/value collection (`HashMap<K, V>`, `BTreeMap<K, V>`)
    Dictionary,
    /// The dynamically typed array produced by collection conversion
    Array,
}

/// The kind of a member. Pairings only ever match members of the same kind.
///
/// The declaration order is the enumeration order used when building mapping tables: all fields
/// first, then all properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum MemberKind {
    /// Direct storage access, read through a reference into the owner
    Field,
    /// Accessor based access, read by value through a getter
    Property,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Binding flags used to select members of a type
    pub struct MemberFlags: u32 {
        /// The member lives on each instance
        const INSTANCE = 0x0001;
        /// The member is shared by all instances of the type
        const STATIC = 0x0002;
    }
}
