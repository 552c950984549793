//! # mapscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types, traits and macros
//! from the mapscope library. Import this module to get quick access to everything needed to
//! describe types and map between them.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all mapscope operations
pub use crate::Error;

/// The result type used throughout mapscope
pub use crate::Result;

// ================================================================================================
// Mapping
// ================================================================================================

/// The copy engine and its configuration
pub use crate::mapping::{DictionaryPolicy, Mapper, MapperOptions};

/// Interface and element bindings
pub use crate::mapping::{ElementBinding, InterfaceBinding, TypeBindingRegistry};

/// Cached member pairings
pub use crate::mapping::{MappingTable, MemberPairing};

// ================================================================================================
// Type System
// ================================================================================================

/// Runtime view of values
pub use crate::typesystem::{Collection, Dictionary, Interface, MemberValue, Object, Value};

/// Type descriptions
pub use crate::typesystem::{
    type_of, MemberFlags, MemberInfo, MemberKind, Reflect, TypeBuilder, TypeFlavor, TypeInfo,
    TypeKey, TypeRc,
};

// ================================================================================================
// Macros
// ================================================================================================

/// Implement `Object` and `MemberValue` for reflected types, and `Interface` for trait objects
pub use crate::{impl_object, interface};
