//! Process-wide cache of type descriptions.
//!
//! Descriptions are immutable once built, so one [`TypeRegistry`] is shared by every mapper in
//! the process. It only caches what [`Reflect::describe`] returns; the mapping-specific binding
//! tables live in [`crate::mapping::TypeBindingRegistry`], owned by each mapper.
//!
//! # Thread Safety
//!
//! The registry is backed by a `DashMap`. Two threads describing the same type for the first time
//! may both build a description; the first one inserted wins and both receive the same `Arc`.

use std::{
    any::TypeId,
    sync::{Arc, OnceLock},
};

use dashmap::DashMap;

use crate::typesystem::{Reflect, TypeRc};

static GLOBAL: OnceLock<TypeRegistry> = OnceLock::new();

/// Cache of type descriptions, keyed by [`TypeId`]
pub struct TypeRegistry {
    types: DashMap<TypeId, TypeRc>,
}

impl TypeRegistry {
    /// Create a new, empty registry
    #[must_use]
    pub fn new() -> Self {
        TypeRegistry {
            types: DashMap::new(),
        }
    }

    /// The registry shared by the whole process
    pub fn global() -> &'static TypeRegistry {
        GLOBAL.get_or_init(TypeRegistry::new)
    }

    /// Return the cached description of `T`, describing it on first use
    pub fn get_or_describe<T: Reflect>(&self) -> TypeRc {
        let id = TypeId::of::<T>();
        if let Some(existing) = self.types.get(&id) {
            return existing.value().clone();
        }

        // Build outside of any shard lock, `describe` may look up other types
        let described = Arc::new(T::describe());
        self.types.entry(id).or_insert(described).value().clone()
    }

    /// Look up an already described type
    #[must_use]
    pub fn get(&self, id: &TypeId) -> Option<TypeRc> {
        self.types.get(id).map(|entry| entry.value().clone())
    }

    /// Number of described types
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no type has been described yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The description of `T`, from the process-wide [`TypeRegistry`]
pub fn type_of<T: Reflect>() -> TypeRc {
    TypeRegistry::global().get_or_describe::<T>()
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::test::Person;

    #[test]
    fn describes_once() {
        let registry = TypeRegistry::new();
        assert!(registry.is_empty());

        let first = registry.get_or_describe::<Person>();
        let second = registry.get_or_describe::<Person>();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.len(), 1);
        assert!(registry.get(&TypeId::of::<Person>()).is_some());
        assert!(registry.get(&TypeId::of::<String>()).is_none());
    }

    #[test]
    fn concurrent_first_use() {
        let registry = TypeRegistry::new();

        let described: Vec<TypeRc> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| registry.get_or_describe::<Person>()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(registry.len(), 1);
        let cached = registry.get(&TypeId::of::<Person>()).unwrap();
        assert!(described.iter().all(|info| Arc::ptr_eq(info, &cached)));
    }

    #[test]
    fn global_registry_is_shared() {
        assert!(Arc::ptr_eq(&type_of::<Person>(), &type_of::<Person>()));
    }
}
