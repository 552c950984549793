//! Member pairing and the mapping table cache.
//!
//! For a (source type, destination type) pair, [`MemberResolver`] builds a [`MappingTable`]: the
//! ordered list of destination members that have a source member of the same kind and the exact
//! same name. Tables are built on first use and cached for the lifetime of the resolver; they are
//! never invalidated or rebuilt.
//!
//! # Enumeration Order
//!
//! Destination members are visited fields first, then properties, each in declaration order and
//! including static members. Pairings appear in that order, which is also the order members are
//! copied in.
//!
//! # Thread Safety
//!
//! The cache is a `DashMap` keyed by the [`TypeId`] pair. Concurrent first use of the same pair
//! may build the table twice; the first one inserted is kept and every caller receives it.

use std::{any::TypeId, fmt, sync::Arc};

use dashmap::DashMap;
use strum::IntoEnumIterator;

use crate::typesystem::{MemberFlags, MemberKind, MemberRc, TypeInfo, TypeKey};

/// A source member and the destination member it is copied into
#[derive(Clone)]
pub struct MemberPairing {
    /// The member read from the source
    pub source: MemberRc,
    /// The member written on the destination
    pub dest: MemberRc,
}

impl fmt::Debug for MemberPairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}.{} -> {}.{}",
            self.dest.kind,
            self.source.owner.name(),
            self.source.name,
            self.dest.owner.name(),
            self.dest.name
        )
    }
}

/// The ordered member pairings of one (source type, destination type) pair
#[derive(Debug)]
pub struct MappingTable {
    /// The source type
    pub source: TypeKey,
    /// The destination type
    pub dest: TypeKey,
    /// Pairings in destination enumeration order
    pub pairings: Vec<MemberPairing>,
}

impl MappingTable {
    /// Pair the members of `dest` with the same-kind, same-name members of `source`
    ///
    /// ## Arguments
    /// * `source` - Description of the source type
    /// * `dest` - Description of the destination type
    #[must_use]
    pub fn build(source: &TypeInfo, dest: &TypeInfo) -> Self {
        let mut pairings = Vec::new();

        for kind in MemberKind::iter() {
            for dest_member in dest.members_with(kind, MemberFlags::INSTANCE | MemberFlags::STATIC)
            {
                if let Some(source_member) = source.member(kind, dest_member.name) {
                    pairings.push(MemberPairing {
                        source: source_member.clone(),
                        dest: dest_member.clone(),
                    });
                }
            }
        }

        MappingTable {
            source: source.key,
            dest: dest.key,
            pairings,
        }
    }

    /// Number of pairings
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    /// Returns `true` if no member was paired
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    /// Iterate the pairings in copy order
    pub fn iter(&self) -> std::slice::Iter<'_, MemberPairing> {
        self.pairings.iter()
    }
}

impl<'a> IntoIterator for &'a MappingTable {
    type Item = &'a MemberPairing;
    type IntoIter = std::slice::Iter<'a, MemberPairing>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds and caches mapping tables
pub struct MemberResolver {
    tables: DashMap<(TypeId, TypeId), Arc<MappingTable>>,
}

impl MemberResolver {
    /// Create a resolver with an empty cache
    #[must_use]
    pub fn new() -> Self {
        MemberResolver {
            tables: DashMap::new(),
        }
    }

    /// Return the cached table for the pair, building it on first use
    ///
    /// ## Arguments
    /// * `source` - Description of the source type
    /// * `dest` - Description of the destination type
    pub fn get_or_build(&self, source: &TypeInfo, dest: &TypeInfo) -> Arc<MappingTable> {
        let key = (source.key.id(), dest.key.id());
        if let Some(existing) = self.tables.get(&key) {
            return existing.value().clone();
        }

        let table = Arc::new(MappingTable::build(source, dest));
        log::debug!(
            "Built mapping table {} -> {} with {} pairings",
            source.key,
            dest.key,
            table.len()
        );

        self.tables.entry(key).or_insert(table).value().clone()
    }

    /// Look up an already built table
    #[must_use]
    pub fn get(&self, source: &TypeKey, dest: &TypeKey) -> Option<Arc<MappingTable>> {
        self.tables
            .get(&(source.id(), dest.id()))
            .map(|entry| entry.value().clone())
    }

    /// Number of cached tables
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns `true` if no table was built yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Default for MemberResolver {
    fn default() -> Self {
        Self::new()
    }
}
