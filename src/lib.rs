// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # mapscope
//!
//! A generic object-to-object mapper. Given a source object and a pre-constructed destination of
//! a different type, `mapscope` copies the values of members matched by kind and name, resolves
//! destination members declared as trait objects to concrete types through registered bindings,
//! and converts source collections element by element into destination collections.
//!
//! ## Features
//!
//! - **Name-based pairing** - Fields pair with fields, properties with properties, by exact name
//! - **Cached mapping tables** - Pairings are computed once per type pair and reused
//! - **Interface bindings** - Trait-object members are instantiated as a registered concrete type
//!   and mapped recursively
//! - **Element bindings** - Collections are converted into arrays of a registered element type
//! - **Thread safe** - A [`Mapper`] is `Send + Sync`; batches can be mapped in parallel
//!
//! ## Quick Start
//!
//! ```rust
//! use mapscope::prelude::*;
//!
//! #[derive(Clone, Default)]
//! struct Source {
//!     name: String,
//!     tags: Vec<String>,
//! }
//!
//! #[derive(Clone, Default, Debug, PartialEq)]
//! struct Wrapper {
//!     value: String,
//! }
//!
//! #[derive(Clone, Default)]
//! struct Dest {
//!     name: String,
//!     tags: Vec<Wrapper>,
//! }
//!
//! impl Reflect for Source {
//!     fn describe() -> TypeInfo {
//!         TypeBuilder::<Self>::class()
//!             .property("name", |s: &Source| s.name.clone(), |s: &mut Source, v| s.name = v)
//!             .property("tags", |s: &Source| s.tags.clone(), |s: &mut Source, v| s.tags = v)
//!             .default_constructor()
//!             .build()
//!     }
//! }
//!
//! impl Reflect for Wrapper {
//!     fn describe() -> TypeInfo {
//!         TypeBuilder::<Self>::class()
//!             .property("value", |w: &Wrapper| w.value.clone(), |w: &mut Wrapper, v| w.value = v)
//!             .default_constructor()
//!             .build()
//!     }
//! }
//!
//! impl Reflect for Dest {
//!     fn describe() -> TypeInfo {
//!         TypeBuilder::<Self>::class()
//!             .property("name", |d: &Dest| d.name.clone(), |d: &mut Dest, v| d.name = v)
//!             .property("tags", |d: &Dest| d.tags.clone(), |d: &mut Dest, v| d.tags = v)
//!             .default_constructor()
//!             .build()
//!     }
//! }
//!
//! impl_object!(Source, Wrapper, Dest);
//!
//! let mut bindings = TypeBindingRegistry::new();
//! bindings.register_element::<String, Wrapper>();
//! let mapper = Mapper::new(bindings);
//!
//! let source = Source {
//!     name: "a".to_string(),
//!     tags: vec!["x".to_string(), "y".to_string()],
//! };
//! let mut dest = Dest::default();
//! mapper.map(&source, &mut dest)?;
//!
//! assert_eq!(dest.name, "a");
//! assert_eq!(
//!     dest.tags,
//!     vec![
//!         Wrapper { value: "x".to_string() },
//!         Wrapper { value: "y".to_string() },
//!     ]
//! );
//! # Ok::<(), mapscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`typesystem`] - The reflective type system: type descriptions, member accessors and the
//!   runtime view of values. Rust has no runtime reflection, so every mapped type describes itself
//!   through [`Reflect`] and [`TypeBuilder`].
//! - [`mapping`] - Binding tables, mapping tables, collection conversion and the copy engine.
//! - [`prelude`] - Convenient re-exports of commonly used types, traits and macros.
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T>`]. A mapping call aborts at the first error; members
//! that were copied before it stay copied. Unmatched members, unbound collections and skipped
//! dictionaries are not errors.
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade: building a mapping table is
//! logged at `debug`, every member copy at `trace`, and skipped dictionary data at `warn`. No
//! logger is installed by the library.
#[macro_use]
pub(crate) mod macros;

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use mapscope::prelude::*;
///
/// let mapper = Mapper::with_options(
///     TypeBindingRegistry::new(),
///     MapperOptions::default().with_dictionary_policy(DictionaryPolicy::Reject),
/// );
/// assert_eq!(mapper.options().dictionary_policy, DictionaryPolicy::Reject);
/// ```
pub mod prelude;

pub mod mapping;
pub mod typesystem;

/// `mapscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `mapscope` Error type
///
/// The main error type for all operations in this crate, covering construction, assignment and
/// policy failures.
pub use error::Error;

pub use mapping::{DictionaryPolicy, Mapper, MapperOptions, TypeBindingRegistry};
pub use typesystem::{
    type_of, Interface, MemberFlags, MemberKind, MemberValue, Object, Reflect, TypeBuilder,
    TypeFlavor, TypeInfo, TypeKey, TypeRc, Value,
};
