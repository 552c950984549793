//! Object-to-object mapping.
//!
//! This module copies member values from a source object onto a pre-constructed destination of a
//! different type. Members are matched by kind and exact name; destination members declared as a
//! trait object can be bound to a concrete type, and source collections can be converted element
//! by element.
//!
//! # Key Components
//!
//! - [`TypeBindingRegistry`]: Interface and element bindings, registered before mapping
//! - [`MemberResolver`]: Builds and caches the [`MappingTable`] of a type pair
//! - [`CollectionConverter`]: Converts collections through element bindings
//! - [`Mapper`]: The copy engine
//! - [`MapperOptions`]: Dictionary policy and recursion limit
//!
//! # Lifecycle
//!
//! Bindings are registered on a mutable [`TypeBindingRegistry`]. Creating the [`Mapper`] takes
//! ownership of the registry, after which the bindings are read-only. The mapper
//! is `Send + Sync` and can be shared between threads; mapping tables are built on first use of a
//! type pair and kept for the lifetime of the mapper.
//!
//! # Examples
//!
//! ```rust
//! use mapscope::{impl_object, Mapper, Reflect, TypeBindingRegistry, TypeBuilder, TypeInfo};
//!
//! #[derive(Clone, Default)]
//! struct Order {
//!     items: Vec<String>,
//! }
//!
//! #[derive(Clone, Default)]
//! struct Line {
//!     value: String,
//! }
//!
//! #[derive(Clone, Default)]
//! struct OrderView {
//!     items: Vec<Line>,
//! }
//!
//! impl Reflect for Order {
//!     fn describe() -> TypeInfo {
//!         TypeBuilder::<Self>::class()
//!             .property("items", |o: &Order| o.items.clone(), |o: &mut Order, v| o.items = v)
//!             .default_constructor()
//!             .build()
//!     }
//! }
//!
//! impl Reflect for Line {
//!     fn describe() -> TypeInfo {
//!         TypeBuilder::<Self>::class()
//!             .property("value", |l: &Line| l.value.clone(), |l: &mut Line, v| l.value = v)
//!             .default_constructor()
//!             .build()
//!     }
//! }
//!
//! impl Reflect for OrderView {
//!     fn describe() -> TypeInfo {
//!         TypeBuilder::<Self>::class()
//!             .property(
//!                 "items",
//!                 |o: &OrderView| o.items.clone(),
//!                 |o: &mut OrderView, v| o.items = v,
//!             )
//!             .default_constructor()
//!             .build()
//!     }
//! }
//!
//! impl_object!(Order, Line, OrderView);
//!
//! let mut bindings = TypeBindingRegistry::new();
//! bindings.register_element::<String, Line>();
//! let mapper = Mapper::new(bindings);
//!
//! let order = Order { items: vec!["tea".to_string()] };
//! let mut view = OrderView::default();
//! mapper.map(&order, &mut view)?;
//! assert_eq!(view.items[0].value, "tea");
//! # Ok::<(), mapscope::Error>(())
//! ```

mod bindings;
mod collections;
mod engine;
mod options;
mod resolver;

pub use bindings::{ElementBinding, InterfaceBinding, TypeBindingRegistry};
pub use collections::{CollectionConverter, Conversion, ValueShape};
pub use engine::Mapper;
pub use options::{DictionaryPolicy, MapperOptions};
pub use resolver::{MappingTable, MemberPairing, MemberResolver};
