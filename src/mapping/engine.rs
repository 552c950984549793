//! The copy engine.
//!
//! [`Mapper`] owns a frozen [`TypeBindingRegistry`], a [`MemberResolver`] and its
//! [`MapperOptions`]. Mapping a source onto a destination walks the mapping table of the pair and
//! copies every paired member:
//!
//! 1. The source member is read.
//! 2. If the destination member is bound to a concrete type through an interface binding, a new
//!    instance of that type is constructed, the source value is mapped onto it recursively and
//!    the instance is assigned. This applies to fields and properties alike. A null source value
//!    skips this step.
//! 3. Otherwise, for properties only, the value is offered to the [`CollectionConverter`]. A
//!    converted array is assigned; a skipped dictionary leaves the member untouched.
//! 4. Otherwise the value is assigned as-is. There is no coercion between types; null passes
//!    through to members that accept it.
//!
//! A mapping call aborts at the first error. Members copied before the failure stay copied.

use rayon::prelude::*;

use crate::{
    mapping::{
        CollectionConverter, Conversion, MapperOptions, MemberPairing, MemberResolver,
        TypeBindingRegistry,
    },
    typesystem::{type_of, MemberKind, Object, Reflect, TypeInfo},
    Error, Result,
};

/// Copies members between objects of different types
///
/// ```rust
/// use mapscope::{impl_object, Mapper, Reflect, TypeBindingRegistry, TypeBuilder, TypeInfo};
///
/// #[derive(Clone, Default)]
/// struct User {
///     login: String,
///     admin: bool,
/// }
///
/// #[derive(Clone, Default)]
/// struct UserView {
///     login: String,
/// }
///
/// impl Reflect for User {
///     fn describe() -> TypeInfo {
///         TypeBuilder::<Self>::class()
///             .field("login", |u| &u.login, |u| &mut u.login)
///             .field("admin", |u| &u.admin, |u| &mut u.admin)
///             .default_constructor()
///             .build()
///     }
/// }
///
/// impl Reflect for UserView {
///     fn describe() -> TypeInfo {
///         TypeBuilder::<Self>::class()
///             .field("login", |u| &u.login, |u| &mut u.login)
///             .default_constructor()
///             .build()
///     }
/// }
///
/// impl_object!(User, UserView);
///
/// let mapper = Mapper::new(TypeBindingRegistry::new());
/// let user = User { login: "ada".to_string(), admin: true };
/// let mut view = UserView::default();
///
/// mapper.map(&user, &mut view)?;
/// assert_eq!(view.login, "ada");
/// # Ok::<(), mapscope::Error>(())
/// ```
pub struct Mapper {
    bindings: TypeBindingRegistry,
    resolver: MemberResolver,
    options: MapperOptions,
}

impl Mapper {
    /// Create a mapper with default options, freezing `bindings`
    #[must_use]
    pub fn new(bindings: TypeBindingRegistry) -> Self {
        Self::with_options(bindings, MapperOptions::default())
    }

    /// Create a mapper with explicit options, freezing `bindings`
    #[must_use]
    pub fn with_options(bindings: TypeBindingRegistry, options: MapperOptions) -> Self {
        Mapper {
            bindings,
            resolver: MemberResolver::new(),
            options,
        }
    }

    /// The frozen binding registry
    ///
    /// Registration needs exclusive access, so no binding can be added once the mapper owns the
    /// registry:
    ///
    /// ```compile_fail
    /// use mapscope::{Mapper, TypeBindingRegistry};
    ///
    /// let mapper = Mapper::new(TypeBindingRegistry::new());
    /// mapper.bindings().register_element::<String, u32>();
    /// ```
    #[must_use]
    pub fn bindings(&self) -> &TypeBindingRegistry {
        &self.bindings
    }

    /// The mapping table cache
    #[must_use]
    pub fn resolver(&self) -> &MemberResolver {
        &self.resolver
    }

    /// The options this mapper was created with
    #[must_use]
    pub fn options(&self) -> &MapperOptions {
        &self.options
    }

    /// Map `source` onto `dest` using their static types
    ///
    /// # Errors
    /// Returns the first construction, assignment or policy error raised while copying.
    pub fn map<S: Reflect, D: Reflect>(&self, source: &S, dest: &mut D) -> Result<()> {
        let source_type = type_of::<S>();
        let dest_type = type_of::<D>();
        self.map_with_types(source, &source_type, dest, &dest_type, 0)
    }

    /// Map `source` onto `dest` using their runtime types
    ///
    /// # Errors
    /// Returns the first construction, assignment or policy error raised while copying.
    pub fn map_object(&self, source: &dyn Object, dest: &mut dyn Object) -> Result<()> {
        let source_type = source.object_type();
        let dest_type = dest.object_type();
        self.map_with_types(source, &source_type, dest, &dest_type, 0)
    }

    /// Map every source onto the destination at the same index, in parallel
    ///
    /// # Errors
    /// Returns [`Error::BatchLength`] if the slices differ in length, otherwise an error raised by
    /// one of the element mappings. Other pairs may have been mapped already.
    pub fn map_batch<S: Reflect, D: Reflect>(&self, sources: &[S], dests: &mut [D]) -> Result<()> {
        if sources.len() != dests.len() {
            return Err(Error::BatchLength {
                sources: sources.len(),
                dests: dests.len(),
            });
        }

        sources
            .par_iter()
            .zip(dests.par_iter_mut())
            .try_for_each(|(source, dest)| self.map(source, dest))
    }

    fn map_with_types(
        &self,
        source: &dyn Object,
        source_type: &TypeInfo,
        dest: &mut dyn Object,
        dest_type: &TypeInfo,
        depth: usize,
    ) -> Result<()> {
        if let Some(limit) = self.options.recursion_limit {
            if depth > limit {
                return Err(Error::RecursionLimit(limit));
            }
        }

        let table = self.resolver.get_or_build(source_type, dest_type);
        for pairing in table.iter() {
            self.copy_value(source, dest, pairing, depth)?;
        }

        Ok(())
    }

    fn map_nested(&self, source: &dyn Object, dest: &mut dyn Object, depth: usize) -> Result<()> {
        let source_type = source.object_type();
        let dest_type = dest.object_type();
        self.map_with_types(source, &source_type, dest, &dest_type, depth + 1)
    }

    fn copy_value(
        &self,
        source: &dyn Object,
        dest: &mut dyn Object,
        pairing: &MemberPairing,
        depth: usize,
    ) -> Result<()> {
        let member = &pairing.dest;
        let value = pairing.source.get(source)?;

        log::trace!(
            "Copying {:?} ({})",
            pairing,
            if value.is_some() { "set" } else { "null" }
        );

        if let Some(object) = &value {
            if let Some(binding) = self.bindings.resolve_concrete(&member.owner, &member.declared) {
                let mut instance = binding.concrete.instantiate()?;
                self.map_nested(object.as_ref(), instance.as_mut(), depth)?;
                return member.set(dest, Some(instance));
            }
        }

        if member.kind == MemberKind::Property {
            let converter = CollectionConverter::new(&self.bindings, self.options.dictionary_policy);
            let conversion = converter.try_convert(value.as_deref(), member, |element, target| {
                self.map_nested(element, target, depth)
            })?;

            match conversion {
                Conversion::Converted(array) => return member.set(dest, Some(Box::new(array))),
                Conversion::Skipped => return Ok(()),
                Conversion::Unhandled => {}
            }
        }

        member.set(dest, value)
    }
}
