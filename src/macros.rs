/// Implement [`Object`](crate::Object) and [`MemberValue`](crate::MemberValue) for reflected types.
///
/// Each type must implement [`Reflect`](crate::Reflect) and `Clone`, and be `Send + Sync`.
/// Values of these types are cloned when read from a member and downcast back when assigned.
///
/// ```rust
/// use mapscope::{impl_object, Reflect, TypeBuilder, TypeInfo};
///
/// #[derive(Clone, Default)]
/// struct Tag {
///     label: String,
/// }
///
/// impl Reflect for Tag {
///     fn describe() -> TypeInfo {
///         TypeBuilder::<Self>::class()
///             .field("label", |t| &t.label, |t| &mut t.label)
///             .default_constructor()
///             .build()
///     }
/// }
///
/// impl_object!(Tag);
/// ```
#[macro_export]
macro_rules! impl_object {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Object for $ty {
                fn object_type(&self) -> $crate::TypeRc {
                    $crate::type_of::<Self>()
                }

                fn as_any(&self) -> &dyn ::std::any::Any {
                    self
                }

                fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                    self
                }

                fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn ::std::any::Any> {
                    self
                }

                fn clone_object(&self) -> ::std::boxed::Box<dyn $crate::Object> {
                    ::std::boxed::Box::new(::std::clone::Clone::clone(self))
                }
            }

            impl $crate::MemberValue for $ty {
                fn declared_type() -> $crate::TypeKey {
                    $crate::TypeKey::of::<Self>()
                }

                fn to_value(&self) -> $crate::Value {
                    ::std::option::Option::Some(::std::boxed::Box::new(::std::clone::Clone::clone(self)))
                }

                fn from_value(value: $crate::Value) -> $crate::Result<Self> {
                    $crate::typesystem::downcast_value::<Self>(value)
                }
            }
        )+
    };
}

/// Implement [`Interface`](crate::Interface) for `dyn Trait`, making `Arc<dyn Trait>` usable as
/// a member type declared as the trait object.
///
/// The trait must have [`Object`](crate::Object) as a supertrait. Every concrete type that can end
/// up behind the interface has to be listed: assignment recovers the interface from a concrete
/// value by trying each listed type in turn. A member declared this way is what an interface
/// binding resolves.
///
/// ```rust
/// use std::sync::Arc;
/// use mapscope::{
///     impl_object, interface, MemberValue, Object, Reflect, TypeBuilder, TypeInfo, TypeKey,
/// };
///
/// trait Shape: Object {
///     fn area(&self) -> f64;
/// }
///
/// #[derive(Clone, Default)]
/// struct Square {
///     side: f64,
/// }
///
/// impl Shape for Square {
///     fn area(&self) -> f64 {
///         self.side * self.side
///     }
/// }
///
/// impl Reflect for Square {
///     fn describe() -> TypeInfo {
///         TypeBuilder::<Self>::class()
///             .field("side", |s| &s.side, |s| &mut s.side)
///             .default_constructor()
///             .build()
///     }
/// }
///
/// impl_object!(Square);
/// interface!(Shape => Square);
///
/// assert_eq!(<Arc<dyn Shape>>::declared_type(), TypeKey::of::<dyn Shape>());
/// let shape = <Arc<dyn Shape>>::from_value(Some(Box::new(Square { side: 2.0 })))?;
/// assert_eq!(shape.area(), 4.0);
/// # Ok::<(), mapscope::Error>(())
/// ```
#[macro_export]
macro_rules! interface {
    ($iface:path => $($concrete:ty),+ $(,)?) => {
        impl $crate::Interface for dyn $iface {
            fn clone_concrete(&self) -> ::std::boxed::Box<dyn $crate::Object> {
                $crate::Object::clone_object(self)
            }

            fn from_concrete(
                object: ::std::boxed::Box<dyn ::std::any::Any>,
            ) -> ::std::result::Result<
                ::std::sync::Arc<Self>,
                ::std::boxed::Box<dyn ::std::any::Any>,
            > {
                $(
                    let object = match object.downcast::<$concrete>() {
                        ::std::result::Result::Ok(concrete) => {
                            return ::std::result::Result::Ok(
                                ::std::sync::Arc::new(*concrete) as ::std::sync::Arc<dyn $iface>
                            );
                        }
                        ::std::result::Result::Err(object) => object,
                    };
                )+
                ::std::result::Result::Err(object)
            }
        }
    };
}
