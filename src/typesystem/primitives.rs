//! Built-in scalar types.
//!
//! Every scalar is described with a single read-only property, `value`, returning the scalar
//! itself. That lets a scalar source (for instance a collection element) map onto a wrapper type
//! that declares a `value` property.

use crate::typesystem::{Reflect, TypeBuilder, TypeFlavor, TypeInfo};

macro_rules! scalar_types {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Reflect for $ty {
                #[allow(clippy::clone_on_copy)]
                fn describe() -> TypeInfo {
                    TypeBuilder::<Self>::new(TypeFlavor::Scalar)
                        .readonly_property("value", |scalar: &$ty| scalar.clone())
                        .default_constructor()
                        .build()
                }
            }
        )+

        impl_object!($($ty),+);
    };
}

scalar_types!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
);
