use crate::components::{Component, TypeRegistry};
use crate::data_structures::Mask;
use crate::error::Result;

/// A set of [Component] types, implemented for tuples of up to twelve types.
/// It provides a unified way to build a [Mask] from a set of component types.
pub trait ComponentSet {
	/// Combine the bits of every type in the set.
	/// Fails if one of the types was never registered.
	fn mask(types: &TypeRegistry) -> Result<Mask>;
}

impl ComponentSet for () {
	fn mask(_: &TypeRegistry) -> Result<Mask> {
		Ok(Mask::EMPTY)
	}
}

macro_rules! impl_component_set {
    ($($t: ident),*) => {
        impl <$($t: Component),*> ComponentSet for ($($t),*,) {
            fn mask(types: &TypeRegistry) -> Result<Mask> {
                let mut mask = Mask::EMPTY;
                $(mask |= types.mask_of::<$t>()?;)*
                Ok(mask)
            }
        }
    };
}

impl_component_set!(T0);
impl_component_set!(T0, T1);
impl_component_set!(T0, T1, T2);
impl_component_set!(T0, T1, T2, T3);
impl_component_set!(T0, T1, T2, T3, T4);
impl_component_set!(T0, T1, T2, T3, T4, T5);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
