use varsig_model::{KotlinType, TypeParamDef};

use crate::MappingContext;

impl MappingContext<'_> {
    /// `ty` in an `out` position needs no `? extends` wildcard: nothing narrower exists.
    pub fn is_most_precise_covariant_argument(&self, ty: &KotlinType) -> bool {
        !self.may_have_further_subtypes(ty)
    }

    /// `ty` in an `in` position needs no `? super` wildcard.
    ///
    /// Only `Any` is recognised; the parameter's upper bound is not consulted. Changing this
    /// changes emitted signatures.
    pub fn is_most_precise_contravariant_argument(
        &self,
        ty: &KotlinType,
        _parameter: &TypeParamDef,
    ) -> bool {
        self.env().is_any_constructor(&ty.constructor)
    }
}
