use varsig_model::{KotlinType, TypeArgument, Variance};

use crate::{effective_variance, MappingContext, MAPPING_TARGET};

impl MappingContext<'_> {
    /// Whether a strictly more specific JVM-visible type than `ty` could exist.
    ///
    /// Nullability is ignored. Open or unresolved constructors always answer `true`; a final
    /// class answers `false` only when every argument is already most precise under its
    /// effective variance. Nesting deeper than [`crate::MappingOptions::max_type_depth`]
    /// answers `true`.
    pub fn may_have_further_subtypes(&self, ty: &KotlinType) -> bool {
        self.can_have_subtypes(ty, 0)
    }

    pub(crate) fn can_have_subtypes(&self, ty: &KotlinType, depth: usize) -> bool {
        if depth > self.options().max_type_depth {
            tracing::debug!(
                target: MAPPING_TARGET,
                max_type_depth = self.options().max_type_depth,
                "type nesting exceeds depth limit; assuming further subtypes"
            );
            return true;
        }

        let env = self.env();
        let constructor = &ty.constructor;
        if !env.is_class_type_constructor(constructor)
            || !env.is_final_class_or_enum_entry_or_annotation_class_constructor(constructor)
        {
            return true;
        }

        for index in 0..env.parameters_count(constructor) {
            let Some(parameter) = env.parameter(constructor, index) else {
                return true;
            };
            // Arity mismatches are the model's problem; answer conservatively.
            let Some(argument) = ty.argument(index) else {
                return true;
            };
            let TypeArgument::Projection {
                variance: projection,
                ty: argument_type,
            } = argument
            else {
                return true;
            };

            match effective_variance(parameter.variance, *projection) {
                Variance::Out if self.can_have_subtypes(argument_type, depth + 1) => return true,
                Variance::In
                    if !self.is_most_precise_contravariant_argument(argument_type, parameter) =>
                {
                    return true
                }
                _ => {}
            }
        }

        false
    }
}
