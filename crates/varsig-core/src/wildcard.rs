use varsig_model::{TypeArgument, TypeParamDef, Variance};

use crate::{MappingContext, TypeMappingMode};

impl MappingContext<'_> {
    /// The wildcard to write for `argument` supplied for `parameter`: `Out` is `? extends`,
    /// `In` is `? super`, `Invariant` is the bare argument.
    ///
    /// Use-site projections are always kept. Declaration-site variance becomes a wildcard
    /// unless `mode` suppresses it, or allows skipping it and the argument is already most
    /// precise in that position. A projection against the declared variance (`In<out X>`)
    /// degenerates to `Out`.
    pub fn variance_for_wildcard(
        &self,
        parameter: Option<&TypeParamDef>,
        argument: &TypeArgument,
        mode: &TypeMappingMode,
    ) -> Variance {
        let projection = argument.variance();
        let Some(parameter) = parameter else {
            return projection;
        };
        let TypeArgument::Projection { ty, .. } = argument else {
            return Variance::Out;
        };

        let declared = parameter.variance;
        if declared == Variance::Invariant {
            return projection;
        }
        if mode.skip_declaration_site_wildcards {
            return Variance::Invariant;
        }

        if projection == Variance::Invariant || projection == declared {
            if mode.skip_declaration_site_wildcards_if_possible {
                if declared == Variance::Out && self.is_most_precise_covariant_argument(ty) {
                    return Variance::Invariant;
                }
                if declared == Variance::In
                    && self.is_most_precise_contravariant_argument(ty, parameter)
                {
                    return Variance::Invariant;
                }
            }
            return declared;
        }

        Variance::Out
    }
}
