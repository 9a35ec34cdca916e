use varsig_model::{first_overridden, fq_name_of, original_of, property_if_accessor, DeclId};

use crate::{MappingContext, MAPPING_TARGET};

/// Mutating collection members whose parameters keep declaration-site wildcards even when
/// wildcards are otherwise suppressed.
pub const METHODS_WITH_DECLARATION_SITE_WILDCARDS: [&str; 3] = [
    "kotlin.collections.MutableCollection.addAll",
    "kotlin.collections.MutableList.addAll",
    "kotlin.collections.MutableMap.putAll",
];

impl MappingContext<'_> {
    /// Whether `callable` is, or transitively overrides, one of
    /// [`METHODS_WITH_DECLARATION_SITE_WILDCARDS`].
    ///
    /// The override chain is walked from the un-substituted original, reading each member's
    /// original, and stops at the first match. Non-member declarations answer `false`.
    pub fn is_method_with_declaration_site_wildcards(&self, callable: Option<DeclId>) -> bool {
        let env = self.env();
        let Some(callable) = callable else {
            return false;
        };
        if !env
            .declaration(callable)
            .is_some_and(|decl| decl.is_callable_member())
        {
            return false;
        }

        let found = first_overridden(env, original_of(env, callable), true, |candidate| {
            fq_name_of(env, property_if_accessor(env, candidate)).is_some_and(|name| {
                METHODS_WITH_DECLARATION_SITE_WILDCARDS.contains(&name.as_str())
            })
        });

        if let Some(found) = found {
            tracing::trace!(
                target: MAPPING_TARGET,
                ?callable,
                ?found,
                "callable keeps declaration-site wildcards"
            );
        }
        found.is_some()
    }
}
