use varsig_model::{parents_with_self, Annotation, DeclId, KotlinType};

use crate::{MappingContext, TypeMappingMode, MAPPING_TARGET};

/// `@JvmSuppressWildcards(suppress: Boolean = true)`
pub const JVM_SUPPRESS_WILDCARDS_ANNOTATION_FQ_NAME: &str = "kotlin.jvm.JvmSuppressWildcards";
/// `@JvmWildcard`
pub const JVM_WILDCARD_ANNOTATION_FQ_NAME: &str = "kotlin.jvm.JvmWildcard";

/// The marker's boolean argument; a missing or non-boolean argument reads as `true`.
fn suppress_value(annotation: &Annotation) -> bool {
    annotation
        .first_argument()
        .and_then(|value| value.as_bool())
        .unwrap_or(true)
}

fn type_suppress_wildcards_mode(ty: &KotlinType) -> Option<bool> {
    ty.annotations
        .find(JVM_SUPPRESS_WILDCARDS_ANNOTATION_FQ_NAME)
        .map(suppress_value)
}

impl MappingContext<'_> {
    /// Nearest `@JvmSuppressWildcards` on `decl` or its lexical parents.
    fn declaration_suppress_wildcards_mode(&self, decl: DeclId) -> Option<bool> {
        let env = self.env();
        parents_with_self(env, decl)
            .filter_map(|current| {
                env.declaration(current)?
                    .annotations
                    .find(JVM_SUPPRESS_WILDCARDS_ANNOTATION_FQ_NAME)
            })
            .map(suppress_value)
            .next()
    }

    /// Mode dictated by a `@JvmSuppressWildcards` marker on `outer_type`, or else on `callable`
    /// and its enclosing declarations.
    ///
    /// Returns `None` when no marker applies; the caller keeps its own mode. A marker on a
    /// type without arguments yields [`TypeMappingMode::default_mode`].
    pub fn extract_type_mapping_mode_from_annotation(
        &self,
        callable: Option<DeclId>,
        outer_type: &KotlinType,
        is_for_annotation_parameter: bool,
    ) -> Option<TypeMappingMode> {
        let suppress = type_suppress_wildcards_mode(outer_type).or_else(|| {
            callable.and_then(|callable| self.declaration_suppress_wildcards_mode(callable))
        })?;

        tracing::trace!(
            target: MAPPING_TARGET,
            suppress,
            ?callable,
            "@JvmSuppressWildcards applies to signature part"
        );

        if outer_type.arguments.is_empty() {
            return Some(TypeMappingMode::default_mode());
        }
        Some(
            TypeMappingMode::create_with_constant_declaration_site_wildcards_mode(
                suppress,
                is_for_annotation_parameter,
                !self.env().is_inline_class_type(outer_type),
                None,
            ),
        )
    }
}

impl TypeMappingMode {
    /// Applies `@JvmSuppressWildcards` / `@JvmWildcard` found on a type argument.
    ///
    /// A suppress marker replaces the wildcard policy outright. `@JvmWildcard` forces wildcards
    /// and keeps the current mode as fallback; a mode that is already such an override falls
    /// back to the same mode it did, so applying the same type twice changes nothing.
    pub fn update_argument_mode_from_annotations(&self, ty: &KotlinType) -> TypeMappingMode {
        if let Some(suppress) = type_suppress_wildcards_mode(ty) {
            return Self::create_with_constant_declaration_site_wildcards_mode(
                suppress,
                self.is_for_annotation_parameter,
                self.need_inline_class_wrapping,
                None,
            );
        }

        if ty.annotations.has(JVM_WILDCARD_ANNOTATION_FQ_NAME) {
            let fallback = match &self.fallback {
                Some(fallback) => (**fallback).clone(),
                None => self.clone(),
            };
            return Self::create_with_constant_declaration_site_wildcards_mode(
                false,
                self.is_for_annotation_parameter,
                self.need_inline_class_wrapping,
                Some(fallback),
            );
        }

        self.clone()
    }
}
