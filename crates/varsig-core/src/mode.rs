use std::sync::{Arc, LazyLock};

use varsig_model::{KotlinType, Variance};

use crate::MappingContext;

/// How a type occurrence is mapped to its JVM signature.
///
/// Modes are immutable values; every adjustment produces a new mode. Nested argument modes are
/// shared through `Arc` so deriving a mode never deep-copies the tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeMappingMode {
    /// Emit no declaration-site wildcards at all.
    pub skip_declaration_site_wildcards: bool,
    /// Omit a declaration-site wildcard where the argument is already most precise.
    pub skip_declaration_site_wildcards_if_possible: bool,
    pub is_for_annotation_parameter: bool,
    pub need_inline_class_wrapping: bool,
    /// Mode for arguments in `out` position; `None` reuses this mode.
    pub generic_argument_mode: Option<Arc<TypeMappingMode>>,
    /// Mode for arguments in `in` position; `None` reuses this mode.
    pub generic_contravariant_argument_mode: Option<Arc<TypeMappingMode>>,
    /// Mode for invariant arguments; `None` reuses this mode.
    pub generic_invariant_argument_mode: Option<Arc<TypeMappingMode>>,
    /// Mode an `@JvmWildcard` override was applied on top of. Consulted for argument modes
    /// the override itself doesn't define.
    pub fallback: Option<Arc<TypeMappingMode>>,
}

static GENERIC_ARGUMENT: LazyLock<Arc<TypeMappingMode>> =
    LazyLock::new(|| Arc::new(TypeMappingMode::base()));

static DEFAULT: LazyLock<Arc<TypeMappingMode>> = LazyLock::new(|| {
    Arc::new(TypeMappingMode {
        need_inline_class_wrapping: false,
        generic_argument_mode: Some(GENERIC_ARGUMENT.clone()),
        ..TypeMappingMode::base()
    })
});

static SUPER_TYPE: LazyLock<Arc<TypeMappingMode>> = LazyLock::new(|| {
    Arc::new(TypeMappingMode {
        skip_declaration_site_wildcards: true,
        generic_argument_mode: Some(GENERIC_ARGUMENT.clone()),
        ..TypeMappingMode::base()
    })
});

static VALUE_FOR_ANNOTATION: LazyLock<Arc<TypeMappingMode>> = LazyLock::new(|| {
    Arc::new(TypeMappingMode {
        is_for_annotation_parameter: true,
        need_inline_class_wrapping: false,
        generic_argument_mode: Some(Arc::new(TypeMappingMode {
            is_for_annotation_parameter: true,
            generic_argument_mode: Some(GENERIC_ARGUMENT.clone()),
            ..TypeMappingMode::base()
        })),
        ..TypeMappingMode::base()
    })
});

impl TypeMappingMode {
    fn base() -> Self {
        Self {
            skip_declaration_site_wildcards: false,
            skip_declaration_site_wildcards_if_possible: false,
            is_for_annotation_parameter: false,
            need_inline_class_wrapping: true,
            generic_argument_mode: None,
            generic_contravariant_argument_mode: None,
            generic_invariant_argument_mode: None,
            fallback: None,
        }
    }

    /// Mode for a type argument: every declaration-site wildcard is written out.
    pub fn generic_argument() -> Self {
        (**GENERIC_ARGUMENT).clone()
    }

    /// Mode for a top-level type with no special treatment.
    pub fn default_mode() -> Self {
        (**DEFAULT).clone()
    }

    /// Mode for supertypes in a class signature; wildcards are never allowed there.
    pub fn super_type() -> Self {
        (**SUPER_TYPE).clone()
    }

    /// Mode for annotation method return types and annotation arguments.
    pub fn value_for_annotation() -> Self {
        (**VALUE_FOR_ANNOTATION).clone()
    }

    /// A mode whose wildcard policy holds for the whole type tree below it.
    pub fn create_with_constant_declaration_site_wildcards_mode(
        skip_declaration_site_wildcards: bool,
        is_for_annotation_parameter: bool,
        need_inline_class_wrapping: bool,
        fallback: Option<TypeMappingMode>,
    ) -> Self {
        Self {
            skip_declaration_site_wildcards,
            is_for_annotation_parameter,
            need_inline_class_wrapping,
            fallback: fallback.map(Arc::new),
            ..Self::base()
        }
    }

    /// The mode for an argument whose wildcard was resolved to `variance`.
    ///
    /// Array elements of annotation parameters keep the annotation mode.
    pub fn to_generic_argument_mode(&self, variance: Variance, of_array: bool) -> Self {
        if of_array && self.is_for_annotation_parameter {
            return self.clone();
        }

        let selected = match variance {
            Variance::In => self.generic_contravariant_argument_mode.as_ref(),
            Variance::Invariant => self.generic_invariant_argument_mode.as_ref(),
            Variance::Out => self.generic_argument_mode.as_ref().or_else(|| {
                self.fallback
                    .as_ref()
                    .and_then(|fallback| fallback.generic_argument_mode.as_ref())
            }),
        };
        selected.map_or_else(|| self.clone(), |mode| (**mode).clone())
    }
}

impl MappingContext<'_> {
    /// Mode for a value parameter type. Parameters accept subtypes, so wildcards are kept
    /// unless the argument is already most precise.
    pub fn optimal_mode_for_value_parameter(&self, ty: &KotlinType) -> TypeMappingMode {
        self.optimal_mode_for_signature_part(ty, false, true)
    }

    /// Mode for a return type. Top-level declaration-site wildcards are skipped.
    pub fn optimal_mode_for_return_type(
        &self,
        ty: &KotlinType,
        is_annotation_method: bool,
    ) -> TypeMappingMode {
        self.optimal_mode_for_signature_part(ty, is_annotation_method, false)
    }

    fn optimal_mode_for_signature_part(
        &self,
        ty: &KotlinType,
        is_for_annotation_parameter: bool,
        can_be_used_in_supertype_position: bool,
    ) -> TypeMappingMode {
        if ty.arguments.is_empty() {
            return TypeMappingMode::default_mode();
        }

        let contravariant_argument_mode = (!can_be_used_in_supertype_position).then(|| {
            Arc::new(TypeMappingMode {
                is_for_annotation_parameter,
                skip_declaration_site_wildcards: false,
                skip_declaration_site_wildcards_if_possible: true,
                ..TypeMappingMode::base()
            })
        });
        let invariant_argument_mode = can_be_used_in_supertype_position.then(|| {
            Arc::new(self.optimal_mode_for_signature_part(ty, is_for_annotation_parameter, false))
        });

        TypeMappingMode {
            is_for_annotation_parameter,
            skip_declaration_site_wildcards: !can_be_used_in_supertype_position,
            skip_declaration_site_wildcards_if_possible: true,
            generic_contravariant_argument_mode: contravariant_argument_mode,
            generic_invariant_argument_mode: invariant_argument_mode,
            need_inline_class_wrapping: !self.env().is_inline_class_type(ty),
            ..TypeMappingMode::base()
        }
    }
}
