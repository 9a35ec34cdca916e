//! Variance and wildcard decisions for JVM generic signatures.
//!
//! Given a type occurring in a compiled signature, this crate decides whether each type
//! argument is emitted as an exact argument, `? extends`, `? super` or `*`. The decisions are:
//!
//! - [`effective_variance`]: declaration-site variance combined with use-site variance.
//! - [`MappingContext::may_have_further_subtypes`]: whether a type is "closed" at the JVM level.
//! - [`MappingContext::is_most_precise_covariant_argument`] /
//!   [`MappingContext::is_most_precise_contravariant_argument`]: whether a wildcard at one
//!   argument position would add nothing.
//! - [`MappingContext::is_method_with_declaration_site_wildcards`]: the mutating-collection
//!   carve-out.
//! - [`TypeMappingMode::update_argument_mode_from_annotations`] and
//!   [`MappingContext::extract_type_mapping_mode_from_annotation`]: `@JvmSuppressWildcards` /
//!   `@JvmWildcard` overrides.
//! - [`MappingContext::value_parameter_signature`] / [`MappingContext::return_type_signature`]:
//!   the rendered JVM generic signature.
//!
//! Everything here is a pure function of its inputs and the [`TypeModel`] snapshot.

#![forbid(unsafe_code)]

mod annotations;
mod classifier;
mod context;
mod mode;
mod oracle;
mod overrides;
mod signature;
mod variance;
mod wildcard;

pub use crate::annotations::{
    JVM_SUPPRESS_WILDCARDS_ANNOTATION_FQ_NAME, JVM_WILDCARD_ANNOTATION_FQ_NAME,
};
pub use crate::context::{MappingContext, MappingOptions};
pub use crate::mode::TypeMappingMode;
pub use crate::overrides::METHODS_WITH_DECLARATION_SITE_WILDCARDS;
pub use crate::variance::effective_variance;

pub use varsig_model::{TypeModel, Variance};

/// Tracing target for mapping decisions.
pub const MAPPING_TARGET: &str = "varsig.mapping";
