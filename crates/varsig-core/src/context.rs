use std::fmt;

use serde::{Deserialize, Serialize};
use varsig_model::TypeModel;

/// Tunables for the mapping decisions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MappingOptions {
    /// Nesting depth after which a type is assumed to have further subtypes.
    #[serde(default = "MappingOptions::default_max_type_depth")]
    pub max_type_depth: usize,
}

impl MappingOptions {
    pub const DEFAULT_MAX_TYPE_DEPTH: usize = 64;

    fn default_max_type_depth() -> usize {
        Self::DEFAULT_MAX_TYPE_DEPTH
    }
}

impl Default for MappingOptions {
    fn default() -> Self {
        Self {
            max_type_depth: Self::DEFAULT_MAX_TYPE_DEPTH,
        }
    }
}

/// Per-invocation view of a [`TypeModel`] used by every mapping decision.
///
/// Holds no mutable state; create one per worker (or share one) over an immutable model
/// snapshot.
pub struct MappingContext<'env> {
    env: &'env dyn TypeModel,
    options: MappingOptions,
}

impl fmt::Debug for MappingContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingContext")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<'env> MappingContext<'env> {
    pub fn new(env: &'env dyn TypeModel) -> Self {
        Self::with_options(env, MappingOptions::default())
    }

    pub fn with_options(env: &'env dyn TypeModel, options: MappingOptions) -> Self {
        Self { env, options }
    }

    pub fn env(&self) -> &'env dyn TypeModel {
        self.env
    }

    pub fn options(&self) -> &MappingOptions {
        &self.options
    }
}
