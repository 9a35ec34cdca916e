use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Annotation, Annotations};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(u32);

        impl $name {
            pub const fn from_raw(raw: u32) -> Self {
                Self(raw)
            }

            pub const fn to_raw(self) -> u32 {
                self.0
            }

            pub(crate) fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

define_id!(
    /// Index of a class, interface, object or enum entry in a [`crate::TypeModel`].
    ClassId
);
define_id!(
    /// Index of a type parameter declaration.
    TypeParamId
);
define_id!(
    /// Index of a declaration (package, file, class, callable, ...) in the lexical tree.
    DeclId
);

/// Variance of a type parameter declaration (`out T`) or of a use-site projection (`in T`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variance {
    #[default]
    Invariant,
    In,
    Out,
}

impl Variance {
    /// Source-level keyword (`""`, `"in"`, `"out"`).
    pub fn label(self) -> &'static str {
        match self {
            Variance::Invariant => "",
            Variance::In => "in",
            Variance::Out => "out",
        }
    }
}

impl fmt::Display for Variance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variance::Invariant => f.write_str("invariant"),
            other => f.write_str(other.label()),
        }
    }
}

/// What a type occurrence refers to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeConstructor {
    Class(ClassId),
    TypeParam(TypeParamId),
    /// A reference that failed to resolve; carries the name as written.
    Unresolved(String),
}

/// One type argument of a [`KotlinType`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TypeArgument {
    /// `*`
    Star,
    Projection { variance: Variance, ty: KotlinType },
}

impl TypeArgument {
    pub fn invariant(ty: KotlinType) -> Self {
        Self::Projection {
            variance: Variance::Invariant,
            ty,
        }
    }

    pub fn covariant(ty: KotlinType) -> Self {
        Self::Projection {
            variance: Variance::Out,
            ty,
        }
    }

    pub fn contravariant(ty: KotlinType) -> Self {
        Self::Projection {
            variance: Variance::In,
            ty,
        }
    }

    pub fn is_star(&self) -> bool {
        matches!(self, TypeArgument::Star)
    }

    /// Use-site variance. A star projection reads as `out`.
    pub fn variance(&self) -> Variance {
        match self {
            TypeArgument::Star => Variance::Out,
            TypeArgument::Projection { variance, .. } => *variance,
        }
    }

    pub fn ty(&self) -> Option<&KotlinType> {
        match self {
            TypeArgument::Star => None,
            TypeArgument::Projection { ty, .. } => Some(ty),
        }
    }
}

/// A type occurrence: constructor, arguments, nullability and type annotations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KotlinType {
    pub constructor: TypeConstructor,
    pub arguments: Vec<TypeArgument>,
    pub nullable: bool,
    #[serde(default)]
    pub annotations: Annotations,
}

impl KotlinType {
    pub fn class(id: ClassId, arguments: Vec<TypeArgument>) -> Self {
        Self {
            constructor: TypeConstructor::Class(id),
            arguments,
            nullable: false,
            annotations: Annotations::default(),
        }
    }

    pub fn type_param(id: TypeParamId) -> Self {
        Self {
            constructor: TypeConstructor::TypeParam(id),
            arguments: Vec::new(),
            nullable: false,
            annotations: Annotations::default(),
        }
    }

    pub fn unresolved(name: impl Into<String>) -> Self {
        Self {
            constructor: TypeConstructor::Unresolved(name.into()),
            arguments: Vec::new(),
            nullable: false,
            annotations: Annotations::default(),
        }
    }

    pub fn make_nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn with_annotation(mut self, annotation: impl Into<Annotation>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn class_id(&self) -> Option<ClassId> {
        match self.constructor {
            TypeConstructor::Class(id) => Some(id),
            _ => None,
        }
    }

    pub fn argument(&self, index: usize) -> Option<&TypeArgument> {
        self.arguments.get(index)
    }
}
