use serde::{Deserialize, Serialize};

use crate::{Annotations, ClassId, DeclId, FqName, KotlinType, TypeParamId, Variance};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    Class,
    Interface,
    EnumClass,
    EnumEntry,
    AnnotationClass,
    Object,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Final,
    Open,
    Abstract,
    Sealed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassDef {
    pub fq_name: FqName,
    /// Name used in JVM signatures (`java/util/List` for `kotlin.collections.List`).
    pub jvm_internal_name: String,
    pub kind: ClassKind,
    pub modality: Modality,
    /// `@JvmInline value class`.
    pub is_inline: bool,
    pub type_params: Vec<TypeParamId>,
    pub annotations: Annotations,
}

impl ClassDef {
    /// A class whose JVM name is derived from its fully-qualified name.
    pub fn new(fq_name: impl Into<FqName>, kind: ClassKind, modality: Modality) -> Self {
        let fq_name = fq_name.into();
        Self {
            jvm_internal_name: fq_name.to_internal_name(),
            fq_name,
            kind,
            modality,
            is_inline: false,
            type_params: Vec::new(),
            annotations: Annotations::default(),
        }
    }

    pub fn with_type_params(mut self, type_params: Vec<TypeParamId>) -> Self {
        self.type_params = type_params;
        self
    }

    pub fn with_jvm_name(mut self, internal_name: impl Into<String>) -> Self {
        self.jvm_internal_name = internal_name.into();
        self
    }

    pub fn inline(mut self) -> Self {
        self.is_inline = true;
        self
    }

    /// Final in the sense of "has no subclasses": enum classes are final in source but their
    /// entries subclass them.
    pub fn is_final_class(&self) -> bool {
        self.modality == Modality::Final && self.kind != ClassKind::EnumClass
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeParamDef {
    pub name: String,
    pub variance: Variance,
    pub upper_bounds: Vec<KotlinType>,
    /// Declaring class, once the parameter has been attached to one.
    pub owner: Option<ClassId>,
}

/// Callable-member data shared by functions, properties and accessors.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct CallableMember {
    /// Un-substituted declaration this member was copied from, if it is a substituted copy.
    pub original: Option<DeclId>,
    /// Members of direct supertypes this member overrides.
    pub overridden: Vec<DeclId>,
}

impl CallableMember {
    pub fn overriding(overridden: Vec<DeclId>) -> Self {
        Self {
            original: None,
            overridden,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DeclarationKind {
    /// `name` holds the full package name.
    Package,
    File,
    Class(ClassId),
    Function(CallableMember),
    Property(CallableMember),
    PropertyAccessor {
        property: DeclId,
        member: CallableMember,
    },
    ValueParameter,
    LocalVariable,
}

impl DeclarationKind {
    pub fn callable_member(&self) -> Option<&CallableMember> {
        match self {
            DeclarationKind::Function(member)
            | DeclarationKind::Property(member)
            | DeclarationKind::PropertyAccessor { member, .. } => Some(member),
            _ => None,
        }
    }
}

/// A node in the lexical declaration tree.
///
/// Parents always have a smaller [`DeclId`] than their children; the store only accepts
/// parents that already exist.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeclarationDef {
    pub name: String,
    pub kind: DeclarationKind,
    pub parent: Option<DeclId>,
    pub annotations: Annotations,
}

impl DeclarationDef {
    pub fn is_callable_member(&self) -> bool {
        self.kind.callable_member().is_some()
    }
}
