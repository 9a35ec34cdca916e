//! Read-only declaration and type model consumed by the signature mapper.
//!
//! The mapper never mutates the model; it only asks narrow questions through [`TypeModel`]
//! (constructor shape, parameter variance, annotations, lexical parents, overridden members).
//! [`ModelStore`] is the in-memory implementation used by tests and embedders that don't carry
//! their own symbol tables.

#![forbid(unsafe_code)]

mod annotation;
mod defs;
mod name;
mod query;
mod store;
mod types;

pub use crate::annotation::{Annotation, Annotations, ConstValue};
pub use crate::defs::{
    CallableMember, ClassDef, ClassKind, DeclarationDef, DeclarationKind, Modality, TypeParamDef,
};
pub use crate::name::FqName;
pub use crate::query::{
    first_overridden, fq_name_of, original_of, overridden_with_self, parents_with_self,
    property_if_accessor, OverriddenWithSelf, ParentsWithSelf,
};
pub use crate::store::ModelStore;
pub use crate::types::{
    ClassId, DeclId, KotlinType, TypeArgument, TypeConstructor, TypeParamId, Variance,
};

/// Ids of the built-in classes and members the mapper needs to recognise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Builtins {
    pub any: ClassId,
    pub nothing: ClassId,
    pub string: ClassId,
    pub int: ClassId,
    pub number: ClassId,
    pub array: ClassId,
    pub collection: ClassId,
    pub mutable_collection: ClassId,
    pub list: ClassId,
    pub mutable_list: ClassId,
    pub map: ClassId,
    pub mutable_map: ClassId,

    pub mutable_collection_add_all: DeclId,
    pub mutable_list_add_all: DeclId,
    pub mutable_map_put_all: DeclId,
}

/// Query interface over an immutable declaration/type snapshot.
///
/// Implementations must be safe to query from several threads at once when shared; the
/// mapper holds no state of its own between calls.
pub trait TypeModel {
    fn class(&self, id: ClassId) -> Option<&ClassDef>;

    fn type_param(&self, id: TypeParamId) -> Option<&TypeParamDef>;

    fn declaration(&self, id: DeclId) -> Option<&DeclarationDef>;

    fn builtins(&self) -> &Builtins;

    fn class_of(&self, constructor: &TypeConstructor) -> Option<&ClassDef> {
        match constructor {
            TypeConstructor::Class(id) => self.class(*id),
            _ => None,
        }
    }

    fn is_class_type_constructor(&self, constructor: &TypeConstructor) -> bool {
        self.class_of(constructor).is_some()
    }

    fn is_final_class_or_enum_entry_or_annotation_class_constructor(
        &self,
        constructor: &TypeConstructor,
    ) -> bool {
        let Some(class) = self.class_of(constructor) else {
            return false;
        };
        class.is_final_class()
            || matches!(class.kind, ClassKind::EnumEntry | ClassKind::AnnotationClass)
    }

    fn is_any_constructor(&self, constructor: &TypeConstructor) -> bool {
        matches!(constructor, TypeConstructor::Class(id) if *id == self.builtins().any)
    }

    fn is_nothing_constructor(&self, constructor: &TypeConstructor) -> bool {
        matches!(constructor, TypeConstructor::Class(id) if *id == self.builtins().nothing)
    }

    fn parameters_count(&self, constructor: &TypeConstructor) -> usize {
        self.class_of(constructor)
            .map_or(0, |class| class.type_params.len())
    }

    fn parameter(&self, constructor: &TypeConstructor, index: usize) -> Option<&TypeParamDef> {
        let id = *self.class_of(constructor)?.type_params.get(index)?;
        self.type_param(id)
    }

    fn is_inline_class_type(&self, ty: &KotlinType) -> bool {
        self.class_of(&ty.constructor)
            .is_some_and(|class| class.is_inline)
    }
}
