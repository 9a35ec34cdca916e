use std::collections::HashMap;

use crate::{
    Annotation, Annotations, Builtins, CallableMember, ClassDef, ClassId, ClassKind, DeclId,
    DeclarationDef, DeclarationKind, FqName, KotlinType, Modality, TypeModel, TypeParamDef,
    TypeParamId, Variance,
};

/// In-memory [`TypeModel`].
///
/// Ids are dense indices into append-only tables, so a populated store can be shared freely
/// between threads as an immutable snapshot.
#[derive(Debug, Clone)]
pub struct ModelStore {
    classes: Vec<ClassDef>,
    type_params: Vec<TypeParamDef>,
    declarations: Vec<DeclarationDef>,
    class_by_name: HashMap<FqName, ClassId>,
    decl_by_class: HashMap<ClassId, DeclId>,
    packages: HashMap<FqName, DeclId>,
    builtins: Builtins,
}

impl Default for ModelStore {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl ModelStore {
    /// A store pre-populated with `kotlin.Any`, the primitive wrappers the mapper needs and the
    /// read-only/mutable collection interfaces (with their `addAll`/`putAll` members).
    pub fn with_builtins() -> Self {
        let placeholder_class = ClassId::from_raw(0);
        let placeholder_decl = DeclId::from_raw(0);
        let mut store = Self {
            classes: Vec::new(),
            type_params: Vec::new(),
            declarations: Vec::new(),
            class_by_name: HashMap::new(),
            decl_by_class: HashMap::new(),
            packages: HashMap::new(),
            builtins: Builtins {
                any: placeholder_class,
                nothing: placeholder_class,
                string: placeholder_class,
                int: placeholder_class,
                number: placeholder_class,
                array: placeholder_class,
                collection: placeholder_class,
                mutable_collection: placeholder_class,
                list: placeholder_class,
                mutable_list: placeholder_class,
                map: placeholder_class,
                mutable_map: placeholder_class,
                mutable_collection_add_all: placeholder_decl,
                mutable_list_add_all: placeholder_decl,
                mutable_map_put_all: placeholder_decl,
            },
        };

        let kotlin = store.package("kotlin");
        let collections = store.package("kotlin.collections");

        let any = store.add_builtin_class(
            kotlin,
            ClassDef::new("kotlin.Any", ClassKind::Class, Modality::Open)
                .with_jvm_name("java/lang/Object"),
        );
        let nothing = store.add_builtin_class(
            kotlin,
            ClassDef::new("kotlin.Nothing", ClassKind::Class, Modality::Final)
                .with_jvm_name("java/lang/Void"),
        );
        let string = store.add_builtin_class(
            kotlin,
            ClassDef::new("kotlin.String", ClassKind::Class, Modality::Final)
                .with_jvm_name("java/lang/String"),
        );
        let int = store.add_builtin_class(
            kotlin,
            ClassDef::new("kotlin.Int", ClassKind::Class, Modality::Final)
                .with_jvm_name("java/lang/Integer"),
        );
        let number = store.add_builtin_class(
            kotlin,
            ClassDef::new("kotlin.Number", ClassKind::Class, Modality::Abstract)
                .with_jvm_name("java/lang/Number"),
        );

        let array_t = store.add_type_param("T", Variance::Invariant);
        let array = store.add_builtin_class(
            kotlin,
            ClassDef::new("kotlin.Array", ClassKind::Class, Modality::Final)
                .with_jvm_name("[")
                .with_type_params(vec![array_t]),
        );

        let collection_e = store.add_type_param("E", Variance::Out);
        let collection = store.add_builtin_class(
            collections,
            ClassDef::new("kotlin.collections.Collection", ClassKind::Interface, Modality::Abstract)
                .with_jvm_name("java/util/Collection")
                .with_type_params(vec![collection_e]),
        );
        let mutable_collection_e = store.add_type_param("E", Variance::Invariant);
        let mutable_collection = store.add_builtin_class(
            collections,
            ClassDef::new(
                "kotlin.collections.MutableCollection",
                ClassKind::Interface,
                Modality::Abstract,
            )
            .with_jvm_name("java/util/Collection")
            .with_type_params(vec![mutable_collection_e]),
        );
        let list_e = store.add_type_param("E", Variance::Out);
        let list = store.add_builtin_class(
            collections,
            ClassDef::new("kotlin.collections.List", ClassKind::Interface, Modality::Abstract)
                .with_jvm_name("java/util/List")
                .with_type_params(vec![list_e]),
        );
        let mutable_list_e = store.add_type_param("E", Variance::Invariant);
        let mutable_list = store.add_builtin_class(
            collections,
            ClassDef::new(
                "kotlin.collections.MutableList",
                ClassKind::Interface,
                Modality::Abstract,
            )
            .with_jvm_name("java/util/List")
            .with_type_params(vec![mutable_list_e]),
        );
        let map_k = store.add_type_param("K", Variance::Invariant);
        let map_v = store.add_type_param("V", Variance::Out);
        let map = store.add_builtin_class(
            collections,
            ClassDef::new("kotlin.collections.Map", ClassKind::Interface, Modality::Abstract)
                .with_jvm_name("java/util/Map")
                .with_type_params(vec![map_k, map_v]),
        );
        let mutable_map_k = store.add_type_param("K", Variance::Invariant);
        let mutable_map_v = store.add_type_param("V", Variance::Invariant);
        let mutable_map = store.add_builtin_class(
            collections,
            ClassDef::new(
                "kotlin.collections.MutableMap",
                ClassKind::Interface,
                Modality::Abstract,
            )
            .with_jvm_name("java/util/Map")
            .with_type_params(vec![mutable_map_k, mutable_map_v]),
        );

        let mutable_collection_decl = store.class_declaration(mutable_collection);
        let mutable_list_decl = store.class_declaration(mutable_list);
        let mutable_map_decl = store.class_declaration(mutable_map);
        let mutable_collection_add_all =
            store.add_function(mutable_collection_decl, "addAll", vec![]);
        let mutable_list_add_all =
            store.add_function(mutable_list_decl, "addAll", vec![mutable_collection_add_all]);
        let mutable_map_put_all = store.add_function(mutable_map_decl, "putAll", vec![]);

        store.builtins = Builtins {
            any,
            nothing,
            string,
            int,
            number,
            array,
            collection,
            mutable_collection,
            list,
            mutable_list,
            map,
            mutable_map,
            mutable_collection_add_all,
            mutable_list_add_all,
            mutable_map_put_all,
        };
        store
    }

    fn add_builtin_class(&mut self, package: DeclId, def: ClassDef) -> ClassId {
        let id = self.add_class(def);
        self.add_class_declaration(package, id);
        id
    }

    pub fn class_id(&self, fq_name: &str) -> Option<ClassId> {
        self.class_by_name.get(&FqName::new(fq_name)).copied()
    }

    pub fn add_type_param(&mut self, name: impl Into<String>, variance: Variance) -> TypeParamId {
        self.add_type_param_with_bounds(name, variance, Vec::new())
    }

    pub fn add_type_param_with_bounds(
        &mut self,
        name: impl Into<String>,
        variance: Variance,
        upper_bounds: Vec<KotlinType>,
    ) -> TypeParamId {
        let id = TypeParamId::from_raw(self.type_params.len() as u32);
        self.type_params.push(TypeParamDef {
            name: name.into(),
            variance,
            upper_bounds,
            owner: None,
        });
        id
    }

    /// Registers a class. Its listed type parameters become owned by it.
    pub fn add_class(&mut self, def: ClassDef) -> ClassId {
        let id = ClassId::from_raw(self.classes.len() as u32);
        for param in &def.type_params {
            if let Some(param_def) = self.type_params.get_mut(param.index()) {
                param_def.owner = Some(id);
            }
        }
        self.class_by_name.insert(def.fq_name.clone(), id);
        self.classes.push(def);
        id
    }

    /// Adds a declaration node. A `parent` that does not exist yet is dropped, which keeps the
    /// lexical tree acyclic.
    pub fn add_declaration(&mut self, mut def: DeclarationDef) -> DeclId {
        let id = DeclId::from_raw(self.declarations.len() as u32);
        def.parent = def.parent.filter(|parent| *parent < id);
        if let DeclarationKind::Class(class) = def.kind {
            self.decl_by_class.entry(class).or_insert(id);
        }
        self.declarations.push(def);
        id
    }

    /// Package declaration for `fq_name`, creating it on first use.
    pub fn package(&mut self, fq_name: &str) -> DeclId {
        let name = FqName::new(fq_name);
        if let Some(id) = self.packages.get(&name) {
            return *id;
        }
        let id = self.add_declaration(DeclarationDef {
            name: fq_name.to_string(),
            kind: DeclarationKind::Package,
            parent: None,
            annotations: Annotations::default(),
        });
        self.packages.insert(name, id);
        id
    }

    pub fn add_file(&mut self, package: DeclId, name: impl Into<String>) -> DeclId {
        self.add_declaration(DeclarationDef {
            name: name.into(),
            kind: DeclarationKind::File,
            parent: Some(package),
            annotations: Annotations::default(),
        })
    }

    pub fn add_class_declaration(&mut self, parent: DeclId, class: ClassId) -> DeclId {
        let name = self
            .class(class)
            .map(|def| def.fq_name.short_name().to_string())
            .unwrap_or_default();
        self.add_declaration(DeclarationDef {
            name,
            kind: DeclarationKind::Class(class),
            parent: Some(parent),
            annotations: Annotations::default(),
        })
    }

    /// The declaration node of `class`.
    ///
    /// Classes registered without a declaration get one under the root package.
    pub fn class_declaration(&mut self, class: ClassId) -> DeclId {
        if let Some(id) = self.decl_by_class.get(&class) {
            return *id;
        }
        let root = self.package("");
        self.add_class_declaration(root, class)
    }

    pub fn add_function(
        &mut self,
        parent: DeclId,
        name: impl Into<String>,
        overridden: Vec<DeclId>,
    ) -> DeclId {
        self.add_declaration(DeclarationDef {
            name: name.into(),
            kind: DeclarationKind::Function(CallableMember::overriding(overridden)),
            parent: Some(parent),
            annotations: Annotations::default(),
        })
    }

    pub fn add_property(
        &mut self,
        parent: DeclId,
        name: impl Into<String>,
        overridden: Vec<DeclId>,
    ) -> DeclId {
        self.add_declaration(DeclarationDef {
            name: name.into(),
            kind: DeclarationKind::Property(CallableMember::overriding(overridden)),
            parent: Some(parent),
            annotations: Annotations::default(),
        })
    }

    /// Adds a getter (`is_getter`) or setter for `property`, placed next to the property.
    pub fn add_accessor(
        &mut self,
        property: DeclId,
        is_getter: bool,
        overridden: Vec<DeclId>,
    ) -> DeclId {
        let (parent, property_name) = match self.declaration(property) {
            Some(def) => (def.parent, def.name.clone()),
            None => (None, String::new()),
        };
        let prefix = if is_getter { "get" } else { "set" };
        self.add_declaration(DeclarationDef {
            name: format!("<{prefix}-{property_name}>"),
            kind: DeclarationKind::PropertyAccessor {
                property,
                member: CallableMember::overriding(overridden),
            },
            parent,
            annotations: Annotations::default(),
        })
    }

    /// A substituted copy of `original` (what a fake override or generic instantiation sees).
    pub fn add_substituted_copy(&mut self, original: DeclId, parent: DeclId) -> DeclId {
        let (name, kind) = match self.declaration(original) {
            Some(def) => (def.name.clone(), def.kind.clone()),
            None => (String::new(), DeclarationKind::Function(CallableMember::default())),
        };
        let copy_member = CallableMember {
            original: Some(original),
            overridden: Vec::new(),
        };
        let kind = match kind {
            DeclarationKind::Property(_) => DeclarationKind::Property(copy_member),
            DeclarationKind::PropertyAccessor { property, .. } => {
                DeclarationKind::PropertyAccessor {
                    property,
                    member: copy_member,
                }
            }
            _ => DeclarationKind::Function(copy_member),
        };
        self.add_declaration(DeclarationDef {
            name,
            kind,
            parent: Some(parent),
            annotations: Annotations::default(),
        })
    }

    pub fn add_value_parameter(&mut self, callable: DeclId, name: impl Into<String>) -> DeclId {
        self.add_declaration(DeclarationDef {
            name: name.into(),
            kind: DeclarationKind::ValueParameter,
            parent: Some(callable),
            annotations: Annotations::default(),
        })
    }

    pub fn annotate_declaration(&mut self, decl: DeclId, annotation: impl Into<Annotation>) {
        if let Some(def) = self.declarations.get_mut(decl.index()) {
            def.annotations.push(annotation.into());
        }
    }

    pub fn annotate_class(&mut self, class: ClassId, annotation: impl Into<Annotation>) {
        let annotation = annotation.into();
        if let Some(def) = self.classes.get_mut(class.index()) {
            def.annotations.push(annotation.clone());
        }
        if let Some(decl) = self.decl_by_class.get(&class).copied() {
            self.annotate_declaration(decl, annotation);
        }
    }
}

impl TypeModel for ModelStore {
    fn class(&self, id: ClassId) -> Option<&ClassDef> {
        self.classes.get(id.index())
    }

    fn type_param(&self, id: TypeParamId) -> Option<&TypeParamDef> {
        self.type_params.get(id.index())
    }

    fn declaration(&self, id: DeclId) -> Option<&DeclarationDef> {
        self.declarations.get(id.index())
    }

    fn builtins(&self) -> &Builtins {
        &self.builtins
    }
}
