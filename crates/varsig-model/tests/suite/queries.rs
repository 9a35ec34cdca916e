use pretty_assertions::assert_eq;
use varsig_model::{
    first_overridden, fq_name_of, original_of, overridden_with_self, parents_with_self,
    property_if_accessor, ClassDef, ClassKind, FqName, Modality, ModelStore,
};

#[test]
fn parents_are_listed_nearest_first() {
    let mut store = ModelStore::with_builtins();
    let package = store.package("com.example");
    let file = store.add_file(package, "Api.kt");
    let class = store.add_class(ClassDef::new(
        "com.example.Api",
        ClassKind::Class,
        Modality::Final,
    ));
    let class_decl = store.add_class_declaration(file, class);
    let function = store.add_function(class_decl, "call", Vec::new());
    let parameter = store.add_value_parameter(function, "arg");

    let chain: Vec<_> = parents_with_self(&store, parameter).collect();
    assert_eq!(chain, vec![parameter, function, class_decl, file, package]);
}

#[test]
fn qualified_names_follow_the_container() {
    let mut store = ModelStore::with_builtins();
    let package = store.package("com.example");
    let file = store.add_file(package, "Api.kt");
    let class = store.add_class(ClassDef::new(
        "com.example.Api",
        ClassKind::Class,
        Modality::Final,
    ));
    let class_decl = store.add_class_declaration(file, class);
    let top_level = store.add_function(file, "helper", Vec::new());
    let member = store.add_function(class_decl, "call", Vec::new());
    let local = store.add_function(member, "inner", Vec::new());
    let parameter = store.add_value_parameter(member, "arg");
    let property = store.add_property(class_decl, "size", Vec::new());
    let getter = store.add_accessor(property, true, Vec::new());

    let name = |decl| fq_name_of(&store, decl);
    assert_eq!(name(top_level), Some(FqName::new("com.example.helper")));
    assert_eq!(name(member), Some(FqName::new("com.example.Api.call")));
    assert_eq!(name(class_decl), Some(FqName::new("com.example.Api")));
    assert_eq!(name(local), None);
    assert_eq!(name(parameter), None);
    assert_eq!(
        name(property_if_accessor(&store, getter)),
        Some(FqName::new("com.example.Api.size"))
    );
    assert_eq!(property_if_accessor(&store, member), member);
}

#[test]
fn override_closure_visits_each_member_once() {
    let mut store = ModelStore::with_builtins();
    let package = store.package("p");
    let top = store.add_function(package, "top", Vec::new());
    let left = store.add_function(package, "left", vec![top]);
    let right = store.add_function(package, "right", vec![top]);
    let bottom = store.add_function(package, "bottom", vec![left, right]);

    let closure: Vec<_> = overridden_with_self(&store, bottom, false).collect();
    assert_eq!(closure, vec![bottom, left, right, top]);

    assert_eq!(
        first_overridden(&store, bottom, false, |decl| decl == top),
        Some(top)
    );
    assert_eq!(first_overridden(&store, left, false, |decl| decl == right), None);
}

#[test]
fn substituted_copies_resolve_to_their_original() {
    let mut store = ModelStore::with_builtins();
    let package = store.package("p");
    let base = store.add_function(package, "base", Vec::new());
    let declared = store.add_function(package, "declared", vec![base]);
    let copy = store.add_substituted_copy(declared, package);

    assert_eq!(original_of(&store, copy), declared);
    assert_eq!(original_of(&store, declared), declared);

    // The copy has no overrides of its own; they are read through the original.
    let through_original: Vec<_> = overridden_with_self(&store, copy, true).collect();
    assert_eq!(through_original, vec![copy, base]);
    let as_declared: Vec<_> = overridden_with_self(&store, copy, false).collect();
    assert_eq!(as_declared, vec![copy]);
}
