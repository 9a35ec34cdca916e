use pretty_assertions::assert_eq;
use varsig_core::{MappingContext, TypeMappingMode, JVM_WILDCARD_ANNOTATION_FQ_NAME};
use varsig_model::{
    ClassDef, ClassId, ClassKind, DeclId, KotlinType, Modality, TypeArgument, TypeModel, Variance,
};

use super::{suppress_wildcards, ty, Fixture};

fn generic(id: ClassId, arguments: Vec<KotlinType>) -> KotlinType {
    KotlinType::class(id, arguments.into_iter().map(TypeArgument::invariant).collect())
}

fn function(fx: &mut Fixture, name: &str) -> DeclId {
    fx.store.add_function(fx.file, name, Vec::new())
}

#[test]
fn value_parameters_keep_wildcards_for_open_arguments() {
    let mut fx = Fixture::new();
    let f = function(&mut fx, "f");
    let b = fx.store.builtins().clone();
    let ctx = MappingContext::new(&fx.store);

    assert_eq!(
        ctx.value_parameter_signature(Some(f), &generic(b.list, vec![ty(b.number)])),
        "Ljava/util/List<+Ljava/lang/Number;>;"
    );
    assert_eq!(
        ctx.value_parameter_signature(Some(f), &generic(b.list, vec![ty(b.string)])),
        "Ljava/util/List<Ljava/lang/String;>;"
    );
    assert_eq!(
        ctx.value_parameter_signature(Some(f), &generic(b.list, vec![ty(b.int)])),
        "Ljava/util/List<Ljava/lang/Integer;>;"
    );
    assert_eq!(
        ctx.value_parameter_signature(Some(f), &generic(fx.boxed, vec![ty(fx.leaf)])),
        "Ltest/Box<Ltest/Leaf;>;"
    );
    assert_eq!(
        ctx.value_parameter_signature(Some(f), &generic(fx.boxed, vec![ty(fx.open)])),
        "Ltest/Box<+Ltest/Open;>;"
    );
}

#[test]
fn contravariant_parameters_drop_wildcards_only_for_any() {
    let mut fx = Fixture::new();
    let f = function(&mut fx, "f");
    let any = fx.builtin(|b| b.any);
    let ctx = MappingContext::new(&fx.store);

    assert_eq!(
        ctx.value_parameter_signature(Some(f), &generic(fx.sink, vec![ty(fx.leaf)])),
        "Ltest/Sink<-Ltest/Leaf;>;"
    );
    assert_eq!(
        ctx.value_parameter_signature(Some(f), &generic(fx.sink, vec![ty(any)])),
        "Ltest/Sink<Ljava/lang/Object;>;"
    );
}

#[test]
fn return_types_skip_declaration_site_wildcards() {
    let mut fx = Fixture::new();
    let f = function(&mut fx, "f");
    let b = fx.store.builtins().clone();
    let ctx = MappingContext::new(&fx.store);

    assert_eq!(
        ctx.return_type_signature(Some(f), &generic(b.list, vec![ty(b.number)]), false),
        "Ljava/util/List<Ljava/lang/Number;>;"
    );
    assert_eq!(
        ctx.return_type_signature(Some(f), &generic(fx.sink, vec![ty(fx.leaf)]), false),
        "Ltest/Sink<Ltest/Leaf;>;"
    );
    assert_eq!(
        ctx.return_type_signature(
            Some(f),
            &generic(b.list, vec![generic(b.list, vec![ty(b.number)])]),
            false
        ),
        "Ljava/util/List<Ljava/util/List<Ljava/lang/Number;>;>;"
    );
}

#[test]
fn nested_value_parameter_arguments_keep_wildcards() {
    let mut fx = Fixture::new();
    let f = function(&mut fx, "f");
    let b = fx.store.builtins().clone();
    let ctx = MappingContext::new(&fx.store);

    assert_eq!(
        ctx.value_parameter_signature(
            Some(f),
            &generic(b.list, vec![generic(b.list, vec![ty(b.number)])])
        ),
        "Ljava/util/List<+Ljava/util/List<+Ljava/lang/Number;>;>;"
    );
    assert_eq!(
        ctx.value_parameter_signature(Some(f), &generic(b.map, vec![ty(b.string), ty(b.number)])),
        "Ljava/util/Map<Ljava/lang/String;+Ljava/lang/Number;>;"
    );
}

#[test]
fn use_site_projections_are_always_written() {
    let mut fx = Fixture::new();
    let f = function(&mut fx, "f");
    let b = fx.store.builtins().clone();
    let ctx = MappingContext::new(&fx.store);

    let invariant = generic(b.mutable_list, vec![ty(b.number)]);
    let projected = KotlinType::class(b.mutable_list, vec![TypeArgument::covariant(ty(b.number))]);
    let consumer = KotlinType::class(
        b.mutable_list,
        vec![TypeArgument::contravariant(ty(b.string))],
    );

    assert_eq!(
        ctx.value_parameter_signature(Some(f), &invariant),
        "Ljava/util/List<Ljava/lang/Number;>;"
    );
    assert_eq!(
        ctx.value_parameter_signature(Some(f), &projected),
        "Ljava/util/List<+Ljava/lang/Number;>;"
    );
    assert_eq!(
        ctx.return_type_signature(Some(f), &projected, false),
        "Ljava/util/List<+Ljava/lang/Number;>;"
    );
    assert_eq!(
        ctx.value_parameter_signature(Some(f), &consumer),
        "Ljava/util/List<-Ljava/lang/String;>;"
    );
}

#[test]
fn star_arguments_are_unbounded() {
    let mut fx = Fixture::new();
    let f = function(&mut fx, "f");
    let b = fx.store.builtins().clone();
    let ctx = MappingContext::new(&fx.store);

    let star_list = KotlinType::class(b.list, vec![TypeArgument::Star]);
    assert_eq!(
        ctx.value_parameter_signature(Some(f), &star_list),
        "Ljava/util/List<*>;"
    );
}

#[test]
fn nothing_is_unbounded_only_in_contravariant_position() {
    let mut fx = Fixture::new();
    let f = function(&mut fx, "f");
    let b = fx.store.builtins().clone();
    let ctx = MappingContext::new(&fx.store);

    assert_eq!(
        ctx.value_parameter_signature(Some(f), &generic(fx.sink, vec![ty(b.nothing)])),
        "Ltest/Sink<*>;"
    );
    assert_eq!(
        ctx.value_parameter_signature(Some(f), &generic(b.list, vec![ty(b.nothing)])),
        "Ljava/util/List<Ljava/lang/Void;>;"
    );
    assert_eq!(
        ctx.return_type_signature(Some(f), &generic(b.list, vec![ty(b.nothing)]), false),
        "Ljava/util/List<Ljava/lang/Void;>;"
    );
}

#[test]
fn array_elements_follow_their_projection() {
    let mut fx = Fixture::new();
    let f = function(&mut fx, "f");
    let b = fx.store.builtins().clone();
    let ctx = MappingContext::new(&fx.store);

    let consumer = KotlinType::class(b.array, vec![TypeArgument::contravariant(ty(b.string))]);
    let producer = KotlinType::class(b.array, vec![TypeArgument::covariant(ty(b.number))]);
    let nested = KotlinType::class(
        b.array,
        vec![TypeArgument::covariant(generic(b.list, vec![ty(b.number)]))],
    );

    assert_eq!(
        ctx.value_parameter_signature(Some(f), &consumer),
        "[Ljava/lang/Object;"
    );
    assert_eq!(
        ctx.return_type_signature(Some(f), &consumer, false),
        "[Ljava/lang/Object;"
    );
    assert_eq!(
        ctx.value_parameter_signature(Some(f), &producer),
        "[Ljava/lang/Number;"
    );
    assert_eq!(
        ctx.value_parameter_signature(Some(f), &nested),
        "[Ljava/util/List<+Ljava/lang/Number;>;"
    );
}

#[test]
fn arrays_type_parameters_and_error_types() {
    let mut fx = Fixture::new();
    let f = function(&mut fx, "f");
    let t = fx.store.add_type_param("T", Variance::Invariant);
    let b = fx.store.builtins().clone();
    let ctx = MappingContext::new(&fx.store);

    assert_eq!(
        ctx.value_parameter_signature(Some(f), &generic(b.array, vec![ty(b.string)])),
        "[Ljava/lang/String;"
    );
    assert_eq!(
        ctx.value_parameter_signature(
            Some(f),
            &KotlinType::class(b.array, vec![TypeArgument::Star])
        ),
        "[Ljava/lang/Object;"
    );
    assert_eq!(
        ctx.value_parameter_signature(Some(f), &generic(b.list, vec![KotlinType::type_param(t)])),
        "Ljava/util/List<+TT;>;"
    );
    assert_eq!(
        ctx.value_parameter_signature(Some(f), &KotlinType::unresolved("missing.Type")),
        "Lerror/NonExistentClass;"
    );
    assert_eq!(
        ctx.value_parameter_signature(Some(f), &ty(b.string)),
        "Ljava/lang/String;"
    );
}

#[test]
fn suppress_wildcards_on_callable_applies_to_its_parameters() {
    let mut fx = Fixture::new();
    let f = function(&mut fx, "f");
    let g = function(&mut fx, "g");
    fx.store.annotate_declaration(f, suppress_wildcards(None));
    fx.store.annotate_declaration(g, suppress_wildcards(Some(false)));
    let b = fx.store.builtins().clone();
    let ctx = MappingContext::new(&fx.store);

    assert_eq!(
        ctx.value_parameter_signature(Some(f), &generic(b.list, vec![ty(b.number)])),
        "Ljava/util/List<Ljava/lang/Number;>;"
    );
    assert_eq!(
        ctx.return_type_signature(Some(g), &generic(b.list, vec![ty(b.string)]), false),
        "Ljava/util/List<+Ljava/lang/String;>;"
    );
}

#[test]
fn collection_mutators_keep_wildcards_under_suppression() {
    let mut fx = Fixture::new();
    let b = fx.store.builtins().clone();
    let e = fx.store.add_type_param("E", Variance::Invariant);
    let my_list = fx.store.add_class(
        ClassDef::new("test.MyList", ClassKind::Class, Modality::Abstract)
            .with_type_params(vec![e]),
    );
    let my_list_decl = fx.store.add_class_declaration(fx.file, my_list);
    fx.store.annotate_class(my_list, suppress_wildcards(None));
    let add_all = fx
        .store
        .add_function(my_list_decl, "addAll", vec![b.mutable_collection_add_all]);
    let other = fx.store.add_function(my_list_decl, "addEverything", Vec::new());
    let ctx = MappingContext::new(&fx.store);

    let numbers = generic(b.collection, vec![ty(b.number)]);
    let strings = generic(b.collection, vec![ty(b.string)]);
    assert_eq!(
        ctx.value_parameter_signature(Some(add_all), &numbers),
        "Ljava/util/Collection<+Ljava/lang/Number;>;"
    );
    assert_eq!(
        ctx.value_parameter_signature(Some(add_all), &strings),
        "Ljava/util/Collection<+Ljava/lang/String;>;"
    );
    assert_eq!(
        ctx.value_parameter_signature(Some(other), &numbers),
        "Ljava/util/Collection<Ljava/lang/Number;>;"
    );
    assert_eq!(
        ctx.value_parameter_mode(Some(add_all), &numbers),
        TypeMappingMode::generic_argument()
    );
}

#[test]
fn wildcard_marker_on_argument_forces_wildcard() {
    let mut fx = Fixture::new();
    let f = function(&mut fx, "f");
    let b = fx.store.builtins().clone();
    let ctx = MappingContext::new(&fx.store);

    let forced = generic(
        b.list,
        vec![ty(b.string).with_annotation(JVM_WILDCARD_ANNOTATION_FQ_NAME)],
    );
    assert_eq!(
        ctx.return_type_signature(Some(f), &forced, false),
        "Ljava/util/List<+Ljava/lang/String;>;"
    );
}

#[test]
fn super_type_mode_writes_no_declaration_site_wildcards() {
    let fx = Fixture::new();
    let b = fx.store.builtins().clone();
    let ctx = MappingContext::new(&fx.store);

    assert_eq!(
        ctx.generic_signature(
            &generic(b.list, vec![ty(b.number)]),
            &TypeMappingMode::super_type()
        ),
        "Ljava/util/List<Ljava/lang/Number;>;"
    );
}
