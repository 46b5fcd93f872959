use super::*;
use std::sync::Arc;

#[test]
fn test_own_prototype_follows_function_form() {
    let has_prototype = |function: Function| {
        Value::function(function)
            .as_object()
            .is_some_and(|o| o.has_own_property(&PropertyKey::from("prototype")))
    };

    assert!(has_prototype(Function::declaration("foo")));
    assert!(has_prototype(Function::declaration("")));
    assert!(has_prototype(Function::generator("gen")));
    assert!(has_prototype(Function::async_generator("agen")));
    assert!(has_prototype(Function::class("Foo", None)));

    assert!(!has_prototype(Function::arrow()));
    assert!(!has_prototype(Function::async_arrow()));
    assert!(!has_prototype(Function::async_function("f")));
    assert!(!has_prototype(Function::method("m")));
    assert!(!has_prototype(Function::declaration("foo").bind()));
    assert!(!has_prototype(Function::native("push")));
}

#[test]
fn test_bind_keeps_async_and_generator_form() {
    let bound = Function::async_function("f").bind();
    assert!(bound.flags().contains(FunctionFlags::BOUND));
    assert_eq!(bound.construction_tag(), "AsyncFunction");
    assert_eq!(bound.name(), "bound f");

    let bound = Function::generator("g").bind();
    assert_eq!(bound.construction_tag(), "GeneratorFunction");
}

#[test]
fn test_construction_tags() {
    assert_eq!(Function::declaration("f").construction_tag(), "Function");
    assert_eq!(Function::async_arrow().construction_tag(), "AsyncFunction");
    assert_eq!(Function::generator("g").construction_tag(), "GeneratorFunction");
    assert_eq!(
        Function::async_generator("g").construction_tag(),
        "AsyncGeneratorFunction"
    );

    let tag = |value: Value| value.as_object().map(|o| o.construction_tag());
    assert_eq!(tag(Value::array([])), Some("Array"));
    assert_eq!(tag(Value::arguments([])), Some("Arguments"));
    assert_eq!(tag(Value::map([])), Some("Map"));
    assert_eq!(tag(Value::generator()), Some("Generator"));
    assert_eq!(
        tag(Value::typed_array(TypedArrayKind::Uint8Clamped, 0)),
        Some("Uint8ClampedArray")
    );
    let url = url::Url::parse("https://example.com").expect("valid url");
    assert_eq!(tag(Value::url(url)), Some("URL"));
}

#[test]
fn test_prototype_chain_lookup() {
    let promise = Value::promise();
    assert!(promise.has_method("then"));
    assert!(promise.has_method("catch"));
    assert!(!promise.has_method("next"));

    let array = Value::array([Value::from(1)]);
    assert!(array.has_method(Symbol::ITERATOR));
    assert_eq!(array.get("length").and_then(|v| v.as_number()), Some(1.0));

    let generator = Value::async_generator();
    assert!(generator.has_method(Symbol::ASYNC_ITERATOR));
    assert!(!generator.has_method(Symbol::ITERATOR));
}

#[test]
fn test_primitive_lookup_goes_through_wrapper_prototype() {
    let s = Value::from("🦄");
    assert!(s.has_method(Symbol::ITERATOR));
    assert_eq!(s.get("length").and_then(|v| v.as_number()), Some(2.0));
    assert!(!Value::from(0).has_method(Symbol::ITERATOR));
    assert!(Value::Null.get("length").is_none());
    assert!(Value::Undefined.get(Symbol::ITERATOR).is_none());
}

#[test]
fn test_null_prototype_object() {
    let value = Value::object_with_prototype(&Value::Null);
    let object = value.as_object().expect("object");
    assert!(object.prototype().is_none());
    assert!(value.get("toString").is_none());
}

#[test]
fn test_object_create_inherits_members() {
    let parent = Value::object([("x", Value::from(1))]);
    let child = Value::object_with_prototype(&parent);
    assert_eq!(child.get("x").and_then(|v| v.as_number()), Some(1.0));
    let object = child.as_object().expect("object");
    assert_eq!(object.own_enumerable_key_count(), 0);
    assert!(Arc::ptr_eq(
        object.prototype().expect("prototype"),
        parent.as_object().expect("object")
    ));
}

#[test]
fn test_subclass_instances_inherit_from_base() {
    let base = Value::class("Foo");
    let derived = Value::subclass("Bar", &base);
    let instance = Value::instance_of(&derived);

    let derived_prototype = derived.get("prototype").expect("prototype");
    let base_prototype = base.get("prototype").expect("prototype");
    let instance_proto = instance.as_object().and_then(|o| o.prototype()).cloned();
    assert!(Value::Object(instance_proto.expect("prototype")).same_object(&derived_prototype));

    let parent = derived_prototype
        .as_object()
        .and_then(|o| o.prototype())
        .cloned()
        .expect("prototype");
    assert!(Value::Object(parent).same_object(&base_prototype));
    assert_eq!(derived.as_function().map(Function::source), Some("class Bar extends Foo {}"));
}

#[test]
fn test_native_constructor_prototype_is_intrinsic() {
    let error_ctor = realm().constructor(typeis_common::TypeName::Error).expect("Error");
    let error = Value::error("🦄");
    let proto = error.as_object().and_then(|o| o.prototype()).cloned().expect("prototype");
    assert!(error_ctor.get("prototype").expect("prototype").same_object(&Value::Object(proto)));
    assert!(realm().constructor(typeis_common::TypeName::Undefined).is_none());
}

#[test]
fn test_enumerable_key_count() {
    let value = ObjectBuilder::ordinary()
        .property("a", 1)
        .hidden_property("b", 2)
        .property(Symbol::new(Some("s")), 3)
        .build();
    assert_eq!(value.as_object().map(|o| o.own_enumerable_key_count()), Some(1));

    let arguments = Value::arguments([Value::from(1), Value::from(2)]);
    assert_eq!(arguments.as_object().map(|o| o.own_enumerable_key_count()), Some(2));
    assert!(arguments.has_method(Symbol::ITERATOR));
}

#[test]
fn test_builder_remove_strips_own_property() {
    let function = Value::function(Function::declaration("f"));
    let stripped = ObjectBuilder::from_object(function.as_object().expect("object"))
        .remove("prototype")
        .build();
    assert!(!stripped
        .as_object()
        .expect("object")
        .has_own_property(&PropertyKey::from("prototype")));
    assert!(stripped.is_callable());
}

#[test]
fn test_symbols_are_unique() {
    let a = Symbol::new(Some("🦄"));
    let b = Symbol::new(Some("🦄"));
    assert_ne!(a, b);
    assert_eq!(a, a.clone());
    assert!(Symbol::ITERATOR.is_well_known());
    assert!(!a.is_well_known());
    assert_eq!(a.description(), Some("🦄"));
}

#[test]
fn test_array_index_lookup() {
    let array = Value::array([Value::from("a"), Value::from("b")]);
    assert_eq!(array.get("1").and_then(|v| v.as_str().map(str::to_owned)), Some("b".into()));
    assert!(array.get("2").is_none());
    assert!(array.get("01").is_none());
    assert!(array.get("+1").is_none());

    let arguments = Value::arguments([Value::from(7)]);
    assert_eq!(arguments.get("0").and_then(|v| v.as_number()), Some(7.0));
    assert!(Value::empty_object().get("0").is_none());
}
