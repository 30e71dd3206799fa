#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use cqdoc_core::example::EXAMPLE_WORDS;
use cqdoc_core::{
    synthesize, Describe, ExampleValue, NamingConvention, OverrideMap, Property, SchemaKind,
    SchemaNode, SchemaRegistry, Synthesizer, TypeDescriptor,
};
use serde_json::json;

// ── Fixtures ────────────────────────────────────────────────────────────────

#[derive(Describe)]
struct User {
    name: String,
    age: i32,
    tags: Vec<String>,
}

#[derive(Describe)]
enum Status {
    A,
    B,
    C,
}

#[derive(Describe)]
struct Node {
    value: i32,
    next: Box<Node>,
}

#[derive(Describe)]
struct LinkedNode {
    value: i32,
    next: Option<Box<LinkedNode>>,
}

#[derive(Describe)]
struct Alpha {
    beta: Box<Beta>,
}

#[derive(Describe)]
struct Beta {
    alpha: Box<Alpha>,
    label: String,
}

#[derive(Describe)]
struct Page<T> {
    items: Vec<T>,
    total: i64,
}

struct Money;

impl Describe for Money {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::structured(
            "Money",
            vec![
                Property::new("units", <i64 as Describe>::describe),
                Property::new("currency", <String as Describe>::describe),
            ],
        )
    }
}

#[derive(Describe)]
struct Order {
    total: Money,
    status: Status,
}

fn is_word(value: &ExampleValue) -> bool {
    value.as_str().is_some_and(|s| EXAMPLE_WORDS.contains(&s))
}

// ── End-to-end ──────────────────────────────────────────────────────────────

#[test]
fn user_schema_end_to_end() {
    let mut registry = SchemaRegistry::new();
    let node = Synthesizer::new().synthesize(&User::describe(), &mut registry);

    assert_eq!(node.kind, Some(SchemaKind::Object));
    assert_eq!(node.properties.as_ref().map(|p| p.len()), Some(3));

    let name = node.property("name").unwrap();
    assert_eq!(name.kind, Some(SchemaKind::String));
    assert!(is_word(name.example.as_ref().unwrap()));

    let age = node.property("age").unwrap();
    assert_eq!(age.kind, Some(SchemaKind::Number));
    assert_eq!(age.format.as_deref(), Some("int32"));
    assert_eq!(age.example, Some(ExampleValue::Integer(123)));

    let tags = node.property("tags").unwrap();
    assert_eq!(tags.kind, Some(SchemaKind::Array));
    assert_eq!(tags.items.as_ref().unwrap().kind, Some(SchemaKind::String));
    let items = tags.example.as_ref().unwrap().as_array().unwrap();
    assert!((1..=2).contains(&items.len()));
    assert!(items.iter().all(is_word));
}

#[test]
fn every_resolved_node_is_registered() {
    let mut registry = SchemaRegistry::new();
    Synthesizer::new().synthesize(&User::describe(), &mut registry);
    assert_eq!(registry.names(), ["Int32", "String", "User", "VecOfString"]);
}

#[test]
fn rendered_user_uses_renderer_keys() {
    let mut registry = SchemaRegistry::new();
    let node = Synthesizer::new().synthesize(&User::describe(), &mut registry);
    let value = serde_json::to_value(&*node).unwrap();
    assert_eq!(value["type"], "object");
    assert_eq!(value["properties"]["age"], json!({ "type": "number", "format": "int32", "example": 123 }));
    assert_eq!(value["properties"]["tags"]["items"]["type"], "string");
}

// ── Idempotence ─────────────────────────────────────────────────────────────

#[test]
fn second_synthesis_returns_identical_node() {
    let mut registry = SchemaRegistry::new();
    let mut synth = Synthesizer::new();
    let first = synth.synthesize(&User::describe(), &mut registry);
    let len = registry.len();
    let second = synth.synthesize(&User::describe(), &mut registry);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(registry.len(), len);
}

#[test]
fn cached_entry_shared_across_calls() {
    let mut registry = SchemaRegistry::new();
    let overrides = OverrideMap::new();
    let first = synthesize(&User::describe(), &mut registry, &overrides, &NamingConvention::Identity);
    let second = synthesize(&User::describe(), &mut registry, &overrides, &NamingConvention::Identity);
    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, &registry.get("User").unwrap()));
}

// ── Overrides ───────────────────────────────────────────────────────────────

#[test]
fn override_replaces_schema_and_example() {
    let overrides = OverrideMap::new().with::<Money>(String::describe(), "12.50".into());
    let mut registry = SchemaRegistry::new();
    let node = Synthesizer::new()
        .with_overrides(&overrides)
        .synthesize(&Money::describe(), &mut registry);

    assert_eq!(node.kind, Some(SchemaKind::String));
    assert_eq!(node.example, Some(ExampleValue::from("12.50")));
    assert_eq!(registry.example("Money"), Some(&ExampleValue::from("12.50")));
    // The substitute keeps its own, unmodified entry.
    assert!(is_word(registry.example("String").unwrap()));
}

#[test]
fn override_wins_over_cached_entry() {
    let overrides = OverrideMap::new().with::<Money>(String::describe(), "12.50".into());
    let mut registry = SchemaRegistry::new();
    registry.register("Money", Arc::new(SchemaNode::object()));

    let node = Synthesizer::new()
        .with_overrides(&overrides)
        .synthesize(&Money::describe(), &mut registry);
    assert_eq!(node.example, Some(ExampleValue::from("12.50")));
}

#[test]
fn override_applies_to_properties_and_examples() {
    let overrides = OverrideMap::new().with::<Money>(String::describe(), "12.50".into());
    let mut registry = SchemaRegistry::new();
    let mut synth = Synthesizer::new().with_overrides(&overrides);
    let order = synth.synthesize(&Order::describe(), &mut registry);

    let total = order.property("total").unwrap();
    assert_eq!(total.kind, Some(SchemaKind::String));
    assert_eq!(total.example, Some(ExampleValue::from("12.50")));

    let example = synth.example(&Order::describe(), &registry);
    assert_eq!(example.to_json(), json!({ "total": "12.50", "status": "A" }));
}

#[test]
fn override_with_itself_only_fixes_the_example() {
    let overrides = OverrideMap::new().with::<Money>(Money::describe(), json!({"units": 5}).into());
    let mut registry = SchemaRegistry::new();
    let node = Synthesizer::new()
        .with_overrides(&overrides)
        .synthesize(&Money::describe(), &mut registry);

    assert_eq!(node.kind, Some(SchemaKind::Object));
    assert!(node.property("units").is_some());
    assert_eq!(node.example.as_ref().map(ExampleValue::to_json), Some(json!({"units": 5})));
}

// ── Categories ──────────────────────────────────────────────────────────────

#[test]
fn nullable_equals_underlying_with_flag() {
    let mut registry = SchemaRegistry::new();
    let mut synth = Synthesizer::new();
    let user = synth.synthesize(&User::describe(), &mut registry);
    let optional = synth.synthesize(&Option::<User>::describe(), &mut registry);

    assert!(optional.nullable);
    assert!(!user.nullable);
    let unflagged = SchemaNode {
        nullable: false,
        ..(*optional).clone()
    };
    assert_eq!(unflagged, *user);
    assert!(registry.contains("OptionOfUser"));
}

#[test]
fn enum_keeps_member_order() {
    let mut registry = SchemaRegistry::new();
    let node = Synthesizer::new().synthesize(&Status::describe(), &mut registry);
    assert_eq!(node.kind, Some(SchemaKind::String));
    assert_eq!(
        node.enum_values.as_deref(),
        Some(&["A".to_string(), "B".to_string(), "C".to_string()][..])
    );
}

#[test]
fn scalar_formats_and_literals() {
    let mut registry = SchemaRegistry::new();
    let mut synth = Synthesizer::new();

    let long = synth.synthesize(&i64::describe(), &mut registry);
    assert_eq!(long.format.as_deref(), Some("int64"));
    assert_eq!(long.example, Some(ExampleValue::Long(123_456_789)));

    let double = synth.synthesize(&f64::describe(), &mut registry);
    assert_eq!(double.format.as_deref(), Some("double"));
    assert_eq!(double.example, Some(ExampleValue::Double(123.45)));

    let flag = synth.synthesize(&bool::describe(), &mut registry);
    assert_eq!(flag.kind, Some(SchemaKind::Boolean));
    assert_eq!(flag.example, Some(ExampleValue::Boolean(true)));

    let id = synth.synthesize(&uuid::Uuid::describe(), &mut registry);
    assert_eq!(id.kind, Some(SchemaKind::String));
    assert_eq!(id.format.as_deref(), Some("uuid"));

    let small = synth.synthesize(&u8::describe(), &mut registry);
    assert_eq!(small.kind, Some(SchemaKind::Number));
    assert_eq!(small.format, None);
    match small.example {
        Some(ExampleValue::Integer(n)) => assert!((0..400).contains(&n)),
        ref other => panic!("unexpected example {other:?}"),
    }
}

#[test]
fn map_schema_uses_additional_properties() {
    let mut registry = SchemaRegistry::new();
    let node = Synthesizer::new().synthesize(&HashMap::<String, i32>::describe(), &mut registry);
    assert_eq!(node.kind, Some(SchemaKind::Object));
    assert_eq!(node.additional_properties.as_ref().unwrap().kind, Some(SchemaKind::Number));
    assert_eq!(
        node.example.as_ref().map(ExampleValue::to_json),
        Some(json!({ "key": 123 }))
    );
}

#[test]
fn untyped_sequence_has_unconstrained_items() {
    let mut registry = SchemaRegistry::new();
    let node = Synthesizer::new().synthesize(&TypeDescriptor::untyped_sequence("List"), &mut registry);
    assert_eq!(node.kind, Some(SchemaKind::Array));
    assert_eq!(**node.items.as_ref().unwrap(), SchemaNode::unconstrained());
    // Opaque elements have null examples and are dropped.
    assert_eq!(node.example, Some(ExampleValue::Array(vec![])));
}

#[test]
fn opaque_type_is_plain_object() {
    let mut registry = SchemaRegistry::new();
    let node = Synthesizer::new().synthesize(&serde_json::Value::describe(), &mut registry);
    assert_eq!(*node, SchemaNode::object());
}

#[test]
fn generic_type_registers_arguments_first() {
    let mut registry = SchemaRegistry::new();
    let node = Synthesizer::new().synthesize(&Page::<User>::describe(), &mut registry);
    assert!(registry.contains("PageOfUser"));
    assert!(registry.contains("User"));
    let items = node.property("items").unwrap().items.as_ref().unwrap();
    assert!(Arc::ptr_eq(items, &registry.get("User").unwrap()));
}

// ── Default schemas ─────────────────────────────────────────────────────────

#[test]
fn titled_default_schema_is_used_verbatim() {
    let custom = SchemaNode::string().with_title("Opaque money").with_format("decimal");
    let mut registry = SchemaRegistry::new();
    let node = Synthesizer::new()
        .with_default_schema(&Money::describe(), custom.clone())
        .synthesize(&Money::describe(), &mut registry);
    assert_eq!(*node, custom);
}

#[test]
fn untitled_default_schema_is_ignored() {
    let mut registry = SchemaRegistry::new();
    let node = Synthesizer::new()
        .with_default_schema(&Money::describe(), SchemaNode::string())
        .synthesize(&Money::describe(), &mut registry);
    assert_eq!(node.kind, Some(SchemaKind::Object));
}

// ── Termination ─────────────────────────────────────────────────────────────

#[test]
fn direct_self_reference_is_skipped() {
    let mut registry = SchemaRegistry::new();
    let node = Synthesizer::new().synthesize(&Node::describe(), &mut registry);
    assert!(node.property("value").is_some());
    assert!(node.property("next").is_none());
}

#[test]
fn optional_self_reference_becomes_nullable_all_of() {
    let mut registry = SchemaRegistry::new();
    let node = Synthesizer::new().synthesize(&LinkedNode::describe(), &mut registry);
    let next = node.property("next").unwrap();
    assert!(next.nullable);
    assert!(!next.is_reference());
    let wrapped = next.all_of.as_deref().unwrap();
    assert_eq!(wrapped.len(), 1);
    assert_eq!(wrapped[0].reference.as_deref(), Some("LinkedNode"));
    assert_eq!(
        serde_json::to_value(&**next).unwrap(),
        json!({ "allOf": [{ "$ref": "#/components/schemas/LinkedNode" }], "nullable": true })
    );
}

#[test]
fn mutual_recursion_emits_reference() {
    let mut registry = SchemaRegistry::new();
    let alpha = Synthesizer::new().synthesize(&Alpha::describe(), &mut registry);

    let beta = registry.get("Beta").unwrap();
    let back = beta.property("alpha").unwrap();
    assert!(back.is_reference());
    assert_eq!(
        serde_json::to_value(&**back).unwrap(),
        json!({ "$ref": "#/components/schemas/Alpha" })
    );
    assert!(Arc::ptr_eq(alpha.property("beta").unwrap(), &beta));
}

#[derive(Describe)]
struct Leaf {
    v: i32,
}

#[derive(Describe)]
struct Inner {
    leaf: Leaf,
    n: i32,
}

#[derive(Describe)]
struct Outer {
    inner: Inner,
}

#[test]
fn depth_limit_yields_unregistered_object() {
    let mut registry = SchemaRegistry::new();
    let outer = Synthesizer::new()
        .with_max_depth(2)
        .synthesize(&Outer::describe(), &mut registry);

    let inner = outer.property("inner").unwrap();
    assert_eq!(**inner.property("leaf").unwrap(), SchemaNode::object());
    assert!(!registry.contains("Leaf"));
    // Parents of a truncated node are not cached either.
    assert!(!registry.contains("Inner"));
    assert!(!registry.contains("Outer"));
}

#[test]
fn scalars_resolve_at_depth_limit() {
    let mut registry = SchemaRegistry::new();
    let outer = Synthesizer::new()
        .with_max_depth(2)
        .synthesize(&Outer::describe(), &mut registry);

    let n = outer.property("inner").unwrap().property("n").unwrap();
    assert_eq!(n.kind, Some(SchemaKind::Number));
    assert_eq!(n.format.as_deref(), Some("int32"));
    assert!(registry.contains("Int32"));
}

#[test]
fn cached_entry_is_returned_at_depth_limit() {
    let mut registry = SchemaRegistry::new();
    let mut synth = Synthesizer::new().with_max_depth(2);
    let leaf = synth.synthesize(&Leaf::describe(), &mut registry);
    let outer = synth.synthesize(&Outer::describe(), &mut registry);

    let nested = outer.property("inner").unwrap().property("leaf").unwrap();
    assert!(Arc::ptr_eq(nested, &leaf));
    assert!(registry.contains("Inner"));
    assert!(registry.contains("Outer"));
}

#[test]
fn truncated_type_is_rebuilt_when_reached_shallower() {
    let mut registry = SchemaRegistry::new();
    let mut synth = Synthesizer::new().with_max_depth(2);
    synth.synthesize(&Outer::describe(), &mut registry);
    let inner = synth.synthesize(&Inner::describe(), &mut registry);

    let leaf = inner.property("leaf").unwrap();
    assert!(leaf.property("v").is_some());
    assert!(Arc::ptr_eq(&registry.get("Inner").unwrap(), &inner));
    assert!(Arc::ptr_eq(&registry.get("Leaf").unwrap(), leaf));
}

#[test]
fn nested_generic_arguments_respect_depth_limit() {
    let mut ty = TypeDescriptor::structured("Leaf", vec![]);
    for _ in 0..200 {
        ty = TypeDescriptor::named("Wrap").with_generic_args(vec![ty]);
    }

    let mut registry = SchemaRegistry::new();
    let node = Synthesizer::new()
        .with_max_depth(4)
        .synthesize(&ty, &mut registry);

    assert_eq!(*node, SchemaNode::object());
    assert!(registry.is_empty());
}

// ── Naming ──────────────────────────────────────────────────────────────────

#[derive(Describe)]
struct Profile {
    display_name: String,
    home_address: HashMap<String, String>,
    #[describe(ignore)]
    password_hash: String,
}

#[test]
fn naming_strategy_renames_properties_not_keys() {
    let mut registry = SchemaRegistry::new();
    let mut synth = Synthesizer::new().with_naming(&NamingConvention::CamelCase);
    let node = synth.synthesize(&Profile::describe(), &mut registry);

    let keys: Vec<&str> = node.properties.as_ref().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["displayName", "homeAddress"]);

    let example = synth.example(&Profile::describe(), &registry);
    let object = example.as_object().unwrap();
    assert_eq!(object.keys().collect::<Vec<_>>(), ["displayName", "homeAddress"]);
    assert!(object["homeAddress"].as_object().unwrap().contains_key("key"));
}

#[test]
fn closure_naming_strategy() {
    let upper = |name: &str, _is_key: bool| name.to_uppercase();
    let mut registry = SchemaRegistry::new();
    let node = synthesize(&Profile::describe(), &mut registry, &OverrideMap::new(), &upper);
    assert!(node.property("DISPLAY_NAME").is_some());
    assert!(node.property("PASSWORD_HASH").is_none());
}
