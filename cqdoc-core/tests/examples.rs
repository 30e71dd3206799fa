#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use cqdoc_core::example::EXAMPLE_WORDS;
use cqdoc_core::{
    example, Describe, ExampleSource, ExampleValue, OverrideMap, SchemaRegistry, Synthesizer,
    TypeDescriptor,
};
use serde_json::json;

fn fixed_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 11, 5, 16, 30, 0).unwrap()
}

#[derive(Describe)]
struct Tagged {
    title: String,
    tags: Vec<String>,
    score: Option<f64>,
    id: uuid::Uuid,
}

#[derive(Describe)]
struct Event {
    name: String,
    at: DateTime<Utc>,
    note: Option<serde_json::Value>,
}

#[derive(Describe)]
enum Empty {}

#[derive(Describe)]
struct Tree {
    label: String,
    children: Vec<Tree>,
}

// ── Scalars ─────────────────────────────────────────────────────────────────

#[test]
fn scalar_examples() {
    let registry = SchemaRegistry::new();
    let overrides = OverrideMap::new();
    assert_eq!(example(&i32::describe(), &registry, &overrides), ExampleValue::Integer(123));
    assert_eq!(example(&i64::describe(), &registry, &overrides), ExampleValue::Long(123_456_789));
    assert_eq!(example(&f32::describe(), &registry, &overrides), ExampleValue::Double(123.45));
    assert_eq!(example(&bool::describe(), &registry, &overrides), ExampleValue::Boolean(true));

    let word = example(&String::describe(), &registry, &overrides);
    assert!(EXAMPLE_WORDS.contains(&word.as_str().unwrap()));
}

#[test]
fn timestamp_uses_injected_clock() {
    let registry = SchemaRegistry::new();
    let mut synth = Synthesizer::new().with_source(ExampleSource::seeded(1).with_clock(fixed_clock));
    let value = synth.example(&Event::describe(), &registry);
    assert_eq!(value.as_object().unwrap()["at"], ExampleValue::from("2023-11-05T16:30:00Z"));
}

#[test]
fn uuid_example_is_hyphenated_hex() {
    let registry = SchemaRegistry::new();
    let value = example(&uuid::Uuid::describe(), &registry, &OverrideMap::new());
    let text = value.as_str().unwrap();
    assert!(uuid::Uuid::parse_str(text).is_ok());
    assert_eq!(text.len(), 36);
}

// ── Structured ──────────────────────────────────────────────────────────────

#[test]
fn object_example_in_declaration_order() {
    let registry = SchemaRegistry::new();
    let value = example(&Tagged::describe(), &registry, &OverrideMap::new());
    let object = value.as_object().unwrap();
    assert_eq!(object.keys().collect::<Vec<_>>(), ["title", "tags", "score", "id"]);
    // Nullable wrappers take the example of the wrapped type.
    assert_eq!(object["score"], ExampleValue::Double(123.45));
}

#[test]
fn null_property_examples_are_omitted() {
    let registry = SchemaRegistry::new();
    let value = example(&Event::describe(), &registry, &OverrideMap::new());
    let object = value.as_object().unwrap();
    assert!(object.contains_key("name"));
    assert!(!object.contains_key("note"));
}

#[test]
fn type_without_properties_is_null() {
    let registry = SchemaRegistry::new();
    let value = example(&TypeDescriptor::named("Marker"), &registry, &OverrideMap::new());
    assert!(value.is_null());
}

#[test]
fn enum_example_is_first_member_or_null() {
    #[derive(Describe)]
    enum Color {
        Red,
        Green,
    }

    let registry = SchemaRegistry::new();
    let overrides = OverrideMap::new();
    assert_eq!(example(&Color::describe(), &registry, &overrides), ExampleValue::from("Red"));
    assert!(example(&Empty::describe(), &registry, &overrides).is_null());
}

#[test]
fn recursive_type_example_terminates() {
    let registry = SchemaRegistry::new();
    let value = example(&Tree::describe(), &registry, &OverrideMap::new());
    let object = value.as_object().unwrap();
    assert!(object.contains_key("label"));
    assert_eq!(object["children"], ExampleValue::Array(vec![]));
}

// ── Precedence ──────────────────────────────────────────────────────────────

#[test]
fn override_example_is_returned_verbatim() {
    let overrides = OverrideMap::new().with::<Tagged>(String::describe(), json!({"fixed": true}).into());
    let value = example(&Tagged::describe(), &SchemaRegistry::new(), &overrides);
    assert_eq!(value.to_json(), json!({"fixed": true}));
}

#[test]
fn registry_example_beats_override() {
    let overrides = OverrideMap::new().with::<i32>(i32::describe(), ExampleValue::Integer(1));
    let mut registry = SchemaRegistry::new();
    Synthesizer::new().synthesize(&i32::describe(), &mut registry);

    let value = example(&i32::describe(), &registry, &overrides);
    assert_eq!(value, ExampleValue::Integer(123));
}

// ── Determinism ─────────────────────────────────────────────────────────────

#[test]
fn seeded_synthesizers_agree() {
    let render = |seed| {
        let mut registry = SchemaRegistry::new();
        let mut synth = Synthesizer::new()
            .with_source(ExampleSource::seeded(seed).with_clock(fixed_clock));
        synth.synthesize(&Tagged::describe(), &mut registry);
        synth.example(&Tagged::describe(), &registry).to_json()
    };
    assert_eq!(render(17), render(17));
}

#[test]
fn sequence_examples_have_one_or_two_elements() {
    for seed in 0..32 {
        let registry = SchemaRegistry::new();
        let mut synth = Synthesizer::new().with_source(ExampleSource::seeded(seed));
        let value = synth.example(&Vec::<i32>::describe(), &registry);
        let items = value.as_array().unwrap();
        assert!((1..=2).contains(&items.len()), "seed {seed}: {} items", items.len());
        assert!(items.iter().all(|item| *item == ExampleValue::Integer(123)));
    }
}
