use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Vocabulary for string examples.
pub const EXAMPLE_WORDS: [&str; 3] = ["foo", "bar", "baz"];
pub const INT32_EXAMPLE: i32 = 123;
pub const INT64_EXAMPLE: i64 = 123_456_789;
pub const FLOAT_EXAMPLE: f64 = 123.45;
/// Exclusive upper bound for examples of other integer types.
pub const OTHER_INTEGER_BOUND: i32 = 400;
/// `yyyy-MM-ddTHH:mm:ssZ`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// One concrete, representative value for a schema.
#[derive(Debug, Clone, PartialEq)]
pub enum ExampleValue {
    String(String),
    Integer(i32),
    Long(i64),
    Double(f64),
    Boolean(bool),
    Array(Vec<ExampleValue>),
    /// Object with properties in declaration order.
    Object(IndexMap<String, ExampleValue>),
    Null,
}

impl ExampleValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ExampleValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ExampleValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[ExampleValue]> {
        match self {
            ExampleValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, ExampleValue>> {
        match self {
            ExampleValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            ExampleValue::String(s) => Value::String(s.clone()),
            ExampleValue::Integer(i) => Value::from(*i),
            ExampleValue::Long(l) => Value::from(*l),
            ExampleValue::Double(d) => Value::from(*d),
            ExampleValue::Boolean(b) => Value::Bool(*b),
            ExampleValue::Array(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            ExampleValue::Object(map) => Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
            ExampleValue::Null => Value::Null,
        }
    }
}

impl From<&Value> for ExampleValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => ExampleValue::Null,
            Value::Bool(b) => ExampleValue::Boolean(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    match i32::try_from(i) {
                        Ok(small) => ExampleValue::Integer(small),
                        Err(_) => ExampleValue::Long(i),
                    }
                } else {
                    ExampleValue::Double(n.as_f64().unwrap_or_default())
                }
            }
            Value::String(s) => ExampleValue::String(s.clone()),
            Value::Array(items) => ExampleValue::Array(items.iter().map(Self::from).collect()),
            Value::Object(map) => ExampleValue::Object(
                map.iter().map(|(k, v)| (k.clone(), Self::from(v))).collect(),
            ),
        }
    }
}

impl From<Value> for ExampleValue {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

impl From<&str> for ExampleValue {
    fn from(value: &str) -> Self {
        ExampleValue::String(value.to_string())
    }
}

impl From<String> for ExampleValue {
    fn from(value: String) -> Self {
        ExampleValue::String(value)
    }
}

impl From<i32> for ExampleValue {
    fn from(value: i32) -> Self {
        ExampleValue::Integer(value)
    }
}

impl From<i64> for ExampleValue {
    fn from(value: i64) -> Self {
        ExampleValue::Long(value)
    }
}

impl From<f64> for ExampleValue {
    fn from(value: f64) -> Self {
        ExampleValue::Double(value)
    }
}

impl From<bool> for ExampleValue {
    fn from(value: bool) -> Self {
        ExampleValue::Boolean(value)
    }
}

impl Serialize for ExampleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ExampleValue::String(s) => serializer.serialize_str(s),
            ExampleValue::Integer(i) => serializer.serialize_i32(*i),
            ExampleValue::Long(l) => serializer.serialize_i64(*l),
            ExampleValue::Double(d) => serializer.serialize_f64(*d),
            ExampleValue::Boolean(b) => serializer.serialize_bool(*b),
            ExampleValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            ExampleValue::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (k, v) in fields {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            ExampleValue::Null => serializer.serialize_unit(),
        }
    }
}

// ── Randomness and time ─────────────────────────────────────────────────────

/// Source of randomness and time for generated examples.
///
/// Seed it to make every generated example reproducible.
pub struct ExampleSource {
    rng: StdRng,
    clock: fn() -> DateTime<Utc>,
}

impl ExampleSource {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            clock: Utc::now,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            clock: Utc::now,
        }
    }

    /// Replace the clock used for timestamp examples.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub(crate) fn word(&mut self) -> &'static str {
        EXAMPLE_WORDS[self.rng.gen_range(0..EXAMPLE_WORDS.len())]
    }

    pub(crate) fn other_integer(&mut self) -> i32 {
        self.rng.gen_range(0..OTHER_INTEGER_BOUND)
    }

    /// Number of elements in a sequence example: 1 or 2.
    pub(crate) fn sequence_len(&mut self) -> usize {
        self.rng.gen_range(1..=2)
    }

    pub(crate) fn timestamp(&self) -> String {
        (self.clock)().format(TIMESTAMP_FORMAT).to_string()
    }

    pub(crate) fn uuid(&mut self) -> uuid::Uuid {
        uuid::Builder::from_random_bytes(self.rng.gen()).into_uuid()
    }
}

impl Default for ExampleSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl std::fmt::Debug for ExampleSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExampleSource").finish_non_exhaustive()
    }
}
