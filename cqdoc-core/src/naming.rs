use std::fmt;
use std::str::FromStr;

/// Transform from an in-memory property identifier to its serialized name.
///
/// `is_dictionary_key` is true when the name is a key of a map rather than a
/// declared property. Any `Fn(&str, bool) -> String` closure is a strategy.
pub trait NamingStrategy {
    fn property_name(&self, name: &str, is_dictionary_key: bool) -> String;
}

impl<F> NamingStrategy for F
where
    F: Fn(&str, bool) -> String,
{
    fn property_name(&self, name: &str, is_dictionary_key: bool) -> String {
        self(name, is_dictionary_key)
    }
}

/// Built-in naming strategies.
///
/// Dictionary keys are passed through unchanged by every convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamingConvention {
    /// Keep identifiers as declared.
    #[default]
    Identity,
    /// `created_at` → `createdAt`
    CamelCase,
    /// `createdAt` → `created_at`
    SnakeCase,
    /// `created_at` → `created-at`
    KebabCase,
}

impl NamingStrategy for NamingConvention {
    fn property_name(&self, name: &str, is_dictionary_key: bool) -> String {
        if is_dictionary_key {
            return name.to_string();
        }
        match self {
            NamingConvention::Identity => name.to_string(),
            NamingConvention::CamelCase => {
                let mut out = String::with_capacity(name.len());
                for (i, word) in split_words(name).iter().enumerate() {
                    if i == 0 {
                        out.push_str(&word.to_lowercase());
                    } else {
                        out.push_str(&capitalize(word));
                    }
                }
                out
            }
            NamingConvention::SnakeCase => join_lower(name, "_"),
            NamingConvention::KebabCase => join_lower(name, "-"),
        }
    }
}

impl FromStr for NamingConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "identity" | "none" => Ok(NamingConvention::Identity),
            "camelCase" | "camel" => Ok(NamingConvention::CamelCase),
            "snake_case" | "snake" => Ok(NamingConvention::SnakeCase),
            "kebab-case" | "kebab" => Ok(NamingConvention::KebabCase),
            other => Err(format!(
                "unknown naming convention '{other}' (expected identity, camelCase, snake_case or kebab-case)"
            )),
        }
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NamingConvention::Identity => "identity",
            NamingConvention::CamelCase => "camelCase",
            NamingConvention::SnakeCase => "snake_case",
            NamingConvention::KebabCase => "kebab-case",
        };
        f.write_str(name)
    }
}

/// Split an identifier on `_`, `-` and lower→upper case boundaries.
///
/// Runs of capitals stay together until the last one, so `HTTPServer`
/// splits into `HTTP` and `Server`.
fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn join_lower(name: &str, sep: &str) -> String {
    split_words(name)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
