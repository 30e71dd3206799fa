use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::descriptor::{ScalarKind, TypeDescriptor};

/// Types that can describe their own shape for schema synthesis.
///
/// Implement via `#[derive(Describe)]`:
///
/// ```ignore
/// #[derive(Describe)]
/// pub struct User {
///     pub name: String,
///     pub age: i32,
///     pub tags: Vec<String>,
///     #[describe(ignore)]
///     pub password_hash: String,
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be described for schema synthesis",
    label = "missing `Describe` implementation",
    note = "derive it with `#[derive(Describe)]` or implement `Describe` by hand"
)]
pub trait Describe {
    fn describe() -> TypeDescriptor;
}

// ── Scalars ─────────────────────────────────────────────────────────────────

macro_rules! impl_describe_scalar {
    ($($ty:ty => ($name:literal, $kind:ident)),+ $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe() -> TypeDescriptor {
                    TypeDescriptor::scalar($name, ScalarKind::$kind)
                }
            }
        )+
    };
}

impl_describe_scalar! {
    bool => ("Boolean", Boolean),
    i8 => ("Int8", Integer),
    i16 => ("Int16", Integer),
    i32 => ("Int32", Int32),
    i64 => ("Int64", Int64),
    i128 => ("Int128", Integer),
    isize => ("IntSize", Integer),
    u8 => ("UInt8", Integer),
    u16 => ("UInt16", Integer),
    u32 => ("UInt32", Integer),
    u64 => ("UInt64", Integer),
    u128 => ("UInt128", Integer),
    usize => ("UIntSize", Integer),
    f32 => ("Float32", Float),
    f64 => ("Float64", Float),
    char => ("String", String),
    str => ("String", String),
    String => ("String", String),
    uuid::Uuid => ("Uuid", Uuid),
    chrono::NaiveDateTime => ("DateTime", Timestamp),
}

impl<Tz: chrono::TimeZone> Describe for chrono::DateTime<Tz> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::scalar("DateTime", ScalarKind::Timestamp)
    }
}

impl Describe for serde_json::Value {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::named("Value")
    }
}

impl Describe for () {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::named("Unit")
    }
}

// ── Wrappers ────────────────────────────────────────────────────────────────

impl<T: Describe> Describe for Option<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::nullable("Option", T::describe).with_generic_args(vec![T::describe()])
    }
}

macro_rules! impl_describe_transparent {
    ($($wrapper:ident),+) => {
        $(
            impl<T: Describe + ?Sized> Describe for $wrapper<T> {
                fn describe() -> TypeDescriptor {
                    T::describe()
                }
            }
        )+
    };
}

impl_describe_transparent!(Box, Arc, Rc);

impl<T: Describe + ?Sized> Describe for &T {
    fn describe() -> TypeDescriptor {
        T::describe()
    }
}

impl<T: Describe + ToOwned + ?Sized> Describe for Cow<'_, T> {
    fn describe() -> TypeDescriptor {
        T::describe()
    }
}

// ── Sequences ───────────────────────────────────────────────────────────────

macro_rules! impl_describe_sequence {
    ($($seq:ident => $name:literal),+) => {
        $(
            impl<T: Describe> Describe for $seq<T> {
                fn describe() -> TypeDescriptor {
                    TypeDescriptor::sequence($name, T::describe)
                        .with_generic_args(vec![T::describe()])
                }
            }
        )+
    };
}

impl_describe_sequence!(
    Vec => "Vec",
    VecDeque => "VecDeque",
    LinkedList => "LinkedList",
    HashSet => "HashSet",
    BTreeSet => "BTreeSet"
);

impl<T: Describe> Describe for [T] {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::sequence("Slice", T::describe).with_generic_args(vec![T::describe()])
    }
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::sequence("Array", T::describe).with_generic_args(vec![T::describe()])
    }
}

// ── Maps ────────────────────────────────────────────────────────────────────

impl<K: Describe, V: Describe, S> Describe for HashMap<K, V, S> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::map("HashMap", V::describe)
            .with_generic_args(vec![K::describe(), V::describe()])
    }
}

impl<K: Describe, V: Describe> Describe for BTreeMap<K, V> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::map("BTreeMap", V::describe)
            .with_generic_args(vec![K::describe(), V::describe()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_is_generic_nullable() {
        let ty = <Option<i32>>::describe();
        assert!(ty.is_nullable());
        assert_eq!(ty.display_name(), "OptionOfInt32");
        assert_eq!(ty.underlying().map(|u| u.display_name()), Some("Int32".into()));
    }

    #[test]
    fn smart_pointers_are_transparent() {
        assert_eq!(<Box<String>>::describe().display_name(), "String");
        assert_eq!(<Arc<Vec<u8>>>::describe().display_name(), "VecOfUInt8");
    }

    #[test]
    fn maps_describe_value_type() {
        let ty = <HashMap<String, bool>>::describe();
        assert!(ty.is_map());
        assert_eq!(ty.display_name(), "HashMapOfStringAndBoolean");
        assert_eq!(ty.map_value().and_then(|v| v.scalar_kind()), Some(ScalarKind::Boolean));
    }

    #[test]
    fn chrono_and_uuid_are_scalars() {
        assert_eq!(
            <chrono::DateTime<chrono::Utc>>::describe().scalar_kind(),
            Some(ScalarKind::Timestamp)
        );
        assert_eq!(uuid::Uuid::describe().scalar_kind(), Some(ScalarKind::Uuid));
    }
}
