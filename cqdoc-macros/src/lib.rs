use proc_macro::TokenStream;

pub(crate) mod crate_path;
mod describe_derive;

/// Derive macro for `Describe`: lets the synthesizer see the shape of a type.
///
/// Supported shapes:
///
/// - **Structs with named fields** become structured types; each field is a
///   property, in declaration order.
/// - **Enums with only unit variants** become enumerations of their variant
///   names.
/// - **Single-field tuple structs** are transparent and describe as their
///   inner type.
///
/// Generic type parameters must implement `Describe`; the bound is added
/// automatically and the parameters become the type's generic arguments,
/// so `Page<User>` registers as `PageOfUser`.
///
/// # Attributes
///
/// - `#[describe(name = "...")]` on the type: base name used instead of the
///   type's identifier.
/// - `#[describe(ignore)]` on a field: exclude it from schemas and examples.
///   `#[serde(skip)]` and `#[serde(skip_serializing)]` have the same effect.
/// - `#[describe(rename = "...")]` on a field or variant: identifier used
///   instead of the Rust one. Field names still go through the naming
///   strategy; variant names are used verbatim.
///
/// # Example
///
/// ```ignore
/// #[derive(Describe)]
/// pub struct User {
///     pub id: Uuid,
///     pub display_name: String,
///     pub role: Role,
///     #[describe(ignore)]
///     pub password_hash: String,
/// }
///
/// #[derive(Describe)]
/// pub enum Role { Admin, Member }
/// ```
#[proc_macro_derive(Describe, attributes(describe))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    describe_derive::expand(input)
}
