use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields, GenericParam};

use crate::crate_path::cqdoc_core_path;

pub fn expand(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match generate(&input) {
        Ok(output) => output.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Parsed `#[describe(...)]` attributes on a field or variant.
#[derive(Default)]
struct MemberAttrs {
    ignore: bool,
    rename: Option<String>,
}

fn extract_member_attrs(attrs: &[syn::Attribute]) -> syn::Result<MemberAttrs> {
    let mut result = MemberAttrs::default();
    for attr in attrs {
        if attr.path().is_ident("describe") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("ignore") {
                    result.ignore = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    let lit: syn::LitStr = meta.value()?.parse()?;
                    result.rename = Some(lit.value());
                    Ok(())
                } else {
                    Err(meta.error("expected `ignore` or `rename` in #[describe(...)]"))
                }
            })?;
        } else if attr.path().is_ident("serde") && serde_skips(attr)? {
            result.ignore = true;
        }
    }
    Ok(result)
}

/// Whether a `#[serde(...)]` attribute removes the field from serialized output.
///
/// Every other serde option is accepted and ignored.
fn serde_skips(attr: &syn::Attribute) -> syn::Result<bool> {
    let mut skip = false;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("skip") || meta.path.is_ident("skip_serializing") {
            skip = true;
        } else if meta.input.peek(syn::Token![=]) {
            meta.value()?.parse::<syn::Expr>()?;
        } else if meta.input.peek(syn::token::Paren) {
            let _content;
            syn::parenthesized!(_content in meta.input);
        }
        Ok(())
    })?;
    Ok(skip)
}

/// Extract `#[describe(name = "...")]` from the type, defaulting to its identifier.
fn extract_type_name(input: &DeriveInput) -> syn::Result<String> {
    let mut name = None;
    for attr in &input.attrs {
        if attr.path().is_ident("describe") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let lit: syn::LitStr = meta.value()?.parse()?;
                    name = Some(lit.value());
                    Ok(())
                } else {
                    Err(meta.error("expected `name` in #[describe(name = \"...\")]"))
                }
            })?;
        }
    }
    Ok(name.unwrap_or_else(|| input.ident.to_string()))
}

/// Field identifier without the `r#` prefix of raw identifiers.
fn field_name(ident: &syn::Ident) -> String {
    let name = ident.to_string();
    match name.strip_prefix("r#") {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}

fn generate(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let krate = cqdoc_core_path();
    let type_name = extract_type_name(input)?;

    let body = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => {
                let mut properties = Vec::new();
                for field in &named.named {
                    let attrs = extract_member_attrs(&field.attrs)?;
                    let name = match (attrs.rename, &field.ident) {
                        (Some(rename), _) => rename,
                        (None, Some(ident)) => field_name(ident),
                        (None, None) => continue,
                    };
                    let ty = &field.ty;
                    let ignored = attrs.ignore.then(|| quote!(.ignored()));
                    properties.push(quote! {
                        #krate::Property::new(#name, <#ty as #krate::Describe>::describe) #ignored
                    });
                }
                quote! {
                    #krate::TypeDescriptor::structured(#type_name, ::std::vec![#(#properties),*])
                }
            }
            Fields::Unnamed(unnamed) if unnamed.unnamed.len() == 1 => {
                let inner = &unnamed.unnamed[0].ty;
                // Transparent newtype: describe as the wrapped type.
                return Ok(impl_block(input, &krate, quote! {
                    <#inner as #krate::Describe>::describe()
                }));
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    ident,
                    "#[derive(Describe)] only works on structs with named fields or single-field tuple structs",
                ))
            }
        },
        Data::Enum(data) => {
            let mut members = Vec::new();
            for variant in &data.variants {
                if !matches!(variant.fields, Fields::Unit) {
                    return Err(syn::Error::new_spanned(
                        variant,
                        "#[derive(Describe)] only supports enums whose variants are all unit variants",
                    ));
                }
                let attrs = extract_member_attrs(&variant.attrs)?;
                if attrs.ignore {
                    continue;
                }
                members.push(attrs.rename.unwrap_or_else(|| variant.ident.to_string()));
            }
            let len = members.len();
            quote! {
                #krate::TypeDescriptor::enumeration(#type_name, {
                    let members: [&'static str; #len] = [#(#members),*];
                    members
                })
            }
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                ident,
                "#[derive(Describe)] does not support unions",
            ))
        }
    };

    let type_params: Vec<&syn::Ident> = input.generics.type_params().map(|p| &p.ident).collect();
    let body = if type_params.is_empty() {
        body
    } else {
        quote! {
            #body.with_generic_args(::std::vec![#(<#type_params as #krate::Describe>::describe()),*])
        }
    };

    Ok(impl_block(input, &krate, body))
}

/// Wrap `body` in `impl Describe`, bounding every type parameter by `Describe`.
fn impl_block(input: &DeriveInput, krate: &TokenStream2, body: TokenStream2) -> TokenStream2 {
    let ident = &input.ident;
    let mut generics = input.generics.clone();
    for param in &mut generics.params {
        if let GenericParam::Type(type_param) = param {
            type_param.bounds.push(parse_quote!(#krate::Describe));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #krate::Describe for #ident #ty_generics #where_clause {
            fn describe() -> #krate::TypeDescriptor {
                #body
            }
        }
    }
}
