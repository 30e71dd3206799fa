//! Crate path resolution for generated code.
//!
//! Detects whether the user depends on `cqdoc` (facade) or `cqdoc-core`
//! directly, and returns the appropriate path prefix for generated code.

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::quote;

/// Returns the token stream for accessing `cqdoc_core` items.
///
/// If the user depends on `cqdoc`, returns `::cqdoc`.
/// Otherwise returns `::cqdoc_core`.
///
/// Both crates declare `extern crate self as ...`, so the absolute path also
/// resolves inside the crates themselves and their integration tests.
pub fn cqdoc_core_path() -> TokenStream {
    // First check if the facade crate is available
    if let Ok(found) = crate_name("cqdoc") {
        match found {
            FoundCrate::Itself => quote!(::cqdoc),
            FoundCrate::Name(name) => {
                let ident = syn::Ident::new(&name, proc_macro2::Span::call_site());
                quote!(::#ident)
            }
        }
    } else if let Ok(found) = crate_name("cqdoc-core") {
        match found {
            FoundCrate::Itself => quote!(::cqdoc_core),
            FoundCrate::Name(name) => {
                let ident = syn::Ident::new(&name, proc_macro2::Span::call_site());
                quote!(::#ident)
            }
        }
    } else {
        // Fallback - assume cqdoc_core is available (for error messages)
        quote!(::cqdoc_core)
    }
}
