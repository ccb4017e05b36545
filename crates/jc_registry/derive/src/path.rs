//! Paths into `jc_registry` used by the expanded code.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the correct access path to the `jc_registry` crate.
///
/// 1. For crates that depend on `jc_registry`, `::jc_registry` is returned here.
/// 2. For crates that depend on `jc_core`, `::jc_core::registry` is returned here.
/// 3. For other situations, `::jc_registry` is returned here, but this may be incorrect.
pub(crate) fn jc_registry() -> syn::Path {
    jc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("jc_registry"))
}

#[inline(always)]
pub(crate) fn macro_exports_(jc_registry_path: &syn::Path) -> TokenStream {
    quote! {
        #jc_registry_path::__macro_exports
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(jc_registry_path: &syn::Path) -> TokenStream {
    quote! {
        #jc_registry_path::__macro_exports::auto_register
    }
}
