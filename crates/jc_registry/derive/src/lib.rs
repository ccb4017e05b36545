//! See following macros:
//!
//! - [`json_class`]
//! - [`impl_auto_register`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::DeriveInput;

// -----------------------------------------------------------------------------
// Modules

mod json_class;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// Marks a type as a JSON class.
///
/// ```ignore
/// #[json_class]
/// struct Food { name: String }
///
/// #[json_class(generate_adapter = false)]
/// struct Handwritten { value: u32 }
/// ```
///
/// The attribute keeps the item unchanged and:
///
/// - implements `Typed`, the type's package is its module path with `::`
///   replaced by `.`; every type parameter must be `Typed` as well;
/// - with the `auto_register` feature, submits a `TargetClass` carrying the
///   marker, so `ClassPath::auto_register` finds it.
///
/// The build-time scanner of `jc_codegen` reads the same attribute to decide
/// which types get an adapter generated and registered.
///
/// Lifetime and const parameters are not supported.
#[proc_macro_attribute]
pub fn json_class(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = match jc_macro_utils::JsonClassArgs::parse_args(attr.into()) {
        Ok(args) => args,
        Err(err) => {
            let mut tokens = proc_macro2::TokenStream::from(item);
            tokens.extend(err.into_compile_error());
            return tokens.into();
        }
    };
    let ast = syn::parse_macro_input!(item as DeriveInput);

    match json_class::expand(&ast, args) {
        Ok(tokens) => tokens.into(),
        Err(err) => {
            let mut tokens = quote::quote!(#ast);
            tokens.extend(err.into_compile_error());
            tokens.into()
        }
    }
}

/// Add an adapter type to the automatic registry.
///
/// If the feature is not enabled, this macro will not do anything.
///
/// The type must implement `AdapterType` and be concrete (no uncertain
/// generic parameters).
///
/// ## Example
///
/// ```ignore
/// impl AdapterType for FoodJsonAdapter {
///     fn adapter_class() -> AdapterClass { /* ... */ }
/// }
///
/// impl_auto_register!(FoodJsonAdapter);
/// ```
#[proc_macro]
pub fn impl_auto_register(_input: TokenStream) -> TokenStream {
    #[cfg(not(feature = "auto_register"))]
    return proc_macro2::TokenStream::new().into();

    #[cfg(feature = "auto_register")]
    {
        let type_path = syn::parse_macro_input!(_input as syn::Type);

        let jc_registry_path = path::jc_registry();
        let auto_register_ = path::auto_register_(&jc_registry_path);

        TokenStream::from(quote::quote! {
            const _: () = {
                #auto_register_::inventory::submit!{
                    #auto_register_::__AutoRegisterFunc(
                        #auto_register_::__register_adapter::<#type_path>
                    )
                }
            };
        })
    }
}
