use jc_macro_utils::JsonClassArgs;
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, GenericParam, parse_quote};

use crate::path;

/// Expand `#[json_class]` on `ast`: the item itself, its `Typed` impl and,
/// with `auto_register`, the submission of its target class.
pub(crate) fn expand(ast: &DeriveInput, args: JsonClassArgs) -> syn::Result<TokenStream> {
    if let Data::Union(data) = &ast.data {
        return Err(syn::Error::new_spanned(
            data.union_token,
            "`#[json_class]` supports structs and enums only",
        ));
    }

    let mut type_params = Vec::new();
    for param in &ast.generics.params {
        match param {
            GenericParam::Type(param) => type_params.push(param.ident.clone()),
            GenericParam::Lifetime(param) => {
                return Err(syn::Error::new_spanned(
                    param,
                    "`#[json_class]` types cannot have lifetime parameters",
                ));
            }
            GenericParam::Const(param) => {
                return Err(syn::Error::new_spanned(
                    param,
                    "`#[json_class]` types cannot have const parameters",
                ));
            }
        }
    }

    let jc_registry_path = path::jc_registry();
    let macro_exports_ = path::macro_exports_(&jc_registry_path);

    let ident = &ast.ident;
    let simple_name = ident.unraw().to_string();
    let class_name = quote! {
        #macro_exports_::ClassName::from_module_path(::core::module_path!(), [#simple_name])
    };

    let mut generics = ast.generics.clone();
    let where_clause = generics.make_where_clause();
    for param in &type_params {
        where_clause
            .predicates
            .push(parse_quote!(#param: #macro_exports_::Typed));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let type_key = if type_params.is_empty() {
        quote! { #macro_exports_::TypeKey::of(#class_name) }
    } else {
        quote! {
            #macro_exports_::TypeKey::parameterized(
                #class_name,
                [#(<#type_params as #macro_exports_::Typed>::type_key()),*],
            )
        }
    };

    let registration = registration(&jc_registry_path, &class_name, type_params.len(), args);

    Ok(quote! {
        #ast

        impl #impl_generics #macro_exports_::Typed for #ident #ty_generics #where_clause {
            fn type_key() -> #macro_exports_::TypeKey {
                #type_key
            }
        }

        #registration
    })
}

#[cfg(feature = "auto_register")]
fn registration(
    jc_registry_path: &syn::Path,
    class_name: &TokenStream,
    type_params: usize,
    args: JsonClassArgs,
) -> TokenStream {
    let macro_exports_ = path::macro_exports_(jc_registry_path);
    let auto_register_ = path::auto_register_(jc_registry_path);
    let generate_adapter = args.generate_adapter;

    quote! {
        const _: () = {
            fn __register(class_path: &mut #macro_exports_::ClassPath) {
                class_path.register_target(
                    #macro_exports_::TargetClass::new(#class_name)
                        .with_type_params(#type_params)
                        .with_marker(#macro_exports_::JsonClass::new(#generate_adapter)),
                );
            }

            #auto_register_::inventory::submit! {
                #auto_register_::__AutoRegisterFunc(__register)
            }
        };
    }
}

#[cfg(not(feature = "auto_register"))]
fn registration(_: &syn::Path, _: &TokenStream, _: usize, _: JsonClassArgs) -> TokenStream {
    TokenStream::new()
}
