use proc_macro2::TokenStream;
use syn::parse::Parser;
use syn::{Attribute, LitBool, Meta};

/// Name of the marker attribute, `#[json_class(...)]`.
pub const JSON_CLASS_ATTRIBUTE: &str = "json_class";

/// Arguments of the `#[json_class(...)]` marker.
///
/// Shared by the attribute macro and by the build-time source scanner so both
/// read the marker the same way.
///
/// - `#[json_class]`: generate an adapter.
/// - `#[json_class(generate_adapter = false)]`: the type is marked, but no
///   adapter is generated for it.
///
/// # Example
///
/// ```rust
/// # use jc_macro_utils::JsonClassArgs;
/// let attr: syn::Attribute = syn::parse_quote!(#[json_class(generate_adapter = false)]);
/// let args = JsonClassArgs::from_attribute(&attr).unwrap();
/// assert!(!args.generate_adapter);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JsonClassArgs {
    pub generate_adapter: bool,
}

impl Default for JsonClassArgs {
    #[inline]
    fn default() -> Self {
        Self {
            generate_adapter: true,
        }
    }
}

impl JsonClassArgs {
    /// Returns `true` if `attr` is a marker, written as `json_class` or as a
    /// path ending with it.
    pub fn is_marker(attr: &Attribute) -> bool {
        attr.path()
            .segments
            .last()
            .is_some_and(|segment| segment.ident == JSON_CLASS_ATTRIBUTE)
    }

    /// Parse the arguments of an attribute macro invocation, the tokens
    /// between the parentheses.
    pub fn parse_args(tokens: TokenStream) -> syn::Result<Self> {
        let mut args = Self::default();
        if tokens.is_empty() {
            return Ok(args);
        }
        let parser = syn::meta::parser(|meta| args.parse_meta(meta));
        parser.parse2(tokens)?;
        Ok(args)
    }

    /// Parse a complete marker attribute.
    pub fn from_attribute(attr: &Attribute) -> syn::Result<Self> {
        let mut args = Self::default();
        match &attr.meta {
            Meta::Path(_) => {}
            Meta::List(_) => attr.parse_nested_meta(|meta| args.parse_meta(meta))?,
            Meta::NameValue(meta) => {
                return Err(syn::Error::new_spanned(
                    meta,
                    "expected `#[json_class]` or `#[json_class(generate_adapter = ...)]`",
                ));
            }
        }
        Ok(args)
    }

    fn parse_meta(&mut self, meta: syn::meta::ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("generate_adapter") {
            let value: LitBool = meta.value()?.parse()?;
            self.generate_adapter = value.value;
            Ok(())
        } else {
            Err(meta.error("unsupported json_class property, expected `generate_adapter`"))
        }
    }
}
