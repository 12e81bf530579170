//! Derive macro implementation for envreader

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{
    parse_macro_input, Data, DeriveInput, Field, Fields, GenericArgument, PathArguments, Type,
};

mod attrs;

use attrs::{FieldAttrs, StructAttrs};

/// Separator used for `Vec<String>` fields without `#[env(separator = ...)]`.
const DEFAULT_SEPARATOR: &str = ",";

/// Lookup a field is loaded with, decided by its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    String,
    Int,
    Bool,
    StringList,
}

fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path.path.segments.last(),
        _ => None,
    }
}

fn classify(ty: &Type) -> Option<FieldKind> {
    let seg = last_segment(ty)?;
    match (seg.ident.to_string().as_str(), &seg.arguments) {
        ("String", PathArguments::None) => Some(FieldKind::String),
        ("i64", PathArguments::None) => Some(FieldKind::Int),
        ("bool", PathArguments::None) => Some(FieldKind::Bool),
        ("Vec", PathArguments::AngleBracketed(args)) if args.args.len() == 1 => {
            match args.args.first() {
                Some(GenericArgument::Type(inner)) => (classify(inner) == Some(FieldKind::String))
                    .then_some(FieldKind::StringList),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Build the expression that loads one field from `reader`.
fn field_loader(field: &Field, prefix: &str) -> syn::Result<TokenStream2> {
    let field_name = field
        .ident
        .as_ref()
        .ok_or_else(|| syn::Error::new_spanned(field, "FromEnv requires named fields"))?;
    let field_type = &field.ty;
    let attrs = FieldAttrs::from_field(field)?;

    let base_name = attrs
        .name
        .unwrap_or_else(|| field_name.unraw().to_string().to_uppercase());
    let env_var_name = format!("{}{}", prefix, base_name);

    if let Some(func) = attrs.deserializer {
        if attrs.default.is_some() {
            return Err(syn::Error::new_spanned(
                field_name,
                "default value is not supported with deserializer attribute",
            ));
        }
        if attrs.separator.is_some() {
            return Err(syn::Error::new_spanned(
                field_name,
                "separator is not supported with deserializer attribute",
            ));
        }
        return Ok(quote! {
            ::envreader::de::deserialize_with::<#field_type, _, _, _>(
                reader,
                #env_var_name,
                |__value: &str| #func(__value),
            )?
        });
    }

    let kind = classify(field_type).ok_or_else(|| {
        syn::Error::new_spanned(
            field_type,
            "unsupported field type: expected String, i64, bool or Vec<String> \
             (use #[env(deserializer = \"...\")] for other types)",
        )
    })?;

    if attrs.separator.is_some() && kind != FieldKind::StringList {
        return Err(syn::Error::new_spanned(
            field_type,
            "separator is only supported on Vec<String> fields",
        ));
    }

    let default = attrs.default;
    let expr = match kind {
        FieldKind::String => {
            let default = match default {
                Some(value) => quote! { ::core::convert::AsRef::<str>::as_ref(&(#value)) },
                None => quote! { "" },
            };
            quote! { reader.get_string(#env_var_name, #default)? }
        }
        FieldKind::Int => {
            let default = default.map_or_else(|| quote! { 0 }, |value| quote! { #value });
            quote! { reader.get_int(#env_var_name, #default) }
        }
        FieldKind::Bool => {
            let default = default.map_or_else(|| quote! { false }, |value| quote! { #value });
            quote! { reader.get_bool(#env_var_name, #default) }
        }
        FieldKind::StringList => {
            let default = default.map_or_else(
                || quote! { ::std::vec::Vec::new() },
                |value| quote! { #value },
            );
            let separator = attrs.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR);
            quote! { reader.get_string_list(#env_var_name, #default, #separator)? }
        }
    };

    Ok(expr)
}

/// `FromEnv` derive macro
///
/// Implements `from_reader()` and `from_env()` on structs with named fields.
///
/// # Supported Field Types
///
/// - `String`: required unless a default is given
/// - `i64`: defaults to `0`
/// - `bool`: defaults to `false`
/// - `Vec<String>`: split on `","` unless a separator is given; the variable
///   must be set even with a default, which only replaces a blank value
/// - anything else with `#[env(deserializer = "func")]`
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[env(prefix = "PREFIX_")]`: Add prefix to all env var names
///
/// **Field-level**:
/// - `#[env(name = "CUSTOM_NAME")]`: Custom environment variable name
/// - `#[env(default = value)]`: Default passed to the lookup
/// - `#[env(separator = ";")]`: Separator for `Vec<String>` fields
/// - `#[env(deserializer = "func")]`: Convert the string value with `func`
///
/// # Example
///
/// See the `envreader` crate documentation for usage examples.
#[proc_macro_derive(FromEnv, attributes(env))]
pub fn derive_from_env(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let struct_attrs = StructAttrs::from_attrs(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "FromEnv only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(input, "FromEnv only supports structs"));
        }
    };

    // Report every invalid field at once instead of stopping at the first.
    let mut field_initializers = Vec::with_capacity(fields.len());
    let mut errors = Vec::new();
    for field in fields {
        match field_loader(field, &struct_attrs.prefix) {
            Ok(expr) => {
                let field_name = &field.ident;
                field_initializers.push(quote! { #field_name: #expr });
            }
            Err(err) => errors.push(err),
        }
    }
    let mut errors = errors.into_iter();
    if let Some(mut first) = errors.next() {
        first.extend(errors);
        return Err(first);
    }

    Ok(quote! {
        impl #struct_name {
            /// Load configuration through the given reader
            ///
            /// # Errors
            ///
            /// - Required environment variables are not set
            /// - Environment variable values are not valid unicode
            /// - Custom deserializers fail to parse their value
            pub fn from_reader<__E: ::envreader::ReadEnv>(
                reader: &::envreader::EnvReader<__E>,
            ) -> ::core::result::Result<Self, ::envreader::EnvError> {
                ::core::result::Result::Ok(Self {
                    #(#field_initializers),*
                })
            }

            /// Load configuration from the process environment
            ///
            /// # Errors
            ///
            /// See [`Self::from_reader`].
            pub fn from_env() -> ::envreader::anyhow::Result<Self> {
                ::core::result::Result::Ok(Self::from_reader(&::envreader::EnvReader::system())?)
            }
        }
    })
}
