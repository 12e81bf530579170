//! Attribute parsing for `#[env(...)]` annotations.
//!
//! This module extracts and validates configuration attributes from the
//! struct and its fields during macro expansion.

use syn::{Attribute, Expr, Field, LitStr};

/// Parsed struct-level `#[env(...)]` attributes.
#[derive(Debug, Default)]
pub struct StructAttrs {
    /// Prepended to every environment variable name, custom names included.
    pub prefix: String,
}

impl StructAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();

        for attr in env_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("prefix") {
                    let lit: LitStr = meta.value()?.parse()?;
                    parsed.prefix = lit.value();
                    return Ok(());
                }

                Err(meta.error("unsupported struct-level env attribute"))
            })?;
        }

        Ok(parsed)
    }
}

/// Parsed `#[env(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Custom environment variable name override.
    ///
    /// If `None`, the field name is converted to upper case.
    pub name: Option<String>,

    /// Expression used as the lookup default.
    pub default: Option<Expr>,

    /// Separator for `Vec<String>` fields.
    pub separator: Option<String>,

    /// Custom deserializer function path (e.g., `"serde_json::from_str"`).
    pub deserializer: Option<syn::Path>,
}

impl FieldAttrs {
    /// Extract and parse `#[env(...)]` attributes from a struct field.
    ///
    /// Attributes with other paths are left for other macros.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in env_attrs(&field.attrs) {
            attr.parse_nested_meta(|meta| {
                // name = "..."
                if meta.path.is_ident("name") {
                    let lit: LitStr = meta.value()?.parse()?;
                    attrs.name = Some(lit.value());
                    return Ok(());
                }

                // default = expr
                if meta.path.is_ident("default") {
                    if !meta.input.peek(syn::Token![=]) {
                        return Err(meta.error("default requires a value, e.g. `default = 8080`"));
                    }
                    attrs.default = Some(meta.value()?.parse()?);
                    return Ok(());
                }

                // separator = "..."
                if meta.path.is_ident("separator") {
                    let lit: LitStr = meta.value()?.parse()?;
                    attrs.separator = Some(lit.value());
                    return Ok(());
                }

                // deserializer = "function::path"
                if meta.path.is_ident("deserializer") {
                    let lit: LitStr = meta.value()?.parse()?;
                    attrs.deserializer = Some(lit.parse()?);
                    return Ok(());
                }

                Err(meta.error("unsupported env attribute"))
            })?;
        }

        Ok(attrs)
    }
}

fn env_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("env"))
}
