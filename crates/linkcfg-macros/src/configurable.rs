//! `#[derive(Configurable)]` implementation.
//!
//! # Overview
//!
//! Generates `impl linkcfg_core::Configurable` with a static field table:
//! one `Field` per named field, in declaration order, each holding plain
//! `fn` getter/setter pointers of the field's own kind.
//!
//! # Field-level attributes `#[option(...)]`
//!
//! | Key | Example | Description |
//! |-----|---------|-------------|
//! | `name` | `name = "cert_key"` | Option name (default: the field ident) |
//! | `path` | `path` | Listed by `Configurable::path_fields()`; `String` fields only |
//! | `skip` | `skip` | Not part of the table; any type allowed |
//!
//! # Supported field types
//!
//! | Rust type | Option kind |
//! |-----------|-------------|
//! | `String` | `String` |
//! | `i64` | `Int` |
//! | `bool` | `Bool` |

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, LitStr, Type, spanned::Spanned};

// ============================================================================
// Attribute structures
// ============================================================================

/// Per-field `#[option(…)]` markers.
#[derive(Default)]
struct FieldAttrs {
    name: Option<String>,
    is_path: bool,
    skip: bool,
}

enum FieldKind {
    Str,
    Int,
    Bool,
}

// ============================================================================
// Entry point
// ============================================================================

pub fn derive_configurable(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            "Configurable cannot be derived for generic types",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new(
                    input.span(),
                    "Configurable requires a struct with named fields",
                ));
            }
        },
        Data::Enum(_) => {
            return Err(syn::Error::new(
                input.span(),
                "Configurable cannot be derived for enums",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new(
                input.span(),
                "Configurable cannot be derived for unions",
            ));
        }
    };

    let mut entries = Vec::new();
    let mut paths = Vec::new();

    for field in fields {
        let attrs = parse_field_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }

        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let option_name = attrs.name.unwrap_or_else(|| unraw(ident));
        let name_lit = LitStr::new(&option_name, ident.span());

        let kind = field_kind(&field.ty).ok_or_else(|| {
            syn::Error::new(
                field.ty.span(),
                "unsupported option type; expected `String`, `i64` or `bool` (or mark the field #[option(skip)])",
            )
        })?;

        if attrs.is_path {
            if !matches!(kind, FieldKind::Str) {
                return Err(syn::Error::new(
                    field.ty.span(),
                    "#[option(path)] requires a `String` field",
                ));
            }
            paths.push(name_lit.clone());
        }

        entries.push(generate_entry(ident, &name_lit, &kind));
    }

    Ok(quote! {
        impl ::linkcfg_core::Configurable for #name {
            fn fields() -> &'static [::linkcfg_core::Field<Self>] {
                static FIELDS: &[::linkcfg_core::Field<#name>] = &[
                    #(#entries),*
                ];
                FIELDS
            }

            fn path_fields() -> &'static [&'static str] {
                &[#(#paths),*]
            }
        }
    })
}

// ============================================================================
// Attribute parsing
// ============================================================================

fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut result = FieldAttrs::default();

    for attr in attrs {
        if !attr.path().is_ident("option") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                result.name = Some(meta.value()?.parse::<LitStr>()?.value());
            } else if meta.path.is_ident("path") {
                result.is_path = true;
            } else if meta.path.is_ident("skip") {
                result.skip = true;
            } else {
                return Err(meta.error("expected `name`, `path` or `skip`"));
            }
            Ok(())
        })?;
    }

    Ok(result)
}

fn field_kind(ty: &Type) -> Option<FieldKind> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let segment = path.path.segments.last()?;
    if !segment.arguments.is_empty() {
        return None;
    }
    match segment.ident.to_string().as_str() {
        "String" => Some(FieldKind::Str),
        "i64" => Some(FieldKind::Int),
        "bool" => Some(FieldKind::Bool),
        _ => None,
    }
}

/// `r#type` binds to option `type`.
fn unraw(ident: &Ident) -> String {
    let name = ident.to_string();
    name.strip_prefix("r#").map(str::to_string).unwrap_or(name)
}

// ============================================================================
// Code generation
// ============================================================================

fn generate_entry(ident: &Ident, name_lit: &LitStr, kind: &FieldKind) -> TokenStream {
    let accessor = match kind {
        FieldKind::Str => quote! {
            ::linkcfg_core::Accessor::Str {
                get: |cfg| cfg.#ident.as_str(),
                set: |cfg, value| cfg.#ident = value,
            }
        },
        FieldKind::Int => quote! {
            ::linkcfg_core::Accessor::Int {
                get: |cfg| cfg.#ident,
                set: |cfg, value| cfg.#ident = value,
            }
        },
        FieldKind::Bool => quote! {
            ::linkcfg_core::Accessor::Bool {
                get: |cfg| cfg.#ident,
                set: |cfg, value| cfg.#ident = value,
            }
        },
    };

    quote! {
        ::linkcfg_core::Field {
            name: #name_lit,
            accessor: #accessor,
        }
    }
}
