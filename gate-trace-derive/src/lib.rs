//! Derive macros for gate-trace.
//!
//! This crate provides a derive macro for the `Entity` trait, so domain
//! structs render as `"Type:key"` when they appear among gate check
//! arguments.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! gate-trace = { version = "0.1", features = ["derive"] }
//! ```
//!
//! ## Examples
//!
//! ```rust,ignore
//! use gate_trace::Entity;
//!
//! #[derive(Entity)]
//! #[entity(type = "Post")]
//! struct Post {
//!     #[entity(key)]
//!     id: u64,
//!     title: String,
//! }
//!
//! #[derive(Entity)]
//! struct Invoice(#[entity(key)] String);
//!
//! let post = Post { id: 42, title: "Hello".into() };
//! assert_eq!(post.entity_ref(), "Post:42");
//! assert_eq!(Invoice("INV-1".into()).entity_ref(), "Invoice:INV-1");
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{ToTokens, quote};
use syn::{Data, DeriveInput, Error, Fields, Index, LitStr, Result, parse_macro_input};

const ATTR: &str = "entity";

/// Derive macro for implementing the `Entity` trait.
///
/// ## Attributes
///
/// - `#[entity(type = "...")]` - Optional. The type name; defaults to the
///   struct name.
/// - `#[entity(key)]` - Required on one field. The primary-key field. Its type
///   must be `Clone` and convertible into `gate_trace::Value`.
///
/// ## Example
///
/// ```rust,ignore
/// #[derive(Entity)]
/// #[entity(type = "Post")]
/// struct Post {
///     #[entity(key)]
///     id: u64,
///     title: String,
/// }
/// ```
#[proc_macro_derive(Entity, attributes(entity))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_entity_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_entity_impl(input: DeriveInput) -> Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let entity_type = parse_type_attr(&input)?.unwrap_or_else(|| name.to_string());
    let key_field = find_key_field(&input.data)?;

    Ok(quote! {
        impl #impl_generics ::gate_trace::Entity for #name #ty_generics #where_clause {
            fn entity_type(&self) -> &str {
                #entity_type
            }

            fn entity_key(&self) -> ::gate_trace::Value {
                ::gate_trace::Value::from(::core::clone::Clone::clone(&self.#key_field))
            }
        }
    })
}

/// Parse the `type = "..."` value from the struct's `#[entity(...)]` attributes.
fn parse_type_attr(input: &DeriveInput) -> Result<Option<String>> {
    let mut type_value = None;

    for attr in &input.attrs {
        if !attr.path().is_ident(ATTR) {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("type") {
                let value: LitStr = meta.value()?.parse()?;
                if value.value().is_empty() {
                    return Err(meta.error("entity type must not be empty"));
                }
                type_value = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported entity attribute, expected `type = \"...\"`"))
            }
        })?;
    }

    Ok(type_value)
}

/// Find the field marked with `#[entity(key)]`, by name or by position.
fn find_key_field(data: &Data) -> Result<TokenStream2> {
    let fields = match data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            Fields::Unnamed(fields) => &fields.unnamed,
            Fields::Unit => {
                return Err(Error::new(
                    proc_macro2::Span::call_site(),
                    "unit structs have no key field",
                ));
            },
        },
        Data::Enum(_) => {
            return Err(Error::new(proc_macro2::Span::call_site(), "enums are not supported"));
        },
        Data::Union(_) => {
            return Err(Error::new(proc_macro2::Span::call_site(), "unions are not supported"));
        },
    };

    let mut found = None;

    for (index, field) in fields.iter().enumerate() {
        for attr in &field.attrs {
            if !attr.path().is_ident(ATTR) {
                continue;
            }

            let mut is_key = false;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("key") {
                    is_key = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported field attribute, expected `key`"))
                }
            })?;

            if !is_key {
                continue;
            }
            if found.is_some() {
                return Err(Error::new_spanned(field, "only one field may be marked #[entity(key)]"));
            }

            found = Some(match &field.ident {
                Some(ident) => ident.to_token_stream(),
                None => Index::from(index).to_token_stream(),
            });
        }
    }

    found.ok_or_else(|| {
        Error::new(proc_macro2::Span::call_site(), "no field marked with #[entity(key)]")
    })
}
