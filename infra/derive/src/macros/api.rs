use super::derived_trait_names;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ItemFn, ItemStruct, Lit, LitStr, MetaNameValue, Token};

/// Expands `#[api_model]`: serde + `OpenAPI` derives with a camelCase wire format.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    let rename_all = match parse_rename_all(args) {
        Ok(value) => value,
        Err(err) => return err.to_compile_error(),
    };

    let derives = derived_trait_names(&input.attrs);
    let mut missing = Vec::new();
    if !derives.contains("Debug") {
        missing.push(quote! { Debug });
    }
    if !derives.contains("Serialize") {
        missing.push(quote! { ::serde::Serialize });
    }
    if !derives.contains("Deserialize") {
        missing.push(quote! { ::serde::Deserialize });
    }
    if !derives.contains("ToSchema") {
        missing.push(quote! { ::utoipa::ToSchema });
    }
    let derive_attr =
        if missing.is_empty() { quote! {} } else { quote! { #[derive(#(#missing),*)] } };

    let rename_attr = match existing_rename_all(&input.attrs) {
        Ok(Some(existing)) if existing.value() != rename_all.value() => {
            return syn::Error::new_spanned(
                existing,
                "Conflicting serde rename_all; drop it or pass the same value to api_model",
            )
            .to_compile_error();
        }
        Ok(Some(_)) => quote! {},
        Ok(None) => quote! { #[serde(rename_all = #rename_all)] },
        Err(err) => return err.to_compile_error(),
    };

    quote! {
        #derive_attr
        #rename_attr
        #input
    }
}

/// Expands `#[api_handler]`: forwards the arguments to `utoipa::path`.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[::utoipa::path(#args)]
        #vis #sig #block
    }
}

fn parse_rename_all(args: TokenStream) -> syn::Result<LitStr> {
    let default = LitStr::new("camelCase", Span::call_site());
    let metas = Punctuated::<MetaNameValue, Token![,]>::parse_terminated.parse2(args)?;

    let mut rename_all = None;
    for meta in metas {
        if !meta.path.is_ident("rename_all") {
            return Err(syn::Error::new_spanned(meta.path, "Unsupported argument; expected rename_all"));
        }
        if rename_all.is_some() {
            return Err(syn::Error::new_spanned(meta, "Duplicate argument"));
        }
        let Expr::Lit(expr) = &meta.value else {
            return Err(syn::Error::new_spanned(&meta.value, "rename_all must be a string literal"));
        };
        let Lit::Str(lit) = &expr.lit else {
            return Err(syn::Error::new_spanned(&meta.value, "rename_all must be a string literal"));
        };
        rename_all = Some(lit.clone());
    }

    Ok(rename_all.unwrap_or(default))
}

fn existing_rename_all(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut found = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                found = Some(meta.value()?.parse::<LitStr>()?);
            } else if meta.input.peek(Token![=]) {
                let _: Expr = meta.value()?.parse()?;
            }
            Ok(())
        })?;
    }
    Ok(found)
}
