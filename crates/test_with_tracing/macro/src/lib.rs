// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Procedural macro backing `test_with_tracing::test`.
//!
//! The attribute turns a plain test function into a standard `#[test]` that
//! installs the shared tracing subscriber and enters a span named after the
//! test before running the original body.

use proc_macro::*;
use quote::quote;
use syn::spanned::*;
use syn::*;

/// Attribute macro for tests that emit tracing output.
///
/// The test function must be synchronous and take no arguments. Any return
/// type accepted by `#[test]` is preserved.
#[proc_macro_attribute]
pub fn test(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as ItemFn);
    make_test(item)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn make_test(item: ItemFn) -> syn::Result<proc_macro2::TokenStream> {
    if item.sig.asyncness.is_some() {
        return Err(Error::new(
            item.sig.fn_token.span(),
            "test function must not be async",
        ));
    }
    if !item.sig.inputs.is_empty() {
        return Err(Error::new(item.sig.inputs.span(), "expected 0 arguments"));
    }

    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = item;
    let name = &sig.ident;
    let return_type = &sig.output;

    Ok(quote! {
        #[::core::prelude::v1::test]
        #(#attrs)*
        #vis fn #name() #return_type {
            #sig #block
            ::test_with_tracing::init();
            let span = ::test_with_tracing::tracing::span!(
                ::test_with_tracing::tracing::Level::INFO,
                stringify!(#name)
            );
            let _span_guard = span.enter();
            #name()
        }
    })
}
