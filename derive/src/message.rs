use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Error, LitInt, Result, Token, punctuated::Punctuated};

pub(crate) fn expand_message(input: &DeriveInput) -> Result<TokenStream> {
    let Some(attr) = input.attrs.iter().find(|a| a.path().is_ident("message")) else {
        Err(Error::new_spanned(
            &input.ident,
            "`Message` requires a `message(...)` attribute listing type codes.",
        ))?
    };

    let codes = attr.parse_args_with(Punctuated::<LitInt, Token![,]>::parse_terminated)?;

    if codes.is_empty() {
        Err(Error::new_spanned(
            attr,
            "At least one type code must be listed.",
        ))?
    }

    let codes = codes
        .iter()
        .map(|code| match code.base10_parse::<u8>()? {
            value @ 0..64 => Ok(value),
            _ => Err(Error::new_spanned(code, "Type codes must be below 64.")),
        })
        .collect::<Result<Vec<_>>>()?;

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::binnacle::Message for #name #ty_generics #where_clause {
            const TYPES: &'static [u8] = &[#(#codes),*];
        }
    };

    Ok(expanded.into())
}
