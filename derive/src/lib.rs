use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod from_bits;
mod message;

#[proc_macro_derive(FromBits, attributes(bits, group))]
pub fn derive_from_bits(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match from_bits::expand_from_bits(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error().into(),
    }
}

#[proc_macro_derive(Message, attributes(message))]
pub fn derive_message(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match message::expand_message(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error().into(),
    }
}
