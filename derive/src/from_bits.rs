use proc_macro::TokenStream;
use quote::{ToTokens, quote};
use syn::{
    Data, DeriveInput, Error, Field, Fields, GenericArgument, Ident, LitInt, Meta, PathArguments,
    Result, Token, Type,
    parse::{Parse, ParseStream},
};

pub(crate) fn expand_from_bits(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new_spanned(
            input,
            "`FromBits` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new_spanned(
            input,
            "`FromBits` may only be derived on structs with named fields.",
        ))?
    };

    let fields = fields
        .named
        .iter()
        .map(FieldLayout::parse)
        .collect::<Result<Vec<_>>>()?;

    // Bind in declaration order, so flags are in scope for later fields.
    let bindings = fields
        .iter()
        .map(FieldLayout::binding)
        .collect::<Result<Vec<_>>>()?;

    let names = fields.iter().map(|f| &f.name);

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::binnacle::FromBits for #name #ty_generics #where_clause {
            fn from_bits<__M: ::binnacle::EncodedMessage + ?::core::marker::Sized>(
                __message: &__M,
            ) -> ::core::result::Result<Self, ::binnacle::Error> {
                #(#bindings)*
                ::core::result::Result::Ok(Self { #(#names),* })
            }
        }
    };

    Ok(expanded.into())
}

#[derive(Debug)]
struct FieldLayout {
    name: Ident,
    ty: Type,
    kind: FieldKind,
}

#[derive(Debug)]
enum FieldKind {
    Bits(BitsAttribute),
    Group(Option<Ident>),
}

impl FieldLayout {
    fn parse(field: &Field) -> Result<Self> {
        let name = field.ident.clone().unwrap();

        let bits = field.attrs.iter().find(|a| a.path().is_ident("bits"));
        let group = field.attrs.iter().find(|a| a.path().is_ident("group"));

        let kind = match (bits, group) {
            (Some(attr), None) => FieldKind::Bits(attr.meta.require_list()?.parse_args()?),
            (None, Some(attr)) => match &attr.meta {
                Meta::Path(_) => FieldKind::Group(None),
                meta => FieldKind::Group(Some(meta.require_list()?.parse_args()?)),
            },
            (Some(attr), Some(_)) => Err(Error::new_spanned(
                attr,
                "Field may not have both a `bits` and a `group` attribute.",
            ))?,
            (None, None) => Err(Error::new_spanned(
                field,
                "Field must have a `bits` or `group` attribute.",
            ))?,
        };

        Ok(Self {
            name,
            ty: field.ty.clone(),
            kind,
        })
    }

    fn binding(&self) -> Result<impl ToTokens> {
        let Self { name, ty, kind } = self;

        let value = match kind {
            FieldKind::Group(None) => quote! {
                <#ty as ::binnacle::FromBits>::from_bits(__message)?
            },
            FieldKind::Group(Some(flag)) => quote! {
                if #flag {
                    ::binnacle::either::Either::Left(::binnacle::FromBits::from_bits(__message)?)
                } else {
                    ::binnacle::either::Either::Right(::binnacle::FromBits::from_bits(__message)?)
                }
            },
            FieldKind::Bits(attr) => {
                let value = attr.value(ty)?;
                quote! { #value }
            }
        };

        Ok(quote! { let #name: #ty = #value; })
    }
}

#[derive(Debug)]
struct BitsAttribute {
    start: LitInt,
    end: End,
    signed: bool,
    scale: Option<LitInt>,
    conditions: Vec<Condition>,
}

#[derive(Debug)]
enum End {
    Single,
    Exclusive(LitInt),
    Open,
}

#[derive(Debug)]
enum Condition {
    When(Ident),
    Unless(Ident),
    Optional,
}

impl BitsAttribute {
    fn value(&self, ty: &Type) -> Result<impl ToTokens> {
        let start = &self.start;

        let end = match &self.end {
            End::Single => quote! { #start + 1 },
            End::Exclusive(end) => quote! { #end },
            End::Open => quote! { ::binnacle::EncodedMessage::bit_len(__message) },
        };

        let inner = if self.conditions.is_empty() {
            ty.clone()
        } else {
            option_inner(ty)?
        };

        let range = quote! { ::binnacle::EncodedMessage::bits(__message, #start, #end)? };

        let value = match &self.scale {
            Some(scale) => {
                let raw = if self.signed {
                    quote! { i64 }
                } else {
                    quote! { u64 }
                };

                quote! {
                    (<#raw as ::binnacle::FromField>::from_field(#range)? as f64 / #scale as f64)
                        as #inner
                }
            }
            None if self.signed => Err(Error::new_spanned(
                start,
                "`signed` only applies to scaled fields; use a signed field type instead.",
            ))?,
            None => quote! { <#inner as ::binnacle::FromField>::from_field(#range)? },
        };

        if self.conditions.is_empty() {
            return Ok(value);
        }

        let checks = self.conditions.iter().map(|condition| match condition {
            Condition::When(flag) => quote! { #flag },
            Condition::Unless(flag) => quote! { !#flag },
            Condition::Optional => quote! {
                #end <= ::binnacle::EncodedMessage::bit_len(__message)
            },
        });

        Ok(quote! {
            if #(#checks &&)* true {
                ::core::option::Option::Some(#value)
            } else {
                ::core::option::Option::None
            }
        })
    }
}

impl Parse for BitsAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let start = input.parse::<LitInt>()?;

        let end = if input.peek(Token![..]) {
            input.parse::<Token![..]>()?;

            if input.peek(LitInt) {
                End::Exclusive(input.parse()?)
            } else {
                End::Open
            }
        } else {
            End::Single
        };

        let mut signed = false;
        let mut scale = None;
        let mut conditions = Vec::new();

        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            let option = input.parse::<Ident>()?;

            if option == "signed" {
                signed = true;
            } else if option == "scale" {
                input.parse::<Token![=]>()?;
                scale = Some(input.parse::<LitInt>()?);
            } else if option == "when" {
                input.parse::<Token![=]>()?;
                conditions.push(Condition::When(input.parse()?));
            } else if option == "unless" {
                input.parse::<Token![=]>()?;
                conditions.push(Condition::Unless(input.parse()?));
            } else if option == "optional" {
                if matches!(end, End::Open) {
                    Err(Error::new_spanned(
                        option,
                        "`optional` requires a closed bit range.",
                    ))?
                }

                conditions.push(Condition::Optional);
            } else {
                Err(Error::new_spanned(
                    option,
                    "Expected `signed`, `scale`, `when`, `unless` or `optional`.",
                ))?
            }
        }

        Ok(Self {
            start,
            end,
            signed,
            scale,
            conditions,
        })
    }
}

fn option_inner(ty: &Type) -> Result<Type> {
    let Type::Path(path) = ty else {
        Err(Error::new_spanned(ty, "Field must have a type annotation."))?
    };

    let Some(segment) = path.path.segments.last() else {
        Err(Error::new_spanned(
            &path.path.segments,
            "Field must have a type annotation.",
        ))?
    };

    if segment.ident != "Option" {
        Err(Error::new_spanned(
            &segment.ident,
            "Conditional field must have type `Option<T>`.",
        ))?
    }

    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        Err(Error::new_spanned(
            &segment.arguments,
            "Field of type `Option<T>` must have a generic parameter.",
        ))?
    };

    let Some(GenericArgument::Type(inner)) = arguments.args.first() else {
        Err(Error::new_spanned(
            &arguments.args,
            "Generic argument of a field of type `Option<T>` must be a type.",
        ))?
    };

    Ok(inner.clone())
}
