mod decode_symbolic;

use decode_symbolic::decode_symbolic;
use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemEnum, parse_macro_input};

/// Implements `Symbolic` for a fieldless enum, binding each variant by its name.
///
/// * `#[stitch(rename_all = "snake_case")]` on the enum converts every variant name
///   (any case supported by `convert_case`, e.g. `"lower"`, `"UPPER"`, `"kebab-case"`,
///   `"SCREAMING_SNAKE_CASE"`).
/// * `#[stitch(name = "...")]` on a variant overrides its name.
#[proc_macro_derive(Symbolic, attributes(stitch))]
pub fn derive_symbolic(input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as ItemEnum);
    let name = &item.ident;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();
    let symbols = match decode_symbolic(&item) {
        Ok(v) => v,
        Err(e) => return e.to_compile_error().into(),
    };
    let arms = symbols.iter().map(|(variant, symbol)| {
        quote!(#name::#variant => #symbol)
    });
    quote! {
        impl #impl_generics ::stitch::Symbolic for #name #ty_generics #where_clause {
            fn symbol(&self) -> &'static str {
                match self {
                    #(#arms,)*
                }
            }
        }
        impl #impl_generics ::std::convert::From<#name #ty_generics> for ::stitch::Parameter #where_clause {
            fn from(value: #name #ty_generics) -> Self {
                ::stitch::Parameter::symbol(&value)
            }
        }
        impl #impl_generics ::std::convert::From<&#name #ty_generics> for ::stitch::Parameter #where_clause {
            fn from(value: &#name #ty_generics) -> Self {
                ::stitch::Parameter::symbol(value)
            }
        }
    }
    .into()
}
