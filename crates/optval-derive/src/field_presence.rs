use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    Data, DeriveInput, Error, Field, Fields, ext::IdentExt, punctuated::Punctuated, token::Comma,
};

// derive_field_presence
pub fn derive_field_presence(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut entries = Vec::new();
    for field in named_fields(input)? {
        if is_skipped(field)? {
            continue;
        }

        let field_ident = field.ident.as_ref().expect("named field");
        let field_name = field_ident.unraw().to_string();

        entries.push(quote! {
            (#field_name, &self.#field_ident as &dyn ::optval::traits::Presence)
        });
    }

    Ok(quote! {
        impl #impl_generics ::optval::traits::FieldPresence for #ident #ty_generics #where_clause {
            fn field_presence(
                &self,
            ) -> ::std::vec::Vec<(&'static str, &dyn ::optval::traits::Presence)> {
                ::std::vec![#(#entries),*]
            }
        }
    })
}

fn named_fields(input: &DeriveInput) -> syn::Result<&Punctuated<Field, Comma>> {
    let Data::Struct(data) = &input.data else {
        return Err(Error::new_spanned(
            &input.ident,
            "FieldPresence can only be derived for structs with named fields",
        ));
    };

    match &data.fields {
        Fields::Named(named) => Ok(&named.named),
        fields => Err(Error::new_spanned(
            fields,
            "FieldPresence can only be derived for structs with named fields",
        )),
    }
}

fn is_skipped(field: &Field) -> syn::Result<bool> {
    let mut skip = false;

    for attr in &field.attrs {
        if !attr.path().is_ident("presence") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported presence attribute; expected `skip`"))
            }
        })?;
    }

    Ok(skip)
}
