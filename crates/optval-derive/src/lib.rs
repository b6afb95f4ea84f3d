use proc_macro::TokenStream;

mod field_presence;

/// Implement `optval::traits::FieldPresence` for a struct with named fields.
///
/// Every field must implement `Presence`; mark others `#[presence(skip)]`.
#[proc_macro_derive(FieldPresence, attributes(presence))]
pub fn derive_field_presence(input: TokenStream) -> TokenStream {
    field_presence::derive_field_presence(input.into()).into()
}
