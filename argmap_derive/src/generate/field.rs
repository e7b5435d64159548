use crate::model::{DeriveField, FieldType};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;

impl DeriveField {
    pub(crate) fn generate(self) -> TokenStream2 {
        let DeriveField {
            field_name,
            field_type,
        } = self;
        // Raw identifiers (ex: `r#type`) bind by their plain name.
        let field_name_str = field_name.unraw().to_string();

        match field_type {
            FieldType::Primitive => quote! {
                registry = registry.field(#field_name_str, ::argmap::Primitive::new(&mut self.#field_name));
            },
            FieldType::ReadOnly => quote! {
                registry = registry.field(#field_name_str, ::argmap::ReadOnly::new(&self.#field_name));
            },
            FieldType::Unsupported => quote! {
                registry = registry.field(#field_name_str, ::argmap::Unsupported::new(&self.#field_name));
            },
        }
    }
}
