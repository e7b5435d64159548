use crate::load::check_attributes;
use crate::model::{
    DeriveField, DeriveGenerics, DeriveRecord, DeriveValue, IntermediateAttributes, RecordShape,
};
use quote::ToTokens;

const IGNORE_UNKNOWN: &str = "ignore_unknown";

impl TryFrom<syn::DeriveInput> for DeriveRecord {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let attributes = IntermediateAttributes::collect(&value.attrs)?;
        check_attributes("record", &value.ident, &attributes.singletons, &[IGNORE_UNKNOWN])?;

        let shape = match &value.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(fields),
                ..
            }) => RecordShape::Named(
                fields
                    .named
                    .iter()
                    .map(DeriveField::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            // Tuple & unit structs, enums, and unions have no named fields to bind onto.
            _ => RecordShape::NotRecord,
        };

        let (impl_generics, type_generics, where_clause) = value.generics.split_for_impl();
        let generics = DeriveGenerics {
            impl_generics: DeriveValue {
                tokens: impl_generics.to_token_stream(),
            },
            type_generics: DeriveValue {
                tokens: type_generics.to_token_stream(),
            },
            where_clause: DeriveValue {
                tokens: where_clause.to_token_stream(),
            },
        };

        Ok(DeriveRecord {
            struct_name: value.ident.clone(),
            generics,
            ignore_unknown: attributes.singletons.contains(IGNORE_UNKNOWN),
            shape,
        })
    }
}
