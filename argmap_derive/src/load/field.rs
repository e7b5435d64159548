use crate::load::check_attributes;
use crate::model::{DeriveField, FieldType, IntermediateAttributes};

const READONLY: &str = "readonly";

// The types with a conversion from an argument value.
const PRIMITIVES: &[&str] = &[
    "String", "bool", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64",
    "u128", "usize",
];

impl TryFrom<&syn::Field> for DeriveField {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let field_name = match &value.ident {
            Some(ident) => ident.clone(),
            None => {
                return Err(syn::Error::new_spanned(
                    value,
                    "Invalid - record fields must be named.",
                ))
            }
        };
        let attributes = IntermediateAttributes::collect(&value.attrs)?;
        check_attributes("field", &field_name, &attributes.singletons, &[READONLY])?;

        let field_type = if attributes.singletons.contains(READONLY) {
            FieldType::ReadOnly
        } else if is_primitive(&value.ty) {
            FieldType::Primitive
        } else {
            FieldType::Unsupported
        };

        Ok(DeriveField {
            field_name,
            field_type,
        })
    }
}

fn is_primitive(ty: &syn::Type) -> bool {
    match ty {
        syn::Type::Path(type_path) if type_path.qself.is_none() => {
            match type_path.path.segments.last() {
                Some(segment) => {
                    matches!(segment.arguments, syn::PathArguments::None)
                        && PRIMITIVES.contains(&segment.ident.to_string().as_str())
                }
                None => false,
            }
        }
        syn::Type::Group(group) => is_primitive(&group.elem),
        syn::Type::Paren(paren) => is_primitive(&paren.elem),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Span;
    use syn::parse_quote;

    #[test]
    fn construct_field_primitive() {
        let fields: [syn::Field; 6] = [
            parse_quote! { size: usize },
            parse_quote! { name: String },
            parse_quote! { name: std::string::String },
            parse_quote! { skip: bool },
            parse_quote! { offset: (i64) },
            parse_quote! { pub size: ::core::primitive::u8 },
        ];

        for field in fields {
            // Execute
            let derive_field = DeriveField::try_from(&field).unwrap();

            // Verify
            assert_eq!(derive_field.field_type, FieldType::Primitive);
        }
    }

    #[test]
    fn construct_field_unsupported() {
        let fields: [syn::Field; 7] = [
            parse_quote! { ratio: f64 },
            parse_quote! { items: Vec<u32> },
            parse_quote! { maybe: Option<String> },
            parse_quote! { name: &'static str },
            parse_quote! { pair: (u32, u32) },
            parse_quote! { custom: <T as Trait>::u32 },
            parse_quote! { inner: Inner },
        ];

        for field in fields {
            // Execute
            let derive_field = DeriveField::try_from(&field).unwrap();

            // Verify
            assert_eq!(derive_field.field_type, FieldType::Unsupported);
        }
    }

    #[test]
    fn construct_field_readonly() {
        // Setup
        let field: syn::Field = parse_quote! {
            #[argmap(readonly)]
            version: u32
        };

        // Execute
        let derive_field = DeriveField::try_from(&field).unwrap();

        // Verify
        assert_eq!(
            derive_field,
            DeriveField {
                field_name: ident("version"),
                field_type: FieldType::ReadOnly,
            }
        );
    }

    #[test]
    fn construct_field_unknown_attribute() {
        // Setup
        let field: syn::Field = parse_quote! {
            #[argmap(ignore_unknown)]
            size: u32
        };

        // Execute
        let error = DeriveField::try_from(&field).unwrap_err();

        // Verify
        assert_eq!(
            error.to_string(),
            "Invalid - field does not accept `#[argmap(ignore_unknown)]`; expected one of: `readonly`."
        );
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }
}
