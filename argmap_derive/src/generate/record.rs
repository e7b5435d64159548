use crate::model::{DeriveGenerics, DeriveRecord, RecordShape};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl DeriveRecord {
    pub(crate) fn generate(self) -> TokenStream2 {
        let DeriveRecord {
            struct_name,
            generics,
            ignore_unknown,
            shape,
        } = self;
        let DeriveGenerics {
            impl_generics,
            type_generics,
            where_clause,
        } = generics;
        let impl_generics = impl_generics.tokens;
        let type_generics = type_generics.tokens;
        let where_clause = where_clause.tokens;
        let struct_name_str = format!("{struct_name}");

        let registry = match shape {
            RecordShape::Named(fields) if fields.is_empty() => quote! {
                let registry = ::argmap::FieldRegistry::new(#struct_name_str);
                ::std::result::Result::Ok(registry)
            },
            RecordShape::Named(fields) => {
                let fields = fields
                    .into_iter()
                    .map(|field| field.generate())
                    .collect::<Vec<_>>();

                quote! {
                    let mut registry = ::argmap::FieldRegistry::new(#struct_name_str);
                    #( #fields )*
                    ::std::result::Result::Ok(registry)
                }
            }
            RecordShape::NotRecord => quote! {
                ::std::result::Result::Err(::argmap::BindError::InvalidDestination {
                    record: ::std::string::ToString::to_string(#struct_name_str),
                })
            },
        };

        quote! {
            impl #impl_generics ::argmap::prelude::Bindable for #struct_name #type_generics #where_clause {
                fn registry(&mut self) -> ::std::result::Result<::argmap::FieldRegistry<'_>, ::argmap::BindError> {
                    #registry
                }
            }

            impl #impl_generics ::argmap::prelude::ArgmapParse for #struct_name #type_generics #where_clause {
                const IGNORE_UNKNOWN: bool = #ignore_unknown;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeriveField, DeriveValue, FieldType};
    use proc_macro2::Span;

    #[test]
    fn render_record_empty() {
        // Setup
        let record = DeriveRecord {
            struct_name: ident("Config"),
            generics: empty_generics(),
            ignore_unknown: false,
            shape: RecordShape::Named(vec![]),
        };

        // Execute
        let token_stream = record.generate();

        // Verify
        assert_eq!(
            token_stream.to_string(),
            quote! {
                impl ::argmap::prelude::Bindable for Config {
                    fn registry(&mut self) -> ::std::result::Result<::argmap::FieldRegistry<'_>, ::argmap::BindError> {
                        let registry = ::argmap::FieldRegistry::new("Config");
                        ::std::result::Result::Ok(registry)
                    }
                }

                impl ::argmap::prelude::ArgmapParse for Config {
                    const IGNORE_UNKNOWN: bool = false;
                }
            }
            .to_string(),
        );
    }

    #[test]
    fn render_record() {
        // Setup
        let record = DeriveRecord {
            struct_name: ident("Config"),
            generics: DeriveGenerics {
                impl_generics: DeriveValue {
                    tokens: quote! { <T: Default> },
                },
                type_generics: DeriveValue {
                    tokens: quote! { <T> },
                },
                where_clause: DeriveValue {
                    tokens: quote! {},
                },
            },
            ignore_unknown: true,
            shape: RecordShape::Named(vec![
                DeriveField {
                    field_name: ident("max_size"),
                    field_type: FieldType::Primitive,
                },
                DeriveField {
                    field_name: ident("extra"),
                    field_type: FieldType::Unsupported,
                },
            ]),
        };

        // Execute
        let token_stream = record.generate();

        // Verify
        assert_eq!(
            token_stream.to_string(),
            quote! {
                impl<T: Default> ::argmap::prelude::Bindable for Config<T> {
                    fn registry(&mut self) -> ::std::result::Result<::argmap::FieldRegistry<'_>, ::argmap::BindError> {
                        let mut registry = ::argmap::FieldRegistry::new("Config");
                        registry = registry.field("max_size", ::argmap::Primitive::new(&mut self.max_size));
                        registry = registry.field("extra", ::argmap::Unsupported::new(&self.extra));
                        ::std::result::Result::Ok(registry)
                    }
                }

                impl<T: Default> ::argmap::prelude::ArgmapParse for Config<T> {
                    const IGNORE_UNKNOWN: bool = true;
                }
            }
            .to_string(),
        );
    }

    #[test]
    fn render_record_not_record() {
        // Setup
        let record = DeriveRecord {
            struct_name: ident("Pair"),
            generics: empty_generics(),
            ignore_unknown: false,
            shape: RecordShape::NotRecord,
        };

        // Execute
        let token_stream = record.generate();

        // Verify
        let rendered = token_stream.to_string();
        assert!(rendered.contains(
            &quote! {
                ::std::result::Result::Err(::argmap::BindError::InvalidDestination {
                    record: ::std::string::ToString::to_string("Pair"),
                })
            }
            .to_string()
        ));
        assert!(rendered.contains(
            &quote! {
                impl ::argmap::prelude::ArgmapParse for Pair {
                    const IGNORE_UNKNOWN: bool = false;
                }
            }
            .to_string()
        ));
        assert!(!rendered.contains("Default"));
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }

    fn empty_generics() -> DeriveGenerics {
        DeriveGenerics {
            impl_generics: DeriveValue {
                tokens: quote! {},
            },
            type_generics: DeriveValue {
                tokens: quote! {},
            },
            where_clause: DeriveValue {
                tokens: quote! {},
            },
        }
    }
}
