use crate::model::IntermediateAttributes;
use quote::ToTokens;
use std::collections::HashSet;

pub(crate) const ATTRIBUTE: &str = "argmap";

impl IntermediateAttributes {
    /// Merge every `#[argmap(..)]` attribute amongst `attributes`.
    pub(crate) fn collect(attributes: &[syn::Attribute]) -> Result<Self, syn::Error> {
        let mut singletons = HashSet::default();

        for attribute in attributes {
            if attribute.path().is_ident(ATTRIBUTE) {
                singletons.extend(IntermediateAttributes::try_from(attribute)?.singletons);
            }
        }

        Ok(Self { singletons })
    }
}

impl TryFrom<&syn::Attribute> for IntermediateAttributes {
    type Error = syn::Error;

    fn try_from(value: &syn::Attribute) -> Result<Self, Self::Error> {
        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;
        let expressions = value.parse_args_with(attributes_parser)?;
        let mut singletons = HashSet::default();

        for expression in expressions {
            let ident = match &expression {
                syn::Expr::Path(path) => path.path.get_ident(),
                _ => None,
            };

            match ident {
                Some(ident) => {
                    singletons.insert(ident.to_string());
                }
                None => {
                    return Err(syn::Error::new_spanned(
                        &expression,
                        format!(
                            "Unparseable attribute: {}",
                            expression.to_token_stream()
                        ),
                    ));
                }
            };
        }

        Ok(Self { singletons })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn construct_attributes_empty() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[argmap()]
        };

        // Execute
        let attributes = IntermediateAttributes::try_from(&attribute).unwrap();

        // Verify
        assert_eq!(attributes, IntermediateAttributes::default());
    }

    #[test]
    fn construct_attributes() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[argmap(abc, readonly)]
        };

        // Execute
        let attributes = IntermediateAttributes::try_from(&attribute).unwrap();

        // Verify
        assert_eq!(
            attributes,
            IntermediateAttributes {
                singletons: HashSet::from(["abc".to_string(), "readonly".to_string()]),
            }
        );
    }

    #[test]
    fn construct_attributes_unparseable() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[argmap(qwerty = "123")]
        };

        // Execute
        let error = IntermediateAttributes::try_from(&attribute).unwrap_err();

        // Verify
        assert_eq!(
            error.to_string(),
            "Unparseable attribute: qwerty = \"123\""
        );
    }

    #[test]
    fn collect_attributes() {
        // Setup
        let attributes: Vec<syn::Attribute> = vec![
            parse_quote! { #[argmap(readonly)] },
            parse_quote! { #[doc = "not ours"] },
            parse_quote! { #[argmap(ignore_unknown)] },
        ];

        // Execute
        let attributes = IntermediateAttributes::collect(&attributes).unwrap();

        // Verify
        assert_eq!(
            attributes,
            IntermediateAttributes {
                singletons: HashSet::from([
                    "readonly".to_string(),
                    "ignore_unknown".to_string()
                ]),
            }
        );
    }

    #[test]
    fn collect_attributes_none() {
        let attributes: Vec<syn::Attribute> = vec![parse_quote! { #[derive(Default)] }];
        assert_eq!(
            IntermediateAttributes::collect(&attributes).unwrap(),
            IntermediateAttributes::default()
        );
    }
}
