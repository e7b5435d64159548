mod attribute;
mod field;
mod record;

pub(self) fn unknown_attribute_error(
    context: &str,
    ident: &syn::Ident,
    attribute: &str,
    allowed: &[&str],
) -> syn::Error {
    syn::Error::new(
        ident.span(),
        format!(
            "Invalid - {context} does not accept `#[argmap({attribute})]`; expected one of: {}.",
            allowed
                .iter()
                .map(|a| format!("`{a}`"))
                .collect::<Vec<_>>()
                .join(", "),
        ),
    )
}

pub(self) fn check_attributes(
    context: &str,
    ident: &syn::Ident,
    singletons: &std::collections::HashSet<String>,
    allowed: &[&str],
) -> Result<(), syn::Error> {
    let mut unknown: Vec<&String> = singletons
        .iter()
        .filter(|singleton| !allowed.contains(&singleton.as_str()))
        .collect();
    unknown.sort();

    match unknown.first() {
        Some(attribute) => Err(unknown_attribute_error(context, ident, attribute, allowed)),
        None => Ok(()),
    }
}
