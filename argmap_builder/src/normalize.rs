use crate::model::TOKEN_SEPARATOR;

/// Normalize an argument name into a record field name.
///
/// The name is split on `_`, each token is title-cased, and the tokens are joined back together.
/// Title-casing upper-cases the first character of the token and lower-cases the rest.
///
/// ### Example
/// ```
/// # use argmap_builder as argmap;
/// use argmap::field_name;
///
/// assert_eq!(field_name("max_size"), "MaxSize");
/// assert_eq!(field_name("URL"), "Url");
/// ```
pub fn field_name(key: &str) -> String {
    key.split(TOKEN_SEPARATOR).map(title_case).collect()
}

fn title_case(token: &str) -> String {
    let mut characters = token.chars();

    match characters.next() {
        Some(first) => first
            .to_uppercase()
            .chain(characters.flat_map(char::to_lowercase))
            .collect(),
        None => String::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("size", "Size")]
    #[case("max_size", "MaxSize")]
    #[case("unknown_key", "UnknownKey")]
    #[case("Port", "Port")]
    #[case("URL", "Url")]
    #[case("hTTP_pORT", "HttpPort")]
    #[case("a__b", "AB")]
    #[case("_leading", "Leading")]
    #[case("trailing_", "Trailing")]
    #[case("x1_y2", "X1Y2")]
    #[case("über_größe", "ÜberGröße")]
    #[case("", "")]
    fn normalize(#[case] key: &str, #[case] expected: &str) {
        assert_eq!(field_name(key), expected);
    }

    #[test]
    fn joined_tokens_lose_inner_capitals() {
        // Normalizing an already normalized name is not the identity.
        let once = field_name("max_size");
        assert_eq!(field_name(&once), "Maxsize");
    }
}
