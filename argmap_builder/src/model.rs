use std::collections::HashMap;

/// The mapping from argument name (leading dashes stripped) to argument value.
///
/// Produced by [`tokenize`](crate::tokenize) and consumed by [`Binder::bind`](crate::Binder::bind).
pub type ArgumentMap = HashMap<String, String>;

pub(crate) const DASH: char = '-';
pub(crate) const TOKEN_SEPARATOR: char = '_';
