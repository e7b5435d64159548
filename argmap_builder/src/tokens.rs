use std::env;

use crate::error::EmptyInput;
use crate::model::{ArgumentMap, DASH};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Map the alternating `[-]name value` tokens into an [`ArgumentMap`].
///
/// Leading dashes are stripped from each name; the dash itself is optional.
/// A trailing name without a value maps to `""`.
/// When a name repeats, the later value wins.
///
/// Fails with [`EmptyInput`] when there are no tokens.
///
/// ### Example
/// ```
/// # use argmap_builder as argmap;
/// use argmap::tokenize;
///
/// let arguments = tokenize(&["-alice", "1", "bob"]).unwrap();
/// assert_eq!(arguments["alice"], "1");
/// assert_eq!(arguments["bob"], "");
/// ```
pub fn tokenize<S>(tokens: &[S]) -> Result<ArgumentMap, EmptyInput>
where
    S: AsRef<str>,
{
    if tokens.is_empty() {
        return Err(EmptyInput);
    }

    let mut arguments = ArgumentMap::with_capacity((tokens.len() + 1) / 2);

    for pair in tokens.chunks(2) {
        let name = pair[0].as_ref().trim_start_matches(DASH);
        let value: &str = pair.get(1).map_or("", |v| v.as_ref());

        #[cfg(feature = "tracing_debug")]
        {
            if arguments.contains_key(name) {
                debug!("Argument '{name}' repeats; keeping the later value.");
            }
        }

        arguments.insert(name.to_string(), value.to_string());
    }

    Ok(arguments)
}

/// Map the process arguments ([`env::args`]) into an [`ArgumentMap`].
///
/// The program name (the first process argument) is never part of the map.
/// Fails with [`EmptyInput`] when the program was invoked without arguments.
pub fn args_map() -> Result<ArgumentMap, EmptyInput> {
    let tokens: Vec<String> = env::args().skip(1).collect();
    tokenize(&tokens)
}
