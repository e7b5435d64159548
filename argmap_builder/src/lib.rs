//! Builder module for `argmap`.
//! See [documentation root](https://docs.rs/argmap/latest/argmap/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod binder;
mod error;
mod model;
mod normalize;
#[allow(missing_docs)]
pub mod prelude;
mod tokens;

pub use api::*;
pub use binder::Binder;
pub use error::*;
pub use model::ArgumentMap;
pub use normalize::field_name;
pub use tokens::{args_map, tokenize};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
