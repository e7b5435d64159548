//! Derive Api for `argmap` binding.
//!
//! ### Getting Started
//! Instrument a record struct `S` with `#[derive(ArgmapRecord)]`.
//! This implements [`Bindable`](../prelude/trait.Bindable.html) for `S`, registering each of its named fields.
//! It also implements [`ArgmapParse`](../prelude/trait.ArgmapParse.html) for `S`.
//! When `S` implements `Default`, `S::argmap_parse() -> Result<S, BindError>` binds the process arguments onto `S::default()`.
//! Without `Default`, bind a caller-owned `S` through [`Binder`](../struct.Binder.html) instead.
//!
//! ```no_run
#![doc = include_str!("../demos/demo_derived.rs")]
//! ```
//!
//! ```console
//! $ demo_derived -source path/to/file -max_size 100
//! Config { source: "path/to/file", max_size: 100, verbose: false }
//!
//! $ demo_derived -max_size many
//! Bind error: invalid usize value 'many' for MaxSize: invalid digit found in string.
//! ```
//!
//! ### Field Registration
//! Each named field registers according to its declared type:
//! ```console
//! Type                                  | Registration
//! --------------------------------------------------------------------
//! String, bool, i8 .. i128, isize,      | Primitive::new(&mut s.field)
//! u8 .. u128, usize                     |
//! any other type                        | Unsupported::new(&s.field)
//! ```
//!
//! Types are matched by name (ex: `String` and `std::string::String` are both recognized).
//! A type alias to a primitive is therefore registered as `Unsupported`.
//! Unsupported fields are not a compile error; binding onto one fails with `BindError::UnsupportedFieldType`.
//!
//! Tuple structs, unit structs and enums have no named fields.
//! Their generated registry fails with `BindError::InvalidDestination`.
//!
//! ### Attributes
//! * `#[argmap(ignore_unknown)]` on the struct configures `argmap_parse` to skip arguments that match no field.
//! * `#[argmap(readonly)]` on a field registers it via `ReadOnly::new(&s.field)`; binding onto it fails with `BindError::NotSettable`.
//!
//! For example:
//! ```
//! use argmap::derive::*;
//! use argmap::{BindError, Binder};
//!
//! #[derive(Debug, Default, ArgmapRecord)]
//! struct Parameters {
//!     name: String,
//!     // the above generates:
//!     //  .field("name", Primitive::new(&mut self.name))
//!
//!     #[argmap(readonly)]
//!     version: u32,
//!     // the above generates:
//!     //  .field("version", ReadOnly::new(&self.version))
//!
//!     ratio: f64,
//!     // the above generates:
//!     //  .field("ratio", Unsupported::new(&self.ratio))
//! }
//!
//! let mut parameters = Parameters::default();
//! Binder::new().bind_tokens(&["-name", "abc"], &mut parameters).unwrap();
//! assert_eq!(parameters.name, "abc");
//!
//! let error = Binder::new().bind_tokens(&["-version", "2"], &mut parameters).unwrap_err();
//! assert_eq!(error, BindError::NotSettable { field: "Version".to_string() });
//! ```

pub use argmap_builder::prelude::{ArgmapParse, Bindable};
pub use argmap_derive::*;
