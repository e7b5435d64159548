//! `argmap` turns flat command line arguments into a key/value map, and optionally binds that map onto a struct.
//!
//! It is deliberately small.
//! There is no grammar, no help text, no defaults and no required arguments.
//! The Cli convention is simply alternating name/value tokens, where each name may be prefixed with dashes:
//! ```console
//! $ myapp -source path/to/file -max_size 100 verbose true
//! ```
//!
//! # Usage
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/demo_derived.rs")]
//! ```
//! or equivalently via builder Api (this page):
//! ```no_run
#![doc = include_str!("../demos/demo_builder.rs")]
//! ```
//!
//! # Argument Map
//! [`tokenize`] (or [`args_map`], for the process arguments) pairs up the tokens:
//! * Even positioned tokens are names; leading dashes are stripped (`-alice` and `alice` are the same name).
//! * Odd positioned tokens are values, taken verbatim.
//! * A trailing name without a value maps to `""`.
//! * When a name repeats, the later value wins.
//! * Empty input fails with [`EmptyInput`].
//!
//! ```
//! use argmap::tokenize;
//!
//! let arguments = tokenize(&["-alice", "1", "bob"]).unwrap();
//! assert_eq!(arguments.len(), 2);
//! assert_eq!(arguments["alice"], "1");
//! assert_eq!(arguments["bob"], "");
//! ```
//!
//! # Binding
//! A [`Binder`] assigns each argument onto the field of a [`Bindable`](prelude::Bindable) record.
//! Argument names are normalized via [`field_name`] before matching: the name is split on `_`, each token is title-cased, and the tokens are joined.
//! For example `max_size`, `MAX_SIZE` and `Max_Size` all bind onto the field `max_size` (registered as `MaxSize`).
//!
//! Values convert according to the field's type:
//! ```console
//! Type                  | Accepts
//! ---------------------------------------------------------------------------
//! String                | the value verbatim
//! i8 .. i128, isize     | base-10 integers, with an optional sign
//! u8 .. u128, usize     | base-10 integers, with an optional `+`
//! bool                  | 1, t, T, TRUE, true, True, 0, f, F, FALSE, false, False
//! ```
//!
//! Binding stops at the first failure, reported as a [`BindError`]:
//! * [`BindError::UnknownField`] when no field matches (unless [`Binder::ignore_unknown`] is set).
//! * [`BindError::NotSettable`] when the field is read-only.
//! * [`BindError::InvalidValue`] when the value does not convert.
//! * [`BindError::UnsupportedFieldType`] when the field's type has no conversion.
//! * [`BindError::InvalidDestination`] when the destination is not a record with named fields.
//! * [`BindError::DuplicateField`] when two fields normalize to the same name.
//!
//! Arguments are bound in no particular order.
//! Fields assigned before a failure keep their new values; there is no rollback.
//!
//! # Features
//! * `tracing_debug`: emit `tracing` debug events while tokenizing and binding.
//! * `unit_test`: For features that help with unit testing.
pub mod derive;
pub use argmap_builder::*;
