extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveRecord;
use proc_macro::TokenStream;

/// Generate the [`Bindable`](../argmap/prelude/trait.Bindable.html) registry for a record struct.
///
/// Also implements [`ArgmapParse`](../argmap/prelude/trait.ArgmapParse.html), whose `S::argmap_parse()` binds the process arguments onto `S::default()`.
/// `S` need only implement `Default` when `argmap_parse` is called.
///
/// Container attributes:
/// * `#[argmap(ignore_unknown)]` makes `argmap_parse` skip arguments which match no field.
///
/// Field attributes:
/// * `#[argmap(readonly)]` registers the field as present, but not assignable.
#[proc_macro_derive(ArgmapRecord, attributes(argmap))]
pub fn argmap_record(input: TokenStream) -> TokenStream {
    // https://doc.rust-lang.org/book/ch19-06-macros.html
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveRecord::try_from(derive_input) {
        Ok(record) => record.generate().into(),
        Err(error) => error.to_compile_error().into(),
    }
}
