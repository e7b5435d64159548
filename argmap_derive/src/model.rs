use proc_macro2::TokenStream as TokenStream2;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        let st = &self.tokens.to_string();
        let ot = &other.tokens.to_string();
        st == ot
    }
}

impl Eq for DeriveValue {}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct IntermediateAttributes {
    pub singletons: HashSet<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Primitive,
    ReadOnly,
    Unsupported,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveField {
    pub field_name: syn::Ident,
    pub field_type: FieldType,
}

#[derive(Debug, PartialEq, Eq)]
pub enum RecordShape {
    Named(Vec<DeriveField>),
    NotRecord,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveGenerics {
    pub impl_generics: DeriveValue,
    pub type_generics: DeriveValue,
    pub where_clause: DeriveValue,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveRecord {
    pub struct_name: syn::Ident,
    pub generics: DeriveGenerics,
    pub ignore_unknown: bool,
    pub shape: RecordShape,
}
