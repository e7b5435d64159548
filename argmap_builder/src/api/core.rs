use std::collections::HashMap;

use crate::api::capture::Capturable;
use crate::error::BindError;
use crate::normalize::field_name;

/// The fields of a destination record, keyed by their normalized names.
///
/// This stands in for runtime reflection: the registry is built once per bind, and each entry captures directly into its field.
/// Typically generated via `#[derive(ArgmapRecord)]`, but it may also be written by hand.
///
/// ### Example
/// ```
/// # use argmap_builder as argmap;
/// use argmap::{FieldRegistry, Primitive, ReadOnly};
///
/// struct Config {
///     max_size: u32,
///     verbose: bool,
///     version: String,
/// }
///
/// let mut config = Config { max_size: 0, verbose: false, version: "1.0".to_string() };
/// let registry = FieldRegistry::new("Config")
///     .field("max_size", Primitive::new(&mut config.max_size))
///     .field("verbose", Primitive::new(&mut config.verbose))
///     .field("version", ReadOnly::new(&config.version));
/// ```
pub struct FieldRegistry<'a> {
    record: String,
    // We need a (dyn .. [ignoring T] ..) here in order to put all the fields of varying types T under one collection.
    fields: HashMap<String, Box<dyn Capturable + 'a>>,
    duplicates: Vec<String>,
}

impl<'a> std::fmt::Debug for FieldRegistry<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut fields: Vec<(&str, &str)> = self
            .fields
            .iter()
            .map(|(name, capture)| (name.as_str(), capture.type_name()))
            .collect();
        fields.sort();
        f.debug_struct("FieldRegistry")
            .field("record", &self.record)
            .field("fields", &fields)
            .finish()
    }
}

impl<'a> FieldRegistry<'a> {
    /// Create an empty registry for the record type `record`.
    pub fn new(record: impl Into<String>) -> Self {
        Self {
            record: record.into(),
            fields: HashMap::default(),
            duplicates: Vec::default(),
        }
    }

    /// Register a field of the record.
    ///
    /// `name` is the field's identifier as declared on the record (ex: `max_size`); it is normalized before registration.
    /// Registering two fields that normalize to the same name makes the registry invalid.
    pub fn field(mut self, name: impl AsRef<str>, capture: impl Capturable + 'a) -> Self {
        let name = field_name(name.as_ref());

        if self.fields.contains_key(&name) {
            self.duplicates.push(name);
        } else {
            self.fields.insert(name, Box::new(capture));
        }

        self
    }

    /// The record type this registry was built for.
    pub fn record(&self) -> &str {
        &self.record
    }

    /// The normalized names of the registered fields, sorted.
    #[cfg(any(test, feature = "unit_test"))]
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        names.sort();
        names
    }

    pub(crate) fn validate(&self) -> Result<(), BindError> {
        match self.duplicates.first() {
            Some(field) => Err(BindError::DuplicateField {
                record: self.record.clone(),
                field: field.clone(),
            }),
            None => Ok(()),
        }
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut (dyn Capturable + 'a)> {
        self.fields.get_mut(name).map(|capture| capture.as_mut())
    }
}
