use crate::api::InvalidCapture;
use crate::error::BindError;
use crate::model::ArgumentMap;
use crate::normalize::field_name;
use crate::prelude::Bindable;
use crate::tokens::{args_map, tokenize};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Binds an [`ArgumentMap`] onto a destination record.
///
/// Each argument name is normalized (see [`field_name`]) and matched, case-sensitively, against the record's registered fields.
/// The matching field is assigned the argument value, converted to the field's type.
///
/// Arguments are bound in no particular order, and each assignment stands on its own.
/// When binding fails part way, the fields already assigned keep their new values.
///
/// ### Example
/// ```
/// # use argmap_builder as argmap;
/// use argmap::prelude::*;
/// use argmap::{BindError, Binder, FieldRegistry, Primitive};
///
/// #[derive(Default)]
/// struct Config {
///     port: u16,
///     debug: bool,
/// }
///
/// impl Bindable for Config {
///     fn registry(&mut self) -> Result<FieldRegistry<'_>, BindError> {
///         Ok(FieldRegistry::new("Config")
///             .field("port", Primitive::new(&mut self.port))
///             .field("debug", Primitive::new(&mut self.debug)))
///     }
/// }
///
/// let mut config = Config::default();
/// Binder::new()
///     .bind_tokens(&["-port", "8080", "-debug", "true"], &mut config)
///     .unwrap();
/// assert_eq!(config.port, 8080);
/// assert!(config.debug);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Binder {
    ignore_unknown: bool,
}

impl Binder {
    /// Create a binder which rejects unknown arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure whether arguments matching no field are skipped (`true`), or rejected with [`BindError::UnknownField`] (`false`).
    pub fn ignore_unknown(mut self, ignore_unknown: bool) -> Self {
        self.ignore_unknown = ignore_unknown;
        self
    }

    /// Bind the `arguments` onto the `destination`.
    pub fn bind<B>(&self, arguments: &ArgumentMap, destination: &mut B) -> Result<(), BindError>
    where
        B: Bindable + ?Sized,
    {
        let mut registry = destination.registry()?;
        registry.validate()?;

        for (key, value) in arguments {
            let field = field_name(key);

            match registry.get_mut(&field) {
                Some(capture) => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Binding '{key}' onto {field} ({}).", capture.type_name());
                    }

                    if let Err(error) = capture.capture(value) {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Failed to bind '{key}' onto {field}: {error}");
                        }

                        return Err(bind_error(error, field));
                    }
                }
                None if self.ignore_unknown => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Skipping '{key}': no field {field}.");
                    }
                }
                None => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Rejecting '{key}': no field {field}.");
                    }

                    return Err(BindError::UnknownField { field });
                }
            }
        }

        Ok(())
    }

    /// Tokenize the `tokens` (see [`tokenize`]) and bind the result onto the `destination`.
    pub fn bind_tokens<S, B>(&self, tokens: &[S], destination: &mut B) -> Result<(), BindError>
    where
        S: AsRef<str>,
        B: Bindable + ?Sized,
    {
        let arguments = tokenize(tokens)?;
        self.bind(&arguments, destination)
    }

    /// Tokenize the process arguments (see [`args_map`]) and bind the result onto the `destination`.
    pub fn bind_env<B>(&self, destination: &mut B) -> Result<(), BindError>
    where
        B: Bindable + ?Sized,
    {
        let arguments = args_map()?;
        self.bind(&arguments, destination)
    }
}

fn bind_error(error: InvalidCapture, field: String) -> BindError {
    match error {
        InvalidCapture::InvalidConversion {
            token,
            type_name,
            reason,
        } => BindError::InvalidValue {
            field,
            value: token,
            type_name,
            reason,
        },
        InvalidCapture::ReadOnly { .. } => BindError::NotSettable { field },
        InvalidCapture::Unsupported { type_name } => {
            BindError::UnsupportedFieldType { field, type_name }
        }
    }
}
