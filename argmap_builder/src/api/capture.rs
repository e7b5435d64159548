use thiserror::Error;

/// Behaviour to capture an argument value into a single field of a record.
///
/// We use this at the bottom of the registry object graph so the compiler can maintain each field's type.
pub trait Capturable {
    /// Capture the argument value into the field.
    fn capture(&mut self, token: &str) -> Result<(), InvalidCapture>;

    /// The declared type of the field.
    fn type_name(&self) -> &'static str;
}

/// Failure to capture a value into a field.
///
/// The field's name is not known at this level; [`Binder`](crate::Binder) attaches it when reporting a [`BindError`](crate::BindError).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCapture {
    /// The value does not convert to the field's type.
    #[error("cannot convert '{token}' to {type_name}: {reason}.")]
    InvalidConversion {
        /// The raw argument value.
        token: String,
        /// The declared type of the field.
        type_name: &'static str,
        /// Why the conversion failed.
        reason: String,
    },
    /// The field may not be assigned.
    #[error("cannot assign to read-only {type_name}.")]
    ReadOnly {
        /// The declared type of the field.
        type_name: &'static str,
    },
    /// The field's type has no conversion.
    #[error("no conversion to {type_name}.")]
    Unsupported {
        /// The declared type of the field.
        type_name: &'static str,
    },
}
