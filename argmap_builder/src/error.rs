use thiserror::Error;

/// The tokenizer was handed no tokens to map.
///
/// This is a sentinel rather than a malformed-input error: it is the only way tokenizing can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no valid input provided")]
pub struct EmptyInput;

/// Failure to bind an argument map onto a destination record.
///
/// Field names are reported in their normalized form (ex: `max_size` is reported as `MaxSize`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// There were no arguments to bind.
    #[error(transparent)]
    EmptyInput(#[from] EmptyInput),

    /// The destination is not a record with named fields.
    #[error("destination '{record}' must be a record with named fields")]
    InvalidDestination {
        /// The type name of the destination.
        record: String,
    },

    /// Two fields of the destination normalize to the same name.
    #[error("record '{record}' registers field [{field}] more than once")]
    DuplicateField {
        /// The type name of the destination.
        record: String,
        /// The normalized field name.
        field: String,
    },

    /// The normalized argument name matches no field of the destination.
    #[error("no such field [{field}] in provided output struct")]
    UnknownField {
        /// The normalized field name.
        field: String,
    },

    /// The field exists, but may not be assigned.
    #[error("cannot set field {field}")]
    NotSettable {
        /// The normalized field name.
        field: String,
    },

    /// The argument value cannot convert to the field's type.
    #[error("invalid {type_name} value '{value}' for {field}: {reason}")]
    InvalidValue {
        /// The normalized field name.
        field: String,
        /// The raw argument value.
        value: String,
        /// The declared type of the field.
        type_name: &'static str,
        /// Why the conversion failed.
        reason: String,
    },

    /// The field's type has no conversion from an argument value.
    #[error("unsupported field type {type_name} for field {field}")]
    UnsupportedFieldType {
        /// The normalized field name.
        field: String,
        /// The declared type of the field.
        type_name: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_converts() {
        let error: BindError = EmptyInput.into();
        assert_eq!(error, BindError::EmptyInput(EmptyInput));
        assert_eq!(error.to_string(), "no valid input provided");
    }

    #[test]
    fn unknown_field_display() {
        let error = BindError::UnknownField {
            field: "Skip".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "no such field [Skip] in provided output struct"
        );
    }

    #[test]
    fn invalid_value_display() {
        let error = BindError::InvalidValue {
            field: "Size".to_string(),
            value: "abc".to_string(),
            type_name: "u32",
            reason: "invalid digit found in string".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "invalid u32 value 'abc' for Size: invalid digit found in string"
        );
    }
}
