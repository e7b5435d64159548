use std::any::type_name;

use crate::api::capture::*;
use crate::prelude::Coercible;

/// A writable field of a primitive type.
///
/// ### Example
/// ```
/// # use argmap_builder as argmap;
/// use argmap::{Capturable, Primitive};
///
/// let mut port: u16 = 0;
/// Primitive::new(&mut port).capture("8080").unwrap();
/// assert_eq!(port, 8080);
/// ```
pub struct Primitive<'a, T> {
    variable: &'a mut T,
}

impl<'a, T> Primitive<'a, T> {
    /// Create a primitive field.
    pub fn new(variable: &'a mut T) -> Self {
        Self { variable }
    }
}

impl<'a, T> Capturable for Primitive<'a, T>
where
    T: Coercible,
{
    fn capture(&mut self, token: &str) -> Result<(), InvalidCapture> {
        let value = T::coerce(token).map_err(|reason| InvalidCapture::InvalidConversion {
            token: token.to_string(),
            type_name: type_name::<T>(),
            reason,
        })?;
        *self.variable = value;
        Ok(())
    }

    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

/// A field which exists on the record, but may not be assigned.
pub struct ReadOnly {
    type_name: &'static str,
}

impl ReadOnly {
    /// Create a read-only field.
    /// The variable is only used to name its type.
    pub fn new<T>(_variable: &T) -> Self {
        Self {
            type_name: type_name::<T>(),
        }
    }
}

impl Capturable for ReadOnly {
    fn capture(&mut self, _token: &str) -> Result<(), InvalidCapture> {
        Err(InvalidCapture::ReadOnly {
            type_name: self.type_name,
        })
    }

    fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// A field which exists on the record, but whose type has no conversion from an argument value.
pub struct Unsupported {
    type_name: &'static str,
}

impl Unsupported {
    /// Create an unsupported field.
    /// The variable is only used to name its type.
    pub fn new<T>(_variable: &T) -> Self {
        Self {
            type_name: type_name::<T>(),
        }
    }
}

impl Capturable for Unsupported {
    fn capture(&mut self, _token: &str) -> Result<(), InvalidCapture> {
        Err(InvalidCapture::Unsupported {
            type_name: self.type_name,
        })
    }

    fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl Coercible for String {
    fn coerce(token: &str) -> Result<Self, String> {
        Ok(token.to_string())
    }
}

impl Coercible for bool {
    fn coerce(token: &str) -> Result<Self, String> {
        match token {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err("invalid boolean literal".to_string()),
        }
    }
}

macro_rules! coercible_integer {
    ($($integer:ty),*) => {
        $(
            impl Coercible for $integer {
                fn coerce(token: &str) -> Result<Self, String> {
                    token.parse::<$integer>().map_err(|error| error.to_string())
                }
            }
        )*
    };
}

coercible_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
