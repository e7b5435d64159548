//! Traits which, typically, may be imported without concern: `use argmap::prelude::*`.
use crate::api::FieldRegistry;
use crate::binder::Binder;
use crate::error::BindError;

/// Behaviour for a record whose fields may be bound from an [`ArgumentMap`](crate::ArgumentMap).
// Needs to be imported in order to implement a `Bindable` by hand.
pub trait Bindable {
    /// Register the fields of this record.
    ///
    /// Each registered capture borrows its field mutably for the lifetime of the registry.
    /// Fails with [`BindError::InvalidDestination`] when the type is not a record with named fields.
    fn registry(&mut self) -> Result<FieldRegistry<'_>, BindError>;
}

/// Behaviour to convert an argument value into a primitive type.
// Needs to be imported in order to implement a custom `Coercible`.
pub trait Coercible: Sized {
    /// Convert the argument value, or explain why it does not convert.
    fn coerce(token: &str) -> Result<Self, String>;
}

/// Behaviour to build a record straight from the process arguments.
///
/// Generated by `#[derive(ArgmapRecord)]`; `argmap_parse` is only available on records which implement [`Default`].
pub trait ArgmapParse: Bindable {
    /// Whether arguments matching no field are skipped, rather than rejected.
    const IGNORE_UNKNOWN: bool;

    /// Bind the process arguments onto a default initialized record.
    fn argmap_parse() -> Result<Self, BindError>
    where
        Self: Sized + Default,
    {
        let mut target = Self::default();
        Binder::new()
            .ignore_unknown(Self::IGNORE_UNKNOWN)
            .bind_env(&mut target)?;
        Ok(target)
    }
}
