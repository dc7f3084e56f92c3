//! Error types returned by [`Injector::inject`](crate::Injector::inject).
//!
//! # Design
//!
//! - `ErrorKind` is the discriminant callers match on.
//! - `Error` stores the kind, a human-readable message, the type name of the
//!   object being injected and, where it applies, the resolution or field name.
//!
//! Callers check the kind with the `is_*` predicates rather than matching on
//! the message.
//!
//! # Feature Flags
//!
//! - `tracing`: logs errors when they are created.
//! - `debug`: enables extra diagnostic formatting in `Display`.
//!
//! # Examples
//!
//! ```
//! use inject::error::Error;
//!
//! let err = Error::no_provider_for_name("Logger", "app::Service");
//! assert!(err.is_no_provider_for_name());
//! assert_eq!(err.name.as_deref(), Some("Logger"));
//! ```

use core::fmt;

#[cfg(feature = "tracing")]
use tracing::error;

/// Error categories for injection.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "debug", derive(Debug))]
pub enum ErrorKind {
    /// The target is not a mutable reference to a structured record.
    NotAReferenceToStruct,
    /// No provider is registered under the field's resolution name.
    NoProviderForName,
    /// The field is private and the target has no setter for it.
    CannotSetPrivateField,
    /// The provided value does not fit the field or its setter.
    TypeMismatch,
}

/// Injection error.
///
/// `kind` enables programmatic handling, while `message` is human-readable.
#[derive(Clone)]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    /// Type name of the object that was being injected.
    pub reference: &'static str,
    /// Resolution name or field name involved, if any.
    pub name: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind and message.
    ///
    /// If the `tracing` feature is enabled, the error is automatically logged.
    pub fn new(
        kind: ErrorKind,
        message: impl Into<String>,
        reference: &'static str,
        name: Option<String>,
    ) -> Self {
        let error = Self {
            kind,
            message: message.into(),
            reference,
            name,
        };

        #[cfg(feature = "tracing")]
        error!("{}", error);

        error
    }

    pub fn not_a_reference_to_struct(reference: &'static str) -> Self {
        Self::new(
            ErrorKind::NotAReferenceToStruct,
            format!("object of type `{}` is not a mutable reference to a struct", reference),
            reference,
            None,
        )
    }

    pub fn no_provider_for_name(name: &str, reference: &'static str) -> Self {
        Self::new(
            ErrorKind::NoProviderForName,
            format!("no provider registered for `{}` (injecting `{}`)", name, reference),
            reference,
            Some(name.to_string()),
        )
    }

    pub fn cannot_set_private_field(field: &str, reference: &'static str) -> Self {
        Self::new(
            ErrorKind::CannotSetPrivateField,
            format!("cannot set private field `{}` of `{}`", field, reference),
            reference,
            Some(field.to_string()),
        )
    }

    /// The provided value is not of the field's declared type, or was refused by its setter.
    pub fn type_mismatch(field: &str, expected: &str, reference: &'static str) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            format!(
                "value provided for field `{}` of `{}` is not a `{}`",
                field, reference, expected
            ),
            reference,
            Some(field.to_string()),
        )
    }

    pub fn is_not_a_reference_to_struct(&self) -> bool {
        self.kind == ErrorKind::NotAReferenceToStruct
    }

    pub fn is_no_provider_for_name(&self) -> bool {
        self.kind == ErrorKind::NoProviderForName
    }

    pub fn is_cannot_set_private_field(&self) -> bool {
        self.kind == ErrorKind::CannotSetPrivateField
    }

    pub fn is_type_mismatch(&self) -> bool {
        self.kind == ErrorKind::TypeMismatch
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[cfg(feature = "debug")]
        {
            write!(f, "({:?}) - {}", self.kind, self.message)
        }
        #[cfg(not(feature = "debug"))]
        {
            write!(f, "{}", self.message)
        }
    }
}

#[cfg(feature = "debug")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_reference_to_struct_error() {
        let err = Error::not_a_reference_to_struct("u32");
        assert!(err.is_not_a_reference_to_struct());
        assert!(err.message.contains("`u32`"));
        assert_eq!(err.reference, "u32");
        assert_eq!(err.name, None);
    }

    #[test]
    fn no_provider_for_name_error() {
        let err = Error::no_provider_for_name("Logger", "app::Service");
        assert!(err.is_no_provider_for_name());
        assert!(err.message.contains("Logger"));
        assert!(err.message.contains("app::Service"));
        assert_eq!(err.name.as_deref(), Some("Logger"));
    }

    #[test]
    fn cannot_set_private_field_error() {
        let err = Error::cannot_set_private_field("conn", "app::Service");
        assert!(err.is_cannot_set_private_field());
        assert!(err.message.contains("private field `conn`"));
        assert_eq!(err.name.as_deref(), Some("conn"));
    }

    #[test]
    fn type_mismatch_error() {
        let err = Error::type_mismatch("retries", "u32", "app::Service");
        assert!(err.is_type_mismatch());
        assert!(err.message.contains("retries"));
        assert!(err.message.contains("`u32`"));
    }

    #[test]
    fn predicates_are_exclusive() {
        let err = Error::no_provider_for_name("X", "T");
        assert!(!err.is_not_a_reference_to_struct());
        assert!(!err.is_cannot_set_private_field());
        assert!(!err.is_type_mismatch());
    }

    #[test]
    fn display_trait() {
        let err = Error::cannot_set_private_field("secret", "T");
        let s = format!("{}", err);
        #[cfg(feature = "debug")]
        assert!(s.contains("CannotSetPrivateField"));
        assert!(s.contains("secret"));
    }
}
