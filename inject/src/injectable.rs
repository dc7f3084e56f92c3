//! Structural metadata for injection targets.
//!
//! Rust has no runtime reflection, so every target type describes itself through
//! [`Injectable`]: an ordered list of [`Field`]s plus a way to write a type-erased
//! [`Value`] into one of them. The [`injectable!`](crate::injectable) macro generates
//! this for plain structs.

use std::any::Any;

use crate::runtime::Value;

/// Resolution name derived for a field declared as `T`.
///
/// This is what an `#[inject]` field without an explicit name is looked up by.
/// Built-in types yield generic names such as `"u32"` or
/// `"alloc::string::String"`, which several unrelated fields may share.
///
/// # Examples
///
/// ```
/// assert_eq!(inject::name_of::<u32>(), "u32");
/// ```
pub fn name_of<T: ?Sized>() -> &'static str {
    std::any::type_name::<T>()
}

#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "debug", derive(Debug))]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    /// Maps a visibility qualifier as written in source to a [`Visibility`].
    ///
    /// Only a bare `pub` is public. Restricted forms like `pub(crate)` count as private.
    pub fn from_keyword(keyword: &str) -> Self {
        if keyword.trim() == "pub" {
            Visibility::Public
        } else {
            Visibility::Private
        }
    }

    pub fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// Metadata for one declared field of a record.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct Field {
    pub name: &'static str,
    /// Statically declared type of the field.
    pub type_name: &'static str,
    pub visibility: Visibility,
    /// Injection marker payload. `None` if the field is not injectable,
    /// `Some("")` if the name is derived from `type_name`.
    pub marker: Option<&'static str>,
}

impl Field {
    pub fn is_injectable(&self) -> bool {
        self.marker.is_some()
    }

    /// Name the field's provider is looked up by.
    ///
    /// Returns the explicit marker name when there is one, the declared type name
    /// when the marker is empty, and `None` for fields without a marker.
    pub fn resolution_name(&self) -> Option<&'static str> {
        self.marker.map(|marker| {
            if marker.is_empty() {
                self.type_name
            } else {
                marker
            }
        })
    }
}

/// What kind of value an [`Injectable`] is.
#[cfg_attr(feature = "debug", derive(Debug))]
pub enum Shape {
    /// A structured record and its fields in declaration order.
    Record(Vec<Field>),
    /// Anything that has no fields to inject into.
    Value,
}

/// Custom assignment hook, consulted before any direct field write.
///
/// A type implements this when it wants a setter to run instead of a plain
/// assignment. Setters also work for private fields.
///
/// # Examples
///
/// ```
/// use inject::{Settable, Value};
///
/// struct Service {
///     retries: u32,
/// }
///
/// impl Settable for Service {
///     fn has_setter(&self, field: &str) -> bool {
///         field == "retries"
///     }
///
///     fn set(&mut self, _field: &str, value: Value) -> Result<(), Value> {
///         let retries = value.downcast::<u32>()?;
///         self.retries = (*retries).min(5);
///         Ok(())
///     }
/// }
/// ```
pub trait Settable {
    fn has_setter(&self, field: &str) -> bool;

    /// Applies `value` to `field`, handing it back if its type is not accepted.
    fn set(&mut self, field: &str, value: Value) -> Result<(), Value>;
}

/// A value that can be the target of [`Injector::inject`](crate::Injector::inject).
pub trait Injectable: Any {
    fn shape(&self) -> Shape;

    /// Writes `value` straight into `field`, handing it back if the type does not match.
    fn assign(&mut self, field: &str, value: Value) -> Result<(), Value>;

    fn as_any(&self) -> &dyn Any;

    fn settable(&mut self) -> Option<&mut dyn Settable> {
        None
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

macro_rules! value_shape {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Injectable for $ty {
                fn shape(&self) -> Shape {
                    Shape::Value
                }

                fn assign(&mut self, _field: &str, value: Value) -> Result<(), Value> {
                    Err(value)
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }
            }
        )*
    };
}

value_shape!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    String,
    &'static str,
);

impl<T: Any> Injectable for Vec<T> {
    fn shape(&self) -> Shape {
        Shape::Value
    }

    fn assign(&mut self, _field: &str, value: Value) -> Result<(), Value> {
        Err(value)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: Any> Injectable for Option<T> {
    fn shape(&self) -> Shape {
        Shape::Value
    }

    fn assign(&mut self, _field: &str, value: Value) -> Result<(), Value> {
        Err(value)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
