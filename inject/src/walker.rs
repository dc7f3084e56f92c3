//! Field injection.
//!
//! [`Injector::inject`] walks each target's fields in declaration order. For every
//! field carrying an injection marker it resolves a name, calls the provider with
//! the target as receiver and applies the result, through the target's
//! [`Settable`](crate::Settable) hook when it has one for the field and by direct
//! assignment otherwise.
//!
//! The first failure aborts the whole call. Fields and targets handled before the
//! failure keep their new values.

use crate::error::Error;
use crate::injectable::{Field, Injectable, Shape};
use crate::injector::Injector;
use crate::provider::Receiver;
use crate::runtime::Value;

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

impl Injector {
    /// Injects all marked fields of every object, in argument order.
    ///
    /// Use the [`inject!`](crate::inject) macro to pass targets of different types
    /// without spelling out the trait object coercion.
    ///
    /// # Errors
    ///
    /// - [`NotAReferenceToStruct`](crate::ErrorKind::NotAReferenceToStruct) if an object
    ///   has no fields to inject into.
    /// - [`NoProviderForName`](crate::ErrorKind::NoProviderForName) if a marked field's
    ///   name has no provider.
    /// - [`CannotSetPrivateField`](crate::ErrorKind::CannotSetPrivateField) if a private
    ///   field has no setter.
    /// - [`TypeMismatch`](crate::ErrorKind::TypeMismatch) if the provided value does not
    ///   fit the field or its setter.
    ///
    /// # Examples
    ///
    /// ```
    /// use inject::{injectable, Injector};
    ///
    /// injectable! {
    ///     struct Server {
    ///         #[inject("Port")]
    ///         pub port: u16,
    ///     }
    /// }
    ///
    /// let mut injector = Injector::new();
    /// injector.provide_object("Port", 8080u16);
    ///
    /// let mut server = Server { port: 0 };
    /// injector.inject(&mut [&mut server]).unwrap();
    /// assert_eq!(server.port, 8080);
    /// ```
    pub fn inject(&self, objects: &mut [&mut dyn Injectable]) -> Result<(), Error> {
        for object in objects.iter_mut() {
            self.inject_into(&mut **object)?;
        }

        Ok(())
    }

    fn inject_into(&self, object: &mut dyn Injectable) -> Result<(), Error> {
        let reference = object.type_name();

        let fields = match object.shape() {
            Shape::Record(fields) => fields,
            Shape::Value => return Err(Error::not_a_reference_to_struct(reference)),
        };

        #[cfg(feature = "tracing")]
        debug!("Injecting into `{}` ({} fields)", reference, fields.len());

        for field in &fields {
            let Some(name) = field.resolution_name() else {
                continue;
            };

            let provider = self
                .provider(name)
                .ok_or_else(|| Error::no_provider_for_name(name, reference))?;

            let Some(value) = provider.provide(Receiver::target(&*object)) else {
                #[cfg(feature = "tracing")]
                trace!("Provider `{}` had no value for `{}`, skipping", name, field.name);
                continue;
            };

            apply(object, field, value, reference)?;
        }

        Ok(())
    }
}

fn apply(
    object: &mut dyn Injectable,
    field: &Field,
    value: Value,
    reference: &'static str,
) -> Result<(), Error> {
    if let Some(settable) = object.settable() {
        if settable.has_setter(field.name) {
            #[cfg(feature = "tracing")]
            trace!("Setting `{}` of `{}` through its setter", field.name, reference);

            return settable
                .set(field.name, value)
                .map_err(|_| Error::type_mismatch(field.name, field.type_name, reference));
        }
    }

    if !field.visibility.is_public() {
        return Err(Error::cannot_set_private_field(field.name, reference));
    }

    #[cfg(feature = "tracing")]
    trace!("Assigning `{}` of `{}` directly", field.name, reference);

    object
        .assign(field.name, value)
        .map_err(|_| Error::type_mismatch(field.name, field.type_name, reference))
}
