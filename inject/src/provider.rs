//! Provider definitions for named injection.
//!
//! A [`Provider`] wraps a closure that produces a [`Value`] for the object that
//! is about to receive it. The receiving object is passed in as a [`Receiver`],
//! so a provider can hand out different values depending on who asks.
//!
//! Returning `None` from a provider means "no value": the field is left as it
//! is and injection carries on.
//!
//! # Examples
//!
//! ```
//! use inject::provider::{Provider, Receiver};
//!
//! struct Cache;
//!
//! let provider = Provider::with(|receiver| {
//!     if receiver.is::<Cache>() {
//!         Some("cache.db")
//!     } else {
//!         Some("main.db")
//!     }
//! });
//!
//! let value = provider.provide(Receiver::new(&Cache)).unwrap();
//! assert_eq!(*value.downcast_ref::<&str>().unwrap(), "cache.db");
//! ```

use std::any::Any;

use crate::injectable::Injectable;
use crate::runtime::{MaybeSendSync, ProviderFn, Value};

#[cfg(feature = "tracing")]
use tracing::trace;

/// The object a value is being produced for.
///
/// A receiver is either attached to a concrete object or detached, which is what
/// direct lookups through [`Injector::get_object`](crate::Injector::get_object)
/// use when no target exists.
#[derive(Clone, Copy)]
pub struct Receiver<'a> {
    object: Option<&'a dyn Any>,
    type_name: Option<&'static str>,
}

impl<'a> Receiver<'a> {
    /// Receiver standing for `object`.
    pub fn new<T: Any>(object: &'a T) -> Self {
        Self {
            object: Some(object as &dyn Any),
            type_name: Some(std::any::type_name::<T>()),
        }
    }

    /// Receiver with no object behind it.
    pub fn detached() -> Self {
        Self {
            object: None,
            type_name: None,
        }
    }

    pub(crate) fn target(object: &'a dyn Injectable) -> Self {
        Self {
            object: Some(object.as_any()),
            type_name: Some(object.type_name()),
        }
    }

    /// Returns `true` if no object is behind the receiver.
    pub fn is_detached(&self) -> bool {
        self.object.is_none()
    }

    /// Returns `true` if the receiver is an object of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.object.is_some_and(|object| object.is::<T>())
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&'a T> {
        self.object.and_then(|object| object.downcast_ref::<T>())
    }

    /// Fully qualified type name of the receiving object, if any.
    pub fn type_name(&self) -> Option<&'static str> {
        self.type_name
    }
}

#[cfg(feature = "debug")]
impl std::fmt::Debug for Receiver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Receiver")
            .field("type_name", &self.type_name)
            .finish()
    }
}

/// A named value factory.
///
/// Providers are stored by the [`Injector`](crate::Injector) under a resolution name
/// and called once per injected field.
pub struct Provider {
    factory: ProviderFn,
}

impl Provider {
    /// Creates a provider from a closure returning type-erased values.
    ///
    /// Use this when the same name can yield values of different types.
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn(Receiver<'_>) -> Option<Value> + MaybeSendSync + 'static,
    {
        Self {
            factory: Box::new(factory),
        }
    }

    /// Creates a provider from a closure returning values of a single type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use inject::provider::{Provider, Receiver};
    ///
    /// let provider = Provider::with(|_| None::<u32>);
    /// assert!(provider.provide(Receiver::detached()).is_none());
    /// ```
    pub fn with<T, F>(factory: F) -> Self
    where
        T: Any + MaybeSendSync,
        F: Fn(Receiver<'_>) -> Option<T> + MaybeSendSync + 'static,
    {
        Self {
            factory: Box::new(move |receiver: Receiver<'_>| {
                factory(receiver).map(|value| Box::new(value) as Value)
            }),
        }
    }

    /// Creates a provider that ignores its receiver and always yields a clone of `value`.
    pub fn value<T>(value: T) -> Self
    where
        T: Any + Clone + MaybeSendSync,
    {
        Self {
            factory: Box::new(move |_: Receiver<'_>| Some(Box::new(value.clone()) as Value)),
        }
    }

    /// Calls the provider for `receiver`.
    pub fn provide(&self, receiver: Receiver<'_>) -> Option<Value> {
        #[cfg(feature = "tracing")]
        trace!("Calling provider for receiver {:?}", receiver.type_name());

        (self.factory)(receiver)
    }
}
