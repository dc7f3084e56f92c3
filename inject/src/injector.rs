//! The provider registry.
//!
//! An [`Injector`] maps resolution names to [`Provider`]s. Registering a name a
//! second time replaces the earlier provider. Field injection itself lives in
//! [`walker`](crate::walker).
//!
//! Registration needs `&mut self` and lookups only `&self`. The injector does no
//! locking of its own.

use std::any::Any;
use std::collections::HashMap;

use crate::injectable::name_of;
use crate::provider::{Provider, Receiver};
use crate::runtime::{MaybeSendSync, Value};

#[cfg(feature = "tracing")]
use tracing::{debug, info};

#[derive(Default)]
pub struct Injector {
    providers: HashMap<String, Provider>,
}

#[cfg(feature = "debug")]
impl std::fmt::Debug for Injector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(std::any::type_name::<Self>())
            .field("providers", &self.names())
            .finish()
    }
}

impl Injector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every registered provider.
    pub fn reset(&mut self) {
        #[cfg(feature = "tracing")]
        info!("Resetting injector, dropping {} providers", self.providers.len());

        self.providers.clear();
    }

    /// Registers `provider` under `name`, replacing any earlier registration.
    pub fn register(&mut self, name: impl Into<String>, provider: Provider) -> &mut Self {
        let name = name.into();

        #[cfg(feature = "tracing")]
        info!("Registering provider for `{}`", name);

        if self.providers.insert(name, provider).is_some() {
            #[cfg(feature = "tracing")]
            debug!("Replaced an earlier provider");
        }

        self
    }

    /// Registers a provider returning type-erased values.
    ///
    /// The closure receives the object the value is for and returns `None` to
    /// leave the field untouched.
    pub fn provide<F>(&mut self, name: impl Into<String>, provider: F) -> &mut Self
    where
        F: Fn(Receiver<'_>) -> Option<Value> + MaybeSendSync + 'static,
    {
        self.register(name, Provider::new(provider))
    }

    /// Registers a provider returning values of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use inject::{Injector, Receiver};
    ///
    /// let mut injector = Injector::new();
    /// injector.provide_with("Port", |receiver| receiver.is_detached().then_some(8080u16));
    ///
    /// assert_eq!(injector.get::<u16>("Port", Receiver::detached()), Some(8080));
    /// ```
    pub fn provide_with<T, F>(&mut self, name: impl Into<String>, provider: F) -> &mut Self
    where
        T: Any + MaybeSendSync,
        F: Fn(Receiver<'_>) -> Option<T> + MaybeSendSync + 'static,
    {
        self.register(name, Provider::with(provider))
    }

    /// Registers a provider under the name derived for fields declared as `T`.
    ///
    /// Equivalent to `provide_with(name_of::<T>(), provider)`.
    pub fn provide_typed<T, F>(&mut self, provider: F) -> &mut Self
    where
        T: Any + MaybeSendSync,
        F: Fn(Receiver<'_>) -> Option<T> + MaybeSendSync + 'static,
    {
        self.register(name_of::<T>(), Provider::with(provider))
    }

    /// Registers a provider that always yields a clone of `object`.
    pub fn provide_object<T>(&mut self, name: impl Into<String>, object: T) -> &mut Self
    where
        T: Any + Clone + MaybeSendSync,
    {
        self.register(name, Provider::value(object))
    }

    pub(crate) fn provider(&self, name: &str) -> Option<&Provider> {
        self.providers.get(name)
    }

    /// Looks up `name` and calls its provider for `receiver`.
    ///
    /// Returns `None` both when no provider is registered and when the provider
    /// has no value.
    pub fn get_object(&self, name: &str, receiver: Receiver<'_>) -> Option<Value> {
        self.provider(name)?.provide(receiver)
    }

    /// Like [`get_object`](Self::get_object), downcast to `T`.
    ///
    /// Returns `None` as well if the provided value is not a `T`.
    pub fn get<T: Any>(&self, name: &str, receiver: Receiver<'_>) -> Option<T> {
        self.get_object(name, receiver)?
            .downcast::<T>()
            .ok()
            .map(|value| *value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
