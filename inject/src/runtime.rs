//! Runtime type definitions that switch on the `thread-safe` feature flag.
//!
//! - When `thread-safe` is enabled: [`Shared`] is `Arc`, and injected values and
//!   provider closures must be `Send + Sync`.
//! - When `thread-safe` is disabled: [`Shared`] is `Rc` and no extra bounds apply.
//!
//! The injector itself never locks. With `thread-safe` enabled it can be moved
//! behind a `Mutex` by the caller.
//!
//! # Examples
//!
//! ```
//! use inject::runtime::{Shared, Value};
//!
//! let shared = Shared::new(String::from("dsn"));
//! let value: Value = Box::new(shared.clone());
//! assert!(value.downcast_ref::<Shared<String>>().is_some());
//! ```

use std::any::Any;

use crate::provider::Receiver;

#[cfg(feature = "thread-safe")]
use std::sync::Arc;

#[cfg(not(feature = "thread-safe"))]
use std::rc::Rc;

/// Smart pointer for objects handed out by providers.
///
/// [`Arc<T>`] with the `thread-safe` feature, [`Rc<T>`] otherwise.
#[cfg(feature = "thread-safe")]
pub type Shared<T> = Arc<T>;
#[cfg(not(feature = "thread-safe"))]
pub type Shared<T> = Rc<T>;

/// A type-erased value produced by a provider.
#[cfg(feature = "thread-safe")]
pub type Value = Box<dyn Any + Send + Sync>;
#[cfg(not(feature = "thread-safe"))]
pub type Value = Box<dyn Any>;

/// Boxed provider closure stored by the injector.
#[cfg(feature = "thread-safe")]
pub type ProviderFn = Box<dyn Fn(Receiver<'_>) -> Option<Value> + Send + Sync + 'static>;
#[cfg(not(feature = "thread-safe"))]
pub type ProviderFn = Box<dyn Fn(Receiver<'_>) -> Option<Value> + 'static>;

/// Bound carried by provider closures and provided values.
///
/// Resolves to `Send + Sync` with the `thread-safe` feature and to nothing otherwise,
/// so registration methods only need to be written once.
#[cfg(feature = "thread-safe")]
pub trait MaybeSendSync: Send + Sync {}
#[cfg(feature = "thread-safe")]
impl<T: ?Sized + Send + Sync> MaybeSendSync for T {}

#[cfg(not(feature = "thread-safe"))]
pub trait MaybeSendSync {}
#[cfg(not(feature = "thread-safe"))]
impl<T: ?Sized> MaybeSendSync for T {}
