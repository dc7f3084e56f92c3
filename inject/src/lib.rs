//! Named-provider dependency injection into struct fields.
//!
//! Providers are registered on an [`Injector`] under a name. Structs declared with
//! [`injectable!`] mark the fields they want filled, and [`Injector::inject`] fills
//! them, resolving each field either by the name on its marker or by its declared
//! type.
//!
//! ```
//! use inject::{inject, injectable, Injector, Receiver, Shared};
//!
//! pub trait Clock: Send + Sync {
//!     fn now(&self) -> u64;
//! }
//!
//! struct Fixed(u64);
//!
//! impl Clock for Fixed {
//!     fn now(&self) -> u64 {
//!         self.0
//!     }
//! }
//!
//! injectable! {
//!     pub struct Scheduler {
//!         #[inject]
//!         pub clock: Option<Shared<dyn Clock>>,
//!         #[inject("Tick")]
//!         pub tick: u64,
//!     }
//! }
//!
//! let mut injector = Injector::new();
//! injector.provide_typed(|_| Some(Some(Shared::new(Fixed(42)) as Shared<dyn Clock>)));
//! injector.provide_with("Tick", |receiver| receiver.is::<Scheduler>().then_some(250u64));
//!
//! let mut scheduler = Scheduler { clock: None, tick: 0 };
//! inject!(injector; &mut scheduler).unwrap();
//!
//! assert_eq!(scheduler.clock.unwrap().now(), 42);
//! assert_eq!(scheduler.tick, 250);
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod injectable;
pub mod injector;
pub mod provider;
pub mod runtime;
pub mod walker;

pub use error::*;
pub use injectable::*;
pub use injector::*;
pub use provider::*;
pub use runtime::*;
