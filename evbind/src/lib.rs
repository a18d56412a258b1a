#![cfg_attr(docsrs, feature(doc_cfg))]
//! # evbind
//!
//! Typed callback holders bound to event kinds.
//!
//! A [`Callback`] owns one closure and is tied, at the type level, to one
//! event kind. A dispatcher fires it through the [`Trigger`] trait, passing a
//! reference to the event that occurred. The callback runs the closure once,
//! synchronously, and hands any failure straight back to the caller.
//!
//! Registration, routing tables and listener lifetimes are left to the
//! dispatcher that owns the callbacks.
//!
//! ## Quick Start
//!
//! ```rust
//! use evbind::{Callback, Molecule, Trigger};
//!
//! let mut reactions = 0;
//! let mut on_molecule = Callback::new(|| reactions += 1);
//!
//! for _ in 0..3 {
//!     on_molecule.trigger(&Molecule::new()).unwrap();
//! }
//! drop(on_molecule);
//!
//! assert_eq!(reactions, 3);
//! ```
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Event`] | Marker trait for event kinds |
//! | [`Molecule`] | Payload-free event kind; its callbacks take no arguments |
//! | [`Callback`] | A closure bound to one event kind |
//! | [`Trigger`] | Fires a callback for an event, without knowing the closure type |
//! | [`Outcome`] | Turns a closure's return value into the trigger result |
//! | [`BoxedTrigger`] | Type-erased callback for heterogeneous collections |
//! | [`Error`] | Error of type-erased callbacks |
//!
//! ## Failures
//!
//! A closure may return `()` or any `Result`. A plain [`Callback`] returns
//! the closure's error unchanged and lets panics unwind. Once erased with
//! [`Callback::boxed`], errors are wrapped in [`Error`] and stay reachable
//! through [`Error::downcast_ref`].
//!
//! ## Features
//!
//! - **`serde`** - `Serialize`/`Deserialize` for [`Molecule`] and [`EventId`]

mod callback;
mod erased;
mod error;
mod event;
mod event_id;
mod molecule;
mod outcome;
mod trigger;

pub use callback::Callback;
pub use erased::{BoxedTrigger, Erased};
pub use error::Error;
pub use event::Event;
pub use event_id::EventId;
pub use molecule::Molecule;
pub use outcome::Outcome;
pub use trigger::Trigger;

/// Convenience alias for `Result<T, evbind::Error>`.
pub type Result<T = ()> = std::result::Result<T, Error>;
