use std::{fmt, marker::PhantomData};

use crate::{BoxedTrigger, Erased, Event, Molecule, Outcome, Trigger};

/// A closure bound to one event kind.
///
/// The holder owns its closure exclusively and never replaces it. Which
/// closures a holder accepts is decided per event kind: a `Callback<Molecule, F>`
/// takes a closure with no arguments, since molecule events carry no payload.
///
/// Firing a callback goes through [`Trigger::trigger`], which calls the
/// closure exactly once on the current thread. Errors returned by the closure
/// come back to the caller untouched, and panics unwind through it.
///
/// # Example
///
/// ```rust
/// use evbind::{Callback, Molecule, Trigger};
///
/// let mut fired = 0;
/// let mut callback = Callback::new(|| fired += 1);
///
/// callback.trigger(&Molecule::new()).unwrap();
/// callback.trigger(&Molecule::new()).unwrap();
/// drop(callback);
///
/// assert_eq!(fired, 2);
/// ```
///
/// Fallible closures propagate their own error type:
///
/// ```rust
/// use evbind::{Callback, Molecule, Trigger};
///
/// let mut callback = Callback::new(|| "x".parse::<u8>());
/// assert!(callback.trigger(&Molecule::new()).is_err());
/// ```
pub struct Callback<E: Event, F> {
    closure: F,
    _kind: PhantomData<fn(&E)>,
}

impl<F, R> Callback<Molecule, F>
where
    F: FnMut() -> R,
    R: Outcome,
{
    /// Bind `closure` to molecule events.
    pub fn new(closure: F) -> Self {
        Self {
            closure,
            _kind: PhantomData,
        }
    }
}

impl<E: Event, F> Callback<E, F> {
    /// Erase the closure type so the callback can share a collection with
    /// other callbacks of the same kind.
    ///
    /// Failures are wrapped in [`Error::External`](crate::Error::External).
    ///
    /// ```rust
    /// use evbind::{BoxedTrigger, Callback, Molecule, Trigger};
    ///
    /// let mut callbacks: Vec<BoxedTrigger<Molecule>> = vec![
    ///     Callback::new(|| ()).boxed(),
    ///     Callback::new(|| "42".parse::<u32>()).boxed(),
    /// ];
    ///
    /// let event = Molecule::new();
    /// for callback in &mut callbacks {
    ///     callback.trigger(&event).unwrap();
    /// }
    /// ```
    pub fn boxed(self) -> BoxedTrigger<E>
    where
        Self: Trigger<E> + Send + 'static,
        <Self as Trigger<E>>::Error: std::error::Error + Send + Sync + 'static,
    {
        Box::new(Erased::new(self))
    }
}

impl<F, R> Trigger<Molecule> for Callback<Molecule, F>
where
    F: FnMut() -> R,
    R: Outcome,
{
    type Error = R::Error;

    fn trigger(&mut self, event: &Molecule) -> Result<(), Self::Error> {
        tracing::trace!(kind = Molecule::KIND, event_id = %event.id(), "callback triggered");
        (self.closure)().into_result()
    }
}

impl<E: Event, F: Clone> Clone for Callback<E, F> {
    fn clone(&self) -> Self {
        Self {
            closure: self.closure.clone(),
            _kind: PhantomData,
        }
    }
}

impl<E: Event, F> fmt::Debug for Callback<E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("kind", &E::KIND)
            .field("closure", &std::any::type_name::<F>())
            .finish()
    }
}
