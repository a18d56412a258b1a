use crate::Event;

/// Entry point used by dispatchers to fire a callback for an event kind.
///
/// A dispatcher that only knows the event kind can hold callbacks as
/// `dyn Trigger<E, Error = ...>` and call [`trigger`](Self::trigger) without
/// knowing the concrete closure type. Taking `&mut self` means at most one
/// trigger per instance is in flight at a time.
///
/// Implementations run synchronously on the calling thread and must not
/// swallow failures from the code they invoke.
pub trait Trigger<E: Event> {
    type Error;

    /// Fire the callback for one occurrence of `E`.
    fn trigger(&mut self, event: &E) -> Result<(), Self::Error>;
}

impl<E: Event, T: Trigger<E> + ?Sized> Trigger<E> for Box<T> {
    type Error = T::Error;

    #[inline]
    fn trigger(&mut self, event: &E) -> Result<(), Self::Error> {
        (**self).trigger(event)
    }
}
