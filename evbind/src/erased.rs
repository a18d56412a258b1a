use std::fmt;

use crate::{Error, Event, Trigger};

/// A callback for kind `E` with its closure and error types erased.
pub type BoxedTrigger<E> = Box<dyn Trigger<E, Error = Error> + Send>;

/// Adapter that maps any trigger's error into [`Error`].
///
/// Use this to store triggers with different error types side by side.
/// The original error stays reachable through [`Error::downcast_ref`].
/// For [`Callback`](crate::Callback), [`boxed`](crate::Callback::boxed) is
/// the shorter way to get here.
pub struct Erased<T>(T);

impl<T> Erased<T> {
    /// Wrap `inner`, mapping its errors into [`Error::External`].
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Unwrap the adapted trigger.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<E, T> Trigger<E> for Erased<T>
where
    E: Event,
    T: Trigger<E>,
    T::Error: std::error::Error + Send + Sync + 'static,
{
    type Error = Error;

    fn trigger(&mut self, event: &E) -> Result<(), Error> {
        self.0.trigger(event).map_err(|e| {
            tracing::debug!(kind = E::KIND, error = %e, "callback failed");
            Error::external(e)
        })
    }
}

impl<T: fmt::Debug> fmt::Debug for Erased<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Erased").field(&self.0).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Callback, Molecule};

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("pressure at {0} bar")]
    struct Overpressure(u16);

    /// Hand-written trigger standing in for a callback of another library.
    struct Countdown(u16);

    impl Trigger<Molecule> for Countdown {
        type Error = Overpressure;

        fn trigger(&mut self, _event: &Molecule) -> Result<(), Overpressure> {
            match self.0.checked_sub(1) {
                Some(left) => {
                    self.0 = left;
                    Ok(())
                }
                None => Err(Overpressure(250)),
            }
        }
    }

    #[test]
    fn erased_wraps_inner_error() {
        let mut erased = Erased::new(Countdown(1));
        let event = Molecule::new();

        assert_eq!(erased.trigger(&event), Ok(()));
        let err = erased.trigger(&event).unwrap_err();
        assert_eq!(err.downcast_ref::<Overpressure>(), Some(&Overpressure(250)));
        assert_eq!(erased.into_inner().0, 0);
    }

    #[test]
    fn mixed_triggers_share_a_collection() {
        let mut triggers: Vec<BoxedTrigger<Molecule>> = vec![
            Callback::new(|| Ok::<_, Overpressure>(1)).boxed(),
            Callback::new(|| ()).boxed(),
            Box::new(Erased::new(Countdown(0))),
        ];

        let event = Molecule::new();
        let failures = triggers
            .iter_mut()
            .filter_map(|t| t.trigger(&event).err())
            .collect::<Vec<_>>();

        assert_eq!(failures.len(), 1);
        assert!(failures[0].downcast_ref::<Overpressure>().is_some());
    }
}
