use std::sync::Arc;

/// The error type for type-erased callbacks.
///
/// A plain [`Callback`](crate::Callback) never produces this type: its
/// [`trigger`](crate::Trigger::trigger) returns the closure's own error
/// unchanged. `Error` only appears once a callback is erased with
/// [`Callback::boxed`](crate::Callback::boxed) or [`Erased`](crate::Erased),
/// so that callbacks with different error types can live in one collection.
///
/// The closure's error is kept as the [`source`](std::error::Error::source)
/// and can be recovered with [`downcast_ref`](Self::downcast_ref).
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("Callback failed: {0}")]
    External(#[source] Arc<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap a closure's error, keeping it as the source.
    pub fn external(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        Error::External(Arc::new(e))
    }

    /// Returns the closure's error if it is of type `T`.
    pub fn downcast_ref<T: std::error::Error + 'static>(&self) -> Option<&T> {
        match self {
            Error::External(e) => e.downcast_ref::<T>(),
        }
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::External(a), Self::External(b)) => Arc::ptr_eq(a, b),
        }
    }
}

impl Eq for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("reactor offline: {0}")]
    struct ReactorOffline(u8);

    #[test]
    fn downcast_recovers_original() {
        let err = Error::external(ReactorOffline(4));
        assert_eq!(err.downcast_ref::<ReactorOffline>(), Some(&ReactorOffline(4)));
        assert!(err.downcast_ref::<std::io::Error>().is_none());
    }

    #[test]
    fn display_and_source() {
        use std::error::Error as _;

        let err = Error::external(ReactorOffline(2));
        assert_eq!(err.to_string(), "Callback failed: reactor offline: 2");
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("reactor offline: 2"));
    }

    #[test]
    fn equality_is_identity() {
        let a = Error::external(ReactorOffline(1));
        let b = Error::external(ReactorOffline(1));
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
