/// Marker trait for event kinds.
///
/// Each implementing type is one kind of event; a value of that type is one
/// occurrence of it. A [`Callback`](crate::Callback) is bound to a kind at the
/// type level, and a kind decides which closure signature its callbacks accept
/// by providing the matching [`Trigger`](crate::Trigger) implementation.
///
/// # Example
///
/// ```rust
/// use evbind::Event;
///
/// struct Shutdown;
///
/// impl Event for Shutdown {
///     const KIND: &'static str = "shutdown";
/// }
///
/// assert_eq!(Shutdown::KIND, "shutdown");
/// ```
pub trait Event: 'static {
    /// Human-readable name of the kind, used in diagnostics.
    const KIND: &'static str;
}
