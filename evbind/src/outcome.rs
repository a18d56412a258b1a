use std::convert::Infallible;

/// Converts a closure's return value into the result of a trigger.
///
/// Closures returning `()` cannot fail. Closures returning `Result` have
/// their success value discarded and their error passed through as-is.
pub trait Outcome {
    type Error;

    fn into_result(self) -> Result<(), Self::Error>;
}

impl Outcome for () {
    type Error = Infallible;

    #[inline]
    fn into_result(self) -> Result<(), Infallible> {
        Ok(())
    }
}

impl<T, E> Outcome for Result<T, E> {
    type Error = E;

    #[inline]
    fn into_result(self) -> Result<(), E> {
        self.map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_is_ok() {
        assert_eq!(().into_result(), Ok::<(), Infallible>(()));
    }

    #[test]
    fn result_value_is_discarded() {
        let ok: Result<u32, &str> = Ok(7);
        assert_eq!(ok.into_result(), Ok(()));
    }

    #[test]
    fn result_error_passes_through() {
        let err: Result<u32, &str> = Err("meltdown");
        assert_eq!(err.into_result(), Err("meltdown"));
    }
}
