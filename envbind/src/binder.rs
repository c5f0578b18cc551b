/// Receives every key derived by [`bind`](crate::bind).
///
/// This is the seam to the configuration store: a viper-style binder would
/// register `key` so that a later lookup also consults the matching
/// environment variable. Returning an error stops the walk and the error is
/// handed back to the caller of `bind` unchanged.
pub trait Binder {
    type Error;

    fn bind_env(&mut self, key: &str) -> Result<(), Self::Error>;
}

impl<F, E> Binder for F
where
    F: for<'a> FnMut(&'a str) -> Result<(), E>,
{
    type Error = E;

    fn bind_env(&mut self, key: &str) -> Result<(), E> {
        (self)(key)
    }
}
