use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps the [`Result`], panicking with the message of the error itself. This is how the
    /// panicking forms of fallible methods (like indexing) are built on top of their `try_`
    /// counterparts. The panic is reported at the caller's location.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        self.unwrap_or_else(|error| panic!("{}", error))
    }
}
