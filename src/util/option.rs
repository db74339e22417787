use std::hint;

pub(crate) trait OptionExtension<T> {
    /// Unwraps an [`Option`] that the surrounding invariants guarantee to be [`Some`].
    ///
    /// Debug builds check the claim with [`unreachable!`], release builds trust it through
    /// [`unreachable_unchecked`](hint::unreachable_unchecked).
    ///
    /// # Safety
    /// The caller must guarantee that the value is [`Some`]. Calling this on [`None`] in a release
    /// build is undefined behavior.
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    #[track_caller]
    unsafe fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!("chunk table invariant violated"),
            // SAFETY: The caller guarantees that the value is Some.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
