use std::fmt::{self, Debug, Formatter};

/// Formats the items of a cloneable iterator as a list, so a collection can show its contents as
/// one field of a [`debug_struct`](Formatter::debug_struct).
pub struct DebugEntries<I>(pub I);

impl<I> Debug for DebugEntries<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}
