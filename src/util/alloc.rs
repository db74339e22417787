use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ZeroSizedType;

/// Shared count of how many [`Counted`] values handed out by this counter have been dropped.
#[derive(Debug, Default, Clone)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    pub fn track(&self, value: i32) -> Counted {
        Counted {
            value,
            counter: Rc::clone(&self.0),
        }
    }

    pub fn dropped(&self) -> usize {
        self.0.get()
    }
}

/// A value that bumps its [`DropCounter`] when dropped. Compares by value only.
#[derive(Debug, Clone)]
pub struct Counted {
    pub value: i32,
    counter: Rc<Cell<usize>>,
}

impl PartialEq for Counted {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Drop for Counted {
    fn drop(&mut self) {
        self.counter.set(self.counter.get() + 1);
    }
}
