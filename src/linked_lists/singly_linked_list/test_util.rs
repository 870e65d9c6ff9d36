use super::SinglyLinkedList;
use std::{cell::Cell, cmp::Ordering, fmt::Debug, rc::Rc};

pub(super) fn list_of<T: Clone>(values: &[T]) -> SinglyLinkedList<T> {
    values.iter().cloned().collect()
}

/// Validates the structure first, then the contents.
#[track_caller]
pub(super) fn assert_list<T: Clone + Debug + PartialEq>(lst: &SinglyLinkedList<T>, expected: &[T]) {
    if let Err(e) = lst.check_integrity() {
        panic!("integrity check failed: {e}");
    }
    assert_eq!(lst.to_vec(), expected);
}

/// Hands out [`Tracked`] values that report back when they are dropped.
#[derive(Default)]
pub(super) struct DropCounter {
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    pub(super) fn track(&self, value: i32) -> Tracked {
        Tracked {
            value,
            drops: Rc::clone(&self.drops),
        }
    }

    pub(super) fn dropped(&self) -> usize {
        self.drops.get()
    }
}

#[derive(Debug)]
pub(super) struct Tracked {
    pub(super) value: i32,
    drops: Rc<Cell<usize>>,
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl PartialOrd for Tracked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tracked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
