use super::{SinglyLinkedList, SinglyLinkedListNode};

impl<T> SinglyLinkedList<T> {
    /// Keeps only the first occurrence of every value. O(n²) comparisons.
    pub fn remove_duplicates(&mut self)
    where
        T: PartialEq,
    {
        let mut rest = self.take_all();
        while let Some(node) = rest.pop_node() {
            // SAFETY: `node` is detached and live
            let seen = self.iter().any(|v| unsafe { *v == (*node.as_ptr()).value });
            if seen {
                // SAFETY: `node` is detached
                drop(unsafe { SinglyLinkedListNode::into_value(node) });
            } else {
                self.push_node(node);
            }
        }
    }

    /// Collapses every run of equal neighbours to its first node in a single
    /// pass. On a sorted list this leaves each value exactly once.
    ///
    /// The chain is rebuilt from the surviving nodes; the rest are released.
    pub fn remove_duplicates_from_sorted(&mut self)
    where
        T: PartialEq,
    {
        let mut rest = self.take_all();
        while let Some(node) = rest.pop_node() {
            // SAFETY: `node` is detached and live
            if self.back() == Some(unsafe { &(*node.as_ptr()).value }) {
                // SAFETY: `node` is detached
                drop(unsafe { SinglyLinkedListNode::into_value(node) });
            } else {
                self.push_node(node);
            }
        }
    }
}
