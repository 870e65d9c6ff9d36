use super::{SinglyLinkedList, SinglyLinkedListNode};
use crate::error::ListError;
use log::{debug, warn};

impl<T> SinglyLinkedList<T> {
    /// Removes the head, a no-op on an empty list.
    pub fn delete_first(&mut self) -> Option<T> {
        let node = self.pop_node();
        if node.is_none() {
            debug!("delete_first: list is empty");
        }
        // SAFETY: the node was just unlinked
        node.map(|node| unsafe { SinglyLinkedListNode::into_value(node) })
    }

    /// Removes the last element. O(n).
    pub fn delete_tail(&mut self) -> Option<T> {
        let node = self.pop_tail_node();
        if node.is_none() {
            debug!("delete_tail: list is empty");
        }
        // SAFETY: the node was just unlinked
        node.map(|node| unsafe { SinglyLinkedListNode::into_value(node) })
    }

    /// Removes the first node holding `value`.
    pub fn delete_node_with_key(&mut self, value: &T) -> Result<T, ListError>
    where
        T: PartialEq,
    {
        let Some(index) = self.iter().position(|v| v == value) else {
            debug!("delete_node_with_key: value not found in {} nodes", self.len);
            return Err(ListError::NotFound);
        };
        self.remove_at(index).ok_or(ListError::NotFound)
    }

    /// Removes the `nth` node, counting from 1.
    pub fn delete_nth_node(&mut self, nth: usize) -> Result<T, ListError> {
        let out_of_range = ListError::OutOfRange {
            position: nth,
            len: self.len,
        };
        if nth == 0 || nth > self.len {
            warn!("delete_nth_node: {out_of_range}");
            return Err(out_of_range);
        }
        self.remove_at(nth - 1).ok_or(out_of_range)
    }

    /// Removes the last node holding `value`.
    pub fn remove_last_occurrence(&mut self, value: &T) -> Result<T, ListError>
    where
        T: PartialEq,
    {
        let last = self
            .iter()
            .enumerate()
            .filter_map(|(i, v)| (v == value).then_some(i))
            .last();
        match last {
            Some(index) => self.delete_nth_node(index + 1),
            None => {
                debug!("remove_last_occurrence: value not found in {} nodes", self.len);
                Err(ListError::NotFound)
            }
        }
    }

    /// Unlinks and releases the node at 0-indexed `index`.
    pub(super) fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let node = match index {
            0 => self.pop_node()?,
            i if i == self.len - 1 => self.pop_tail_node()?,
            // interior node, the tail stays where it is
            _ => {
                let prev = self.node_at(index - 1)?;
                // SAFETY: `prev` and its successor are live nodes owned by `self`
                unsafe {
                    let node = (*prev.as_ptr()).next?;
                    (*prev.as_ptr()).next = (*node.as_ptr()).next.take();
                    self.len -= 1;
                    node
                }
            }
        };
        // SAFETY: `node` is no longer reachable from the list
        Some(unsafe { SinglyLinkedListNode::into_value(node) })
    }
}
