use super::{Link, SinglyLinkedList, SinglyLinkedListNode};
use log::trace;

impl<T> SinglyLinkedList<T> {
    /// Reverses the links in place, O(n) time and O(1) space.
    pub fn reverse(&mut self) {
        if self.len <= 1 {
            return;
        }
        let mut prev: Link<T> = None;
        let mut current = self.head;
        while let Some(node) = current {
            // SAFETY: every node reachable from `head` is live and owned by `self`
            unsafe {
                current = (*node.as_ptr()).next;
                (*node.as_ptr()).next = prev;
            }
            prev = Some(node);
        }
        self.tail = self.head;
        self.head = prev;
    }

    /// Removes the 2nd, 4th, 6th, ... nodes.
    pub fn delete_even_positions(&mut self) {
        drop(self.split_even_positions());
    }

    /// Moves the nodes at even 1-indexed positions behind the ones at odd
    /// positions, keeping the relative order inside both groups.
    pub fn arrange_odd_and_even(&mut self) {
        let mut evens = self.split_even_positions();
        self.append(&mut evens);
    }

    /// Inserts `value` into a list sorted in ascending order, after any values
    /// equal to it.
    pub fn insert_sorted(&mut self, value: T)
    where
        T: Ord,
    {
        let index = self.iter().take_while(|v| **v <= value).count();
        if index == self.len {
            return self.insert_end(value);
        }
        if index == 0 {
            return self.insert_front(value);
        }
        let Some(prev) = self.node_at(index - 1) else {
            return self.insert_end(value);
        };
        let node = SinglyLinkedListNode::ptr_to_new(value);
        // SAFETY: `prev` is a live node owned by `self`, `node` is detached
        unsafe {
            (*node.as_ptr()).next = (*prev.as_ptr()).next;
            (*prev.as_ptr()).next = Some(node);
        }
        self.len += 1;
    }

    /// Exchanges the first and the last node.
    pub fn swap_head_and_tail(&mut self) {
        if self.len <= 1 {
            return;
        }
        trace!("swap_head_and_tail: length {}", self.len);
        let Some(first) = self.pop_node() else {
            return;
        };
        // with two nodes the remaining one is both head and tail here
        if let Some(last) = self.pop_tail_node() {
            self.push_front_node(last);
        }
        self.push_node(first);
    }

    /// Rotates left by `k` positions, `k` taken modulo the length.
    pub fn left_rotate(&mut self, k: usize) {
        if self.len == 0 {
            return;
        }
        let k = k % self.len;
        trace!("left_rotate: by {k} of {}", self.len);
        for _ in 0..k {
            if let Some(node) = self.pop_node() {
                self.push_node(node);
            }
        }
    }

    /// Relocates every node holding `value` to the end of the list.
    ///
    /// Both the moved nodes and the remaining ones keep their relative order.
    pub fn move_to_back(&mut self, value: &T)
    where
        T: PartialEq,
    {
        if self.len <= 1 {
            return;
        }
        let mut rest = self.take_all();
        let mut moved = Self::new();
        while let Some(node) = rest.pop_node() {
            // SAFETY: `node` is detached and live
            if unsafe { &(*node.as_ptr()).value } == value {
                moved.push_node(node);
            } else {
                self.push_node(node);
            }
        }
        self.append(&mut moved);
    }

    /// Keeps the nodes at odd 1-indexed positions and returns the others,
    /// in order, as a new list.
    fn split_even_positions(&mut self) -> Self {
        let mut rest = self.take_all();
        let mut evens = Self::new();
        let mut odd = true;
        while let Some(node) = rest.pop_node() {
            if odd {
                self.push_node(node);
            } else {
                evens.push_node(node);
            }
            odd = !odd;
        }
        evens
    }
}
