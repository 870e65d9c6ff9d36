use super::{Link, SinglyLinkedList, SinglyLinkedListNode};
use core::{iter::FusedIterator, marker::PhantomData};

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// Owning iterator, yields values head first.
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: the node was just unlinked from the list
        self.list
            .pop_node()
            .map(|node| unsafe { SinglyLinkedListNode::into_value(node) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

pub(crate) struct Iter<'a, T> {
    pub(super) node: Link<T>,
    pub(super) remaining: usize,
    pub(super) marker: PhantomData<&'a SinglyLinkedList<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        // SAFETY: the borrowed list keeps every node alive for 'a and nothing
        // can relink them while it is borrowed
        let node = unsafe { &*node.as_ptr() };
        self.node = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for Iter<'a, T> {}
