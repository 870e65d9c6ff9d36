use alloc::{boxed::Box, vec::Vec};

use core::{
    fmt::{self, Debug, Display, Formatter},
    iter::{Extend, FromIterator},
    marker::PhantomData,
    ptr::NonNull,
};

use crate::traits::num::Integer;

mod combine;
mod dedup;
mod delete;
#[cfg(any(test, feature = "integrity-checks"))]
mod integrity;
mod iters;
mod reorder;

#[cfg(test)]
mod test_util;

pub use iters::IntoIter;
use iters::Iter;

pub(crate) type ElementPtr<T> = NonNull<SinglyLinkedListNode<T>>;
type Link<T> = Option<ElementPtr<T>>;

/// A singly linked list that keeps a pointer to its last node.
///
/// Nodes are separate heap allocations linked by raw pointers. The list owns
/// all of them: every node is reachable from `head`, `tail` is the last one,
/// and both are `None` exactly when the list is empty.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    marker: PhantomData<Box<SinglyLinkedListNode<T>>>,
}

// SAFETY: the nodes are owned by the list alone and never shared with another
// list, so moving or sharing the list moves or shares its `T`s and nothing else.
unsafe impl<T: Send> Send for SinglyLinkedList<T> {}
unsafe impl<T: Sync> Sync for SinglyLinkedList<T> {}

impl<T> SinglyLinkedList<T> {
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<&T> {
        // SAFETY: `head` is a live node owned by `self`
        self.head.map(|head| unsafe { &(*head.as_ptr()).value })
    }

    pub fn back(&self) -> Option<&T> {
        // SAFETY: `tail` is a live node owned by `self`
        self.tail.map(|tail| unsafe { &(*tail.as_ptr()).value })
    }

    /// Appends `value` as the new tail in O(1).
    pub fn insert_end(&mut self, value: T) {
        self.push_node(SinglyLinkedListNode::ptr_to_new(value));
    }

    /// Inserts `value` in front of the current head.
    pub fn insert_front(&mut self, value: T) {
        self.push_front_node(SinglyLinkedListNode::ptr_to_new(value));
    }

    /// Releases every node.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// The largest value in the list, or `T::MIN` when the list is empty.
    pub fn max(&self) -> T
    where
        T: Integer,
    {
        self.iter().copied().fold(T::MIN, core::cmp::max)
    }

    /// Copies the values out in list order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            node: self.head,
            remaining: self.len,
            marker: PhantomData,
        }
    }

    /// Links a detached `node` in after the current tail.
    fn push_node(&mut self, node: ElementPtr<T>) {
        // SAFETY: `node` is detached, so no other pointer reaches it, and
        // `tail` is a live node owned by `self`
        unsafe {
            (*node.as_ptr()).next = None;
            match self.tail {
                Some(tail) => (*tail.as_ptr()).next = Some(node),
                None => self.head = Some(node),
            }
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Links a detached `node` in before the current head.
    fn push_front_node(&mut self, node: ElementPtr<T>) {
        // SAFETY: `node` is detached, so no other pointer reaches it
        unsafe { (*node.as_ptr()).next = self.head };
        if self.head.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Unlinks the head node, handing it back still allocated. The caller
    /// either links it into a list again or frees it with
    /// [`SinglyLinkedListNode::into_value`].
    fn pop_node(&mut self) -> Option<ElementPtr<T>> {
        let node = self.head?;
        // SAFETY: `head` is a live node owned by `self`
        self.head = unsafe { (*node.as_ptr()).next.take() };
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(node)
    }

    /// Unlinks the tail node. O(n): the second to last node has to be found
    /// so it can become the new tail.
    fn pop_tail_node(&mut self) -> Option<ElementPtr<T>> {
        if self.len <= 1 {
            return self.pop_node();
        }
        let prev = self.node_at(self.len - 2)?;
        // SAFETY: `prev` is a live node owned by `self`
        let last = unsafe { (*prev.as_ptr()).next.take()? };
        self.tail = Some(prev);
        self.len -= 1;
        Some(last)
    }

    /// The node at 0-indexed `index`, `None` if `index >= len`.
    fn node_at(&self, index: usize) -> Link<T> {
        let mut current = self.head;
        for _ in 0..index {
            // SAFETY: every node reachable from `head` is live and owned by `self`
            current = unsafe { (*current?.as_ptr()).next };
        }
        current
    }

    /// Moves the whole chain out, leaving `self` empty.
    fn take_all(&mut self) -> Self {
        core::mem::take(self)
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        while let Some(node) = self.pop_node() {
            // SAFETY: `node` was just unlinked, nothing else points at it
            drop(unsafe { SinglyLinkedListNode::into_value(node) });
        }
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let len = self.len;
        write!(f, "SinglyLinkedList {{ length: {len}, items: {{")?;
        let mut iter = self.iter();
        if let Some(elem) = iter.next() {
            write!(f, "{elem:?}")?
        }
        for elem in iter {
            write!(f, ", {elem:?}")?;
        }
        write!(f, "}} }}")
    }
}

/// Space separated values, empty for an empty list.
impl<T: Display> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(elem) = iter.next() {
            write!(f, "{elem}")?
        }
        for elem in iter {
            write!(f, " {elem}")?;
        }
        Ok(())
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut lst = SinglyLinkedList::new();
        lst.extend(iter);
        lst
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for i in iter.into_iter() {
            self.insert_end(i);
        }
    }
}

pub(crate) struct SinglyLinkedListNode<T> {
    value: T,
    next: Link<T>,
}

/// WARNING: a node does not free its successors.
impl<T> SinglyLinkedListNode<T> {
    /// Allocates a detached node. It is freed by [`Self::into_value`].
    fn ptr_to_new(value: T) -> ElementPtr<T> {
        NonNull::from(Box::leak(Box::new(Self { value, next: None })))
    }

    /// Frees a node allocated by [`Self::ptr_to_new`] and returns its value.
    ///
    /// # Safety
    /// `node` must be detached: no list or other node may still point at it.
    unsafe fn into_value(node: ElementPtr<T>) -> T {
        Box::from_raw(node.as_ptr()).value
    }
}

impl<T: Debug> Debug for SinglyLinkedListNode<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::test_util::*;
    use super::SinglyLinkedList;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn new_and_insert() {
        let mut a = SinglyLinkedList::new();
        assert_list(&a, &[]);
        for i in 0..10 {
            a.insert_end(i);
            a.check_integrity().expect("broken after insert_end");
        }
        assert_list(&a, &(0..10).collect::<Vec<_>>());
        assert_eq!(a.front(), Some(&0));
        assert_eq!(a.back(), Some(&9));
        println!("list: {a:?}")
    }

    #[test]
    fn insert_front() {
        let mut a = SinglyLinkedList::new();
        a.insert_front(2);
        assert_list(&a, &[2]);
        a.insert_front(1);
        a.insert_end(3);
        assert_list(&a, &[1, 2, 3]);
    }

    #[test]
    fn single_element_is_head_and_tail() {
        let mut a = SinglyLinkedList::new();
        a.insert_end(7);
        assert_eq!(a.front(), a.back());
        assert_eq!(a.len(), 1);
        assert_list(&a, &[7]);
    }

    #[test]
    fn display_dump() {
        assert_eq!(list_of::<i32>(&[]).to_string(), "");
        assert_eq!(list_of(&[1]).to_string(), "1");
        assert_eq!(list_of(&[1, 3, 4, 5]).to_string(), "1 3 4 5");
    }

    #[test]
    fn debug_format() {
        let lst = list_of(&[1, 2, 3]);
        assert_eq!(
            format!("{lst:?}"),
            "SinglyLinkedList { length: 3, items: {1, 2, 3} }"
        );
    }

    #[test]
    fn clone_and_eq() {
        let a = list_of(&[4, 5, 6]);
        let mut b = a.clone();
        assert_eq!(a, b);
        assert_list(&b, &[4, 5, 6]);
        b.insert_end(7);
        assert_ne!(a, b);
    }

    #[test]
    fn clear_and_reuse() {
        let mut a = list_of(&[1, 2, 3]);
        a.clear();
        assert_list(&a, &[]);
        a.insert_end(9);
        assert_list(&a, &[9]);
    }

    #[test]
    fn max_value() {
        assert_eq!(list_of(&[3, -1, 8, 2]).max(), 8);
        assert_eq!(list_of(&[-5, -9]).max(), -5);
    }

    #[test]
    fn empty_list_max_and_delete() {
        let mut a: SinglyLinkedList<i32> = SinglyLinkedList::new();
        assert_eq!(a.max(), i32::MIN);
        assert_eq!(a.delete_first(), None);
        assert_list(&a, &[]);
    }

    #[test]
    fn max_does_not_recurse() {
        let a: SinglyLinkedList<u64> = (0..200_000).collect();
        assert_eq!(a.max(), 199_999);
    }

    #[test]
    fn long_list_drop() {
        let a: SinglyLinkedList<u32> = (0..1_000_000).collect();
        assert_eq!(a.len(), 1_000_000);
        drop(a);
    }

    #[test]
    fn into_iter_keeps_order() {
        let a = list_of(&[1, 2, 3]);
        assert_eq!(a.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn every_value_dropped_once() {
        let counter = DropCounter::default();
        let mut a: SinglyLinkedList<Tracked> = (0..20).map(|v| counter.track(v)).collect();
        a.delete_first();
        a.delete_tail();
        a.reverse();
        a.left_rotate(3);
        a.arrange_odd_and_even();
        a.delete_even_positions();
        assert_eq!(counter.dropped(), 11);

        a.swap_head_and_tail();
        a.insert_sorted(counter.track(10));
        let key = counter.track(7);
        a.move_to_back(&key);
        assert_eq!(
            a.iter().map(|t| t.value).collect::<Vec<_>>(),
            [10, 18, 11, 3, 17, 12, 8, 4, 15, 7]
        );
        assert_eq!(counter.dropped(), 11);
        assert_eq!(a.remove_last_occurrence(&key).as_ref().map(|t| t.value), Ok(7));
        assert_eq!(counter.dropped(), 12);
        drop(key);
        assert_eq!(counter.dropped(), 13);
        assert_eq!(a.len(), 9);
        drop(a);
        assert_eq!(counter.dropped(), 22);
    }

    #[test]
    fn relinking_then_appending_keeps_links_valid() {
        // each step writes through a tail that an earlier step relinked, which
        // is what miri needs to see to vouch for the pointer handling
        let mut a = list_of(&[1, 2]);
        a.delete_first();
        a.insert_end(3);
        a.append(&mut list_of(&[4]));
        assert_list(&a, &[2, 3, 4]);

        a.reverse();
        a.insert_end(5);
        a.append(&mut list_of(&[6, 7]));
        assert_list(&a, &[4, 3, 2, 5, 6, 7]);

        a.swap_head_and_tail();
        a.insert_end(8);
        a.append(&mut list_of(&[9]));
        assert_list(&a, &[7, 3, 2, 5, 6, 4, 8, 9]);

        assert_eq!(a.delete_tail(), Some(9));
        a.insert_end(10);
        a.left_rotate(1);
        a.insert_end(11);
        assert_list(&a, &[3, 2, 5, 6, 4, 8, 10, 7, 11]);
        assert_eq!((a.front(), a.back()), (Some(&3), Some(&11)));

        let mut single = list_of(&[1]);
        single.reverse();
        single.insert_end(2);
        single.swap_head_and_tail();
        single.insert_end(3);
        assert_list(&single, &[2, 1, 3]);
    }

    #[test]
    fn list_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SinglyLinkedList<i32>>();
        assert_send_sync::<SinglyLinkedList<String>>();
    }

    #[test]
    fn random_operations_against_vec() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut lst: SinglyLinkedList<i32> = SinglyLinkedList::new();
        let mut model: Vec<i32> = Vec::new();

        for _ in 0..5_000 {
            match rng.gen_range(0..8) {
                0 | 1 => {
                    let v = rng.gen_range(0..10);
                    lst.insert_end(v);
                    model.push(v);
                }
                2 => {
                    let got = lst.delete_first();
                    let expected = (!model.is_empty()).then(|| model.remove(0));
                    assert_eq!(got, expected);
                }
                3 => assert_eq!(lst.delete_tail(), model.pop()),
                4 => {
                    let v = rng.gen_range(0..10);
                    let got = lst.delete_node_with_key(&v).ok();
                    let expected = model.iter().position(|x| *x == v).map(|i| model.remove(i));
                    assert_eq!(got, expected);
                }
                5 => {
                    lst.reverse();
                    model.reverse();
                }
                6 => {
                    let k = rng.gen_range(0..12);
                    lst.left_rotate(k);
                    if !model.is_empty() {
                        let k = k % model.len();
                        model.rotate_left(k);
                    }
                }
                7 => {
                    let v = rng.gen_range(0..10);
                    lst.move_to_back(&v);
                    let (mut keep, moved): (Vec<_>, Vec<_>) =
                        model.iter().copied().partition(|x| *x != v);
                    keep.extend(moved);
                    model = keep;
                }
                _ => unreachable!(),
            }
            assert_list(&lst, &model);
        }
    }
}
