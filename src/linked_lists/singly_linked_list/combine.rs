use super::SinglyLinkedList;
use crate::{error::ListError, traits::num::Integer};
use log::warn;

impl<T> SinglyLinkedList<T> {
    /// Moves all of `other`'s nodes onto the end of `self` in O(1).
    pub fn append(&mut self, other: &mut Self) {
        let Some(other_head) = other.head.take() else {
            return;
        };
        match self.tail {
            // SAFETY: `tail` is a live node owned by `self`
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(other_head) },
            None => self.head = Some(other_head),
        }
        self.tail = other.tail.take();
        self.len += core::mem::take(&mut other.len);
    }

    /// Splices `other`'s nodes in between this list's nodes:
    /// `self[0], other[0], self[1], other[1], ...`. Whatever remains of the
    /// longer list is appended unchanged and `other` is left empty.
    pub fn insert_alternating(&mut self, other: &mut Self) {
        let mut mine = self.take_all();
        while !mine.is_empty() && !other.is_empty() {
            if let Some(node) = mine.pop_node() {
                self.push_node(node);
            }
            if let Some(node) = other.pop_node() {
                self.push_node(node);
            }
        }
        self.append(&mut mine);
        self.append(other);
    }

    /// Reads both lists as decimal numbers stored least significant digit
    /// first and returns their sum in the same form.
    ///
    /// Elements are expected to be digits. Larger elements are still summed
    /// position by position with a carry, and [`ListError::Overflow`] is
    /// returned if one of those sums does not fit in `T`.
    pub fn add_as_numbers(&self, other: &Self) -> Result<Self, ListError>
    where
        T: Integer,
    {
        let mut sum = Self::new();
        let (mut lhs, mut rhs) = (self.iter(), other.iter());
        let mut carry = T::ZERO;
        loop {
            let (a, b) = (lhs.next(), rhs.next());
            if a.is_none() && b.is_none() {
                break;
            }
            let total = a
                .copied()
                .unwrap_or(T::ZERO)
                .checked_add(b.copied().unwrap_or(T::ZERO))
                .and_then(|total| total.checked_add(carry));
            let Some(total) = total else {
                warn!("add_as_numbers: overflow at digit {}", sum.len);
                return Err(ListError::Overflow);
            };
            sum.insert_end(total % T::TEN);
            carry = total / T::TEN;
        }
        if carry != T::ZERO {
            sum.insert_end(carry);
        }
        Ok(sum)
    }
}
