use super::{Link, SinglyLinkedList};
use crate::error::IntegrityError;

impl<T> SinglyLinkedList<T> {
    /// Walks the whole chain and checks head, tail and length against it.
    ///
    /// Meant for tests: a correct list can never fail this.
    pub fn check_integrity(&self) -> Result<(), IntegrityError> {
        let (head, tail) = (self.head.is_some(), self.tail.is_some());
        if (self.len == 0) != !head || (self.len == 0) != !tail {
            return Err(IntegrityError::EmptyMismatch {
                len: self.len,
                head,
                tail,
            });
        }

        // a relinking bug can close the chain into a cycle, so the walk gives
        // up one node past the cached length
        let mut counted = 0;
        let mut last: Link<T> = None;
        let mut current = self.head;
        while let Some(node) = current {
            if counted == self.len {
                return Err(IntegrityError::Unterminated { len: self.len });
            }
            counted += 1;
            last = Some(node);
            // SAFETY: every node reachable from `head` is live and owned by `self`
            current = unsafe { (*node.as_ptr()).next };
        }
        if counted != self.len {
            return Err(IntegrityError::LengthMismatch {
                cached: self.len,
                counted,
            });
        }

        if last != self.tail {
            return Err(IntegrityError::TailMismatch);
        }

        match self.len {
            1 if self.head != self.tail => Err(IntegrityError::HeadTailDistinct),
            len if len > 1 && self.head == self.tail => {
                Err(IntegrityError::HeadTailAliasing { len })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_util::*;
    use crate::error::IntegrityError;

    #[test]
    fn valid_lists_pass() {
        for len in 0..5 {
            let lst = list_of(&(0..len).collect::<Vec<_>>());
            assert_eq!(lst.check_integrity(), Ok(()));
        }
    }

    #[test]
    fn detects_wrong_length() {
        let mut lst = list_of(&[1, 2, 3]);
        lst.len = 4;
        assert_eq!(
            lst.check_integrity(),
            Err(IntegrityError::LengthMismatch {
                cached: 4,
                counted: 3
            })
        );
        lst.len = 2;
        assert_eq!(
            lst.check_integrity(),
            Err(IntegrityError::Unterminated { len: 2 })
        );
        lst.len = 3;
        assert_eq!(lst.check_integrity(), Ok(()));
    }

    #[test]
    fn detects_missing_tail() {
        let mut lst = list_of(&[1, 2]);
        let tail = lst.tail.take();
        assert_eq!(
            lst.check_integrity(),
            Err(IntegrityError::EmptyMismatch {
                len: 2,
                head: true,
                tail: false
            })
        );
        lst.tail = tail;
        assert_eq!(lst.check_integrity(), Ok(()));
    }

    #[test]
    fn detects_stale_tail() {
        let mut lst = list_of(&[1, 2, 3]);
        let tail = lst.tail;
        lst.tail = lst.head;
        assert_eq!(
            lst.check_integrity(),
            Err(IntegrityError::TailMismatch)
        );
        lst.tail = tail;
        assert_eq!(lst.check_integrity(), Ok(()));
    }

    #[test]
    fn detects_cycle() {
        let mut lst = list_of(&[1, 2, 3]);
        let (head, tail) = (lst.head, lst.tail.unwrap());
        unsafe { (*tail.as_ptr()).next = head };
        assert_eq!(
            lst.check_integrity(),
            Err(IntegrityError::Unterminated { len: 3 })
        );
        unsafe { (*tail.as_ptr()).next = None };
        assert_eq!(lst.check_integrity(), Ok(()));
    }
}
